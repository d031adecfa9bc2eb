//! # Template Subcommand
//!
//! Writes an empty metadata template as 2-space-indented JSON.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use mforge_schema::create_metadata_template;

/// Arguments for the `mforge template` subcommand.
#[derive(Args, Debug)]
pub struct TemplateArgs {
    /// Output file path (use - for stdout).
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Execute the template subcommand.
///
/// Returns exit code 0; write failures propagate as errors.
pub fn run_template(args: &TemplateArgs) -> Result<u8> {
    let template = create_metadata_template();
    let output = args.output.as_deref();

    if crate::write_json_output(&template, output)? {
        if let Some(path) = output {
            println!("Template written to {}", path.display());
        }
    }

    Ok(0)
}
