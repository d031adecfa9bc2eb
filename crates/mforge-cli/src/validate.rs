//! # Validate Subcommand
//!
//! Loads a metadata document and runs the validator over it. Read and
//! parse failures are reported as `Error: <message>` with exit code 1,
//! the same exit code as an invalid record, so scripts only need to check
//! for zero.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use mforge_schema::{validate_metadata, ValidationErrors};

use crate::document::load_document;

/// Arguments for the `mforge validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Metadata file to validate (JSON, or YAML by .yaml/.yml extension).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Human-readable report for a validation result.
pub fn render_report(errors: &ValidationErrors) -> String {
    if errors.is_empty() {
        "Metadata is valid".to_string()
    } else {
        format!("Validation errors:\n{errors}")
    }
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 when the record is valid, 1 when it is invalid or
/// cannot be read or parsed.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let document = match load_document(&args.file) {
        Ok(document) => document,
        Err(e) => {
            println!("Error: {e:#}");
            return Ok(1);
        }
    };

    let errors = validate_metadata(&document);
    tracing::info!(
        file = %args.file.display(),
        fields_with_errors = errors.len(),
        "validated metadata document"
    );

    println!("{}", render_report(&errors));

    if errors.is_empty() {
        Ok(0)
    } else {
        Ok(1)
    }
}
