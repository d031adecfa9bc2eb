//! # Schema Subcommand
//!
//! Writes the self-describing field catalogue for `EntityMetadata`.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use mforge_schema::SchemaDefinition;

/// Arguments for the `mforge schema` subcommand.
#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Output file path (use - for stdout).
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Execute the schema subcommand.
pub fn run_schema(args: &SchemaArgs) -> Result<u8> {
    let definition = SchemaDefinition::entity_metadata();
    tracing::debug!(
        identifier = %definition.schema_identifier,
        fields = definition.schema_fields.len(),
        "built schema definition"
    );

    let output = args.output.as_deref();
    if crate::write_json_output(&definition, output)? {
        if let Some(path) = output {
            println!("Schema written to {}", path.display());
        }
    }

    Ok(0)
}
