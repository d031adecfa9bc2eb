//! # mforge-cli — CLI Tool for metadata-forge
//!
//! Provides the `mforge` command-line interface over the template builder,
//! validator and field catalogue in `mforge-schema`.
//!
//! ## Subcommands
//!
//! - `mforge template` — Write an empty metadata template.
//! - `mforge validate` — Validate a metadata document (JSON or YAML).
//! - `mforge schema` — Write the self-describing field catalogue.
//! - `mforge version` — Print the tool name and version.
//!
//! ```bash
//! mforge template -o parse_config.json
//! mforge validate parse_config.json
//! ```
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to `mforge-schema`; no validation rules here.
//! - File I/O and document parsing happen only in this crate.

pub mod document;
pub mod schema;
pub mod template;
pub mod validate;

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

/// Tool name reported by `mforge version`.
pub const TOOL_NAME: &str = "metadata_forge";

/// The line printed by `mforge version`.
pub fn version_line() -> String {
    format!("{TOOL_NAME} v{}", env!("CARGO_PKG_VERSION"))
}

/// Where JSON output should go: `None` or `-` means standard output.
pub fn is_stdout(output: Option<&Path>) -> bool {
    output.map_or(true, |path| path.as_os_str() == "-")
}

/// Serialize `value` as 2-space-indented JSON.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to serialize JSON output")
}

/// Write `value` as 2-space-indented JSON to `output`, or to stdout.
///
/// Returns `true` when a file was written.
pub fn write_json_output<T: Serialize>(value: &T, output: Option<&Path>) -> Result<bool> {
    let json = to_pretty_json(value)?;
    match output {
        Some(path) if !is_stdout(output) => {
            let mut file = std::fs::File::create(path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            write!(file, "{json}")
                .with_context(|| format!("cannot write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = json.len(), "wrote JSON output");
            Ok(true)
        }
        _ => {
            println!("{json}");
            Ok(false)
        }
    }
}
