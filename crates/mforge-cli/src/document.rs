//! # Document Loading
//!
//! Reads a metadata document from disk into an untyped JSON value for the
//! validator. The format is chosen from the file extension: `.yaml` and
//! `.yml` are parsed as YAML, anything else as JSON.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

/// Input format of a metadata document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Infer the format from a file extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Parse document text in the given format.
pub fn parse_document(content: &str, format: DocumentFormat) -> Result<Value> {
    match format {
        DocumentFormat::Json => serde_json::from_str(content).context("invalid JSON"),
        DocumentFormat::Yaml => serde_yaml::from_str(content).context("invalid YAML"),
    }
}

/// Read and parse the document at `path`.
pub fn load_document(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read file {}", path.display()))?;
    let format = DocumentFormat::from_path(path);
    tracing::debug!(path = %path.display(), ?format, "loading metadata document");
    parse_document(&content, format).with_context(|| format!("cannot parse {}", path.display()))
}
