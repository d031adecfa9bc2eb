//! # Error Types
//!
//! Errors shared by the metadata-forge crates. All errors use `thiserror`
//! for derive-based `Display` and `Error` implementations.
//!
//! Validation findings are not errors: the validator reports them as data
//! (see `mforge_schema::ValidationErrors`). The variants here cover the
//! operations that genuinely fail, such as converting a typed record to
//! JSON or parsing an unknown entity kind.

use thiserror::Error;

/// Top-level error type for metadata-forge.
#[derive(Error, Debug)]
pub enum MforgeError {
    /// A string did not name one of the fixed entity kinds.
    #[error("unknown entity kind: {0:?}")]
    UnknownEntityKind(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Rendered output was not valid UTF-8.
    #[error("encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}
