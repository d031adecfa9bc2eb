//! # Entity Kind — Artifact Taxonomy
//!
//! Defines the `EntityKind` enum with the ten categories of artifact that a
//! metadata record may describe. This is the one definition of the allowed
//! values for the `entity` field; the validator's allow-list and the schema
//! definition's `allowed_values` are both derived from it.
//!
//! The serialized form is the human-readable name (`"API Endpoint"`,
//! `"Example Code"`), not a snake_case identifier, because metadata files
//! are authored by hand.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::MforgeError;

/// The category of artifact a metadata record documents.
///
/// | # | Kind | Serialized |
/// |---|------|------------|
/// |  1 | Function | `Function` |
/// |  2 | Class | `Class` |
/// |  3 | Module | `Module` |
/// |  4 | Script | `Script` |
/// |  5 | Configuration | `Configuration` |
/// |  6 | Test | `Test` |
/// |  7 | ApiEndpoint | `API Endpoint` |
/// |  8 | Constant | `Constant` |
/// |  9 | Documentation | `Documentation` |
/// | 10 | ExampleCode | `Example Code` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// A free function or method.
    Function,
    /// A class, struct or other nominal type.
    Class,
    /// A module or package.
    Module,
    /// An executable script.
    Script,
    /// A configuration file or block.
    Configuration,
    /// A test case or suite.
    Test,
    /// A network-facing API endpoint.
    #[serde(rename = "API Endpoint")]
    ApiEndpoint,
    /// A named constant.
    Constant,
    /// A documentation artifact.
    Documentation,
    /// A worked usage example.
    #[serde(rename = "Example Code")]
    ExampleCode,
}

/// Total number of entity kinds.
pub const ENTITY_KIND_COUNT: usize = 10;

impl EntityKind {
    /// Returns all entity kinds in canonical order.
    pub fn all() -> &'static [EntityKind] {
        &[
            Self::Function,
            Self::Class,
            Self::Module,
            Self::Script,
            Self::Configuration,
            Self::Test,
            Self::ApiEndpoint,
            Self::Constant,
            Self::Documentation,
            Self::ExampleCode,
        ]
    }

    /// Returns the display name, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Function => "Function",
            Self::Class => "Class",
            Self::Module => "Module",
            Self::Script => "Script",
            Self::Configuration => "Configuration",
            Self::Test => "Test",
            Self::ApiEndpoint => "API Endpoint",
            Self::Constant => "Constant",
            Self::Documentation => "Documentation",
            Self::ExampleCode => "Example Code",
        }
    }

    /// Whether records of this kind must carry a `parameters` list.
    pub fn requires_parameters(&self) -> bool {
        matches!(self, Self::Function | Self::Script)
    }

    /// All display names in canonical order.
    pub fn names() -> Vec<&'static str> {
        Self::all().iter().map(EntityKind::as_str).collect()
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = MforgeError;

    /// Parse an entity kind from its exact display name. Case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| MforgeError::UnknownEntityKind(s.to_string()))
    }
}
