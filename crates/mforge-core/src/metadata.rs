//! # EntityMetadata — Typed Record Shape
//!
//! The typed form of a metadata record. Every section of the record is a
//! plain value type; nothing here owns anything else and nothing carries
//! identity beyond the `identifier` string.
//!
//! Optional sections are `Option<T>` and serialize as `null` when absent,
//! so a record always serializes with the full key set. Nullable lists
//! (`edge_case_coverage`, `composable_with`) are `Option<Vec<String>>`;
//! the four `interactions` lists are plain `Vec<String>` and default to
//! empty.
//!
//! The typed record is what authors build and what the template builder
//! produces. Validation runs on the untyped JSON form, since records read
//! from disk are structurally untrusted; use [`EntityMetadata::to_value`]
//! to bridge the two.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::entity::EntityKind;
use crate::error::MforgeError;

/// A single parameter of a function or script.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParameterDef {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub optional: bool,
    /// Default value, if the parameter has one.
    #[serde(default)]
    pub default: Option<Value>,
    pub description: String,
}

/// The value an artifact produces.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReturnDef {
    #[serde(rename = "type")]
    pub type_name: String,
    pub description: String,
}

/// Where and how the artifact is tested.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TestVerificationDef {
    #[serde(default)]
    pub unit_tests: Option<String>,
    #[serde(default)]
    pub integration_tests: Option<String>,
    #[serde(default)]
    pub edge_case_coverage: Option<Vec<String>>,
}

/// Cost characteristics, free-form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PerformanceProfileDef {
    #[serde(default)]
    pub execution_time: Option<String>,
    #[serde(default)]
    pub memory_usage: Option<String>,
    #[serde(default)]
    pub cpu_usage: Option<String>,
    #[serde(default)]
    pub recursion_complexity: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BehavioralNotesDef {
    #[serde(default)]
    pub concurrency_handling: Option<String>,
    #[serde(default)]
    pub error_handling: Option<String>,
    #[serde(default)]
    pub additional_notes: Option<String>,
}

/// Links from this artifact to other artifacts, by identifier.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InteractionsDef {
    #[serde(default)]
    pub calls: Vec<String>,
    #[serde(default)]
    pub called_by: Vec<String>,
    #[serde(default)]
    pub depends_on: Vec<String>,
    #[serde(default)]
    pub modifies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModifiabilityDef {
    #[serde(default)]
    pub expansion_notes: Option<String>,
    #[serde(default)]
    pub composable_with: Option<Vec<String>>,
}

/// Source-control provenance of the artifact.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TraceabilityDef {
    #[serde(default)]
    pub change_log: Option<String>,
    #[serde(default)]
    pub commit_hash: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub time_since_last_edit: Option<String>,
}

/// Metadata describing one software artifact.
///
/// `entity` is kept as a string rather than an [`EntityKind`] so that
/// templates (empty entity) and records with unknown kinds can still be
/// represented and handed to the validator. Use [`EntityMetadata::kind`]
/// for the typed view.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EntityMetadata {
    pub entity: String,
    pub identifier: String,
    /// Semantic version, commit hash, or timestamp.
    pub version: String,
    /// What the artifact does.
    pub purpose: String,
    /// How it fits into the larger system.
    pub context: String,
    /// Required for functions and scripts.
    #[serde(default)]
    pub parameters: Vec<ParameterDef>,
    pub returns: ReturnDef,
    #[serde(default)]
    pub test_verification: Option<TestVerificationDef>,
    #[serde(default)]
    pub performance_profile: Option<PerformanceProfileDef>,
    #[serde(default)]
    pub behavioral_notes: Option<BehavioralNotesDef>,
    #[serde(default)]
    pub interactions: Option<InteractionsDef>,
    #[serde(default)]
    pub modifiability: Option<ModifiabilityDef>,
    #[serde(default)]
    pub programmatic_traceability: Option<TraceabilityDef>,
}

impl EntityMetadata {
    /// The typed entity kind, or `None` if `entity` is empty or unknown.
    pub fn kind(&self) -> Option<EntityKind> {
        self.entity.parse().ok()
    }

    /// Convert to the untyped JSON form used by the validator.
    ///
    /// # Errors
    ///
    /// Returns `MforgeError::Serialization` if a `default` parameter value
    /// cannot be represented as JSON.
    pub fn to_value(&self) -> Result<Value, MforgeError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Parse a typed record from an untyped JSON value.
    ///
    /// # Errors
    ///
    /// Returns `MforgeError::Serialization` if the value does not have the
    /// record's shape. Untrusted input should go through the validator
    /// first; this conversion is strict about types.
    pub fn from_value(value: Value) -> Result<Self, MforgeError> {
        Ok(serde_json::from_value(value)?)
    }
}
