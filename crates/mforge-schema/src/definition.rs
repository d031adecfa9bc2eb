//! # Schema Definition — Self-Describing Field Catalogue
//!
//! Describes the `EntityMetadata` record shape as data: one
//! [`MetadataField`] per top-level field with its type, requirement level,
//! description, allowed values and an example. The catalogue is what the
//! `mforge schema` command prints, so that tools and authors can discover
//! the shape without reading the source.
//!
//! The field table is static; the enclosing [`SchemaDefinition`] adds an
//! identifier stamped with the creation time.

use chrono::{DateTime, Utc};
use mforge_core::{EntityKind, MforgeError};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Version of the metadata schema described by this catalogue.
pub const SCHEMA_VERSION: &str = "v1.0.0";

/// Prefix of every schema identifier; the creation time in Unix seconds
/// is appended.
pub const SCHEMA_IDENTIFIER_PREFIX: &str = "eidosian_metadata_schema_v1.0_";

/// How strictly a field is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Requirement {
    Required,
    Optional,
    /// Required only for some entity kinds.
    Conditional,
}

/// Definition of one metadata field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataField {
    pub field_name: String,
    pub data_type: String,
    pub requirement: Requirement,
    pub description: String,
    pub allowed_values: Option<Vec<String>>,
    pub example: Option<Value>,
}

/// Static description of a field, expanded into a [`MetadataField`].
struct FieldSpec {
    name: &'static str,
    data_type: &'static str,
    requirement: Requirement,
    description: &'static str,
}

/// Catalogue of the top-level `EntityMetadata` fields, in record order.
const FIELD_SPECS: &[FieldSpec] = &[
    FieldSpec {
        name: "entity",
        data_type: "string",
        requirement: Requirement::Required,
        description: "Category of the artifact being documented",
    },
    FieldSpec {
        name: "identifier",
        data_type: "string",
        requirement: Requirement::Required,
        description: "Unique identifier for the artifact",
    },
    FieldSpec {
        name: "version",
        data_type: "string",
        requirement: Requirement::Required,
        description: "Semantic version, commit hash, or timestamp",
    },
    FieldSpec {
        name: "purpose",
        data_type: "string",
        requirement: Requirement::Required,
        description: "What the artifact does",
    },
    FieldSpec {
        name: "context",
        data_type: "string",
        requirement: Requirement::Required,
        description: "How the artifact fits into the larger system",
    },
    FieldSpec {
        name: "parameters",
        data_type: "list[ParameterDef]",
        requirement: Requirement::Conditional,
        description: "Inputs accepted by the artifact; required for functions and scripts",
    },
    FieldSpec {
        name: "returns",
        data_type: "ReturnDef",
        requirement: Requirement::Required,
        description: "Type and meaning of the value the artifact produces",
    },
    FieldSpec {
        name: "test_verification",
        data_type: "TestVerificationDef",
        requirement: Requirement::Optional,
        description: "Unit and integration test locations and edge cases covered",
    },
    FieldSpec {
        name: "performance_profile",
        data_type: "PerformanceProfileDef",
        requirement: Requirement::Optional,
        description: "Execution time, memory, CPU and recursion characteristics",
    },
    FieldSpec {
        name: "behavioral_notes",
        data_type: "BehavioralNotesDef",
        requirement: Requirement::Optional,
        description: "Concurrency handling, error handling and other behavior",
    },
    FieldSpec {
        name: "interactions",
        data_type: "InteractionsDef",
        requirement: Requirement::Optional,
        description: "Artifacts this one calls, is called by, depends on, or modifies",
    },
    FieldSpec {
        name: "modifiability",
        data_type: "ModifiabilityDef",
        requirement: Requirement::Optional,
        description: "Expansion notes and artifacts this one composes with",
    },
    FieldSpec {
        name: "programmatic_traceability",
        data_type: "TraceabilityDef",
        requirement: Requirement::Optional,
        description: "Change log, commit hash, tag and time since last edit",
    },
];

fn example_for(name: &str) -> Option<Value> {
    let example = match name {
        "entity" => json!("Function"),
        "identifier" => json!("parse_config"),
        "version" => json!("1.0.0"),
        "purpose" => json!("Parses a configuration file into typed settings"),
        "context" => json!("Called once at startup by the service bootstrap"),
        "parameters" => json!([{
            "name": "path",
            "type": "str",
            "optional": false,
            "default": null,
            "description": "Location of the configuration file"
        }]),
        "returns" => json!({"type": "Settings", "description": "Parsed settings"}),
        "interactions" => json!({
            "calls": ["read_file"],
            "called_by": ["main"],
            "depends_on": [],
            "modifies": []
        }),
        _ => return None,
    };
    Some(example)
}

impl FieldSpec {
    fn to_field(&self) -> MetadataField {
        let allowed_values = (self.name == "entity").then(|| {
            EntityKind::all()
                .iter()
                .map(|kind| kind.as_str().to_string())
                .collect()
        });
        MetadataField {
            field_name: self.name.to_string(),
            data_type: self.data_type.to_string(),
            requirement: self.requirement,
            description: self.description.to_string(),
            allowed_values,
            example: example_for(self.name),
        }
    }
}

/// Complete, self-describing metadata schema definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaDefinition {
    pub schema_entity: String,
    pub schema_identifier: String,
    pub schema_version: String,
    pub schema_purpose: String,
    pub schema_context: String,
    pub schema_fields: Vec<MetadataField>,
    pub schema_modifiability: Map<String, Value>,
    pub schema_traceability: Map<String, Value>,
}

impl SchemaDefinition {
    /// An empty definition (no fields) created at `created_at`.
    pub fn new(created_at: DateTime<Utc>) -> Self {
        Self {
            schema_entity: "Metadata Schema".to_string(),
            schema_identifier: format!("{SCHEMA_IDENTIFIER_PREFIX}{}", created_at.timestamp()),
            schema_version: SCHEMA_VERSION.to_string(),
            schema_purpose:
                "Provides a universal, self-documenting metadata framework for code artifacts"
                    .to_string(),
            schema_context:
                "Operates within system-wide introspection and automated analysis framework"
                    .to_string(),
            schema_fields: Vec::new(),
            schema_modifiability: Map::new(),
            schema_traceability: Map::new(),
        }
    }

    /// The full `EntityMetadata` catalogue, stamped with `created_at`.
    pub fn entity_metadata_at(created_at: DateTime<Utc>) -> Self {
        let mut definition = Self::new(created_at);
        definition.schema_fields = FIELD_SPECS.iter().map(FieldSpec::to_field).collect();
        definition.schema_modifiability.insert(
            "expansion_notes".to_string(),
            json!("New optional sections may be added without breaking existing records"),
        );
        definition
            .schema_traceability
            .insert("created_at".to_string(), json!(created_at.to_rfc3339()));
        definition
    }

    /// The full `EntityMetadata` catalogue, stamped with the current time.
    pub fn entity_metadata() -> Self {
        Self::entity_metadata_at(Utc::now())
    }

    /// Look up a field definition by name.
    pub fn field(&self, name: &str) -> Option<&MetadataField> {
        self.schema_fields.iter().find(|f| f.field_name == name)
    }

    /// Convert to a JSON value.
    ///
    /// # Errors
    ///
    /// Returns `MforgeError::Serialization` if an example value cannot be
    /// serialized.
    pub fn to_value(&self) -> Result<Value, MforgeError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Render as JSON indented by `indent` spaces per level.
    ///
    /// # Errors
    ///
    /// Returns `MforgeError::Serialization` if serialization fails, or
    /// `MforgeError::Encoding` if the output is not valid UTF-8.
    pub fn to_json(&self, indent: usize) -> Result<String, MforgeError> {
        let indent = " ".repeat(indent);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut out = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
        self.serialize(&mut serializer)?;
        Ok(String::from_utf8(out)?)
    }
}
