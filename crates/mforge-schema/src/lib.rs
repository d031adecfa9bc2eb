//! # mforge-schema — Templates, Validation & Field Catalogue
//!
//! The logic behind metadata-forge. Everything here is a pure function over
//! in-memory values: no file I/O, no JSON parsing from text, no shared
//! state. Loading documents from disk is the CLI's job.
//!
//! ## Template Builder (`template`)
//!
//! [`create_metadata_template`] returns a fresh [`EntityMetadata`] with
//! every section present and empty, the starting point for authors.
//!
//! ## Validator (`validate`)
//!
//! [`validate_metadata`] applies the fixed rule set to an untrusted JSON
//! record and returns [`ValidationErrors`], a field → messages mapping.
//! An empty mapping means the record is valid. Findings are data; the
//! validator never returns `Err` and never panics.
//!
//! ## Field Catalogue (`definition`)
//!
//! [`SchemaDefinition::entity_metadata`] describes every record field
//! (type, requirement, allowed values, example) as a serializable value.
//!
//! [`EntityMetadata`]: mforge_core::EntityMetadata

pub mod definition;
pub mod template;
pub mod validate;

pub use definition::{MetadataField, Requirement, SchemaDefinition, SCHEMA_VERSION};
pub use template::{create_metadata_template, metadata_template_value};
pub use validate::{is_truthy, validate_entity, validate_metadata, ValidationErrors, REQUIRED_FIELDS};
