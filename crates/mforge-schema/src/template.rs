//! # Metadata Template
//!
//! Builds the canonical empty record that authors start from: every
//! required string empty, `returns` present with empty sub-fields, and
//! every optional section present with null placeholders. List-valued
//! sub-fields start as empty lists rather than null.

use mforge_core::{
    BehavioralNotesDef, EntityMetadata, InteractionsDef, ModifiabilityDef, PerformanceProfileDef,
    ReturnDef, TestVerificationDef, TraceabilityDef,
};
use serde_json::Value;

/// Create an empty metadata template with every section present.
///
/// Each call returns an independent record.
pub fn create_metadata_template() -> EntityMetadata {
    EntityMetadata {
        entity: String::new(),
        identifier: String::new(),
        version: String::new(),
        purpose: String::new(),
        context: String::new(),
        parameters: Vec::new(),
        returns: ReturnDef::default(),
        test_verification: Some(TestVerificationDef {
            edge_case_coverage: Some(Vec::new()),
            ..TestVerificationDef::default()
        }),
        performance_profile: Some(PerformanceProfileDef::default()),
        behavioral_notes: Some(BehavioralNotesDef::default()),
        interactions: Some(InteractionsDef::default()),
        modifiability: Some(ModifiabilityDef {
            expansion_notes: None,
            composable_with: Some(Vec::new()),
        }),
        programmatic_traceability: Some(TraceabilityDef::default()),
    }
}

/// The template as an untyped JSON value, ready to write or validate.
pub fn metadata_template_value() -> Value {
    // Only string keys, strings, lists and nulls: serialization cannot fail.
    serde_json::to_value(create_metadata_template())
        .expect("metadata template serializes to JSON")
}
