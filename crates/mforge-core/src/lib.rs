//! # mforge-core — Foundational Types for metadata-forge
//!
//! Defines the record shape that every metadata document follows and the
//! taxonomy of artifacts it can describe. Every other crate in the
//! workspace depends on `mforge-core`; it depends on nothing internal.
//!
//! ## Key Types
//!
//! - [`EntityKind`] — the ten artifact categories (`Function`, `Class`,
//!   `Module`, ..., `Example Code`). One definition, used by the validator
//!   allow-list and the schema catalogue alike.
//! - [`EntityMetadata`] — the typed record with its nested definitions
//!   ([`ParameterDef`], [`ReturnDef`], and the six optional sections).
//! - [`MforgeError`] — the shared error type.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `mforge-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone` (errors excepted) and
//!   implement `Serialize`/`Deserialize`.

pub mod entity;
pub mod error;
pub mod metadata;

pub use entity::{EntityKind, ENTITY_KIND_COUNT};
pub use error::MforgeError;
pub use metadata::{
    BehavioralNotesDef, EntityMetadata, InteractionsDef, ModifiabilityDef, ParameterDef,
    PerformanceProfileDef, ReturnDef, TestVerificationDef, TraceabilityDef,
};
