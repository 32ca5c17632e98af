//! Data model for a renal patient registry: the clinical entity graph rooted
//! at [`models::PatientRecord`], the identity-matching graph in [`empi`], the
//! shared coded-value catalog in [`catalog`], and the cross-version field
//! aliasing and compatibility machinery in [`schema`].

// Lets the derive macros in `macros/` emit absolute paths that resolve both
// inside this crate and in downstream crates.
extern crate self as registry_models;

pub mod catalog;
pub mod empi;
pub mod error;
pub mod models;
pub mod schema;
pub mod store;

// Re-export the most common types for easier use
// Core types
pub use catalog::{CodeCatalog, CodeEntry};
pub use error::{ModelError, Result};

// Aliasing and compatibility
pub use schema::{
    AliasTable, AttributeKind, CompatibilityGap, CompatibilityReport, EntitySurface, FieldValue,
    LegacySurface, PropertyAccess, RenameTable, SchemaRegistry,
};

// Storage
pub use store::{DeleteSummary, EmpiStore, RegistryStore};
