//! Schema-level machinery: property reflection, field aliasing, entity
//! attribute surfaces, and the legacy-compatibility verifier.

pub mod aliases;
pub mod compat;
pub mod property;
pub mod surface;
pub mod surfaces;

pub use aliases::{AliasError, AliasTable};
pub use compat::{verify, CompatibilityGap, CompatibilityReport, LegacySurface, RenameTable};
pub use property::{FieldValue, PropertyAccess, PropertyError, PropertyValue};
pub use surface::{AttributeKind, EntitySurface};
pub use surfaces::SchemaRegistry;
