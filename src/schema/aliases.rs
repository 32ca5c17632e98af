//! Field aliasing: alternate attribute names resolving to the same stored
//! column.
//!
//! Alias tables are declared statically per entity and validated when they
//! are built, so a broken declaration fails at registration time rather than
//! on first access. Once published an alias is never removed; external
//! callers are allowed to depend on it indefinitely.

use rustc_hash::FxHashMap;

use crate::schema::property::{FieldValue, PropertyAccess, PropertyError};

/// Errors raised while building an alias table
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AliasError {
    /// The canonical target is neither a column nor a computed attribute
    #[error("alias {entity}.{alias} targets unknown attribute {canonical}")]
    UnknownCanonical {
        /// Entity type name
        entity: &'static str,
        /// The declared alias
        alias: &'static str,
        /// The missing canonical target
        canonical: &'static str,
    },

    /// The canonical target is itself declared as an alias
    #[error("alias {entity}.{alias} targets another alias {canonical}")]
    AliasChain {
        /// Entity type name
        entity: &'static str,
        /// The declared alias
        alias: &'static str,
        /// The target that is itself an alias
        canonical: &'static str,
    },

    /// The alias name collides with a real column or computed attribute
    #[error("alias {entity}.{alias} shadows an existing attribute")]
    ShadowsAttribute {
        /// Entity type name
        entity: &'static str,
        /// The colliding alias
        alias: &'static str,
    },

    /// The same alias name is declared twice
    #[error("alias {entity}.{alias} declared more than once")]
    Duplicate {
        /// Entity type name
        entity: &'static str,
        /// The repeated alias
        alias: &'static str,
    },
}

/// A validated table of `(alias, canonical)` pairs for one entity.
///
/// Reads and writes through an alias are pure passthroughs to the canonical
/// property; there is no separate storage and no side effect.
#[derive(Debug, Clone)]
pub struct AliasTable {
    entity: &'static str,
    map: FxHashMap<&'static str, &'static str>,
}

impl AliasTable {
    /// Build and validate an alias table for entity type `T`.
    ///
    /// `computed` lists attribute names that exist on the entity but are not
    /// stored columns (derived projections, resolver-backed descriptions);
    /// they are legal canonical targets and illegal alias names.
    pub fn build<T: PropertyAccess>(
        pairs: &[(&'static str, &'static str)],
        computed: &[&'static str],
    ) -> Result<Self, AliasError> {
        let entity = T::entity();
        let columns = T::property_names();
        let mut map = FxHashMap::default();

        for &(alias, canonical) in pairs {
            if columns.contains(&alias) || computed.contains(&alias) {
                return Err(AliasError::ShadowsAttribute { entity, alias });
            }
            if map.insert(alias, canonical).is_some() {
                return Err(AliasError::Duplicate { entity, alias });
            }
        }

        // Second pass, once every alias name is known: a canonical target may
        // be a column or a computed attribute, never another alias.
        for &(alias, canonical) in pairs {
            if map.contains_key(canonical) {
                return Err(AliasError::AliasChain {
                    entity,
                    alias,
                    canonical,
                });
            }
            if !columns.contains(&canonical) && !computed.contains(&canonical) {
                return Err(AliasError::UnknownCanonical {
                    entity,
                    alias,
                    canonical,
                });
            }
        }

        Ok(Self { entity, map })
    }

    /// The entity type name this table belongs to
    #[must_use]
    pub fn entity(&self) -> &'static str {
        self.entity
    }

    /// Map an alias to its canonical name; non-alias names pass through
    #[must_use]
    pub fn resolve<'n>(&self, name: &'n str) -> &'n str {
        self.map.get(name).copied().unwrap_or(name)
    }

    /// True if `name` is a declared alias
    #[must_use]
    pub fn is_alias(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Iterate over the declared alias names
    pub fn alias_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.map.keys().copied()
    }

    /// Number of declared aliases
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True if no aliases are declared
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Read a property through any of its names
    pub fn get<T: PropertyAccess>(&self, entity: &T, name: &str) -> Option<FieldValue> {
        entity.property(self.resolve(name))
    }

    /// Write a property through any of its names
    pub fn set<T: PropertyAccess>(
        &self,
        entity: &mut T,
        name: &str,
        value: FieldValue,
    ) -> Result<(), PropertyError> {
        entity.set_property(self.resolve(name), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macros::PropertyField;

    #[derive(Debug, Clone, PropertyField)]
    struct Row {
        #[property(name = "field_name")]
        field_name: Option<String>,

        #[property(name = "upload_key")]
        upload_key: String,
    }

    fn row() -> Row {
        Row {
            field_name: None,
            upload_key: "K1".to_string(),
        }
    }

    #[test]
    fn alias_reads_and_writes_the_same_cell() {
        let table =
            AliasTable::build::<Row>(&[("feild_name", "field_name")], &[]).unwrap();
        let mut row = row();

        table
            .set(&mut row, "feild_name", FieldValue::Str("SURNAME".to_string()))
            .unwrap();
        assert_eq!(row.field_name.as_deref(), Some("SURNAME"));
        assert_eq!(
            table.get(&row, "field_name"),
            Some(FieldValue::Str("SURNAME".to_string()))
        );

        table
            .set(&mut row, "field_name", FieldValue::Str("FORENAME".to_string()))
            .unwrap();
        assert_eq!(
            table.get(&row, "feild_name"),
            Some(FieldValue::Str("FORENAME".to_string()))
        );
    }

    #[test]
    fn unknown_canonical_fails_at_build_time() {
        let err = AliasTable::build::<Row>(&[("legacy", "missing")], &[]).unwrap_err();
        assert_eq!(
            err,
            AliasError::UnknownCanonical {
                entity: "Row",
                alias: "legacy",
                canonical: "missing",
            }
        );
    }

    #[test]
    fn alias_chains_are_rejected() {
        let err = AliasTable::build::<Row>(
            &[("feild_name", "field_name"), ("feeld_name", "feild_name")],
            &[],
        )
        .unwrap_err();
        assert!(matches!(err, AliasError::AliasChain { .. }));
    }

    #[test]
    fn shadowing_a_column_is_rejected() {
        let err =
            AliasTable::build::<Row>(&[("upload_key", "field_name")], &[]).unwrap_err();
        assert_eq!(
            err,
            AliasError::ShadowsAttribute {
                entity: "Row",
                alias: "upload_key",
            }
        );
    }

    #[test]
    fn computed_targets_are_valid() {
        let table =
            AliasTable::build::<Row>(&[("display", "label")], &["label"]).unwrap();
        assert_eq!(table.resolve("display"), "label");
    }
}
