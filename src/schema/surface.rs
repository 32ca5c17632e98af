//! Entity attribute surfaces.
//!
//! An [`EntitySurface`] is the full set of public attribute names an entity
//! exposes, each tagged with how it is represented. The compatibility
//! verifier treats all three kinds uniformly.

use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::schema::aliases::AliasTable;
use crate::schema::property::PropertyAccess;

/// How an exposed attribute is represented on the entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    /// A stored column
    Column,
    /// An alternate name for a stored column
    Alias,
    /// A derived projection or resolver-backed accessor
    Computed,
}

/// The public attribute surface of one entity
#[derive(Debug, Clone)]
pub struct EntitySurface {
    entity: &'static str,
    attrs: FxHashMap<&'static str, AttributeKind>,
}

impl EntitySurface {
    /// Assemble the surface of entity type `T` from its columns, alias table,
    /// and computed attribute names.
    #[must_use]
    pub fn of<T: PropertyAccess>(aliases: &AliasTable, computed: &[&'static str]) -> Self {
        let mut attrs = FxHashMap::default();
        for &name in T::property_names() {
            attrs.insert(name, AttributeKind::Column);
        }
        for name in aliases.alias_names() {
            attrs.insert(name, AttributeKind::Alias);
        }
        for &name in computed {
            attrs.insert(name, AttributeKind::Computed);
        }
        Self {
            entity: T::entity(),
            attrs,
        }
    }

    /// The entity type name
    #[must_use]
    pub fn entity(&self) -> &'static str {
        self.entity
    }

    /// True if the entity exposes `name` under any representation
    #[must_use]
    pub fn exposes(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    /// How `name` is represented, if exposed
    #[must_use]
    pub fn kind(&self, name: &str) -> Option<AttributeKind> {
        self.attrs.get(name).copied()
    }

    /// All exposed attribute names, sorted
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.attrs.keys().copied().sorted_unstable().collect()
    }

    /// Number of exposed attributes
    #[must_use]
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    /// True if the surface is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macros::PropertyField;

    #[derive(Debug, Clone, PropertyField)]
    struct Sample {
        #[property(name = "diagnosiscode")]
        diagnosis_code: Option<String>,
    }

    #[test]
    fn surface_tags_each_representation() {
        let aliases =
            AliasTable::build::<Sample>(&[("diagnosis_code", "diagnosiscode")], &["resolved_desc"])
                .unwrap();
        let surface = EntitySurface::of::<Sample>(&aliases, &["resolved_desc"]);

        assert_eq!(surface.kind("diagnosiscode"), Some(AttributeKind::Column));
        assert_eq!(surface.kind("diagnosis_code"), Some(AttributeKind::Alias));
        assert_eq!(surface.kind("resolved_desc"), Some(AttributeKind::Computed));
        assert_eq!(surface.kind("absent"), None);
        assert!(surface.exposes("diagnosis_code"));
        assert_eq!(surface.len(), 3);
    }
}
