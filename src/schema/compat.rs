//! Legacy-schema compatibility verifier.
//!
//! Confirms that every public attribute name a legacy schema revision
//! defined still resolves on the current schema, accounting for deliberate
//! renames. Runs offline over static surfaces; it has no runtime role.

use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::schema::surface::EntitySurface;

/// A snapshot of one legacy entity's public attribute names.
///
/// This is data, not code: the names are captured from the legacy schema
/// revision and never regenerated from the current types.
#[derive(Debug, Clone)]
pub struct LegacySurface {
    /// Entity type name
    pub entity: &'static str,
    /// Public attribute names the legacy revision exposed
    pub attributes: &'static [&'static str],
}

/// Explicit historical renames (`legacy name -> current name`)
#[derive(Debug, Clone, Default)]
pub struct RenameTable {
    map: FxHashMap<&'static str, &'static str>,
}

impl RenameTable {
    /// Create an empty rename table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rename entry
    #[must_use]
    pub fn with_rename(mut self, legacy: &'static str, current: &'static str) -> Self {
        self.map.insert(legacy, current);
        self
    }

    /// Resolve a legacy name to the name expected on the current schema
    #[must_use]
    pub fn resolve<'n>(&self, name: &'n str) -> &'n str {
        self.map.get(name).copied().unwrap_or(name)
    }
}

/// A legacy attribute with no resolvable current counterpart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibilityGap {
    /// Entity type name
    pub entity: &'static str,
    /// The legacy attribute that no longer resolves
    pub attribute: &'static str,
}

/// The fully enumerated outcome of a compatibility walk
#[derive(Debug, Clone, Default)]
pub struct CompatibilityReport {
    /// Every gap found, in entity-then-attribute order
    pub gaps: Vec<CompatibilityGap>,
}

impl CompatibilityReport {
    /// True if every legacy attribute resolved
    #[must_use]
    pub fn is_compatible(&self) -> bool {
        self.gaps.is_empty()
    }
}

impl std::fmt::Display for CompatibilityReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.gaps.is_empty() {
            return write!(f, "no compatibility gaps");
        }
        writeln!(f, "{} compatibility gap(s):", self.gaps.len())?;
        for gap in &self.gaps {
            writeln!(f, "  {}.{}", gap.entity, gap.attribute)?;
        }
        Ok(())
    }
}

/// Walk every `(legacy, current)` pair and report every legacy attribute the
/// current surface does not expose.
///
/// The walk never short-circuits: the report lists every gap across every
/// entity so a single run shows the whole picture. An attribute counts as
/// exposed whether it is a column, an alias, or a computed accessor.
#[must_use]
pub fn verify(
    pairs: &[(&LegacySurface, &EntitySurface)],
    renames: &RenameTable,
) -> CompatibilityReport {
    let mut gaps = Vec::new();

    for (legacy, current) in pairs {
        for &attribute in legacy.attributes {
            let expected = renames.resolve(attribute);
            if !current.exposes(expected) {
                gaps.push(CompatibilityGap {
                    entity: legacy.entity,
                    attribute,
                });
            }
        }
    }

    let gaps = gaps
        .into_iter()
        .sorted_by_key(|gap| (gap.entity, gap.attribute))
        .collect();
    CompatibilityReport { gaps }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::aliases::AliasTable;
    use macros::PropertyField;

    #[derive(Debug, Clone, PropertyField)]
    struct DataDefinition {
        #[property(name = "upload_key")]
        upload_key: String,

        #[property(name = "field_name")]
        field_name: Option<String>,

        #[property(name = "code_id")]
        code_id: Option<String>,

        #[property(name = "mandatory")]
        mandatory: Option<f64>,
    }

    const LEGACY: LegacySurface = LegacySurface {
        entity: "DataDefinition",
        attributes: &["upload_key", "feild_name", "code_id", "mandatory"],
    };

    fn renames() -> RenameTable {
        RenameTable::new().with_rename("feild_name", "field_name")
    }

    #[test]
    fn renamed_attribute_resolves_through_table() {
        let aliases =
            AliasTable::build::<DataDefinition>(&[("feild_name", "field_name")], &[]).unwrap();
        let surface = EntitySurface::of::<DataDefinition>(&aliases, &[]);

        let report = verify(&[(&LEGACY, &surface)], &renames());
        assert!(report.is_compatible(), "{report}");
    }

    #[test]
    fn missing_rename_target_is_one_gap() {
        // Same surface but without the compatibility alias: still fine,
        // because the rename maps feild_name onto the real column.
        let aliases = AliasTable::build::<DataDefinition>(&[], &[]).unwrap();
        let surface = EntitySurface::of::<DataDefinition>(&aliases, &[]);
        let report = verify(&[(&LEGACY, &surface)], &renames());
        assert!(report.is_compatible());

        // Without the rename table entry the typo has nowhere to resolve.
        let report = verify(&[(&LEGACY, &surface)], &RenameTable::new());
        assert_eq!(
            report.gaps,
            vec![CompatibilityGap {
                entity: "DataDefinition",
                attribute: "feild_name",
            }]
        );
    }

    #[test]
    fn every_gap_is_enumerated() {
        #[derive(Debug, Clone, PropertyField)]
        struct Shrunk {
            #[property(name = "upload_key")]
            upload_key: String,
        }

        let aliases = AliasTable::build::<Shrunk>(&[], &[]).unwrap();
        let surface = EntitySurface::of::<Shrunk>(&aliases, &[]);
        let legacy = LegacySurface {
            entity: "Shrunk",
            attributes: &["upload_key", "code_id", "mandatory", "feild_name"],
        };

        let report = verify(&[(&legacy, &surface)], &renames());
        assert_eq!(report.gaps.len(), 3);
        let missing: Vec<&str> = report.gaps.iter().map(|g| g.attribute).collect();
        assert_eq!(missing, vec!["code_id", "feild_name", "mandatory"]);
    }
}
