//! Shared reference-code catalog.
//!
//! The catalog holds externally defined vocabularies (SNOMED, UKRR, PV, ...)
//! keyed by `(coding_standard, code)`, plus the code mapping and exclusion
//! tables that reference catalog entries by value. It sits outside every
//! aggregate: clinical cascades never touch it.

pub mod resolver;

use chrono::{NaiveDateTime, Utc};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

pub use resolver::{description_for, resolve, resolve_fixed};

/// Errors raised by catalog mutation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// A `(coding_standard, code)` pair was inserted twice
    #[error("duplicate code {coding_standard}:{code}")]
    DuplicateCode {
        /// Coding standard of the rejected entry
        coding_standard: String,
        /// Code of the rejected entry
        code: String,
    },

    /// A mapping row was inserted twice
    #[error("duplicate code mapping {source_coding_standard}:{source_code} -> {destination_coding_standard}:{destination_code}")]
    DuplicateMapping {
        /// Source coding standard
        source_coding_standard: String,
        /// Source code
        source_code: String,
        /// Destination coding standard
        destination_coding_standard: String,
        /// Destination code
        destination_code: String,
    },
}

/// One row of the reference code list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeEntry {
    /// Vocabulary the code belongs to
    pub coding_standard: String,
    /// The code itself
    pub code: String,
    /// Human-readable label; codes may be registered without one
    pub description: Option<String>,
    /// Kind of object the code describes
    pub object_type: Option<String>,
    /// Units attached to values carrying this code
    pub units: Option<String>,
    /// Reference range forwarded to PKB
    pub pkb_reference_range: Option<String>,
    /// Comment forwarded to PKB
    pub pkb_comment: Option<String>,
    /// Row creation timestamp
    pub creation_date: NaiveDateTime,
    /// Last update timestamp
    pub update_date: Option<NaiveDateTime>,
}

impl CodeEntry {
    /// Create a catalog entry with an optional description
    #[must_use]
    pub fn new(
        coding_standard: impl Into<String>,
        code: impl Into<String>,
        description: Option<&str>,
    ) -> Self {
        Self {
            coding_standard: coding_standard.into(),
            code: code.into(),
            description: description.map(str::to_string),
            object_type: None,
            units: None,
            pkb_reference_range: None,
            pkb_comment: None,
            creation_date: Utc::now().naive_utc(),
            update_date: None,
        }
    }

    /// Set the units label
    #[must_use]
    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }
}

/// A cross-vocabulary code mapping row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeMap {
    /// Source coding standard
    pub source_coding_standard: String,
    /// Source code
    pub source_code: String,
    /// Destination coding standard
    pub destination_coding_standard: String,
    /// Destination code
    pub destination_code: String,
    /// Row creation timestamp
    pub creation_date: NaiveDateTime,
    /// Last update timestamp
    pub update_date: Option<NaiveDateTime>,
}

/// A code excluded from forwarding to a downstream system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeExclusion {
    /// Coding standard of the excluded code
    pub coding_standard: String,
    /// The excluded code
    pub code: String,
    /// The system the exclusion applies to
    pub system: String,
}

/// The reference code catalog.
///
/// Append-mostly: entries are created or updated by reference-data import and
/// never deleted by clinical application logic.
#[derive(Debug, Clone, Default)]
pub struct CodeCatalog {
    entries: FxHashMap<(String, String), CodeEntry>,
    mappings: FxHashMap<(String, String, String, String), CodeMap>,
    exclusions: Vec<CodeExclusion>,
}

impl CodeCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a catalog entry; the compound key must be unique
    pub fn insert(&mut self, entry: CodeEntry) -> Result<(), CatalogError> {
        let key = (entry.coding_standard.clone(), entry.code.clone());
        if self.entries.contains_key(&key) {
            return Err(CatalogError::DuplicateCode {
                coding_standard: entry.coding_standard,
                code: entry.code,
            });
        }
        self.entries.insert(key, entry);
        Ok(())
    }

    /// Look up an entry by its compound key.
    ///
    /// Comparison is byte-for-byte and case-sensitive; no trimming or case
    /// folding is performed, so inconsistently cased standards will not
    /// resolve. This mirrors the upstream data feeds and is deliberate.
    #[must_use]
    pub fn get(&self, coding_standard: &str, code: &str) -> Option<&CodeEntry> {
        self.entries
            .get(&(coding_standard.to_string(), code.to_string()))
    }

    /// Remove an entry, returning it if present.
    ///
    /// Exposed for the store, which enforces RESTRICT semantics against
    /// referencing facilities before calling this.
    pub(crate) fn remove(&mut self, coding_standard: &str, code: &str) -> Option<CodeEntry> {
        self.entries
            .remove(&(coding_standard.to_string(), code.to_string()))
    }

    /// Number of catalog entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the catalog holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a mapping row; the quadruple key must be unique
    pub fn insert_mapping(&mut self, mapping: CodeMap) -> Result<(), CatalogError> {
        let key = (
            mapping.source_coding_standard.clone(),
            mapping.source_code.clone(),
            mapping.destination_coding_standard.clone(),
            mapping.destination_code.clone(),
        );
        if self.mappings.contains_key(&key) {
            return Err(CatalogError::DuplicateMapping {
                source_coding_standard: mapping.source_coding_standard,
                source_code: mapping.source_code,
                destination_coding_standard: mapping.destination_coding_standard,
                destination_code: mapping.destination_code,
            });
        }
        self.mappings.insert(key, mapping);
        Ok(())
    }

    /// All mappings out of a given `(coding_standard, code)` pair
    #[must_use]
    pub fn mappings_from(&self, coding_standard: &str, code: &str) -> Vec<&CodeMap> {
        self.mappings
            .values()
            .filter(|m| m.source_coding_standard == coding_standard && m.source_code == code)
            .collect()
    }

    /// Record a code exclusion
    pub fn insert_exclusion(&mut self, exclusion: CodeExclusion) {
        self.exclusions.push(exclusion);
    }

    /// True if the code is excluded for the given system
    #[must_use]
    pub fn is_excluded(&self, coding_standard: &str, code: &str, system: &str) -> bool {
        self.exclusions.iter().any(|e| {
            e.coding_standard == coding_standard && e.code == code && e.system == system
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compound_key_is_unique() {
        let mut catalog = CodeCatalog::new();
        catalog
            .insert(CodeEntry::new("RR1+", "HOSP01", Some("Example Hospital")))
            .unwrap();

        let err = catalog
            .insert(CodeEntry::new("RR1+", "HOSP01", Some("Shadow entry")))
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateCode {
                coding_standard: "RR1+".to_string(),
                code: "HOSP01".to_string(),
            }
        );

        // Same code under a different standard is a different entry
        catalog
            .insert(CodeEntry::new("ODS", "HOSP01", None))
            .unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let mut catalog = CodeCatalog::new();
        catalog
            .insert(CodeEntry::new("PV_RRTSTATUS", "TP", Some("Transplant")))
            .unwrap();

        assert!(catalog.get("PV_RRTSTATUS", "TP").is_some());
        assert!(catalog.get("pv_rrtstatus", "TP").is_none());
        assert!(catalog.get("PV_RRTSTATUS", "tp").is_none());
    }

    #[test]
    fn exclusions_match_by_value() {
        let mut catalog = CodeCatalog::new();
        catalog.insert_exclusion(CodeExclusion {
            coding_standard: "SNOMED".to_string(),
            code: "1234".to_string(),
            system: "PKB".to_string(),
        });

        assert!(catalog.is_excluded("SNOMED", "1234", "PKB"));
        assert!(!catalog.is_excluded("SNOMED", "1234", "UKRDC"));
    }
}
