//! Coded-reference resolution.
//!
//! Domain entities carry `(code, code_std)` column pairs with no declared
//! foreign key to the catalog: externally supplied data may reference codes
//! that are not yet catalogued, so the relationship is advisory. Resolution
//! is a read-only point lookup. `(coding_standard, code)` is the catalog's
//! primary key, so the result is zero or one entry, never more.
//!
//! A miss is normal control flow, not an error: callers get "no description"
//! for locally invented or uncatalogued codes.

use crate::catalog::{CodeCatalog, CodeEntry};

/// Resolve a coded field where both sides of the key come from the owning
/// row (e.g. treatment admit/discharge reasons).
#[must_use]
pub fn resolve<'c>(
    catalog: &'c CodeCatalog,
    code_std: Option<&str>,
    code: Option<&str>,
) -> Option<&'c CodeEntry> {
    catalog.get(code_std?, code?)
}

/// Resolve a coded field whose standard is fixed at the call site
/// (e.g. `PV_RRTSTATUS` for renal replacement therapy status).
#[must_use]
pub fn resolve_fixed<'c>(
    catalog: &'c CodeCatalog,
    coding_standard: &str,
    code: Option<&str>,
) -> Option<&'c CodeEntry> {
    catalog.get(coding_standard, code?)
}

/// The catalogued description for a coded field, if any
#[must_use]
pub fn description_for<'c>(
    catalog: &'c CodeCatalog,
    code_std: Option<&str>,
    code: Option<&str>,
) -> Option<&'c str> {
    resolve(catalog, code_std, code)?.description.as_deref()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CodeEntry;

    fn catalog() -> CodeCatalog {
        let mut catalog = CodeCatalog::new();
        catalog
            .insert(CodeEntry::new("RR1+", "HOSP01", Some("Example Hospital")))
            .unwrap();
        catalog
            .insert(CodeEntry::new("PV_RRTSTATUS", "TP", Some("Transplant")))
            .unwrap();
        catalog.insert(CodeEntry::new("UKRR", "QBL05", None)).unwrap();
        catalog
    }

    #[test]
    fn point_lookup_resolves_known_pairs() {
        let catalog = catalog();
        let entry = resolve(&catalog, Some("RR1+"), Some("HOSP01")).unwrap();
        assert_eq!(entry.description.as_deref(), Some("Example Hospital"));
    }

    #[test]
    fn missing_code_is_not_an_error() {
        let catalog = catalog();
        assert!(resolve(&catalog, Some("RR1+"), Some("UNKNOWN99")).is_none());
        assert!(resolve(&catalog, None, Some("HOSP01")).is_none());
        assert!(resolve(&catalog, Some("RR1+"), None).is_none());
        assert_eq!(description_for(&catalog, Some("RR1+"), Some("UNKNOWN99")), None);
    }

    #[test]
    fn entry_without_description_resolves_to_no_description() {
        let catalog = catalog();
        assert!(resolve(&catalog, Some("UKRR"), Some("QBL05")).is_some());
        assert_eq!(description_for(&catalog, Some("UKRR"), Some("QBL05")), None);
    }

    #[test]
    fn fixed_standard_resolution() {
        let catalog = catalog();
        let entry = resolve_fixed(&catalog, "PV_RRTSTATUS", Some("TP")).unwrap();
        assert_eq!(entry.description.as_deref(), Some("Transplant"));
        assert!(resolve_fixed(&catalog, "PV_TPSTATUS", Some("TP")).is_none());
    }

    #[test]
    fn resolution_is_deterministic() {
        let catalog = catalog();
        let first = resolve(&catalog, Some("RR1+"), Some("HOSP01"));
        let second = resolve(&catalog, Some("RR1+"), Some("HOSP01"));
        assert_eq!(first, second);
    }
}
