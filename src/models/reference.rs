//! Registry reference tables: facilities, renal registry data definitions,
//! modality codes and centre locations.

use chrono::NaiveDateTime;
use macros::PropertyField;
use serde::{Deserialize, Serialize};

use crate::catalog::{self, CodeCatalog};
use crate::models::now;

/// A sending facility, keyed by its `(facilitycode, facilitycodestd)` pair.
/// The pair must exist in the code catalog; deleting the catalog entry is
/// refused while the facility references it
#[derive(Debug, Clone, Serialize, Deserialize, PropertyField)]
pub struct Facility {
    #[property(name = "facilitycode")]
    pub code: String,

    #[property(name = "facilitycodestd")]
    pub coding_standard: String,

    #[property(name = "facilitytype")]
    pub facilitytype: String,

    #[property(name = "pkbout")]
    pub pkb_out: bool,

    #[property(name = "pkbmsgexclusions")]
    pub pkb_msg_exclusions: Option<Vec<String>>,

    #[property(name = "ukrdcoutpkb")]
    pub ukrdcoutpkb: bool,

    #[property(name = "pvoutpkb")]
    pub pvoutpkb: bool,

    #[property(name = "startdate")]
    pub startdate: Option<NaiveDateTime>,

    #[property(name = "enddate")]
    pub enddate: Option<NaiveDateTime>,

    #[property(name = "firstdataquarter")]
    pub firstdataquarter: Option<i32>,

    #[property(name = "pkboutstartdate")]
    pub pkboutstartdate: Option<NaiveDateTime>,

    #[property(name = "creation_date")]
    pub creation_date: NaiveDateTime,

    #[property(name = "update_date")]
    pub update_date: NaiveDateTime,
}

impl Facility {
    /// Create a facility under a coding standard
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        coding_standard: impl Into<String>,
        facilitytype: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            coding_standard: coding_standard.into(),
            facilitytype: facilitytype.into(),
            pkb_out: false,
            pkb_msg_exclusions: None,
            ukrdcoutpkb: false,
            pvoutpkb: false,
            startdate: None,
            enddate: None,
            firstdataquarter: None,
            pkboutstartdate: None,
            creation_date: now(),
            update_date: now(),
        }
    }

    /// Catalog description of the facility's own code pair
    #[must_use]
    pub fn description<'c>(&self, catalog: &'c CodeCatalog) -> Option<&'c str> {
        catalog
            .get(&self.coding_standard, &self.code)?
            .description
            .as_deref()
    }

    /// Full catalog entry for the facility's own code pair
    #[must_use]
    pub fn code_info<'c>(&self, catalog: &'c CodeCatalog) -> Option<&'c catalog::CodeEntry> {
        catalog.get(&self.coding_standard, &self.code)
    }

    /// Inbound PatientKnowsBest sending was retired; the flag survives as a
    /// constant for callers that still read it
    #[must_use]
    pub fn pkb_in(&self) -> bool {
        false
    }

    /// Legacy attribute names still resolvable on this entity
    #[must_use]
    pub fn aliases() -> &'static [(&'static str, &'static str)] {
        &[
            ("code", "facilitycode"),
            ("coding_standard", "facilitycodestd"),
            ("pkb_out", "pkbout"),
            ("pkb_msg_exclusions", "pkbmsgexclusions"),
            ("rdastartdate", "startdate"),
            ("rdaenddate", "enddate"),
            ("rdafirstdataquarter", "firstdataquarter"),
        ]
    }

    /// Derived accessors exposed alongside stored columns
    #[must_use]
    pub fn computed() -> &'static [&'static str] {
        &["description", "pkb_in", "code_info"]
    }
}

impl std::fmt::Display for Facility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Facility({}:{})", self.coding_standard, self.code)
    }
}

/// A renal registry upload field definition, keyed by upload key.
/// Two column names are uppercase in the underlying schema and one carries
/// a historical typo that downstream consumers still rely on
#[derive(Debug, Clone, Serialize, Deserialize, PropertyField)]
pub struct RRDataDefinition {
    #[property(name = "upload_key")]
    pub upload_key: String,

    #[property(name = "TABLE_NAME")]
    pub table_name: String,

    #[property(name = "field_name")]
    pub field_name: String,

    #[property(name = "code_id")]
    pub code_id: Option<String>,

    #[property(name = "mandatory")]
    pub mandatory: Option<f64>,

    #[property(name = "TYPE")]
    pub code_type: Option<String>,

    #[property(name = "alt_constraint")]
    pub alt_constraint: Option<String>,

    #[property(name = "alt_desc")]
    pub alt_desc: Option<String>,

    #[property(name = "extra_val")]
    pub extra_val: Option<String>,

    #[property(name = "error_type")]
    pub error_type: Option<i32>,

    #[property(name = "paed_mand")]
    pub paed_mand: Option<f64>,

    #[property(name = "ckd5_mand")]
    pub ckd5_mand_numeric: Option<f64>,

    #[property(name = "dependant_field")]
    pub dependant_field: Option<String>,

    #[property(name = "alt_validation")]
    pub alt_validation: Option<String>,

    #[property(name = "file_prefix")]
    pub file_prefix: Option<String>,

    #[property(name = "load_min")]
    pub load_min: Option<f64>,

    #[property(name = "load_max")]
    pub load_max: Option<f64>,

    #[property(name = "remove_min")]
    pub remove_min: Option<f64>,

    #[property(name = "remove_max")]
    pub remove_max: Option<f64>,

    #[property(name = "in_month")]
    pub in_month: Option<f64>,

    #[property(name = "aki_mand")]
    pub aki_mand: Option<f64>,

    #[property(name = "rrt_mand")]
    pub rrt_mand: Option<f64>,

    #[property(name = "cons_mand")]
    pub cons_mand: Option<f64>,

    #[property(name = "ckd4_mand")]
    pub ckd4_mand: Option<f64>,

    #[property(name = "valid_before_dob")]
    pub valid_before_dob: Option<f64>,

    #[property(name = "valid_after_dod")]
    pub valid_after_dod: Option<f64>,

    #[property(name = "in_quarter")]
    pub in_quarter: Option<f64>,
}

impl RRDataDefinition {
    /// Create a field definition row
    #[must_use]
    pub fn new(
        upload_key: impl Into<String>,
        table_name: impl Into<String>,
        field_name: impl Into<String>,
    ) -> Self {
        Self {
            upload_key: upload_key.into(),
            table_name: table_name.into(),
            field_name: field_name.into(),
            code_id: None,
            mandatory: None,
            code_type: None,
            alt_constraint: None,
            alt_desc: None,
            extra_val: None,
            error_type: None,
            paed_mand: None,
            ckd5_mand_numeric: None,
            dependant_field: None,
            alt_validation: None,
            file_prefix: None,
            load_min: None,
            load_max: None,
            remove_min: None,
            remove_max: None,
            in_month: None,
            aki_mand: None,
            rrt_mand: None,
            cons_mand: None,
            ckd4_mand: None,
            valid_before_dob: None,
            valid_after_dod: None,
            in_quarter: None,
        }
    }

    /// Legacy attribute names still resolvable on this entity.
    /// `feild_name` preserves a historical typo downstream files still use
    #[must_use]
    pub fn aliases() -> &'static [(&'static str, &'static str)] {
        &[
            ("table_name", "TABLE_NAME"),
            ("code_type", "TYPE"),
            ("ckd5_mand_numeric", "ckd5_mand"),
            ("feild_name", "field_name"),
        ]
    }

    /// Derived accessors exposed alongside stored columns
    #[must_use]
    pub fn computed() -> &'static [&'static str] {
        &[]
    }
}

/// A treatment modality code with its classification flags
#[derive(Debug, Clone, Serialize, Deserialize, PropertyField)]
pub struct ModalityCodes {
    #[property(name = "registry_code")]
    pub registry_code: String,

    #[property(name = "registry_code_desc")]
    pub registry_code_desc: Option<String>,

    #[property(name = "registry_code_type")]
    pub registry_code_type: String,

    #[property(name = "acute")]
    pub acute: bool,

    #[property(name = "transfer_in")]
    pub transfer_in: bool,

    #[property(name = "ckd")]
    pub ckd: bool,

    #[property(name = "cons")]
    pub cons: bool,

    #[property(name = "rrt")]
    pub rrt: bool,

    #[property(name = "equiv_modality")]
    pub equiv_modality: Option<String>,

    #[property(name = "end_of_care")]
    pub end_of_care: bool,

    #[property(name = "is_imprecise")]
    pub is_imprecise: bool,

    #[property(name = "nhsbt_transplant_type")]
    pub nhsbt_transplant_type: Option<String>,

    #[property(name = "transfer_out")]
    pub transfer_out: Option<bool>,
}

impl ModalityCodes {
    /// Create a modality code of a given type with all flags unset
    #[must_use]
    pub fn new(registry_code: impl Into<String>, registry_code_type: impl Into<String>) -> Self {
        Self {
            registry_code: registry_code.into(),
            registry_code_desc: None,
            registry_code_type: registry_code_type.into(),
            acute: false,
            transfer_in: false,
            ckd: false,
            cons: false,
            rrt: false,
            equiv_modality: None,
            end_of_care: false,
            is_imprecise: false,
            nhsbt_transplant_type: None,
            transfer_out: None,
        }
    }

    /// Legacy attribute names still resolvable on this entity
    #[must_use]
    pub fn aliases() -> &'static [(&'static str, &'static str)] {
        &[]
    }

    /// Derived accessors exposed alongside stored columns
    #[must_use]
    pub fn computed() -> &'static [&'static str] {
        &[]
    }
}

/// A renal centre, keyed by centre code
#[derive(Debug, Clone, Serialize, Deserialize, PropertyField)]
pub struct Locations {
    #[property(name = "centre_code")]
    pub centre_code: String,

    #[property(name = "centre_name")]
    pub centre_name: Option<String>,

    #[property(name = "country_code")]
    pub country_code: Option<String>,

    #[property(name = "region_code")]
    pub region_code: Option<String>,

    #[property(name = "paed_unit")]
    pub paed_unit: Option<i32>,
}

impl Locations {
    /// Create a centre row
    #[must_use]
    pub fn new(centre_code: impl Into<String>) -> Self {
        Self {
            centre_code: centre_code.into(),
            centre_name: None,
            country_code: None,
            region_code: None,
            paed_unit: None,
        }
    }

    /// Legacy attribute names still resolvable on this entity
    #[must_use]
    pub fn aliases() -> &'static [(&'static str, &'static str)] {
        &[]
    }

    /// Derived accessors exposed alongside stored columns
    #[must_use]
    pub fn computed() -> &'static [&'static str] {
        &[]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CodeCatalog, CodeEntry};

    #[test]
    fn facility_description_resolves_own_pair() {
        let mut catalog = CodeCatalog::new();
        catalog
            .insert(CodeEntry::new("RR1+", "HOSP01", Some("Example Hospital")))
            .unwrap();

        let facility = Facility::new("HOSP01", "RR1+", "unit");
        assert_eq!(facility.description(&catalog), Some("Example Hospital"));

        let unknown = Facility::new("HOSP99", "RR1+", "unit");
        assert_eq!(unknown.description(&catalog), None);
    }

    #[test]
    fn pkb_in_is_always_off() {
        let facility = Facility::new("HOSP01", "RR1+", "unit");
        assert!(!facility.pkb_in());
    }
}
