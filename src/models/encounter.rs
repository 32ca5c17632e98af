//! Encounters and encounter-shaped events: treatments, dialysis sessions,
//! transplants and program memberships.

use chrono::{NaiveDate, NaiveDateTime};
use macros::PropertyField;
use serde::{Deserialize, Serialize};

use crate::catalog::{self, CodeCatalog};
use crate::models::now;

/// A visit or episode of care on a patient record
#[derive(Debug, Clone, Serialize, Deserialize, PropertyField)]
pub struct Encounter {
    #[property(name = "id")]
    pub id: String,

    #[property(name = "pid")]
    pub pid: Option<String>,

    #[property(name = "creation_date")]
    pub creation_date: NaiveDateTime,

    #[property(name = "idx")]
    pub idx: Option<i32>,

    #[property(name = "encounternumber")]
    pub encounternumber: Option<String>,

    #[property(name = "encountertype")]
    pub encountertype: Option<String>,

    #[property(name = "fromtime")]
    pub from_time: Option<NaiveDateTime>,

    #[property(name = "totime")]
    pub to_time: Option<NaiveDateTime>,

    #[property(name = "admittingcliniciancode")]
    pub admittingcliniciancode: Option<String>,

    #[property(name = "admittingcliniciancodestd")]
    pub admittingcliniciancodestd: Option<String>,

    #[property(name = "admittingcliniciandesc")]
    pub admittingcliniciandesc: Option<String>,

    #[property(name = "admitreasoncode")]
    pub admitreasoncode: Option<String>,

    #[property(name = "admitreasoncodestd")]
    pub admitreasoncodestd: Option<String>,

    #[property(name = "admitreasondesc")]
    pub admitreasondesc: Option<String>,

    #[property(name = "admissionsourcecode")]
    pub admissionsourcecode: Option<String>,

    #[property(name = "admissionsourcecodestd")]
    pub admissionsourcecodestd: Option<String>,

    #[property(name = "admissionsourcedesc")]
    pub admissionsourcedesc: Option<String>,

    #[property(name = "dischargereasoncode")]
    pub dischargereasoncode: Option<String>,

    #[property(name = "dischargereasoncodestd")]
    pub dischargereasoncodestd: Option<String>,

    #[property(name = "dischargereasondesc")]
    pub dischargereasondesc: Option<String>,

    #[property(name = "dischargelocationcode")]
    pub dischargelocationcode: Option<String>,

    #[property(name = "dischargelocationcodestd")]
    pub dischargelocationcodestd: Option<String>,

    #[property(name = "dischargelocationdesc")]
    pub dischargelocationdesc: Option<String>,

    #[property(name = "healthcarefacilitycode")]
    pub healthcarefacilitycode: Option<String>,

    #[property(name = "healthcarefacilitycodestd")]
    pub healthcarefacilitycodestd: Option<String>,

    #[property(name = "healthcarefacilitydesc")]
    pub healthcarefacilitydesc: Option<String>,

    #[property(name = "enteredatcode")]
    pub enteredatcode: Option<String>,

    #[property(name = "enteredatcodestd")]
    pub enteredatcodestd: Option<String>,

    #[property(name = "enteredatdesc")]
    pub enteredatdesc: Option<String>,

    #[property(name = "visitdescription")]
    pub visitdescription: Option<String>,

    #[property(name = "updatedon")]
    pub updatedon: Option<NaiveDateTime>,

    #[property(name = "actioncode")]
    pub actioncode: Option<String>,

    #[property(name = "externalid")]
    pub externalid: Option<String>,

    #[property(name = "update_date")]
    pub update_date: Option<NaiveDateTime>,
}

impl Encounter {
    /// Create an encounter on a patient record
    #[must_use]
    pub fn new(id: impl Into<String>, pid: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pid: Some(pid.into()),
            creation_date: now(),
            idx: None,
            encounternumber: None,
            encountertype: None,
            from_time: None,
            to_time: None,
            admittingcliniciancode: None,
            admittingcliniciancodestd: None,
            admittingcliniciandesc: None,
            admitreasoncode: None,
            admitreasoncodestd: None,
            admitreasondesc: None,
            admissionsourcecode: None,
            admissionsourcecodestd: None,
            admissionsourcedesc: None,
            dischargereasoncode: None,
            dischargereasoncodestd: None,
            dischargereasondesc: None,
            dischargelocationcode: None,
            dischargelocationcodestd: None,
            dischargelocationdesc: None,
            healthcarefacilitycode: None,
            healthcarefacilitycodestd: None,
            healthcarefacilitydesc: None,
            enteredatcode: None,
            enteredatcodestd: None,
            enteredatdesc: None,
            visitdescription: None,
            updatedon: None,
            actioncode: None,
            externalid: None,
            update_date: None,
        }
    }

    /// Legacy attribute names still resolvable on this entity
    #[must_use]
    pub fn aliases() -> &'static [(&'static str, &'static str)] {
        &[("from_time", "fromtime"), ("to_time", "totime")]
    }

    /// Derived accessors exposed alongside stored columns
    #[must_use]
    pub fn computed() -> &'static [&'static str] {
        &[]
    }
}

/// A treatment episode; the admit and discharge reason descriptions can be
/// resolved against the code catalog
#[derive(Debug, Clone, Serialize, Deserialize, PropertyField)]
pub struct Treatment {
    #[property(name = "id")]
    pub id: String,

    #[property(name = "pid")]
    pub pid: Option<String>,

    #[property(name = "creation_date")]
    pub creation_date: NaiveDateTime,

    #[property(name = "idx")]
    pub idx: Option<i32>,

    #[property(name = "encounternumber")]
    pub encounter_number: Option<String>,

    #[property(name = "encountertype")]
    pub encounter_type: Option<String>,

    #[property(name = "fromtime")]
    pub from_time: Option<NaiveDateTime>,

    #[property(name = "totime")]
    pub to_time: Option<NaiveDateTime>,

    #[property(name = "admittingcliniciancode")]
    pub admitting_clinician_code: Option<String>,

    #[property(name = "admittingcliniciancodestd")]
    pub admitting_clinician_code_std: Option<String>,

    #[property(name = "admittingcliniciandesc")]
    pub admitting_clinician_desc: Option<String>,

    #[property(name = "admitreasoncode")]
    pub admit_reason_code: Option<String>,

    #[property(name = "admitreasoncodestd")]
    pub admit_reason_code_std: Option<String>,

    #[property(name = "admitreasondesc")]
    pub admitreasondesc: Option<String>,

    #[property(name = "admissionsourcecode")]
    pub admission_source_code: Option<String>,

    #[property(name = "admissionsourcecodestd")]
    pub admission_source_code_std: Option<String>,

    #[property(name = "admissionsourcedesc")]
    pub admission_source_desc: Option<String>,

    #[property(name = "dischargereasoncode")]
    pub discharge_reason_code: Option<String>,

    #[property(name = "dischargereasoncodestd")]
    pub discharge_reason_code_std: Option<String>,

    #[property(name = "dischargereasondesc")]
    pub dischargereasondesc: Option<String>,

    #[property(name = "dischargelocationcode")]
    pub discharge_location_code: Option<String>,

    #[property(name = "dischargelocationcodestd")]
    pub discharge_location_code_std: Option<String>,

    #[property(name = "dischargelocationdesc")]
    pub discharge_location_desc: Option<String>,

    #[property(name = "healthcarefacilitycode")]
    pub health_care_facility_code: Option<String>,

    #[property(name = "healthcarefacilitycodestd")]
    pub health_care_facility_code_std: Option<String>,

    #[property(name = "healthcarefacilitydesc")]
    pub health_care_facility_desc: Option<String>,

    #[property(name = "enteredatcode")]
    pub entered_at_code: Option<String>,

    #[property(name = "enteredatcodestd")]
    pub enteredatcodestd: Option<String>,

    #[property(name = "enteredatdesc")]
    pub enteredatdesc: Option<String>,

    #[property(name = "visitdescription")]
    pub visit_description: Option<String>,

    #[property(name = "updatedon")]
    pub updated_on: Option<NaiveDateTime>,

    #[property(name = "actioncode")]
    pub action_code: Option<String>,

    #[property(name = "externalid")]
    pub external_id: Option<String>,

    #[property(name = "hdp01")]
    pub hdp01: Option<String>,

    #[property(name = "hdp02")]
    pub hdp02: Option<String>,

    #[property(name = "hdp03")]
    pub hdp03: Option<String>,

    #[property(name = "hdp04")]
    pub hdp04: Option<String>,

    #[property(name = "qbl05")]
    pub qbl05: Option<String>,

    #[property(name = "qbl06")]
    pub qbl06: Option<String>,

    #[property(name = "qbl07")]
    pub qbl07: Option<String>,

    #[property(name = "erf61")]
    pub erf61: Option<String>,

    #[property(name = "pat35")]
    pub pat35: Option<String>,

    #[property(name = "update_date")]
    pub update_date: Option<NaiveDateTime>,
}

impl Treatment {
    /// Create a treatment episode on a patient record
    #[must_use]
    pub fn new(id: impl Into<String>, pid: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pid: Some(pid.into()),
            creation_date: now(),
            idx: None,
            encounter_number: None,
            encounter_type: None,
            from_time: None,
            to_time: None,
            admitting_clinician_code: None,
            admitting_clinician_code_std: None,
            admitting_clinician_desc: None,
            admit_reason_code: None,
            admit_reason_code_std: None,
            admitreasondesc: None,
            admission_source_code: None,
            admission_source_code_std: None,
            admission_source_desc: None,
            discharge_reason_code: None,
            discharge_reason_code_std: None,
            dischargereasondesc: None,
            discharge_location_code: None,
            discharge_location_code_std: None,
            discharge_location_desc: None,
            health_care_facility_code: None,
            health_care_facility_code_std: None,
            health_care_facility_desc: None,
            entered_at_code: None,
            enteredatcodestd: None,
            enteredatdesc: None,
            visit_description: None,
            updated_on: None,
            action_code: None,
            external_id: None,
            hdp01: None,
            hdp02: None,
            hdp03: None,
            hdp04: None,
            qbl05: None,
            qbl06: None,
            qbl07: None,
            erf61: None,
            pat35: None,
            update_date: None,
        }
    }

    /// Catalog description for the admit reason code pair, if both halves of
    /// the pair are present and the pair is known
    #[must_use]
    pub fn admit_reason_desc<'c>(&self, catalog: &'c CodeCatalog) -> Option<&'c str> {
        catalog::description_for(
            catalog,
            self.admit_reason_code_std.as_deref(),
            self.admit_reason_code.as_deref(),
        )
    }

    /// Catalog description for the discharge reason code pair
    #[must_use]
    pub fn discharge_reason_desc<'c>(&self, catalog: &'c CodeCatalog) -> Option<&'c str> {
        catalog::description_for(
            catalog,
            self.discharge_reason_code_std.as_deref(),
            self.discharge_reason_code.as_deref(),
        )
    }

    /// Full catalog entry backing the admit reason pair
    #[must_use]
    pub fn admit_reason_code_item<'c>(
        &self,
        catalog: &'c CodeCatalog,
    ) -> Option<&'c catalog::CodeEntry> {
        catalog.get(
            self.admit_reason_code_std.as_deref()?,
            self.admit_reason_code.as_deref()?,
        )
    }

    /// Full catalog entry backing the discharge reason pair
    #[must_use]
    pub fn discharge_reason_code_item<'c>(
        &self,
        catalog: &'c CodeCatalog,
    ) -> Option<&'c catalog::CodeEntry> {
        catalog.get(
            self.discharge_reason_code_std.as_deref()?,
            self.discharge_reason_code.as_deref()?,
        )
    }

    /// Legacy attribute names still resolvable on this entity
    #[must_use]
    pub fn aliases() -> &'static [(&'static str, &'static str)] {
        &[
            ("encounter_number", "encounternumber"),
            ("encounter_type", "encountertype"),
            ("from_time", "fromtime"),
            ("to_time", "totime"),
            ("admitting_clinician_code", "admittingcliniciancode"),
            ("admitting_clinician_code_std", "admittingcliniciancodestd"),
            ("admitting_clinician_desc", "admittingcliniciandesc"),
            ("admission_source_code", "admissionsourcecode"),
            ("admission_source_code_std", "admissionsourcecodestd"),
            ("admission_source_desc", "admissionsourcedesc"),
            ("admit_reason_code", "admitreasoncode"),
            ("admit_reason_code_std", "admitreasoncodestd"),
            ("discharge_reason_code", "dischargereasoncode"),
            ("discharge_reason_code_std", "dischargereasoncodestd"),
            ("discharge_location_code", "dischargelocationcode"),
            ("discharge_location_code_std", "dischargelocationcodestd"),
            ("discharge_location_desc", "dischargelocationdesc"),
            ("health_care_facility_code", "healthcarefacilitycode"),
            ("health_care_facility_code_std", "healthcarefacilitycodestd"),
            ("health_care_facility_desc", "healthcarefacilitydesc"),
            ("entered_at_code", "enteredatcode"),
            ("visit_description", "visitdescription"),
            ("updated_on", "updatedon"),
            ("action_code", "actioncode"),
            ("external_id", "externalid"),
        ]
    }

    /// Derived accessors exposed alongside stored columns; the two reason
    /// descriptions come from the catalog, not from the stored desc columns
    #[must_use]
    pub fn computed() -> &'static [&'static str] {
        &[
            "admit_reason_desc",
            "discharge_reason_desc",
            "admit_reason_code_item",
            "discharge_reason_code_item",
        ]
    }
}

impl std::fmt::Display for Treatment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Treatment({}) <{}>",
            self.pid.as_deref().unwrap_or("-"),
            self.admit_reason_code.as_deref().unwrap_or(""),
        )
    }
}

/// A single dialysis session, with its QHD audit fields
#[derive(Debug, Clone, Serialize, Deserialize, PropertyField)]
pub struct DialysisSession {
    #[property(name = "id")]
    pub id: String,

    #[property(name = "pid")]
    pub pid: Option<String>,

    #[property(name = "creation_date")]
    pub creation_date: NaiveDateTime,

    #[property(name = "idx")]
    pub idx: Option<i32>,

    #[property(name = "proceduretypecode")]
    pub procedure_type_code: Option<String>,

    #[property(name = "proceduretypecodestd")]
    pub procedure_type_code_std: Option<String>,

    #[property(name = "proceduretypedesc")]
    pub procedure_type_desc: Option<String>,

    #[property(name = "cliniciancode")]
    pub cliniciancode: Option<String>,

    #[property(name = "cliniciancodestd")]
    pub cliniciancodestd: Option<String>,

    #[property(name = "cliniciandesc")]
    pub cliniciandesc: Option<String>,

    #[property(name = "proceduretime")]
    pub procedure_time: Option<NaiveDateTime>,

    #[property(name = "enteredbycode")]
    pub enteredbycode: Option<String>,

    #[property(name = "enteredbycodestd")]
    pub enteredbycodestd: Option<String>,

    #[property(name = "enteredbydesc")]
    pub enteredbydesc: Option<String>,

    #[property(name = "enteredatcode")]
    pub enteredatcode: Option<String>,

    #[property(name = "enteredatcodestd")]
    pub enteredatcodestd: Option<String>,

    #[property(name = "enteredatdesc")]
    pub enteredatdesc: Option<String>,

    #[property(name = "qhd19")]
    pub qhd19: Option<String>,

    #[property(name = "qhd20")]
    pub qhd20: Option<String>,

    #[property(name = "qhd21")]
    pub qhd21: Option<String>,

    #[property(name = "qhd22")]
    pub qhd22: Option<String>,

    #[property(name = "qhd30")]
    pub qhd30: Option<String>,

    #[property(name = "qhd31")]
    pub qhd31: Option<String>,

    #[property(name = "qhd32")]
    pub qhd32: Option<String>,

    #[property(name = "qhd33")]
    pub qhd33: Option<String>,

    #[property(name = "updatedon")]
    pub updatedon: Option<NaiveDateTime>,

    #[property(name = "actioncode")]
    pub actioncode: Option<String>,

    #[property(name = "externalid")]
    pub externalid: Option<String>,

    #[property(name = "update_date")]
    pub update_date: Option<NaiveDateTime>,
}

impl DialysisSession {
    /// Create a dialysis session on a patient record
    #[must_use]
    pub fn new(id: impl Into<String>, pid: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pid: Some(pid.into()),
            creation_date: now(),
            idx: None,
            procedure_type_code: None,
            procedure_type_code_std: None,
            procedure_type_desc: None,
            cliniciancode: None,
            cliniciancodestd: None,
            cliniciandesc: None,
            procedure_time: None,
            enteredbycode: None,
            enteredbycodestd: None,
            enteredbydesc: None,
            enteredatcode: None,
            enteredatcodestd: None,
            enteredatdesc: None,
            qhd19: None,
            qhd20: None,
            qhd21: None,
            qhd22: None,
            qhd30: None,
            qhd31: None,
            qhd32: None,
            qhd33: None,
            updatedon: None,
            actioncode: None,
            externalid: None,
            update_date: None,
        }
    }

    /// Legacy attribute names still resolvable on this entity
    #[must_use]
    pub fn aliases() -> &'static [(&'static str, &'static str)] {
        &[
            ("procedure_type_code", "proceduretypecode"),
            ("procedure_type_code_std", "proceduretypecodestd"),
            ("procedure_type_desc", "proceduretypedesc"),
            ("procedure_time", "proceduretime"),
        ]
    }

    /// Derived accessors exposed alongside stored columns
    #[must_use]
    pub fn computed() -> &'static [&'static str] {
        &[]
    }
}

/// A transplant procedure, with its TRA audit fields
#[derive(Debug, Clone, Serialize, Deserialize, PropertyField)]
pub struct Transplant {
    #[property(name = "id")]
    pub id: String,

    #[property(name = "pid")]
    pub pid: Option<String>,

    #[property(name = "creation_date")]
    pub creation_date: NaiveDateTime,

    #[property(name = "idx")]
    pub idx: Option<i32>,

    #[property(name = "proceduretypecode")]
    pub procedure_type_code: Option<String>,

    #[property(name = "proceduretypecodestd")]
    pub procedure_type_code_std: Option<String>,

    #[property(name = "proceduretypedesc")]
    pub procedure_type_desc: Option<String>,

    #[property(name = "cliniciancode")]
    pub cliniciancode: Option<String>,

    #[property(name = "cliniciancodestd")]
    pub cliniciancodestd: Option<String>,

    #[property(name = "cliniciandesc")]
    pub cliniciandesc: Option<String>,

    #[property(name = "proceduretime")]
    pub procedure_time: Option<NaiveDateTime>,

    #[property(name = "enteredbycode")]
    pub enteredbycode: Option<String>,

    #[property(name = "enteredbycodestd")]
    pub enteredbycodestd: Option<String>,

    #[property(name = "enteredbydesc")]
    pub enteredbydesc: Option<String>,

    #[property(name = "enteredatcode")]
    pub enteredatcode: Option<String>,

    #[property(name = "enteredatcodestd")]
    pub enteredatcodestd: Option<String>,

    #[property(name = "enteredatdesc")]
    pub enteredatdesc: Option<String>,

    #[property(name = "updatedon")]
    pub updatedon: Option<NaiveDateTime>,

    #[property(name = "actioncode")]
    pub actioncode: Option<String>,

    #[property(name = "externalid")]
    pub externalid: Option<String>,

    #[property(name = "tra64")]
    pub tra64: Option<NaiveDateTime>,

    #[property(name = "tra65")]
    pub tra65: Option<String>,

    #[property(name = "tra66")]
    pub tra66: Option<String>,

    #[property(name = "tra69")]
    pub tra69: Option<NaiveDateTime>,

    #[property(name = "tra76")]
    pub tra76: Option<String>,

    #[property(name = "tra77")]
    pub tra77: Option<String>,

    #[property(name = "tra78")]
    pub tra78: Option<String>,

    #[property(name = "tra79")]
    pub tra79: Option<String>,

    #[property(name = "tra80")]
    pub tra80: Option<String>,

    #[property(name = "tra8a")]
    pub tra8a: Option<String>,

    #[property(name = "tra81")]
    pub tra81: Option<String>,

    #[property(name = "tra82")]
    pub tra82: Option<String>,

    #[property(name = "tra83")]
    pub tra83: Option<String>,

    #[property(name = "tra84")]
    pub tra84: Option<String>,

    #[property(name = "tra85")]
    pub tra85: Option<String>,

    #[property(name = "tra86")]
    pub tra86: Option<String>,

    #[property(name = "tra87")]
    pub tra87: Option<String>,

    #[property(name = "tra88")]
    pub tra88: Option<String>,

    #[property(name = "tra89")]
    pub tra89: Option<String>,

    #[property(name = "tra90")]
    pub tra90: Option<String>,

    #[property(name = "tra91")]
    pub tra91: Option<String>,

    #[property(name = "tra92")]
    pub tra92: Option<String>,

    #[property(name = "tra93")]
    pub tra93: Option<String>,

    #[property(name = "tra94")]
    pub tra94: Option<String>,

    #[property(name = "tra95")]
    pub tra95: Option<String>,

    #[property(name = "tra96")]
    pub tra96: Option<String>,

    #[property(name = "tra97")]
    pub tra97: Option<String>,

    #[property(name = "tra98")]
    pub tra98: Option<String>,

    #[property(name = "update_date")]
    pub update_date: Option<NaiveDateTime>,
}

impl Transplant {
    /// Create a transplant procedure on a patient record
    #[must_use]
    pub fn new(id: impl Into<String>, pid: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pid: Some(pid.into()),
            creation_date: now(),
            idx: None,
            procedure_type_code: None,
            procedure_type_code_std: None,
            procedure_type_desc: None,
            cliniciancode: None,
            cliniciancodestd: None,
            cliniciandesc: None,
            procedure_time: None,
            enteredbycode: None,
            enteredbycodestd: None,
            enteredbydesc: None,
            enteredatcode: None,
            enteredatcodestd: None,
            enteredatdesc: None,
            updatedon: None,
            actioncode: None,
            externalid: None,
            tra64: None,
            tra65: None,
            tra66: None,
            tra69: None,
            tra76: None,
            tra77: None,
            tra78: None,
            tra79: None,
            tra80: None,
            tra8a: None,
            tra81: None,
            tra82: None,
            tra83: None,
            tra84: None,
            tra85: None,
            tra86: None,
            tra87: None,
            tra88: None,
            tra89: None,
            tra90: None,
            tra91: None,
            tra92: None,
            tra93: None,
            tra94: None,
            tra95: None,
            tra96: None,
            tra97: None,
            tra98: None,
            update_date: None,
        }
    }

    /// Legacy attribute names still resolvable on this entity
    #[must_use]
    pub fn aliases() -> &'static [(&'static str, &'static str)] {
        &[
            ("procedure_type_code", "proceduretypecode"),
            ("procedure_type_code_std", "proceduretypecodestd"),
            ("procedure_type_desc", "proceduretypedesc"),
            ("procedure_time", "proceduretime"),
        ]
    }

    /// Derived accessors exposed alongside stored columns
    #[must_use]
    pub fn computed() -> &'static [&'static str] {
        &[]
    }
}

/// Membership of a data-sharing or tracing program
#[derive(Debug, Clone, Serialize, Deserialize, PropertyField)]
pub struct ProgramMembership {
    #[property(name = "id")]
    pub id: String,

    #[property(name = "pid")]
    pub pid: Option<String>,

    #[property(name = "creation_date")]
    pub creation_date: NaiveDateTime,

    #[property(name = "programname")]
    pub program_name: Option<String>,

    #[property(name = "programdescription")]
    pub programdescription: Option<String>,

    #[property(name = "enteredbycode")]
    pub enteredbycode: Option<String>,

    #[property(name = "enteredbycodestd")]
    pub enteredbycodestd: Option<String>,

    #[property(name = "enteredbydesc")]
    pub enteredbydesc: Option<String>,

    #[property(name = "enteredatcode")]
    pub enteredatcode: Option<String>,

    #[property(name = "enteredatcodestd")]
    pub enteredatcodestd: Option<String>,

    #[property(name = "enteredatdesc")]
    pub enteredatdesc: Option<String>,

    #[property(name = "fromtime")]
    pub from_time: Option<NaiveDate>,

    #[property(name = "totime")]
    pub to_time: Option<NaiveDate>,

    #[property(name = "updatedon")]
    pub updatedon: Option<NaiveDateTime>,

    #[property(name = "actioncode")]
    pub actioncode: Option<String>,

    #[property(name = "externalid")]
    pub externalid: Option<String>,

    #[property(name = "update_date")]
    pub update_date: Option<NaiveDateTime>,
}

impl ProgramMembership {
    /// Create a program membership on a patient record
    #[must_use]
    pub fn new(id: impl Into<String>, pid: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pid: Some(pid.into()),
            creation_date: now(),
            program_name: None,
            programdescription: None,
            enteredbycode: None,
            enteredbycodestd: None,
            enteredbydesc: None,
            enteredatcode: None,
            enteredatcodestd: None,
            enteredatdesc: None,
            from_time: None,
            to_time: None,
            updatedon: None,
            actioncode: None,
            externalid: None,
            update_date: None,
        }
    }

    /// Membership is open when no end date has been recorded
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.to_time.is_none()
    }

    /// Legacy attribute names still resolvable on this entity
    #[must_use]
    pub fn aliases() -> &'static [(&'static str, &'static str)] {
        &[
            ("program_name", "programname"),
            ("from_time", "fromtime"),
            ("to_time", "totime"),
        ]
    }

    /// Derived accessors exposed alongside stored columns
    #[must_use]
    pub fn computed() -> &'static [&'static str] {
        &[]
    }
}

impl std::fmt::Display for ProgramMembership {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.from_time {
            Some(from) => write!(
                f,
                "ProgramMembership({}) <{} {from}>",
                self.pid.as_deref().unwrap_or("-"),
                self.program_name.as_deref().unwrap_or(""),
            ),
            None => write!(
                f,
                "ProgramMembership({}) <{} ->",
                self.pid.as_deref().unwrap_or("-"),
                self.program_name.as_deref().unwrap_or(""),
            ),
        }
    }
}
