//! Clinical observations, diagnoses, allergies and histories.

use chrono::NaiveDateTime;
use macros::PropertyField;
use serde::{Deserialize, Serialize};

use crate::models::now;

/// A coded clinical observation on a patient record
#[derive(Debug, Clone, Serialize, Deserialize, PropertyField)]
pub struct Observation {
    #[property(name = "id")]
    pub id: String,

    #[property(name = "pid")]
    pub pid: Option<String>,

    #[property(name = "creation_date")]
    pub creation_date: NaiveDateTime,

    #[property(name = "idx")]
    pub idx: Option<i32>,

    #[property(name = "observationtime")]
    pub observation_time: Option<NaiveDateTime>,

    #[property(name = "observationcode")]
    pub observation_code: Option<String>,

    #[property(name = "observationcodestd")]
    pub observation_code_std: Option<String>,

    #[property(name = "observationdesc")]
    pub observation_desc: Option<String>,

    #[property(name = "observationvalue")]
    pub observation_value: Option<String>,

    #[property(name = "observationunits")]
    pub observation_units: Option<String>,

    #[property(name = "prepost")]
    pub pre_post: Option<String>,

    #[property(name = "commenttext")]
    pub comment_text: Option<String>,

    #[property(name = "cliniciancode")]
    pub clinician_code: Option<String>,

    #[property(name = "cliniciancodestd")]
    pub clinician_code_std: Option<String>,

    #[property(name = "cliniciandesc")]
    pub clinician_desc: Option<String>,

    #[property(name = "enteredatcode")]
    pub entered_at: Option<String>,

    #[property(name = "enteredatcodestd")]
    pub entered_at_code_std: Option<String>,

    #[property(name = "enteredatdesc")]
    pub entered_at_description: Option<String>,

    #[property(name = "enteringorganizationcode")]
    pub entering_organization_code: Option<String>,

    #[property(name = "enteringorganizationcodestd")]
    pub entering_organization_code_std: Option<String>,

    #[property(name = "enteringorganizationdesc")]
    pub entering_organization_description: Option<String>,

    #[property(name = "updatedon")]
    pub updated_on: Option<NaiveDateTime>,

    #[property(name = "actioncode")]
    pub action_code: Option<String>,

    #[property(name = "externalid")]
    pub external_id: Option<String>,

    #[property(name = "update_date")]
    pub update_date: Option<NaiveDateTime>,
}

impl Observation {
    /// Create an observation on a patient record
    #[must_use]
    pub fn new(id: impl Into<String>, pid: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pid: Some(pid.into()),
            creation_date: now(),
            idx: None,
            observation_time: None,
            observation_code: None,
            observation_code_std: None,
            observation_desc: None,
            observation_value: None,
            observation_units: None,
            pre_post: None,
            comment_text: None,
            clinician_code: None,
            clinician_code_std: None,
            clinician_desc: None,
            entered_at: None,
            entered_at_code_std: None,
            entered_at_description: None,
            entering_organization_code: None,
            entering_organization_code_std: None,
            entering_organization_description: None,
            updated_on: None,
            action_code: None,
            external_id: None,
            update_date: None,
        }
    }

    /// Legacy attribute names still resolvable on this entity
    #[must_use]
    pub fn aliases() -> &'static [(&'static str, &'static str)] {
        &[
            ("observation_time", "observationtime"),
            ("observation_code", "observationcode"),
            ("observation_code_std", "observationcodestd"),
            ("observation_desc", "observationdesc"),
            ("observation_value", "observationvalue"),
            ("observation_units", "observationunits"),
            ("comment_text", "commenttext"),
            ("clinician_code", "cliniciancode"),
            ("clinician_code_std", "cliniciancodestd"),
            ("clinician_desc", "cliniciandesc"),
            ("entered_at", "enteredatcode"),
            ("entered_at_description", "enteredatdesc"),
            ("entering_organization_code", "enteringorganizationcode"),
            ("entering_organization_description", "enteringorganizationdesc"),
            ("updated_on", "updatedon"),
            ("action_code", "actioncode"),
            ("external_id", "externalid"),
            ("pre_post", "prepost"),
        ]
    }

    /// Derived accessors exposed alongside stored columns
    #[must_use]
    pub fn computed() -> &'static [&'static str] {
        &[]
    }
}

impl std::fmt::Display for Observation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Observation({}) <{} {}>",
            self.pid.as_deref().unwrap_or("-"),
            self.observation_code.as_deref().unwrap_or(""),
            self.observation_value.as_deref().unwrap_or(""),
        )
    }
}

/// A coded diagnosis on a patient record
#[derive(Debug, Clone, Serialize, Deserialize, PropertyField)]
pub struct Diagnosis {
    #[property(name = "id")]
    pub id: String,

    #[property(name = "pid")]
    pub pid: Option<String>,

    #[property(name = "creation_date")]
    pub creation_date: NaiveDateTime,

    #[property(name = "idx")]
    pub idx: Option<i32>,

    #[property(name = "diagnosistype")]
    pub diagnosistype: Option<String>,

    #[property(name = "diagnosingcliniciancode")]
    pub diagnosingcliniciancode: Option<String>,

    #[property(name = "diagnosingcliniciancodestd")]
    pub diagnosingcliniciancodestd: Option<String>,

    #[property(name = "diagnosingcliniciandesc")]
    pub diagnosingcliniciandesc: Option<String>,

    #[property(name = "diagnosiscode")]
    pub diagnosis_code: Option<String>,

    #[property(name = "diagnosiscodestd")]
    pub diagnosis_code_std: Option<String>,

    #[property(name = "diagnosisdesc")]
    pub diagnosis_desc: Option<String>,

    #[property(name = "comments")]
    pub comments: Option<String>,

    #[property(name = "identificationtime")]
    pub identification_time: Option<NaiveDateTime>,

    #[property(name = "onsettime")]
    pub onset_time: Option<NaiveDateTime>,

    #[property(name = "enteredon")]
    pub enteredon: Option<NaiveDateTime>,

    #[property(name = "updatedon")]
    pub updatedon: Option<NaiveDateTime>,

    #[property(name = "actioncode")]
    pub actioncode: Option<String>,

    #[property(name = "externalid")]
    pub externalid: Option<String>,

    #[property(name = "update_date")]
    pub update_date: Option<NaiveDateTime>,

    #[property(name = "enteredatcode")]
    pub enteredatcode: Option<String>,

    #[property(name = "enteredatcodestd")]
    pub enteredatcodestd: Option<String>,

    #[property(name = "enteredatdesc")]
    pub enteredatdesc: Option<String>,

    #[property(name = "encounternumber")]
    pub encounternumber: Option<String>,

    #[property(name = "verificationstatus")]
    pub verificationstatus: Option<String>,
}

impl Diagnosis {
    /// Create a diagnosis on a patient record
    #[must_use]
    pub fn new(id: impl Into<String>, pid: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pid: Some(pid.into()),
            creation_date: now(),
            idx: None,
            diagnosistype: None,
            diagnosingcliniciancode: None,
            diagnosingcliniciancodestd: None,
            diagnosingcliniciandesc: None,
            diagnosis_code: None,
            diagnosis_code_std: None,
            diagnosis_desc: None,
            comments: None,
            identification_time: None,
            onset_time: None,
            enteredon: None,
            updatedon: None,
            actioncode: None,
            externalid: None,
            update_date: None,
            enteredatcode: None,
            enteredatcodestd: None,
            enteredatdesc: None,
            encounternumber: None,
            verificationstatus: None,
        }
    }

    /// Legacy attribute names still resolvable on this entity
    #[must_use]
    pub fn aliases() -> &'static [(&'static str, &'static str)] {
        &[
            ("diagnosis_code", "diagnosiscode"),
            ("diagnosis_code_std", "diagnosiscodestd"),
            ("diagnosis_desc", "diagnosisdesc"),
            ("identification_time", "identificationtime"),
            ("onset_time", "onsettime"),
        ]
    }

    /// Derived accessors exposed alongside stored columns
    #[must_use]
    pub fn computed() -> &'static [&'static str] {
        &[]
    }
}

impl std::fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Diagnosis({}) <{}>",
            self.pid.as_deref().unwrap_or("-"),
            self.diagnosis_code.as_deref().unwrap_or(""),
        )
    }
}

/// Primary renal diagnosis; at most one per patient record, keyed on pid
#[derive(Debug, Clone, Serialize, Deserialize, PropertyField)]
pub struct RenalDiagnosis {
    #[property(name = "pid")]
    pub pid: String,

    #[property(name = "creation_date")]
    pub creation_date: NaiveDateTime,

    #[property(name = "diagnosistype")]
    pub diagnosistype: Option<String>,

    #[property(name = "diagnosiscode")]
    pub diagnosis_code: Option<String>,

    #[property(name = "diagnosiscodestd")]
    pub diagnosis_code_std: Option<String>,

    #[property(name = "diagnosisdesc")]
    pub diagnosis_desc: Option<String>,

    #[property(name = "diagnosingcliniciancode")]
    pub diagnosingcliniciancode: Option<String>,

    #[property(name = "diagnosingcliniciancodestd")]
    pub diagnosingcliniciancodestd: Option<String>,

    #[property(name = "diagnosingcliniciandesc")]
    pub diagnosingcliniciandesc: Option<String>,

    #[property(name = "comments")]
    pub comments: Option<String>,

    #[property(name = "identificationtime")]
    pub identification_time: Option<NaiveDateTime>,

    #[property(name = "onsettime")]
    pub onsettime: Option<NaiveDateTime>,

    #[property(name = "enteredon")]
    pub enteredon: Option<NaiveDateTime>,

    #[property(name = "updatedon")]
    pub updatedon: Option<NaiveDateTime>,

    #[property(name = "actioncode")]
    pub actioncode: Option<String>,

    #[property(name = "externalid")]
    pub externalid: Option<String>,

    #[property(name = "update_date")]
    pub update_date: Option<NaiveDateTime>,
}

impl RenalDiagnosis {
    /// Create the renal diagnosis for a patient record
    #[must_use]
    pub fn new(pid: impl Into<String>) -> Self {
        Self {
            pid: pid.into(),
            creation_date: now(),
            diagnosistype: None,
            diagnosis_code: None,
            diagnosis_code_std: None,
            diagnosis_desc: None,
            diagnosingcliniciancode: None,
            diagnosingcliniciancodestd: None,
            diagnosingcliniciandesc: None,
            comments: None,
            identification_time: None,
            onsettime: None,
            enteredon: None,
            updatedon: None,
            actioncode: None,
            externalid: None,
            update_date: None,
        }
    }

    /// Legacy attribute names still resolvable on this entity.
    /// `id` stands in for the pid primary key and breaks if the key changes
    #[must_use]
    pub fn aliases() -> &'static [(&'static str, &'static str)] {
        &[
            ("id", "pid"),
            ("diagnosis_code", "diagnosiscode"),
            ("diagnosis_code_std", "diagnosiscodestd"),
            ("diagnosis_desc", "diagnosisdesc"),
            ("identification_time", "identificationtime"),
        ]
    }

    /// Derived accessors exposed alongside stored columns
    #[must_use]
    pub fn computed() -> &'static [&'static str] {
        &[]
    }
}

impl std::fmt::Display for RenalDiagnosis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RenalDiagnosis({}) <{}>",
            self.pid,
            self.diagnosis_code.as_deref().unwrap_or(""),
        )
    }
}

/// The recorded cause of death; at most one per patient record, keyed on pid
#[derive(Debug, Clone, Serialize, Deserialize, PropertyField)]
pub struct CauseOfDeath {
    #[property(name = "pid")]
    pub pid: String,

    #[property(name = "creation_date")]
    pub creation_date: NaiveDateTime,

    #[property(name = "diagnosistype")]
    pub diagnosis_type: Option<String>,

    #[property(name = "diagnosingcliniciancode")]
    pub diagnosing_clinician_code: Option<String>,

    #[property(name = "diagnosingcliniciancodestd")]
    pub diagnosing_clinician_code_std: Option<String>,

    #[property(name = "diagnosingcliniciandesc")]
    pub diagnosing_clinician_desc: Option<String>,

    #[property(name = "diagnosiscode")]
    pub diagnosis_code: Option<String>,

    #[property(name = "diagnosiscodestd")]
    pub diagnosis_code_std: Option<String>,

    #[property(name = "diagnosisdesc")]
    pub diagnosis_desc: Option<String>,

    #[property(name = "comments")]
    pub comments: Option<String>,

    #[property(name = "enteredon")]
    pub entered_on: Option<NaiveDateTime>,

    #[property(name = "updatedon")]
    pub updated_on: Option<NaiveDateTime>,

    #[property(name = "actioncode")]
    pub action_code: Option<String>,

    #[property(name = "externalid")]
    pub external_id: Option<String>,

    #[property(name = "update_date")]
    pub update_date: Option<NaiveDateTime>,
}

impl CauseOfDeath {
    /// Create the cause of death for a patient record
    #[must_use]
    pub fn new(pid: impl Into<String>) -> Self {
        Self {
            pid: pid.into(),
            creation_date: now(),
            diagnosis_type: None,
            diagnosing_clinician_code: None,
            diagnosing_clinician_code_std: None,
            diagnosing_clinician_desc: None,
            diagnosis_code: None,
            diagnosis_code_std: None,
            diagnosis_desc: None,
            comments: None,
            entered_on: None,
            updated_on: None,
            action_code: None,
            external_id: None,
            update_date: None,
        }
    }

    /// Legacy attribute names still resolvable on this entity.
    /// `id` stands in for the pid primary key and breaks if the key changes
    #[must_use]
    pub fn aliases() -> &'static [(&'static str, &'static str)] {
        &[
            ("id", "pid"),
            ("diagnosis_type", "diagnosistype"),
            ("diagnosing_clinician_code", "diagnosingcliniciancode"),
            ("diagnosing_clinician_code_std", "diagnosingcliniciancodestd"),
            ("diagnosing_clinician_desc", "diagnosingcliniciandesc"),
            ("diagnosis_code", "diagnosiscode"),
            ("diagnosis_code_std", "diagnosiscodestd"),
            ("diagnosis_desc", "diagnosisdesc"),
            ("entered_on", "enteredon"),
            ("updated_on", "updatedon"),
            ("action_code", "actioncode"),
            ("external_id", "externalid"),
        ]
    }

    /// Derived accessors exposed alongside stored columns
    #[must_use]
    pub fn computed() -> &'static [&'static str] {
        &[]
    }
}

/// A coded social habit recorded against a patient record
#[derive(Debug, Clone, Serialize, Deserialize, PropertyField)]
pub struct SocialHistory {
    #[property(name = "id")]
    pub id: String,

    #[property(name = "pid")]
    pub pid: Option<String>,

    #[property(name = "creation_date")]
    pub creation_date: NaiveDateTime,

    #[property(name = "idx")]
    pub idx: Option<i32>,

    #[property(name = "socialhabitcode")]
    pub socialhabitcode: Option<String>,

    #[property(name = "socialhabitcodestd")]
    pub socialhabitcodestd: Option<String>,

    #[property(name = "socialhabitdesc")]
    pub socialhabitdesc: Option<String>,

    #[property(name = "updatedon")]
    pub updatedon: Option<NaiveDateTime>,

    #[property(name = "actioncode")]
    pub actioncode: Option<String>,

    #[property(name = "externalid")]
    pub externalid: Option<String>,

    #[property(name = "update_date")]
    pub update_date: Option<NaiveDateTime>,
}

impl SocialHistory {
    /// Create a social history row on a patient record
    #[must_use]
    pub fn new(id: impl Into<String>, pid: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pid: Some(pid.into()),
            creation_date: now(),
            idx: None,
            socialhabitcode: None,
            socialhabitcodestd: None,
            socialhabitdesc: None,
            updatedon: None,
            actioncode: None,
            externalid: None,
            update_date: None,
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

/// A family history entry on a patient record
#[derive(Debug, Clone, Serialize, Deserialize, PropertyField)]
pub struct FamilyHistory {
    #[property(name = "id")]
    pub id: String,

    #[property(name = "pid")]
    pub pid: Option<String>,

    #[property(name = "creation_date")]
    pub creation_date: NaiveDateTime,

    #[property(name = "idx")]
    pub idx: Option<i32>,

    #[property(name = "familymembercode")]
    pub familymembercode: Option<String>,

    #[property(name = "familymembercodestd")]
    pub familymembercodestd: Option<String>,

    #[property(name = "familymemberdesc")]
    pub familymemberdesc: Option<String>,

    #[property(name = "diagnosiscode")]
    pub diagnosiscode: Option<String>,

    #[property(name = "diagnosiscodestd")]
    pub diagnosiscodestd: Option<String>,

    #[property(name = "diagnosisdesc")]
    pub diagnosisdesc: Option<String>,

    #[property(name = "notetext")]
    pub notetext: Option<String>,

    #[property(name = "enteredatcode")]
    pub enteredatcode: Option<String>,

    #[property(name = "enteredatcodestd")]
    pub enteredatcodestd: Option<String>,

    #[property(name = "enteredatdesc")]
    pub enteredatdesc: Option<String>,

    #[property(name = "fromtime")]
    pub fromtime: Option<NaiveDateTime>,

    #[property(name = "totime")]
    pub totime: Option<NaiveDateTime>,

    #[property(name = "updatedon")]
    pub updatedon: Option<NaiveDateTime>,

    #[property(name = "actioncode")]
    pub actioncode: Option<String>,

    #[property(name = "externalid")]
    pub externalid: Option<String>,

    #[property(name = "update_date")]
    pub update_date: Option<NaiveDateTime>,
}

impl FamilyHistory {
    /// Create a family history row on a patient record
    #[must_use]
    pub fn new(id: impl Into<String>, pid: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pid: Some(pid.into()),
            creation_date: now(),
            idx: None,
            familymembercode: None,
            familymembercodestd: None,
            familymemberdesc: None,
            diagnosiscode: None,
            diagnosiscodestd: None,
            diagnosisdesc: None,
            notetext: None,
            enteredatcode: None,
            enteredatcodestd: None,
            enteredatdesc: None,
            fromtime: None,
            totime: None,
            updatedon: None,
            actioncode: None,
            externalid: None,
            update_date: None,
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

/// An allergy recorded against a patient record
#[derive(Debug, Clone, Serialize, Deserialize, PropertyField)]
pub struct Allergy {
    #[property(name = "id")]
    pub id: String,

    #[property(name = "pid")]
    pub pid: Option<String>,

    #[property(name = "creation_date")]
    pub creation_date: NaiveDateTime,

    #[property(name = "idx")]
    pub idx: Option<i32>,

    #[property(name = "allergycode")]
    pub allergycode: Option<String>,

    #[property(name = "allergycodestd")]
    pub allergycodestd: Option<String>,

    #[property(name = "allergydesc")]
    pub allergydesc: Option<String>,

    #[property(name = "allergycategorycode")]
    pub allergycategorycode: Option<String>,

    #[property(name = "allergycategorycodestd")]
    pub allergycategorycodestd: Option<String>,

    #[property(name = "allergycategorydesc")]
    pub allergycategorydesc: Option<String>,

    #[property(name = "severitycode")]
    pub severitycode: Option<String>,

    #[property(name = "severitycodestd")]
    pub severitycodestd: Option<String>,

    #[property(name = "severitydesc")]
    pub severitydesc: Option<String>,

    #[property(name = "cliniciancode")]
    pub cliniciancode: Option<String>,

    #[property(name = "cliniciancodestd")]
    pub cliniciancodestd: Option<String>,

    #[property(name = "cliniciandesc")]
    pub cliniciandesc: Option<String>,

    #[property(name = "discoverytime")]
    pub discoverytime: Option<NaiveDateTime>,

    #[property(name = "confirmedtime")]
    pub confirmedtime: Option<NaiveDateTime>,

    #[property(name = "commenttext")]
    pub commenttext: Option<String>,

    #[property(name = "inactivetime")]
    pub inactivetime: Option<NaiveDateTime>,

    #[property(name = "freetextallergy")]
    pub freetextallergy: Option<String>,

    #[property(name = "qualifyingdetails")]
    pub qualifyingdetails: Option<String>,

    #[property(name = "updatedon")]
    pub updatedon: Option<NaiveDateTime>,

    #[property(name = "actioncode")]
    pub actioncode: Option<String>,

    #[property(name = "externalid")]
    pub externalid: Option<String>,

    #[property(name = "update_date")]
    pub update_date: Option<NaiveDateTime>,
}

impl Allergy {
    /// Create an allergy row on a patient record
    #[must_use]
    pub fn new(id: impl Into<String>, pid: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pid: Some(pid.into()),
            creation_date: now(),
            idx: None,
            allergycode: None,
            allergycodestd: None,
            allergydesc: None,
            allergycategorycode: None,
            allergycategorycodestd: None,
            allergycategorydesc: None,
            severitycode: None,
            severitycodestd: None,
            severitydesc: None,
            cliniciancode: None,
            cliniciancodestd: None,
            cliniciandesc: None,
            discoverytime: None,
            confirmedtime: None,
            commenttext: None,
            inactivetime: None,
            freetextallergy: None,
            qualifyingdetails: None,
            updatedon: None,
            actioncode: None,
            externalid: None,
            update_date: None,
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
