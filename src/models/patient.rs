//! Patient demographics and the rows owned by the demographic record:
//! names, identifying numbers, addresses, contact details, family doctor.

use chrono::{NaiveDate, NaiveDateTime};
use macros::PropertyField;
use serde::{Deserialize, Serialize};

use crate::models::now;

/// Demographic record; exactly one per [`crate::models::PatientRecord`]
#[derive(Debug, Clone, Serialize, Deserialize, PropertyField)]
pub struct Patient {
    /// Primary key, referencing the owning patient record
    #[property(name = "pid", description = "Unique identifier for the patient record, referencing patientrecord.pid.")]
    pub pid: String,

    #[property(name = "creation_date")]
    pub creation_date: NaiveDateTime,

    #[property(name = "birthtime", description = "Patient's date of birth.")]
    pub birth_time: Option<NaiveDateTime>,

    #[property(name = "deathtime", description = "Patient's date of death, if applicable.")]
    pub death_time: Option<NaiveDateTime>,

    #[property(name = "gender", description = "Administrative gender of the patient (1, 2, 9).")]
    pub gender: Option<String>,

    #[property(name = "countryofbirth")]
    pub country_of_birth: Option<String>,

    #[property(name = "ethnicgroupcode")]
    pub ethnic_group_code: Option<String>,

    #[property(name = "ethnicgroupcodestd")]
    pub ethnic_group_code_std: Option<String>,

    #[property(name = "ethnicgroupdesc")]
    pub ethnic_group_description: Option<String>,

    #[property(name = "occupationcode")]
    pub occupation_code: Option<String>,

    #[property(name = "occupationcodestd")]
    pub occupation_codestd: Option<String>,

    #[property(name = "occupationdesc")]
    pub occupation_description: Option<String>,

    #[property(name = "primarylanguagecode")]
    pub primary_language: Option<String>,

    #[property(name = "primarylanguagecodestd")]
    pub primary_language_codestd: Option<String>,

    #[property(name = "primarylanguagedesc")]
    pub primary_language_description: Option<String>,

    #[property(name = "death", description = "Indicates whether the patient is deceased.")]
    pub dead: Option<bool>,

    #[property(name = "persontocontactname")]
    pub person_to_contact_name: Option<String>,

    #[property(name = "persontocontact_relationship")]
    pub person_to_contact_relationship: Option<String>,

    #[property(name = "persontocontact_contactnumber")]
    pub person_to_contact_number: Option<String>,

    #[property(name = "persontocontact_contactnumbertype")]
    pub person_to_contact_number_type: Option<String>,

    #[property(name = "persontocontact_contactnumbercomments")]
    pub person_to_contact_number_comments: Option<String>,

    #[property(name = "updatedon")]
    pub updated_on: Option<NaiveDateTime>,

    #[property(name = "actioncode")]
    pub actioncode: Option<String>,

    #[property(name = "externalid")]
    pub externalid: Option<String>,

    #[property(name = "bloodgroup")]
    pub bloodgroup: Option<String>,

    #[property(name = "bloodrhesus")]
    pub bloodrhesus: Option<String>,

    #[property(name = "update_date")]
    pub update_date: Option<NaiveDateTime>,
}

impl Patient {
    /// Create an empty demographic record for a patient record
    #[must_use]
    pub fn new(pid: impl Into<String>) -> Self {
        Self {
            pid: pid.into(),
            creation_date: now(),
            birth_time: None,
            death_time: None,
            gender: None,
            country_of_birth: None,
            ethnic_group_code: None,
            ethnic_group_code_std: None,
            ethnic_group_description: None,
            occupation_code: None,
            occupation_codestd: None,
            occupation_description: None,
            primary_language: None,
            primary_language_codestd: None,
            primary_language_description: None,
            dead: None,
            person_to_contact_name: None,
            person_to_contact_relationship: None,
            person_to_contact_number: None,
            person_to_contact_number_type: None,
            person_to_contact_number_comments: None,
            updated_on: None,
            actioncode: None,
            externalid: None,
            bloodgroup: None,
            bloodrhesus: None,
            update_date: None,
        }
    }

    /// Legacy attribute names still resolvable on this entity
    #[must_use]
    pub fn aliases() -> &'static [(&'static str, &'static str)] {
        &[
            ("id", "pid"),
            ("birth_time", "birthtime"),
            ("death_time", "deathtime"),
            ("country_of_birth", "countryofbirth"),
            ("ethnic_group_code", "ethnicgroupcode"),
            ("ethnic_group_code_std", "ethnicgroupcodestd"),
            ("ethnic_group_description", "ethnicgroupdesc"),
            ("person_to_contact_name", "persontocontactname"),
            ("person_to_contact_number", "persontocontact_contactnumber"),
            ("person_to_contact_relationship", "persontocontact_relationship"),
            (
                "person_to_contact_number_comments",
                "persontocontact_contactnumbercomments",
            ),
            (
                "person_to_contact_number_type",
                "persontocontact_contactnumbertype",
            ),
            ("occupation_code", "occupationcode"),
            ("occupation_codestd", "occupationcodestd"),
            ("occupation_description", "occupationdesc"),
            ("primary_language", "primarylanguagecode"),
            ("primary_language_codestd", "primarylanguagecodestd"),
            ("primary_language_description", "primarylanguagedesc"),
            ("dead", "death"),
            ("updated_on", "updatedon"),
        ]
    }

    /// Derived accessors exposed alongside stored columns
    #[must_use]
    pub fn computed() -> &'static [&'static str] {
        &[
            "name",
            "first_ni_number",
            "first_hospital_number",
            "numbers",
            "names",
            "contact_details",
            "addresses",
            "familydoctor",
        ]
    }
}

impl std::fmt::Display for Patient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.birth_time {
            Some(birth) => write!(f, "Patient({}) <{birth}>", self.pid),
            None => write!(f, "Patient({}) <->", self.pid),
        }
    }
}

/// One name row for a patient; `nameuse` "L" marks the usual name
#[derive(Debug, Clone, Serialize, Deserialize, PropertyField)]
pub struct Name {
    #[property(name = "id")]
    pub id: String,

    #[property(name = "pid")]
    pub pid: Option<String>,

    #[property(name = "creation_date")]
    pub creation_date: NaiveDateTime,

    #[property(name = "idx")]
    pub idx: Option<i32>,

    #[property(name = "nameuse")]
    pub nameuse: Option<String>,

    #[property(name = "prefix")]
    pub prefix: Option<String>,

    #[property(name = "family")]
    pub family: Option<String>,

    #[property(name = "given")]
    pub given: Option<String>,

    #[property(name = "othergivennames")]
    pub othergivennames: Option<String>,

    #[property(name = "suffix")]
    pub suffix: Option<String>,

    #[property(name = "update_date")]
    pub update_date: Option<NaiveDateTime>,
}

impl Name {
    /// Create a name row for a patient
    #[must_use]
    pub fn new(id: impl Into<String>, pid: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pid: Some(pid.into()),
            creation_date: now(),
            idx: None,
            nameuse: None,
            prefix: None,
            family: None,
            given: None,
            othergivennames: None,
            suffix: None,
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

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Name({}) <{} {}>",
            self.pid.as_deref().unwrap_or("-"),
            self.given.as_deref().unwrap_or(""),
            self.family.as_deref().unwrap_or(""),
        )
    }
}

/// An identifying number held by a patient (NHS, CHI, HSC, local MRN, ...)
#[derive(Debug, Clone, Serialize, Deserialize, PropertyField)]
pub struct PatientNumber {
    #[property(name = "id")]
    pub id: String,

    #[property(name = "pid")]
    pub pid: Option<String>,

    #[property(name = "creation_date")]
    pub creation_date: NaiveDateTime,

    #[property(name = "idx")]
    pub idx: Option<i32>,

    #[property(name = "patientid")]
    pub patientid: Option<String>,

    /// "NI" for national identifiers, "MRN" for hospital numbers
    #[property(name = "numbertype")]
    pub numbertype: Option<String>,

    #[property(name = "organization")]
    pub organization: Option<String>,

    #[property(name = "updatedon")]
    pub updatedon: Option<NaiveDateTime>,

    #[property(name = "actioncode")]
    pub actioncode: Option<String>,

    #[property(name = "externalid")]
    pub externalid: Option<String>,

    #[property(name = "update_date")]
    pub update_date: Option<NaiveDateTime>,
}

impl PatientNumber {
    /// Create a number row for a patient
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        pid: impl Into<String>,
        patientid: impl Into<String>,
        numbertype: impl Into<String>,
        organization: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            pid: Some(pid.into()),
            creation_date: now(),
            idx: None,
            patientid: Some(patientid.into()),
            numbertype: Some(numbertype.into()),
            organization: Some(organization.into()),
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

impl std::fmt::Display for PatientNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PatientNumber({}) <{}:{}:{}>",
            self.pid.as_deref().unwrap_or("-"),
            self.organization.as_deref().unwrap_or(""),
            self.numbertype.as_deref().unwrap_or(""),
            self.patientid.as_deref().unwrap_or(""),
        )
    }
}

/// An address row for a patient, with a coded country triple
#[derive(Debug, Clone, Serialize, Deserialize, PropertyField)]
pub struct Address {
    #[property(name = "id")]
    pub id: String,

    #[property(name = "pid")]
    pub pid: Option<String>,

    #[property(name = "creation_date")]
    pub creation_date: NaiveDateTime,

    #[property(name = "idx")]
    pub idx: Option<i32>,

    #[property(name = "addressuse")]
    pub addressuse: Option<String>,

    #[property(name = "fromtime")]
    pub from_time: Option<NaiveDate>,

    #[property(name = "totime")]
    pub to_time: Option<NaiveDate>,

    #[property(name = "street")]
    pub street: Option<String>,

    #[property(name = "town")]
    pub town: Option<String>,

    #[property(name = "county")]
    pub county: Option<String>,

    #[property(name = "postcode")]
    pub postcode: Option<String>,

    #[property(name = "countrycode")]
    pub country_code: Option<String>,

    #[property(name = "countrycodestd")]
    pub country_code_std: Option<String>,

    #[property(name = "countrydesc")]
    pub country_description: Option<String>,

    #[property(name = "update_date")]
    pub update_date: Option<NaiveDateTime>,
}

impl Address {
    /// Create an address row for a patient
    #[must_use]
    pub fn new(id: impl Into<String>, pid: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pid: Some(pid.into()),
            creation_date: now(),
            idx: None,
            addressuse: None,
            from_time: None,
            to_time: None,
            street: None,
            town: None,
            county: None,
            postcode: None,
            country_code: None,
            country_code_std: None,
            country_description: None,
            update_date: None,
        }
    }

    /// Legacy attribute names still resolvable on this entity
    #[must_use]
    pub fn aliases() -> &'static [(&'static str, &'static str)] {
        &[
            ("from_time", "fromtime"),
            ("to_time", "totime"),
            ("country_code", "countrycode"),
            ("country_code_std", "countrycodestd"),
            ("country_description", "countrydesc"),
        ]
    }

    /// Derived accessors exposed alongside stored columns
    #[must_use]
    pub fn computed() -> &'static [&'static str] {
        &[]
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Address({}) <{} {} {}>",
            self.pid.as_deref().unwrap_or("-"),
            self.street.as_deref().unwrap_or(""),
            self.town.as_deref().unwrap_or(""),
            self.postcode.as_deref().unwrap_or(""),
        )
    }
}

/// A phone number or e-mail address for a patient
#[derive(Debug, Clone, Serialize, Deserialize, PropertyField)]
pub struct ContactDetail {
    #[property(name = "id")]
    pub id: String,

    #[property(name = "pid")]
    pub pid: Option<String>,

    #[property(name = "creation_date")]
    pub creation_date: NaiveDateTime,

    #[property(name = "idx")]
    pub idx: Option<i32>,

    #[property(name = "contactuse")]
    pub use_: Option<String>,

    #[property(name = "contactvalue")]
    pub value: Option<String>,

    #[property(name = "commenttext")]
    pub commenttext: Option<String>,

    #[property(name = "updatedon")]
    pub updatedon: Option<NaiveDateTime>,

    #[property(name = "actioncode")]
    pub actioncode: Option<String>,

    #[property(name = "externalid")]
    pub externalid: Option<String>,

    #[property(name = "update_date")]
    pub update_date: Option<NaiveDateTime>,
}

impl ContactDetail {
    /// Create a contact detail row for a patient
    #[must_use]
    pub fn new(id: impl Into<String>, pid: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pid: Some(pid.into()),
            creation_date: now(),
            idx: None,
            use_: None,
            value: None,
            commenttext: None,
            updatedon: None,
            actioncode: None,
            externalid: None,
            update_date: None,
        }
    }

    /// Legacy attribute names still resolvable on this entity
    #[must_use]
    pub fn aliases() -> &'static [(&'static str, &'static str)] {
        &[("use", "contactuse"), ("value", "contactvalue")]
    }

    /// Derived accessors exposed alongside stored columns
    #[must_use]
    pub fn computed() -> &'static [&'static str] {
        &[]
    }
}

/// The patient's registered GP and practice
#[derive(Debug, Clone, Serialize, Deserialize, PropertyField)]
pub struct FamilyDoctor {
    /// Primary key, referencing the owning patient's pid
    #[property(name = "id")]
    pub id: String,

    #[property(name = "creation_date")]
    pub creation_date: NaiveDateTime,

    #[property(name = "gpname")]
    pub gpname: Option<String>,

    #[property(name = "gpid")]
    pub gpid: Option<String>,

    #[property(name = "gppracticeid")]
    pub gppracticeid: Option<String>,

    #[property(name = "addressuse")]
    pub addressuse: Option<String>,

    #[property(name = "fromtime")]
    pub fromtime: Option<NaiveDate>,

    #[property(name = "totime")]
    pub totime: Option<NaiveDate>,

    #[property(name = "street")]
    pub street: Option<String>,

    #[property(name = "town")]
    pub town: Option<String>,

    #[property(name = "county")]
    pub county: Option<String>,

    #[property(name = "postcode")]
    pub postcode: Option<String>,

    #[property(name = "countrycode")]
    pub countrycode: Option<String>,

    #[property(name = "countrycodestd")]
    pub countrycodestd: Option<String>,

    #[property(name = "countrydesc")]
    pub countrydesc: Option<String>,

    #[property(name = "contactuse")]
    pub contactuse: Option<String>,

    #[property(name = "contactvalue")]
    pub contactvalue: Option<String>,

    #[property(name = "email")]
    pub email: Option<String>,

    #[property(name = "commenttext")]
    pub commenttext: Option<String>,

    #[property(name = "update_date")]
    pub update_date: Option<NaiveDateTime>,
}

impl FamilyDoctor {
    /// Create a family doctor row for a patient
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            creation_date: now(),
            gpname: None,
            gpid: None,
            gppracticeid: None,
            addressuse: None,
            fromtime: None,
            totime: None,
            street: None,
            town: None,
            county: None,
            postcode: None,
            countrycode: None,
            countrycodestd: None,
            countrydesc: None,
            contactuse: None,
            contactvalue: None,
            email: None,
            commenttext: None,
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

impl std::fmt::Display for FamilyDoctor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "FamilyDoctor({}) <{} {}>",
            self.id,
            self.gpname.as_deref().unwrap_or(""),
            self.gpid.as_deref().unwrap_or(""),
        )
    }
}
