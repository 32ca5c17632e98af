//! Identity-matching (EMPI) graph.
//!
//! Lives beside the registry graph but never shares keys with it: the two
//! are joined only through identifier values. Master records and persons
//! form a many-to-many graph through link records, work items queue matches
//! needing human review, and the audit trail is append-only.

use chrono::{NaiveDate, NaiveDateTime};
use macros::PropertyField;
use serde::{Deserialize, Serialize};

/// One golden identity per `(nationalid, nationalid_type)` pair
#[derive(Debug, Clone, Serialize, Deserialize, PropertyField)]
pub struct MasterRecord {
    #[property(name = "id")]
    pub id: i32,

    #[property(name = "lastupdated")]
    pub last_updated: NaiveDateTime,

    #[property(name = "dateofbirth")]
    pub date_of_birth: NaiveDate,

    #[property(name = "gender")]
    pub gender: Option<String>,

    #[property(name = "givenname")]
    pub givenname: Option<String>,

    #[property(name = "surname")]
    pub surname: Option<String>,

    #[property(name = "nationalid")]
    pub nationalid: String,

    #[property(name = "nationalidtype")]
    pub nationalid_type: String,

    #[property(name = "status")]
    pub status: i32,

    #[property(name = "effectivedate")]
    pub effective_date: NaiveDateTime,

    #[property(name = "creationdate")]
    pub creation_date: Option<NaiveDateTime>,
}

impl MasterRecord {
    /// Legacy attribute names still resolvable on this entity
    #[must_use]
    pub fn aliases() -> &'static [(&'static str, &'static str)] {
        &[
            ("last_updated", "lastupdated"),
            ("date_of_birth", "dateofbirth"),
            ("nationalid_type", "nationalidtype"),
            ("effective_date", "effectivedate"),
            ("creation_date", "creationdate"),
        ]
    }

    /// Derived accessors exposed alongside stored columns
    #[must_use]
    pub fn computed() -> &'static [&'static str] {
        &["link_records", "work_items"]
    }
}

impl std::fmt::Display for MasterRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MasterRecord({}) <{} {} {} {}:{}>",
            self.id,
            self.givenname.as_deref().unwrap_or(""),
            self.surname.as_deref().unwrap_or(""),
            self.date_of_birth,
            self.nationalid_type.trim(),
            self.nationalid,
        )
    }
}

/// A source-system identity contributed by one originator
#[derive(Debug, Clone, Serialize, Deserialize, PropertyField)]
pub struct Person {
    #[property(name = "id")]
    pub id: i32,

    #[property(name = "originator")]
    pub originator: String,

    /// Unique across all persons so cross-reference rows can point at it
    #[property(name = "localid")]
    pub localid: String,

    #[property(name = "localidtype")]
    pub localid_type: String,

    #[property(name = "nationalid")]
    pub nationalid: Option<String>,

    #[property(name = "nationalidtype")]
    pub nationalid_type: Option<String>,

    #[property(name = "dateofbirth")]
    pub date_of_birth: NaiveDate,

    #[property(name = "gender")]
    pub gender: String,

    #[property(name = "dateofdeath")]
    pub date_of_death: Option<NaiveDate>,

    #[property(name = "givenname")]
    pub givenname: Option<String>,

    #[property(name = "surname")]
    pub surname: Option<String>,

    #[property(name = "prevsurname")]
    pub prev_surname: Option<String>,

    #[property(name = "othergivennames")]
    pub other_given_names: Option<String>,

    #[property(name = "title")]
    pub title: Option<String>,

    #[property(name = "postcode")]
    pub postcode: Option<String>,

    #[property(name = "street")]
    pub street: Option<String>,

    #[property(name = "stdsurname")]
    pub std_surname: Option<String>,

    #[property(name = "stdprevsurname")]
    pub std_prev_surname: Option<String>,

    #[property(name = "stdgivenname")]
    pub std_given_name: Option<String>,

    #[property(name = "stdpostcode")]
    pub std_postcode: Option<String>,

    #[property(name = "skipduplicatecheck")]
    pub skip_duplicate_check: Option<bool>,
}

impl Person {
    /// Legacy attribute names still resolvable on this entity
    #[must_use]
    pub fn aliases() -> &'static [(&'static str, &'static str)] {
        &[
            ("localid_type", "localidtype"),
            ("nationalid_type", "nationalidtype"),
            ("date_of_birth", "dateofbirth"),
            ("date_of_death", "dateofdeath"),
            ("prev_surname", "prevsurname"),
            ("other_given_names", "othergivennames"),
            ("std_surname", "stdsurname"),
            ("std_prev_surname", "stdprevsurname"),
            ("std_given_name", "stdgivenname"),
            ("std_postcode", "stdpostcode"),
            ("skip_duplicate_check", "skipduplicatecheck"),
        ]
    }

    /// Derived accessors exposed alongside stored columns
    #[must_use]
    pub fn computed() -> &'static [&'static str] {
        &["link_records", "work_items", "xref_entries"]
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Person({}) <{} {} {} {}:{}>",
            self.id,
            self.givenname.as_deref().unwrap_or(""),
            self.surname.as_deref().unwrap_or(""),
            self.date_of_birth,
            self.localid_type.trim(),
            self.localid.trim(),
        )
    }
}

/// An edge between a person and a master record
#[derive(Debug, Clone, Serialize, Deserialize, PropertyField)]
pub struct LinkRecord {
    #[property(name = "id")]
    pub id: i32,

    #[property(name = "personid")]
    pub person_id: i32,

    #[property(name = "masterid")]
    pub master_id: i32,

    #[property(name = "linktype")]
    pub link_type: i32,

    #[property(name = "linkcode")]
    pub link_code: i32,

    #[property(name = "linkdesc")]
    pub link_desc: Option<String>,

    #[property(name = "updatedby")]
    pub updated_by: Option<String>,

    #[property(name = "lastupdated")]
    pub last_updated: NaiveDateTime,
}

impl LinkRecord {
    /// Legacy attribute names still resolvable on this entity
    #[must_use]
    pub fn aliases() -> &'static [(&'static str, &'static str)] {
        &[
            ("person_id", "personid"),
            ("master_id", "masterid"),
            ("link_type", "linktype"),
            ("link_code", "linkcode"),
            ("link_desc", "linkdesc"),
            ("updated_by", "updatedby"),
            ("last_updated", "lastupdated"),
        ]
    }

    /// Derived accessors exposed alongside stored columns
    #[must_use]
    pub fn computed() -> &'static [&'static str] {
        &["person", "master_record"]
    }
}

impl std::fmt::Display for LinkRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LinkRecord({}) <Person({}), Master({})>",
            self.id, self.person_id, self.master_id,
        )
    }
}

/// A potential match queued for human review; `attributes` carries the
/// matcher's context as a JSON document
#[derive(Debug, Clone, Serialize, Deserialize, PropertyField)]
pub struct WorkItem {
    #[property(name = "id")]
    pub id: i32,

    #[property(name = "personid")]
    pub person_id: i32,

    #[property(name = "masterid")]
    pub master_id: i32,

    #[property(name = "type")]
    pub kind: i32,

    #[property(name = "description")]
    pub description: String,

    #[property(name = "status")]
    pub status: i32,

    #[property(name = "creationdate")]
    pub creation_date: Option<NaiveDateTime>,

    #[property(name = "lastupdated")]
    pub last_updated: NaiveDateTime,

    #[property(name = "updatedby")]
    pub updated_by: Option<String>,

    #[property(name = "updatedesc")]
    pub update_description: Option<String>,

    #[property(name = "attributes")]
    pub attributes: Option<String>,
}

impl WorkItem {
    /// The matcher context parsed from the `attributes` column
    pub fn parsed_attributes(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        self.attributes
            .as_deref()
            .map(serde_json::from_str)
            .transpose()
    }

    /// Legacy attribute names still resolvable on this entity
    #[must_use]
    pub fn aliases() -> &'static [(&'static str, &'static str)] {
        &[
            ("person_id", "personid"),
            ("master_id", "masterid"),
            ("creation_date", "creationdate"),
            ("last_updated", "lastupdated"),
            ("updated_by", "updatedby"),
            ("update_description", "updatedesc"),
        ]
    }

    /// Derived accessors exposed alongside stored columns
    #[must_use]
    pub fn computed() -> &'static [&'static str] {
        &["person", "master_record"]
    }
}

impl std::fmt::Display for WorkItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "WorkItem({}) <{}, {}>", self.id, self.person_id, self.master_id)
    }
}

/// An append-only matching decision. The person and master ids are plain
/// values, not references, so the trail outlives the records it names
#[derive(Debug, Clone, Serialize, Deserialize, PropertyField)]
pub struct Audit {
    #[property(name = "id")]
    pub id: i32,

    #[property(name = "personid")]
    pub person_id: i32,

    #[property(name = "masterid")]
    pub master_id: i32,

    #[property(name = "type")]
    pub kind: i32,

    #[property(name = "description")]
    pub description: String,

    #[property(name = "mainnationalid")]
    pub main_nationalid: Option<String>,

    #[property(name = "mainnationalidtype")]
    pub main_nationalid_type: Option<String>,

    #[property(name = "lastupdated")]
    pub last_updated: NaiveDateTime,

    #[property(name = "updatedby")]
    pub updated_by: Option<String>,
}

impl Audit {
    /// Legacy attribute names still resolvable on this entity
    #[must_use]
    pub fn aliases() -> &'static [(&'static str, &'static str)] {
        &[
            ("person_id", "personid"),
            ("master_id", "masterid"),
            ("main_nationalid", "mainnationalid"),
            ("main_nationalid_type", "mainnationalidtype"),
            ("last_updated", "lastupdated"),
            ("updated_by", "updatedby"),
        ]
    }

    /// Derived accessors exposed alongside stored columns
    #[must_use]
    pub fn computed() -> &'static [&'static str] {
        &[]
    }
}

/// Maps a person's local id onto the `(sending_facility, sending_extract,
/// localid)` triple a feed knows the patient by; the triple is unique
#[derive(Debug, Clone, Serialize, Deserialize, PropertyField)]
pub struct PidXRef {
    #[property(name = "id")]
    pub id: i32,

    /// References `Person::localid`
    #[property(name = "pid")]
    pub pid: String,

    #[property(name = "sendingfacility")]
    pub sending_facility: String,

    #[property(name = "sendingextract")]
    pub sending_extract: String,

    #[property(name = "localid")]
    pub localid: String,
}

impl PidXRef {
    /// Legacy attribute names still resolvable on this entity
    #[must_use]
    pub fn aliases() -> &'static [(&'static str, &'static str)] {
        &[
            ("sending_facility", "sendingfacility"),
            ("sending_extract", "sendingextract"),
        ]
    }

    /// Derived accessors exposed alongside stored columns
    #[must_use]
    pub fn computed() -> &'static [&'static str] {
        &["person"]
    }
}

impl std::fmt::Display for PidXRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PidXRef({}) <{} {} {} {}>",
            self.id,
            self.pid,
            self.sending_facility,
            self.sending_extract,
            self.localid.trim(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn person() -> Person {
        Person {
            id: 1,
            originator: "UKRDC".to_string(),
            localid: "L1".to_string(),
            localid_type: "CLPID ".to_string(),
            nationalid: None,
            nationalid_type: None,
            date_of_birth: NaiveDate::from_ymd_opt(1975, 3, 15).unwrap(),
            gender: "1".to_string(),
            date_of_death: None,
            givenname: Some("Ada".to_string()),
            surname: Some("Lovelace".to_string()),
            prev_surname: None,
            other_given_names: None,
            title: None,
            postcode: None,
            street: None,
            std_surname: None,
            std_prev_surname: None,
            std_given_name: None,
            std_postcode: None,
            skip_duplicate_check: None,
        }
    }

    #[test]
    fn person_display_trims_identifier_padding() {
        assert_eq!(
            person().to_string(),
            "Person(1) <Ada Lovelace 1975-03-15 CLPID:L1>"
        );
    }

    #[test]
    fn work_item_attributes_parse_as_json() {
        let item = WorkItem {
            id: 7,
            person_id: 1,
            master_id: 2,
            kind: 9,
            description: "demographic mismatch".to_string(),
            status: 1,
            creation_date: None,
            last_updated: NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            updated_by: None,
            update_description: None,
            attributes: Some(r#"{"SE":"PV"}"#.to_string()),
        };
        let parsed = item.parsed_attributes().unwrap().unwrap();
        assert_eq!(parsed["SE"], "PV");

        let empty = WorkItem {
            attributes: None,
            ..item
        };
        assert!(empty.parsed_attributes().unwrap().is_none());
    }
}
