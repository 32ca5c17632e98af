//! Documents attached to a patient record.

use chrono::NaiveDateTime;
use macros::PropertyField;
use serde::{Deserialize, Serialize};

use crate::models::now;

/// A letter, report or scanned file attached to a patient record; the file
/// content travels in `stream` when not referenced by URL
#[derive(Debug, Clone, Serialize, Deserialize, PropertyField)]
pub struct Document {
    #[property(name = "id")]
    pub id: String,

    #[property(name = "pid")]
    pub pid: Option<String>,

    #[property(name = "repositoryupdatedate")]
    pub repository_update_date: NaiveDateTime,

    #[property(name = "creation_date")]
    pub creation_date: NaiveDateTime,

    #[property(name = "idx")]
    pub idx: Option<i32>,

    #[property(name = "documenttime")]
    pub documenttime: Option<NaiveDateTime>,

    #[property(name = "notetext")]
    pub notetext: Option<String>,

    #[property(name = "documenttypecode")]
    pub documenttypecode: Option<String>,

    #[property(name = "documenttypecodestd")]
    pub documenttypecodestd: Option<String>,

    #[property(name = "documenttypedesc")]
    pub documenttypedesc: Option<String>,

    #[property(name = "cliniciancode")]
    pub cliniciancode: Option<String>,

    #[property(name = "cliniciancodestd")]
    pub cliniciancodestd: Option<String>,

    #[property(name = "cliniciandesc")]
    pub cliniciandesc: Option<String>,

    #[property(name = "documentname")]
    pub documentname: Option<String>,

    #[property(name = "statuscode")]
    pub statuscode: Option<String>,

    #[property(name = "statuscodestd")]
    pub statuscodestd: Option<String>,

    #[property(name = "statusdesc")]
    pub statusdesc: Option<String>,

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

    #[property(name = "filetype")]
    pub filetype: Option<String>,

    #[property(name = "filename")]
    pub filename: Option<String>,

    #[property(name = "stream")]
    pub stream: Option<Vec<u8>>,

    #[property(name = "documenturl")]
    pub documenturl: Option<String>,

    #[property(name = "updatedon")]
    pub updatedon: Option<NaiveDateTime>,

    #[property(name = "actioncode")]
    pub actioncode: Option<String>,

    #[property(name = "externalid")]
    pub externalid: Option<String>,

    #[property(name = "update_date")]
    pub update_date: Option<NaiveDateTime>,
}

impl Document {
    /// Create a document on a patient record
    #[must_use]
    pub fn new(id: impl Into<String>, pid: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pid: Some(pid.into()),
            repository_update_date: now(),
            creation_date: now(),
            idx: None,
            documenttime: None,
            notetext: None,
            documenttypecode: None,
            documenttypecodestd: None,
            documenttypedesc: None,
            cliniciancode: None,
            cliniciancodestd: None,
            cliniciandesc: None,
            documentname: None,
            statuscode: None,
            statuscodestd: None,
            statusdesc: None,
            enteredbycode: None,
            enteredbycodestd: None,
            enteredbydesc: None,
            enteredatcode: None,
            enteredatcodestd: None,
            enteredatdesc: None,
            filetype: None,
            filename: None,
            stream: None,
            documenturl: None,
            updatedon: None,
            actioncode: None,
            externalid: None,
            update_date: None,
        }
    }

    /// Legacy attribute names still resolvable on this entity
    #[must_use]
    pub fn aliases() -> &'static [(&'static str, &'static str)] {
        &[("repository_update_date", "repositoryupdatedate")]
    }

    /// Derived accessors exposed alongside stored columns
    #[must_use]
    pub fn computed() -> &'static [&'static str] {
        &[]
    }
}
