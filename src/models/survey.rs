//! Patient surveys and their questions, scores and levels.

use chrono::NaiveDateTime;
use macros::PropertyField;
use serde::{Deserialize, Serialize};

use crate::models::now;

/// A completed survey on a patient record; owns its questions, scores
/// and levels
#[derive(Debug, Clone, Serialize, Deserialize, PropertyField)]
pub struct Survey {
    #[property(name = "id")]
    pub id: String,

    #[property(name = "pid")]
    pub pid: Option<String>,

    #[property(name = "creation_date")]
    pub creation_date: NaiveDateTime,

    #[property(name = "surveytime")]
    pub surveytime: NaiveDateTime,

    #[property(name = "surveytypecode")]
    pub surveytypecode: Option<String>,

    #[property(name = "surveytypecodestd")]
    pub surveytypecodestd: Option<String>,

    #[property(name = "surveytypedesc")]
    pub surveytypedesc: Option<String>,

    #[property(name = "typeoftreatment")]
    pub typeoftreatment: Option<String>,

    #[property(name = "hdlocation")]
    pub hdlocation: Option<String>,

    #[property(name = "template")]
    pub template: Option<String>,

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

    #[property(name = "update_date")]
    pub update_date: Option<NaiveDateTime>,
}

impl Survey {
    /// Create a survey taken at `surveytime` on a patient record
    #[must_use]
    pub fn new(id: impl Into<String>, pid: impl Into<String>, surveytime: NaiveDateTime) -> Self {
        Self {
            id: id.into(),
            pid: Some(pid.into()),
            creation_date: now(),
            surveytime,
            surveytypecode: None,
            surveytypecodestd: None,
            surveytypedesc: None,
            typeoftreatment: None,
            hdlocation: None,
            template: None,
            enteredbycode: None,
            enteredbycodestd: None,
            enteredbydesc: None,
            enteredatcode: None,
            enteredatcodestd: None,
            enteredatdesc: None,
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
        &["questions", "scores", "levels"]
    }
}

impl std::fmt::Display for Survey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Survey({}) <{}:{}>",
            self.pid.as_deref().unwrap_or("-"),
            self.surveytime,
            self.surveytypecode.as_deref().unwrap_or(""),
        )
    }
}

/// One answered question within a survey
#[derive(Debug, Clone, Serialize, Deserialize, PropertyField)]
pub struct Question {
    #[property(name = "id")]
    pub id: String,

    #[property(name = "surveyid")]
    pub surveyid: Option<String>,

    #[property(name = "creation_date")]
    pub creation_date: NaiveDateTime,

    #[property(name = "idx")]
    pub idx: Option<i32>,

    #[property(name = "questiontypecode")]
    pub questiontypecode: Option<String>,

    #[property(name = "questiontypecodestd")]
    pub questiontypecodestd: Option<String>,

    #[property(name = "questiontypedesc")]
    pub questiontypedesc: Option<String>,

    #[property(name = "response")]
    pub response: Option<String>,

    #[property(name = "questiontext")]
    pub questiontext: Option<String>,

    #[property(name = "update_date")]
    pub update_date: Option<NaiveDateTime>,
}

impl Question {
    /// Create a question row within a survey
    #[must_use]
    pub fn new(id: impl Into<String>, surveyid: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            surveyid: Some(surveyid.into()),
            creation_date: now(),
            idx: None,
            questiontypecode: None,
            questiontypecodestd: None,
            questiontypedesc: None,
            response: None,
            questiontext: None,
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

/// A derived score within a survey
#[derive(Debug, Clone, Serialize, Deserialize, PropertyField)]
pub struct Score {
    #[property(name = "id")]
    pub id: String,

    #[property(name = "surveyid")]
    pub surveyid: Option<String>,

    #[property(name = "creation_date")]
    pub creation_date: NaiveDateTime,

    #[property(name = "idx")]
    pub idx: Option<i32>,

    #[property(name = "scorevalue")]
    pub value: Option<String>,

    #[property(name = "scoretypecode")]
    pub scoretypecode: Option<String>,

    #[property(name = "scoretypecodestd")]
    pub scoretypecodestd: Option<String>,

    #[property(name = "scoretypedesc")]
    pub scoretypedesc: Option<String>,

    #[property(name = "update_date")]
    pub update_date: Option<NaiveDateTime>,
}

impl Score {
    /// Create a score row within a survey
    #[must_use]
    pub fn new(id: impl Into<String>, surveyid: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            surveyid: Some(surveyid.into()),
            creation_date: now(),
            idx: None,
            value: None,
            scoretypecode: None,
            scoretypecodestd: None,
            scoretypedesc: None,
            update_date: None,
        }
    }

    /// Legacy attribute names still resolvable on this entity
    #[must_use]
    pub fn aliases() -> &'static [(&'static str, &'static str)] {
        &[("value", "scorevalue")]
    }

    /// Derived accessors exposed alongside stored columns
    #[must_use]
    pub fn computed() -> &'static [&'static str] {
        &[]
    }
}

/// A reported level within a survey
#[derive(Debug, Clone, Serialize, Deserialize, PropertyField)]
pub struct Level {
    #[property(name = "id")]
    pub id: String,

    #[property(name = "surveyid")]
    pub surveyid: Option<String>,

    #[property(name = "creation_date")]
    pub creation_date: NaiveDateTime,

    #[property(name = "idx")]
    pub idx: Option<i32>,

    #[property(name = "levelvalue")]
    pub value: Option<String>,

    #[property(name = "leveltypecode")]
    pub leveltypecode: Option<String>,

    #[property(name = "leveltypecodestd")]
    pub leveltypecodestd: Option<String>,

    #[property(name = "leveltypedesc")]
    pub leveltypedesc: Option<String>,

    #[property(name = "update_date")]
    pub update_date: Option<NaiveDateTime>,
}

impl Level {
    /// Create a level row within a survey
    #[must_use]
    pub fn new(id: impl Into<String>, surveyid: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            surveyid: Some(surveyid.into()),
            creation_date: now(),
            idx: None,
            value: None,
            leveltypecode: None,
            leveltypecodestd: None,
            leveltypedesc: None,
            update_date: None,
        }
    }

    /// Legacy attribute names still resolvable on this entity
    #[must_use]
    pub fn aliases() -> &'static [(&'static str, &'static str)] {
        &[("value", "levelvalue")]
    }

    /// Derived accessors exposed alongside stored columns
    #[must_use]
    pub fn computed() -> &'static [&'static str] {
        &[]
    }
}
