//! The aggregate root of the registry entity graph.

use chrono::NaiveDateTime;
use macros::PropertyField;
use serde::{Deserialize, Serialize};

use crate::models::now;

/// One patient record as received from one sending source.
///
/// `pid` is the primary key of the whole aggregate: every child row carries
/// it and is deleted with the root. `ukrdcid` links records that describe the
/// same real-world patient across data feeds. It is deliberately not unique,
/// one record per sending source may share it.
#[derive(Debug, Clone, Serialize, Deserialize, PropertyField)]
pub struct PatientRecord {
    /// Primary key of the aggregate
    #[property(name = "pid")]
    pub pid: String,

    /// Facility the record was sent from
    #[property(name = "sendingfacility")]
    pub sendingfacility: String,

    /// Extract the record was sent in
    #[property(name = "sendingextract")]
    pub sendingextract: String,

    /// Patient identifier local to the sending facility
    #[property(name = "localpatientid")]
    pub localpatientid: String,

    #[property(name = "repositorycreationdate")]
    pub repository_creation_date: NaiveDateTime,

    #[property(name = "repositoryupdatedate")]
    pub repository_update_date: NaiveDateTime,

    #[property(name = "migrated")]
    pub migrated: bool,

    #[property(name = "creation_date")]
    pub creation_date: NaiveDateTime,

    /// Cross-feed linkage key; shared by records describing one patient
    #[property(name = "ukrdcid")]
    pub ukrdcid: Option<String>,

    #[property(name = "channelname")]
    pub channelname: Option<String>,

    #[property(name = "channelid")]
    pub channelid: Option<String>,

    #[property(name = "extracttime")]
    pub extract_time: Option<String>,

    #[property(name = "startdate")]
    pub startdate: Option<NaiveDateTime>,

    #[property(name = "stopdate")]
    pub stopdate: Option<NaiveDateTime>,

    #[property(name = "schemaversion")]
    pub schemaversion: Option<String>,

    #[property(name = "update_date")]
    pub update_date: Option<NaiveDateTime>,
}

impl PatientRecord {
    /// Create a record for a sending source
    #[must_use]
    pub fn new(
        pid: impl Into<String>,
        sendingfacility: impl Into<String>,
        sendingextract: impl Into<String>,
        localpatientid: impl Into<String>,
    ) -> Self {
        let created = now();
        Self {
            pid: pid.into(),
            sendingfacility: sendingfacility.into(),
            sendingextract: sendingextract.into(),
            localpatientid: localpatientid.into(),
            repository_creation_date: created,
            repository_update_date: created,
            migrated: false,
            creation_date: created,
            ukrdcid: None,
            channelname: None,
            channelid: None,
            extract_time: None,
            startdate: None,
            stopdate: None,
            schemaversion: None,
            update_date: None,
        }
    }

    /// Legacy attribute names still resolvable on this entity
    #[must_use]
    pub fn aliases() -> &'static [(&'static str, &'static str)] {
        &[
            ("id", "pid"),
            ("extract_time", "extracttime"),
            ("repository_creation_date", "repositorycreationdate"),
            ("repository_update_date", "repositoryupdatedate"),
        ]
    }

    /// Derived accessors exposed alongside stored columns (owned collections
    /// are reached through the store)
    #[must_use]
    pub fn computed() -> &'static [&'static str] {
        &[
            "patient",
            "lab_orders",
            "result_items",
            "observations",
            "social_histories",
            "family_histories",
            "allergies",
            "diagnoses",
            "cause_of_death",
            "renaldiagnoses",
            "medications",
            "dialysis_sessions",
            "documents",
            "encounters",
            "treatments",
            "program_memberships",
            "transplants",
            "surveys",
            "pvdata",
            "pvdelete",
        ]
    }
}

impl std::fmt::Display for PatientRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PatientRecord({}) <UKRDCID:{} CREATED:{}>",
            self.pid,
            self.ukrdcid.as_deref().unwrap_or("-"),
            self.repository_creation_date,
        )
    }
}
