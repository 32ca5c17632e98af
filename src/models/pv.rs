//! PatientView feed rows: the per-patient status summary and the
//! deletion requests sent by the feed.

use chrono::{NaiveDate, NaiveDateTime};
use macros::PropertyField;
use serde::{Deserialize, Serialize};

use crate::catalog::{self, CodeCatalog};
use crate::models::now;

/// Coding standard for renal replacement therapy status codes
pub const PV_RRTSTATUS: &str = "PV_RRTSTATUS";
/// Coding standard for transplant status codes
pub const PV_TPSTATUS: &str = "PV_TPSTATUS";

/// PatientView status summary; at most one per patient record, keyed on pid
#[derive(Debug, Clone, Serialize, Deserialize, PropertyField)]
pub struct PVData {
    #[property(name = "id")]
    pub id: String,

    #[property(name = "creation_date")]
    pub creation_date: NaiveDateTime,

    #[property(name = "update_date")]
    pub update_date: Option<NaiveDateTime>,

    #[property(name = "diagnosisdate")]
    pub diagnosisdate: Option<NaiveDate>,

    #[property(name = "bloodgroup")]
    pub bloodgroup: Option<String>,

    #[property(name = "rrtstatus")]
    pub rrtstatus: Option<String>,

    #[property(name = "tpstatus")]
    pub tpstatus: Option<String>,
}

impl PVData {
    /// Create the summary row for a patient record
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            creation_date: now(),
            update_date: None,
            diagnosisdate: None,
            bloodgroup: None,
            rrtstatus: None,
            tpstatus: None,
        }
    }

    /// Catalog description of the RRT status code under [`PV_RRTSTATUS`]
    #[must_use]
    pub fn rrtstatus_desc<'c>(&self, catalog: &'c CodeCatalog) -> Option<&'c str> {
        catalog::resolve_fixed(catalog, PV_RRTSTATUS, self.rrtstatus.as_deref())?
            .description
            .as_deref()
    }

    /// Catalog description of the transplant status code under [`PV_TPSTATUS`]
    #[must_use]
    pub fn tpstatus_desc<'c>(&self, catalog: &'c CodeCatalog) -> Option<&'c str> {
        catalog::resolve_fixed(catalog, PV_TPSTATUS, self.tpstatus.as_deref())?
            .description
            .as_deref()
    }

    /// Legacy attribute names still resolvable on this entity
    #[must_use]
    pub fn aliases() -> &'static [(&'static str, &'static str)] {
        &[]
    }

    /// Derived accessors exposed alongside stored columns
    #[must_use]
    pub fn computed() -> &'static [&'static str] {
        &["rrtstatus_desc", "tpstatus_desc"]
    }
}

impl std::fmt::Display for PVData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PVData({})", self.id)
    }
}

/// A deletion request from the PatientView feed, identifying a result by
/// observation time and service id
#[derive(Debug, Clone, Serialize, Deserialize, PropertyField)]
pub struct PVDelete {
    #[property(name = "did")]
    pub did: i64,

    #[property(name = "pid")]
    pub pid: Option<String>,

    #[property(name = "creation_date")]
    pub creation_date: NaiveDateTime,

    #[property(name = "observationtime")]
    pub observation_time: Option<NaiveDateTime>,

    #[property(name = "serviceidcode")]
    pub service_id: Option<String>,

    #[property(name = "update_date")]
    pub update_date: Option<NaiveDateTime>,
}

impl PVDelete {
    /// Create a deletion request on a patient record
    #[must_use]
    pub fn new(did: i64, pid: impl Into<String>) -> Self {
        Self {
            did,
            pid: Some(pid.into()),
            creation_date: now(),
            observation_time: None,
            service_id: None,
            update_date: None,
        }
    }

    /// Legacy attribute names still resolvable on this entity
    #[must_use]
    pub fn aliases() -> &'static [(&'static str, &'static str)] {
        &[
            ("observation_time", "observationtime"),
            ("service_id", "serviceidcode"),
        ]
    }

    /// Derived accessors exposed alongside stored columns
    #[must_use]
    pub fn computed() -> &'static [&'static str] {
        &[]
    }
}
