//! Registry entity graph.
//!
//! One current schema: every entity keeps its stored column names as
//! canonical property names, carries its still-supported legacy names in an
//! alias table, and exposes derived accessors (projections through
//! relationships, resolver-backed descriptions) as computed attributes.
//!
//! The aggregate root is [`PatientRecord`]; everything reachable from it is
//! owned exclusively by one root and removed with it. The reference entities
//! in [`reference`] and the code catalog live outside every aggregate.

pub mod clinical;
pub mod document;
pub mod encounter;
pub mod lab;
pub mod medication;
pub mod patient;
pub mod patient_record;
pub mod pv;
pub mod reference;
pub mod survey;

pub use clinical::{
    Allergy, CauseOfDeath, Diagnosis, FamilyHistory, Observation, RenalDiagnosis, SocialHistory,
};
pub use document::Document;
pub use encounter::{DialysisSession, Encounter, ProgramMembership, Transplant, Treatment};
pub use lab::{LabOrder, ResultItem};
pub use medication::Medication;
pub use patient::{Address, ContactDetail, FamilyDoctor, Name, Patient, PatientNumber};
pub use patient_record::PatientRecord;
pub use pv::{PVData, PVDelete};
pub use reference::{Facility, Locations, ModalityCodes, RRDataDefinition};
pub use survey::{Level, Question, Score, Survey};

use chrono::{NaiveDateTime, Utc};

/// Current timestamp for row creation defaults
pub(crate) fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}
