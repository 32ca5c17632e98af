//! In-memory stores realizing the persistence contracts of the two graphs.
//!
//! [`RegistryStore`] holds the clinical graph and enforces its ownership
//! rules: child rows require their parent, single-row satellites are keyed
//! by pid, and removing a patient record removes everything it owns in one
//! atomic step. Deletion is planned first and applied second, so a failed
//! delete leaves the store untouched.

pub mod empi;

pub use empi::EmpiStore;

use rustc_hash::FxHashMap;

use crate::catalog::{CatalogError, CodeCatalog, CodeEntry};
use crate::models::{
    Address, Allergy, CauseOfDeath, ContactDetail, DialysisSession, Diagnosis, Document, Encounter,
    Facility, FamilyDoctor, FamilyHistory, LabOrder, Level, Medication, Name, Observation, PVData,
    PVDelete, Patient, PatientNumber, PatientRecord, ProgramMembership, Question, RenalDiagnosis,
    ResultItem, Score, SocialHistory, Survey, Transplant, Treatment,
};

/// Storage-level failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Insert would overwrite an existing row
    #[error("{entity} {key} already exists")]
    Duplicate {
        /// Entity type name
        entity: &'static str,
        /// Primary key of the offending row
        key: String,
    },

    /// The addressed row does not exist
    #[error("{entity} {key} not found")]
    NotFound {
        /// Entity type name
        entity: &'static str,
        /// Primary key looked up
        key: String,
    },

    /// Insert references a parent row that does not exist
    #[error("{entity} {key} references missing {parent} {parent_key}")]
    MissingParent {
        /// Entity type name of the inserted row
        entity: &'static str,
        /// Primary key of the inserted row
        key: String,
        /// Entity type name of the absent parent
        parent: &'static str,
        /// Key the row pointed at
        parent_key: String,
    },

    /// Delete refused because another row still references the target
    #[error("cannot delete {entity} {key}: still referenced by {referent}")]
    Restricted {
        /// Entity type name of the delete target
        entity: &'static str,
        /// Primary key of the delete target
        key: String,
        /// Entity type name holding the reference
        referent: &'static str,
    },

    /// Uniqueness violation on a non-primary key
    #[error("{entity}: duplicate {constraint} {value}")]
    UniqueViolation {
        /// Entity type name
        entity: &'static str,
        /// Name of the violated constraint
        constraint: &'static str,
        /// The value that collided
        value: String,
    },
}

/// Row counts removed by one cascade delete
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteSummary {
    pub patient_records: usize,
    pub patients: usize,
    pub names: usize,
    pub patient_numbers: usize,
    pub addresses: usize,
    pub contact_details: usize,
    pub family_doctors: usize,
    pub lab_orders: usize,
    pub result_items: usize,
    pub observations: usize,
    pub diagnoses: usize,
    pub renal_diagnoses: usize,
    pub causes_of_death: usize,
    pub social_histories: usize,
    pub family_histories: usize,
    pub allergies: usize,
    pub medications: usize,
    pub documents: usize,
    pub encounters: usize,
    pub treatments: usize,
    pub dialysis_sessions: usize,
    pub transplants: usize,
    pub program_memberships: usize,
    pub surveys: usize,
    pub questions: usize,
    pub scores: usize,
    pub levels: usize,
    pub pvdata: usize,
    pub pvdeletes: usize,
}

impl DeleteSummary {
    /// Total rows removed
    #[must_use]
    pub fn total(&self) -> usize {
        self.patient_records
            + self.patients
            + self.names
            + self.patient_numbers
            + self.addresses
            + self.contact_details
            + self.family_doctors
            + self.lab_orders
            + self.result_items
            + self.observations
            + self.diagnoses
            + self.renal_diagnoses
            + self.causes_of_death
            + self.social_histories
            + self.family_histories
            + self.allergies
            + self.medications
            + self.documents
            + self.encounters
            + self.treatments
            + self.dialysis_sessions
            + self.transplants
            + self.program_memberships
            + self.surveys
            + self.questions
            + self.scores
            + self.levels
            + self.pvdata
            + self.pvdeletes
    }
}

/// The clinical graph and its reference data, in memory
#[derive(Debug, Default)]
pub struct RegistryStore {
    catalog: CodeCatalog,
    facilities: FxHashMap<(String, String), Facility>,

    patient_records: FxHashMap<String, PatientRecord>,
    patients: FxHashMap<String, Patient>,
    names: FxHashMap<String, Name>,
    patient_numbers: FxHashMap<String, PatientNumber>,
    addresses: FxHashMap<String, Address>,
    contact_details: FxHashMap<String, ContactDetail>,
    family_doctors: FxHashMap<String, FamilyDoctor>,

    lab_orders: FxHashMap<String, LabOrder>,
    result_items: FxHashMap<String, ResultItem>,

    observations: FxHashMap<String, Observation>,
    diagnoses: FxHashMap<String, Diagnosis>,
    renal_diagnoses: FxHashMap<String, RenalDiagnosis>,
    causes_of_death: FxHashMap<String, CauseOfDeath>,
    social_histories: FxHashMap<String, SocialHistory>,
    family_histories: FxHashMap<String, FamilyHistory>,
    allergies: FxHashMap<String, Allergy>,

    medications: FxHashMap<String, Medication>,
    documents: FxHashMap<String, Document>,

    encounters: FxHashMap<String, Encounter>,
    treatments: FxHashMap<String, Treatment>,
    dialysis_sessions: FxHashMap<String, DialysisSession>,
    transplants: FxHashMap<String, Transplant>,
    program_memberships: FxHashMap<String, ProgramMembership>,

    surveys: FxHashMap<String, Survey>,
    questions: FxHashMap<String, Question>,
    scores: FxHashMap<String, Score>,
    levels: FxHashMap<String, Level>,

    pvdata: FxHashMap<String, PVData>,
    pvdeletes: FxHashMap<i64, PVDelete>,
}

impl RegistryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The code catalog
    #[must_use]
    pub fn catalog(&self) -> &CodeCatalog {
        &self.catalog
    }

    /// Add a catalog entry
    pub fn insert_code(&mut self, entry: CodeEntry) -> Result<(), CatalogError> {
        self.catalog.insert(entry)
    }

    /// Remove a catalog entry; refused while a facility is keyed by the pair
    pub fn delete_code(&mut self, coding_standard: &str, code: &str) -> Result<(), StoreError> {
        let key = (coding_standard.to_string(), code.to_string());
        if self.facilities.contains_key(&key) {
            return Err(StoreError::Restricted {
                entity: "Code",
                key: format!("{coding_standard}:{code}"),
                referent: "Facility",
            });
        }
        if self.catalog.remove(coding_standard, code).is_none() {
            return Err(StoreError::NotFound {
                entity: "Code",
                key: format!("{coding_standard}:{code}"),
            });
        }
        Ok(())
    }

    /// Add a facility; its code pair must already be catalogued
    pub fn insert_facility(&mut self, facility: Facility) -> Result<(), StoreError> {
        if self
            .catalog
            .get(&facility.coding_standard, &facility.code)
            .is_none()
        {
            return Err(StoreError::MissingParent {
                entity: "Facility",
                key: format!("{}:{}", facility.coding_standard, facility.code),
                parent: "Code",
                parent_key: format!("{}:{}", facility.coding_standard, facility.code),
            });
        }
        let key = (facility.coding_standard.clone(), facility.code.clone());
        if self.facilities.contains_key(&key) {
            return Err(StoreError::Duplicate {
                entity: "Facility",
                key: format!("{}:{}", key.0, key.1),
            });
        }
        self.facilities.insert(key, facility);
        Ok(())
    }

    /// Look up a facility by its code pair
    #[must_use]
    pub fn facility(&self, coding_standard: &str, code: &str) -> Option<&Facility> {
        self.facilities
            .get(&(coding_standard.to_string(), code.to_string()))
    }

    /// Add an aggregate root
    pub fn insert_patient_record(&mut self, record: PatientRecord) -> Result<(), StoreError> {
        if self.patient_records.contains_key(&record.pid) {
            return Err(StoreError::Duplicate {
                entity: "PatientRecord",
                key: record.pid,
            });
        }
        self.patient_records.insert(record.pid.clone(), record);
        Ok(())
    }

    /// Look up an aggregate root
    #[must_use]
    pub fn patient_record(&self, pid: &str) -> Option<&PatientRecord> {
        self.patient_records.get(pid)
    }

    /// Number of aggregate roots
    #[must_use]
    pub fn patient_record_count(&self) -> usize {
        self.patient_records.len()
    }

    fn require_record(&self, entity: &'static str, key: &str, pid: &str) -> Result<(), StoreError> {
        if self.patient_records.contains_key(pid) {
            Ok(())
        } else {
            Err(StoreError::MissingParent {
                entity,
                key: key.to_string(),
                parent: "PatientRecord",
                parent_key: pid.to_string(),
            })
        }
    }

    /// Add the demographic record for a patient record
    pub fn insert_patient(&mut self, patient: Patient) -> Result<(), StoreError> {
        self.require_record("Patient", &patient.pid, &patient.pid)?;
        if self.patients.contains_key(&patient.pid) {
            return Err(StoreError::Duplicate {
                entity: "Patient",
                key: patient.pid,
            });
        }
        self.patients.insert(patient.pid.clone(), patient);
        Ok(())
    }

    /// The demographic record for a patient record
    #[must_use]
    pub fn patient(&self, pid: &str) -> Option<&Patient> {
        self.patients.get(pid)
    }

    /// Add a name; the patient's demographic record must exist
    pub fn insert_name(&mut self, name: Name) -> Result<(), StoreError> {
        let pid = name.pid.clone().unwrap_or_default();
        if !self.patients.contains_key(&pid) {
            return Err(StoreError::MissingParent {
                entity: "Name",
                key: name.id,
                parent: "Patient",
                parent_key: pid,
            });
        }
        if self.names.contains_key(&name.id) {
            return Err(StoreError::Duplicate {
                entity: "Name",
                key: name.id,
            });
        }
        self.names.insert(name.id.clone(), name);
        Ok(())
    }

    /// All names recorded for a patient, ordered by id
    #[must_use]
    pub fn names_for(&self, pid: &str) -> Vec<&Name> {
        let mut rows: Vec<&Name> = self
            .names
            .values()
            .filter(|name| name.pid.as_deref() == Some(pid))
            .collect();
        rows.sort_by_key(|name| name.id.as_str());
        rows
    }

    /// The patient's usual name, where nameuse is "L".
    /// "First" means lowest row id: the store has no insertion order, so id
    /// order stands in for it and keeps the pick deterministic
    #[must_use]
    pub fn main_name(&self, pid: &str) -> Option<&Name> {
        self.names_for(pid)
            .into_iter()
            .find(|name| name.nameuse.as_deref() == Some("L"))
    }

    /// Add an identifying number; the demographic record must exist
    pub fn insert_patient_number(&mut self, number: PatientNumber) -> Result<(), StoreError> {
        let pid = number.pid.clone().unwrap_or_default();
        if !self.patients.contains_key(&pid) {
            return Err(StoreError::MissingParent {
                entity: "PatientNumber",
                key: number.id,
                parent: "Patient",
                parent_key: pid,
            });
        }
        if self.patient_numbers.contains_key(&number.id) {
            return Err(StoreError::Duplicate {
                entity: "PatientNumber",
                key: number.id,
            });
        }
        self.patient_numbers.insert(number.id.clone(), number);
        Ok(())
    }

    /// All identifying numbers for a patient, ordered by id
    #[must_use]
    pub fn numbers_for(&self, pid: &str) -> Vec<&PatientNumber> {
        let mut rows: Vec<&PatientNumber> = self
            .patient_numbers
            .values()
            .filter(|number| number.pid.as_deref() == Some(pid))
            .collect();
        rows.sort_by_key(|number| number.id.as_str());
        rows
    }

    /// The first NHS, CHI or HSC number (numbertype "NI") for a patient.
    /// NI numbers issued by any other organization do not count
    #[must_use]
    pub fn first_ni_number(&self, pid: &str) -> Option<&str> {
        const NATIONAL: [&str; 3] = ["NHS", "CHI", "HSC"];
        self.numbers_for(pid)
            .into_iter()
            .find(|number| {
                number.numbertype.as_deref() == Some("NI")
                    && number
                        .organization
                        .as_deref()
                        .is_some_and(|org| NATIONAL.contains(&org))
            })
            .and_then(|number| number.patientid.as_deref())
    }

    /// The first local hospital number (numbertype "MRN", organization
    /// "LOCALHOSP") for a patient
    #[must_use]
    pub fn first_hospital_number(&self, pid: &str) -> Option<&str> {
        self.numbers_for(pid)
            .into_iter()
            .find(|number| {
                number.numbertype.as_deref() == Some("MRN")
                    && number.organization.as_deref() == Some("LOCALHOSP")
            })
            .and_then(|number| number.patientid.as_deref())
    }

    /// Add an address; the demographic record must exist
    pub fn insert_address(&mut self, address: Address) -> Result<(), StoreError> {
        let pid = address.pid.clone().unwrap_or_default();
        if !self.patients.contains_key(&pid) {
            return Err(StoreError::MissingParent {
                entity: "Address",
                key: address.id,
                parent: "Patient",
                parent_key: pid,
            });
        }
        if self.addresses.contains_key(&address.id) {
            return Err(StoreError::Duplicate {
                entity: "Address",
                key: address.id,
            });
        }
        self.addresses.insert(address.id.clone(), address);
        Ok(())
    }

    /// Add a contact detail; the demographic record must exist
    pub fn insert_contact_detail(&mut self, detail: ContactDetail) -> Result<(), StoreError> {
        let pid = detail.pid.clone().unwrap_or_default();
        if !self.patients.contains_key(&pid) {
            return Err(StoreError::MissingParent {
                entity: "ContactDetail",
                key: detail.id,
                parent: "Patient",
                parent_key: pid,
            });
        }
        if self.contact_details.contains_key(&detail.id) {
            return Err(StoreError::Duplicate {
                entity: "ContactDetail",
                key: detail.id,
            });
        }
        self.contact_details.insert(detail.id.clone(), detail);
        Ok(())
    }

    /// Add the family doctor row, keyed by the patient's pid
    pub fn insert_family_doctor(&mut self, doctor: FamilyDoctor) -> Result<(), StoreError> {
        if !self.patients.contains_key(&doctor.id) {
            return Err(StoreError::MissingParent {
                entity: "FamilyDoctor",
                key: doctor.id.clone(),
                parent: "Patient",
                parent_key: doctor.id,
            });
        }
        if self.family_doctors.contains_key(&doctor.id) {
            return Err(StoreError::Duplicate {
                entity: "FamilyDoctor",
                key: doctor.id,
            });
        }
        self.family_doctors.insert(doctor.id.clone(), doctor);
        Ok(())
    }

    /// Add a lab order; its patient record must exist
    pub fn insert_lab_order(&mut self, order: LabOrder) -> Result<(), StoreError> {
        let pid = order.pid.clone().unwrap_or_default();
        self.require_record("LabOrder", &order.id, &pid)?;
        if self.lab_orders.contains_key(&order.id) {
            return Err(StoreError::Duplicate {
                entity: "LabOrder",
                key: order.id,
            });
        }
        self.lab_orders.insert(order.id.clone(), order);
        Ok(())
    }

    /// All lab orders for a patient record, ordered by id
    #[must_use]
    pub fn lab_orders_for(&self, pid: &str) -> Vec<&LabOrder> {
        let mut rows: Vec<&LabOrder> = self
            .lab_orders
            .values()
            .filter(|order| order.pid.as_deref() == Some(pid))
            .collect();
        rows.sort_by_key(|order| order.id.as_str());
        rows
    }

    /// Add a result item; its lab order must exist
    pub fn insert_result_item(&mut self, item: ResultItem) -> Result<(), StoreError> {
        let order_id = item.order_id.clone().unwrap_or_default();
        if !self.lab_orders.contains_key(&order_id) {
            return Err(StoreError::MissingParent {
                entity: "ResultItem",
                key: item.id,
                parent: "LabOrder",
                parent_key: order_id,
            });
        }
        if self.result_items.contains_key(&item.id) {
            return Err(StoreError::Duplicate {
                entity: "ResultItem",
                key: item.id,
            });
        }
        self.result_items.insert(item.id.clone(), item);
        Ok(())
    }

    /// All result items under a lab order, ordered by id
    #[must_use]
    pub fn result_items_for(&self, order_id: &str) -> Vec<&ResultItem> {
        let mut rows: Vec<&ResultItem> = self
            .result_items
            .values()
            .filter(|item| item.order_id.as_deref() == Some(order_id))
            .collect();
        rows.sort_by_key(|item| item.id.as_str());
        rows
    }

    /// A result item's patient record id, reached through its order
    #[must_use]
    pub fn result_item_pid(&self, item_id: &str) -> Option<&str> {
        let item = self.result_items.get(item_id)?;
        let order = self.lab_orders.get(item.order_id.as_deref()?)?;
        order.pid.as_deref()
    }

    /// Total stored result items
    #[must_use]
    pub fn result_item_count(&self) -> usize {
        self.result_items.len()
    }

    /// Add an observation; its patient record must exist
    pub fn insert_observation(&mut self, row: Observation) -> Result<(), StoreError> {
        let pid = row.pid.clone().unwrap_or_default();
        self.require_record("Observation", &row.id, &pid)?;
        if self.observations.contains_key(&row.id) {
            return Err(StoreError::Duplicate {
                entity: "Observation",
                key: row.id,
            });
        }
        self.observations.insert(row.id.clone(), row);
        Ok(())
    }

    /// Add a diagnosis; its patient record must exist
    pub fn insert_diagnosis(&mut self, row: Diagnosis) -> Result<(), StoreError> {
        let pid = row.pid.clone().unwrap_or_default();
        self.require_record("Diagnosis", &row.id, &pid)?;
        if self.diagnoses.contains_key(&row.id) {
            return Err(StoreError::Duplicate {
                entity: "Diagnosis",
                key: row.id,
            });
        }
        self.diagnoses.insert(row.id.clone(), row);
        Ok(())
    }

    /// Set the renal diagnosis; one row per patient record
    pub fn insert_renal_diagnosis(&mut self, row: RenalDiagnosis) -> Result<(), StoreError> {
        self.require_record("RenalDiagnosis", &row.pid, &row.pid)?;
        if self.renal_diagnoses.contains_key(&row.pid) {
            return Err(StoreError::Duplicate {
                entity: "RenalDiagnosis",
                key: row.pid,
            });
        }
        self.renal_diagnoses.insert(row.pid.clone(), row);
        Ok(())
    }

    /// Set the cause of death; one row per patient record
    pub fn insert_cause_of_death(&mut self, row: CauseOfDeath) -> Result<(), StoreError> {
        self.require_record("CauseOfDeath", &row.pid, &row.pid)?;
        if self.causes_of_death.contains_key(&row.pid) {
            return Err(StoreError::Duplicate {
                entity: "CauseOfDeath",
                key: row.pid,
            });
        }
        self.causes_of_death.insert(row.pid.clone(), row);
        Ok(())
    }

    /// Add a social history row; its patient record must exist
    pub fn insert_social_history(&mut self, row: SocialHistory) -> Result<(), StoreError> {
        let pid = row.pid.clone().unwrap_or_default();
        self.require_record("SocialHistory", &row.id, &pid)?;
        if self.social_histories.contains_key(&row.id) {
            return Err(StoreError::Duplicate {
                entity: "SocialHistory",
                key: row.id,
            });
        }
        self.social_histories.insert(row.id.clone(), row);
        Ok(())
    }

    /// Add a family history row; its patient record must exist
    pub fn insert_family_history(&mut self, row: FamilyHistory) -> Result<(), StoreError> {
        let pid = row.pid.clone().unwrap_or_default();
        self.require_record("FamilyHistory", &row.id, &pid)?;
        if self.family_histories.contains_key(&row.id) {
            return Err(StoreError::Duplicate {
                entity: "FamilyHistory",
                key: row.id,
            });
        }
        self.family_histories.insert(row.id.clone(), row);
        Ok(())
    }

    /// Add an allergy; its patient record must exist
    pub fn insert_allergy(&mut self, row: Allergy) -> Result<(), StoreError> {
        let pid = row.pid.clone().unwrap_or_default();
        self.require_record("Allergy", &row.id, &pid)?;
        if self.allergies.contains_key(&row.id) {
            return Err(StoreError::Duplicate {
                entity: "Allergy",
                key: row.id,
            });
        }
        self.allergies.insert(row.id.clone(), row);
        Ok(())
    }

    /// Add a medication; its patient record must exist
    pub fn insert_medication(&mut self, row: Medication) -> Result<(), StoreError> {
        let pid = row.pid.clone().unwrap_or_default();
        self.require_record("Medication", &row.id, &pid)?;
        if self.medications.contains_key(&row.id) {
            return Err(StoreError::Duplicate {
                entity: "Medication",
                key: row.id,
            });
        }
        self.medications.insert(row.id.clone(), row);
        Ok(())
    }

    /// Add a document; its patient record must exist
    pub fn insert_document(&mut self, row: Document) -> Result<(), StoreError> {
        let pid = row.pid.clone().unwrap_or_default();
        self.require_record("Document", &row.id, &pid)?;
        if self.documents.contains_key(&row.id) {
            return Err(StoreError::Duplicate {
                entity: "Document",
                key: row.id,
            });
        }
        self.documents.insert(row.id.clone(), row);
        Ok(())
    }

    /// Add an encounter; its patient record must exist
    pub fn insert_encounter(&mut self, row: Encounter) -> Result<(), StoreError> {
        let pid = row.pid.clone().unwrap_or_default();
        self.require_record("Encounter", &row.id, &pid)?;
        if self.encounters.contains_key(&row.id) {
            return Err(StoreError::Duplicate {
                entity: "Encounter",
                key: row.id,
            });
        }
        self.encounters.insert(row.id.clone(), row);
        Ok(())
    }

    /// Add a treatment; its patient record must exist
    pub fn insert_treatment(&mut self, row: Treatment) -> Result<(), StoreError> {
        let pid = row.pid.clone().unwrap_or_default();
        self.require_record("Treatment", &row.id, &pid)?;
        if self.treatments.contains_key(&row.id) {
            return Err(StoreError::Duplicate {
                entity: "Treatment",
                key: row.id,
            });
        }
        self.treatments.insert(row.id.clone(), row);
        Ok(())
    }

    /// Add a dialysis session; its patient record must exist
    pub fn insert_dialysis_session(&mut self, row: DialysisSession) -> Result<(), StoreError> {
        let pid = row.pid.clone().unwrap_or_default();
        self.require_record("DialysisSession", &row.id, &pid)?;
        if self.dialysis_sessions.contains_key(&row.id) {
            return Err(StoreError::Duplicate {
                entity: "DialysisSession",
                key: row.id,
            });
        }
        self.dialysis_sessions.insert(row.id.clone(), row);
        Ok(())
    }

    /// Add a transplant; its patient record must exist
    pub fn insert_transplant(&mut self, row: Transplant) -> Result<(), StoreError> {
        let pid = row.pid.clone().unwrap_or_default();
        self.require_record("Transplant", &row.id, &pid)?;
        if self.transplants.contains_key(&row.id) {
            return Err(StoreError::Duplicate {
                entity: "Transplant",
                key: row.id,
            });
        }
        self.transplants.insert(row.id.clone(), row);
        Ok(())
    }

    /// Add a program membership; its patient record must exist
    pub fn insert_program_membership(&mut self, row: ProgramMembership) -> Result<(), StoreError> {
        let pid = row.pid.clone().unwrap_or_default();
        self.require_record("ProgramMembership", &row.id, &pid)?;
        if self.program_memberships.contains_key(&row.id) {
            return Err(StoreError::Duplicate {
                entity: "ProgramMembership",
                key: row.id,
            });
        }
        self.program_memberships.insert(row.id.clone(), row);
        Ok(())
    }

    /// Add a survey; its patient record must exist
    pub fn insert_survey(&mut self, row: Survey) -> Result<(), StoreError> {
        let pid = row.pid.clone().unwrap_or_default();
        self.require_record("Survey", &row.id, &pid)?;
        if self.surveys.contains_key(&row.id) {
            return Err(StoreError::Duplicate {
                entity: "Survey",
                key: row.id,
            });
        }
        self.surveys.insert(row.id.clone(), row);
        Ok(())
    }

    /// Add a question; its survey must exist
    pub fn insert_question(&mut self, row: Question) -> Result<(), StoreError> {
        let surveyid = row.surveyid.clone().unwrap_or_default();
        if !self.surveys.contains_key(&surveyid) {
            return Err(StoreError::MissingParent {
                entity: "Question",
                key: row.id,
                parent: "Survey",
                parent_key: surveyid,
            });
        }
        if self.questions.contains_key(&row.id) {
            return Err(StoreError::Duplicate {
                entity: "Question",
                key: row.id,
            });
        }
        self.questions.insert(row.id.clone(), row);
        Ok(())
    }

    /// Add a score; its survey must exist
    pub fn insert_score(&mut self, row: Score) -> Result<(), StoreError> {
        let surveyid = row.surveyid.clone().unwrap_or_default();
        if !self.surveys.contains_key(&surveyid) {
            return Err(StoreError::MissingParent {
                entity: "Score",
                key: row.id,
                parent: "Survey",
                parent_key: surveyid,
            });
        }
        if self.scores.contains_key(&row.id) {
            return Err(StoreError::Duplicate {
                entity: "Score",
                key: row.id,
            });
        }
        self.scores.insert(row.id.clone(), row);
        Ok(())
    }

    /// Add a level; its survey must exist
    pub fn insert_level(&mut self, row: Level) -> Result<(), StoreError> {
        let surveyid = row.surveyid.clone().unwrap_or_default();
        if !self.surveys.contains_key(&surveyid) {
            return Err(StoreError::MissingParent {
                entity: "Level",
                key: row.id,
                parent: "Survey",
                parent_key: surveyid,
            });
        }
        if self.levels.contains_key(&row.id) {
            return Err(StoreError::Duplicate {
                entity: "Level",
                key: row.id,
            });
        }
        self.levels.insert(row.id.clone(), row);
        Ok(())
    }

    /// Set the PatientView status summary; one row per patient record
    pub fn insert_pvdata(&mut self, row: PVData) -> Result<(), StoreError> {
        self.require_record("PVData", &row.id, &row.id)?;
        if self.pvdata.contains_key(&row.id) {
            return Err(StoreError::Duplicate {
                entity: "PVData",
                key: row.id,
            });
        }
        self.pvdata.insert(row.id.clone(), row);
        Ok(())
    }

    /// Add a PatientView deletion request; its patient record must exist
    pub fn insert_pvdelete(&mut self, row: PVDelete) -> Result<(), StoreError> {
        let pid = row.pid.clone().unwrap_or_default();
        self.require_record("PVDelete", &row.did.to_string(), &pid)?;
        if self.pvdeletes.contains_key(&row.did) {
            return Err(StoreError::Duplicate {
                entity: "PVDelete",
                key: row.did.to_string(),
            });
        }
        self.pvdeletes.insert(row.did, row);
        Ok(())
    }

    /// Remove a patient record and everything it owns.
    ///
    /// The whole cascade is planned before anything is touched, then applied
    /// in one pass; an unknown pid fails with the store unchanged.
    pub fn delete_patient_record(&mut self, pid: &str) -> Result<DeleteSummary, StoreError> {
        if !self.patient_records.contains_key(pid) {
            return Err(StoreError::NotFound {
                entity: "PatientRecord",
                key: pid.to_string(),
            });
        }

        let order_ids: Vec<String> = self
            .lab_orders
            .values()
            .filter(|order| order.pid.as_deref() == Some(pid))
            .map(|order| order.id.clone())
            .collect();
        let item_ids: Vec<String> = self
            .result_items
            .values()
            .filter(|item| {
                item.order_id
                    .as_deref()
                    .is_some_and(|order_id| order_ids.iter().any(|id| id == order_id))
            })
            .map(|item| item.id.clone())
            .collect();

        let survey_ids: Vec<String> = self
            .surveys
            .values()
            .filter(|survey| survey.pid.as_deref() == Some(pid))
            .map(|survey| survey.id.clone())
            .collect();
        let owned_by_survey = |surveyid: Option<&str>| {
            surveyid.is_some_and(|surveyid| survey_ids.iter().any(|id| id == surveyid))
        };
        let question_ids: Vec<String> = self
            .questions
            .values()
            .filter(|row| owned_by_survey(row.surveyid.as_deref()))
            .map(|row| row.id.clone())
            .collect();
        let score_ids: Vec<String> = self
            .scores
            .values()
            .filter(|row| owned_by_survey(row.surveyid.as_deref()))
            .map(|row| row.id.clone())
            .collect();
        let level_ids: Vec<String> = self
            .levels
            .values()
            .filter(|row| owned_by_survey(row.surveyid.as_deref()))
            .map(|row| row.id.clone())
            .collect();

        fn ids_for_pid<T>(
            rows: &FxHashMap<String, T>,
            pid: &str,
            row_pid: impl Fn(&T) -> Option<&str>,
        ) -> Vec<String> {
            rows.iter()
                .filter(|(_, row)| row_pid(row) == Some(pid))
                .map(|(id, _)| id.clone())
                .collect()
        }

        let name_ids = ids_for_pid(&self.names, pid, |row: &Name| row.pid.as_deref());
        let number_ids = ids_for_pid(&self.patient_numbers, pid, |row: &PatientNumber| {
            row.pid.as_deref()
        });
        let address_ids = ids_for_pid(&self.addresses, pid, |row: &Address| row.pid.as_deref());
        let detail_ids = ids_for_pid(&self.contact_details, pid, |row: &ContactDetail| {
            row.pid.as_deref()
        });
        let observation_ids =
            ids_for_pid(&self.observations, pid, |row: &Observation| row.pid.as_deref());
        let diagnosis_ids = ids_for_pid(&self.diagnoses, pid, |row: &Diagnosis| row.pid.as_deref());
        let social_ids = ids_for_pid(&self.social_histories, pid, |row: &SocialHistory| {
            row.pid.as_deref()
        });
        let family_ids = ids_for_pid(&self.family_histories, pid, |row: &FamilyHistory| {
            row.pid.as_deref()
        });
        let allergy_ids = ids_for_pid(&self.allergies, pid, |row: &Allergy| row.pid.as_deref());
        let medication_ids =
            ids_for_pid(&self.medications, pid, |row: &Medication| row.pid.as_deref());
        let document_ids = ids_for_pid(&self.documents, pid, |row: &Document| row.pid.as_deref());
        let encounter_ids = ids_for_pid(&self.encounters, pid, |row: &Encounter| row.pid.as_deref());
        let treatment_ids = ids_for_pid(&self.treatments, pid, |row: &Treatment| row.pid.as_deref());
        let session_ids = ids_for_pid(&self.dialysis_sessions, pid, |row: &DialysisSession| {
            row.pid.as_deref()
        });
        let transplant_ids =
            ids_for_pid(&self.transplants, pid, |row: &Transplant| row.pid.as_deref());
        let membership_ids = ids_for_pid(&self.program_memberships, pid, |row: &ProgramMembership| {
            row.pid.as_deref()
        });
        let pvdelete_ids: Vec<i64> = self
            .pvdeletes
            .iter()
            .filter(|(_, row)| row.pid.as_deref() == Some(pid))
            .map(|(did, _)| *did)
            .collect();

        // Apply. Nothing below can fail, so the cascade is all-or-nothing.
        let mut summary = DeleteSummary::default();

        for id in &item_ids {
            self.result_items.remove(id);
        }
        summary.result_items = item_ids.len();
        for id in &order_ids {
            self.lab_orders.remove(id);
        }
        summary.lab_orders = order_ids.len();

        for id in &question_ids {
            self.questions.remove(id);
        }
        summary.questions = question_ids.len();
        for id in &score_ids {
            self.scores.remove(id);
        }
        summary.scores = score_ids.len();
        for id in &level_ids {
            self.levels.remove(id);
        }
        summary.levels = level_ids.len();
        for id in &survey_ids {
            self.surveys.remove(id);
        }
        summary.surveys = survey_ids.len();

        for id in &name_ids {
            self.names.remove(id);
        }
        summary.names = name_ids.len();
        for id in &number_ids {
            self.patient_numbers.remove(id);
        }
        summary.patient_numbers = number_ids.len();
        for id in &address_ids {
            self.addresses.remove(id);
        }
        summary.addresses = address_ids.len();
        for id in &detail_ids {
            self.contact_details.remove(id);
        }
        summary.contact_details = detail_ids.len();
        summary.family_doctors = usize::from(self.family_doctors.remove(pid).is_some());
        summary.patients = usize::from(self.patients.remove(pid).is_some());

        for id in &observation_ids {
            self.observations.remove(id);
        }
        summary.observations = observation_ids.len();
        for id in &diagnosis_ids {
            self.diagnoses.remove(id);
        }
        summary.diagnoses = diagnosis_ids.len();
        summary.renal_diagnoses = usize::from(self.renal_diagnoses.remove(pid).is_some());
        summary.causes_of_death = usize::from(self.causes_of_death.remove(pid).is_some());
        for id in &social_ids {
            self.social_histories.remove(id);
        }
        summary.social_histories = social_ids.len();
        for id in &family_ids {
            self.family_histories.remove(id);
        }
        summary.family_histories = family_ids.len();
        for id in &allergy_ids {
            self.allergies.remove(id);
        }
        summary.allergies = allergy_ids.len();

        for id in &medication_ids {
            self.medications.remove(id);
        }
        summary.medications = medication_ids.len();
        for id in &document_ids {
            self.documents.remove(id);
        }
        summary.documents = document_ids.len();

        for id in &encounter_ids {
            self.encounters.remove(id);
        }
        summary.encounters = encounter_ids.len();
        for id in &treatment_ids {
            self.treatments.remove(id);
        }
        summary.treatments = treatment_ids.len();
        for id in &session_ids {
            self.dialysis_sessions.remove(id);
        }
        summary.dialysis_sessions = session_ids.len();
        for id in &transplant_ids {
            self.transplants.remove(id);
        }
        summary.transplants = transplant_ids.len();
        for id in &membership_ids {
            self.program_memberships.remove(id);
        }
        summary.program_memberships = membership_ids.len();

        summary.pvdata = usize::from(self.pvdata.remove(pid).is_some());
        for did in &pvdelete_ids {
            self.pvdeletes.remove(did);
        }
        summary.pvdeletes = pvdelete_ids.len();

        self.patient_records.remove(pid);
        summary.patient_records = 1;

        log::info!(
            "deleted patient record {pid}: {} rows removed",
            summary.total()
        );
        Ok(summary)
    }
}
