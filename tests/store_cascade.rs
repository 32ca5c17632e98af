//! Ownership and cascade behaviour of the in-memory registry store.

use chrono::NaiveDate;
use registry_models::catalog::CodeEntry;
use registry_models::models::{
    Address, Allergy, CauseOfDeath, ContactDetail, DialysisSession, Diagnosis, Document, Encounter,
    Facility, FamilyDoctor, FamilyHistory, LabOrder, Level, Medication, Name, Observation, PVData,
    PVDelete, Patient, PatientNumber, PatientRecord, ProgramMembership, Question, RenalDiagnosis,
    ResultItem, Score, SocialHistory, Survey, Transplant, Treatment,
};
use registry_models::store::{RegistryStore, StoreError};

const PID: &str = "000000001";
const OTHER_PID: &str = "000000002";

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn survey_time() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 6, 1)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

/// One fully populated aggregate plus a second minimal record that must
/// survive any cascade against the first.
fn seeded_store() -> RegistryStore {
    init_logging();
    let mut store = RegistryStore::new();

    store
        .insert_patient_record(PatientRecord::new(PID, "ABC123", "UKRDC", "L0001"))
        .unwrap();
    store
        .insert_patient_record(PatientRecord::new(OTHER_PID, "ABC123", "UKRDC", "L0002"))
        .unwrap();
    store.insert_patient(Patient::new(PID)).unwrap();
    store.insert_patient(Patient::new(OTHER_PID)).unwrap();

    let mut usual = Name::new("NAME1", PID);
    usual.nameuse = Some("L".to_string());
    usual.given = Some("Ada".to_string());
    usual.family = Some("Lovelace".to_string());
    store.insert_name(usual).unwrap();
    let mut maiden = Name::new("NAME2", PID);
    maiden.nameuse = Some("M".to_string());
    store.insert_name(maiden).unwrap();

    store
        .insert_patient_number(PatientNumber::new("NUM1", PID, "9434765919", "NI", "NHS"))
        .unwrap();
    store
        .insert_patient_number(PatientNumber::new("NUM2", PID, "H123456", "MRN", "LOCALHOSP"))
        .unwrap();

    store.insert_address(Address::new("ADDR1", PID)).unwrap();
    store
        .insert_contact_detail(ContactDetail::new("CONTACT1", PID))
        .unwrap();
    store
        .insert_family_doctor(FamilyDoctor::new(PID))
        .unwrap();

    for order_idx in 1..=3 {
        store
            .insert_lab_order(LabOrder::new(format!("ORDER{order_idx}"), PID))
            .unwrap();
    }
    // Seven items spread unevenly across the three orders.
    for (item_idx, order_idx) in [1, 1, 1, 2, 2, 3, 3].iter().enumerate() {
        store
            .insert_result_item(ResultItem::new(
                format!("ITEM{}", item_idx + 1),
                format!("ORDER{order_idx}"),
            ))
            .unwrap();
    }
    store
        .insert_lab_order(LabOrder::new("ORDER-OTHER", OTHER_PID))
        .unwrap();
    store
        .insert_result_item(ResultItem::new("ITEM-OTHER", "ORDER-OTHER"))
        .unwrap();

    store
        .insert_observation(Observation::new("OBS1", PID))
        .unwrap();
    store.insert_diagnosis(Diagnosis::new("DIAG1", PID)).unwrap();
    store
        .insert_renal_diagnosis(RenalDiagnosis::new(PID))
        .unwrap();
    store
        .insert_cause_of_death(CauseOfDeath::new(PID))
        .unwrap();
    store
        .insert_social_history(SocialHistory::new("SOC1", PID))
        .unwrap();
    store
        .insert_family_history(FamilyHistory::new("FAM1", PID))
        .unwrap();
    store.insert_allergy(Allergy::new("ALG1", PID)).unwrap();
    store
        .insert_medication(Medication::new("MED1", PID))
        .unwrap();
    store.insert_document(Document::new("DOC1", PID)).unwrap();
    store
        .insert_encounter(Encounter::new("ENC1", PID))
        .unwrap();
    store
        .insert_treatment(Treatment::new("TRT1", PID))
        .unwrap();
    store
        .insert_dialysis_session(DialysisSession::new("DIA1", PID))
        .unwrap();
    store
        .insert_transplant(Transplant::new("TXP1", PID))
        .unwrap();
    store
        .insert_program_membership(ProgramMembership::new("PRG1", PID))
        .unwrap();

    for survey_idx in 1..=2 {
        let id = format!("SURV{survey_idx}");
        store
            .insert_survey(Survey::new(id.clone(), PID, survey_time()))
            .unwrap();
        store
            .insert_question(Question::new(format!("Q{survey_idx}"), id.clone()))
            .unwrap();
        store
            .insert_score(Score::new(format!("SC{survey_idx}"), id.clone()))
            .unwrap();
        store
            .insert_level(Level::new(format!("LV{survey_idx}"), id))
            .unwrap();
    }

    store.insert_pvdata(PVData::new(PID)).unwrap();
    store.insert_pvdelete(PVDelete::new(1, PID)).unwrap();
    store.insert_pvdelete(PVDelete::new(2, PID)).unwrap();

    store
}

#[test]
fn cascade_removes_the_whole_aggregate() {
    let mut store = seeded_store();

    let summary = store.delete_patient_record(PID).unwrap();

    assert_eq!(summary.patient_records, 1);
    assert_eq!(summary.patients, 1);
    assert_eq!(summary.names, 2);
    assert_eq!(summary.patient_numbers, 2);
    assert_eq!(summary.addresses, 1);
    assert_eq!(summary.contact_details, 1);
    assert_eq!(summary.family_doctors, 1);
    assert_eq!(summary.lab_orders, 3);
    assert_eq!(summary.result_items, 7);
    assert_eq!(summary.observations, 1);
    assert_eq!(summary.diagnoses, 1);
    assert_eq!(summary.renal_diagnoses, 1);
    assert_eq!(summary.causes_of_death, 1);
    assert_eq!(summary.social_histories, 1);
    assert_eq!(summary.family_histories, 1);
    assert_eq!(summary.allergies, 1);
    assert_eq!(summary.medications, 1);
    assert_eq!(summary.documents, 1);
    assert_eq!(summary.encounters, 1);
    assert_eq!(summary.treatments, 1);
    assert_eq!(summary.dialysis_sessions, 1);
    assert_eq!(summary.transplants, 1);
    assert_eq!(summary.program_memberships, 1);
    assert_eq!(summary.surveys, 2);
    assert_eq!(summary.questions, 2);
    assert_eq!(summary.scores, 2);
    assert_eq!(summary.levels, 2);
    assert_eq!(summary.pvdata, 1);
    assert_eq!(summary.pvdeletes, 2);
    assert_eq!(summary.total(), 44);

    assert!(store.patient_record(PID).is_none());
    assert!(store.patient(PID).is_none());
    assert!(store.names_for(PID).is_empty());
    assert!(store.lab_orders_for(PID).is_empty());

    // The unrelated aggregate is untouched.
    assert!(store.patient_record(OTHER_PID).is_some());
    assert_eq!(store.lab_orders_for(OTHER_PID).len(), 1);
    assert_eq!(store.result_items_for("ORDER-OTHER").len(), 1);
}

#[test]
fn deleting_an_unknown_record_changes_nothing() {
    let mut store = seeded_store();
    let records_before = store.patient_record_count();
    let items_before = store.result_item_count();

    let err = store.delete_patient_record("no-such-pid").unwrap_err();
    assert_eq!(
        err,
        StoreError::NotFound {
            entity: "PatientRecord",
            key: "no-such-pid".to_string(),
        }
    );

    assert_eq!(store.patient_record_count(), records_before);
    assert_eq!(store.result_item_count(), items_before);
}

#[test]
fn children_require_their_parent() {
    let mut store = seeded_store();

    let err = store.insert_name(Name::new("NAMEX", "missing")).unwrap_err();
    assert!(matches!(err, StoreError::MissingParent { parent: "Patient", .. }));

    let err = store
        .insert_result_item(ResultItem::new("ITEMX", "no-such-order"))
        .unwrap_err();
    assert!(matches!(err, StoreError::MissingParent { parent: "LabOrder", .. }));

    let err = store
        .insert_question(Question::new("QX", "no-such-survey"))
        .unwrap_err();
    assert!(matches!(err, StoreError::MissingParent { parent: "Survey", .. }));
}

#[test]
fn duplicate_rows_are_rejected() {
    let mut store = seeded_store();

    let err = store
        .insert_patient_record(PatientRecord::new(PID, "ABC123", "UKRDC", "L0001"))
        .unwrap_err();
    assert_eq!(
        err,
        StoreError::Duplicate {
            entity: "PatientRecord",
            key: PID.to_string(),
        }
    );

    let err = store
        .insert_lab_order(LabOrder::new("ORDER1", PID))
        .unwrap_err();
    assert!(matches!(err, StoreError::Duplicate { entity: "LabOrder", .. }));

    // One row per pid for the satellites.
    let err = store.insert_pvdata(PVData::new(PID)).unwrap_err();
    assert!(matches!(err, StoreError::Duplicate { entity: "PVData", .. }));
}

#[test]
fn demographic_projections_read_through_the_graph() {
    let store = seeded_store();

    assert_eq!(
        store.main_name(PID).and_then(|name| name.given.as_deref()),
        Some("Ada")
    );
    assert_eq!(store.first_ni_number(PID), Some("9434765919"));
    assert_eq!(store.first_hospital_number(PID), Some("H123456"));
    assert_eq!(store.names_for(PID).len(), 2);

    // An item's pid is reached through its order.
    assert_eq!(store.result_item_pid("ITEM4"), Some(PID));
    assert_eq!(store.result_item_pid("ITEM-OTHER"), Some(OTHER_PID));
}

#[test]
fn number_projections_filter_on_issuing_organization() {
    init_logging();
    let mut store = RegistryStore::new();
    store
        .insert_patient_record(PatientRecord::new(PID, "ABC123", "UKRDC", "L0001"))
        .unwrap();
    store.insert_patient(Patient::new(PID)).unwrap();

    // NI and MRN numbers from a non-national issuer never qualify.
    store
        .insert_patient_number(PatientNumber::new("NUM1", PID, "X999", "NI", "RADAR"))
        .unwrap();
    store
        .insert_patient_number(PatientNumber::new("NUM2", PID, "H999", "MRN", "RADAR"))
        .unwrap();
    assert_eq!(store.first_ni_number(PID), None);
    assert_eq!(store.first_hospital_number(PID), None);

    // A qualifying number is found even when a non-qualifying one of the
    // same type sorts ahead of it.
    store
        .insert_patient_number(PatientNumber::new("NUM3", PID, "0301111111", "NI", "CHI"))
        .unwrap();
    store
        .insert_patient_number(PatientNumber::new("NUM4", PID, "H123456", "MRN", "LOCALHOSP"))
        .unwrap();
    assert_eq!(store.first_ni_number(PID), Some("0301111111"));
    assert_eq!(store.first_hospital_number(PID), Some("H123456"));
}

#[test]
fn facility_codes_are_reference_checked_both_ways() {
    init_logging();
    let mut store = RegistryStore::new();
    store
        .insert_code(CodeEntry::new("RR1+", "HOSP01", Some("Example Hospital")))
        .unwrap();
    store
        .insert_code(CodeEntry::new("RR1+", "HOSP02", None))
        .unwrap();

    // The pair must be catalogued before a facility can claim it.
    let err = store
        .insert_facility(Facility::new("HOSP99", "RR1+", "hospital"))
        .unwrap_err();
    assert!(matches!(err, StoreError::MissingParent { parent: "Code", .. }));

    store
        .insert_facility(Facility::new("HOSP01", "RR1+", "hospital"))
        .unwrap();

    // And the pair cannot be deleted out from under the facility.
    let err = store.delete_code("RR1+", "HOSP01").unwrap_err();
    assert_eq!(
        err,
        StoreError::Restricted {
            entity: "Code",
            key: "RR1+:HOSP01".to_string(),
            referent: "Facility",
        }
    );
    assert!(store.catalog().get("RR1+", "HOSP01").is_some());

    // Unreferenced codes delete cleanly, and only once.
    store.delete_code("RR1+", "HOSP02").unwrap();
    let err = store.delete_code("RR1+", "HOSP02").unwrap_err();
    assert!(matches!(err, StoreError::NotFound { entity: "Code", .. }));
}
