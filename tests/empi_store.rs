//! Identity graph constraints: local id uniqueness, cross-reference
//! uniqueness, endpoint checks and the append-only audit trail.

use chrono::{NaiveDate, NaiveDateTime};
use registry_models::empi::{Audit, LinkRecord, MasterRecord, Person, PidXRef, WorkItem};
use registry_models::store::{EmpiStore, StoreError};

fn stamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn person(id: i32, localid: &str) -> Person {
    Person {
        id,
        originator: "UKRDC".to_string(),
        localid: localid.to_string(),
        localid_type: "CLPID".to_string(),
        nationalid: None,
        nationalid_type: None,
        date_of_birth: NaiveDate::from_ymd_opt(1975, 3, 15).unwrap(),
        gender: "1".to_string(),
        date_of_death: None,
        givenname: None,
        surname: None,
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

fn master(id: i32) -> MasterRecord {
    MasterRecord {
        id,
        last_updated: stamp(),
        date_of_birth: NaiveDate::from_ymd_opt(1975, 3, 15).unwrap(),
        gender: None,
        givenname: None,
        surname: None,
        nationalid: "9434765919".to_string(),
        nationalid_type: "UKRDC".to_string(),
        status: 1,
        effective_date: stamp(),
        creation_date: None,
    }
}

fn link(id: i32, person_id: i32, master_id: i32) -> LinkRecord {
    LinkRecord {
        id,
        person_id,
        master_id,
        link_type: 0,
        link_code: 0,
        link_desc: None,
        updated_by: None,
        last_updated: stamp(),
    }
}

fn work_item(id: i32, person_id: i32, master_id: i32) -> WorkItem {
    WorkItem {
        id,
        person_id,
        master_id,
        kind: 9,
        description: "demographic mismatch".to_string(),
        status: 1,
        creation_date: None,
        last_updated: stamp(),
        updated_by: None,
        update_description: None,
        attributes: None,
    }
}

fn xref(id: i32, pid: &str, facility: &str, extract: &str, localid: &str) -> PidXRef {
    PidXRef {
        id,
        pid: pid.to_string(),
        sending_facility: facility.to_string(),
        sending_extract: extract.to_string(),
        localid: localid.to_string(),
    }
}

fn seeded() -> EmpiStore {
    let mut store = EmpiStore::new();
    store.insert_person(person(1, "L1")).unwrap();
    store.insert_person(person(2, "L2")).unwrap();
    store.insert_master_record(master(10)).unwrap();
    store.insert_master_record(master(11)).unwrap();
    store.insert_link_record(link(100, 1, 10)).unwrap();
    store.insert_link_record(link(101, 1, 11)).unwrap();
    store.insert_link_record(link(102, 2, 10)).unwrap();
    store.insert_work_item(work_item(200, 1, 11)).unwrap();
    store.insert_pidxref(xref(300, "L1", "ABC123", "PV", "MRN001")).unwrap();
    store.insert_pidxref(xref(301, "L1", "ABC123", "UKRDC", "MRN001")).unwrap();
    store
}

#[test]
fn local_ids_are_unique_across_persons() {
    let mut store = seeded();
    let err = store.insert_person(person(3, "L1")).unwrap_err();
    assert_eq!(
        err,
        StoreError::UniqueViolation {
            entity: "Person",
            constraint: "localid",
            value: "L1".to_string(),
        }
    );
    assert!(store.person(3).is_none());
    assert_eq!(store.person_by_localid("L1").map(|p| p.id), Some(1));
}

#[test]
fn cross_reference_triples_are_unique() {
    let mut store = seeded();

    // Same triple under a different person is still a collision.
    let err = store
        .insert_pidxref(xref(302, "L2", "ABC123", "PV", "MRN001"))
        .unwrap_err();
    assert_eq!(
        err,
        StoreError::UniqueViolation {
            entity: "PidXRef",
            constraint: "sending_facility/sending_extract/localid",
            value: "ABC123/PV/MRN001".to_string(),
        }
    );

    // A different extract makes a different triple.
    store
        .insert_pidxref(xref(302, "L2", "ABC123", "RADAR", "MRN001"))
        .unwrap();
    assert_eq!(store.xrefs_for("L2").len(), 1);
}

#[test]
fn cross_references_point_at_a_known_person() {
    let mut store = seeded();
    let err = store
        .insert_pidxref(xref(303, "L9", "ABC123", "PV", "MRN999"))
        .unwrap_err();
    assert!(matches!(err, StoreError::MissingParent { parent: "Person", .. }));
}

#[test]
fn links_require_both_endpoints() {
    let mut store = seeded();

    let err = store.insert_link_record(link(103, 9, 10)).unwrap_err();
    assert!(matches!(err, StoreError::MissingParent { parent: "Person", .. }));

    let err = store.insert_link_record(link(103, 1, 99)).unwrap_err();
    assert!(matches!(err, StoreError::MissingParent { parent: "MasterRecord", .. }));

    let err = store.insert_work_item(work_item(201, 9, 10)).unwrap_err();
    assert!(matches!(err, StoreError::MissingParent { parent: "Person", .. }));
}

#[test]
fn deleting_a_person_cascades_but_keeps_the_audit_trail() {
    let mut store = seeded();
    store.record_audit(Audit {
        id: 400,
        person_id: 1,
        master_id: 10,
        kind: 1,
        description: "linked".to_string(),
        main_nationalid: None,
        main_nationalid_type: None,
        last_updated: stamp(),
        updated_by: None,
    });

    store.delete_person(1).unwrap();

    assert!(store.person(1).is_none());
    assert!(store.links_for_person(1).is_empty());
    assert!(store.xrefs_for("L1").is_empty());
    assert_eq!(store.link_record_count(), 1);
    assert_eq!(store.work_item_count(), 0);
    // The audit row naming the deleted person survives.
    assert_eq!(store.audits().len(), 1);
    assert_eq!(store.audits()[0].person_id, 1);

    // The freed local id can be claimed again.
    store.insert_person(person(3, "L1")).unwrap();
}

#[test]
fn deleting_a_master_record_cascades_its_links() {
    let mut store = seeded();

    store.delete_master_record(10).unwrap();

    assert!(store.master_record(10).is_none());
    assert!(store.links_for_master(10).is_empty());
    assert_eq!(store.link_record_count(), 1);
    assert!(store.master_record(11).is_some());

    let err = store.delete_master_record(10).unwrap_err();
    assert!(matches!(err, StoreError::NotFound { entity: "MasterRecord", .. }));
}
