//! In-memory store for the identity-matching graph.
//!
//! Enforces the graph's uniqueness rules: one person per local id, one
//! cross-reference per `(sending_facility, sending_extract, localid)`
//! triple. Deleting a person or master record takes its link records and
//! work items with it; the audit trail is append-only and survives every
//! delete.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::empi::{Audit, LinkRecord, MasterRecord, Person, PidXRef, WorkItem};
use crate::store::StoreError;

/// The identity-matching graph, in memory
#[derive(Debug, Default)]
pub struct EmpiStore {
    master_records: FxHashMap<i32, MasterRecord>,
    persons: FxHashMap<i32, Person>,
    localids: FxHashSet<String>,
    link_records: FxHashMap<i32, LinkRecord>,
    work_items: FxHashMap<i32, WorkItem>,
    pidxrefs: FxHashMap<i32, PidXRef>,
    audits: Vec<Audit>,
}

impl EmpiStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a master record
    pub fn insert_master_record(&mut self, record: MasterRecord) -> Result<(), StoreError> {
        if self.master_records.contains_key(&record.id) {
            return Err(StoreError::Duplicate {
                entity: "MasterRecord",
                key: record.id.to_string(),
            });
        }
        self.master_records.insert(record.id, record);
        Ok(())
    }

    /// Look up a master record
    #[must_use]
    pub fn master_record(&self, id: i32) -> Option<&MasterRecord> {
        self.master_records.get(&id)
    }

    /// Add a person; the local id must be unique across all persons
    pub fn insert_person(&mut self, person: Person) -> Result<(), StoreError> {
        if self.persons.contains_key(&person.id) {
            return Err(StoreError::Duplicate {
                entity: "Person",
                key: person.id.to_string(),
            });
        }
        if self.localids.contains(&person.localid) {
            return Err(StoreError::UniqueViolation {
                entity: "Person",
                constraint: "localid",
                value: person.localid,
            });
        }
        self.localids.insert(person.localid.clone());
        self.persons.insert(person.id, person);
        Ok(())
    }

    /// Look up a person
    #[must_use]
    pub fn person(&self, id: i32) -> Option<&Person> {
        self.persons.get(&id)
    }

    /// Look up a person by local id
    #[must_use]
    pub fn person_by_localid(&self, localid: &str) -> Option<&Person> {
        self.persons
            .values()
            .find(|person| person.localid == localid)
    }

    /// Add a link; both endpoints must exist
    pub fn insert_link_record(&mut self, link: LinkRecord) -> Result<(), StoreError> {
        if !self.persons.contains_key(&link.person_id) {
            return Err(StoreError::MissingParent {
                entity: "LinkRecord",
                key: link.id.to_string(),
                parent: "Person",
                parent_key: link.person_id.to_string(),
            });
        }
        if !self.master_records.contains_key(&link.master_id) {
            return Err(StoreError::MissingParent {
                entity: "LinkRecord",
                key: link.id.to_string(),
                parent: "MasterRecord",
                parent_key: link.master_id.to_string(),
            });
        }
        if self.link_records.contains_key(&link.id) {
            return Err(StoreError::Duplicate {
                entity: "LinkRecord",
                key: link.id.to_string(),
            });
        }
        self.link_records.insert(link.id, link);
        Ok(())
    }

    /// All links from a person, ordered by id
    #[must_use]
    pub fn links_for_person(&self, person_id: i32) -> Vec<&LinkRecord> {
        let mut rows: Vec<&LinkRecord> = self
            .link_records
            .values()
            .filter(|link| link.person_id == person_id)
            .collect();
        rows.sort_by_key(|link| link.id);
        rows
    }

    /// All links into a master record, ordered by id
    #[must_use]
    pub fn links_for_master(&self, master_id: i32) -> Vec<&LinkRecord> {
        let mut rows: Vec<&LinkRecord> = self
            .link_records
            .values()
            .filter(|link| link.master_id == master_id)
            .collect();
        rows.sort_by_key(|link| link.id);
        rows
    }

    /// Add a work item; both endpoints must exist
    pub fn insert_work_item(&mut self, item: WorkItem) -> Result<(), StoreError> {
        if !self.persons.contains_key(&item.person_id) {
            return Err(StoreError::MissingParent {
                entity: "WorkItem",
                key: item.id.to_string(),
                parent: "Person",
                parent_key: item.person_id.to_string(),
            });
        }
        if !self.master_records.contains_key(&item.master_id) {
            return Err(StoreError::MissingParent {
                entity: "WorkItem",
                key: item.id.to_string(),
                parent: "MasterRecord",
                parent_key: item.master_id.to_string(),
            });
        }
        if self.work_items.contains_key(&item.id) {
            return Err(StoreError::Duplicate {
                entity: "WorkItem",
                key: item.id.to_string(),
            });
        }
        self.work_items.insert(item.id, item);
        Ok(())
    }

    /// Look up a work item
    #[must_use]
    pub fn work_item(&self, id: i32) -> Option<&WorkItem> {
        self.work_items.get(&id)
    }

    /// Add a cross-reference; its pid must be a known person local id and
    /// the facility/extract/localid triple must be unused
    pub fn insert_pidxref(&mut self, xref: PidXRef) -> Result<(), StoreError> {
        if !self.localids.contains(&xref.pid) {
            return Err(StoreError::MissingParent {
                entity: "PidXRef",
                key: xref.id.to_string(),
                parent: "Person",
                parent_key: xref.pid,
            });
        }
        let collision = self.pidxrefs.values().any(|existing| {
            existing.sending_facility == xref.sending_facility
                && existing.sending_extract == xref.sending_extract
                && existing.localid == xref.localid
        });
        if collision {
            return Err(StoreError::UniqueViolation {
                entity: "PidXRef",
                constraint: "sending_facility/sending_extract/localid",
                value: format!(
                    "{}/{}/{}",
                    xref.sending_facility, xref.sending_extract, xref.localid
                ),
            });
        }
        if self.pidxrefs.contains_key(&xref.id) {
            return Err(StoreError::Duplicate {
                entity: "PidXRef",
                key: xref.id.to_string(),
            });
        }
        self.pidxrefs.insert(xref.id, xref);
        Ok(())
    }

    /// All cross-references for a person's local id, ordered by id
    #[must_use]
    pub fn xrefs_for(&self, localid: &str) -> Vec<&PidXRef> {
        let mut rows: Vec<&PidXRef> = self
            .pidxrefs
            .values()
            .filter(|xref| xref.pid == localid)
            .collect();
        rows.sort_by_key(|xref| xref.id);
        rows
    }

    /// Append an audit row; the trail is never trimmed
    pub fn record_audit(&mut self, audit: Audit) {
        self.audits.push(audit);
    }

    /// The full audit trail, in insertion order
    #[must_use]
    pub fn audits(&self) -> &[Audit] {
        &self.audits
    }

    /// Remove a person with their links, work items and cross-references.
    /// The audit trail keeps every row that names them
    pub fn delete_person(&mut self, id: i32) -> Result<(), StoreError> {
        let Some(person) = self.persons.get(&id) else {
            return Err(StoreError::NotFound {
                entity: "Person",
                key: id.to_string(),
            });
        };
        let localid = person.localid.clone();

        self.link_records.retain(|_, link| link.person_id != id);
        self.work_items.retain(|_, item| item.person_id != id);
        self.pidxrefs.retain(|_, xref| xref.pid != localid);
        self.localids.remove(&localid);
        self.persons.remove(&id);
        log::info!("deleted person {id}");
        Ok(())
    }

    /// Remove a master record with its links and work items
    pub fn delete_master_record(&mut self, id: i32) -> Result<(), StoreError> {
        if self.master_records.remove(&id).is_none() {
            return Err(StoreError::NotFound {
                entity: "MasterRecord",
                key: id.to_string(),
            });
        }
        self.link_records.retain(|_, link| link.master_id != id);
        self.work_items.retain(|_, item| item.master_id != id);
        log::info!("deleted master record {id}");
        Ok(())
    }

    /// Number of stored link records
    #[must_use]
    pub fn link_record_count(&self) -> usize {
        self.link_records.len()
    }

    /// Number of stored work items
    #[must_use]
    pub fn work_item_count(&self) -> usize {
        self.work_items.len()
    }
}
