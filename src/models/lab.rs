//! Laboratory orders and their result items.

use chrono::NaiveDateTime;
use macros::PropertyField;
use serde::{Deserialize, Serialize};

use crate::models::now;

/// A laboratory order placed against a patient record
#[derive(Debug, Clone, Serialize, Deserialize, PropertyField)]
pub struct LabOrder {
    #[property(name = "id")]
    pub id: String,

    #[property(name = "pid")]
    pub pid: Option<String>,

    #[property(name = "creation_date")]
    pub creation_date: NaiveDateTime,

    #[property(name = "placerid")]
    pub placer_id: Option<String>,

    #[property(name = "fillerid")]
    pub filler_id: Option<String>,

    #[property(name = "receivinglocationcode")]
    pub receiving_location: Option<String>,

    #[property(name = "receivinglocationcodestd")]
    pub receiving_location_code_std: Option<String>,

    #[property(name = "receivinglocationdesc")]
    pub receiving_location_description: Option<String>,

    #[property(name = "orderedbycode")]
    pub ordered_by: Option<String>,

    #[property(name = "orderedbycodestd")]
    pub ordered_by_code_std: Option<String>,

    #[property(name = "orderedbydesc")]
    pub ordered_by_description: Option<String>,

    #[property(name = "orderitemcode")]
    pub order_item: Option<String>,

    #[property(name = "orderitemcodestd")]
    pub order_item_code_std: Option<String>,

    #[property(name = "orderitemdesc")]
    pub order_item_description: Option<String>,

    #[property(name = "prioritycode")]
    pub priority: Option<String>,

    #[property(name = "prioritycodestd")]
    pub priority_code_std: Option<String>,

    #[property(name = "prioritydesc")]
    pub priority_description: Option<String>,

    #[property(name = "status")]
    pub status: Option<String>,

    #[property(name = "ordercategorycode")]
    pub order_category: Option<String>,

    #[property(name = "ordercategorycodestd")]
    pub order_category_code_std: Option<String>,

    #[property(name = "ordercategorydesc")]
    pub order_category_description: Option<String>,

    #[property(name = "specimensource")]
    pub specimen_source: Option<String>,

    #[property(name = "specimenreceivedtime")]
    pub specimen_received_time: Option<NaiveDateTime>,

    #[property(name = "specimencollectedtime")]
    pub specimen_collected_time: Option<NaiveDateTime>,

    #[property(name = "duration")]
    pub duration: Option<String>,

    #[property(name = "patientclasscode")]
    pub patient_class: Option<String>,

    #[property(name = "patientclasscodestd")]
    pub patient_class_code_std: Option<String>,

    #[property(name = "patientclassdesc")]
    pub patient_class_description: Option<String>,

    #[property(name = "enteredon")]
    pub entered_on: Option<NaiveDateTime>,

    #[property(name = "enteredatcode")]
    pub entered_at: Option<String>,

    #[property(name = "enteredatcodestd")]
    pub entered_at_code_std: Option<String>,

    #[property(name = "enteredatdesc")]
    pub entered_at_description: Option<String>,

    #[property(name = "enteringorganizationcode")]
    pub entering_organization_code: Option<String>,

    #[property(name = "enteringorganizationcodestd")]
    pub entering_organization_code_std: Option<String>,

    #[property(name = "enteringorganizationdesc")]
    pub entering_organization_description: Option<String>,

    #[property(name = "updatedon")]
    pub updatedon: Option<NaiveDateTime>,

    #[property(name = "actioncode")]
    pub actioncode: Option<String>,

    #[property(name = "externalid")]
    pub external_id: Option<String>,

    #[property(name = "update_date")]
    pub update_date: Option<NaiveDateTime>,

    #[property(name = "repository_update_date")]
    pub repository_update_date: Option<NaiveDateTime>,
}

impl LabOrder {
    /// Create a lab order belonging to a patient record
    #[must_use]
    pub fn new(id: impl Into<String>, pid: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pid: Some(pid.into()),
            creation_date: now(),
            placer_id: None,
            filler_id: None,
            receiving_location: None,
            receiving_location_code_std: None,
            receiving_location_description: None,
            ordered_by: None,
            ordered_by_code_std: None,
            ordered_by_description: None,
            order_item: None,
            order_item_code_std: None,
            order_item_description: None,
            priority: None,
            priority_code_std: None,
            priority_description: None,
            status: None,
            order_category: None,
            order_category_code_std: None,
            order_category_description: None,
            specimen_source: None,
            specimen_received_time: None,
            specimen_collected_time: None,
            duration: None,
            patient_class: None,
            patient_class_code_std: None,
            patient_class_description: None,
            entered_on: None,
            entered_at: None,
            entered_at_code_std: None,
            entered_at_description: None,
            entering_organization_code: None,
            entering_organization_code_std: None,
            entering_organization_description: None,
            updatedon: None,
            actioncode: None,
            external_id: None,
            update_date: None,
            repository_update_date: None,
        }
    }

    /// Legacy attribute names still resolvable on this entity
    #[must_use]
    pub fn aliases() -> &'static [(&'static str, &'static str)] {
        &[
            ("receiving_location", "receivinglocationcode"),
            ("receiving_location_description", "receivinglocationdesc"),
            ("receiving_location_code_std", "receivinglocationcodestd"),
            ("placer_id", "placerid"),
            ("filler_id", "fillerid"),
            ("ordered_by", "orderedbycode"),
            ("ordered_by_description", "orderedbydesc"),
            ("ordered_by_code_std", "orderedbycodestd"),
            ("order_item", "orderitemcode"),
            ("order_item_description", "orderitemdesc"),
            ("order_item_code_std", "orderitemcodestd"),
            ("order_category", "ordercategorycode"),
            ("order_category_description", "ordercategorydesc"),
            ("order_category_code_std", "ordercategorycodestd"),
            ("specimen_collected_time", "specimencollectedtime"),
            ("specimen_received_time", "specimenreceivedtime"),
            ("priority", "prioritycode"),
            ("priority_description", "prioritydesc"),
            ("priority_code_std", "prioritycodestd"),
            ("specimen_source", "specimensource"),
            ("patient_class", "patientclasscode"),
            ("patient_class_description", "patientclassdesc"),
            ("patient_class_code_std", "patientclasscodestd"),
            ("entered_on", "enteredon"),
            ("entered_at", "enteredatcode"),
            ("entered_at_description", "enteredatdesc"),
            ("external_id", "externalid"),
            ("entering_organization_code", "enteringorganizationcode"),
            ("entering_organization_description", "enteringorganizationdesc"),
            ("entering_organization_code_std", "enteringorganizationcodestd"),
        ]
    }

    /// Derived accessors exposed alongside stored columns
    #[must_use]
    pub fn computed() -> &'static [&'static str] {
        &["result_items"]
    }
}

impl std::fmt::Display for LabOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LabOrder({}) <{}>",
            self.pid.as_deref().unwrap_or("-"),
            self.id,
        )
    }
}

/// A single measured result within a lab order; its patient is reached
/// through the parent order
#[derive(Debug, Clone, Serialize, Deserialize, PropertyField)]
pub struct ResultItem {
    #[property(name = "id", description = "Unique identifier for the result item.")]
    pub id: String,

    #[property(name = "orderid", description = "Identifier of the related laboratory order.")]
    pub order_id: Option<String>,

    #[property(name = "creation_date", description = "Date and time when the result item was created.")]
    pub creation_date: NaiveDateTime,

    #[property(name = "resulttype", description = "Type of result.")]
    pub result_type: Option<String>,

    #[property(name = "serviceidcode", description = "Test code identifying the laboratory service or test performed.")]
    pub service_id: Option<String>,

    #[property(name = "serviceidcodestd", description = "Coding standard used for the service ID (SNOMED, LOINC, UKRR, PV, LOCAL).")]
    pub service_id_std: Option<String>,

    #[property(name = "serviceiddesc", description = "Text description of the laboratory service or test performed.")]
    pub service_id_description: Option<String>,

    #[property(name = "subid", description = "Sub-Test Id.")]
    pub sub_id: Option<String>,

    #[property(name = "resultvalue", description = "The measured or observed value.")]
    pub value: Option<String>,

    #[property(name = "resultvalueunits", description = "Units of measurement for the result value.")]
    pub value_units: Option<String>,

    #[property(name = "referencerange", description = "Reference range for the test result.")]
    pub reference_range: Option<String>,

    #[property(name = "interpretationcodes", description = "Code(s) indicating interpretation of the result (POS, NEG, UNK).")]
    pub interpretation_codes: Option<String>,

    #[property(name = "status", description = "Status of the result (F, P, D).")]
    pub status: Option<String>,

    #[property(name = "observationtime", description = "Date and time when the observation or measurement was made.")]
    pub observation_time: Option<NaiveDateTime>,

    #[property(name = "commenttext", description = "Free-text comment associated with the result.")]
    pub comments: Option<String>,

    #[property(name = "referencecomment", description = "Reference comment provided with the result.")]
    pub reference_comment: Option<String>,

    #[property(name = "prepost", description = "Indicates whether the sample was taken PRE or POST dialysis (PRE, POST, UNK, NA).")]
    pub pre_post: Option<String>,

    #[property(name = "enteredon", description = "Date and time when the result was entered into the system.")]
    pub entered_on: Option<NaiveDateTime>,

    #[property(name = "updatedon", description = "Last Modified Date")]
    pub updatedon: Option<NaiveDateTime>,

    #[property(name = "actioncode", description = "Code representing the action performed on the result record.")]
    pub actioncode: Option<String>,

    #[property(name = "externalid", description = "Unique Identifier")]
    pub externalid: Option<String>,

    #[property(name = "update_date", description = "Date and time when the record was last updated.")]
    pub update_date: Option<NaiveDateTime>,
}

impl ResultItem {
    /// Create a result item within a lab order
    #[must_use]
    pub fn new(id: impl Into<String>, order_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            order_id: Some(order_id.into()),
            creation_date: now(),
            result_type: None,
            service_id: None,
            service_id_std: None,
            service_id_description: None,
            sub_id: None,
            value: None,
            value_units: None,
            reference_range: None,
            interpretation_codes: None,
            status: None,
            observation_time: None,
            comments: None,
            reference_comment: None,
            pre_post: None,
            entered_on: None,
            updatedon: None,
            actioncode: None,
            externalid: None,
            update_date: None,
        }
    }

    /// Legacy attribute names still resolvable on this entity
    #[must_use]
    pub fn aliases() -> &'static [(&'static str, &'static str)] {
        &[
            ("order_id", "orderid"),
            ("result_type", "resulttype"),
            ("entered_on", "enteredon"),
            ("pre_post", "prepost"),
            ("service_id", "serviceidcode"),
            ("service_id_std", "serviceidcodestd"),
            ("service_id_description", "serviceiddesc"),
            ("sub_id", "subid"),
            ("value", "resultvalue"),
            ("value_units", "resultvalueunits"),
            ("reference_range", "referencerange"),
            ("interpretation_codes", "interpretationcodes"),
            ("observation_time", "observationtime"),
            ("comments", "commenttext"),
            ("reference_comment", "referencecomment"),
        ]
    }

    /// Derived accessors exposed alongside stored columns; `pid` is reached
    /// through the owning order rather than stored here
    #[must_use]
    pub fn computed() -> &'static [&'static str] {
        &["pid", "order"]
    }
}

impl std::fmt::Display for ResultItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ResultItem({}) <{}>",
            self.order_id.as_deref().unwrap_or("-"),
            self.service_id.as_deref().unwrap_or(""),
        )
    }
}
