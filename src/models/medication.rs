//! Medications prescribed on a patient record.

use chrono::NaiveDateTime;
use macros::PropertyField;
use serde::{Deserialize, Serialize};

use crate::models::now;

/// A prescribed medication; the dose quantity keeps two decimal places
#[derive(Debug, Clone, Serialize, Deserialize, PropertyField)]
pub struct Medication {
    #[property(name = "id")]
    pub id: String,

    #[property(name = "pid")]
    pub pid: Option<String>,

    #[property(name = "creation_date")]
    pub creation_date: NaiveDateTime,

    #[property(name = "idx")]
    pub idx: Option<i32>,

    #[property(name = "repositoryupdatedate")]
    pub repository_update_date: NaiveDateTime,

    #[property(name = "prescriptionnumber")]
    pub prescriptionnumber: Option<String>,

    #[property(name = "fromtime")]
    pub from_time: Option<NaiveDateTime>,

    #[property(name = "totime")]
    pub to_time: Option<NaiveDateTime>,

    #[property(name = "orderedbycode")]
    pub orderedbycode: Option<String>,

    #[property(name = "orderedbycodestd")]
    pub orderedbycodestd: Option<String>,

    #[property(name = "orderedbydesc")]
    pub orderedbydesc: Option<String>,

    #[property(name = "enteringorganizationcode")]
    pub entering_organization_code: Option<String>,

    #[property(name = "enteringorganizationcodestd")]
    pub enteringorganizationcodestd: Option<String>,

    #[property(name = "enteringorganizationdesc")]
    pub entering_organization_description: Option<String>,

    #[property(name = "routecode")]
    pub route_code: Option<String>,

    #[property(name = "routecodestd")]
    pub route_code_std: Option<String>,

    #[property(name = "routedesc")]
    pub route_desc: Option<String>,

    #[property(name = "drugproductidcode")]
    pub drug_product_id_code: Option<String>,

    #[property(name = "drugproductidcodestd")]
    pub drugproductidcodestd: Option<String>,

    #[property(name = "drugproductiddesc")]
    pub drug_product_id_description: Option<String>,

    #[property(name = "drugproductgeneric")]
    pub drug_product_generic: Option<String>,

    #[property(name = "drugproductlabelname")]
    pub drugproductlabelname: Option<String>,

    #[property(name = "drugproductformcode")]
    pub drugproductformcode: Option<String>,

    #[property(name = "drugproductformcodestd")]
    pub drugproductformcodestd: Option<String>,

    #[property(name = "drugproductformdesc")]
    pub drugproductformdesc: Option<String>,

    #[property(name = "drugproductstrengthunitscode")]
    pub drugproductstrengthunitscode: Option<String>,

    #[property(name = "drugproductstrengthunitscodestd")]
    pub drugproductstrengthunitscodestd: Option<String>,

    #[property(name = "drugproductstrengthunitsdesc")]
    pub drugproductstrengthunitsdesc: Option<String>,

    #[property(name = "frequency")]
    pub frequency: Option<String>,

    #[property(name = "commenttext")]
    pub comment: Option<String>,

    #[property(name = "dosequantity")]
    pub dose_quantity: Option<f64>,

    #[property(name = "doseuomcode")]
    pub dose_uom_code: Option<String>,

    #[property(name = "doseuomcodestd")]
    pub dose_uom_code_std: Option<String>,

    #[property(name = "doseuomdesc")]
    pub dose_uom_description: Option<String>,

    #[property(name = "indication")]
    pub indication: Option<String>,

    #[property(name = "updatedon")]
    pub updated_on: Option<NaiveDateTime>,

    #[property(name = "actioncode")]
    pub actioncode: Option<String>,

    #[property(name = "externalid")]
    pub external_id: Option<String>,

    #[property(name = "update_date")]
    pub update_date: Option<NaiveDateTime>,

    #[property(name = "encounternumber")]
    pub encounternumber: Option<String>,
}

impl Medication {
    /// Create a medication on a patient record
    #[must_use]
    pub fn new(id: impl Into<String>, pid: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pid: Some(pid.into()),
            creation_date: now(),
            idx: None,
            repository_update_date: now(),
            prescriptionnumber: None,
            from_time: None,
            to_time: None,
            orderedbycode: None,
            orderedbycodestd: None,
            orderedbydesc: None,
            entering_organization_code: None,
            enteringorganizationcodestd: None,
            entering_organization_description: None,
            route_code: None,
            route_code_std: None,
            route_desc: None,
            drug_product_id_code: None,
            drugproductidcodestd: None,
            drug_product_id_description: None,
            drug_product_generic: None,
            drugproductlabelname: None,
            drugproductformcode: None,
            drugproductformcodestd: None,
            drugproductformdesc: None,
            drugproductstrengthunitscode: None,
            drugproductstrengthunitscodestd: None,
            drugproductstrengthunitsdesc: None,
            frequency: None,
            comment: None,
            dose_quantity: None,
            dose_uom_code: None,
            dose_uom_code_std: None,
            dose_uom_description: None,
            indication: None,
            updated_on: None,
            actioncode: None,
            external_id: None,
            update_date: None,
            encounternumber: None,
        }
    }

    /// Legacy attribute names still resolvable on this entity
    #[must_use]
    pub fn aliases() -> &'static [(&'static str, &'static str)] {
        &[
            ("repository_update_date", "repositoryupdatedate"),
            ("from_time", "fromtime"),
            ("to_time", "totime"),
            ("entering_organization_code", "enteringorganizationcode"),
            ("entering_organization_description", "enteringorganizationdesc"),
            ("route_code", "routecode"),
            ("route_code_std", "routecodestd"),
            ("route_desc", "routedesc"),
            ("drug_product_id_code", "drugproductidcode"),
            ("drug_product_id_description", "drugproductiddesc"),
            ("drug_product_generic", "drugproductgeneric"),
            ("comment", "commenttext"),
            ("dose_quantity", "dosequantity"),
            ("dose_uom_code", "doseuomcode"),
            ("dose_uom_code_std", "doseuomcodestd"),
            ("dose_uom_description", "doseuomdesc"),
            ("updated_on", "updatedon"),
            ("external_id", "externalid"),
        ]
    }

    /// Derived accessors exposed alongside stored columns
    #[must_use]
    pub fn computed() -> &'static [&'static str] {
        &[]
    }
}

impl std::fmt::Display for Medication {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Medication({})", self.pid.as_deref().unwrap_or("-"))
    }
}
