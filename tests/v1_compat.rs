//! Compatibility walk of the v1 attribute surface against the current schema.
//!
//! The attribute lists below are a snapshot of what the v1 schema revision
//! exposed, captured by hand when v2 shipped. They are data, not code: they
//! must never be regenerated from the current types, or the walk would only
//! prove the schema equals itself.

use registry_models::schema::{verify, LegacySurface, RenameTable, SchemaRegistry};

const V1: &[LegacySurface] = &[
    LegacySurface {
        entity: "PatientRecord",
        attributes: &[
            "pid",
            "sendingfacility",
            "sendingextract",
            "localpatientid",
            "ukrdcid",
            "extract_time",
            "creation_date",
            "update_date",
            "repository_creation_date",
            "repository_update_date",
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
        ],
    },
    LegacySurface {
        entity: "Patient",
        attributes: &[
            "pid",
            "birth_time",
            "death_time",
            "gender",
            "country_of_birth",
            "ethnic_group_code",
            "ethnic_group_description",
            "person_to_contact_name",
            "person_to_contact_number",
            "person_to_contact_relationship",
            "person_to_contact_number_comments",
            "person_to_contact_number_type",
            "occupation_code",
            "occupation_codestd",
            "occupation_description",
            "primary_language",
            "primary_language_codestd",
            "primary_language_description",
            "dead",
            "updated_on",
            "bloodgroup",
            "bloodrhesus",
            "numbers",
            "names",
            "contact_details",
            "addresses",
            "familydoctor",
            "name",
            "first_ni_number",
            "first_hospital_number",
        ],
    },
    LegacySurface {
        entity: "CauseOfDeath",
        attributes: &[
            "pid",
            "diagnosis_type",
            "diagnosing_clinician_code",
            "diagnosing_clinician_code_std",
            "diagnosing_clinician_desc",
            "diagnosis_code",
            "diagnosis_code_std",
            "diagnosis_desc",
            "comments",
            "entered_on",
            "updated_on",
            "action_code",
            "external_id",
        ],
    },
    LegacySurface {
        entity: "FamilyDoctor",
        attributes: &[
            "id",
            "gpname",
            "gpid",
            "gppracticeid",
            "addressuse",
            "fromtime",
            "totime",
            "street",
            "town",
            "county",
            "postcode",
            "countrycode",
            "countrycodestd",
            "countrydesc",
            "contactuse",
            "contactvalue",
            "email",
            "commenttext",
        ],
    },
    LegacySurface {
        entity: "SocialHistory",
        attributes: &["id", "pid"],
    },
    LegacySurface {
        entity: "FamilyHistory",
        attributes: &["id", "pid"],
    },
    LegacySurface {
        entity: "Observation",
        attributes: &[
            "id",
            "pid",
            "idx",
            "observation_time",
            "observation_code",
            "observation_code_std",
            "observation_desc",
            "observation_value",
            "observation_units",
            "comment_text",
            "clinician_code",
            "clinician_code_std",
            "clinician_desc",
            "entered_at",
            "entered_at_description",
            "entering_organization_code",
            "entering_organization_description",
            "updated_on",
            "action_code",
            "external_id",
            "pre_post",
        ],
    },
    LegacySurface {
        entity: "Allergy",
        attributes: &["id", "pid"],
    },
    LegacySurface {
        entity: "Diagnosis",
        attributes: &[
            "id",
            "pid",
            "diagnosis_code",
            "diagnosis_code_std",
            "diagnosis_desc",
            "identification_time",
            "onset_time",
            "comments",
        ],
    },
    LegacySurface {
        entity: "RenalDiagnosis",
        attributes: &[
            "pid",
            "diagnosis_code",
            "diagnosis_code_std",
            "diagnosis_desc",
            "identification_time",
            "comments",
        ],
    },
    LegacySurface {
        entity: "DialysisSession",
        attributes: &[
            "id",
            "pid",
            "procedure_type_code",
            "procedure_type_code_std",
            "procedure_type_desc",
            "procedure_time",
            "qhd19",
            "qhd20",
            "qhd21",
            "qhd22",
            "qhd30",
            "qhd31",
            "qhd32",
            "qhd33",
        ],
    },
    LegacySurface {
        entity: "Transplant",
        attributes: &[
            "id",
            "pid",
            "procedure_type_code",
            "procedure_type_code_std",
            "procedure_type_desc",
            "procedure_time",
            "tra64",
            "tra65",
            "tra66",
            "tra69",
            "tra76",
            "tra77",
            "tra78",
            "tra79",
            "tra8a",
            "tra81",
            "tra82",
            "tra83",
            "tra84",
            "tra85",
        ],
    },
    LegacySurface {
        entity: "Encounter",
        attributes: &["id", "pid", "from_time", "to_time"],
    },
    LegacySurface {
        entity: "ProgramMembership",
        attributes: &["id", "pid", "program_name", "from_time", "to_time"],
    },
    LegacySurface {
        entity: "Name",
        attributes: &[
            "id",
            "pid",
            "nameuse",
            "prefix",
            "family",
            "given",
            "othergivennames",
            "suffix",
        ],
    },
    LegacySurface {
        entity: "PatientNumber",
        attributes: &["id", "pid", "patientid", "organization", "numbertype"],
    },
    LegacySurface {
        entity: "Address",
        attributes: &[
            "id",
            "pid",
            "addressuse",
            "from_time",
            "to_time",
            "street",
            "town",
            "county",
            "postcode",
            "country_code",
            "country_code_std",
            "country_description",
        ],
    },
    LegacySurface {
        entity: "ContactDetail",
        attributes: &["id", "pid", "use", "value", "commenttext"],
    },
    LegacySurface {
        entity: "Medication",
        attributes: &[
            "id",
            "pid",
            "idx",
            "from_time",
            "to_time",
            "dose_uom_code",
            "dose_uom_code_std",
            "dose_uom_description",
            "dose_quantity",
            "drug_product_id_code",
            "drug_product_id_description",
            "drug_product_generic",
            "entering_organization_code",
            "entering_organization_description",
            "frequency",
            "comment",
            "route_code",
            "route_code_std",
            "route_desc",
            "external_id",
            "updated_on",
            "repository_update_date",
        ],
    },
    LegacySurface {
        entity: "Survey",
        attributes: &[
            "id",
            "pid",
            "surveytime",
            "surveytypecode",
            "surveytypecodestd",
            "surveytypedesc",
            "enteredbycode",
            "enteredbycodestd",
            "enteredatcode",
            "enteredatcodestd",
            "enteredatdesc",
            "updatedon",
            "externalid",
            "questions",
            "scores",
            "levels",
        ],
    },
    LegacySurface {
        entity: "Question",
        attributes: &[
            "id",
            "surveyid",
            "questiontypecode",
            "questiontypecodestd",
            "questiontypedesc",
            "response",
        ],
    },
    LegacySurface {
        entity: "Score",
        attributes: &[
            "id",
            "surveyid",
            "value",
            "scoretypecode",
            "scoretypecodestd",
            "scoretypedesc",
        ],
    },
    LegacySurface {
        entity: "Level",
        attributes: &[
            "id",
            "surveyid",
            "value",
            "leveltypecode",
            "leveltypecodestd",
            "leveltypedesc",
        ],
    },
    LegacySurface {
        entity: "Document",
        attributes: &[
            "id",
            "pid",
            "idx",
            "documenttime",
            "notetext",
            "documenttypecode",
            "documenttypecodestd",
            "documenttypedesc",
            "cliniciancode",
            "cliniciancodestd",
            "cliniciandesc",
            "documentname",
            "statuscode",
            "statuscodestd",
            "statusdesc",
            "enteredbycode",
            "enteredbycodestd",
            "enteredbydesc",
            "enteredatcode",
            "enteredatcodestd",
            "enteredatdesc",
            "filetype",
            "filename",
            "stream",
            "documenturl",
            "updatedon",
            "actioncode",
            "externalid",
            "update_date",
            "creation_date",
            "repository_update_date",
        ],
    },
    LegacySurface {
        entity: "LabOrder",
        attributes: &[
            "id",
            "pid",
            "receiving_location",
            "receiving_location_description",
            "placer_id",
            "filler_id",
            "ordered_by",
            "ordered_by_description",
            "order_item",
            "order_item_description",
            "order_category",
            "order_category_description",
            "specimen_collected_time",
            "specimen_received_time",
            "status",
            "priority",
            "priority_description",
            "specimen_source",
            "duration",
            "patient_class",
            "patient_class_description",
            "entered_on",
            "entered_at",
            "entered_at_description",
            "external_id",
            "entering_organization_code",
            "entering_organization_description",
            "result_items",
        ],
    },
    LegacySurface {
        entity: "ResultItem",
        attributes: &[
            "id",
            "order_id",
            "result_type",
            "entered_on",
            "pre_post",
            "service_id",
            "service_id_std",
            "service_id_description",
            "sub_id",
            "value",
            "value_units",
            "reference_range",
            "interpretation_codes",
            "status",
            "observation_time",
            "comments",
            "reference_comment",
            "order",
            "pid",
        ],
    },
    LegacySurface {
        entity: "PVData",
        attributes: &[
            "id",
            "rrtstatus",
            "tpstatus",
            "diagnosisdate",
            "bloodgroup",
            "update_date",
            "creation_date",
        ],
    },
    LegacySurface {
        entity: "PVDelete",
        attributes: &["did", "pid", "observation_time", "service_id"],
    },
    LegacySurface {
        entity: "Treatment",
        attributes: &[
            "id",
            "pid",
            "idx",
            "encounter_number",
            "encounter_type",
            "from_time",
            "to_time",
            "admitting_clinician_code",
            "admitting_clinician_code_std",
            "admitting_clinician_desc",
            "admission_source_code",
            "admission_source_code_std",
            "admission_source_desc",
            "admit_reason_code",
            "admit_reason_code_std",
            "admit_reason_code_item",
            "admit_reason_desc",
            "discharge_reason_code",
            "discharge_reason_code_std",
            "discharge_reason_code_item",
            "discharge_reason_desc",
            "discharge_location_code",
            "discharge_location_code_std",
            "discharge_location_desc",
            "health_care_facility_code",
            "health_care_facility_code_std",
            "health_care_facility_desc",
            "entered_at_code",
            "visit_description",
            "updated_on",
            "action_code",
            "external_id",
            "hdp01",
            "hdp02",
            "hdp03",
            "hdp04",
            "qbl05",
            "qbl06",
            "qbl07",
            "erf61",
            "pat35",
        ],
    },
    LegacySurface {
        entity: "Facility",
        attributes: &[
            "code",
            "pkb_out",
            "pkb_in",
            "pkb_msg_exclusions",
            "code_info",
            "description",
        ],
    },
    LegacySurface {
        entity: "Locations",
        attributes: &[
            "centre_code",
            "centre_name",
            "country_code",
            "region_code",
            "paed_unit",
        ],
    },
    LegacySurface {
        entity: "RRDataDefinition",
        attributes: &[
            "upload_key",
            "table_name",
            "feild_name",
            "code_id",
            "mandatory",
            "code_type",
            "alt_constraint",
            "alt_desc",
            "extra_val",
            "error_type",
            "paed_mand",
            "ckd5_mand_numeric",
            "dependant_field",
            "alt_validation",
            "file_prefix",
            "load_min",
            "load_max",
            "remove_min",
            "remove_max",
            "in_month",
            "aki_mand",
            "rrt_mand",
            "cons_mand",
            "ckd4_mand",
            "valid_before_dob",
            "valid_after_dod",
            "in_quarter",
        ],
    },
    LegacySurface {
        entity: "ModalityCodes",
        attributes: &[
            "registry_code",
            "registry_code_desc",
            "registry_code_type",
            "acute",
            "transfer_in",
            "ckd",
            "cons",
            "rrt",
            "equiv_modality",
            "end_of_care",
            "is_imprecise",
            "nhsbt_transplant_type",
            "transfer_out",
        ],
    },
];

/// The one deliberate rename since v1: the misspelled data definition column
/// kept its on-disk name but gained a corrected accessor.
fn renames() -> RenameTable {
    RenameTable::new().with_rename("feild_name", "field_name")
}

fn pair_up<'a>(
    registry: &'a SchemaRegistry,
    snapshot: &'a [LegacySurface],
) -> Vec<(&'a LegacySurface, &'a registry_models::schema::EntitySurface)> {
    snapshot
        .iter()
        .map(|legacy| {
            let surface = registry
                .surface(legacy.entity)
                .unwrap_or_else(|| panic!("{} is not registered", legacy.entity));
            (legacy, surface)
        })
        .collect()
}

#[test]
fn every_v1_attribute_still_resolves() {
    let registry = SchemaRegistry::build().unwrap();
    let pairs = pair_up(&registry, V1);

    let report = verify(&pairs, &renames());
    assert!(report.is_compatible(), "{report}");
}

#[test]
fn a_dropped_attribute_is_reported_as_a_gap() {
    let registry = SchemaRegistry::build().unwrap();
    let stale = LegacySurface {
        entity: "Patient",
        attributes: &["pid", "birth_time", "maiden_name"],
    };
    let surface = registry.surface("Patient").unwrap();

    let report = verify(&[(&stale, surface)], &renames());
    assert_eq!(report.gaps.len(), 1);
    assert_eq!(report.gaps[0].entity, "Patient");
    assert_eq!(report.gaps[0].attribute, "maiden_name");
}

#[test]
fn gaps_across_entities_are_all_enumerated() {
    let registry = SchemaRegistry::build().unwrap();
    let stale_patient = LegacySurface {
        entity: "Patient",
        attributes: &["pid", "maiden_name"],
    };
    let stale_survey = LegacySurface {
        entity: "Survey",
        attributes: &["id", "surveylocation", "surveyversion"],
    };
    let pairs = vec![
        (&stale_survey, registry.surface("Survey").unwrap()),
        (&stale_patient, registry.surface("Patient").unwrap()),
    ];

    let report = verify(&pairs, &renames());
    let found: Vec<(&str, &str)> = report
        .gaps
        .iter()
        .map(|gap| (gap.entity, gap.attribute))
        .collect();
    assert_eq!(
        found,
        vec![
            ("Patient", "maiden_name"),
            ("Survey", "surveylocation"),
            ("Survey", "surveyversion"),
        ]
    );
}

#[test]
fn the_misspelled_column_resolves_even_without_the_rename() {
    // The data definition surface carries a compatibility alias for the
    // misspelling, so the snapshot stays green with an empty rename table.
    let registry = SchemaRegistry::build().unwrap();
    let pairs = pair_up(&registry, V1);
    let report = verify(&pairs, &RenameTable::new());
    assert!(report.is_compatible(), "{report}");
}
