//! Central schema registration.
//!
//! Builds the alias table and attribute surface of every entity in one
//! place. Registration is fail-fast: a single bad alias declaration anywhere
//! aborts the whole build, so a registry in hand is fully validated.

use rustc_hash::FxHashMap;

use crate::empi::{Audit, LinkRecord, MasterRecord, Person, PidXRef, WorkItem};
use crate::models::{
    Address, Allergy, CauseOfDeath, ContactDetail, DialysisSession, Diagnosis, Document, Encounter,
    Facility, FamilyDoctor, FamilyHistory, LabOrder, Level, Locations, Medication, ModalityCodes,
    Name, Observation, PVData, PVDelete, Patient, PatientNumber, PatientRecord, ProgramMembership,
    Question, RRDataDefinition, RenalDiagnosis, ResultItem, Score, SocialHistory, Survey,
    Transplant, Treatment,
};
use crate::schema::aliases::{AliasError, AliasTable};
use crate::schema::property::PropertyAccess;
use crate::schema::surface::EntitySurface;

/// Every entity's validated alias table and attribute surface, by entity
/// type name
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    aliases: FxHashMap<&'static str, AliasTable>,
    surfaces: FxHashMap<&'static str, EntitySurface>,
}

impl SchemaRegistry {
    /// Register and validate every entity.
    pub fn build() -> Result<Self, AliasError> {
        let mut registry = Self::default();

        registry.register::<PatientRecord>(PatientRecord::aliases(), PatientRecord::computed())?;
        registry.register::<Patient>(Patient::aliases(), Patient::computed())?;
        registry.register::<Name>(Name::aliases(), Name::computed())?;
        registry.register::<PatientNumber>(PatientNumber::aliases(), PatientNumber::computed())?;
        registry.register::<Address>(Address::aliases(), Address::computed())?;
        registry.register::<ContactDetail>(ContactDetail::aliases(), ContactDetail::computed())?;
        registry.register::<FamilyDoctor>(FamilyDoctor::aliases(), FamilyDoctor::computed())?;

        registry.register::<LabOrder>(LabOrder::aliases(), LabOrder::computed())?;
        registry.register::<ResultItem>(ResultItem::aliases(), ResultItem::computed())?;

        registry.register::<Observation>(Observation::aliases(), Observation::computed())?;
        registry.register::<Diagnosis>(Diagnosis::aliases(), Diagnosis::computed())?;
        registry.register::<RenalDiagnosis>(
            RenalDiagnosis::aliases(),
            RenalDiagnosis::computed(),
        )?;
        registry.register::<CauseOfDeath>(CauseOfDeath::aliases(), CauseOfDeath::computed())?;
        registry.register::<SocialHistory>(SocialHistory::aliases(), SocialHistory::computed())?;
        registry.register::<FamilyHistory>(FamilyHistory::aliases(), FamilyHistory::computed())?;
        registry.register::<Allergy>(Allergy::aliases(), Allergy::computed())?;

        registry.register::<Encounter>(Encounter::aliases(), Encounter::computed())?;
        registry.register::<Treatment>(Treatment::aliases(), Treatment::computed())?;
        registry.register::<DialysisSession>(
            DialysisSession::aliases(),
            DialysisSession::computed(),
        )?;
        registry.register::<Transplant>(Transplant::aliases(), Transplant::computed())?;
        registry.register::<ProgramMembership>(
            ProgramMembership::aliases(),
            ProgramMembership::computed(),
        )?;

        registry.register::<Medication>(Medication::aliases(), Medication::computed())?;
        registry.register::<Document>(Document::aliases(), Document::computed())?;

        registry.register::<Survey>(Survey::aliases(), Survey::computed())?;
        registry.register::<Question>(Question::aliases(), Question::computed())?;
        registry.register::<Score>(Score::aliases(), Score::computed())?;
        registry.register::<Level>(Level::aliases(), Level::computed())?;

        registry.register::<PVData>(PVData::aliases(), PVData::computed())?;
        registry.register::<PVDelete>(PVDelete::aliases(), PVDelete::computed())?;

        registry.register::<Facility>(Facility::aliases(), Facility::computed())?;
        registry.register::<RRDataDefinition>(
            RRDataDefinition::aliases(),
            RRDataDefinition::computed(),
        )?;
        registry.register::<ModalityCodes>(ModalityCodes::aliases(), ModalityCodes::computed())?;
        registry.register::<Locations>(Locations::aliases(), Locations::computed())?;

        registry.register::<MasterRecord>(MasterRecord::aliases(), MasterRecord::computed())?;
        registry.register::<Person>(Person::aliases(), Person::computed())?;
        registry.register::<LinkRecord>(LinkRecord::aliases(), LinkRecord::computed())?;
        registry.register::<WorkItem>(WorkItem::aliases(), WorkItem::computed())?;
        registry.register::<Audit>(Audit::aliases(), Audit::computed())?;
        registry.register::<PidXRef>(PidXRef::aliases(), PidXRef::computed())?;

        log::debug!("schema registry built: {} entities", registry.surfaces.len());
        Ok(registry)
    }

    fn register<T: PropertyAccess>(
        &mut self,
        pairs: &[(&'static str, &'static str)],
        computed: &[&'static str],
    ) -> Result<(), AliasError> {
        let table = AliasTable::build::<T>(pairs, computed)?;
        let surface = EntitySurface::of::<T>(&table, computed);
        log::debug!(
            "registered {}: {} attributes, {} aliases",
            T::entity(),
            surface.len(),
            table.len(),
        );
        self.aliases.insert(T::entity(), table);
        self.surfaces.insert(T::entity(), surface);
        Ok(())
    }

    /// The alias table for an entity type name
    #[must_use]
    pub fn aliases(&self, entity: &str) -> Option<&AliasTable> {
        self.aliases.get(entity)
    }

    /// The attribute surface for an entity type name
    #[must_use]
    pub fn surface(&self, entity: &str) -> Option<&EntitySurface> {
        self.surfaces.get(entity)
    }

    /// Iterate over every registered surface
    pub fn surfaces(&self) -> impl Iterator<Item = &EntitySurface> {
        self.surfaces.values()
    }

    /// Number of registered entities
    #[must_use]
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    /// True if nothing has been registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::surface::AttributeKind;

    #[test]
    fn every_entity_registers_cleanly() {
        let registry = SchemaRegistry::build().unwrap();
        assert_eq!(registry.len(), 39);
    }

    #[test]
    fn registry_is_keyed_by_entity_name() {
        let registry = SchemaRegistry::build().unwrap();

        let surface = registry.surface("PatientRecord").unwrap();
        assert_eq!(surface.kind("pid"), Some(AttributeKind::Column));
        assert_eq!(surface.kind("id"), Some(AttributeKind::Alias));
        assert_eq!(surface.kind("lab_orders"), Some(AttributeKind::Computed));

        assert!(registry.aliases("PatientRecord").unwrap().is_alias("id"));
        assert!(registry.surface("NoSuchEntity").is_none());
    }

    #[test]
    fn historical_typo_survives_on_data_definitions() {
        let registry = SchemaRegistry::build().unwrap();
        let aliases = registry.aliases("RRDataDefinition").unwrap();
        assert_eq!(aliases.resolve("feild_name"), "field_name");

        let surface = registry.surface("RRDataDefinition").unwrap();
        assert_eq!(surface.kind("feild_name"), Some(AttributeKind::Alias));
        assert_eq!(surface.kind("TYPE"), Some(AttributeKind::Column));
    }
}
