//! In-memory service implementations for testing
//!
//! Provides configurable in-memory implementations of ClinicalDataService
//! and CohortDefinitionService. The cohort service resolves gender and age
//! primitives against its patient registry and supports the AND-only
//! compositions this library emits; it is a test double, not a composition
//! algebra.

use chrono::NaiveDateTime;
use clinimetric::types::CompositionCohortDefinition;
use clinimetric::{
    ClinicalDataError, ClinicalDataService, Cohort, CohortDefinition, CohortDefinitionService,
    CohortServiceError, Concept, Encounter, Form, Gender, Obs, Patient, PatientId,
};
use parking_lot::RwLock;
use std::collections::HashMap;

/// Clinical data service backed by in-memory collections.
#[derive(Default)]
pub struct InMemoryClinicalDataService {
    forms: RwLock<HashMap<String, Form>>,
    concepts: RwLock<HashMap<String, Concept>>,
    encounters: RwLock<Vec<Encounter>>,
    observations: RwLock<Vec<Obs>>,
}

impl InMemoryClinicalDataService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a form under its UUID.
    pub fn add_form(&self, form: Form) {
        self.forms.write().insert(form.uuid.clone(), form);
    }

    /// Register a concept under its UUID.
    pub fn add_concept(&self, concept: Concept) {
        self.concepts.write().insert(concept.uuid.clone(), concept);
    }

    /// Store an encounter record.
    pub fn add_encounter(&self, encounter: Encounter) {
        self.encounters.write().push(encounter);
    }

    /// Store an observation record.
    pub fn add_obs(&self, obs: Obs) {
        self.observations.write().push(obs);
    }
}

impl ClinicalDataService for InMemoryClinicalDataService {
    fn form_by_uuid(&self, uuid: &str) -> Result<Option<Form>, ClinicalDataError> {
        Ok(self.forms.read().get(uuid).cloned())
    }

    fn concept_by_uuid(&self, uuid: &str) -> Result<Option<Concept>, ClinicalDataError> {
        Ok(self.concepts.read().get(uuid).cloned())
    }

    fn encounters(
        &self,
        forms: &[Form],
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Vec<Encounter>, ClinicalDataError> {
        let matching = self
            .encounters
            .read()
            .iter()
            .filter(|encounter| {
                !encounter.voided
                    && forms.iter().any(|form| form.uuid == encounter.form_uuid)
                    && encounter.datetime >= from
                    && encounter.datetime <= to
            })
            .cloned()
            .collect();
        Ok(matching)
    }

    fn observations(
        &self,
        patients: &[PatientId],
        concept: &Concept,
    ) -> Result<Vec<Obs>, ClinicalDataError> {
        let matching = self
            .observations
            .read()
            .iter()
            .filter(|obs| obs.concept_uuid == concept.uuid && patients.contains(&obs.patient))
            .cloned()
            .collect();
        Ok(matching)
    }
}

/// Cohort service resolving definitions against an in-memory patient
/// registry.
#[derive(Default)]
pub struct InMemoryCohortService {
    patients: RwLock<HashMap<PatientId, Patient>>,
}

impl InMemoryCohortService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a patient demographic record.
    pub fn add_patient(&self, patient: Patient) {
        self.patients.write().insert(patient.id, patient);
    }

    fn resolve(&self, definition: &CohortDefinition) -> Result<Cohort, CohortServiceError> {
        match definition {
            CohortDefinition::Gender(gender) => {
                let cohort = self
                    .patients
                    .read()
                    .values()
                    .filter(|patient| match patient.gender {
                        Gender::Female => gender.female_included,
                        Gender::Male => gender.male_included,
                        Gender::Other => false,
                    })
                    .map(|patient| patient.id)
                    .collect();
                Ok(cohort)
            }
            CohortDefinition::Age(age) => {
                let cohort = self
                    .patients
                    .read()
                    .values()
                    .filter(|patient| {
                        patient.age_on(age.effective_date).is_some_and(|years| {
                            age.min_age.is_none_or(|min| years >= min)
                                && age.max_age.is_none_or(|max| years <= max)
                        })
                    })
                    .map(|patient| patient.id)
                    .collect();
                Ok(cohort)
            }
            CohortDefinition::Composition(composed) => self.resolve_composition(composed),
        }
    }

    fn resolve_composition(
        &self,
        composed: &CompositionCohortDefinition,
    ) -> Result<Cohort, CohortServiceError> {
        let mut terms = composed.composition.split(" AND ").map(str::trim);

        let first = terms
            .next()
            .filter(|term| !term.is_empty())
            .ok_or_else(|| CohortServiceError::malformed_composition(&composed.composition))?;

        let mut cohort = self.resolve_search(composed, first)?;
        for term in terms {
            cohort = cohort.intersection(&self.resolve_search(composed, term)?);
        }
        Ok(cohort)
    }

    fn resolve_search(
        &self,
        composed: &CompositionCohortDefinition,
        name: &str,
    ) -> Result<Cohort, CohortServiceError> {
        let definition = composed
            .search(name)
            .ok_or_else(|| CohortServiceError::unresolvable_search(name))?;
        self.resolve(definition)
    }
}

impl CohortDefinitionService for InMemoryCohortService {
    fn evaluate(
        &self,
        definition: &CohortDefinition,
        base: Option<&Cohort>,
    ) -> Result<Cohort, CohortServiceError> {
        let cohort = self.resolve(definition)?;
        Ok(match base {
            Some(base) => cohort.intersection(base),
            None => cohort,
        })
    }
}

/// Cohort service that fails every evaluation, for error propagation tests.
pub struct FailingCohortService;

impl CohortDefinitionService for FailingCohortService {
    fn evaluate(
        &self,
        definition: &CohortDefinition,
        _base: Option<&Cohort>,
    ) -> Result<Cohort, CohortServiceError> {
        Err(CohortServiceError::unresolvable_search(definition.name()))
    }
}
