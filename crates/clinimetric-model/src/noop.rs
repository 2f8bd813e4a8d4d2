//! No-op service implementations for testing

use crate::records::{Concept, Encounter, Form, Obs};
use crate::service::{
    ClinicalDataError, ClinicalDataService, CohortDefinitionService, CohortServiceError,
};
use chrono::NaiveDateTime;
use clinimetric_types::{Cohort, CohortDefinition, PatientId};

/// Clinical data service that holds no records.
pub struct NoOpClinicalDataService;

impl NoOpClinicalDataService {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpClinicalDataService {
    fn default() -> Self {
        Self::new()
    }
}

impl ClinicalDataService for NoOpClinicalDataService {
    fn form_by_uuid(&self, _uuid: &str) -> Result<Option<Form>, ClinicalDataError> {
        Ok(None)
    }

    fn concept_by_uuid(&self, _uuid: &str) -> Result<Option<Concept>, ClinicalDataError> {
        Ok(None)
    }

    fn encounters(
        &self,
        _forms: &[Form],
        _from: NaiveDateTime,
        _to: NaiveDateTime,
    ) -> Result<Vec<Encounter>, ClinicalDataError> {
        Ok(vec![])
    }

    fn observations(
        &self,
        _patients: &[PatientId],
        _concept: &Concept,
    ) -> Result<Vec<Obs>, ClinicalDataError> {
        Ok(vec![])
    }
}

/// Cohort service that resolves every definition to an empty cohort.
pub struct NoOpCohortService;

impl NoOpCohortService {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpCohortService {
    fn default() -> Self {
        Self::new()
    }
}

impl CohortDefinitionService for NoOpCohortService {
    fn evaluate(
        &self,
        _definition: &CohortDefinition,
        _base: Option<&Cohort>,
    ) -> Result<Cohort, CohortServiceError> {
        Ok(Cohort::new())
    }
}
