//! Service traits consumed by the indicator evaluator
//!
//! Both services are host-platform responsibilities. The evaluator receives
//! them as injected trait objects and never reaches for global state.

use crate::records::{Concept, Encounter, Form, Obs};
use chrono::NaiveDateTime;
use clinimetric_types::{Cohort, CohortDefinition, PatientId};

/// Read-only access to the host platform's clinical records.
pub trait ClinicalDataService: Send + Sync {
    /// Look up a form by its stable UUID.
    fn form_by_uuid(&self, uuid: &str) -> Result<Option<Form>, ClinicalDataError>;

    /// Look up a concept by its stable UUID.
    fn concept_by_uuid(&self, uuid: &str) -> Result<Option<Concept>, ClinicalDataError>;

    /// All non-voided encounters entered on one of the given forms whose
    /// encounter timestamp lies in `[from, to]`, unrestricted by patient,
    /// location, or provider. Order is unspecified.
    fn encounters(
        &self,
        forms: &[Form],
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Vec<Encounter>, ClinicalDataError>;

    /// All observations of the given concept for the given patients,
    /// patient-wide (not restricted to any date range). One batched query
    /// for the whole patient set.
    fn observations(
        &self,
        patients: &[PatientId],
        concept: &Concept,
    ) -> Result<Vec<Obs>, ClinicalDataError>;
}

/// Errors surfaced by a clinical data service.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ClinicalDataError {
    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Resolves declarative cohort definitions into concrete cohorts.
pub trait CohortDefinitionService: Send + Sync {
    /// Materialize a definition against the full patient population,
    /// intersected with `base` when one is supplied.
    fn evaluate(
        &self,
        definition: &CohortDefinition,
        base: Option<&Cohort>,
    ) -> Result<Cohort, CohortServiceError>;
}

/// Errors surfaced by a cohort-definition service.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CohortServiceError {
    #[error("Cannot resolve sub-search: {name}")]
    UnresolvableSearch { name: String },

    #[error("Malformed composition expression: {expression}")]
    MalformedComposition { expression: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CohortServiceError {
    /// Create an unresolvable sub-search error.
    pub fn unresolvable_search(name: impl Into<String>) -> Self {
        Self::UnresolvableSearch { name: name.into() }
    }

    /// Create a malformed composition error.
    pub fn malformed_composition(expression: impl Into<String>) -> Self {
        Self::MalformedComposition {
            expression: expression.into(),
        }
    }
}
