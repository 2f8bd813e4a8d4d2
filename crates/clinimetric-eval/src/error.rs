//! Evaluation errors

use clinimetric_model::{ClinicalDataError, CohortServiceError};
use thiserror::Error;

/// Result type for evaluation operations
pub type EvalResult<T> = Result<T, EvaluationError>;

/// Errors that can occur during indicator evaluation.
///
/// There is no retry policy and no partial-result semantics: the first
/// failure aborts the evaluation and propagates to the caller.
#[derive(Debug, Error, Clone)]
pub enum EvaluationError {
    /// A well-known metadata identifier resolved to nothing
    #[error("Missing metadata: no {kind} with UUID {uuid}")]
    MissingMetadata { kind: &'static str, uuid: String },

    /// A required context parameter was not supplied
    #[error("Undefined parameter: {name}")]
    UndefinedParameter { name: String },

    /// The clinical data service failed
    #[error("Clinical data service error: {0}")]
    DataService(#[from] ClinicalDataError),

    /// The cohort-definition service failed
    #[error("Cohort service error: {0}")]
    CohortService(#[from] CohortServiceError),
}

impl EvaluationError {
    /// Create a missing-form metadata error
    pub fn missing_form(uuid: impl Into<String>) -> Self {
        Self::MissingMetadata {
            kind: "form",
            uuid: uuid.into(),
        }
    }

    /// Create a missing-concept metadata error
    pub fn missing_concept(uuid: impl Into<String>) -> Self {
        Self::MissingMetadata {
            kind: "concept",
            uuid: uuid.into(),
        }
    }

    /// Create an undefined parameter error
    pub fn undefined_parameter(name: impl Into<String>) -> Self {
        Self::UndefinedParameter { name: name.into() }
    }
}
