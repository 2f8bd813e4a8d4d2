//! Clinical visit indicator evaluation
//!
//! This crate evaluates clinical-quality visit indicators (counts of
//! HIV-care encounters meeting declarative filters) against a clinical
//! data source reached through injected service traits:
//!
//! - Indicator specifications with scheduled/unscheduled/cohort filters
//! - A declarative cohort-definition algebra resolved by the host platform
//! - Reporting-period boundaries with explicit date-only semantics
//!
//! # Example
//!
//! ```ignore
//! use clinimetric::{EvaluationContext, VisitFilter, VisitIndicator, VisitIndicatorEvaluator};
//!
//! let indicator = VisitIndicator::new("Scheduled HIV care visits", start, end)
//!     .with_filter(VisitFilter::Scheduled);
//!
//! let evaluator = VisitIndicatorEvaluator::new(data_service, cohort_service);
//! let result = evaluator.evaluate(&indicator, &EvaluationContext::new())?;
//! ```

// Re-export all public APIs from internal crates
pub use clinimetric_eval as eval;
pub use clinimetric_model as model;
pub use clinimetric_types as types;

// Convenience re-exports
pub use clinimetric_eval::{
    EvalResult, EvaluationContext, EvaluationError, IndicatorResult, ParameterValue,
    VisitIndicatorEvaluator, females_18_and_over,
};
pub use clinimetric_model::{
    ClinicalDataError, ClinicalDataService, CohortDefinitionService, CohortServiceError, Concept,
    Encounter, Form, Gender, Obs, Patient,
};
pub use clinimetric_types::{
    Cohort, CohortDefinition, PatientId, ReportingDate, VisitFilter, VisitIndicator,
};
