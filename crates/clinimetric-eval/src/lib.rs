//! Visit indicator evaluation engine
//!
//! This crate evaluates visit-count indicators against a clinical data
//! source. Evaluation is a single synchronous pass:
//!
//! 1. Resolve the HIV-care forms from well-known metadata identifiers
//! 2. Fetch all non-voided encounters on those forms in the reporting period
//! 3. Apply the indicator's filter (cohort membership or scheduled-visit
//!    classification)
//! 4. Return the filtered count as the indicator's numerator
//!
//! All data access goes through service traits injected at construction,
//! so evaluation can run against the production platform or test doubles.
//!
//! # Example
//!
//! ```ignore
//! use clinimetric_eval::{EvaluationContext, VisitIndicatorEvaluator};
//!
//! let evaluator = VisitIndicatorEvaluator::new(data_service, cohort_service);
//! let result = evaluator.evaluate(&indicator, &EvaluationContext::new())?;
//! println!("{} = {}", result.indicator.name, result.numerator);
//! ```

pub mod cohorts;
pub mod context;
pub mod error;
pub mod evaluator;
pub mod result;

pub use cohorts::females_18_and_over;
pub use context::{EvaluationContext, ParameterValue};
pub use error::{EvalResult, EvaluationError};
pub use evaluator::VisitIndicatorEvaluator;
pub use result::IndicatorResult;
