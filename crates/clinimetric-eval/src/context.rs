//! Evaluation context for indicator execution

use chrono::{NaiveDate, NaiveDateTime};
use clinimetric_types::Cohort;
use std::collections::HashMap;

/// A typed parameter value carried by the evaluation context.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterValue {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Integer(i64),
    Text(String),
}

/// Context an indicator is evaluated under: a parameter bag (at minimum an
/// end-date parameter when driven by a reporting framework) and an optional
/// base cohort restricting the subject population.
#[derive(Debug, Clone, Default)]
pub struct EvaluationContext {
    parameters: HashMap<String, ParameterValue>,
    base_cohort: Option<Cohort>,
}

impl EvaluationContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict evaluation to the given subject cohort.
    pub fn with_base_cohort(mut self, cohort: Cohort) -> Self {
        self.base_cohort = Some(cohort);
        self
    }

    /// Set a parameter value.
    pub fn set_parameter(&mut self, name: impl Into<String>, value: ParameterValue) {
        self.parameters.insert(name.into(), value);
    }

    /// Get a parameter value.
    pub fn parameter(&self, name: &str) -> Option<&ParameterValue> {
        self.parameters.get(name)
    }

    /// The base cohort, when one was supplied.
    pub fn base_cohort(&self) -> Option<&Cohort> {
        self.base_cohort.as_ref()
    }
}
