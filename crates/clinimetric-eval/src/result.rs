//! Indicator evaluation results

use clinimetric_types::VisitIndicator;
use serde::{Deserialize, Serialize};

/// The outcome of evaluating a single indicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorResult {
    /// The indicator this result was computed for
    pub indicator: VisitIndicator,
    /// The filtered encounter count
    pub numerator: u64,
    /// Unset for numerator-only indicators
    pub denominator: Option<u64>,
}

impl IndicatorResult {
    /// Create a numerator-only result.
    pub fn numerator_only(indicator: VisitIndicator, numerator: u64) -> Self {
        Self {
            indicator,
            numerator,
            denominator: None,
        }
    }
}
