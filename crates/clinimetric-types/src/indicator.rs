//! Visit indicator specifications

use crate::date::ReportingDate;
use serde::{Deserialize, Serialize};

/// Behavioural filter applied to the fetched encounter set.
///
/// Filters are mutually exclusive: an indicator selects exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VisitFilter {
    /// Keep every fetched encounter
    #[default]
    None,
    /// Keep encounters whose patient is female and aged 18 or over at the
    /// end of the reporting period
    Females18AndOver,
    /// Keep encounters that took place on a previously recorded return
    /// visit date for the patient
    Scheduled,
    /// The complement of [`VisitFilter::Scheduled`] within the fetched set
    Unscheduled,
}

impl VisitFilter {
    /// A short stable name, used in log output.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Females18AndOver => "females-18-and-over",
            Self::Scheduled => "scheduled",
            Self::Unscheduled => "unscheduled",
        }
    }
}

/// Specification of a single numerator-only visit-count indicator: a
/// reporting period and a filter selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitIndicator {
    /// Human-readable indicator name
    pub name: String,
    /// Start of the reporting period (inclusive)
    pub start_date: ReportingDate,
    /// End of the reporting period (inclusive; end-of-day when date-only)
    pub end_date: ReportingDate,
    /// Filter applied to the fetched encounters
    pub filter: VisitFilter,
}

impl VisitIndicator {
    /// Create an unfiltered indicator over the given period.
    pub fn new(
        name: impl Into<String>,
        start_date: impl Into<ReportingDate>,
        end_date: impl Into<ReportingDate>,
    ) -> Self {
        Self {
            name: name.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
            filter: VisitFilter::None,
        }
    }

    /// Select the filter applied to fetched encounters.
    pub fn with_filter(mut self, filter: VisitFilter) -> Self {
        self.filter = filter;
        self
    }
}
