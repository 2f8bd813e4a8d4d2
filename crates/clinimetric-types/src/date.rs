//! Reporting dates
//!
//! Indicator boundaries are supplied either as a calendar date or as a full
//! timestamp. Which one was supplied changes how the boundary is resolved:
//! a date-only end boundary is inclusive of the whole day, while an explicit
//! timestamp is respected as-is. The distinction is carried by the variant
//! rather than inferred from the value.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A date value at an indicator boundary, tagged with whether the caller
/// supplied a time-of-day component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportingDate {
    /// A calendar date with no time component
    Date(NaiveDate),
    /// A full timestamp supplied by the caller
    DateTime(NaiveDateTime),
}

impl ReportingDate {
    /// Resolve as a range start: midnight for date-only values, the
    /// timestamp unchanged otherwise.
    pub fn start_of_day_if_time_excluded(&self) -> NaiveDateTime {
        match self {
            Self::Date(date) => date.and_time(NaiveTime::MIN),
            Self::DateTime(datetime) => *datetime,
        }
    }

    /// Resolve as a range end: 23:59:59.999 for date-only values, the
    /// timestamp unchanged otherwise.
    pub fn end_of_day_if_time_excluded(&self) -> NaiveDateTime {
        match self {
            Self::Date(date) => date
                .and_hms_milli_opt(23, 59, 59, 999)
                .expect("23:59:59.999 is a valid time of day"),
            Self::DateTime(datetime) => *datetime,
        }
    }

    /// The calendar-date component, dropping any time of day.
    pub fn date(&self) -> NaiveDate {
        match self {
            Self::Date(date) => *date,
            Self::DateTime(datetime) => datetime.date(),
        }
    }
}

impl From<NaiveDate> for ReportingDate {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<NaiveDateTime> for ReportingDate {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::DateTime(datetime)
    }
}

/// Whether two timestamps fall on the same calendar day.
pub fn same_calendar_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}
