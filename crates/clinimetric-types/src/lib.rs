//! Core value types for clinical indicator evaluation
//!
//! This crate defines the value objects shared across the workspace:
//! - Reporting dates with an explicit date-only vs date-time distinction
//! - Indicator specifications and their filter selectors
//! - Cohorts and the declarative cohort-definition algebra

pub mod cohort;
pub mod date;
pub mod indicator;

pub use cohort::*;
pub use date::*;
pub use indicator::*;
