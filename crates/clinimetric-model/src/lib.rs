//! Clinical data model abstraction for indicator evaluation
//!
//! This crate defines read-only projections of the host platform's clinical
//! records (patients, forms, concepts, encounters, observations), the
//! service traits the indicator evaluator consumes, and the well-known
//! metadata identifiers those services are queried with. The host platform
//! owns the data; everything here is a value crossing a service seam.

pub mod metadata;
pub mod noop;
pub mod records;
pub mod service;

pub use noop::{NoOpClinicalDataService, NoOpCohortService};
pub use records::{Concept, Encounter, Form, Gender, Obs, Patient};
pub use service::{
    ClinicalDataError, ClinicalDataService, CohortDefinitionService, CohortServiceError,
};
