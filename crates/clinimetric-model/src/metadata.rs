//! Well-known metadata identifiers
//!
//! Stable UUIDs of the forms and concepts the HIV-care visit indicators are
//! defined over. These identify host-platform metadata; the records behind
//! them are resolved through [`crate::ClinicalDataService`] at evaluation
//! time, and a lookup miss is an evaluation error.

/// Clinical encounter HIV addendum form.
pub const CLINICAL_ENCOUNTER_HIV_ADDENDUM_FORM_UUID: &str =
    "bd598114-4ef4-47b1-a746-a616180ccfc0";

/// MOH 257 visit summary form.
pub const MOH_257_VISIT_SUMMARY_FORM_UUID: &str = "23b4ebbd-29ad-455e-be0e-04aa6bc30798";

/// "Return visit date" concept, recorded when a follow-up visit is booked.
pub const RETURN_VISIT_DATE_CONCEPT_UUID: &str = "5096AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";
