//! Shared fixtures for indicator evaluation tests

pub mod mocks;

use chrono::{NaiveDate, NaiveDateTime};
use clinimetric::model::metadata;
use clinimetric::{
    ClinicalDataService, CohortDefinitionService, Concept, Encounter, Form, PatientId,
    VisitIndicatorEvaluator,
};
use mocks::{InMemoryClinicalDataService, InMemoryCohortService};
use std::sync::Arc;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn at(y: i32, m: u32, d: u32, hour: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(hour, min, 0).unwrap()
}

/// A data service with the HIV-care forms and return-visit-date concept
/// registered, paired with an empty cohort service.
pub fn services() -> (Arc<InMemoryClinicalDataService>, Arc<InMemoryCohortService>) {
    let data = InMemoryClinicalDataService::new();
    data.add_form(Form::new(
        metadata::CLINICAL_ENCOUNTER_HIV_ADDENDUM_FORM_UUID,
        "Clinical Encounter - HIV addendum",
    ));
    data.add_form(Form::new(
        metadata::MOH_257_VISIT_SUMMARY_FORM_UUID,
        "MOH 257 Visit Summary",
    ));
    data.add_concept(Concept::new(
        metadata::RETURN_VISIT_DATE_CONCEPT_UUID,
        "Return visit date",
    ));

    (Arc::new(data), Arc::new(InMemoryCohortService::new()))
}

pub fn evaluator(
    data: Arc<InMemoryClinicalDataService>,
    cohorts: Arc<impl CohortDefinitionService + 'static>,
) -> VisitIndicatorEvaluator {
    VisitIndicatorEvaluator::new(
        data as Arc<dyn ClinicalDataService>,
        cohorts as Arc<dyn CohortDefinitionService>,
    )
}

/// An encounter on the HIV addendum form.
pub fn hiv_addendum_encounter(id: u32, patient: PatientId, when: NaiveDateTime) -> Encounter {
    Encounter::new(
        id,
        patient,
        when,
        metadata::CLINICAL_ENCOUNTER_HIV_ADDENDUM_FORM_UUID,
    )
}

/// An encounter on the MOH 257 visit summary form.
pub fn visit_summary_encounter(id: u32, patient: PatientId, when: NaiveDateTime) -> Encounter {
    Encounter::new(id, patient, when, metadata::MOH_257_VISIT_SUMMARY_FORM_UUID)
}
