//! The visit indicator evaluator

use crate::cohorts::females_18_and_over;
use crate::context::EvaluationContext;
use crate::error::{EvalResult, EvaluationError};
use crate::result::IndicatorResult;
use chrono::NaiveDate;
use clinimetric_model::metadata;
use clinimetric_model::{ClinicalDataService, CohortDefinitionService, Encounter};
use clinimetric_types::{PatientId, VisitFilter, VisitIndicator};
use log::{debug, trace};
use std::collections::HashMap;
use std::sync::Arc;

/// Evaluates visit-count indicators against injected data and cohort
/// services.
///
/// The evaluator is read-only and holds no mutable state; a single instance
/// can serve concurrent evaluations as long as the underlying services are
/// safe for concurrent reads.
pub struct VisitIndicatorEvaluator {
    data: Arc<dyn ClinicalDataService>,
    cohorts: Arc<dyn CohortDefinitionService>,
}

impl VisitIndicatorEvaluator {
    /// Create an evaluator over the given services.
    pub fn new(data: Arc<dyn ClinicalDataService>, cohorts: Arc<dyn CohortDefinitionService>) -> Self {
        Self { data, cohorts }
    }

    /// Evaluate an indicator, returning its numerator count.
    ///
    /// The reporting period is `[start, end]` with the end boundary
    /// normalized to end-of-day only when the end date carries no time
    /// component. Any service failure aborts the evaluation.
    pub fn evaluate(
        &self,
        indicator: &VisitIndicator,
        context: &EvaluationContext,
    ) -> EvalResult<IndicatorResult> {
        let hiv_care_forms = vec![
            self.resolve_form(metadata::CLINICAL_ENCOUNTER_HIV_ADDENDUM_FORM_UUID)?,
            self.resolve_form(metadata::MOH_257_VISIT_SUMMARY_FORM_UUID)?,
        ];

        let from = indicator.start_date.start_of_day_if_time_excluded();
        let to = indicator.end_date.end_of_day_if_time_excluded();
        debug!(
            "evaluating '{}' over [{from}, {to}], filter {}",
            indicator.name,
            indicator.filter.name()
        );

        let encounters = self.data.encounters(&hiv_care_forms, from, to)?;
        let fetched = encounters.len();

        let kept: Vec<Encounter> = match indicator.filter {
            VisitFilter::None => encounters,
            VisitFilter::Females18AndOver => {
                // Age is evaluated at the end of the reporting period, not
                // per encounter.
                let definition = females_18_and_over(indicator.end_date.date());
                let cohort = self.cohorts.evaluate(&definition, context.base_cohort())?;
                encounters
                    .into_iter()
                    .filter(|encounter| cohort.contains(encounter.patient))
                    .collect()
            }
            VisitFilter::Scheduled => {
                let return_dates = self.return_visit_dates(&encounters)?;
                encounters
                    .into_iter()
                    .filter(|encounter| was_scheduled(&return_dates, encounter))
                    .collect()
            }
            VisitFilter::Unscheduled => {
                let return_dates = self.return_visit_dates(&encounters)?;
                encounters
                    .into_iter()
                    .filter(|encounter| !was_scheduled(&return_dates, encounter))
                    .collect()
            }
        };

        trace!("kept {} of {} fetched encounters", kept.len(), fetched);

        Ok(IndicatorResult::numerator_only(
            indicator.clone(),
            kept.len() as u64,
        ))
    }

    fn resolve_form(&self, uuid: &str) -> EvalResult<clinimetric_model::Form> {
        self.data
            .form_by_uuid(uuid)?
            .ok_or_else(|| EvaluationError::missing_form(uuid))
    }

    /// Batch-fetch all "return visit date" observations for the distinct
    /// patients of the given encounters, indexed by patient. Observations
    /// are fetched patient-wide, not restricted to the reporting period.
    fn return_visit_dates(
        &self,
        encounters: &[Encounter],
    ) -> EvalResult<HashMap<PatientId, Vec<NaiveDate>>> {
        let concept = self
            .data
            .concept_by_uuid(metadata::RETURN_VISIT_DATE_CONCEPT_UUID)?
            .ok_or_else(|| EvaluationError::missing_concept(metadata::RETURN_VISIT_DATE_CONCEPT_UUID))?;

        let mut patients: Vec<PatientId> = encounters.iter().map(|e| e.patient).collect();
        patients.sort_unstable();
        patients.dedup();

        let mut index: HashMap<PatientId, Vec<NaiveDate>> = HashMap::new();
        for obs in self.data.observations(&patients, &concept)? {
            index.entry(obs.patient).or_default().push(obs.value_date);
        }
        Ok(index)
    }
}

/// An encounter was scheduled iff the patient has a return-visit-date
/// observation falling on the same calendar day as the encounter's
/// effective date. No matching observations means unscheduled.
fn was_scheduled(return_dates: &HashMap<PatientId, Vec<NaiveDate>>, encounter: &Encounter) -> bool {
    let effective = encounter.effective_datetime().date();
    return_dates
        .get(&encounter.patient)
        .is_some_and(|dates| dates.iter().any(|date| *date == effective))
}
