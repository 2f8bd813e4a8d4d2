//! Ad hoc cohort definitions used by indicator filters

use chrono::NaiveDate;
use clinimetric_types::{
    AgeCohortDefinition, CohortDefinition, CompositionCohortDefinition, GenderCohortDefinition,
};

/// The "females aged 18 and over" cohort definition: female gender AND
/// age >= 18 as of `effective_date`, composed as named sub-searches.
///
/// This is a pure specification, assembled per call and resolved by a
/// [`clinimetric_model::CohortDefinitionService`]. Age is evaluated as of
/// the single effective date, not per record.
pub fn females_18_and_over(effective_date: NaiveDate) -> CohortDefinition {
    let females = GenderCohortDefinition::females("Gender = Female");
    let aged_18_and_over = AgeCohortDefinition::aged_at_least("Age >= 18", 18, effective_date);

    let mut composed = CompositionCohortDefinition::new("Females aged 18 and over");
    composed.add_search("females", females.into());
    composed.add_search("aged18AndOver", aged_18_and_over.into());
    composed.set_composition("females AND aged18AndOver");

    composed.into()
}
