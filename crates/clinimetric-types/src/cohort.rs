//! Cohorts and the declarative cohort-definition algebra
//!
//! A [`CohortDefinition`] is a pure description of a patient population.
//! Definitions are never resolved here: materializing one into a concrete
//! [`Cohort`] is the job of a cohort-definition service, which owns the
//! demographic data and the composition-expression algebra.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Stable identifier of a patient in the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PatientId(pub u32);

impl std::fmt::Display for PatientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A resolved set of patient identifiers.
///
/// Backed by an ordered set so iteration is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cohort {
    members: BTreeSet<PatientId>,
}

impl Cohort {
    /// Create an empty cohort.
    pub fn new() -> Self {
        Self::default()
    }

    /// Membership test.
    pub fn contains(&self, patient: PatientId) -> bool {
        self.members.contains(&patient)
    }

    /// Add a member.
    pub fn insert(&mut self, patient: PatientId) {
        self.members.insert(patient);
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the cohort has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterate members in ascending identifier order.
    pub fn iter(&self) -> impl Iterator<Item = PatientId> + '_ {
        self.members.iter().copied()
    }

    /// Members present in both cohorts.
    pub fn intersection(&self, other: &Cohort) -> Cohort {
        Cohort {
            members: self.members.intersection(&other.members).copied().collect(),
        }
    }
}

impl FromIterator<PatientId> for Cohort {
    fn from_iter<I: IntoIterator<Item = PatientId>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

/// Gender filter over the patient population.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderCohortDefinition {
    /// Definition name, referenced by composition searches
    pub name: String,
    /// Include female patients
    pub female_included: bool,
    /// Include male patients
    pub male_included: bool,
}

impl GenderCohortDefinition {
    /// A definition matching female patients only.
    pub fn females(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            female_included: true,
            male_included: false,
        }
    }
}

/// Age filter over the patient population, with age computed as of a fixed
/// effective date rather than per record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeCohortDefinition {
    /// Definition name, referenced by composition searches
    pub name: String,
    /// Minimum age in whole years (inclusive)
    pub min_age: Option<u32>,
    /// Maximum age in whole years (inclusive)
    pub max_age: Option<u32>,
    /// Date as of which ages are computed
    pub effective_date: NaiveDate,
}

impl AgeCohortDefinition {
    /// A definition matching patients aged `min_age` or over as of
    /// `effective_date`.
    pub fn aged_at_least(name: impl Into<String>, min_age: u32, effective_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            min_age: Some(min_age),
            max_age: None,
            effective_date,
        }
    }
}

/// Boolean combination of named sub-searches.
///
/// The composition expression is opaque to this crate; the evaluating
/// service owns its grammar. Search order is preserved as declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositionCohortDefinition {
    /// Definition name
    pub name: String,
    /// Named sub-searches, in declaration order
    pub searches: Vec<(String, CohortDefinition)>,
    /// Boolean expression over the search names
    pub composition: String,
}

impl CompositionCohortDefinition {
    /// Create a composition with no searches and an empty expression.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            searches: Vec::new(),
            composition: String::new(),
        }
    }

    /// Declare a named sub-search.
    pub fn add_search(&mut self, name: impl Into<String>, definition: CohortDefinition) {
        self.searches.push((name.into(), definition));
    }

    /// Set the boolean expression over the declared search names.
    pub fn set_composition(&mut self, composition: impl Into<String>) {
        self.composition = composition.into();
    }

    /// Look up a declared sub-search by name.
    pub fn search(&self, name: &str) -> Option<&CohortDefinition> {
        self.searches
            .iter()
            .find(|(search_name, _)| search_name == name)
            .map(|(_, definition)| definition)
    }
}

/// A declarative cohort definition, resolved by a cohort-definition service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CohortDefinition {
    /// Filter by gender
    Gender(GenderCohortDefinition),
    /// Filter by age as of an effective date
    Age(AgeCohortDefinition),
    /// Boolean combination of named sub-searches
    Composition(CompositionCohortDefinition),
}

impl CohortDefinition {
    /// The definition's name.
    pub fn name(&self) -> &str {
        match self {
            Self::Gender(definition) => &definition.name,
            Self::Age(definition) => &definition.name,
            Self::Composition(definition) => &definition.name,
        }
    }
}

impl From<GenderCohortDefinition> for CohortDefinition {
    fn from(definition: GenderCohortDefinition) -> Self {
        Self::Gender(definition)
    }
}

impl From<AgeCohortDefinition> for CohortDefinition {
    fn from(definition: AgeCohortDefinition) -> Self {
        Self::Age(definition)
    }
}

impl From<CompositionCohortDefinition> for CohortDefinition {
    fn from(definition: CompositionCohortDefinition) -> Self {
        Self::Composition(definition)
    }
}
