//! Read-only projections of host-owned clinical records

use chrono::{NaiveDate, NaiveDateTime};
use clinimetric_types::PatientId;
use serde::{Deserialize, Serialize};

/// Recorded gender of a patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
    /// Recorded but neither of the above, or unknown
    Other,
}

/// A patient demographic record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: PatientId,
    pub gender: Gender,
    pub birth_date: NaiveDate,
}

impl Patient {
    pub fn new(id: PatientId, gender: Gender, birth_date: NaiveDate) -> Self {
        Self {
            id,
            gender,
            birth_date,
        }
    }

    /// Age in whole years as of the given date. `None` when the date
    /// precedes the birth date.
    pub fn age_on(&self, date: NaiveDate) -> Option<u32> {
        date.years_since(self.birth_date)
    }
}

/// A data-entry form, identified by a stable UUID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    pub uuid: String,
    pub name: String,
}

impl Form {
    pub fn new(uuid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            name: name.into(),
        }
    }
}

/// A coded clinical term, identified by a stable UUID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    pub uuid: String,
    pub name: String,
}

impl Concept {
    pub fn new(uuid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            name: name.into(),
        }
    }
}

/// A clinical visit record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encounter {
    pub id: u32,
    pub patient: PatientId,
    /// When the encounter itself was recorded
    pub datetime: NaiveDateTime,
    /// UUID of the form the encounter was entered on
    pub form_uuid: String,
    /// Start of the enclosing visit, when the encounter belongs to one
    pub visit_start: Option<NaiveDateTime>,
    pub voided: bool,
}

impl Encounter {
    pub fn new(
        id: u32,
        patient: PatientId,
        datetime: NaiveDateTime,
        form_uuid: impl Into<String>,
    ) -> Self {
        Self {
            id,
            patient,
            datetime,
            form_uuid: form_uuid.into(),
            visit_start: None,
            voided: false,
        }
    }

    /// Attach the enclosing visit's start time.
    pub fn with_visit_start(mut self, visit_start: NaiveDateTime) -> Self {
        self.visit_start = Some(visit_start);
        self
    }

    /// Mark the record voided.
    pub fn voided(mut self) -> Self {
        self.voided = true;
        self
    }

    /// The encounter's effective timestamp: the enclosing visit's start
    /// when one exists, the encounter's own timestamp otherwise.
    pub fn effective_datetime(&self) -> NaiveDateTime {
        self.visit_start.unwrap_or(self.datetime)
    }
}

/// A single recorded observation carrying a date value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obs {
    pub patient: PatientId,
    /// UUID of the concept the observation answers
    pub concept_uuid: String,
    /// The recorded date value
    pub value_date: NaiveDate,
}

impl Obs {
    pub fn new(patient: PatientId, concept_uuid: impl Into<String>, value_date: NaiveDate) -> Self {
        Self {
            patient,
            concept_uuid: concept_uuid.into(),
            value_date,
        }
    }
}
