//! Domain objects visible to specification functions.
//!
//! These are the read-only views of the simulated patient record that the
//! mapping engine evaluates expressions against. They carry only the
//! attributes the function set needs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A simulated patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Simulation identifier (UUID text).
    pub id: String,
    /// Beneficiary identifier assigned by the exporter.
    pub bene_id: String,
    pub first_name: String,
    pub last_name: String,
    /// `M` or `F`.
    pub gender: String,
    pub race: String,
    pub ethnicity: String,
    /// State name or two-letter abbreviation.
    pub state: String,
    pub zip: String,
    pub birth_date: DateTime<Utc>,
    #[serde(default)]
    pub death_date: Option<DateTime<Utc>>,
    /// Seed for the per-person random source.
    #[serde(default)]
    pub seed: u64,
}

/// Organization that delivered an encounter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    pub id: String,
    pub state: String,
}

/// Practitioner attached to an encounter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Clinician {
    #[serde(default)]
    pub ssn: Option<String>,
}

/// Financial totals of the claim generated for an encounter.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Claim {
    pub total_cost: f64,
    pub covered_cost: f64,
    pub coinsurance_paid: f64,
    pub deductible_paid: f64,
    /// Number of billed line items.
    #[serde(default)]
    pub item_count: usize,
}

/// A single encounter in the patient's record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Encounter {
    pub start: DateTime<Utc>,
    pub stop: DateTime<Utc>,
    #[serde(default)]
    pub provider: Option<Provider>,
    #[serde(default)]
    pub clinician: Option<Clinician>,
    #[serde(default)]
    pub claim: Claim,
}

/// Durable medical equipment issued to the patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub code: String,
    pub start: DateTime<Utc>,
    #[serde(default)]
    pub stop: Option<DateTime<Utc>>,
}

/// The objects one evaluation may read: always a person, optionally an
/// encounter and a device.
#[derive(Debug, Clone, Copy)]
pub struct EvaluationContext<'a> {
    person: &'a Person,
    encounter: Option<&'a Encounter>,
    device: Option<&'a Device>,
}

impl<'a> EvaluationContext<'a> {
    /// Beneficiary-level context.
    pub fn new(person: &'a Person) -> Self {
        Self {
            person,
            encounter: None,
            device: None,
        }
    }

    #[must_use]
    pub fn with_encounter(mut self, encounter: &'a Encounter) -> Self {
        self.encounter = Some(encounter);
        self
    }

    #[must_use]
    pub fn with_device(mut self, device: &'a Device) -> Self {
        self.device = Some(device);
        self
    }

    pub fn person(&self) -> &'a Person {
        self.person
    }

    pub fn encounter(&self) -> Option<&'a Encounter> {
        self.encounter
    }

    pub fn device(&self) -> Option<&'a Device> {
        self.device
    }
}
