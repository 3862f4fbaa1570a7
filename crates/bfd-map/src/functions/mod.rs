//! Named functions referenced from specification cells as `[name]`.
//!
//! Each function reads the [`EvaluationContext`] (and the carrier side
//! table) and returns the field value as text. Functions are looked up by
//! exact name in a [`FunctionRegistry`]; adding one means registering it,
//! not editing the evaluator.
//!
//! ```ignore
//! use bfd_map::functions::FunctionRegistry;
//!
//! let registry = FunctionRegistry::default();
//! if let Some(function) = registry.get("bene_race") {
//!     let value = function.evaluate(&input)?;
//! }
//! ```

mod beneficiary;
mod claim;
pub mod dates;

use std::collections::HashMap;

use bfd_model::{Device, Encounter, EvaluationContext, Person, Provider};
use bfd_standards::CarrierTable;

use crate::error::EvalError;

/// What a function may read during one evaluation.
#[derive(Debug, Clone, Copy)]
pub struct FunctionInput<'a> {
    context: EvaluationContext<'a>,
    carriers: &'a CarrierTable,
}

impl<'a> FunctionInput<'a> {
    pub fn new(context: EvaluationContext<'a>, carriers: &'a CarrierTable) -> Self {
        Self { context, carriers }
    }

    pub fn person(&self) -> &'a Person {
        self.context.person()
    }

    /// The encounter being exported.
    ///
    /// # Errors
    ///
    /// [`EvalError::MissingEncounter`] for beneficiary-level calls.
    pub fn encounter(&self) -> Result<&'a Encounter, EvalError> {
        self.context.encounter().ok_or(EvalError::MissingEncounter)
    }

    pub fn device(&self) -> Result<&'a Device, EvalError> {
        self.context.device().ok_or(EvalError::MissingDevice)
    }

    pub fn provider(&self) -> Result<&'a Provider, EvalError> {
        self.encounter()?
            .provider
            .as_ref()
            .ok_or(EvalError::MissingProvider)
    }

    pub fn carriers(&self) -> &'a CarrierTable {
        self.carriers
    }
}

/// A named computation over the evaluation context.
///
/// Implementations must not mutate anything they read; the same context is
/// evaluated against every entry of a record.
pub trait FieldFunction: Send + Sync {
    /// Name used inside brackets in the specification (e.g. `bene_race`).
    fn name(&self) -> &'static str;

    /// One-line description shown by the CLI function listing.
    fn description(&self) -> &'static str {
        "Field function"
    }

    /// Computes the field value.
    ///
    /// # Errors
    ///
    /// Returns an error when the context lacks an object the function needs
    /// (encounter, provider, device).
    fn evaluate(&self, input: &FunctionInput<'_>) -> Result<String, EvalError>;
}

/// Functions indexed by their exact name.
#[derive(Default)]
pub struct FunctionRegistry {
    functions: HashMap<&'static str, Box<dyn FieldFunction>>,
}

impl FunctionRegistry {
    /// An empty registry. Use [`FunctionRegistry::standard`] for the full
    /// function set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in function.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        beneficiary::register(&mut registry);
        claim::register(&mut registry);
        registry
    }

    /// Registers a function, replacing any previous one with the same name.
    pub fn register(&mut self, function: Box<dyn FieldFunction>) {
        self.functions.insert(function.name(), function);
    }

    /// Case-sensitive lookup.
    pub fn get(&self, name: &str) -> Option<&dyn FieldFunction> {
        self.functions.get(name).map(|f| f.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Registered functions sorted by name.
    pub fn functions(&self) -> Vec<&dyn FieldFunction> {
        let mut functions: Vec<&dyn FieldFunction> =
            self.functions.values().map(|f| f.as_ref()).collect();
        functions.sort_by_key(|f| f.name());
        functions
    }
}

impl std::fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self.functions.keys().collect();
        names.sort();
        f.debug_struct("FunctionRegistry")
            .field("functions", &names)
            .finish()
    }
}

type EvalFn = fn(&FunctionInput<'_>) -> Result<String, EvalError>;

/// Adapts a plain function to [`FieldFunction`].
pub struct FnFunction {
    name: &'static str,
    description: &'static str,
    eval_fn: EvalFn,
}

impl FnFunction {
    pub fn new(name: &'static str, description: &'static str, eval_fn: EvalFn) -> Self {
        Self {
            name,
            description,
            eval_fn,
        }
    }
}

impl FieldFunction for FnFunction {
    fn name(&self) -> &'static str {
        self.name
    }

    fn description(&self) -> &'static str {
        self.description
    }

    fn evaluate(&self, input: &FunctionInput<'_>) -> Result<String, EvalError> {
        (self.eval_fn)(input)
    }
}

/// Formats a money amount with two decimals.
fn money(amount: f64) -> String {
    format!("{amount:.2}")
}

#[cfg(test)]
pub(crate) mod fixtures {
    use bfd_model::{Claim, Clinician, Device, Encounter, Person, Provider};
    use chrono::{TimeZone, Utc};

    pub fn person() -> Person {
        Person {
            id: "8f2a41c0-5d3e-4b7a-9c1d-0e6f7a8b9c0d".to_string(),
            bene_id: "-1001".to_string(),
            first_name: "Maximiliano Alejandro".to_string(),
            last_name: "Ortega".to_string(),
            gender: "M".to_string(),
            race: "white".to_string(),
            ethnicity: "hispanic".to_string(),
            state: "Massachusetts".to_string(),
            zip: "02139".to_string(),
            birth_date: Utc.with_ymd_and_hms(1950, 3, 14, 8, 0, 0).unwrap(),
            death_date: None,
            seed: 42,
        }
    }

    pub fn encounter() -> Encounter {
        Encounter {
            // Tuesday
            start: Utc.with_ymd_and_hms(2021, 6, 1, 9, 0, 0).unwrap(),
            stop: Utc.with_ymd_and_hms(2021, 6, 1, 9, 45, 0).unwrap(),
            provider: Some(Provider {
                id: "prov-77".to_string(),
                state: "Ohio".to_string(),
            }),
            clinician: Some(Clinician {
                ssn: Some("999-12-3456".to_string()),
            }),
            claim: Claim {
                total_cost: 250.5,
                covered_cost: 200.0,
                coinsurance_paid: 40.0,
                deductible_paid: 10.25,
                item_count: 3,
            },
        }
    }

    pub fn device() -> Device {
        Device {
            code: "706180003".to_string(),
            start: Utc.with_ymd_and_hms(2021, 6, 2, 0, 0, 0).unwrap(),
            stop: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_has_every_function() {
        let registry = FunctionRegistry::standard();
        for name in [
            "bene_id",
            "bene_race",
            "bene_state_code",
            "provider_state_code",
            "bene_termination_cd",
            "carr_num",
            "carr_line_prcng_lclty_cd",
            "device_start_dt",
            "clm_from_dt",
            "clm_thru_dt",
            "nch_wkly_proc_dt",
            "coinsurance_paid",
            "deductible_paid",
            "deductible_and_coinsurance",
            "total_claim_cost",
            "tax_num",
            "provider_id",
        ] {
            assert!(registry.contains(name), "missing function {name}");
        }
        assert_eq!(registry.len(), 28);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let registry = FunctionRegistry::standard();
        assert!(registry.get("bene_id").is_some());
        assert!(registry.get("BENE_ID").is_none());
    }

    #[test]
    fn custom_function_can_be_registered() {
        fn constant(_: &FunctionInput<'_>) -> Result<String, EvalError> {
            Ok("X".to_string())
        }
        let mut registry = FunctionRegistry::new();
        assert!(registry.is_empty());
        registry.register(Box::new(FnFunction::new("constant", "always X", constant)));

        let person = fixtures::person();
        let carriers = CarrierTable::default();
        let input = FunctionInput::new(EvaluationContext::new(&person), &carriers);
        let function = registry.get("constant").unwrap();
        assert_eq!(function.evaluate(&input).unwrap(), "X");
        assert_eq!(function.description(), "always X");
    }

    #[test]
    fn functions_are_sorted() {
        let registry = FunctionRegistry::standard();
        let names: Vec<_> = registry.functions().iter().map(|f| f.name()).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn money_has_two_decimals() {
        assert_eq!(money(10.0), "10.00");
        assert_eq!(money(1234.5), "1234.50");
    }
}
