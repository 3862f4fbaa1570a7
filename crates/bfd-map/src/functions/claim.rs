//! Encounter, claim and device functions.

use bfd_standards::state_code;

use super::dates::{format_date, next_friday};
use super::{FnFunction, FunctionInput, FunctionRegistry, money};
use crate::error::EvalError;

const CARRIER_NUMBER_COLUMN: &str = "CARR_NUM";
const PRICING_LOCALITY_COLUMN: &str = "CARR_LINE_PRCNG_LCLTY_CD";

pub(super) fn register(registry: &mut FunctionRegistry) {
    let functions: [(&'static str, &'static str, super::EvalFn); 16] = [
        ("provider_state_code", "SSA code of the provider state", provider_state_code),
        ("provider_id", "Encounter provider identifier", provider_id),
        ("carr_num", "Carrier number for the provider state", carr_num),
        (
            "carr_line_prcng_lclty_cd",
            "Carrier pricing locality for the provider state",
            carr_line_prcng_lclty_cd,
        ),
        ("tax_num", "Clinician SSN without dashes", tax_num),
        ("clm_from_dt", "Encounter start date", clm_from_dt),
        ("clm_thru_dt", "Encounter stop date", clm_thru_dt),
        ("nch_wkly_proc_dt", "First Friday after the encounter stop", nch_wkly_proc_dt),
        ("device_start_dt", "Device start date", device_start_dt),
        ("total_claim_cost", "Total claim cost", total_claim_cost),
        ("covered_cost", "Covered claim cost", covered_cost),
        ("coinsurance_paid", "Coinsurance paid", coinsurance_paid),
        ("deductible_paid", "Deductible paid", deductible_paid),
        (
            "deductible_and_coinsurance",
            "Deductible plus coinsurance paid",
            deductible_and_coinsurance,
        ),
        ("line_srvc_cnt", "Number of billed line items", line_srvc_cnt),
        ("carr_line_mtus_cnt", "Encounter length in minutes", carr_line_mtus_cnt),
    ];
    for (name, description, eval_fn) in functions {
        registry.register(Box::new(FnFunction::new(name, description, eval_fn)));
    }
}

fn provider_state_code(input: &FunctionInput<'_>) -> Result<String, EvalError> {
    Ok(state_code(&input.provider()?.state).to_string())
}

fn provider_id(input: &FunctionInput<'_>) -> Result<String, EvalError> {
    Ok(input.provider()?.id.clone())
}

fn carr_num(input: &FunctionInput<'_>) -> Result<String, EvalError> {
    let state = &input.provider()?.state;
    Ok(input.carriers().lookup(state, CARRIER_NUMBER_COLUMN).to_string())
}

fn carr_line_prcng_lclty_cd(input: &FunctionInput<'_>) -> Result<String, EvalError> {
    let state = &input.provider()?.state;
    Ok(input
        .carriers()
        .lookup(state, PRICING_LOCALITY_COLUMN)
        .to_string())
}

fn tax_num(input: &FunctionInput<'_>) -> Result<String, EvalError> {
    let ssn = input
        .encounter()?
        .clinician
        .as_ref()
        .and_then(|c| c.ssn.as_deref())
        .unwrap_or("");
    Ok(ssn.replace('-', ""))
}

fn clm_from_dt(input: &FunctionInput<'_>) -> Result<String, EvalError> {
    Ok(format_date(input.encounter()?.start))
}

fn clm_thru_dt(input: &FunctionInput<'_>) -> Result<String, EvalError> {
    Ok(format_date(input.encounter()?.stop))
}

fn nch_wkly_proc_dt(input: &FunctionInput<'_>) -> Result<String, EvalError> {
    next_friday(input.encounter()?.stop).map(format_date)
}

fn device_start_dt(input: &FunctionInput<'_>) -> Result<String, EvalError> {
    Ok(format_date(input.device()?.start))
}

fn total_claim_cost(input: &FunctionInput<'_>) -> Result<String, EvalError> {
    Ok(money(input.encounter()?.claim.total_cost))
}

fn covered_cost(input: &FunctionInput<'_>) -> Result<String, EvalError> {
    Ok(money(input.encounter()?.claim.covered_cost))
}

fn coinsurance_paid(input: &FunctionInput<'_>) -> Result<String, EvalError> {
    Ok(money(input.encounter()?.claim.coinsurance_paid))
}

fn deductible_paid(input: &FunctionInput<'_>) -> Result<String, EvalError> {
    Ok(money(input.encounter()?.claim.deductible_paid))
}

fn deductible_and_coinsurance(input: &FunctionInput<'_>) -> Result<String, EvalError> {
    let claim = &input.encounter()?.claim;
    Ok(money(claim.deductible_paid + claim.coinsurance_paid))
}

fn line_srvc_cnt(input: &FunctionInput<'_>) -> Result<String, EvalError> {
    Ok(input.encounter()?.claim.item_count.to_string())
}

fn carr_line_mtus_cnt(input: &FunctionInput<'_>) -> Result<String, EvalError> {
    let encounter = input.encounter()?;
    Ok((encounter.stop - encounter.start).num_minutes().to_string())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use bfd_model::{EvaluationContext, Person};
    use bfd_standards::CarrierTable;

    use super::super::fixtures;
    use super::*;

    fn carriers() -> CarrierTable {
        let row: BTreeMap<String, String> = [
            ("STATE", "Ohio"),
            ("STATE_CODE", "OH"),
            ("CARR_NUM", "15202"),
            ("CARR_LINE_PRCNG_LCLTY_CD", "00"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        CarrierTable::from_rows(vec![row])
    }

    fn eval(name: &str, context: EvaluationContext<'_>) -> Result<String, EvalError> {
        let registry = FunctionRegistry::standard();
        let carriers = carriers();
        let input = FunctionInput::new(context, &carriers);
        registry.get(name).unwrap().evaluate(&input)
    }

    #[test]
    fn encounter_values() {
        let person = fixtures::person();
        let encounter = fixtures::encounter();
        let ctx = EvaluationContext::new(&person).with_encounter(&encounter);
        let value = |name| eval(name, ctx).unwrap();

        assert_eq!(value("provider_id"), "prov-77");
        assert_eq!(value("provider_state_code"), "36");
        assert_eq!(value("carr_num"), "15202");
        assert_eq!(value("carr_line_prcng_lclty_cd"), "00");
        assert_eq!(value("tax_num"), "999123456");
        assert_eq!(value("clm_from_dt"), "01-Jun-2021");
        assert_eq!(value("clm_thru_dt"), "01-Jun-2021");
        assert_eq!(value("nch_wkly_proc_dt"), "04-Jun-2021");
        assert_eq!(value("carr_line_mtus_cnt"), "45");
        assert_eq!(value("line_srvc_cnt"), "3");
    }

    #[test]
    fn claim_amounts() {
        let person = fixtures::person();
        let encounter = fixtures::encounter();
        let ctx = EvaluationContext::new(&person).with_encounter(&encounter);
        let value = |name| eval(name, ctx).unwrap();

        assert_eq!(value("total_claim_cost"), "250.50");
        assert_eq!(value("covered_cost"), "200.00");
        assert_eq!(value("coinsurance_paid"), "40.00");
        assert_eq!(value("deductible_paid"), "10.25");
        assert_eq!(value("deductible_and_coinsurance"), "50.25");
    }

    #[test]
    fn carrier_defaults_for_unknown_state() {
        let person = fixtures::person();
        let mut encounter = fixtures::encounter();
        if let Some(provider) = encounter.provider.as_mut() {
            provider.state = "Texas".to_string();
        }
        let ctx = EvaluationContext::new(&person).with_encounter(&encounter);
        assert_eq!(eval("carr_num", ctx).unwrap(), "0");
        assert_eq!(eval("provider_state_code", ctx).unwrap(), "45");
    }

    #[test]
    fn carrier_lookup_ignores_provider_state_case() {
        let person = fixtures::person();
        let mut encounter = fixtures::encounter();
        if let Some(provider) = encounter.provider.as_mut() {
            provider.state = "ohio".to_string();
        }
        let ctx = EvaluationContext::new(&person).with_encounter(&encounter);
        assert_eq!(eval("carr_num", ctx).unwrap(), "15202");
        assert_eq!(eval("carr_line_prcng_lclty_cd", ctx).unwrap(), "00");
    }

    #[test]
    fn missing_clinician_gives_empty_tax_number() {
        let person = fixtures::person();
        let mut encounter = fixtures::encounter();
        encounter.clinician = None;
        let ctx = EvaluationContext::new(&person).with_encounter(&encounter);
        assert_eq!(eval("tax_num", ctx).unwrap(), "");
    }

    #[test]
    fn missing_context_objects_are_errors() {
        let person: Person = fixtures::person();
        let ctx = EvaluationContext::new(&person);
        assert_eq!(eval("clm_from_dt", ctx), Err(EvalError::MissingEncounter));
        assert_eq!(eval("device_start_dt", ctx), Err(EvalError::MissingDevice));

        let mut encounter = fixtures::encounter();
        encounter.provider = None;
        let ctx = EvaluationContext::new(&person).with_encounter(&encounter);
        assert_eq!(eval("carr_num", ctx), Err(EvalError::MissingProvider));
    }

    #[test]
    fn device_start() {
        let person = fixtures::person();
        let encounter = fixtures::encounter();
        let device = fixtures::device();
        let ctx = EvaluationContext::new(&person)
            .with_encounter(&encounter)
            .with_device(&device);
        assert_eq!(eval("device_start_dt", ctx).unwrap(), "02-Jun-2021");
    }
}
