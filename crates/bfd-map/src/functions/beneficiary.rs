//! Person-level functions.

use bfd_standards::state_code;

use super::dates::format_date;
use super::{FnFunction, FunctionInput, FunctionRegistry};
use crate::error::EvalError;

/// Longest given name the beneficiary record accepts.
const GIVEN_NAME_LEN: usize = 15;

pub(super) fn register(registry: &mut FunctionRegistry) {
    let functions: [(&'static str, &'static str, super::EvalFn); 12] = [
        ("bene_id", "Beneficiary identifier", bene_id),
        ("bene_hic_num", "HIC number from the person id", bene_hic_num),
        ("bene_mbi_num", "MBI number from the person id", bene_mbi_num),
        ("bene_sex", "Sex code (1 male, 2 female, 0 unknown)", bene_sex),
        ("bene_race", "Race code (5 for hispanic ethnicity)", bene_race),
        ("bene_state_code", "SSA code of the beneficiary state", bene_state_code),
        ("bene_zip", "Beneficiary zip code", bene_zip),
        ("bene_srnm_name", "Beneficiary surname", bene_srnm_name),
        ("bene_gvn_name", "Beneficiary given name, at most 15 characters", bene_gvn_name),
        ("bene_birth_dt", "Birth date", bene_birth_dt),
        ("bene_death_dt", "Death date, empty when alive", bene_death_dt),
        ("bene_termination_cd", "1 when a death date is recorded, else 0", bene_termination_cd),
    ];
    for (name, description, eval_fn) in functions {
        registry.register(Box::new(FnFunction::new(name, description, eval_fn)));
    }
}

fn bene_id(input: &FunctionInput<'_>) -> Result<String, EvalError> {
    Ok(input.person().bene_id.clone())
}

/// First `-` separated segment of the person id.
fn id_prefix(input: &FunctionInput<'_>) -> String {
    let id = &input.person().id;
    id.split('-').next().unwrap_or(id).to_string()
}

fn bene_hic_num(input: &FunctionInput<'_>) -> Result<String, EvalError> {
    Ok(id_prefix(input))
}

fn bene_mbi_num(input: &FunctionInput<'_>) -> Result<String, EvalError> {
    Ok(id_prefix(input))
}

fn bene_sex(input: &FunctionInput<'_>) -> Result<String, EvalError> {
    let code = match input.person().gender.trim() {
        "M" | "m" => "1",
        "F" | "f" => "2",
        _ => "0",
    };
    Ok(code.to_string())
}

fn bene_race(input: &FunctionInput<'_>) -> Result<String, EvalError> {
    let person = input.person();
    if person.ethnicity.trim().eq_ignore_ascii_case("hispanic") {
        return Ok("5".to_string());
    }
    let code = match person.race.trim().to_ascii_lowercase().as_str() {
        "white" => "1",
        "black" => "2",
        "asian" => "4",
        "native" => "6",
        _ => "3",
    };
    Ok(code.to_string())
}

fn bene_state_code(input: &FunctionInput<'_>) -> Result<String, EvalError> {
    Ok(state_code(&input.person().state).to_string())
}

fn bene_zip(input: &FunctionInput<'_>) -> Result<String, EvalError> {
    Ok(input.person().zip.clone())
}

fn bene_srnm_name(input: &FunctionInput<'_>) -> Result<String, EvalError> {
    Ok(input.person().last_name.clone())
}

fn bene_gvn_name(input: &FunctionInput<'_>) -> Result<String, EvalError> {
    Ok(input.person().first_name.chars().take(GIVEN_NAME_LEN).collect())
}

fn bene_birth_dt(input: &FunctionInput<'_>) -> Result<String, EvalError> {
    Ok(format_date(input.person().birth_date))
}

fn bene_death_dt(input: &FunctionInput<'_>) -> Result<String, EvalError> {
    Ok(input.person().death_date.map(format_date).unwrap_or_default())
}

fn bene_termination_cd(input: &FunctionInput<'_>) -> Result<String, EvalError> {
    let code = if input.person().death_date.is_some() { "1" } else { "0" };
    Ok(code.to_string())
}

#[cfg(test)]
mod tests {
    use bfd_model::EvaluationContext;
    use bfd_standards::CarrierTable;
    use chrono::{TimeZone, Utc};

    use super::super::fixtures;
    use super::*;

    fn eval(name: &str, person: &bfd_model::Person) -> String {
        let registry = FunctionRegistry::standard();
        let carriers = CarrierTable::default();
        let input = FunctionInput::new(EvaluationContext::new(person), &carriers);
        registry.get(name).unwrap().evaluate(&input).unwrap()
    }

    #[test]
    fn hispanic_ethnicity_wins_over_race() {
        let person = fixtures::person();
        assert_eq!(eval("bene_race", &person), "5");
    }

    #[test]
    fn race_codes() {
        let mut person = fixtures::person();
        person.ethnicity = "nonhispanic".to_string();
        for (race, code) in [
            ("white", "1"),
            ("black", "2"),
            ("asian", "4"),
            ("native", "6"),
            ("other", "3"),
        ] {
            person.race = race.to_string();
            assert_eq!(eval("bene_race", &person), code, "race {race}");
        }
    }

    #[test]
    fn identifiers_and_names() {
        let person = fixtures::person();
        assert_eq!(eval("bene_id", &person), "-1001");
        assert_eq!(eval("bene_hic_num", &person), "8f2a41c0");
        assert_eq!(eval("bene_mbi_num", &person), "8f2a41c0");
        assert_eq!(eval("bene_srnm_name", &person), "Ortega");
        assert_eq!(eval("bene_gvn_name", &person), "Maximiliano Ale");
        assert_eq!(eval("bene_zip", &person), "02139");
        assert_eq!(eval("bene_state_code", &person), "22");
        assert_eq!(eval("bene_sex", &person), "1");
    }

    #[test]
    fn death_fields() {
        let mut person = fixtures::person();
        assert_eq!(eval("bene_birth_dt", &person), "14-Mar-1950");
        assert_eq!(eval("bene_death_dt", &person), "");
        assert_eq!(eval("bene_termination_cd", &person), "0");

        person.death_date = Some(Utc.with_ymd_and_hms(2020, 1, 5, 0, 0, 0).unwrap());
        assert_eq!(eval("bene_death_dt", &person), "05-Jan-2020");
        assert_eq!(eval("bene_termination_cd", &person), "1");
    }

    #[test]
    fn unknown_sex_is_zero() {
        let mut person = fixtures::person();
        person.gender = "U".to_string();
        assert_eq!(eval("bene_sex", &person), "0");
        person.gender = "F".to_string();
        assert_eq!(eval("bene_sex", &person), "2");
    }
}
