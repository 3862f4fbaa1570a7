use bfd_model::{
    CarrierField, ConfigEntry, Encounter, EvaluationContext, FieldId, Person, RecordType,
};

fn sample_person_json() -> &'static str {
    r#"{
        "id": "6f0c2a1e-1111-2222-3333-444455556666",
        "bene_id": "-1",
        "first_name": "Ana",
        "last_name": "Lopez",
        "gender": "F",
        "race": "white",
        "ethnicity": "hispanic",
        "state": "Massachusetts",
        "zip": "01001",
        "birth_date": "1950-03-14T00:00:00Z",
        "seed": 42
    }"#
}

#[test]
fn person_deserializes_with_defaults() {
    let person: Person = serde_json::from_str(sample_person_json()).expect("person json");
    assert_eq!(person.bene_id, "-1");
    assert!(person.death_date.is_none());
    assert_eq!(person.seed, 42);
}

#[test]
fn encounter_defaults_claim_and_links() {
    let encounter: Encounter = serde_json::from_str(
        r#"{"start": "2020-01-06T09:00:00Z", "stop": "2020-01-06T09:30:00Z"}"#,
    )
    .expect("encounter json");
    assert!(encounter.provider.is_none());
    assert_eq!(encounter.claim.item_count, 0);
    assert_eq!(encounter.claim.total_cost, 0.0);
}

#[test]
fn context_builder_attaches_optional_objects() {
    let person: Person = serde_json::from_str(sample_person_json()).expect("person json");
    let encounter: Encounter = serde_json::from_str(
        r#"{"start": "2020-01-06T09:00:00Z", "stop": "2020-01-06T09:30:00Z"}"#,
    )
    .expect("encounter json");

    let bene = EvaluationContext::new(&person);
    assert!(bene.encounter().is_none());
    assert!(bene.device().is_none());

    let claim = EvaluationContext::new(&person).with_encounter(&encounter);
    assert_eq!(claim.encounter().map(|e| e.start), Some(encounter.start));
    assert_eq!(claim.person().last_name, "Lopez");
}

#[test]
fn record_type_serializes_snake_case() {
    let json = serde_json::to_string(&RecordType::BeneficiaryHistory).expect("serialize");
    assert_eq!(json, "\"beneficiary_history\"");
}

#[test]
fn entry_field_resolves_against_record_type() {
    let entry = ConfigEntry::new(12, "CARR_NUM").with_expression(RecordType::Carrier, "[carr_num]");
    assert_eq!(
        FieldId::resolve(RecordType::Carrier, entry.field()),
        Some(FieldId::Carrier(CarrierField::CARR_NUM))
    );
    assert_eq!(FieldId::resolve(RecordType::Inpatient, entry.field()), None);
}
