//! Validation report text and fixture loading.

use std::path::Path;

use bfd_cli::fixture::MappingFixture;
use bfd_cli::report::{blocking_issue_count, report_text};
use bfd_map::{ExportSpec, FunctionRegistry};
use bfd_model::{ConfigEntry, RecordType};
use bfd_standards::default_spec_path;

fn fixture_path(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn report_lists_issues_by_record_type() {
    let entries = vec![
        ConfigEntry::new(2, "DML_IND")
            .with_expression(RecordType::Beneficiary, "INSERT")
            .with_expression(RecordType::Carrier, "INSERT"),
        ConfigEntry::new(3, "BENE_RACE_CD")
            .with_expression(RecordType::Beneficiary, "(see RTI algorithm)"),
        ConfigEntry::new(4, "CLM_ID").with_expression(RecordType::Carrier, "[claim_id]"),
        ConfigEntry::new(5, "LINE_NCH_PMT_AMT").with_expression(RecordType::Carrier, "0.00"),
        ConfigEntry::new(6, "RX_SRVC_RFRNC_NUM")
            .with_expression(RecordType::Prescription, "fieldValues.put(RX_SRVC_RFRNC_NUM)"),
    ];
    let spec = ExportSpec::new(entries, FunctionRegistry::standard());

    assert_eq!(blocking_issue_count(spec.report()), 2);
    insta::assert_snapshot!(report_text(spec.report()), @r###"
    beneficiary: 1 usable, 1 issues
    beneficiary_history: 0 usable, 0 issues
    carrier: 3 usable, 1 issues
    dme: 0 usable, 0 issues
    inpatient: 0 usable, 0 issues
    outpatient: 0 usable, 0 issues
    prescription: 1 usable, 1 issues
    issues (2 blocking):
      line 3 beneficiary BENE_RACE_CD: comment-only cell ignored
      line 4 carrier CLM_ID: unknown function in "[claim_id]"
      line 6 prescription RX_SRVC_RFRNC_NUM: unknown function in "fieldValues.put(RX_SRVC_RFRNC_NUM)"
    "###);
}

#[test]
fn bundled_specification_has_no_blocking_issues() {
    let spec = ExportSpec::load(&default_spec_path()).unwrap();
    assert_eq!(blocking_issue_count(spec.report()), 0);
    assert!(report_text(spec.report()).contains("line 23 beneficiary RTI_RACE_CD"));
}

#[test]
fn fixture_builds_encounter_context() {
    let fixture = MappingFixture::load(&fixture_path("carrier_encounter.json")).unwrap();
    assert_eq!(fixture.person.bene_id, "-19990000000042");
    assert!(fixture.device.is_none());

    let context = fixture.context();
    assert!(context.encounter().is_some());
    assert!(context.device().is_none());
    assert_eq!(context.person().seed, 20211);
}

#[test]
fn missing_fixture_names_the_path() {
    let err = MappingFixture::load(&fixture_path("absent.json")).unwrap_err();
    assert!(format!("{err:#}").contains("absent.json"));
}
