// Save/load round trips through real files.

use proptest::prelude::*;
use tempfile::tempdir;

use tecgas_core::GasPlan;
use tecgas_model::gas_planning_sheet;
use tecgas_persistence::{load_plan, read_document, save_plan, to_document};

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(64),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

#[test]
fn calculated_plan_survives_save_and_load() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("tec45.json");

    let mut plan = GasPlan::new().expect("plan");
    plan.edit_path("General Info/Max Depth", "150").expect("edit");
    plan.edit_path("Gas Reserve / Rock Bottom/First Gas Switch Depth", "70")
        .expect("edit");
    plan.edit_path("Deco Stops/4/Time", "6").expect("edit");
    save_plan(plan.form(), &path).expect("save");

    let mut restored = gas_planning_sheet();
    load_plan(&path, &mut restored).expect("load");
    assert_eq!(&restored, plan.form());

    let document = read_document(&path).expect("read");
    assert_eq!(document, to_document(plan.form()));
}

#[test]
fn hand_written_file_with_extra_rows_loads() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("legacy.json");
    std::fs::write(
        &path,
        r#"{
    "General Info": ["130", "Tx 18/45", "25", "30/80", "", "", "spare"],
    "Deco Stops": [["70", "1"], ["60", "1"], ["50", "2"], ["40", "2"], ["30", "3"], ["20", "6"], ["10", "9"]]
}"#,
    )
    .expect("write");

    let mut form = gas_planning_sheet();
    let summary = load_plan(&path, &mut form).expect("load");
    assert_eq!(summary.applied.len(), 2);
    assert!(summary.skipped.is_empty());

    let path: tecgas_model::FieldPath = "Deco Stops/6/Time".parse().expect("path");
    let id = form.resolve(&path).expect("resolve");
    assert_eq!(form.text(id).expect("text"), "6");
    // Loading does not recalculate.
    let path: tecgas_model::FieldPath = "Deco Gas Requirements/6/Time".parse().expect("path");
    let id = form.resolve(&path).expect("resolve");
    assert_eq!(form.text(id).expect("text"), "");
}

proptest! {
    #![proptest_config(config())]

    #[test]
    fn arbitrary_text_round_trips(values in prop::collection::vec(".{0,12}", 76)) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plan.json");

        let mut form = gas_planning_sheet();
        let ids = form.field_ids();
        prop_assert_eq!(ids.len(), values.len());
        for (id, value) in ids.iter().zip(&values) {
            form.assign(*id, value).unwrap();
        }
        save_plan(&form, &path).unwrap();

        let mut restored = gas_planning_sheet();
        load_plan(&path, &mut restored).unwrap();
        prop_assert_eq!(restored, form);
    }
}
