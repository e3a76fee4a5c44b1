//! End-to-end recalculation scenarios on the planning sheet.

use tecgas_core::GasPlan;
use tecgas_model::sheet::{self, consumption, stops};
use tecgas_model::{FieldId, SectionId};

fn emergency(row: usize, column: usize) -> FieldId {
    FieldId::cell(SectionId::EmergencyReserve, row, column)
}

fn text(plan: &GasPlan, id: FieldId) -> &str {
    plan.form().text(id).expect("field")
}

#[test]
fn max_depth_and_gas_switch_fill_emergency_depths() {
    let mut plan = GasPlan::new().expect("plan");
    plan.edit(sheet::MAX_DEPTH, "120").expect("max depth");
    plan.edit(sheet::FIRST_GAS_SWITCH_DEPTH, "70")
        .expect("gas switch");

    assert_eq!(text(&plan, emergency(0, consumption::DEPTH)), "120");
    assert_eq!(text(&plan, emergency(0, consumption::PRESSURE)), "4.64");
    assert_eq!(text(&plan, emergency(2, consumption::DEPTH)), "70");
    assert_eq!(text(&plan, emergency(2, consumption::PRESSURE)), "3.12");
    assert_eq!(text(&plan, emergency(1, consumption::DEPTH)), "95.0");
    assert_eq!(text(&plan, emergency(1, consumption::PRESSURE)), "3.88");
}

#[test]
fn gas_switch_alone_leaves_midpoint_pending() {
    let mut plan = GasPlan::new().expect("plan");
    plan.edit(sheet::FIRST_GAS_SWITCH_DEPTH, "70")
        .expect("gas switch");

    assert_eq!(text(&plan, emergency(1, consumption::DEPTH)), "(A)");
    assert_eq!(text(&plan, emergency(1, consumption::PRESSURE)), "");
    assert_eq!(text(&plan, emergency(2, consumption::PRESSURE)), "3.12");

    plan.edit(sheet::MAX_DEPTH, "120").expect("max depth");
    assert_eq!(text(&plan, emergency(1, consumption::DEPTH)), "95.0");
}

#[test]
fn direct_row_edit_fills_pending_midpoint() {
    let mut plan = GasPlan::new().expect("plan");
    plan.edit(sheet::FIRST_GAS_SWITCH_DEPTH, "70")
        .expect("gas switch");
    plan.edit(emergency(0, consumption::DEPTH), "120")
        .expect("row 1 depth");

    assert_eq!(text(&plan, emergency(1, consumption::DEPTH)), "95.0");
    assert_eq!(text(&plan, emergency(1, consumption::PRESSURE)), "3.88");
}

#[test]
fn manual_midpoint_survives_row_three_edit() {
    let mut plan = GasPlan::new().expect("plan");
    plan.edit(sheet::FIRST_GAS_SWITCH_DEPTH, "70")
        .expect("gas switch");
    plan.edit(emergency(1, consumption::DEPTH), "80")
        .expect("manual row 2");
    plan.edit(emergency(0, consumption::DEPTH), "120")
        .expect("row 1 depth");
    plan.edit(emergency(2, consumption::DEPTH), "60")
        .expect("row 3 depth");

    assert_eq!(text(&plan, emergency(1, consumption::DEPTH)), "80");
}

#[test]
fn emergency_volumes_roll_up_to_two_diver_reserve() {
    let mut plan = GasPlan::new().expect("plan");
    plan.edit(sheet::MAX_DEPTH, "120").expect("max depth");
    plan.edit(sheet::FIRST_GAS_SWITCH_DEPTH, "70")
        .expect("gas switch");
    plan.edit(emergency(0, consumption::RATE), "1.5")
        .expect("rate");
    plan.edit(emergency(0, consumption::TIME), "2").expect("time");
    plan.edit(emergency(1, consumption::RATE), "1.5")
        .expect("rate");
    plan.edit(emergency(1, consumption::TIME), "3").expect("time");

    assert_eq!(text(&plan, emergency(0, consumption::VOLUME)), "13.9");
    assert_eq!(text(&plan, emergency(1, consumption::VOLUME)), "17.5");
    assert_eq!(text(&plan, emergency(2, consumption::VOLUME)), "31.4");
    assert_eq!(text(&plan, sheet::TWO_DIVER_RESERVE), "62.8");

    // Row 1 keeps its last numeric depth; row 2 falls back to the sentinel.
    plan.edit(sheet::MAX_DEPTH, "").expect("clear max depth");
    assert_eq!(text(&plan, emergency(0, consumption::DEPTH)), "120");
    assert_eq!(text(&plan, emergency(0, consumption::PRESSURE)), "4.64");
    assert_eq!(text(&plan, emergency(0, consumption::VOLUME)), "13.9");
    assert_eq!(text(&plan, emergency(1, consumption::DEPTH)), "(A)");
    assert_eq!(text(&plan, emergency(1, consumption::PRESSURE)), "");
    assert_eq!(text(&plan, emergency(1, consumption::VOLUME)), "");
    assert_eq!(text(&plan, emergency(2, consumption::VOLUME)), "13.9");
    assert_eq!(text(&plan, sheet::TWO_DIVER_RESERVE), "27.8");
}

#[test]
fn non_numeric_depths_keep_last_mirrored_rows() {
    let mut plan = GasPlan::new().expect("plan");
    plan.edit(sheet::MAX_DEPTH, "120").expect("max depth");
    plan.edit(sheet::FIRST_GAS_SWITCH_DEPTH, "70")
        .expect("gas switch");

    plan.edit(sheet::MAX_DEPTH, "12a").expect("bad max depth");
    plan.edit(sheet::FIRST_GAS_SWITCH_DEPTH, "")
        .expect("empty gas switch");

    assert_eq!(text(&plan, emergency(0, consumption::DEPTH)), "120");
    assert_eq!(text(&plan, emergency(0, consumption::PRESSURE)), "4.64");
    assert_eq!(text(&plan, emergency(2, consumption::DEPTH)), "70");
    assert_eq!(text(&plan, emergency(2, consumption::PRESSURE)), "3.12");
    assert_eq!(text(&plan, emergency(1, consumption::DEPTH)), "(A)");
}

#[test]
fn deco_stop_time_feeds_deco_gas() {
    let mut plan = GasPlan::new().expect("plan");
    let report = plan
        .edit_path("Deco Stops/1/Time", "10")
        .expect("deco stop");

    let gas_time = FieldId::cell(SectionId::DecoGas, 0, consumption::TIME);
    let gas_volume = FieldId::cell(SectionId::DecoGas, 0, consumption::VOLUME);
    let total = FieldId::cell(SectionId::DecoGas, 6, consumption::VOLUME);
    assert_eq!(text(&plan, gas_time), "10");
    assert_eq!(text(&plan, gas_volume), "18.60");
    assert_eq!(text(&plan, total), "18.60");
    assert_eq!(
        report.changed,
        vec![
            FieldId::cell(SectionId::DecoStops, 0, stops::TIME),
            gas_time,
            gas_volume,
            total
        ]
    );

    plan.edit_path("Deco Stops/2/Time", "5").expect("deco stop");
    // 2.8 * .6 * 5 = 8.40
    assert_eq!(text(&plan, total), "27.00");
}

#[test]
fn bottom_gas_row_uses_two_decimals() {
    let mut plan = GasPlan::new().expect("plan");
    plan.edit_path("Bottom Gas Requirements/1/Depth", "99")
        .expect("depth");
    plan.edit_path("Bottom Gas Requirements/1/SAC", ".75")
        .expect("sac");
    plan.edit_path("Bottom Gas Requirements/1/Time", "20")
        .expect("time");

    let volume = FieldId::cell(SectionId::BottomGas, 0, consumption::VOLUME);
    assert_eq!(text(&plan, volume), "60.00");

    plan.edit_path("Bottom Gas Requirements/1/SAC", "n/a")
        .expect("sac");
    assert_eq!(text(&plan, volume), "");
}

#[test]
fn clear_all_resets_emergency_table() {
    let mut plan = GasPlan::new().expect("plan");
    plan.edit(sheet::MAX_DEPTH, "120").expect("max depth");
    plan.edit(sheet::FIRST_GAS_SWITCH_DEPTH, "70")
        .expect("gas switch");
    plan.edit(emergency(0, consumption::RATE), "1").expect("rate");
    plan.edit(emergency(0, consumption::TIME), "1").expect("time");
    plan.clear_all();

    assert_eq!(text(&plan, emergency(1, consumption::DEPTH)), "(A)");
    assert_eq!(text(&plan, emergency(2, consumption::TIME)), "Total Per Diver");
    assert_eq!(text(&plan, emergency(2, consumption::VOLUME)), "");
    assert_eq!(text(&plan, emergency(0, consumption::DEPTH)), "");
    assert_eq!(text(&plan, sheet::MAX_DEPTH), "");
    assert_eq!(text(&plan, sheet::TWO_DIVER_RESERVE), "");
}

#[test]
fn unknown_paths_are_errors() {
    let mut plan = GasPlan::new().expect("plan");
    assert!(plan.edit_path("Deco Stops/9/Time", "1").is_err());
    assert!(plan.edit_path("General Info/Depth", "1").is_err());
    assert!(plan.edit_path("Nowhere/Depth", "1").is_err());
}
