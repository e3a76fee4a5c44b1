//! Declaration of the Tec40/45 gas planning sheet.
//!
//! Column and label indices are exported so the recalculation rules and the
//! surfaces can address fields without repeating header strings.

use crate::{Field, FieldId, FormModel, Section, SectionId, Table};

/// Placeholder shown in the emergency row-2 depth until both neighbouring depths are known.
pub const ROW_MIDPOINT_SENTINEL: &str = "(A)";
pub const TOTAL_PER_DIVER: &str = "Total Per Diver";
pub const TOTAL: &str = "Total";

pub const EMERGENCY_ROWS: usize = 3;
pub const BOTTOM_ROWS: usize = 1;
pub const DECO_STOP_ROWS: usize = 6;
/// Six stop rows plus the summary row.
pub const DECO_GAS_ROWS: usize = DECO_STOP_ROWS + 1;

pub const DECO_DEPTHS: [&str; DECO_STOP_ROWS] = ["70", "60", "50", "40", "30", "20"];
pub const DECO_ATAS: [&str; DECO_STOP_ROWS] = ["3.1", "2.8", "2.5", "2.2", "1.9", "1.6"];
pub const DECO_SAC: &str = ".6";

pub mod general {
    pub const MAX_DEPTH: usize = 0;
    pub const GAS_MIX: usize = 1;
    pub const BOTTOM_TIME: usize = 2;
    pub const GRADIENT_FACTOR: usize = 3;
    pub const BACK_GAS_REQUIRED: usize = 4;
    pub const DECO_GAS_REQUIRED: usize = 5;

    pub const LABELS: [&str; 6] = [
        "Max Depth",
        "Gas Mix",
        "Bottom Time",
        "Gradient Factor (Lo/Hi)",
        "Total Back Gas Req (CUFT/PSI)",
        "Deco Gas Req (CUFT)",
    ];
}

pub mod reserve {
    pub const FIRST_GAS_SWITCH_DEPTH: usize = 0;
    pub const TWO_DIVER_RESERVE: usize = 1;
    pub const ROCK_BOTTOM_PRESSURE: usize = 2;

    pub const LABELS: [&str; 3] = [
        "First Gas Switch Depth",
        "Gas Reserve Volume For Two Divers (CUFT)",
        "Rock Bottom Pressure (PSI) [Total/Per Tank]",
    ];
}

/// Columns shared by the emergency, bottom gas and deco gas tables.
pub mod consumption {
    pub const DEPTH: usize = 0;
    pub const PRESSURE: usize = 1;
    pub const RATE: usize = 2;
    pub const TIME: usize = 3;
    pub const VOLUME: usize = 4;

    pub const HEADERS: [&str; 5] = ["Depth", "ATA", "SAC", "Time", "Gas Volume"];
    pub const EMERGENCY_HEADERS: [&str; 5] = ["Depth", "ATA", "Emergency SAC", "Time", "Gas Volume"];
}

pub mod stops {
    pub const DEPTH: usize = 0;
    pub const TIME: usize = 1;

    pub const HEADERS: [&str; 2] = ["Depth", "Time"];
}

pub const MAX_DEPTH: FieldId = FieldId::flat(SectionId::GeneralInfo, general::MAX_DEPTH);
pub const FIRST_GAS_SWITCH_DEPTH: FieldId =
    FieldId::flat(SectionId::GasReserve, reserve::FIRST_GAS_SWITCH_DEPTH);
pub const TWO_DIVER_RESERVE: FieldId =
    FieldId::flat(SectionId::GasReserve, reserve::TWO_DIVER_RESERVE);

/// Build the sheet with every field at its default.
pub fn gas_planning_sheet() -> FormModel {
    FormModel::from_sections_unchecked(vec![
        Section::flat(SectionId::GeneralInfo, labelled(&general::LABELS)),
        Section::flat(SectionId::GasReserve, labelled(&reserve::LABELS)),
        Section::table(SectionId::EmergencyReserve, emergency_table()),
        Section::table(SectionId::BottomGas, bottom_gas_table()),
        Section::table(SectionId::DecoStops, deco_stops_table()),
        Section::table(SectionId::DecoGas, deco_gas_table()),
    ])
}

fn labelled(labels: &[&str]) -> Vec<Field> {
    labels.iter().map(|label| Field::new(*label)).collect()
}

fn emergency_table() -> Table {
    let mut table = Table::new(consumption::EMERGENCY_HEADERS);
    table.add_row(|_, header| Field::new(header));
    table.add_row(|column, header| match column {
        consumption::DEPTH => Field::new(header).with_default(ROW_MIDPOINT_SENTINEL),
        _ => Field::new(header),
    });
    table.add_row(|column, header| match column {
        consumption::TIME => Field::new(header)
            .with_default(TOTAL_PER_DIVER)
            .read_only()
            .kept_on_clear(),
        consumption::VOLUME => Field::new(header).read_only(),
        _ => Field::new(header),
    });
    table.with_last_row_as_summary()
}

fn bottom_gas_table() -> Table {
    let mut table = Table::new(consumption::HEADERS);
    for _ in 0..BOTTOM_ROWS {
        table.add_row(|_, header| Field::new(header));
    }
    table
}

fn deco_stops_table() -> Table {
    let mut table = Table::new(stops::HEADERS);
    for depth in DECO_DEPTHS {
        table.add_row(|column, header| match column {
            stops::DEPTH => Field::new(header).with_default(depth),
            _ => Field::new(header),
        });
    }
    table
}

fn deco_gas_table() -> Table {
    let mut table = Table::new(consumption::HEADERS);
    for (depth, ata) in DECO_DEPTHS.into_iter().zip(DECO_ATAS) {
        table.add_row(|column, header| {
            let field = Field::new(header);
            match column {
                consumption::DEPTH => field.with_default(depth),
                consumption::PRESSURE => field.with_default(ata),
                consumption::RATE => field.with_default(DECO_SAC),
                _ => field,
            }
        });
    }
    table.add_row(|column, header| {
        let field = Field::new(header).read_only();
        if column == consumption::TIME {
            field.with_default(TOTAL)
        } else {
            field
        }
    });
    table.with_last_row_as_summary()
}
