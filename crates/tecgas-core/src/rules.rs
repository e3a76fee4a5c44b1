//! Derivation rules as data.
//!
//! Each rule reads its `inputs` and writes its single output. The rule set
//! for the planning sheet is declared by [`planning_rules`]; the order of
//! declaration breaks ties between rules that write the same field.

use tecgas_model::sheet::{
    self, DECO_STOP_ROWS, EMERGENCY_ROWS, ROW_MIDPOINT_SENTINEL, consumption, stops,
};
use tecgas_model::{FieldId, FormModel, SectionId};

use crate::error::Result;
use crate::formulas::{ata_from_depth, format_fixed, gas_volume, midpoint, parse_number};

/// How a rule turns its inputs into an output value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// `[depth]` to pressure in atmospheres, 2 decimals.
    Pressure,
    /// `[pressure, rate, time]` to gas volume.
    Volume { decimals: usize },
    /// Copy the input text verbatim.
    Mirror,
    /// Copy the input text verbatim when it is a number; otherwise leave the
    /// output untouched.
    MirrorNumber,
    /// `[a, b]` to their midpoint with 1 decimal, or the row sentinel when
    /// either is missing.
    Midpoint,
    /// Like [`RuleKind::Midpoint`], but only replaces an output that still
    /// holds the row sentinel and never writes the sentinel itself.
    MidpointRetry,
    /// Sum of all inputs; missing values count as zero.
    Sum { decimals: usize },
    /// Twice the input, cleared when the input is missing.
    Double { decimals: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub name: String,
    pub inputs: Vec<FieldId>,
    pub outputs: Vec<FieldId>,
    pub kind: RuleKind,
}

impl Rule {
    pub fn new(
        name: impl Into<String>,
        kind: RuleKind,
        inputs: Vec<FieldId>,
        output: FieldId,
    ) -> Self {
        Self {
            name: name.into(),
            inputs,
            outputs: vec![output],
            kind,
        }
    }

    /// Compute the new output text. `None` leaves the output untouched.
    pub fn evaluate(&self, form: &FormModel) -> Result<Option<String>> {
        let numbers = |form: &FormModel| -> Result<Vec<Option<f64>>> {
            self.inputs
                .iter()
                .map(|id| Ok(parse_number(form.text(*id)?)))
                .collect()
        };

        let value = match self.kind {
            RuleKind::Pressure => match numbers(form)?.as_slice() {
                [Some(depth)] => format_fixed(ata_from_depth(*depth), 2),
                _ => String::new(),
            },
            RuleKind::Volume { decimals } => match numbers(form)?.as_slice() {
                [Some(ata), Some(rate), Some(time)] => {
                    format_fixed(gas_volume(*ata, *rate, *time), decimals)
                }
                _ => String::new(),
            },
            RuleKind::Mirror => match self.inputs.first() {
                Some(source) => form.text(*source)?.to_string(),
                None => String::new(),
            },
            RuleKind::MirrorNumber => {
                let Some(source) = self.inputs.first() else {
                    return Ok(None);
                };
                let text = form.text(*source)?;
                if parse_number(text).is_none() {
                    return Ok(None);
                }
                text.to_string()
            }
            RuleKind::Midpoint => match numbers(form)?.as_slice() {
                [Some(a), Some(b)] => format_fixed(midpoint(*a, *b), 1),
                _ => ROW_MIDPOINT_SENTINEL.to_string(),
            },
            RuleKind::MidpointRetry => {
                let Some(output) = self.outputs.first() else {
                    return Ok(None);
                };
                if form.text(*output)? != ROW_MIDPOINT_SENTINEL {
                    return Ok(None);
                }
                match numbers(form)?.as_slice() {
                    [Some(a), Some(b)] => format_fixed(midpoint(*a, *b), 1),
                    _ => return Ok(None),
                }
            }
            RuleKind::Sum { decimals } => {
                let total: f64 = numbers(form)?.into_iter().flatten().sum();
                format_fixed(total, decimals)
            }
            RuleKind::Double { decimals } => match numbers(form)?.as_slice() {
                [Some(value)] => format_fixed(value * 2.0, decimals),
                _ => String::new(),
            },
        };
        Ok(Some(value))
    }
}

fn cell(section: SectionId, row: usize, column: usize) -> FieldId {
    FieldId::cell(section, row, column)
}

/// Depth to pressure and pressure × rate × time to volume for one table row.
fn consumption_row(rules: &mut Vec<Rule>, section: SectionId, row: usize, volume: Option<usize>) {
    let label = format!("{} row {}", section.name(), row + 1);
    rules.push(Rule::new(
        format!("{label} pressure"),
        RuleKind::Pressure,
        vec![cell(section, row, consumption::DEPTH)],
        cell(section, row, consumption::PRESSURE),
    ));
    if let Some(decimals) = volume {
        rules.push(Rule::new(
            format!("{label} volume"),
            RuleKind::Volume { decimals },
            vec![
                cell(section, row, consumption::PRESSURE),
                cell(section, row, consumption::RATE),
                cell(section, row, consumption::TIME),
            ],
            cell(section, row, consumption::VOLUME),
        ));
    }
}

/// The rule set of the Tec40/45 planning sheet, in declaration order.
pub fn planning_rules() -> Vec<Rule> {
    let emergency = SectionId::EmergencyReserve;
    let bottom = SectionId::BottomGas;
    let deco_stops = SectionId::DecoStops;
    let deco_gas = SectionId::DecoGas;
    let e_depth = |row| cell(emergency, row, consumption::DEPTH);

    let mut rules = Vec::new();

    rules.push(Rule::new(
        "max depth to emergency row 1",
        RuleKind::MirrorNumber,
        vec![sheet::MAX_DEPTH],
        e_depth(0),
    ));
    rules.push(Rule::new(
        "first gas switch to emergency row 3",
        RuleKind::MirrorNumber,
        vec![sheet::FIRST_GAS_SWITCH_DEPTH],
        e_depth(2),
    ));
    rules.push(Rule::new(
        "emergency row 2 midpoint",
        RuleKind::Midpoint,
        vec![sheet::MAX_DEPTH, sheet::FIRST_GAS_SWITCH_DEPTH],
        e_depth(1),
    ));
    rules.push(Rule::new(
        "emergency row 2 midpoint retry",
        RuleKind::MidpointRetry,
        vec![e_depth(0), e_depth(2)],
        e_depth(1),
    ));

    for row in 0..EMERGENCY_ROWS {
        let volume = (row + 1 < EMERGENCY_ROWS).then_some(1);
        consumption_row(&mut rules, emergency, row, volume);
    }
    let emergency_total = cell(emergency, EMERGENCY_ROWS - 1, consumption::VOLUME);
    rules.push(Rule::new(
        "emergency total per diver",
        RuleKind::Sum { decimals: 1 },
        (0..EMERGENCY_ROWS - 1)
            .map(|row| cell(emergency, row, consumption::VOLUME))
            .collect(),
        emergency_total,
    ));
    rules.push(Rule::new(
        "gas reserve for two divers",
        RuleKind::Double { decimals: 1 },
        vec![emergency_total],
        sheet::TWO_DIVER_RESERVE,
    ));

    consumption_row(&mut rules, bottom, 0, Some(2));

    for row in 0..DECO_STOP_ROWS {
        rules.push(Rule::new(
            format!("deco stop {} time", row + 1),
            RuleKind::Mirror,
            vec![cell(deco_stops, row, stops::TIME)],
            cell(deco_gas, row, consumption::TIME),
        ));
        consumption_row(&mut rules, deco_gas, row, Some(2));
    }
    rules.push(Rule::new(
        "deco gas total",
        RuleKind::Sum { decimals: 2 },
        (0..DECO_STOP_ROWS)
            .map(|row| cell(deco_gas, row, consumption::VOLUME))
            .collect(),
        cell(deco_gas, DECO_STOP_ROWS, consumption::VOLUME),
    ));

    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use tecgas_model::gas_planning_sheet;

    fn depth_rule() -> Rule {
        Rule::new(
            "pressure",
            RuleKind::Pressure,
            vec![cell(SectionId::BottomGas, 0, consumption::DEPTH)],
            cell(SectionId::BottomGas, 0, consumption::PRESSURE),
        )
    }

    #[test]
    fn pressure_clears_on_bad_depth() {
        let mut form = gas_planning_sheet();
        let rule = depth_rule();
        form.assign(rule.inputs[0], "99").unwrap();
        assert_eq!(rule.evaluate(&form).unwrap().as_deref(), Some("4.00"));
        form.assign(rule.inputs[0], "deep").unwrap();
        assert_eq!(rule.evaluate(&form).unwrap().as_deref(), Some(""));
    }

    #[test]
    fn numeric_mirror_skips_bad_input() {
        let mut form = gas_planning_sheet();
        let rule = Rule::new(
            "mirror",
            RuleKind::MirrorNumber,
            vec![sheet::MAX_DEPTH],
            cell(SectionId::EmergencyReserve, 0, consumption::DEPTH),
        );
        form.assign(sheet::MAX_DEPTH, " 120 ").unwrap();
        assert_eq!(rule.evaluate(&form).unwrap().as_deref(), Some(" 120 "));
        form.assign(sheet::MAX_DEPTH, "12a").unwrap();
        assert_eq!(rule.evaluate(&form).unwrap(), None);
        form.assign(sheet::MAX_DEPTH, "").unwrap();
        assert_eq!(rule.evaluate(&form).unwrap(), None);
    }

    #[test]
    fn retry_leaves_manual_value_alone() {
        let mut form = gas_planning_sheet();
        let rules = planning_rules();
        let retry = rules
            .iter()
            .find(|rule| rule.kind == RuleKind::MidpointRetry)
            .unwrap();
        form.assign(retry.inputs[0], "120").unwrap();
        form.assign(retry.inputs[1], "70").unwrap();
        assert_eq!(retry.evaluate(&form).unwrap().as_deref(), Some("95.0"));

        form.assign(retry.outputs[0], "80").unwrap();
        assert_eq!(retry.evaluate(&form).unwrap(), None);
    }

    #[test]
    fn every_rule_addresses_the_sheet() {
        let form = gas_planning_sheet();
        for rule in planning_rules() {
            assert_eq!(rule.outputs.len(), 1, "{}", rule.name);
            for id in rule.inputs.iter().chain(&rule.outputs) {
                assert!(form.field(*id).is_ok(), "{} -> {id}", rule.name);
            }
        }
    }
}
