#![deny(unsafe_code)]

use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Sections of the planning sheet, in declared display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionId {
    GeneralInfo,
    GasReserve,
    EmergencyReserve,
    BottomGas,
    DecoStops,
    DecoGas,
}

impl SectionId {
    /// Get all sections in declared order.
    pub const fn all() -> &'static [SectionId] {
        &[
            Self::GeneralInfo,
            Self::GasReserve,
            Self::EmergencyReserve,
            Self::BottomGas,
            Self::DecoStops,
            Self::DecoGas,
        ]
    }

    /// The section name as shown on the sheet and used as the document key.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::GeneralInfo => "General Info",
            Self::GasReserve => "Gas Reserve / Rock Bottom",
            Self::EmergencyReserve => "Gas Reserve (Emergency)",
            Self::BottomGas => "Bottom Gas Requirements",
            Self::DecoStops => "Deco Stops",
            Self::DecoGas => "Deco Gas Requirements",
        }
    }

    /// Look up a section by its sheet name, ignoring ASCII case and surrounding whitespace.
    pub fn from_name(name: &str) -> Option<SectionId> {
        let name = name.trim();
        Self::all()
            .iter()
            .copied()
            .find(|id| id.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SectionId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ModelError::UnknownSection(s.to_string()))
    }
}

/// Position of a single field on the sheet.
///
/// `row` is `None` for flat sections and a 0-based row index for tables;
/// `column` is the label index (flat) or column index (table).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldId {
    pub section: SectionId,
    pub row: Option<usize>,
    pub column: usize,
}

impl FieldId {
    pub const fn flat(section: SectionId, index: usize) -> Self {
        Self {
            section,
            row: None,
            column: index,
        }
    }

    pub const fn cell(section: SectionId, row: usize, column: usize) -> Self {
        Self {
            section,
            row: Some(row),
            column,
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.row {
            Some(row) => write!(f, "{}[{},{}]", self.section, row, self.column),
            None => write!(f, "{}[{}]", self.section, self.column),
        }
    }
}

/// Human-typed field address.
///
/// Flat fields are written `Section/Label`; table cells `Section/Row/Column`
/// with a 1-based row number, e.g. `Deco Stops/1/Time`. Section names may
/// themselves contain `/`, so the section is matched as a known prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    pub section: SectionId,
    pub row: Option<usize>,
    pub column: String,
}

impl FromStr for FieldPath {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ModelError::InvalidFieldPath(s.to_string());
        let trimmed = s.trim();

        // Longest name first so "Gas Reserve (Emergency)" is not shadowed by a shorter prefix.
        let mut sections: Vec<SectionId> = SectionId::all().to_vec();
        sections.sort_by_key(|id| std::cmp::Reverse(id.name().len()));
        let (section, rest) = sections
            .into_iter()
            .find_map(|id| {
                let name = id.name();
                let head = trimmed.get(..name.len())?;
                if !head.eq_ignore_ascii_case(name) {
                    return None;
                }
                trimmed[name.len()..].strip_prefix('/').map(|rest| (id, rest))
            })
            .ok_or_else(invalid)?;

        let rest = rest.trim();
        if rest.is_empty() {
            return Err(invalid());
        }

        if let Some((row, column)) = rest.split_once('/') {
            if let Ok(row) = row.trim().parse::<usize>() {
                let column = column.trim();
                if row == 0 || column.is_empty() {
                    return Err(invalid());
                }
                return Ok(Self {
                    section,
                    row: Some(row),
                    column: column.to_string(),
                });
            }
        }

        Ok(Self {
            section,
            row: None,
            column: rest.to_string(),
        })
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.row {
            Some(row) => write!(f, "{}/{}/{}", self.section, row, self.column),
            None => write!(f, "{}/{}", self.section, self.column),
        }
    }
}
