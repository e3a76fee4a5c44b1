//! Plan documents: section name to raw field values.
//!
//! ```text
//! {
//!     "General Info": ["120", "Tx 21/35", ...],
//!     "Deco Stops": [["70", "2"], ["60", "3"], ...]
//! }
//! ```
//!
//! Flat sections store their values in label order, tables store rows of
//! cells in header order. Values are copied verbatim in both directions.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, warn};

use tecgas_model::{FieldId, FormModel, SectionId, SectionKind};

/// Values stored for one section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionValues {
    Flat(Vec<String>),
    Table(Vec<Vec<String>>),
    /// Anything else found in a document. Never applied.
    Other(serde_json::Value),
}

impl SectionValues {
    fn is_empty(&self) -> bool {
        match self {
            Self::Flat(values) => values.is_empty(),
            Self::Table(rows) => rows.is_empty(),
            Self::Other(_) => false,
        }
    }
}

/// A saved plan. Keeps sections in the order they were written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanDocument {
    sections: Vec<(String, SectionValues)>,
}

impl PlanDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a section.
    pub fn insert(&mut self, name: impl Into<String>, values: SectionValues) {
        let name = name.into();
        match self.sections.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = values,
            None => self.sections.push((name, values)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&SectionValues> {
        self.sections
            .iter()
            .rev()
            .find(|(existing, _)| existing == name)
            .map(|(_, values)| values)
    }

    pub fn sections(&self) -> impl Iterator<Item = (&str, &SectionValues)> {
        self.sections
            .iter()
            .map(|(name, values)| (name.as_str(), values))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Serialize for PlanDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for (name, values) in &self.sections {
            map.serialize_entry(name, values)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PlanDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DocumentVisitor;

        impl<'de> Visitor<'de> for DocumentVisitor {
            type Value = PlanDocument;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object keyed by section name")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut document = PlanDocument::new();
                while let Some((name, values)) = access.next_entry::<String, SectionValues>()? {
                    document.insert(name, values);
                }
                Ok(document)
            }
        }

        deserializer.deserialize_map(DocumentVisitor)
    }
}

/// Snapshot every section of the form, in form order.
pub fn to_document(form: &FormModel) -> PlanDocument {
    let mut document = PlanDocument::new();
    for section in form.sections() {
        let values = match section.kind() {
            SectionKind::Flat(fields) => {
                SectionValues::Flat(fields.iter().map(|field| field.text().to_string()).collect())
            }
            SectionKind::Table(table) => SectionValues::Table(
                table
                    .rows()
                    .iter()
                    .map(|row| row.texts().map(str::to_string).collect())
                    .collect(),
            ),
        };
        document.insert(section.name(), values);
    }
    document
}

/// Sections touched or passed over by [`apply_document`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub applied: Vec<SectionId>,
    /// Document keys that were not applied: unknown names, empty lists and
    /// values whose shape does not match the section.
    pub skipped: Vec<String>,
}

/// Overwrite the form positionally from a document.
///
/// Values beyond the form's fields are ignored and fields beyond the
/// document's values keep their text. No recalculation happens and read-only
/// fields take the stored values as-is.
pub fn apply_document(document: &PlanDocument, form: &mut FormModel) -> LoadSummary {
    let mut summary = LoadSummary::default();

    for (name, values) in document.sections() {
        let Some(id) = SectionId::from_name(name) else {
            warn!(section = name, "ignoring unknown section");
            summary.skipped.push(name.to_string());
            continue;
        };
        if values.is_empty() {
            debug!(section = name, "skipping empty section");
            summary.skipped.push(name.to_string());
            continue;
        }

        let Ok(section) = form.section(id) else {
            summary.skipped.push(name.to_string());
            continue;
        };
        let targets: Vec<(FieldId, &str)> = match (section.kind(), values) {
            (SectionKind::Flat(fields), SectionValues::Flat(values)) => fields
                .iter()
                .zip(values)
                .enumerate()
                .map(|(index, (_, value))| (FieldId::flat(id, index), value.as_str()))
                .collect(),
            (SectionKind::Table(table), SectionValues::Table(rows)) => table
                .rows()
                .iter()
                .zip(rows)
                .enumerate()
                .flat_map(|(row, (fields, cells))| {
                    fields
                        .fields()
                        .iter()
                        .zip(cells)
                        .enumerate()
                        .map(move |(column, (_, value))| {
                            (FieldId::cell(id, row, column), value.as_str())
                        })
                })
                .collect(),
            _ => {
                warn!(section = name, "ignoring section with unexpected shape");
                summary.skipped.push(name.to_string());
                continue;
            }
        };

        for (field, value) in targets {
            if let Err(error) = form.assign(field, value) {
                warn!(%field, %error, "could not restore field");
            }
        }
        summary.applied.push(id);
    }

    summary
}
