use tecgas_model::{FieldId, FieldPath, FormModel, gas_planning_sheet};

use crate::engine::{EditReport, Recalculator};
use crate::error::Result;

/// A planning sheet together with the engine that keeps it consistent.
#[derive(Debug, Clone)]
pub struct GasPlan {
    form: FormModel,
    engine: Recalculator,
}

impl GasPlan {
    /// A fresh sheet at its defaults.
    pub fn new() -> Result<Self> {
        Self::from_form(gas_planning_sheet())
    }

    /// Wrap an existing form, checking that every rule addresses a field on it.
    pub fn from_form(form: FormModel) -> Result<Self> {
        let engine = Recalculator::for_planning_sheet()?;
        for rule in engine.rules() {
            for id in rule.inputs.iter().chain(&rule.outputs) {
                form.field(*id)?;
            }
        }
        Ok(Self { form, engine })
    }

    pub fn edit(&mut self, id: FieldId, text: &str) -> Result<EditReport> {
        self.engine.edit(&mut self.form, id, text)
    }

    /// Edit a field addressed as `Section/Label` or `Section/Row/Column`.
    pub fn edit_path(&mut self, path: &str, text: &str) -> Result<EditReport> {
        let path: FieldPath = path.parse()?;
        let id = self.form.resolve(&path)?;
        self.edit(id, text)
    }

    pub fn clear_all(&mut self) {
        self.form.clear_all();
    }

    pub fn form(&self) -> &FormModel {
        &self.form
    }

    /// Direct access for bulk writes such as loading a document. No rules run.
    pub fn form_mut(&mut self) -> &mut FormModel {
        &mut self.form
    }
}
