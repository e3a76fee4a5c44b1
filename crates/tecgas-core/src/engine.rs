use std::collections::HashSet;

use tracing::debug;

use tecgas_model::{FieldId, FormModel};

use crate::dep_graph::DepGraph;
use crate::error::Result;
use crate::rules::{Rule, planning_rules};

/// Fields touched by one edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditReport {
    pub edited: FieldId,
    /// Fields whose text changed, the edited field first, then derived
    /// fields in evaluation order.
    pub changed: Vec<FieldId>,
}

impl EditReport {
    pub fn is_unchanged(&self) -> bool {
        self.changed.is_empty()
    }
}

/// Evaluates derivation rules against a form after each edit.
#[derive(Debug, Clone)]
pub struct Recalculator {
    rules: Vec<Rule>,
    graph: DepGraph,
}

impl Recalculator {
    pub fn new(rules: Vec<Rule>) -> Result<Self> {
        let graph = DepGraph::build(&rules)?;
        Ok(Self { rules, graph })
    }

    pub fn for_planning_sheet() -> Result<Self> {
        Self::new(planning_rules())
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn graph(&self) -> &DepGraph {
        &self.graph
    }

    /// Apply a user edit and recompute everything downstream of it.
    pub fn edit(&self, form: &mut FormModel, id: FieldId, text: &str) -> Result<EditReport> {
        let edited = form.set(id, text)?;
        let mut report = self.recompute_from(form, id)?;
        if edited {
            report.changed.insert(0, id);
        }
        Ok(report)
    }

    /// Evaluate the rules reachable from `id` in topological order. A rule
    /// runs only when one of its inputs is `id` or changed earlier in the pass.
    pub fn recompute_from(&self, form: &mut FormModel, id: FieldId) -> Result<EditReport> {
        let mut dirty: HashSet<FieldId> = HashSet::from([id]);
        let mut changed = Vec::new();
        for index in self.graph.affected(id) {
            let rule = &self.rules[index];
            if !rule.inputs.iter().any(|input| dirty.contains(input)) {
                debug!(rule = %rule.name, "inputs unchanged");
                continue;
            }
            let Some(value) = rule.evaluate(form)? else {
                debug!(rule = %rule.name, "skipped");
                continue;
            };
            for output in &rule.outputs {
                if form.assign(*output, &value)? {
                    debug!(rule = %rule.name, field = %output, value = %value, "recalculated");
                    dirty.insert(*output);
                    changed.push(*output);
                }
            }
        }
        Ok(EditReport { edited: id, changed })
    }
}
