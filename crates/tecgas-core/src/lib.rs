//! Recalculation engine for the Tec40/45 gas planning sheet.

pub mod dep_graph;
pub mod engine;
pub mod error;
pub mod formulas;
pub mod plan;
pub mod rules;

pub use dep_graph::DepGraph;
pub use engine::{EditReport, Recalculator};
pub use error::{CoreError, Result};
pub use plan::GasPlan;
pub use rules::{Rule, RuleKind, planning_rules};
