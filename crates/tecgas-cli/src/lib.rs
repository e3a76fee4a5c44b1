//! CLI library components for the gas planner.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
