//! Tec40/45 gas planner - GUI Library
//!
//! This module exposes the window state and actions for testing.

pub mod actions;
pub mod app;
pub mod settings;
pub mod state;
pub mod theme;
pub mod views;
