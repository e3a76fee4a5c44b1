//! Tec40/45 gas planner - Desktop GUI Application
//!
//! A single window holding the gas planning sheet, with Save, Load,
//! Clear All and Export actions.

use anyhow::anyhow;
use eframe::egui;
use tecgas_core::GasPlan;
use tecgas_gui::app::GasPlannerApp;
use tecgas_gui::settings::load_settings;
use tecgas_gui::state::AppState;

const APP_NAME: &str = "Tec Gas Planner";

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let state = AppState::new(GasPlan::new()?, load_settings());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_NAME)
            .with_inner_size([900.0, 860.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(|cc| Ok(Box::new(GasPlannerApp::new(cc, state)))),
    )
    .map_err(|error| anyhow!("{error}"))
}
