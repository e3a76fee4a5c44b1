//! Status line at the bottom of the window

use crate::state::{AppState, StatusKind};
use egui::{RichText, Ui};

pub struct StatusBar;

impl StatusBar {
    pub fn show(ui: &mut Ui, state: &AppState) {
        ui.horizontal(|ui| match &state.status {
            Some(status) => {
                let color = match status.kind {
                    StatusKind::Info => ui.visuals().text_color(),
                    StatusKind::Error => ui.visuals().error_fg_color,
                };
                ui.label(RichText::new(&status.message).color(color));
            }
            None => {
                let text = state.current_path.as_ref().map_or_else(
                    || "Unsaved plan".to_string(),
                    |path| path.display().to_string(),
                );
                ui.label(RichText::new(text).weak());
            }
        });
    }
}
