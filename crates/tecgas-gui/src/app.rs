//! Main application struct and eframe::App implementation

use crate::actions;
use crate::settings::PageSizeSetting;
use crate::state::AppState;
use crate::theme::{self, spacing};
use crate::views::{FormView, StatusBar};
use eframe::egui;
use std::path::PathBuf;

/// Main application struct
pub struct GasPlannerApp {
    state: AppState,
}

impl GasPlannerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        tracing::info!(
            "Starting with settings: dark_mode={}",
            state.settings.general.dark_mode
        );
        theme::apply(&cc.egui_ctx, state.settings.general.dark_mode);
        Self { state }
    }
}

impl eframe::App for GasPlannerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(spacing::XS);
            self.show_toolbar(ui);
            ui.add_space(spacing::XS);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            StatusBar::show(ui, &self.state);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both()
                .auto_shrink([false, false])
                .show(ui, |ui| FormView::show(ui, &mut self.state));
        });
    }
}

impl GasPlannerApp {
    fn show_toolbar(&mut self, ui: &mut egui::Ui) {
        let mut recent_to_open: Option<PathBuf> = None;

        ui.horizontal(|ui| {
            if ui.button("Save").clicked() {
                actions::save(&mut self.state);
            }
            if ui.button("Load").clicked() {
                actions::load(&mut self.state);
            }
            let recent = self.state.settings.recent_plans.clone();
            ui.add_enabled_ui(!recent.is_empty(), |ui| {
                ui.menu_button("Recent", |ui| {
                    for path in recent {
                        if ui.button(path.display().to_string()).clicked() {
                            recent_to_open = Some(path);
                            ui.close();
                        }
                    }
                });
            });
            if ui.button("Clear All").clicked() {
                actions::clear_all(&mut self.state);
            }
            if ui.button("Export").clicked() {
                actions::export(&mut self.state);
            }

            ui.add_space(spacing::SM);
            ui.separator();
            self.show_preferences(ui);
        });

        if let Some(path) = recent_to_open {
            actions::open_recent(&mut self.state, &path);
        }
    }

    /// Page size and dark mode, saved as soon as they change.
    fn show_preferences(&mut self, ui: &mut egui::Ui) {
        let mut changed = false;

        let mut page_size = self.state.settings.export.page_size;
        egui::ComboBox::from_id_salt("page_size")
            .selected_text(page_size.display_name())
            .show_ui(ui, |ui| {
                for option in PageSizeSetting::all() {
                    ui.selectable_value(&mut page_size, *option, option.display_name());
                }
            });
        if page_size != self.state.settings.export.page_size {
            self.state.settings.export.page_size = page_size;
            changed = true;
        }

        let mut dark_mode = self.state.settings.general.dark_mode;
        if ui.checkbox(&mut dark_mode, "Dark mode").changed() {
            self.state.settings.general.dark_mode = dark_mode;
            theme::apply(ui.ctx(), dark_mode);
            changed = true;
        }

        if changed {
            actions::store_settings(&self.state);
        }
    }
}
