//! Toolbar actions: Save, Load, Clear All and Export.
//!
//! Each dialog-driven action has a path-taking counterpart that does the
//! work. A cancelled dialog returns before touching any state.

use crate::settings::save_settings;
use crate::state::AppState;
use chrono::Local;
use std::path::{Path, PathBuf};
use tecgas_persistence::{PersistenceError, load_plan, save_plan};
use tecgas_report::export_plan;

const PLAN_EXTENSION: &str = "json";
const EXPORT_EXTENSIONS: &[&str] = &["xhtml", "html"];

pub fn save(state: &mut AppState) {
    let Some(path) = file_dialog(state, "Gas plan", &[PLAN_EXTENSION])
        .set_file_name(suggested_name(state, PLAN_EXTENSION))
        .save_file()
    else {
        return;
    };
    if save_to(state, &path) {
        store_settings(state);
    }
}

pub fn load(state: &mut AppState) {
    let Some(path) = file_dialog(state, "Gas plan", &[PLAN_EXTENSION]).pick_file() else {
        return;
    };
    open_recent(state, &path);
}

/// Load a plan picked from the recent list.
pub fn open_recent(state: &mut AppState, path: &Path) {
    if load_from(state, path) {
        store_settings(state);
    }
}

pub fn export(state: &mut AppState) {
    let Some(path) = file_dialog(state, "XHTML document", EXPORT_EXTENSIONS)
        .set_file_name(suggested_name(state, EXPORT_EXTENSIONS[0]))
        .save_file()
    else {
        return;
    };
    if export_to(state, &path) {
        state.settings.remember_directory(&path);
        store_settings(state);
    }
}

pub fn clear_all(state: &mut AppState) {
    state.plan.clear_all();
    state.set_info("Cleared all fields");
}

/// Save the plan to `path`. Returns `true` on success.
pub fn save_to(state: &mut AppState, path: &Path) -> bool {
    match save_plan(state.plan.form(), path) {
        Ok(()) => {
            state.open_path(path);
            state.set_info(format!("Saved {}", path.display()));
            true
        }
        Err(error) => {
            tracing::error!("Failed to save plan: {}", error);
            state.set_error(persistence_message(&error));
            false
        }
    }
}

/// Load `path` into the current sheet. Sections the file does not mention
/// keep their values. Returns `true` on success.
pub fn load_from(state: &mut AppState, path: &Path) -> bool {
    match load_plan(path, state.plan.form_mut()) {
        Ok(summary) => {
            state.open_path(path);
            let mut message = format!(
                "Loaded {} ({} sections)",
                path.display(),
                summary.applied.len()
            );
            if !summary.skipped.is_empty() {
                message.push_str(&format!(", skipped: {}", summary.skipped.join(", ")));
            }
            state.set_info(message);
            true
        }
        Err(error) => {
            tracing::error!("Failed to load plan: {}", error);
            state.set_error(persistence_message(&error));
            false
        }
    }
}

/// Export the sheet to `path` with the configured page settings.
pub fn export_to(state: &mut AppState, path: &Path) -> bool {
    let options = state
        .settings
        .export
        .options()
        .with_title(state.plan_title())
        .with_timestamp(Local::now().naive_local());
    match export_plan(state.plan.form(), &options, path) {
        Ok(()) => {
            state.set_info(format!("Exported {}", path.display()));
            true
        }
        Err(error) => {
            tracing::error!("Failed to export plan: {}", error);
            state.set_error(format!("Export failed: {error}"));
            false
        }
    }
}

pub fn store_settings(state: &AppState) {
    if let Err(e) = save_settings(&state.settings) {
        tracing::error!("Failed to save settings: {:#}", e);
    }
}

fn file_dialog(state: &AppState, filter: &str, extensions: &[&str]) -> rfd::FileDialog {
    let dialog = rfd::FileDialog::new().add_filter(filter, extensions);
    match state.dialog_directory() {
        Some(dir) => dialog.set_directory(dir),
        None => dialog,
    }
}

fn suggested_name(state: &AppState, extension: &str) -> String {
    let stem = state
        .current_path
        .as_deref()
        .and_then(Path::file_stem)
        .map_or_else(|| PathBuf::from("gas_plan"), PathBuf::from);
    stem.with_extension(extension).to_string_lossy().into_owned()
}

fn persistence_message(error: &PersistenceError) -> String {
    match error.suggestion() {
        Some(hint) => format!("{} {hint}", error.user_message()),
        None => error.user_message(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::state::StatusKind;
    use tecgas_core::GasPlan;
    use tempfile::tempdir;

    fn state() -> AppState {
        AppState::new(GasPlan::new().unwrap(), Settings::default())
    }

    #[test]
    fn save_then_load_restores_plan() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cave.json");

        let mut saved = state();
        saved.plan.edit_path("General Info/Max Depth", "120").unwrap();
        saved.plan.edit_path("Deco Stops/1/Time", "10").unwrap();
        assert!(save_to(&mut saved, &path));
        assert_eq!(saved.current_path.as_deref(), Some(path.as_path()));
        assert_eq!(saved.settings.recent_plans, vec![path.clone()]);

        let mut loaded = state();
        assert!(load_from(&mut loaded, &path));
        assert_eq!(loaded.plan.form(), saved.plan.form());
        assert_eq!(loaded.plan_title(), "cave");
        let status = loaded.status.unwrap();
        assert_eq!(status.kind, StatusKind::Info);
        assert!(status.message.contains("6 sections"), "{}", status.message);
    }

    #[test]
    fn failed_load_keeps_sheet_and_reports_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let mut state = state();
        state.plan.edit_path("General Info/Max Depth", "100").unwrap();
        let before = state.plan.form().clone();

        assert!(!load_from(&mut state, &path));
        assert_eq!(state.plan.form(), &before);
        assert_eq!(state.current_path, None);
        assert!(state.settings.recent_plans.is_empty());
        assert_eq!(state.status.unwrap().kind, StatusKind::Error);
    }

    #[test]
    fn export_writes_titled_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cave.xhtml");

        let mut state = state();
        state.current_path = Some(dir.path().join("cave.json"));
        state.plan.edit_path("General Info/Max Depth", "120").unwrap();
        assert!(export_to(&mut state, &path));

        let markup = std::fs::read_to_string(&path).unwrap();
        assert!(markup.contains("<h1>cave</h1>"));
        assert!(markup.contains("4.64"));
    }

    #[test]
    fn clear_all_resets_sheet() {
        let mut state = state();
        state.plan.edit_path("General Info/Max Depth", "120").unwrap();
        clear_all(&mut state);
        assert_eq!(state.plan.form(), GasPlan::new().unwrap().form());
        assert_eq!(state.status.unwrap().message, "Cleared all fields");
    }

    #[test]
    fn suggested_names_follow_current_plan() {
        let mut state = state();
        assert_eq!(suggested_name(&state, "json"), "gas_plan.json");
        state.current_path = Some(PathBuf::from("/dives/cave.json"));
        assert_eq!(suggested_name(&state, "xhtml"), "cave.xhtml");
        assert_eq!(state.dialog_directory(), Some(Path::new("/dives")));
    }
}
