//! Application-level state

use crate::settings::Settings;
use std::path::{Path, PathBuf};
use tecgas_core::GasPlan;

/// Top-level application state
pub struct AppState {
    /// The sheet being edited, with its recalculation engine
    pub plan: GasPlan,
    /// User preferences
    pub settings: Settings,
    /// File the plan was last saved to or loaded from
    pub current_path: Option<PathBuf>,
    /// Message shown in the status bar
    pub status: Option<Status>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub message: String,
}

impl AppState {
    pub fn new(plan: GasPlan, settings: Settings) -> Self {
        Self {
            plan,
            settings,
            current_path: None,
            status: None,
        }
    }

    pub fn set_info(&mut self, message: impl Into<String>) {
        self.status = Some(Status {
            kind: StatusKind::Info,
            message: message.into(),
        });
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status = Some(Status {
            kind: StatusKind::Error,
            message: message.into(),
        });
    }

    /// Directory file dialogs should start in.
    pub fn dialog_directory(&self) -> Option<&Path> {
        self.current_path
            .as_deref()
            .and_then(Path::parent)
            .filter(|dir| !dir.as_os_str().is_empty())
            .or(self.settings.last_directory.as_deref())
    }

    /// Record `path` as the open plan.
    pub fn open_path(&mut self, path: &Path) {
        self.current_path = Some(path.to_path_buf());
        self.settings.remember_plan(path);
    }

    /// Title used for exports: the plan's file stem, or a generic name.
    pub fn plan_title(&self) -> String {
        self.current_path
            .as_deref()
            .and_then(Path::file_stem)
            .and_then(|stem| stem.to_str())
            .map_or_else(|| "Gas Plan".to_string(), str::to_string)
    }
}
