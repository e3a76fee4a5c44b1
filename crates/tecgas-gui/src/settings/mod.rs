//! User-configurable settings for the gas planner window.
//!
//! - General preferences (dark mode)
//! - Export defaults (page size, margin, font size)
//! - Last used directory and recently opened plans

mod persistence;

pub use persistence::{
    load_settings, load_settings_from, save_settings, save_settings_to, settings_path,
};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tecgas_report::{ExportOptions, PageSize};

/// Number of recent plans kept in the settings file.
pub const MAX_RECENT_PLANS: usize = 10;

/// Application settings (persisted to disk as TOML).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory the file dialogs open in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_directory: Option<PathBuf>,
    /// Most recent first.
    pub recent_plans: Vec<PathBuf>,
    pub general: GeneralSettings,
    pub export: ExportSettings,
}

impl Settings {
    /// Move `path` to the front of the recent list and remember its directory.
    pub fn remember_plan(&mut self, path: &Path) {
        self.recent_plans.retain(|recent| recent != path);
        self.recent_plans.insert(0, path.to_path_buf());
        self.recent_plans.truncate(MAX_RECENT_PLANS);
        self.remember_directory(path);
    }

    pub fn remember_directory(&mut self, path: &Path) {
        if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            self.last_directory = Some(parent.to_path_buf());
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable dark mode theme.
    pub dark_mode: bool,
}

/// Defaults applied to every export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub page_size: PageSizeSetting,
    pub margin_pt: f64,
    pub font_size_pt: f64,
}

impl Default for ExportSettings {
    fn default() -> Self {
        let options = ExportOptions::default();
        Self {
            page_size: PageSizeSetting::default(),
            margin_pt: options.margin_pt,
            font_size_pt: options.font_size_pt,
        }
    }
}

impl ExportSettings {
    /// Export options for these defaults, without title or timestamp.
    pub fn options(&self) -> ExportOptions {
        ExportOptions {
            page_size: self.page_size.into(),
            margin_pt: self.margin_pt,
            font_size_pt: self.font_size_pt,
            ..ExportOptions::default()
        }
    }
}

/// Serializable wrapper for the export page size.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub enum PageSizeSetting {
    #[default]
    #[serde(rename = "letter")]
    Letter,
    #[serde(rename = "a4")]
    A4,
}

impl PageSizeSetting {
    pub const fn all() -> &'static [PageSizeSetting] {
        &[Self::Letter, Self::A4]
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Letter => "Letter",
            Self::A4 => "A4",
        }
    }
}

impl From<PageSizeSetting> for PageSize {
    fn from(setting: PageSizeSetting) -> Self {
        match setting {
            PageSizeSetting::Letter => Self::Letter,
            PageSizeSetting::A4 => Self::A4,
        }
    }
}
