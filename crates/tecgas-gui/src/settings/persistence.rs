//! Settings persistence - load and save settings to disk.
//!
//! Settings are stored in the platform-specific config folder:
//! - macOS: ~/Library/Application Support/com.tecgas.Tec Gas Planner/
//! - Windows: %APPDATA%/tecgas/Tec Gas Planner/config/
//! - Linux: ~/.config/tecgasplanner/

use super::Settings;
use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "tecgas";
const APP_NAME: &str = "Tec Gas Planner";
const CONFIG_FILENAME: &str = "settings.toml";

/// Get the path to the settings file.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Load settings from the platform config folder, or defaults.
pub fn load_settings() -> Settings {
    let Some(path) = settings_path() else {
        tracing::warn!("Could not determine settings path, using defaults");
        return Settings::default();
    };
    load_settings_from(&path)
}

/// Load settings from `path`.
///
/// A missing or unparsable file yields default settings.
pub fn load_settings_from(path: &Path) -> Settings {
    match fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                tracing::warn!("Failed to parse settings file: {}, using defaults", e);
                Settings::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!("No settings file found at {:?}, using defaults", path);
            Settings::default()
        }
        Err(e) => {
            tracing::warn!("Failed to read settings file: {}, using defaults", e);
            Settings::default()
        }
    }
}

/// Save settings to the platform config folder.
pub fn save_settings(settings: &Settings) -> Result<PathBuf> {
    let path = settings_path().ok_or_else(|| anyhow!("Could not determine settings path"))?;
    save_settings_to(settings, &path)?;
    Ok(path)
}

/// Save settings to `path`, creating the parent directory if needed.
pub fn save_settings_to(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    let content = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
    fs::write(path, content).context("Failed to write settings file")?;

    tracing::info!("Saved settings to {:?}", path);
    Ok(())
}
