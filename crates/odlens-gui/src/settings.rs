//! Settings types and persistence for the OD-Lens GUI.
//!
//! Settings are stored as TOML in the platform-specific application data
//! folder:
//! - macOS: ~/Library/Application Support/com.odlens.OD-Lens/
//! - Windows: %APPDATA%/odlens/config/
//! - Linux: ~/.config/odlens/
//!
//! Only preferences live here; calculation values are never persisted.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "odlens";
const APP_NAME: &str = "OD-Lens";
const CONFIG_FILENAME: &str = "settings.toml";

/// Application settings (persisted to disk as TOML).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
}

/// General application preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable dark mode theme.
    pub dark_mode: bool,
}

/// Get the path to the settings file.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Load settings from disk.
///
/// Returns default settings if the file is missing, unreadable, or does not
/// parse.
pub fn load_settings() -> Settings {
    let Some(path) = settings_path() else {
        tracing::warn!("could not determine settings path, using defaults");
        return Settings::default();
    };

    match fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                tracing::info!("loaded settings from {:?}", path);
                settings
            }
            Err(error) => {
                tracing::warn!("failed to parse settings file: {error}, using defaults");
                Settings::default()
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!("no settings file found at {:?}, using defaults", path);
            Settings::default()
        }
        Err(error) => {
            tracing::warn!("failed to read settings file: {error}, using defaults");
            Settings::default()
        }
    }
}

/// Save settings to disk.
///
/// Creates the parent directory if it doesn't exist.
///
/// # Errors
///
/// Returns a description of the failing step when the settings cannot be
/// written.
pub fn save_settings(settings: &Settings) -> Result<(), String> {
    let Some(path) = settings_path() else {
        return Err("could not determine settings path".to_string());
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|error| format!("failed to create config directory: {error}"))?;
    }

    let content = toml::to_string_pretty(settings)
        .map_err(|error| format!("failed to serialize settings: {error}"))?;

    fs::write(&path, content).map_err(|error| format!("failed to write settings file: {error}"))?;

    tracing::info!("saved settings to {:?}", path);
    Ok(())
}
