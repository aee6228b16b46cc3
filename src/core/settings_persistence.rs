//! Settings persistence
//!
//! Saves and loads [`Settings`] to/from a JSON file.
//!
//! # File Location
//!
//! `settings.json` in the user's configuration directory (resolved with [`ProjectDirs`]), or in the working directory
//! when the platform has none.
//!
//! # Error Handling
//!
//! - Load failures fall back to default settings with a warning
//! - Save failures are returned to the caller

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{info, warn};

use super::error::CoreResult;
use super::settings::Settings;

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Resolve the settings file path
///
/// E.g. `~/.config/archess/settings.json` on Linux. Falls back to a local `settings.json` if the system config
/// dir cannot be found.
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "trilltino", "archess") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Load from [`settings_path`]
pub fn load_settings() -> Settings {
    load_settings_from(&settings_path())
}

/// Load from `path`, using defaults when the file is missing or unreadable
pub fn load_settings_from(path: &Path) -> Settings {
    if !path.exists() {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        return Settings::default();
    }

    match fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str::<Settings>(&contents) {
            Ok(settings) => {
                info!("[SETTINGS] Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!(
                    "[SETTINGS] Failed to parse settings file at {:?}: {}. Using defaults.",
                    path, e
                );
                Settings::default()
            }
        },
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to read settings file at {:?}: {}. Using defaults.",
                path, e
            );
            Settings::default()
        }
    }
}

/// Save to [`settings_path`], returning where the file went
pub fn save_settings(settings: &Settings) -> CoreResult<PathBuf> {
    let path = settings_path();
    save_settings_to(settings, &path)?;
    Ok(path)
}

/// Save to `path`, creating parent directories as needed
pub fn save_settings_to(settings: &Settings, path: &Path) -> CoreResult<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}
