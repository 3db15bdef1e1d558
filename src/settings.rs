//! User settings, stored as JSON in the platform config directory.
//!
//! Every field has a default, so a partial or outdated settings file still
//! loads. A malformed file is reported and ignored rather than fatal.

use crate::constants::{
    DEFAULT_PEN_COLOR, DEFAULT_PEN_SIZE, DEFAULT_SURFACE_SIZE, FIT_PADDING, SYNC_DEBOUNCE_MS,
};
use crate::types::Size;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const APP_DIR: &str = "ideaboard";
const SETTINGS_FILE: &str = "settings.json";

/// `<config_dir>/ideaboard/settings.json`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
}

/// `<data_dir>/ideaboard`, where the board snapshot lives by default
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR))
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding the board snapshot; platform data dir when unset
    pub storage_dir: Option<PathBuf>,
    pub sync_debounce_ms: u64,
    /// Surface size assumed by fit/focus when no window reports one
    pub surface_width: f64,
    pub surface_height: f64,
    pub pen_color: String,
    pub pen_size: f64,
    pub fit_padding: f64,
    /// `tracing` filter directive, e.g. `ideaboard=debug`
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_dir: None,
            sync_debounce_ms: SYNC_DEBOUNCE_MS,
            surface_width: DEFAULT_SURFACE_SIZE.0,
            surface_height: DEFAULT_SURFACE_SIZE.1,
            pen_color: DEFAULT_PEN_COLOR.to_string(),
            pen_size: DEFAULT_PEN_SIZE,
            fit_padding: FIT_PADDING,
            log_filter: "ideaboard=info".to_string(),
        }
    }
}

impl Settings {
    /// Load from the default location, falling back to defaults
    pub fn load() -> Self {
        match default_settings_path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::warn!("No config directory on this platform, using default settings");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                tracing::warn!("Failed to read settings from {}: {}", path.display(), e);
                return Self::default();
            }
        };
        match serde_json::from_str(&contents) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Malformed settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Persist to the default location. Failures are logged, not returned.
    pub fn save(&self) {
        let Some(path) = default_settings_path() else {
            return;
        };
        if let Err(e) = self.save_to(&path) {
            tracing::error!("Failed to save settings: {}", e);
        }
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn surface_size(&self) -> Size {
        Size::new(self.surface_width, self.surface_height)
    }

    pub fn sync_debounce(&self) -> Duration {
        Duration::from_millis(self.sync_debounce_ms)
    }

    /// Resolved snapshot directory
    pub fn storage_dir(&self) -> Option<PathBuf> {
        self.storage_dir.clone().or_else(default_data_dir)
    }
}
