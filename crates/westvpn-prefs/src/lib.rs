//! WestVPN Preferences
//!
//! The shell's one piece of durable state: the chosen display language,
//! stored as a small JSON file under the platform config directory.
//!
//! Loading is total: a missing, unreadable, or corrupt file (including an
//! unknown language name written by an older build) yields the defaults
//! rather than an error, so startup never fails on preference state.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use westvpn_i18n::LanguageKey;

/// Preference file name inside the app config dir
const PREFS_FILE: &str = "preferences.json";

/// App config directory name
const APP_DIR: &str = "westvpn";

/// Preference errors
#[derive(Debug, thiserror::Error)]
pub enum PrefsError {
    #[error("No config directory available on this platform")]
    NoConfigDir,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Persisted preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Preferences {
    /// Committed display language
    #[serde(rename = "chosenLanguage", default)]
    pub chosen_language: LanguageKey,
}

impl Preferences {
    /// Default on-disk location (`<config dir>/westvpn/preferences.json`)
    pub fn default_path() -> Result<PathBuf, PrefsError> {
        let base = dirs::config_dir().ok_or(PrefsError::NoConfigDir)?;
        Ok(base.join(APP_DIR).join(PREFS_FILE))
    }

    /// Load from the default location, falling back to defaults
    pub fn load() -> Self {
        match Self::default_path() {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                warn!("Preferences unavailable ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Load from a specific path, falling back to defaults
    ///
    /// Corrupt content is logged and treated as absent; the next save
    /// overwrites it.
    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No preference file at {}, using defaults", path.display());
                return Self::default();
            }
            Err(e) => {
                warn!("Failed to read {}: {}, using defaults", path.display(), e);
                return Self::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(prefs) => {
                debug!("Preferences loaded from {}", path.display());
                prefs
            }
            Err(e) => {
                warn!("Corrupt preference file {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save to the default location
    pub fn save(&self) -> Result<(), PrefsError> {
        self.save_to(&Self::default_path()?)
    }

    /// Save to a specific path, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<(), PrefsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        debug!("Preferences saved to {}", path.display());
        Ok(())
    }
}
