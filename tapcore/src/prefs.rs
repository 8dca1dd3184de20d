//! Preference storage.
//!
//! Settings persist as one JSON file under the platform config directory.
//! Calculation history is deliberately not stored — only settings. A
//! missing or unreadable file must never stop the app from starting;
//! callers fall back to [`Prefs::default`] and log the failure.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrefsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PrefsError>;

/// User-adjustable settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Prefs {
    /// Multiplier applied to font sizes and key heights.
    pub font_scale: f32,
    /// How many calculations the history pane keeps.
    pub history_limit: usize,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            font_scale: 1.0,
            history_limit: crate::history::DEFAULT_LIMIT,
        }
    }
}

impl Prefs {
    pub fn load() -> Result<Self> {
        Self::load_from(&prefs_path())
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&prefs_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Location of the preferences file.
pub fn prefs_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "tapcalc")
        .map(|dirs| dirs.config_dir().join("prefs.json"))
        .unwrap_or_else(|| PathBuf::from("tapcalc-prefs.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prefs = Prefs::default();
        assert_eq!(prefs.font_scale, 1.0);
        assert_eq!(prefs.history_limit, 100);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let prefs: Prefs = serde_json::from_str("{}").unwrap();
        assert_eq!(prefs, Prefs::default());

        let prefs: Prefs = serde_json::from_str(r#"{"font_scale": 1.5}"#).unwrap();
        assert_eq!(prefs.font_scale, 1.5);
        assert_eq!(prefs.history_limit, 100);
    }

    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir().join(format!("tapcalc-prefs-test-{}.json", std::process::id()));
        let prefs = Prefs {
            font_scale: 1.25,
            history_limit: 25,
        };

        prefs.save_to(&path).unwrap();
        assert_eq!(Prefs::load_from(&path).unwrap(), prefs);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = Prefs::load_from(Path::new("/nonexistent/tapcalc/prefs.json")).unwrap_err();
        assert!(matches!(err, PrefsError::Io(_)));
    }
}
