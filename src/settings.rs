//! Runner settings
//!
//! Persisted as JSON next to the best score. Any field missing from the file
//! takes its default, and command-line flags override whatever was loaded.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::persistence::PersistError;

/// Headless runner settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed of the first run; None derives one from the clock
    pub seed: Option<u64>,
    /// Ticks per run before it is cut off
    pub ticks: u64,
    /// Let the autopilot pick intents
    pub autopilot: bool,
    /// Best-score file
    pub best_score_path: PathBuf,
    /// Extra runs to play after the first one ends
    pub restarts: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            // Five minutes at 60 Hz
            ticks: 5 * 60 * 60,
            autopilot: true,
            best_score_path: PathBuf::from("ledge_runner_best.json"),
            restarts: 0,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self, PersistError> {
        match fs::read_to_string(path) {
            Ok(json) => {
                let settings = serde_json::from_str(&json).map_err(|err| PersistError::json(path, err))?;
                log::info!("Loaded settings from {}", path.display());
                Ok(settings)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
            Err(err) => Err(PersistError::io(path, err)),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), PersistError> {
        let json = serde_json::to_string_pretty(self).map_err(|err| PersistError::json(path, err))?;
        fs::write(path, json).map_err(|err| PersistError::io(path, err))?;
        log::info!("Settings saved");
        Ok(())
    }

    /// Total number of runs to play
    pub fn runs(&self) -> u32 {
        self.restarts.saturating_add(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("settings.json")).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.runs(), 1);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"seed": 42, "restarts": 2}"#).unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.runs(), 3);
        assert_eq!(settings.ticks, Settings::default().ticks);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            seed: Some(7),
            ticks: 600,
            autopilot: false,
            best_score_path: dir.path().join("best.json"),
            restarts: 1,
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), settings);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ seed: ").unwrap();
        assert!(matches!(Settings::load(&path), Err(PersistError::Json { .. })));
    }
}
