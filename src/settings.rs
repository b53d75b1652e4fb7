//! # Settings Module
//!
//! ## Purpose
//! Persistent configuration of StoichLab kept in `stoichlab_config.json`: the elimination budget
//! of the balancer, the lab library to load and the log level of the binary.
//!
//! ## Configuration Format
//! ```json
//! {
//!   "max_elimination_steps": 10000,
//!   "lab_library": "my_lab.txt",
//!   "log_level": "info"
//! }
//! ```
//! Missing fields take their defaults; a missing file means default settings.
//!
//! ## Usage Pattern
//! ```rust
//! use StoichLab::settings::LabSettings;
//!
//! let settings = LabSettings::load("stoichlab_config.json").unwrap_or_default();
//! let budget = settings.budget();
//! ```
use crate::Chemistry::equation_balancer::BalanceBudget;
use crate::Chemistry::lab_repository::LabRepository;
use log::{LevelFilter, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "stoichlab_config.json";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid setting: {0}")]
    Invalid(String),
    #[error("failed to load lab library: {0}")]
    Library(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabSettings {
    /// row operations allowed to one balance
    pub max_elimination_steps: usize,
    /// lab data file; the bundled library when None
    pub lab_library: Option<String>,
    /// off, error, warn, info, debug or trace
    pub log_level: String,
}

impl Default for LabSettings {
    fn default() -> Self {
        Self {
            max_elimination_steps: BalanceBudget::default().max_steps,
            lab_library: None,
            log_level: "info".to_string(),
        }
    }
}

impl LabSettings {
    /// Loads settings from a JSON file, defaults when the file does not exist
    pub fn load(config_file: &str) -> Result<Self, SettingsError> {
        if !Path::new(config_file).exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(config_file)?;
        let settings: LabSettings = serde_json::from_str(&content)?;
        settings.validate()?;
        info!("settings loaded from '{}'", config_file);
        Ok(settings)
    }

    pub fn save(&self, config_file: &str) -> Result<(), SettingsError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_file, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.max_elimination_steps == 0 {
            return Err(SettingsError::Invalid(
                "max_elimination_steps must be positive".to_string(),
            ));
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter, SettingsError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| SettingsError::Invalid(format!("unknown log level '{}'", self.log_level)))
    }

    pub fn budget(&self) -> BalanceBudget {
        BalanceBudget {
            max_steps: self.max_elimination_steps,
        }
    }

    /// the configured lab library, or the bundled one
    pub fn repository(&self) -> Result<LabRepository, SettingsError> {
        let repository = match &self.lab_library {
            Some(path) => LabRepository::load(path),
            None => LabRepository::builtin(),
        };
        repository.map_err(SettingsError::Library)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_gives_defaults() {
        let settings = LabSettings::load("no_such_stoichlab_config.json").unwrap();
        assert_eq!(settings, LabSettings::default());
        assert_eq!(settings.budget(), BalanceBudget::default());
        assert_eq!(settings.level_filter().unwrap(), LevelFilter::Info);
    }

    #[test]
    fn test_save_and_load() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();
        let settings = LabSettings {
            max_elimination_steps: 500,
            lab_library: Some("lab.txt".to_string()),
            log_level: "debug".to_string(),
        };
        settings.save(path).unwrap();
        let loaded = LabSettings::load(path).unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(loaded.budget().max_steps, 500);
    }

    #[test]
    fn test_partial_and_invalid_files() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "{{ \"log_level\": \"warn\" }}").unwrap();
        let loaded = LabSettings::load(temp_file.path().to_str().unwrap()).unwrap();
        assert_eq!(loaded.log_level, "warn");
        assert_eq!(loaded.max_elimination_steps, 10_000);

        let mut broken = NamedTempFile::new().unwrap();
        writeln!(broken, "{{ \"log_level\": ").unwrap();
        let err = LabSettings::load(broken.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, SettingsError::Json(_)));

        let mut zero = NamedTempFile::new().unwrap();
        writeln!(zero, "{{ \"max_elimination_steps\": 0 }}").unwrap();
        let err = LabSettings::load(zero.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));

        let loud = LabSettings {
            log_level: "loud".to_string(),
            ..LabSettings::default()
        };
        assert!(loud.validate().is_err());
    }

    #[test]
    fn test_repository_selection() {
        let settings = LabSettings::default();
        assert!(settings.repository().unwrap().chemical("naoh").is_some());

        let missing = LabSettings {
            lab_library: Some("no_such_lab_library.txt".to_string()),
            ..LabSettings::default()
        };
        assert!(matches!(
            missing.repository(),
            Err(SettingsError::Library(_))
        ));
    }
}
