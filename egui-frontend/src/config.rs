//! # Configuration
//!
//! Optional, read-only YAML configuration for the manual window and the
//! calculator widget ranges.
//!
//! ## Lookup Order
//! 1. `INVESTOR_MANUAL_CONFIG` environment variable (path to a YAML file)
//! 2. `manual_config.yaml` in the platform config directory
//! 3. Built-in defaults
//!
//! A missing file falls back to the defaults. A file that exists but cannot be
//! read or parsed, or that describes unusable ranges, is an error.
//!
//! ## YAML Format
//!
//! ```yaml
//! window:
//!   title: "The Sovereign Investor Manual"
//!   inner_size: [1280.0, 820.0]
//!   min_inner_size: [900.0, 600.0]
//! calculator:
//!   principal: { min: 0.0, default: 1000.0, step: 100.0 }
//!   annual_rate_percent: { min: 1.0, max: 20.0, default: 8.0, step: 1.0 }
//!   years: { min: 1.0, max: 50.0, default: 25.0, step: 1.0 }
//! ```
//!
//! The file is never written: user inputs are not persisted.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};
use shared::{InputRanges, RangeError};
use thiserror::Error;

/// Environment variable pointing at an explicit config file
pub const CONFIG_ENV_VAR: &str = "INVESTOR_MANUAL_CONFIG";

/// File name looked up in the platform config directory
pub const CONFIG_FILE_NAME: &str = "manual_config.yaml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid calculator range: {0}")]
    Range(#[from] RangeError),

    #[error("invalid window size {0:?}: width and height must be positive")]
    WindowSize([f32; 2]),
}

/// Window settings passed to eframe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "The Sovereign Investor Manual".to_string(),
            inner_size: [1280.0, 820.0],
            min_inner_size: [900.0, 600.0],
        }
    }
}

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub calculator: InputRanges,
}

impl AppConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file, or the defaults when it does not exist
    pub fn load_or_default(path: &Path) -> Result<(Self, ConfigSource), ConfigError> {
        if !path.exists() {
            warn!("No config file at {:?}, using defaults", path);
            return Ok((Self::default(), ConfigSource::Defaults));
        }

        let yaml = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&yaml)?;
        info!("Loaded config from {:?}", path);
        Ok((config, ConfigSource::File(path.to_path_buf())))
    }

    /// Resolve the config location and load it
    pub fn load() -> Result<(Self, ConfigSource), ConfigError> {
        let env_override = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        match resolve_config_path(env_override) {
            Some(path) => Self::load_or_default(&path),
            None => {
                warn!("No platform config directory available, using defaults");
                Ok((Self::default(), ConfigSource::Defaults))
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.calculator.validate()?;
        for size in [self.window.inner_size, self.window.min_inner_size] {
            if !(size[0] > 0.0 && size[1] > 0.0) {
                return Err(ConfigError::WindowSize(size));
            }
        }
        Ok(())
    }
}

/// Explicit override first, then the platform config directory
pub fn resolve_config_path(env_override: Option<PathBuf>) -> Option<PathBuf> {
    env_override.or_else(|| {
        directories::ProjectDirs::from("org", "SovereignInvestor", "InvestorManual")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.window.title, "The Sovereign Investor Manual");
        assert_eq!(config.calculator, InputRanges::default());
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let yaml = r#"
calculator:
  years: { min: 1.0, max: 40.0, default: 10.0, step: 1.0 }
"#;
        let config = AppConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.calculator.years.max, Some(40.0));
        assert_eq!(config.calculator.years.default, 10.0);
        assert_eq!(config.calculator.annual_rate_percent.default, 8.0);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_empty_yaml_is_defaults() {
        let config = AppConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_invalid_range_is_rejected() {
        let yaml = r#"
calculator:
  annual_rate_percent: { min: 1.0, max: 20.0, default: 30.0, step: 1.0 }
"#;
        let err = AppConfig::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Range(RangeError::DefaultOutOfRange { .. })));
    }

    #[test]
    fn test_invalid_window_is_rejected() {
        let yaml = "window: { inner_size: [0.0, 600.0] }";
        let err = AppConfig::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::WindowSize([w, _]) if w == 0.0));
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let err = AppConfig::from_yaml_str("window: [not, a, map").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE_NAME);

        let (config, source) = AppConfig::load_or_default(&path).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(source, ConfigSource::Defaults);
        assert!(!path.exists(), "loading must not create the file");
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "window:\n  title: \"Investor Manual (dev)\"").unwrap();

        let (config, source) = AppConfig::load_or_default(&path).unwrap();
        assert_eq!(config.window.title, "Investor Manual (dev)");
        assert_eq!(source, ConfigSource::File(path));
    }

    #[test]
    fn test_env_override_wins() {
        let explicit = PathBuf::from("/tmp/custom_manual.yaml");
        assert_eq!(resolve_config_path(Some(explicit.clone())), Some(explicit));
    }
}
