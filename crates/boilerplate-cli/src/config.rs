//! Configuration file support.
//!
//! Configuration is stored in TOML format at:
//! - Linux: `~/.config/code-cli/config.toml`
//! - macOS: `~/Library/Application Support/code-cli/config.toml`
//! - Windows: `%APPDATA%\code-cli\config.toml`
//!
//! A different file can be chosen with `--config` or `CODE_CLI_CONFIG`.
//! Values given on the command line always win over the file.

use anyhow::{Context, Result, bail};
use boilerplate_core::Error;
use boilerplate_core::cli::OutputFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// CLI configuration.
///
/// # Examples
///
/// ```toml
/// [general]
/// default_format = "pretty"
/// log_level = "warn"
///
/// [generate]
/// assume_yes = false
/// output_dir = "~/solutions"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub general: GeneralConfig,

    /// Defaults for stub generation
    #[serde(default)]
    pub generate: GenerateConfig,
}

/// General configuration settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format (json, text, pretty)
    pub default_format: String,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Stub generation defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct GenerateConfig {
    /// Skip the confirmation prompt
    pub assume_yes: bool,

    /// Directory for generated files (current directory when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_format: "pretty".to_string(),
            log_level: "warn".to_string(),
        }
    }
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl Config {
    /// Returns the platform-specific default configuration path.
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("failed to determine config directory")?;

        Ok(config_dir.join("code-cli").join("config.toml"))
    }

    /// Loads the configuration.
    ///
    /// With an explicit path the file must exist. Without one, the default
    /// path is used and a missing file yields the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    bail!("config file not found: {}", path.display());
                }
                path.to_path_buf()
            }
            None => {
                let Ok(path) = Self::default_path() else {
                    return Ok(Self::default());
                };
                if !path.exists() {
                    debug!("Config file not found, using defaults");
                    return Ok(Self::default());
                }
                path
            }
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the text is not valid TOML or a
    /// value is invalid.
    pub fn from_toml_str(content: &str) -> boilerplate_core::Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| Error::ConfigError {
            message: format!("failed to parse config file: {e}"),
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if configuration values are invalid.
    pub fn validate(&self) -> boilerplate_core::Result<()> {
        if self
            .general
            .default_format
            .parse::<OutputFormat>()
            .is_err()
        {
            return Err(Error::ConfigError {
                message: format!(
                    "invalid default_format '{}', must be one of: {}",
                    self.general.default_format,
                    OutputFormat::NAMES.join(", ")
                ),
            });
        }

        if !LOG_LEVELS.contains(&self.general.log_level.as_str()) {
            return Err(Error::ConfigError {
                message: format!(
                    "invalid log_level '{}', must be one of: {}",
                    self.general.log_level,
                    LOG_LEVELS.join(", ")
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.general.default_format, "pretty");
        assert_eq!(config.general.log_level, "warn");
        assert!(!config.generate.assume_yes);
        assert!(config.generate.output_dir.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_yields_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = Config::from_toml_str("[generate]\nassume_yes = true\n").unwrap();
        assert!(config.generate.assume_yes);
        assert_eq!(config.general.log_level, "warn");
    }

    #[test]
    fn test_full_file() {
        let config = Config::from_toml_str(
            r#"
[general]
default_format = "json"
log_level = "debug"

[generate]
assume_yes = true
output_dir = "/tmp/solutions"
"#,
        )
        .unwrap();

        assert_eq!(config.general.default_format, "json");
        assert_eq!(config.general.log_level, "debug");
        assert!(config.generate.assume_yes);
        assert_eq!(
            config.generate.output_dir,
            Some(PathBuf::from("/tmp/solutions"))
        );
    }

    #[test]
    fn test_validation_invalid_format() {
        let err = Config::from_toml_str("[general]\ndefault_format = \"yaml\"\n").unwrap_err();
        assert!(err.is_config_error());
        assert!(err.to_string().contains("default_format"));
    }

    #[test]
    fn test_validation_invalid_log_level() {
        let err = Config::from_toml_str("[general]\nlog_level = \"loud\"\n").unwrap_err();
        assert!(err.is_config_error());
        assert!(err.to_string().contains("log_level"));
    }

    #[test]
    fn test_malformed_toml_fails() {
        let err = Config::from_toml_str("[general\n").unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_invalid_file_surfaces_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general]\nlog_level = \"loud\"\n").unwrap();

        let err = Config::load(Some(&path)).unwrap_err();
        let config_err = err
            .downcast_ref::<Error>()
            .expect("config failure should carry a typed error");
        assert!(config_err.is_config_error());
        assert!(config_err.to_string().contains("log_level"));
        assert!(format!("{err:#}").contains("invalid config file"));
    }

    #[test]
    fn test_load_explicit_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let result = Config::load(Some(&dir.path().join("missing.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general]\ndefault_format = \"text\"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.general.default_format, "text");
    }

    #[test]
    fn test_config_serialization_round_trip() {
        let mut config = Config::default();
        config.generate.output_dir = Some(PathBuf::from("/tmp/out"));

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed = Config::from_toml_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }
}
