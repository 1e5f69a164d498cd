//! CLI preferences
//!
//! Handles loading and saving preferences from ~/.llm-significance/config.toml

use crate::output::OutputFormat;
use anyhow::{Context, Result};
use llm_significance_application::AnalysisSettings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the preferred output format
pub const OUTPUT_FORMAT_ENV: &str = "LLM_SIGNIFICANCE_OUTPUT_FORMAT";

/// CLI preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Enable colored output
    #[serde(default = "default_colored")]
    pub colored: bool,

    /// Engine defaults applied when a flag is not given
    #[serde(default)]
    pub analysis: AnalysisSettings,
}

fn default_colored() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            colored: default_colored(),
            analysis: AnalysisSettings::default(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".llm-significance"))
    }

    /// Get the config file path
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load preferences from the default file plus environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_file()?)?;

        if let Ok(format) = std::env::var(OUTPUT_FORMAT_ENV) {
            config.output_format = format
                .parse()
                .with_context(|| format!("Invalid {}", OUTPUT_FORMAT_ENV))?;
        }
        if std::env::var("NO_COLOR").is_ok() {
            config.colored = false;
        }

        Ok(config)
    }

    /// Load preferences from a file, falling back to defaults if it is absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).context("Failed to read config file")?;
        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save preferences to the default file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file()?)
    }

    /// Save preferences to a file, creating its directory if needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir).context("Failed to create config directory")?;
            }
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Reset preferences to defaults
    pub fn reset(&mut self) -> Result<()> {
        *self = Self::default();
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use llm_significance_domain::{CorrectionMethod, TestType};

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output_format, OutputFormat::Table);
        assert!(config.colored);
        assert_eq!(config.analysis.test_type, TestType::WilcoxonSignedRank);
        assert_eq!(config.analysis.alpha, 0.05);
    }

    #[test]
    fn test_config_serialization() {
        let mut config = Config::default();
        config.analysis.correction = CorrectionMethod::Holm;
        config.output_format = OutputFormat::Json;

        let toml_str = toml::to_string(&config).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(deserialized, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            output_format = "plain"

            [analysis]
            test_type = "ttest"
            "#,
        )
        .unwrap();

        assert_eq!(config.output_format, OutputFormat::Plain);
        assert!(config.colored);
        assert_eq!(config.analysis.test_type, TestType::PairedTTest);
        assert_eq!(config.analysis.alpha, 0.05);
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        assert_eq!(Config::load_from(&path).unwrap(), Config::default());

        let mut config = Config::default();
        config.colored = false;
        config.analysis.alpha = 0.01;
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "output_format = [").unwrap();

        assert!(Config::load_from(&path).is_err());
    }
}
