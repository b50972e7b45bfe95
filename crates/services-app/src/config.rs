//! Configuration management for services-calc
//!
//! Config stored at: ~/.config/services-calc/config.json

use serde::{Deserialize, Serialize};
use services_types::{ConfigError, OutputFormat, Result};
use std::path::PathBuf;

/// Workbook path used when neither the CLI nor the config names one
pub const DEFAULT_WORKBOOK: &str = "data/Services_2_Calculator.xlsx";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the canonical workbook (optional)
    #[serde(default)]
    pub workbook: Option<PathBuf>,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workbook: None,
            output_format: default_output_format(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("services-calc");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Services Calculator Configuration")?;
        writeln!(f, "=================================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Workbook:       {}",
            self.workbook
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| format!("(default: {})", DEFAULT_WORKBOOK))
        )?;
        writeln!(f, "Output format:  {}", self.output_format)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.workbook.is_none());
        assert_eq!(config.output_format, OutputFormat::Table);
    }

    #[test]
    fn test_config_roundtrip_json() {
        let config = Config {
            workbook: Some(PathBuf::from("/tmp/services.xlsx")),
            output_format: OutputFormat::Json,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.workbook, config.workbook);
        assert_eq!(parsed.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_config_missing_fields_use_defaults() {
        let parsed: Config = serde_json::from_str("{}").unwrap();
        assert!(parsed.workbook.is_none());
        assert_eq!(parsed.output_format, OutputFormat::Table);
    }
}
