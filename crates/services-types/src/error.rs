//! Error types for services-calc

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[allow(dead_code)]
    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("Scenario file error: {0}")]
    Scenario(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Unknown service: {0}")]
    UnknownService(String),

    #[error("Unknown utility '{utility}' for service '{service}'")]
    UnknownUtility { service: String, utility: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Excel export error: {0}")]
    Excel(String),
}

pub type Result<T> = std::result::Result<T, Error>;
