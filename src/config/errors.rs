//! Errors raised while reading a configuration file
//!
//! These are caller-side input failures: they are reported before the
//! generator runs and never surface from [`crate::generation::generate`].

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Port must be between 1 and 65535, got {0}")]
    InvalidPort(i64),

    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(String),
}
