//! Configuration file loading
//!
//! Uploaded configurations are structured text (JSON, YAML or TOML) whose
//! shape must carry `name`, `port` and `endpoints`. The loader checks that
//! shape and converts it into a [`GenerationConfig`].

use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::Path;
use std::str::FromStr;

use crate::config::{ConfigError, DatabaseSpec, EndpointSpec, GenerationConfig};
use crate::generation::Archetype;

/// Structured-text formats accepted for configuration files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
    Toml,
}

impl ConfigFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        Self::from_str(extension)
    }
}

impl FromStr for ConfigFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "toml" => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Raw shape of an uploaded configuration before required-field checks
#[derive(Debug, Deserialize)]
struct UploadedConfig {
    name: Option<String>,
    description: Option<String>,
    // Wider than u16 so out-of-range values land in `InvalidPort`
    port: Option<i64>,
    endpoints: Option<Vec<EndpointSpec>>,
    #[serde(default)]
    database: DatabaseSpec,
    #[serde(default)]
    middleware: BTreeSet<String>,
    archetype: Option<Archetype>,
}

impl TryFrom<UploadedConfig> for GenerationConfig {
    type Error = ConfigError;

    fn try_from(raw: UploadedConfig) -> Result<Self, Self::Error> {
        let name = raw.name.ok_or(ConfigError::MissingField("name"))?;
        let port = raw.port.ok_or(ConfigError::MissingField("port"))?;
        let port = u16::try_from(port)
            .ok()
            .filter(|port| *port > 0)
            .ok_or(ConfigError::InvalidPort(port))?;
        let endpoints = raw.endpoints.ok_or(ConfigError::MissingField("endpoints"))?;

        Ok(GenerationConfig {
            name,
            description: raw.description,
            port: Some(port),
            endpoints,
            database: raw.database,
            middleware: raw.middleware,
            archetype: raw.archetype,
        })
    }
}

/// Parse configuration text in the given format
pub fn parse_config(text: &str, format: ConfigFormat) -> Result<GenerationConfig, ConfigError> {
    let raw: UploadedConfig = match format {
        ConfigFormat::Json => serde_json::from_str(text)?,
        ConfigFormat::Yaml => serde_yaml::from_str(text)?,
        ConfigFormat::Toml => toml::from_str(text)?,
    };
    GenerationConfig::try_from(raw)
}

/// Read and parse a configuration file, choosing the format by extension
pub fn load_config(path: &Path) -> Result<GenerationConfig, ConfigError> {
    let format = ConfigFormat::from_path(path)?;
    let text = std::fs::read_to_string(path)?;

    tracing::debug!(path = %path.display(), ?format, "Loading server configuration");

    parse_config(&text, format)
}
