//! Server configuration types consumed by the generator

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::generation::Archetype;

/// Port used when a configuration does not specify one
pub const DEFAULT_PORT: u16 = 8000;

/// HTTP methods an endpoint may declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Upper-case wire name ("GET", "POST", ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Lower-case name as used by FastAPI route decorators
    pub fn decorator(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            _ => Err(format!("Unknown HTTP method: {s}")),
        }
    }
}

/// One REST route description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointSpec {
    /// Caller-assigned identifier, opaque to the generator
    pub id: String,
    pub path: String,
    pub method: HttpMethod,
    pub description: String,
}

impl EndpointSpec {
    pub fn new(
        id: impl Into<String>,
        path: impl Into<String>,
        method: HttpMethod,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            method,
            description: description.into(),
        }
    }
}

/// Database backends the scaffold can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseBackend {
    #[default]
    Sqlite,
    Postgresql,
}

impl DatabaseBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::Postgresql => "postgresql",
        }
    }
}

impl fmt::Display for DatabaseBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Database settings; `backend` is ignored while `enabled` is false
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DatabaseSpec {
    pub enabled: bool,
    #[serde(rename = "type", default)]
    pub backend: DatabaseBackend,
}

impl DatabaseSpec {
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn enabled(backend: DatabaseBackend) -> Self {
        Self {
            enabled: true,
            backend,
        }
    }

    /// Backend in effect, `None` when the database is switched off
    pub fn active_backend(&self) -> Option<DatabaseBackend> {
        self.enabled.then_some(self.backend)
    }
}

/// The structured input describing a server to scaffold
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default)]
    pub endpoints: Vec<EndpointSpec>,
    #[serde(default)]
    pub database: DatabaseSpec,
    #[serde(default)]
    pub middleware: BTreeSet<String>,
    /// Explicit archetype; when absent the archetype is classified from the
    /// name and endpoint shape
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archetype: Option<Archetype>,
}

impl GenerationConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_endpoint(mut self, endpoint: EndpointSpec) -> Self {
        self.endpoints.push(endpoint);
        self
    }

    pub fn with_database(mut self, database: DatabaseSpec) -> Self {
        self.database = database;
        self
    }

    pub fn with_middleware(mut self, token: impl Into<String>) -> Self {
        self.middleware.insert(token.into());
        self
    }

    pub fn with_archetype(mut self, archetype: Archetype) -> Self {
        self.archetype = Some(archetype);
        self
    }

    /// Port the generated server binds to
    pub fn effective_port(&self) -> u16 {
        self.port.filter(|port| *port > 0).unwrap_or(DEFAULT_PORT)
    }

    /// Description text, `None` when absent or blank
    pub fn effective_description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }

    /// Middleware tokens trimmed, lower-cased, deduplicated and sorted
    pub fn normalized_middleware(&self) -> Vec<String> {
        self.middleware
            .iter()
            .map(|token| token.trim().to_lowercase())
            .filter(|token| !token.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_method_from_str() {
        assert_eq!(HttpMethod::from_str("get").unwrap(), HttpMethod::Get);
        assert_eq!(HttpMethod::from_str("DELETE").unwrap(), HttpMethod::Delete);
        assert!(HttpMethod::from_str("PATCH").is_err());
    }

    #[test]
    fn test_http_method_serde_is_uppercase() {
        let json = serde_json::to_string(&HttpMethod::Put).unwrap();
        assert_eq!(json, "\"PUT\"");
        let method: HttpMethod = serde_json::from_str("\"POST\"").unwrap();
        assert_eq!(method, HttpMethod::Post);
    }

    #[test]
    fn test_effective_port_defaults() {
        assert_eq!(GenerationConfig::new("svc").effective_port(), 8000);
        assert_eq!(GenerationConfig::new("svc").with_port(0).effective_port(), 8000);
        assert_eq!(GenerationConfig::new("svc").with_port(9000).effective_port(), 9000);
    }

    #[test]
    fn test_effective_description_ignores_blank() {
        let config = GenerationConfig::new("svc").with_description("   ");
        assert_eq!(config.effective_description(), None);

        let config = GenerationConfig::new("svc").with_description(" Inventory ");
        assert_eq!(config.effective_description(), Some("Inventory"));
    }

    #[test]
    fn test_normalized_middleware_is_stable() {
        let config = GenerationConfig::new("svc")
            .with_middleware("Cors")
            .with_middleware("authentication")
            .with_middleware("cors")
            .with_middleware("  ");

        assert_eq!(config.normalized_middleware(), vec!["authentication", "cors"]);
    }

    #[test]
    fn test_database_active_backend() {
        assert_eq!(DatabaseSpec::disabled().active_backend(), None);
        let db = DatabaseSpec {
            enabled: false,
            backend: DatabaseBackend::Postgresql,
        };
        assert_eq!(db.active_backend(), None);
        assert_eq!(
            DatabaseSpec::enabled(DatabaseBackend::Postgresql).active_backend(),
            Some(DatabaseBackend::Postgresql)
        );
    }

    #[test]
    fn test_database_spec_uses_type_key() {
        let db: DatabaseSpec =
            serde_json::from_str(r#"{"enabled": true, "type": "postgresql"}"#).unwrap();
        assert_eq!(db, DatabaseSpec::enabled(DatabaseBackend::Postgresql));
    }
}
