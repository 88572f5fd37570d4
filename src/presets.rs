//! Built-in starter configurations

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::{
    DatabaseBackend, DatabaseSpec, EndpointSpec, GenerationConfig, HttpMethod,
};

/// Ready-made configurations for the three fixed archetypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Basic,
    Crud,
    Auth,
}

impl Preset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Crud => "crud",
            Self::Auth => "auth",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Basic => "Basic API",
            Self::Crud => "CRUD API",
            Self::Auth => "Auth API",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Basic => "Simple FastAPI server with health check and info endpoints",
            Self::Crud => "Full CRUD operations with database integration",
            Self::Auth => "Authentication system with user management",
        }
    }

    pub fn all() -> impl Iterator<Item = Self> {
        [Self::Basic, Self::Crud, Self::Auth].iter().copied()
    }

    /// The seeded configuration for this preset
    pub fn config(&self) -> GenerationConfig {
        match self {
            Self::Basic => seeded(
                "Basic-API",
                "Basic FastAPI server with essential endpoints",
                8000,
                &[
                    ("/health", HttpMethod::Get, "Health check endpoint"),
                    ("/info", HttpMethod::Get, "Server information"),
                    ("/version", HttpMethod::Get, "API version"),
                ],
                DatabaseSpec::disabled(),
                &["cors"],
            ),
            Self::Crud => seeded(
                "CRUD-API",
                "FastAPI server with full CRUD operations",
                8001,
                &[
                    ("/items", HttpMethod::Get, "Get all items"),
                    ("/items", HttpMethod::Post, "Create new item"),
                    ("/items/{id}", HttpMethod::Get, "Get item by ID"),
                    ("/items/{id}", HttpMethod::Put, "Update item"),
                    ("/items/{id}", HttpMethod::Delete, "Delete item"),
                    ("/items/search", HttpMethod::Get, "Search items"),
                ],
                DatabaseSpec::enabled(DatabaseBackend::Sqlite),
                &["cors"],
            ),
            Self::Auth => seeded(
                "Auth-API",
                "FastAPI server with authentication endpoints",
                8002,
                &[
                    ("/register", HttpMethod::Post, "User registration"),
                    ("/login", HttpMethod::Post, "User login"),
                    ("/logout", HttpMethod::Post, "User logout"),
                    ("/profile", HttpMethod::Get, "Get user profile"),
                    ("/profile", HttpMethod::Put, "Update user profile"),
                    ("/change-password", HttpMethod::Post, "Change password"),
                ],
                DatabaseSpec::enabled(DatabaseBackend::Sqlite),
                &["cors", "authentication"],
            ),
        }
    }
}

fn seeded(
    name: &str,
    description: &str,
    port: u16,
    endpoints: &[(&str, HttpMethod, &str)],
    database: DatabaseSpec,
    middleware: &[&str],
) -> GenerationConfig {
    let config = endpoints.iter().enumerate().fold(
        GenerationConfig::new(name)
            .with_description(description)
            .with_port(port)
            .with_database(database),
        |config, (index, (path, method, summary))| {
            config.with_endpoint(EndpointSpec::new(
                (index + 1).to_string(),
                *path,
                *method,
                *summary,
            ))
        },
    );

    middleware
        .iter()
        .fold(config, |config, token| config.with_middleware(*token))
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "crud" => Ok(Self::Crud),
            "auth" => Ok(Self::Auth),
            _ => Err(format!("Unknown preset: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::{Archetype, generate_project};

    #[test]
    fn test_preset_from_str() {
        assert_eq!(Preset::from_str("CRUD").unwrap(), Preset::Crud);
        assert_eq!(Preset::from_str("auth").unwrap(), Preset::Auth);
        assert!(Preset::from_str("custom").is_err());
    }

    #[test]
    fn test_seeded_ports() {
        let ports: Vec<u16> = Preset::all().map(|p| p.config().effective_port()).collect();
        assert_eq!(ports, vec![8000, 8001, 8002]);
    }

    #[test]
    fn test_presets_classify_to_their_archetype() {
        let expected = [
            (Preset::Basic, Archetype::Basic),
            (Preset::Crud, Archetype::Crud),
            (Preset::Auth, Archetype::Auth),
        ];
        for (preset, archetype) in expected {
            let result = generate_project(&preset.config()).unwrap();
            assert_eq!(result.archetype, archetype, "{preset}");
        }
    }

    #[test]
    fn test_crud_preset_endpoints() {
        let config = Preset::Crud.config();
        assert_eq!(config.endpoints.len(), 6);
        assert_eq!(config.endpoints[0].id, "1");
        assert_eq!(config.endpoints[5].path, "/items/search");
        assert!(config.database.enabled);
    }

    #[test]
    fn test_auth_preset_pulls_security_dependencies() {
        let config = Preset::Auth.config();
        assert_eq!(config.normalized_middleware(), vec!["authentication", "cors"]);

        let result = generate_project(&config).unwrap();
        assert!(result.artifacts[1].content.contains("passlib[bcrypt]==1.7.4"));
        assert!(result.artifacts[1].content.contains("sqlalchemy==2.0.23"));
    }
}
