//! Dependency manifest, container file and ignore-file generators

use serde_json::json;

use crate::config::DatabaseBackend;
use crate::generation::utils::finish_text;
use crate::generation::{Archetype, GenerationError, RenderContext};
use crate::infrastructure::generation::TeraTemplateRenderer;

const REQUIREMENTS: &str = "fastapi/requirements.txt.tera";
const DOCKERFILE: &str = "fastapi/Dockerfile.tera";
const GITIGNORE: &str = "fastapi/gitignore.tera";

/// Middleware tokens that pull in the credential-hashing dependencies
const SECURITY_MIDDLEWARE: [&str; 2] = ["auth", "authentication"];

/// Builds `requirements.txt`
///
/// `middleware` is expected as produced by
/// [`GenerationConfig::normalized_middleware`](crate::config::GenerationConfig::normalized_middleware).
/// Base lines are always present. Security lines are added for the `auth`
/// archetype or an auth middleware token, the ORM line only when the
/// database is enabled, and the Postgres driver only when it is enabled
/// with the `postgresql` backend.
pub fn build_manifest(
    archetype: Archetype,
    database_enabled: bool,
    database_backend: DatabaseBackend,
    middleware: &[String],
) -> Result<String, GenerationError> {
    let security = archetype == Archetype::Auth
        || middleware
            .iter()
            .any(|token| SECURITY_MIDDLEWARE.contains(&token.as_str()));
    let postgres_driver = database_enabled && database_backend == DatabaseBackend::Postgresql;

    let context = RenderContext::new()
        .with("security", json!(security))
        .with("orm", json!(database_enabled))
        .with("postgres_driver", json!(postgres_driver));

    let rendered = TeraTemplateRenderer::shared()?.render(REQUIREMENTS, &context)?;
    Ok(finish_text(&rendered))
}

/// Builds the `Dockerfile`, exposing and binding `port`
pub fn build_container_file(port: u16) -> Result<String, GenerationError> {
    let context = RenderContext::new().with("port", json!(port));
    let rendered = TeraTemplateRenderer::shared()?.render(DOCKERFILE, &context)?;
    Ok(finish_text(&rendered))
}

/// Builds the `.gitignore`
pub fn build_ignore_file() -> Result<String, GenerationError> {
    let rendered = TeraTemplateRenderer::shared()?.render(GITIGNORE, &RenderContext::new())?;
    Ok(finish_text(&rendered))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORM_LINE: &str = "sqlalchemy==2.0.23";
    const DRIVER_LINE: &str = "psycopg2-binary==2.9.9";
    const JOSE_LINE: &str = "python-jose[cryptography]==3.3.0";
    const PASSLIB_LINE: &str = "passlib[bcrypt]==1.7.4";

    fn lines(manifest: &str) -> Vec<&str> {
        manifest.lines().collect()
    }

    #[test]
    fn test_base_manifest() {
        let manifest = build_manifest(Archetype::Basic, false, DatabaseBackend::Sqlite, &[]).unwrap();
        assert_eq!(
            manifest,
            "fastapi==0.104.1\nuvicorn[standard]==0.24.0\npydantic==2.5.0\n"
        );
    }

    #[test]
    fn test_auth_manifest_adds_security_lines() {
        let manifest = build_manifest(Archetype::Auth, false, DatabaseBackend::Sqlite, &[]).unwrap();
        let lines = lines(&manifest);
        assert!(lines.contains(&JOSE_LINE));
        assert!(lines.contains(&PASSLIB_LINE));
        assert!(!lines.contains(&ORM_LINE));
    }

    #[test]
    fn test_auth_middleware_adds_security_lines() {
        let middleware = vec!["authentication".to_string(), "cors".to_string()];
        let manifest =
            build_manifest(Archetype::Basic, false, DatabaseBackend::Sqlite, &middleware).unwrap();
        assert!(lines(&manifest).contains(&PASSLIB_LINE));

        let middleware = vec!["cors".to_string()];
        let manifest =
            build_manifest(Archetype::Basic, false, DatabaseBackend::Sqlite, &middleware).unwrap();
        assert!(!lines(&manifest).contains(&PASSLIB_LINE));
    }

    #[test]
    fn test_crud_without_database_has_no_orm() {
        for backend in [DatabaseBackend::Sqlite, DatabaseBackend::Postgresql] {
            let manifest = build_manifest(Archetype::Crud, false, backend, &[]).unwrap();
            assert!(!manifest.contains("sqlalchemy"));
            assert!(!manifest.contains("psycopg2"));
        }
    }

    #[test]
    fn test_postgres_driver_only_when_enabled() {
        let sqlite = build_manifest(Archetype::Crud, true, DatabaseBackend::Sqlite, &[]).unwrap();
        assert!(lines(&sqlite).contains(&ORM_LINE));
        assert!(!lines(&sqlite).contains(&DRIVER_LINE));

        let postgres =
            build_manifest(Archetype::Crud, true, DatabaseBackend::Postgresql, &[]).unwrap();
        assert!(lines(&postgres).contains(&ORM_LINE));
        assert!(lines(&postgres).contains(&DRIVER_LINE));
    }

    #[test]
    fn test_manifest_has_no_blank_lines() {
        let manifest =
            build_manifest(Archetype::Auth, true, DatabaseBackend::Postgresql, &[]).unwrap();
        assert_eq!(lines(&manifest).len(), 7);
        assert!(lines(&manifest).iter().all(|line| !line.trim().is_empty()));
    }

    #[test]
    fn test_container_file_uses_port() {
        let dockerfile = build_container_file(9000).unwrap();
        assert!(dockerfile.starts_with("FROM python:3.11-slim\n"));
        assert!(dockerfile.contains("EXPOSE 9000\n"));
        assert!(dockerfile.contains(r#""--port", "9000"]"#));
        assert!(!dockerfile.contains("8000"));
    }

    #[test]
    fn test_ignore_file() {
        let ignore = build_ignore_file().unwrap();
        for entry in ["__pycache__/", "*.py[cod]", ".venv", "venv/", "*.db"] {
            assert!(ignore.lines().any(|line| line == entry), "missing {entry}");
        }
        assert_eq!(ignore, build_ignore_file().unwrap());
    }
}
