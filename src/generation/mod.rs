//! Generation domain module - turns a server configuration into project files
//!
//! The pipeline validates the configuration, resolves an archetype, composes
//! `main.py` from template sections and renders the packaging files. All
//! text comes from the embedded template set, so output depends only on the
//! configuration.

pub mod composer;
pub mod context;
pub mod errors;
pub mod handlers;
pub mod orchestrator;
pub mod packaging;
pub mod rules;
pub mod sanitizers;
pub mod types;
pub mod utils;

pub use composer::compose_source;
pub use context::*;
pub use errors::*;
pub use handlers::synthesize_handlers;
pub use orchestrator::{generate, generate_project};
pub use packaging::{build_container_file, build_ignore_file, build_manifest};
pub use rules::{classify, resolve_archetype, validate_config};
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DatabaseBackend, DatabaseSpec, EndpointSpec, GenerationConfig, HttpMethod};

    #[test]
    fn test_every_archetype_generates() {
        for archetype in Archetype::all() {
            for database in [
                DatabaseSpec::disabled(),
                DatabaseSpec::enabled(DatabaseBackend::Sqlite),
                DatabaseSpec::enabled(DatabaseBackend::Postgresql),
            ] {
                let config = GenerationConfig::new("svc")
                    .with_endpoint(EndpointSpec::new("1", "/ping", HttpMethod::Get, ""))
                    .with_database(database)
                    .with_archetype(archetype);
                let result = generate_project(&config).unwrap();
                assert_eq!(result.archetype, archetype);
                assert_eq!(result.artifacts.len(), 4);
                assert!(!result.artifacts[0].content.contains("{{"));
                assert!(!result.artifacts[0].content.contains("{%"));
            }
        }
    }

    #[test]
    fn test_orm_line_tracks_database_flag() {
        for archetype in Archetype::all() {
            let on = GenerationConfig::new("svc")
                .with_database(DatabaseSpec::enabled(DatabaseBackend::Sqlite))
                .with_archetype(archetype);
            let off = GenerationConfig::new("svc").with_archetype(archetype);

            assert!(generate(&on).unwrap()[1].content.contains("sqlalchemy"));
            assert!(!generate(&off).unwrap()[1].content.contains("sqlalchemy"));
        }
    }
}
