//! fastapi-scaffold - render FastAPI project scaffolds from a server configuration
//!
//! A [`GenerationConfig`] goes in; `main.py`, `requirements.txt`,
//! `Dockerfile` and `.gitignore` come out. Generation is pure and
//! deterministic; writing the files to disk goes through the
//! [`application::ScaffoldUseCase`].
#![deny(unsafe_code)]

pub mod application;
pub mod config;
pub mod generation;
pub mod infrastructure;
pub mod presets;

pub use config::{
    ConfigError, DatabaseBackend, DatabaseSpec, EndpointSpec, GenerationConfig, HttpMethod,
    load_config, parse_config,
};
pub use generation::{
    Archetype, ArtifactKind, GeneratedArtifact, GenerationError, GenerationResult,
    ValidationError, classify, generate, generate_project,
};
pub use presets::Preset;
