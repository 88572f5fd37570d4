//! Generation orchestration - coordinates the generation workflow

use tracing::{debug, info};

use crate::config::GenerationConfig;
use crate::generation::composer::compose_source;
use crate::generation::packaging::{build_container_file, build_ignore_file, build_manifest};
use crate::generation::rules::{resolve_archetype, validate_config};
use crate::generation::{ArtifactKind, GeneratedArtifact, GenerationError, GenerationResult};

/// Runs the whole pipeline for one configuration
///
/// Produces exactly four artifacts in a fixed order: `main.py`,
/// `requirements.txt`, `Dockerfile` and `.gitignore`. Identical input
/// yields byte-identical output.
pub fn generate_project(config: &GenerationConfig) -> Result<GenerationResult, GenerationError> {
    // 1. Validate configuration
    validate_config(config)?;

    // 2. Pick the template family
    let archetype = resolve_archetype(config);
    let database = config.database.active_backend();
    let middleware = config.normalized_middleware();

    info!(
        server = %config.name,
        archetype = %archetype,
        endpoints = config.endpoints.len(),
        "Generating FastAPI project"
    );

    // 3. Build artifacts
    let artifacts = vec![
        GeneratedArtifact::new(ArtifactKind::Source, compose_source(config, archetype)?),
        GeneratedArtifact::new(
            ArtifactKind::Manifest,
            build_manifest(
                archetype,
                database.is_some(),
                config.database.backend,
                &middleware,
            )?,
        ),
        GeneratedArtifact::new(
            ArtifactKind::Container,
            build_container_file(config.effective_port())?,
        ),
        GeneratedArtifact::new(ArtifactKind::Ignore, build_ignore_file()?),
    ];

    for artifact in &artifacts {
        debug!(file = %artifact.name, bytes = artifact.content.len(), "Built artifact");
    }

    Ok(GenerationResult {
        archetype,
        artifacts,
    })
}

/// Generates the artifact list for a configuration
pub fn generate(config: &GenerationConfig) -> Result<Vec<GeneratedArtifact>, GenerationError> {
    generate_project(config).map(|result| result.artifacts)
}
