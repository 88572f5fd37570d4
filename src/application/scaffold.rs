//! Use cases for previewing and scaffolding a FastAPI project

use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::application::{ApplicationError, OutputService};
use crate::config::{GenerationConfig, load_config};
use crate::generation::utils::to_snake_case;
use crate::generation::{Archetype, GenerationResult, generate_project};
use crate::presets::Preset;

/// Output directory used when the server name sanitizes to nothing
pub const FALLBACK_OUTPUT_DIR: &str = "fastapi_app";

/// Where a server configuration comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// JSON, YAML or TOML file, format chosen by extension
    File(PathBuf),
    Preset(Preset),
}

/// Field values that replace the loaded configuration's own
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub name: Option<String>,
    pub port: Option<u16>,
    pub archetype: Option<Archetype>,
}

impl ConfigOverrides {
    pub fn apply(&self, mut config: GenerationConfig) -> GenerationConfig {
        if let Some(name) = &self.name {
            config.name = name.clone();
        }
        if let Some(port) = self.port {
            config.port = Some(port);
        }
        if let Some(archetype) = self.archetype {
            config.archetype = Some(archetype);
        }
        config
    }
}

/// Loads the configuration from its source and applies the overrides
pub fn resolve_config(
    source: &ConfigSource,
    overrides: &ConfigOverrides,
) -> Result<GenerationConfig, ApplicationError> {
    let config = match source {
        ConfigSource::File(path) => load_config(path)?,
        ConfigSource::Preset(preset) => {
            info!(preset = %preset, "Using built-in preset");
            preset.config()
        }
    };
    Ok(overrides.apply(config))
}

/// Generates a project in memory without writing anything
pub fn preview_project(
    source: &ConfigSource,
    overrides: &ConfigOverrides,
) -> Result<GenerationResult, ApplicationError> {
    let config = resolve_config(source, overrides)?;
    Ok(generate_project(&config)?)
}

/// `./<snake_case(name)>`, or [`FALLBACK_OUTPUT_DIR`] when nothing usable remains
pub fn default_output_dir(server_name: &str) -> PathBuf {
    let dir = to_snake_case(server_name);
    if dir.is_empty() {
        PathBuf::from(FALLBACK_OUTPUT_DIR)
    } else {
        PathBuf::from(dir)
    }
}

/// Request to generate a project into a directory
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    pub source: ConfigSource,
    pub overrides: ConfigOverrides,
    /// Defaults to [`default_output_dir`] of the resolved server name
    pub output_dir: Option<PathBuf>,
}

/// Summary of a completed scaffold run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldResponse {
    pub archetype: Archetype,
    pub artifacts_count: usize,
    pub output_path: PathBuf,
}

/// Use case for generating a project and writing it out
pub struct ScaffoldUseCase {
    output_service: Arc<dyn OutputService>,
}

impl ScaffoldUseCase {
    pub fn new(output_service: Arc<dyn OutputService>) -> Self {
        Self { output_service }
    }

    pub async fn execute(
        &self,
        request: ScaffoldRequest,
    ) -> Result<ScaffoldResponse, ApplicationError> {
        // 1. Resolve configuration
        let config = resolve_config(&request.source, &request.overrides)?;
        let output_dir = request
            .output_dir
            .unwrap_or_else(|| default_output_dir(&config.name));

        // 2. Generate artifacts; nothing touches the disk on failure
        let result = generate_project(&config)?;

        // 3. Ensure output directory exists
        self.output_service.ensure_directory(&output_dir).await?;

        // 4. Write artifacts
        self.output_service
            .write_artifacts(&output_dir, &result.artifacts)
            .await?;

        info!(
            archetype = %result.archetype,
            files = result.artifacts.len(),
            output = %output_dir.display(),
            "Scaffold written"
        );

        Ok(ScaffoldResponse {
            archetype: result.archetype,
            artifacts_count: result.artifacts.len(),
            output_path: output_dir,
        })
    }
}
