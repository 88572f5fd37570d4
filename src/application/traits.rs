//! Port interfaces for the application layer

use async_trait::async_trait;
use std::path::Path;

use crate::application::ApplicationError;
use crate::generation::GeneratedArtifact;

/// Service for writing generated artifacts to the output destination
#[async_trait]
pub trait OutputService: Send + Sync {
    /// Write all artifacts into `directory`, one file per artifact name
    async fn write_artifacts(
        &self,
        directory: &Path,
        artifacts: &[GeneratedArtifact],
    ) -> Result<(), ApplicationError>;

    /// Ensure a directory exists
    async fn ensure_directory(&self, path: &Path) -> Result<(), ApplicationError>;
}
