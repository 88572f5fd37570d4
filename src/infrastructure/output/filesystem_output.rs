//! Filesystem-based output service implementation

use async_trait::async_trait;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::application::{ApplicationError, OutputService};
use crate::generation::GeneratedArtifact;

/// Output service that writes artifacts to the filesystem
pub struct FileSystemOutputService;

impl FileSystemOutputService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OutputService for FileSystemOutputService {
    async fn write_artifacts(
        &self,
        directory: &Path,
        artifacts: &[GeneratedArtifact],
    ) -> Result<(), ApplicationError> {
        for artifact in artifacts {
            let path = directory.join(&artifact.name);

            let mut file = fs::File::create(&path).await.map_err(|e| {
                ApplicationError::OutputError(format!(
                    "Failed to create file {}: {}",
                    path.display(),
                    e
                ))
            })?;

            file.write_all(artifact.content.as_bytes())
                .await
                .map_err(|e| {
                    ApplicationError::OutputError(format!(
                        "Failed to write file {}: {}",
                        path.display(),
                        e
                    ))
                })?;

            file.flush().await.map_err(|e| {
                ApplicationError::OutputError(format!(
                    "Failed to flush file {}: {}",
                    path.display(),
                    e
                ))
            })?;

            debug!(path = %path.display(), "Wrote artifact");
        }

        Ok(())
    }

    async fn ensure_directory(&self, path: &Path) -> Result<(), ApplicationError> {
        fs::create_dir_all(path).await.map_err(|e| {
            ApplicationError::OutputError(format!(
                "Failed to create directory {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(())
    }
}

impl Default for FileSystemOutputService {
    fn default() -> Self {
        Self::new()
    }
}
