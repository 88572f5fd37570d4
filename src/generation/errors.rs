//! Error types for the generation domain

use thiserror::Error;

/// Input rejected before any artifact is produced
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Server name cannot be empty")]
    MissingName,
}

/// Errors that can occur during code generation
///
/// Only [`GenerationError::Validation`] is input-driven. The template
/// variants point at a broken embedded template set.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Render error: {0}")]
    RenderError(String),
}

impl GenerationError {
    /// Whether the failure was caused by the caller's configuration
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
