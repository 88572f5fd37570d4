//! Application layer error types

use thiserror::Error;

/// Application layer errors
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Generation error: {0}")]
    GenerationError(#[from] crate::generation::GenerationError),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] crate::config::ConfigError),

    #[error("Output error: {0}")]
    OutputError(String),
}

impl ApplicationError {
    /// Whether the failure came from the caller's input rather than the environment
    pub fn is_input_error(&self) -> bool {
        match self {
            Self::GenerationError(e) => e.is_validation(),
            Self::ConfigError(_) => true,
            Self::OutputError(_) => false,
        }
    }
}
