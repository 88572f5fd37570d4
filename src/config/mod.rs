//! Server configuration - the structured input to generation
//!
//! Holds the typed configuration model and the loader for uploaded
//! configuration files.

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::*;
pub use loader::*;
pub use types::*;
