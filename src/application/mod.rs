//! Application layer - orchestrates use cases and coordinates between domains

pub mod errors;
pub mod scaffold;
pub mod traits;

pub use errors::*;
pub use scaffold::*;
pub use traits::*;
