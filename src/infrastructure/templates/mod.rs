//! Template repository implementations

pub mod embedded_repository;

pub use embedded_repository::*;
