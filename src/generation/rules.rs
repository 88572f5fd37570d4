//! Business rules for the generation domain

use crate::config::{EndpointSpec, GenerationConfig, HttpMethod};
use crate::generation::{Archetype, ValidationError};

/// Endpoint count at or below which a configuration reads as `basic`
const BASIC_ENDPOINT_LIMIT: usize = 3;

/// Classifies a configuration into an archetype from name hints and endpoint shape
///
/// Rules are checked in order and the first match wins:
/// 1. name contains `Auth`, or a path mentions `login`/`register` → `auth`
/// 2. name contains `CRUD`, or an endpoint uses PUT/DELETE → `crud`
/// 3. name contains `Basic`, or there are at most three endpoints → `basic`
/// 4. otherwise `basic`
///
/// Substring matches on the name are case-sensitive. Never yields `custom`.
pub fn classify(name: &str, endpoints: &[EndpointSpec]) -> Archetype {
    let has_auth_path = endpoints
        .iter()
        .any(|e| e.path.contains("login") || e.path.contains("register"));
    if name.contains("Auth") || has_auth_path {
        return Archetype::Auth;
    }

    let has_mutation = endpoints
        .iter()
        .any(|e| matches!(e.method, HttpMethod::Put | HttpMethod::Delete));
    if name.contains("CRUD") || has_mutation {
        return Archetype::Crud;
    }

    if name.contains("Basic") || endpoints.len() <= BASIC_ENDPOINT_LIMIT {
        return Archetype::Basic;
    }

    Archetype::Basic
}

/// Archetype used for a configuration: the explicit hint, else the classifier
pub fn resolve_archetype(config: &GenerationConfig) -> Archetype {
    config
        .archetype
        .unwrap_or_else(|| classify(&config.name, &config.endpoints))
}

/// Validates a configuration before generation
pub fn validate_config(config: &GenerationConfig) -> Result<(), ValidationError> {
    if config.name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }
    Ok(())
}
