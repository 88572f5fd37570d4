//! Endpoint handler synthesis
//!
//! The `basic`, `crud` and `auth` archetypes emit a fixed handler set and
//! ignore the caller's endpoint list. Only `custom` emits one generic
//! handler per declared endpoint.

use serde_json::{Value as JsonValue, json};
use tracing::debug;

use crate::config::{EndpointSpec, HttpMethod};
use crate::generation::sanitizers::{escape_python_string, path_to_identifier};
use crate::generation::{Archetype, GenerationError, RenderContext};
use crate::infrastructure::generation::TeraTemplateRenderer;

const BASIC_HANDLERS: &str = "fastapi/handlers/basic.py.tera";
const CRUD_DATABASE_HANDLERS: &str = "fastapi/handlers/crud_database.py.tera";
const CRUD_MEMORY_HANDLERS: &str = "fastapi/handlers/crud_memory.py.tera";
const AUTH_HANDLERS: &str = "fastapi/handlers/auth.py.tera";
const CUSTOM_HANDLERS: &str = "fastapi/handlers/custom.py.tera";

/// Emits the handler block for an archetype
///
/// For `crud` the database-backed or in-memory variant is chosen by
/// `database_enabled`; the caller's endpoints only matter for `custom`.
pub fn synthesize_handlers(
    archetype: Archetype,
    endpoints: &[EndpointSpec],
    database_enabled: bool,
) -> Result<String, GenerationError> {
    let renderer = TeraTemplateRenderer::shared()?;

    let (template, context) = match archetype {
        Archetype::Basic => (BASIC_HANDLERS, RenderContext::new()),
        Archetype::Crud if database_enabled => (CRUD_DATABASE_HANDLERS, RenderContext::new()),
        Archetype::Crud => (CRUD_MEMORY_HANDLERS, RenderContext::new()),
        Archetype::Auth => (AUTH_HANDLERS, RenderContext::new()),
        Archetype::Custom => {
            let endpoints: Vec<JsonValue> = endpoints.iter().map(build_endpoint_context).collect();
            (
                CUSTOM_HANDLERS,
                RenderContext::new().with("endpoints", json!(endpoints)),
            )
        }
    };

    debug!(
        archetype = %archetype,
        template = template,
        declared_endpoints = endpoints.len(),
        database_enabled,
        "Synthesizing endpoint handlers"
    );

    renderer.render(template, &context)
}

/// Template context for one generic per-endpoint handler
fn build_endpoint_context(endpoint: &EndpointSpec) -> JsonValue {
    let path = escape_python_string(&endpoint.path);

    let (parameters, default_docstring, response) = match endpoint.method {
        HttpMethod::Get => (
            "",
            "Generated endpoint",
            format!(r#"{{"message": "Hello from {path}"}}"#),
        ),
        HttpMethod::Post => (
            "data: dict",
            "Generated POST endpoint",
            r#"{"message": "Data received", "data": data}"#.to_string(),
        ),
        HttpMethod::Put | HttpMethod::Delete => (
            "",
            "Generated endpoint",
            r#"{"message": "Success"}"#.to_string(),
        ),
    };

    let description = endpoint.description.trim();
    let docstring = if description.is_empty() {
        default_docstring.to_string()
    } else {
        escape_python_string(description)
    };

    json!({
        "decorator": endpoint.method.decorator(),
        "path": path,
        "function_name": path_to_identifier(&endpoint.path, endpoint.method),
        "parameters": parameters,
        "docstring": docstring,
        "response": response,
    })
}
