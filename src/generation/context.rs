//! Render context handed to the template engine

use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

/// Variables available to a template while it renders
///
/// Backed by an ordered map so that identical inputs always build
/// identical contexts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderContext {
    pub variables: BTreeMap<String, JsonValue>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable to the render context
    pub fn add_variable(&mut self, key: &str, value: JsonValue) {
        self.variables.insert(key.to_string(), value);
    }

    /// Builder-style variant of [`RenderContext::add_variable`]
    pub fn with(mut self, key: &str, value: JsonValue) -> Self {
        self.add_variable(key, value);
        self
    }

    pub fn to_tera_context(&self) -> tera::Context {
        let mut context = tera::Context::new();
        for (key, value) in &self.variables {
            context.insert(key.as_str(), value);
        }
        context
    }
}
