//! Embedded template repository implementation
//!
//! All FastAPI scaffold templates live under `templates/` and are compiled
//! into the binary with `rust-embed`, so generation never touches the
//! filesystem.

use rust_embed::RustEmbed;
use tracing::debug;

use crate::generation::GenerationError;

/// Container for all templates embedded at compile time
#[derive(RustEmbed)]
#[folder = "templates/"]
struct EmbeddedTemplates;

/// Template repository backed by embedded templates
pub struct EmbeddedTemplateRepository;

impl EmbeddedTemplateRepository {
    pub fn new() -> Self {
        Self
    }

    /// Sorted names of every embedded template
    pub fn template_names(&self) -> Vec<String> {
        let mut names: Vec<String> = EmbeddedTemplates::iter()
            .map(|path| path.into_owned())
            .collect();
        names.sort();
        names
    }

    /// Contents of a single template
    pub fn get(&self, name: &str) -> Result<String, GenerationError> {
        let file = EmbeddedTemplates::get(name)
            .ok_or_else(|| GenerationError::TemplateNotFound(name.to_string()))?;

        String::from_utf8(file.data.into_owned()).map_err(|e| {
            GenerationError::RenderError(format!("Template '{name}' is not valid UTF-8: {e}"))
        })
    }

    /// Every template as a `(name, content)` pair, sorted by name
    pub fn load_all(&self) -> Result<Vec<(String, String)>, GenerationError> {
        let templates = self
            .template_names()
            .into_iter()
            .map(|name| {
                let content = self.get(&name)?;
                Ok((name, content))
            })
            .collect::<Result<Vec<_>, GenerationError>>()?;

        debug!(count = templates.len(), "Loaded embedded templates");
        Ok(templates)
    }
}

impl Default for EmbeddedTemplateRepository {
    fn default() -> Self {
        Self::new()
    }
}
