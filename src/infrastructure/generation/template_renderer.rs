//! Tera-based template renderer implementation

use once_cell::sync::OnceCell;
use tera::Tera;

use crate::generation::{GenerationError, RenderContext};
use crate::infrastructure::templates::EmbeddedTemplateRepository;

static SHARED_RENDERER: OnceCell<TeraTemplateRenderer> = OnceCell::new();

/// Tera-based template renderer over the embedded template set
pub struct TeraTemplateRenderer {
    tera: Tera,
}

impl TeraTemplateRenderer {
    /// Build a renderer from the embedded templates
    pub fn from_embedded() -> Result<Self, GenerationError> {
        let templates = EmbeddedTemplateRepository::new().load_all()?;

        let mut tera = Tera::default();
        // Output is Python, Docker and plain text, never HTML
        tera.autoescape_on(vec![]);
        tera.add_raw_templates(templates)
            .map_err(|e| GenerationError::RenderError(format!("Failed to add templates: {e}")))?;

        Ok(Self { tera })
    }

    /// Process-wide renderer, built on first use
    pub fn shared() -> Result<&'static Self, GenerationError> {
        SHARED_RENDERER.get_or_try_init(Self::from_embedded)
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }

    /// Render a single template with the given context
    pub fn render(&self, name: &str, context: &RenderContext) -> Result<String, GenerationError> {
        if !self.has_template(name) {
            return Err(GenerationError::TemplateNotFound(name.to_string()));
        }

        self.tera
            .render(name, &context.to_tera_context())
            .map_err(|e| {
                GenerationError::RenderError(format!("Failed to render template '{name}': {e}"))
            })
    }
}
