//! Tera-based test file renderer

use std::path::Path;

use tera::Tera;
use tracing::debug;

use crate::generation::{GenerationError, TemplateRenderer, TestFileContext};

/// Template compiled into the binary
pub const EMBEDDED_TEMPLATE: &str = include_str!("../../../templates/integration_tests.rs.tera");

const TEMPLATE_NAME: &str = "integration_tests.rs";

/// Renders the test file through a single Tera template
pub struct TeraTemplateRenderer {
    tera: Tera,
}

impl TeraTemplateRenderer {
    /// Renderer using the embedded template
    pub fn embedded() -> Result<Self, GenerationError> {
        Self::from_source(EMBEDDED_TEMPLATE)
    }

    /// Renderer using template text supplied by the caller
    pub fn from_source(source: &str) -> Result<Self, GenerationError> {
        let mut tera = Tera::default();
        // Generated Rust must keep quotes and angle brackets as written
        tera.autoescape_on(vec![]);
        tera.add_raw_template(TEMPLATE_NAME, source)
            .map_err(|e| GenerationError::RenderError(format!("Failed to add template: {e}")))?;
        Ok(Self { tera })
    }

    /// Renderer using a template file from disk
    pub async fn from_file(path: &Path) -> Result<Self, GenerationError> {
        debug!(path = %path.display(), "Loading custom template");
        let source = tokio::fs::read_to_string(path).await.map_err(|e| {
            GenerationError::RenderError(format!(
                "Failed to read template {}: {e}",
                path.display()
            ))
        })?;
        Self::from_source(&source)
    }
}

impl TemplateRenderer for TeraTemplateRenderer {
    /// Output is trimmed and ends with exactly one newline
    fn render(&self, context: &TestFileContext) -> Result<String, GenerationError> {
        let tera_context = context.to_tera_context()?;
        let rendered = self.tera.render(TEMPLATE_NAME, &tera_context).map_err(|e| {
            GenerationError::RenderError(format!("Failed to render template: {e:?}"))
        })?;

        let mut output = rendered.trim().to_string();
        output.push('\n');
        Ok(output)
    }
}
