//! Port interfaces for the generation pipeline

use std::path::Path;

use async_trait::async_trait;

use crate::generation::{GenerationError, SpecDocument, TestFileContext};

/// Loads an OpenAPI document into an order-preserving tree
#[async_trait]
pub trait OpenApiLoader: Send + Sync {
    async fn load(&self, source: &Path) -> Result<SpecDocument, GenerationError>;
}

/// Renders the test file text from the prepared context
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, context: &TestFileContext) -> Result<String, GenerationError>;
}

/// Persists rendered output
#[async_trait]
pub trait OutputService: Send + Sync {
    /// Write `content` to `path` in full, creating parent directories
    async fn write(&self, path: &Path, content: &str) -> Result<(), GenerationError>;
}
