//! File-based OpenAPI document loader
//!
//! This loader handles file I/O and format detection only. Operation
//! extraction is done by the [`OpenApiParser`](super::OpenApiParser).

use std::path::Path;

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use tokio::fs;
use tracing::debug;

use crate::generation::{GenerationError, OpenApiLoader, SpecDocument};

/// Loads OpenAPI documents from local YAML or JSON files
pub struct FileOpenApiLoader;

impl FileOpenApiLoader {
    pub fn new() -> Self {
        Self
    }

    /// Parse document text, choosing the format from the file extension
    pub fn parse_str(source: &Path, content: &str) -> Result<JsonValue, GenerationError> {
        let extension = source
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => serde_json::from_str(content)
                .map_err(|e| GenerationError::load(source, format!("Invalid JSON: {e}"))),
            Some("yaml" | "yml") => serde_yaml::from_str(content)
                .map_err(|e| GenerationError::load(source, format!("Invalid YAML: {e}"))),
            // Try JSON first, then YAML
            _ => serde_json::from_str(content)
                .or_else(|_| serde_yaml::from_str(content))
                .map_err(|e| {
                    GenerationError::load(source, format!("Failed to parse OpenAPI spec: {e}"))
                }),
        }
    }
}

#[async_trait]
impl OpenApiLoader for FileOpenApiLoader {
    async fn load(&self, source: &Path) -> Result<SpecDocument, GenerationError> {
        let content = fs::read_to_string(source)
            .await
            .map_err(|e| GenerationError::load(source, e.to_string()))?;

        let root = Self::parse_str(source, &content)?;
        debug!(source = %source.display(), bytes = content.len(), "Loaded OpenAPI document");

        Ok(SpecDocument {
            source: source.to_path_buf(),
            root,
        })
    }
}

impl Default for FileOpenApiLoader {
    fn default() -> Self {
        Self::new()
    }
}
