//! Filesystem-based output service implementation

use std::path::Path;

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::generation::{GenerationError, OutputService};

/// Writes rendered output to the local filesystem
pub struct FileSystemOutputService;

impl FileSystemOutputService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OutputService for FileSystemOutputService {
    async fn write(&self, path: &Path, content: &str) -> Result<(), GenerationError> {
        // Create parent directory if needed
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| GenerationError::output(parent, e))?;
        }

        let mut file = fs::File::create(path)
            .await
            .map_err(|e| GenerationError::output(path, e))?;
        file.write_all(content.as_bytes())
            .await
            .map_err(|e| GenerationError::output(path, e))?;
        file.flush()
            .await
            .map_err(|e| GenerationError::output(path, e))?;

        debug!(path = %path.display(), bytes = content.len(), "Wrote output file");
        Ok(())
    }
}

impl Default for FileSystemOutputService {
    fn default() -> Self {
        Self::new()
    }
}
