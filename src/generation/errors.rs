//! Error types for the generation pipeline

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can abort a generation run
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Failed to load OpenAPI spec {}: {reason}", .path.display())]
    LoadError { path: PathBuf, reason: String },

    #[error("Failed to write {}: {source}", .path.display())]
    OutputWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Render error: {0}")]
    RenderError(String),

    #[error(
        "Duplicate test name '{test_name}': operationId '{first_id}' on {first} and '{second_id}' on {second}"
    )]
    DuplicateOperationId {
        test_name: String,
        first_id: String,
        second_id: String,
        first: String,
        second: String,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl GenerationError {
    pub(crate) fn load<S: Into<String>>(path: impl Into<PathBuf>, reason: S) -> Self {
        Self::LoadError {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputWriteError {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_load_error_display() {
        let error = GenerationError::load("openapi.yaml", "No such file or directory");
        assert_eq!(
            error.to_string(),
            "Failed to load OpenAPI spec openapi.yaml: No such file or directory"
        );
    }

    #[test]
    fn test_output_error_keeps_source() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let error = GenerationError::output("tests/integration.rs", io_error);
        assert!(error.to_string().contains("tests/integration.rs"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_duplicate_operation_id_display() {
        let error = GenerationError::DuplicateOperationId {
            test_name: "test_list_models".to_string(),
            first_id: "listModels".to_string(),
            second_id: "list_models".to_string(),
            first: "GET /models".to_string(),
            second: "GET /v2/models".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Duplicate test name 'test_list_models': operationId 'listModels' on GET /models \
             and 'list_models' on GET /v2/models"
        );
    }
}
