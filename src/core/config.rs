//! Generator configuration
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! command-line overrides.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::generation::GenerationError;

/// Config file picked up from the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "openapi-testgen.toml";
pub const DEFAULT_SPEC_PATH: &str = "openapi.yaml";
pub const DEFAULT_OUTPUT_PATH: &str = "tests/integration.rs";
pub const DEFAULT_CRATE_NAME: &str = "api_client";
pub const DEFAULT_CLIENT_INIT: &str = r#"Client::from_env().expect("API key not set")"#;

/// Settings for one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// OpenAPI document to read (YAML or JSON)
    pub spec_path: PathBuf,
    /// Generated test file to write
    pub output_path: PathBuf,
    /// Crate whose `prelude` the generated tests import
    pub crate_name: String,
    /// Rust expression that constructs the client inside each test
    pub client_init: String,
    /// Tera template replacing the embedded one
    pub template_path: Option<PathBuf>,
    /// Fail instead of warning when two operations share an `operationId`
    pub strict_operation_ids: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            spec_path: PathBuf::from(DEFAULT_SPEC_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            crate_name: DEFAULT_CRATE_NAME.to_string(),
            client_init: DEFAULT_CLIENT_INIT.to_string(),
            template_path: None,
            strict_operation_ids: false,
        }
    }
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub spec_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub crate_name: Option<String>,
    pub client_init: Option<String>,
    pub template_path: Option<PathBuf>,
    /// Only ever switches strict mode on
    pub strict_operation_ids: bool,
}

impl GeneratorConfig {
    /// Parse a TOML config document
    pub fn from_toml_str(content: &str) -> Result<Self, GenerationError> {
        toml::from_str(content)
            .map_err(|e| GenerationError::InvalidConfiguration(format!("Invalid config: {e}")))
    }

    /// Read and parse a TOML config file
    pub async fn from_file(path: &Path) -> Result<Self, GenerationError> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            GenerationError::InvalidConfiguration(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Build the effective configuration.
    ///
    /// An explicit config path must exist. Without one, [`DEFAULT_CONFIG_FILE`]
    /// is used when present in the working directory.
    pub async fn resolve(
        explicit: Option<&Path>,
        overrides: ConfigOverrides,
    ) -> Result<Self, GenerationError> {
        Self::resolve_with_default(explicit, Path::new(DEFAULT_CONFIG_FILE), overrides).await
    }

    async fn resolve_with_default(
        explicit: Option<&Path>,
        default_path: &Path,
        overrides: ConfigOverrides,
    ) -> Result<Self, GenerationError> {
        let base = match explicit {
            Some(path) => {
                debug!(path = %path.display(), "Loading config file");
                Self::from_file(path).await?
            }
            None => {
                let exists = tokio::fs::try_exists(default_path).await.map_err(|e| {
                    GenerationError::InvalidConfiguration(format!(
                        "Failed to check config file {}: {e}",
                        default_path.display()
                    ))
                })?;
                if exists {
                    debug!(path = %default_path.display(), "Loading default config file");
                    Self::from_file(default_path).await?
                } else {
                    Self::default()
                }
            }
        };

        Ok(base.with_overrides(overrides))
    }

    /// Apply command-line overrides on top of this configuration
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(spec_path) = overrides.spec_path {
            self.spec_path = spec_path;
        }
        if let Some(output_path) = overrides.output_path {
            self.output_path = output_path;
        }
        if let Some(crate_name) = overrides.crate_name {
            self.crate_name = crate_name;
        }
        if let Some(client_init) = overrides.client_init {
            self.client_init = client_init;
        }
        if overrides.template_path.is_some() {
            self.template_path = overrides.template_path;
        }
        self.strict_operation_ids |= overrides.strict_operation_ids;
        self
    }
}
