//! Wiring of the filesystem adapters into a ready orchestrator

use std::sync::Arc;

use crate::core::config::GeneratorConfig;
use crate::generation::{GenerationError, GenerationOrchestrator, TemplateRenderer};

use super::{FileOpenApiLoader, FileSystemOutputService, TeraTemplateRenderer};

/// Embedded template unless `template_path` names a custom one
pub async fn select_renderer(
    config: &GeneratorConfig,
) -> Result<Arc<dyn TemplateRenderer>, GenerationError> {
    let renderer = match &config.template_path {
        Some(path) => TeraTemplateRenderer::from_file(path).await?,
        None => TeraTemplateRenderer::embedded()?,
    };
    Ok(Arc::new(renderer))
}

/// Filesystem loader and writer around the renderer chosen by [`select_renderer`]
pub async fn orchestrator_from_config(
    config: &GeneratorConfig,
) -> Result<GenerationOrchestrator, GenerationError> {
    Ok(GenerationOrchestrator::new(
        Arc::new(FileOpenApiLoader::new()),
        select_renderer(config).await?,
        Arc::new(FileSystemOutputService::new()),
    ))
}
