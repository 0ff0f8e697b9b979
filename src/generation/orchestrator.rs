//! Generation orchestration - runs Load → Enumerate → Render → Write once

use std::sync::Arc;

use tracing::{debug, info};

use crate::core::config::GeneratorConfig;
use crate::generation::{
    GenerationError, GenerationReport, OpenApiLoader, OutputService, TemplateRenderer,
    TestFileContext,
};
use crate::infrastructure::openapi::{OpenApiParser, ensure_unique_ids};

/// Coordinates one generation run.
///
/// Nothing is written unless loading, enumeration and rendering all succeed.
pub struct GenerationOrchestrator {
    loader: Arc<dyn OpenApiLoader>,
    renderer: Arc<dyn TemplateRenderer>,
    output: Arc<dyn OutputService>,
}

impl GenerationOrchestrator {
    pub fn new(
        loader: Arc<dyn OpenApiLoader>,
        renderer: Arc<dyn TemplateRenderer>,
        output: Arc<dyn OutputService>,
    ) -> Self {
        Self {
            loader,
            renderer,
            output,
        }
    }

    /// Execute the generation workflow
    pub async fn generate(
        &self,
        config: &GeneratorConfig,
    ) -> Result<GenerationReport, GenerationError> {
        // 1. Load the document
        info!(spec = %config.spec_path.display(), "Loading OpenAPI spec");
        let document = self.loader.load(&config.spec_path).await?;

        // 2. Enumerate operations in document order
        let operations = OpenApiParser::new(&document).parse_operations();
        ensure_unique_ids(&operations, config.strict_operation_ids)?;
        debug!(
            "Orchestrator starting generation with {} operations",
            operations.len()
        );

        // 3. Render
        let context = TestFileContext::new(&operations, config);
        let rendered = self.renderer.render(&context)?;

        // 4. Write in a single pass
        self.output.write(&config.output_path, &rendered).await?;

        let report = GenerationReport {
            output_path: config.output_path.clone(),
            test_count: operations.len(),
        };
        info!(
            output = %report.output_path.display(),
            tests = report.test_count,
            "Generated integration tests"
        );
        Ok(report)
    }
}
