//! Render context - the data handed to the test template

use serde::Serialize;
use tracing::warn;

use crate::core::config::GeneratorConfig;
use crate::core::utils::{rust_identifier, to_snake_case};
use crate::generation::{GenerationError, HttpMethod, Operation, Parameter};

/// Name written into the generated file header
pub const GENERATOR_NAME: &str = concat!("openapi-testgen ", env!("CARGO_PKG_VERSION"));

/// Template view of one parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestParamContext {
    /// Name as declared in the document
    pub name: String,
    /// Rust binding used in the placeholder and the call
    pub ident: String,
    pub rust_type: String,
}

/// Template view of one operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestCaseContext {
    pub operation_id: String,
    /// snake_case form of the operation id, used for the test and client method names
    pub fn_name: String,
    pub path: String,
    pub method: HttpMethod,
    pub parameters: Vec<TestParamContext>,
    /// Parameter idents joined with `, ` in declaration order
    pub call_args: String,
    pub has_request_body: bool,
}

/// Everything the test file template can reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestFileContext {
    pub generator: String,
    pub crate_name: String,
    pub client_init: String,
    pub operations: Vec<TestCaseContext>,
}

impl TestParamContext {
    fn from_parameter(param: &Parameter) -> Self {
        Self {
            name: param.name.clone(),
            ident: rust_identifier(&param.name),
            rust_type: param.inferred_type.rust_type(),
        }
    }
}

impl TestCaseContext {
    pub fn from_operation(op: &Operation) -> Self {
        let parameters: Vec<TestParamContext> = op
            .parameters
            .iter()
            .map(TestParamContext::from_parameter)
            .collect();
        for (index, param) in parameters.iter().enumerate() {
            if let Some(earlier) = parameters[..index].iter().find(|p| p.ident == param.ident) {
                warn!(
                    operation_id = %op.id,
                    ident = %param.ident,
                    first = %earlier.name,
                    second = %param.name,
                    "Parameters share a Rust binding name; the generated call repeats it"
                );
            }
        }
        let call_args = parameters
            .iter()
            .map(|p| p.ident.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            operation_id: op.id.clone(),
            fn_name: rust_identifier(&op.id),
            path: op.path.clone(),
            method: op.method,
            parameters,
            call_args,
            has_request_body: op.has_request_body,
        }
    }
}

impl TestFileContext {
    /// Build the context for `operations`, keeping their order
    pub fn new(operations: &[Operation], config: &GeneratorConfig) -> Self {
        Self {
            generator: GENERATOR_NAME.to_string(),
            crate_name: to_snake_case(&config.crate_name),
            client_init: config.client_init.clone(),
            operations: operations
                .iter()
                .map(TestCaseContext::from_operation)
                .collect(),
        }
    }

    pub fn to_tera_context(&self) -> Result<tera::Context, GenerationError> {
        tera::Context::from_serialize(self).map_err(|e| {
            GenerationError::RenderError(format!("Failed to build template context: {e}"))
        })
    }
}
