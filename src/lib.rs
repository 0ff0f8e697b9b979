//! openapi-testgen
//!
//! Generates skeleton integration tests from an OpenAPI specification. The
//! pipeline loads the document, enumerates every operation that carries an
//! `operationId`, maps parameter schemas to Rust types, renders the embedded
//! Tera template and writes a single test file.
#![deny(unsafe_code)]

pub mod core;
pub mod generation;
pub mod infrastructure;

pub use crate::core::config::GeneratorConfig;
pub use generation::{
    GenerationError, GenerationOrchestrator, GenerationReport, HttpMethod, InferredType,
    Operation, Parameter,
};
