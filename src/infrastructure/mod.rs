//! Infrastructure layer - concrete implementations of domain ports

pub mod factory;
pub mod generation;
pub mod openapi;
pub mod output;

pub use factory::{orchestrator_from_config, select_renderer};
pub use generation::TeraTemplateRenderer;
pub use openapi::FileOpenApiLoader;
pub use output::FileSystemOutputService;
