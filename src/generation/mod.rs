//! Generation domain module - drives the load, enumerate, render, write pipeline

pub mod context;
pub mod errors;
pub mod orchestrator;
pub mod traits;
pub mod type_mapper;
pub mod types;

pub use context::*;
pub use errors::*;
pub use orchestrator::*;
pub use traits::*;
pub use type_mapper::infer_type;
pub use types::*;
