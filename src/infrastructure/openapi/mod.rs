//! OpenAPI loading and operation extraction

pub mod file_loader;
pub mod parser;

pub use file_loader::FileOpenApiLoader;
pub use parser::{OpenApiParser, ensure_unique_ids};
