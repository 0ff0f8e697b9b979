//! Template rendering

pub mod template_renderer;

pub use template_renderer::{EMBEDDED_TEMPLATE, TeraTemplateRenderer};
