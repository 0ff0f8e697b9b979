//! Shared building blocks: configuration and identifier utilities.

pub mod config;
pub mod utils;
