//! Output services

pub mod filesystem_output;

pub use filesystem_output::FileSystemOutputService;
