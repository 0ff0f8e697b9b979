//! openapi-testgen CLI entrypoint
//! Parses command-line arguments, resolves configuration and runs the generator once.
#![deny(unsafe_code)]

use std::path::PathBuf;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use openapi_testgen::core::config::{ConfigOverrides, GeneratorConfig};
use openapi_testgen::infrastructure::orchestrator_from_config;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "openapi-testgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML config file (defaults to ./openapi-testgen.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Path to the OpenAPI spec (YAML or JSON)
    #[arg(long)]
    spec: Option<PathBuf>,
    /// Path of the generated test file
    #[arg(long)]
    output: Option<PathBuf>,
    /// Crate imported by the generated tests
    #[arg(long)]
    crate_name: Option<String>,
    /// Rust expression that builds the client in each test
    #[arg(long)]
    client_init: Option<String>,
    /// Custom Tera template replacing the embedded one
    #[arg(long)]
    template: Option<PathBuf>,
    /// Fail when two operations share an operationId
    #[arg(long)]
    strict_operation_ids: bool,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            spec_path: self.spec.clone(),
            output_path: self.output.clone(),
            crate_name: self.crate_name.clone(),
            client_init: self.client_init.clone(),
            template_path: self.template.clone(),
            strict_operation_ids: self.strict_operation_ids,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so the summary line is the only stdout output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    info!("Starting openapi-testgen");

    let config = GeneratorConfig::resolve(cli.config.as_deref(), cli.overrides())
        .await
        .context("Failed to resolve configuration")?;

    let orchestrator = orchestrator_from_config(&config)
        .await
        .context("Failed to prepare template")?;

    let report = orchestrator
        .generate(&config)
        .await
        .context("Failed to generate integration tests")?;

    println!("{report}");
    Ok(())
}
