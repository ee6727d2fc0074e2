//! FindOrigin CLI
//!
//! Find the likely origin of a piece of text.

use anyhow::Result;
use clap::Parser;
use findorigin_core::error::exit_codes;
use findorigin_core::{Config, FindOriginError};
use tracing_subscriber::EnvFilter;

mod app;
mod commands;
mod output;

use app::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays parseable
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        let code = e
            .downcast_ref::<FindOriginError>()
            .map(FindOriginError::exit_code)
            .unwrap_or(exit_codes::GENERAL_ERROR);
        std::process::exit(code);
    }
}

async fn run(cli: Cli) -> Result<()> {
    // Use FINDORIGIN_CONFIG if set, otherwise the default config path
    let config_path = std::env::var("FINDORIGIN_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| Config::default_path());
    let config = Config::load_from(&config_path)?;

    match cli.command {
        Commands::Extract(args) => commands::extract::run(args, cli.format).await,
        Commands::Query(args) => commands::extract::run_query(args).await,
        Commands::Find(args) => commands::find::run(args, &config, cli.format, cli.verbose).await,
        Commands::Models => commands::models::run(&config, cli.format).await,
    }
}
