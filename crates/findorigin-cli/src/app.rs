//! CLI argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "findorigin")]
#[command(
    author,
    version,
    about = "Find where a piece of text came from"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract claims, dates, numbers, names and links
    Extract(TextArgs),

    /// Print the search query built from extracted entities
    Query(TextArgs),

    /// Ask the completion service for likely sources
    Find(FindArgs),

    /// List the model fallback chain
    Models,
}

#[derive(Args)]
pub struct TextArgs {
    /// Text to analyze (read from stdin when omitted)
    pub text: Vec<String>,
}

#[derive(Args)]
pub struct FindArgs {
    /// Text to analyze (read from stdin when omitted)
    pub text: Vec<String>,

    /// API key for the completion service
    #[arg(long, env = "FINDORIGIN_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model identifier to try, in order (repeatable; replaces the configured chain)
    #[arg(long = "model")]
    pub models: Vec<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Cli,
    Json,
    Md,
    Html,
}
