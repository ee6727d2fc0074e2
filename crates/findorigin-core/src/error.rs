//! Error types for findorigin

use thiserror::Error;

/// Result type alias using FindOriginError
pub type Result<T> = std::result::Result<T, FindOriginError>;

/// Error type alias for convenience
pub type Error = FindOriginError;

/// Exit codes for CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const INVALID_INPUT: i32 = 3;
}

/// Main error type for findorigin
#[derive(Debug, Error)]
pub enum FindOriginError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Every failure of a source query: non-2xx status, undecodable model
    /// output, or an exhausted model chain.
    #[error("Source query failed: {0}")]
    SourceQuery(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl FindOriginError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidInput(_) | Self::Config(_) => exit_codes::INVALID_INPUT,
            _ => exit_codes::GENERAL_ERROR,
        }
    }
}
