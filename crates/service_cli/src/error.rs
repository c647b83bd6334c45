//! CLI error types

use infra_random::config::ConfigError;
use infra_random::RandomizeError;
use thiserror::Error;

/// Errors surfaced by the `randomize` command line.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Sampling error: {0}")]
    Randomize(#[from] RandomizeError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
