//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Username or token missing
    #[error("GITHUB_USERNAME and GITHUB_TOKEN must be set, in the environment, a .env file or with --username/--token")]
    MissingCredentials,

    /// Scan or report error
    #[error("Portfolio error: {0}")]
    Portfolio(#[from] skillmine_portfolio::PortfolioError),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
