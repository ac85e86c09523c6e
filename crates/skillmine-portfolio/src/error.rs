//! Error types for portfolio operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a portfolio run or a report write
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// The repository listing could not be fetched
    #[error("Listing error: {0}")]
    Listing(String),

    /// Invalid scoring configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A report file could not be written
    #[error("Failed to write {path}: {source}")]
    Io {
        /// Target file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The JSON export could not be serialized
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
