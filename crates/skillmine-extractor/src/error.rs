//! Error types for the extractor

use thiserror::Error;

/// Errors that abort the scan of one repository
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// No candidate reference produced a tree listing
    #[error("Tree unavailable for {repo}: {reason}")]
    TreeUnavailable {
        /// `owner/name`
        repo: String,
        /// Error from the last reference tried
        reason: String,
    },

    /// Invalid scoring configuration
    #[error("Configuration error: {0}")]
    Config(String),
}
