//! Counters collected during a portfolio run

/// A repository whose scan failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoFailure {
    /// `owner/name`
    pub repo: String,
    /// Rendered error
    pub error: String,
}

/// Outcome of one [`crate::PortfolioMiner::run`]
///
/// `scanned` counts every attempted repository, failed ones included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Repositories returned by the listing
    pub listed: usize,

    /// Forks and archived repositories left out
    pub skipped_forks_archived: usize,

    /// Repositories matching an exclusion pattern
    pub excluded_by_pattern: usize,

    /// Repositories handed to the extractor
    pub scanned: usize,

    /// Scans that failed, in scan order
    pub failures: Vec<RepoFailure>,
}

impl ScanSummary {
    /// Create an empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failed scan
    pub fn record_failure(&mut self, repo: impl Into<String>, error: impl Into<String>) {
        self.failures.push(RepoFailure {
            repo: repo.into(),
            error: error.into(),
        });
    }

    /// Scans that produced a ledger
    pub fn succeeded(&self) -> usize {
        self.scanned.saturating_sub(self.failures.len())
    }

    /// One-paragraph human-readable report
    pub fn summary(&self) -> String {
        let mut text = format!(
            "Listed {} repositories: {} forks/archived skipped, {} excluded by pattern, {} scanned ({} succeeded, {} failed).",
            self.listed,
            self.skipped_forks_archived,
            self.excluded_by_pattern,
            self.scanned,
            self.succeeded(),
            self.failures.len()
        );
        if !self.failures.is_empty() {
            let names: Vec<&str> = self.failures.iter().map(|f| f.repo.as_str()).collect();
            text.push_str(&format!(" Failed: {}.", names.join(", ")));
        }
        text
    }
}
