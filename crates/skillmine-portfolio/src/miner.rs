//! Portfolio-wide scan

use crate::{PortfolioError, ScanSummary};
use skillmine_domain::{Ledger, RepoContext, RepoHost};
use skillmine_extractor::{ExtractorConfig, RepoExtractor, RepoNameFilter};
use tracing::{info, warn};

/// Current timestamp in seconds since Unix epoch
fn current_timestamp() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp()).unwrap_or(0)
}

/// Scans every eligible repository of a user into one ledger
///
/// # Examples
///
/// ```
/// use skillmine_domain::{Ledger, RepoContext};
/// use skillmine_extractor::{ExtractorConfig, RepoNameFilter};
/// use skillmine_github::MockHost;
/// use skillmine_portfolio::PortfolioMiner;
///
/// let host = MockHost::default()
///     .with_repo(RepoContext::new("alice", "api"))
///     .with_tree("api", "main", &["Dockerfile"]);
/// let miner = PortfolioMiner::new(host, "alice", ExtractorConfig::default(), RepoNameFilter::default());
///
/// let mut ledger = Ledger::new();
/// let summary = miner.run(&mut ledger).unwrap();
/// assert_eq!(summary.scanned, 1);
/// assert_eq!(ledger.aggregate()[0].skill, "Docker");
/// ```
pub struct PortfolioMiner<H: RepoHost> {
    host: H,
    username: String,
    config: ExtractorConfig,
    name_filter: RepoNameFilter,
}

impl<H> PortfolioMiner<H>
where
    H: RepoHost,
    H::Error: std::fmt::Display,
{
    /// Create a miner over a host
    pub fn new(
        host: H,
        username: impl Into<String>,
        config: ExtractorConfig,
        name_filter: RepoNameFilter,
    ) -> Self {
        Self {
            host,
            username: username.into(),
            config,
            name_filter,
        }
    }

    /// Hosting API in use
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Scoring configuration in use
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Scan every eligible repository, merging evidence into `ledger`
    pub fn run(&self, ledger: &mut Ledger) -> Result<ScanSummary, PortfolioError> {
        self.run_at(ledger, current_timestamp())
    }

    /// [`PortfolioMiner::run`] with an explicit clock, in Unix seconds
    ///
    /// Only a failed listing or an invalid configuration is an error. A failed
    /// repository is logged, recorded in the summary and skipped.
    pub fn run_at(&self, ledger: &mut Ledger, now: u64) -> Result<ScanSummary, PortfolioError> {
        self.config.validate().map_err(PortfolioError::Config)?;

        info!("Listing repositories for {}", self.username);
        let listed = self
            .host
            .list_repositories()
            .map_err(|e| PortfolioError::Listing(e.to_string()))?;

        let mut summary = ScanSummary::new();
        summary.listed = listed.len();

        let candidates = self.select(listed, &mut summary);
        if summary.excluded_by_pattern > 0 {
            info!(
                "Exclusion patterns removed {} repositories",
                summary.excluded_by_pattern
            );
        }
        if candidates.is_empty() {
            warn!("No repository left to scan after filtering");
            return Ok(summary);
        }
        info!("{} repositories to scan", candidates.len());

        let extractor = RepoExtractor::new(&self.host, &self.config);
        for repo in &candidates {
            summary.scanned += 1;
            match extractor.extract(repo, now) {
                Ok(repo_ledger) => ledger.merge_from(&repo_ledger),
                Err(e) => {
                    warn!("Skipping {}: {}", repo.full_name(), e);
                    summary.record_failure(repo.full_name(), e.to_string());
                }
            }
        }

        info!("{}", summary.summary());
        Ok(summary)
    }

    /// Drop forks, archived repositories and excluded names, counting each
    fn select(&self, listed: Vec<RepoContext>, summary: &mut ScanSummary) -> Vec<RepoContext> {
        let mut candidates = Vec::with_capacity(listed.len());
        for repo in listed {
            if repo.fork || repo.archived {
                summary.skipped_forks_archived += 1;
            } else if self.name_filter.is_excluded(&repo.name) {
                summary.excluded_by_pattern += 1;
            } else {
                candidates.push(repo);
            }
        }
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillmine_github::MockHost;

    const NOW: u64 = 1_750_000_000;

    fn repo(name: &str) -> RepoContext {
        RepoContext::new("alice", name)
    }

    #[test]
    fn test_select_counts_each_reason() {
        let mut fork = repo("forked");
        fork.fork = true;
        let mut archived = repo("old");
        archived.archived = true;

        let host = MockHost::default()
            .with_repo(fork)
            .with_repo(archived)
            .with_repo(repo("playground"))
            .with_repo(repo("api"))
            .with_tree("api", "main", &["Dockerfile"]);
        let miner = PortfolioMiner::new(
            host,
            "alice",
            ExtractorConfig::default(),
            RepoNameFilter::parse("playground"),
        );

        let mut ledger = Ledger::new();
        let summary = miner.run_at(&mut ledger, NOW).unwrap();

        assert_eq!(summary.listed, 4);
        assert_eq!(summary.skipped_forks_archived, 2);
        assert_eq!(summary.excluded_by_pattern, 1);
        assert_eq!(summary.scanned, 1);
        assert!(summary.failures.is_empty());
    }

    #[test]
    fn test_listing_failure_is_fatal() {
        let host = MockHost::default().failing_listing(500);
        let miner = PortfolioMiner::new(
            host,
            "alice",
            ExtractorConfig::default(),
            RepoNameFilter::default(),
        );
        let result = miner.run_at(&mut Ledger::new(), NOW);
        assert!(matches!(result, Err(PortfolioError::Listing(_))));
    }

    #[test]
    fn test_invalid_config_is_fatal() {
        let config = ExtractorConfig {
            language_min_fraction: -0.1,
            ..ExtractorConfig::default()
        };
        let miner = PortfolioMiner::new(
            MockHost::default(),
            "alice",
            config,
            RepoNameFilter::default(),
        );
        let result = miner.run_at(&mut Ledger::new(), NOW);
        assert!(matches!(result, Err(PortfolioError::Config(_))));
    }

    #[test]
    fn test_configured_fallback_refs_are_used() {
        let config = ExtractorConfig {
            fallback_refs: vec!["trunk".to_string()],
            ..ExtractorConfig::default()
        };
        let host = MockHost::default()
            .with_repo(repo("legacy").with_default_branch("develop"))
            .with_tree("legacy", "trunk", &["Makefile"]);
        let miner = PortfolioMiner::new(host, "alice", config, RepoNameFilter::default());

        let mut ledger = Ledger::new();
        let summary = miner.run_at(&mut ledger, NOW).unwrap();

        assert_eq!(summary.succeeded(), 1);
        assert_eq!(miner.config().fallback_refs, vec!["trunk"]);
        assert_eq!(miner.host().tree_requests(), vec!["develop", "trunk"]);
        assert_eq!(ledger.evidence_for("Makefile").len(), 1);
    }

    #[test]
    fn test_nothing_to_scan() {
        let miner = PortfolioMiner::new(
            MockHost::default(),
            "alice",
            ExtractorConfig::default(),
            RepoNameFilter::default(),
        );
        let mut ledger = Ledger::new();
        let summary = miner.run_at(&mut ledger, NOW).unwrap();
        assert_eq!(summary.scanned, 0);
        assert!(ledger.is_empty());
    }
}
