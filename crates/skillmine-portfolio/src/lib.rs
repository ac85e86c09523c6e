//! Skillmine Portfolio
//!
//! Portfolio-wide orchestration: list a user's repositories, scan each eligible
//! one and merge the evidence into a single ledger, then render the reports.
//!
//! # Overview
//!
//! The portfolio layer is responsible for:
//! - **Selection**: forks, archived repositories and names matching an exclusion
//!   pattern are left out, and each reason is counted
//! - **Isolation**: a repository that fails to scan is logged and skipped; only a
//!   failed listing aborts the run
//! - **Merging**: every per-repository ledger is re-added into the caller's ledger,
//!   so caps and deduplication apply again at the merge step
//! - **Reporting**: a categorized Markdown summary with a full evidence appendix and
//!   a JSON export
//!
//! # Usage
//!
//! ```no_run
//! use skillmine_extractor::{ExtractorConfig, RepoNameFilter, SignalCatalog, EXCLUDE_REPOS_VAR};
//! use skillmine_github::GitHubClient;
//! use skillmine_portfolio::{report, PortfolioMiner};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GitHubClient::new("alice", "ghp_xxx")?;
//! let config = ExtractorConfig::default();
//! let mut ledger = config.ledger();
//!
//! let miner = PortfolioMiner::new(client, "alice", config, RepoNameFilter::from_env(EXCLUDE_REPOS_VAR));
//! let summary = miner.run(&mut ledger)?;
//! println!("{}", summary.summary());
//!
//! let aggregated = ledger.aggregate();
//! report::write_reports(
//!     Path::new("."),
//!     &report::ReportFiles::default(),
//!     &aggregated,
//!     SignalCatalog::standard(),
//! )?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod miner;
pub mod report;
mod summary;

pub use error::PortfolioError;
pub use miner::PortfolioMiner;
pub use report::{ReportFiles, SkillEntry, SkillReport, WrittenReports};
pub use summary::{RepoFailure, ScanSummary};
