//! The scan command: mine a host, aggregate and write the reports.

use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;
use skillmine_domain::{AggregatedSkill, RepoHost};
use skillmine_extractor::{RepoNameFilter, SignalCatalog};
use skillmine_portfolio::{report, PortfolioMiner, ScanSummary, WrittenReports};
use tracing::info;

/// Everything a finished scan produced
#[derive(Debug)]
pub struct ScanOutcome {
    /// Counters of the portfolio pass
    pub summary: ScanSummary,
    /// Ranked skills, as written to the reports
    pub aggregated: Vec<AggregatedSkill>,
    /// Report paths
    pub written: WrittenReports,
}

/// Run a full scan of `username`'s repositories on `host`.
pub fn execute<H>(host: H, username: &str, cli: &Cli, config: &Config) -> Result<ScanOutcome>
where
    H: RepoHost,
    H::Error: std::fmt::Display,
{
    let name_filter = match cli.exclude.as_deref() {
        Some(patterns) => RepoNameFilter::parse(patterns),
        None => RepoNameFilter::default(),
    };
    if !name_filter.is_empty() {
        info!("{} repository exclusion pattern(s) active", name_filter.len());
    }

    let mut ledger = config.scoring.ledger();
    let miner = PortfolioMiner::new(host, username, config.scoring.clone(), name_filter);
    let summary = miner.run(&mut ledger)?;

    let aggregated = ledger.aggregate();
    let written = report::write_reports(
        &cli.output_dir,
        &config.output,
        &aggregated,
        SignalCatalog::standard(),
    )?;

    Ok(ScanOutcome {
        summary,
        aggregated,
        written,
    })
}
