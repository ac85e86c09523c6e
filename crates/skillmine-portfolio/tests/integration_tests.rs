//! Integration tests for skillmine-portfolio
//!
//! These tests run a full portfolio scan against an in-memory host and check the
//! written reports.

use skillmine_domain::{Ledger, RepoContext};
use skillmine_extractor::{ExtractorConfig, RepoNameFilter, SignalCatalog};
use skillmine_github::MockHost;
use skillmine_portfolio::{report, PortfolioMiner, ReportFiles, SkillReport};
use std::fs;

const NOW: u64 = 1_750_000_000;

fn miner(host: MockHost, filter: &str) -> PortfolioMiner<MockHost> {
    PortfolioMiner::new(
        host,
        "alice",
        ExtractorConfig::default(),
        RepoNameFilter::parse(filter),
    )
}

#[test]
fn test_one_failing_repository_does_not_abort() {
    // "broken" has no tree under any reference
    let host = MockHost::default()
        .with_repo(RepoContext::new("alice", "r1"))
        .with_repo(RepoContext::new("alice", "broken"))
        .with_repo(RepoContext::new("alice", "r2"))
        .with_tree("r1", "main", &["pyproject.toml"])
        .with_file("r1", "pyproject.toml", "[project]\ndependencies = [\"fastapi\"]\n")
        .with_tree("r2", "main", &["Dockerfile"])
        .with_languages("broken", &[("Python", 1000)]);

    let mut ledger = Ledger::new();
    let summary = miner(host, "").run_at(&mut ledger, NOW).unwrap();

    assert_eq!(summary.scanned, 3);
    assert_eq!(summary.succeeded(), 2);
    assert_eq!(summary.failures.len(), 1);
    assert_eq!(summary.failures[0].repo, "alice/broken");
    assert!(summary.failures[0].error.contains("Tree unavailable"));

    let skills: Vec<String> = ledger.aggregate().into_iter().map(|s| s.skill).collect();
    assert!(skills.contains(&"FastAPI".to_string()));
    assert!(skills.contains(&"Docker".to_string()));
    // Language evidence of the failed scan is discarded with it
    assert_eq!(ledger.admitted_weight("Python", "broken"), 0.0);
}

#[test]
fn test_forks_archived_and_patterns_are_excluded() {
    let mut fork = RepoContext::new("alice", "linux");
    fork.fork = true;
    let mut archived = RepoContext::new("alice", "thesis");
    archived.archived = true;

    let host = MockHost::default()
        .with_repo(fork)
        .with_repo(archived)
        .with_repo(RepoContext::new("alice", "fork-kubernetes"))
        .with_repo(RepoContext::new("alice", "Demo"))
        .with_repo(RepoContext::new("alice", "api"))
        .with_tree("linux", "main", &["Makefile"])
        .with_tree("thesis", "main", &["Makefile"])
        .with_tree("fork-kubernetes", "main", &["Makefile"])
        .with_tree("Demo", "main", &["Makefile"])
        .with_tree("api", "main", &["go.mod"]);

    let mut ledger = Ledger::new();
    let summary = miner(host, "^fork-.*, (demo|playground)$")
        .run_at(&mut ledger, NOW)
        .unwrap();

    assert_eq!(summary.listed, 5);
    assert_eq!(summary.skipped_forks_archived, 2);
    assert_eq!(summary.excluded_by_pattern, 2);
    assert_eq!(summary.scanned, 1);
    assert!(ledger.evidence_for("Makefile").is_empty());
    assert!(ledger.evidence_for("Go").iter().all(|e| e.repo == "api"));
}

#[test]
fn test_same_skill_across_repositories() {
    let host = MockHost::default()
        .with_repo(RepoContext::new("alice", "a"))
        .with_repo(RepoContext::new("alice", "b"))
        .with_tree("a", "main", &["Dockerfile"])
        .with_tree("b", "main", &["Dockerfile", "docker/Dockerfile"]);

    let mut ledger = Ledger::new();
    miner(host, "").run_at(&mut ledger, NOW).unwrap();

    let docker = ledger
        .aggregate()
        .into_iter()
        .find(|s| s.skill == "Docker")
        .unwrap();
    assert_eq!(docker.repos, 2);
    assert!((docker.score - 6.0).abs() < 1e-9);
    assert_eq!(docker.evidence.len(), 3);
    assert_eq!(docker.evidence[0], "- a: File hint: Dockerfile (+2.00)");
}

#[test]
fn test_reports_are_written() {
    let host = MockHost::default()
        .with_repo(RepoContext::new("alice", "r1"))
        .with_repo(RepoContext::new("alice", "r2"))
        .with_tree("r1", "main", &[])
        .with_languages("r1", &[("Python", 1000)])
        .with_tree("r2", "main", &["Dockerfile"]);

    let mut ledger = Ledger::new();
    miner(host, "").run_at(&mut ledger, NOW).unwrap();
    let aggregated = ledger.aggregate();

    let dir = tempfile::tempdir().unwrap();
    let written = report::write_reports(
        dir.path(),
        &ReportFiles::default(),
        &aggregated,
        SignalCatalog::standard(),
    )
    .unwrap();

    assert_eq!(written.markdown, dir.path().join("cv_skills.md"));
    assert_eq!(written.json, dir.path().join("skills.json"));

    let markdown = fs::read_to_string(&written.markdown).unwrap();
    assert!(markdown.contains("**Languages** : Python"));
    assert!(markdown.contains("**DevOps & Cloud** : Docker"));
    assert!(markdown.contains("- r1: Languages (GitHub) (+1.40)"));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&written.json).unwrap()).unwrap();
    assert!(json.get("generated_at").and_then(|v| v.as_str()).is_some());
    let skills = json["skills"].as_array().unwrap();
    assert_eq!(skills.len(), 2);
    for entry in skills {
        for field in ["skill", "score", "repos", "evidence"] {
            assert!(entry.get(field).is_some(), "missing {}", field);
        }
    }

    let parsed: SkillReport = serde_json::from_str(&fs::read_to_string(&written.json).unwrap()).unwrap();
    assert_eq!(parsed.skills[0].skill, "Docker");
    assert_eq!(parsed.skills[0].score, 2.0);
}

#[test]
fn test_empty_reports_are_still_written() {
    let dir = tempfile::tempdir().unwrap();
    let files = ReportFiles {
        markdown_file: "skills.md".to_string(),
        json_file: "export.json".to_string(),
    };
    let target = dir.path().join("out");

    let written = report::write_reports(&target, &files, &[], SignalCatalog::standard()).unwrap();

    assert!(written.markdown.ends_with("out/skills.md"));
    let parsed: SkillReport = serde_json::from_str(&fs::read_to_string(&written.json).unwrap()).unwrap();
    assert!(parsed.skills.is_empty());
}

#[test]
fn test_configured_default_cap_survives_the_merge() {
    let host = MockHost::default()
        .with_repo(RepoContext::new("alice", "infra"))
        .with_tree(
            "infra",
            "main",
            &["Dockerfile", "api/Dockerfile", "web/Dockerfile", "worker/Dockerfile"],
        );
    let config = ExtractorConfig::from_toml("default_cap = 8.0\n").unwrap();
    let mut ledger = config.ledger();
    let miner = PortfolioMiner::new(host, "alice", config, RepoNameFilter::default());

    miner.run_at(&mut ledger, NOW).unwrap();

    assert!((ledger.admitted_weight("Docker", "infra") - 8.0).abs() < 1e-9);
    assert_eq!(ledger.evidence_for("Docker").len(), 4);
}
