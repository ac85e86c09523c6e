//! Markdown and JSON reports
//!
//! Both artifacts are rendered from one aggregated ranking. The Markdown report
//! groups skills by catalog category and ends with an uncollapsed appendix citing
//! every admitted piece of evidence; the JSON export carries the same data in a
//! structured form.

use crate::PortfolioError;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use skillmine_domain::AggregatedSkill;
use skillmine_extractor::SignalCatalog;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Skills shown per category line
pub const CATEGORY_TOP_N: usize = 12;
/// Skills shown on the "Other" line
pub const OTHER_TOP_N: usize = 20;

const HEADING: &str = "## Skills demonstrated by my repositories";
const OTHER_CATEGORY: &str = "Other";

/// One skill in the JSON export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillEntry {
    /// Canonical skill name
    pub skill: String,
    /// Total score rounded to two decimals
    pub score: f64,
    /// Distinct contributing repositories
    pub repos: usize,
    /// Every citation line
    pub evidence: Vec<String>,
}

/// The JSON export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillReport {
    /// Generation time, RFC 3339
    pub generated_at: String,
    /// Skills in ranking order
    pub skills: Vec<SkillEntry>,
}

impl SkillReport {
    /// Build the export from a ranking
    pub fn new(aggregated: &[AggregatedSkill], generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            skills: aggregated
                .iter()
                .map(|s| SkillEntry {
                    skill: s.skill.clone(),
                    score: round2(s.score),
                    repos: s.repos,
                    evidence: s.evidence.clone(),
                })
                .collect(),
        }
    }

    /// Pretty-printed JSON; non-ASCII characters are kept as-is
    pub fn to_json(&self) -> Result<String, PortfolioError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Output file names, relative to the output directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportFiles {
    /// Markdown report file name
    pub markdown_file: String,
    /// JSON export file name
    pub json_file: String,
}

impl Default for ReportFiles {
    fn default() -> Self {
        Self {
            markdown_file: "cv_skills.md".to_string(),
            json_file: "skills.json".to_string(),
        }
    }
}

/// Paths of the files written by [`write_reports`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenReports {
    /// Markdown report
    pub markdown: PathBuf,
    /// JSON export
    pub json: PathBuf,
}

/// Top `n` names by descending score; ties keep ranking order
fn top_names<'a>(mut skills: Vec<(&'a str, f64)>, n: usize) -> Vec<&'a str> {
    skills.sort_by(|a, b| b.1.total_cmp(&a.1));
    skills.into_iter().take(n).map(|(name, _)| name).collect()
}

/// Render the Markdown report
pub fn render_markdown(aggregated: &[AggregatedSkill], catalog: &SignalCatalog) -> String {
    let categories = catalog.categories();
    let mut grouped: Vec<Vec<(&str, f64)>> = vec![Vec::new(); categories.len()];
    let mut others: Vec<(&str, f64)> = Vec::new();

    for skill in aggregated {
        let slot = categories
            .iter()
            .position(|(_, members)| members.contains(&skill.skill.as_str()));
        match slot {
            Some(i) => grouped[i].push((skill.skill.as_str(), skill.score)),
            None => others.push((skill.skill.as_str(), skill.score)),
        }
    }

    let mut lines = vec![HEADING.to_string()];
    for ((category, _), skills) in categories.iter().zip(grouped) {
        let names = top_names(skills, CATEGORY_TOP_N);
        if !names.is_empty() {
            lines.push(format!("**{}** : {}", category, names.join(", ")));
        }
    }
    let names = top_names(others, OTHER_TOP_N);
    if !names.is_empty() {
        lines.push(format!("**{}** : {}", OTHER_CATEGORY, names.join(", ")));
    }

    lines.push("\n<details open><summary><strong>Full evidence (all)</strong></summary>\n".to_string());
    for skill in aggregated {
        lines.push(format!(
            "\n### {}  \nTotal score: {:.2} • Distinct repos: {}",
            skill.skill, skill.score, skill.repos
        ));
        lines.extend(skill.evidence.iter().cloned());
    }
    lines.push("\n</details>\n".to_string());

    lines.join("\n")
}

fn write_file(path: &Path, contents: &str) -> Result<(), PortfolioError> {
    fs::write(path, contents).map_err(|source| PortfolioError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Write both reports into `dir`, creating it when missing
///
/// Reports are written even for an empty ranking.
pub fn write_reports(
    dir: &Path,
    files: &ReportFiles,
    aggregated: &[AggregatedSkill],
    catalog: &SignalCatalog,
) -> Result<WrittenReports, PortfolioError> {
    if aggregated.is_empty() {
        warn!("No skill could be inferred; writing empty reports");
    }

    fs::create_dir_all(dir).map_err(|source| PortfolioError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let written = WrittenReports {
        markdown: dir.join(&files.markdown_file),
        json: dir.join(&files.json_file),
    };

    write_file(&written.markdown, &render_markdown(aggregated, catalog))?;
    let report = SkillReport::new(aggregated, Utc::now());
    write_file(&written.json, &report.to_json()?)?;

    info!(
        "Generated {} and {}",
        written.markdown.display(),
        written.json.display()
    );
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn skill(name: &str, score: f64, repos: usize) -> AggregatedSkill {
        AggregatedSkill {
            skill: name.to_string(),
            score,
            repos,
            evidence: vec![format!("- r1: File hint: {} (+{:.2})", name, score)],
        }
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.23456), 1.23);
        assert_eq!(round2(2.005_1), 2.01);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_report_fields() {
        let at = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let report = SkillReport::new(&[skill("Python", 3.14259, 2)], at);

        assert_eq!(report.generated_at, "2025-06-01T12:00:00Z");
        assert_eq!(report.skills[0].score, 3.14);
        assert_eq!(report.skills[0].repos, 2);
        assert_eq!(report.skills[0].evidence.len(), 1);
    }

    #[test]
    fn test_json_keeps_non_ascii() {
        let at = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let report = SkillReport::new(&[skill("Café", 1.0, 1)], at);
        let json = report.to_json().unwrap();
        assert!(json.contains("Café"));
        assert!(json.contains("\"generated_at\""));
    }

    #[test]
    fn test_markdown_groups_by_category() {
        let aggregated = vec![
            skill("Docker", 6.0, 2),
            skill("Python", 4.0, 2),
            skill("GraphQL", 2.0, 1),
            skill("Rust", 1.0, 1),
        ];
        let doc = render_markdown(&aggregated, SignalCatalog::standard());

        assert!(doc.starts_with(HEADING));
        assert!(doc.contains("**Languages** : Python, Rust"));
        assert!(doc.contains("**DevOps & Cloud** : Docker"));
        assert!(doc.contains("**Other** : GraphQL"));
        assert!(doc.contains("<details open>"));
        assert!(doc.contains("### Docker  \nTotal score: 6.00 • Distinct repos: 2"));
        assert!(doc.contains("- r1: File hint: Rust (+1.00)"));
        assert!(doc.trim_end().ends_with("</details>"));
    }

    #[test]
    fn test_category_line_is_truncated() {
        let names = [
            "Python", "TypeScript", "JavaScript", "Go", "Java", "C", "C++", "C#", "Rust", "Scala",
            "Kotlin", "PHP", "Ruby",
        ];
        let aggregated: Vec<_> = names
            .iter()
            .enumerate()
            .map(|(i, n)| skill(n, 20.0 - i as f64, 1))
            .collect();
        let doc = render_markdown(&aggregated, SignalCatalog::standard());

        let line = doc
            .lines()
            .find(|l| l.starts_with("**Languages**"))
            .unwrap();
        assert_eq!(line.split(", ").count(), CATEGORY_TOP_N);
        assert!(!line.contains("Ruby"));
        // The appendix is never truncated
        assert!(doc.contains("### Ruby"));
    }

    #[test]
    fn test_empty_markdown() {
        let doc = render_markdown(&[], SignalCatalog::standard());
        assert!(doc.starts_with(HEADING));
        assert!(!doc.contains("**"));
        assert!(doc.contains("</details>"));
    }
}
