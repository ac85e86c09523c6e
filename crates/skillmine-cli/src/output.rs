//! Terminal output formatting for the CLI.

use colored::*;
use skillmine_domain::AggregatedSkill;
use skillmine_portfolio::{ScanSummary, WrittenReports};
use tabled::{
    builder::Builder,
    settings::{object::Columns, object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Top `limit` skills as a table.
    pub fn skills_table(&self, skills: &[AggregatedSkill], limit: usize) -> String {
        if skills.is_empty() || limit == 0 {
            return self.warning("No skill could be inferred.");
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Skill", "Score", "Repos", "Evidence"]);

        for (rank, skill) in skills.iter().take(limit).enumerate() {
            builder.push_record([
                (rank + 1).to_string(),
                skill.skill.clone(),
                format!("{:.2}", skill.score),
                skill.repos.to_string(),
                skill.evidence.len().to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()))
            .with(Modify::new(Columns::new(2..)).with(Alignment::right()));

        let mut out = table.to_string();
        if skills.len() > limit {
            out.push('\n');
            out.push_str(&self.info(&format!(
                "{} more skill(s) in the reports",
                skills.len() - limit
            )));
        }
        out
    }

    /// Scan counters, with one line per failed repository.
    pub fn scan_summary(&self, summary: &ScanSummary) -> String {
        let mut lines = vec![self.info(&summary.summary())];
        for failure in &summary.failures {
            lines.push(self.warning(&format!("{}: {}", failure.repo, failure.error)));
        }
        lines.join("\n")
    }

    /// Paths of the written reports.
    pub fn reports_written(&self, written: &WrittenReports) -> String {
        self.success(&format!(
            "Generated {} & {}",
            written.markdown.display(),
            written.json.display()
        ))
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
