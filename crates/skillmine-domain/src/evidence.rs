//! Evidence records

/// A single weighted observation that a repository demonstrates a skill
#[derive(Debug, Clone, PartialEq)]
pub struct Evidence {
    /// Canonical skill name (e.g., "Docker", "Python")
    pub skill: String,

    /// Repository the observation comes from
    pub repo: String,

    /// Admitted weight, already clamped by the ledger caps
    pub weight: f64,

    /// Human-readable justification (e.g., "File hint: Dockerfile")
    pub reason: String,
}

impl Evidence {
    /// Create a new evidence record
    pub fn new(
        skill: impl Into<String>,
        repo: impl Into<String>,
        weight: f64,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            skill: skill.into(),
            repo: repo.into(),
            weight,
            reason: reason.into(),
        }
    }

    /// Citation line used in reports
    pub fn line(&self) -> String {
        format!("- {}: {} (+{:.2})", self.repo, self.reason, self.weight)
    }
}
