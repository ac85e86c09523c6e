//! Configuration for the repository extractor

use serde::{Deserialize, Serialize};
use skillmine_domain::{Ledger, DEFAULT_CAP};
use std::collections::{BTreeMap, HashMap};

/// Scoring parameters for [`crate::RepoExtractor`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Minimum share of a repository's code bytes for a language to count
    pub language_min_fraction: f64,

    /// Weight of a language right at the threshold
    pub language_base: f64,

    /// Additional weight per unit of byte share
    pub language_slope: f64,

    /// Ceiling of the cumulated weight per (skill, repository)
    pub default_cap: f64,

    /// References tried after the default branch when fetching the tree
    pub fallback_refs: Vec<String>,

    /// Per-skill ceilings tighter than `default_cap`
    pub skill_caps: BTreeMap<String, f64>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            language_min_fraction: 0.08,
            language_base: 0.4,
            language_slope: 1.0,
            default_cap: DEFAULT_CAP,
            fallback_refs: vec!["main".into(), "master".into(), "HEAD".into()],
            skill_caps: BTreeMap::from([("Jupyter".to_string(), 2.0)]),
        }
    }
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.language_min_fraction) {
            return Err("language_min_fraction must be between 0 and 1".to_string());
        }
        if self.language_base.is_nan() || self.language_base < 0.0 {
            return Err("language_base cannot be negative".to_string());
        }
        if self.language_slope.is_nan() || self.language_slope < 0.0 {
            return Err("language_slope cannot be negative".to_string());
        }
        if self.default_cap.is_nan() || self.default_cap <= 0.0 {
            return Err("default_cap must be greater than 0".to_string());
        }
        if let Some((skill, _)) = self
            .skill_caps
            .iter()
            .find(|(_, cap)| cap.is_nan() || **cap <= 0.0)
        {
            return Err(format!("cap for skill '{}' must be greater than 0", skill));
        }
        Ok(())
    }

    /// Per-skill caps in the form the ledger expects
    pub fn ledger_caps(&self) -> HashMap<String, f64> {
        self.skill_caps
            .iter()
            .map(|(skill, cap)| (skill.clone(), *cap))
            .collect()
    }

    /// Empty ledger capped by `default_cap` and `skill_caps`
    pub fn ledger(&self) -> Ledger {
        Ledger::with_caps(self.default_cap, self.ledger_caps())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
