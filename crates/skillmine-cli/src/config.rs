//! Configuration file handling for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use skillmine_extractor::ExtractorConfig;
use skillmine_portfolio::ReportFiles;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// CLI configuration.
///
/// ```toml
/// [scoring]
/// language_min_fraction = 0.08
/// default_cap = 5.0
///
/// [scoring.skill_caps]
/// Jupyter = 2.0
///
/// [output]
/// markdown_file = "cv_skills.md"
/// json_file = "skills.json"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scoring parameters
    pub scoring: ExtractorConfig,

    /// Report file names
    pub output: ReportFiles,
}

impl Config {
    /// Default configuration file path: `<config dir>/skillmine/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("skillmine").join("config.toml"))
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.scoring.validate().map_err(CliError::Config)?;
        if config.output.markdown_file.is_empty() || config.output.json_file.is_empty() {
            return Err(CliError::Config("output file names cannot be empty".into()));
        }
        Ok(config)
    }

    /// Load configuration from a file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&contents)
    }

    /// Resolve the configuration: the explicit path, else the default path when it
    /// exists, else built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => {
                debug!("Loading configuration from {}", path.display());
                Self::load_from(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output.markdown_file, "cv_skills.md");
        assert_eq!(config.output.json_file, "skills.json");
        assert_eq!(config.scoring, ExtractorConfig::default());
    }

    #[test]
    fn test_partial_file() {
        let config = Config::from_toml(
            "[scoring]\ndefault_cap = 4.0\n\n[output]\njson_file = \"export.json\"\n",
        )
        .unwrap();
        assert_eq!(config.scoring.default_cap, 4.0);
        assert_eq!(config.scoring.language_base, 0.4);
        assert_eq!(config.output.markdown_file, "cv_skills.md");
        assert_eq!(config.output.json_file, "export.json");
    }

    #[test]
    fn test_skill_caps_table() {
        let config = Config::from_toml("[scoring.skill_caps]\nJupyter = 1.0\nShell = 1.5\n").unwrap();
        assert_eq!(config.scoring.skill_caps.len(), 2);
        assert_eq!(config.scoring.ledger_caps()["Shell"], 1.5);
    }

    #[test]
    fn test_invalid_scoring() {
        let result = Config::from_toml("[scoring]\nlanguage_min_fraction = 2.0\n");
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(Config::from_toml("[scoring"), Err(CliError::Toml(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[output]\nmarkdown_file = \"skills.md\"\n").unwrap();

        let config = Config::resolve(Some(&path)).unwrap();
        assert_eq!(config.output.markdown_file, "skills.md");
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::resolve(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
