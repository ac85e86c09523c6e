//! Path and repository-name filters

use regex::{Regex, RegexBuilder};
use tracing::warn;

/// Directory names whose contents are never scanned (vendored, generated or sample code)
pub const EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    "bower_components",
    "vendor",
    ".venv",
    "venv",
    "env",
    ".env",
    ".git",
    "__pycache__",
    ".ipynb_checkpoints",
    ".mypy_cache",
    ".pytest_cache",
    "dist",
    "build",
    ".next",
    "out",
    "target",
    ".terraform",
    "coverage",
    "site-packages",
    ".cache",
    ".gradle",
    ".idea",
    ".vscode",
    "lib",
    "libs",
    "third_party",
    "third-party",
    "external",
    "externals",
    "sdk",
    "sdks",
    "samples",
    "sample",
    "examples",
    "example",
    "demos",
    "demo",
];

/// Substrings of a lowercased path that mark a vendored file
pub const EXCLUDED_SUBSTRINGS: &[&str] = &[
    "mysql-connector",
    "bootstrap",
    "jquery",
    "three.min.js",
    "minified/",
    "min/",
];

/// True when `path` sits in an excluded directory or looks vendored
///
/// Every segment is checked, so a file literally named `build` is excluded too.
pub fn is_excluded(path: &str) -> bool {
    let lowered = path.to_lowercase();
    if lowered
        .split('/')
        .any(|segment| EXCLUDED_DIRS.contains(&segment))
    {
        return true;
    }
    EXCLUDED_SUBSTRINGS
        .iter()
        .any(|needle| lowered.contains(needle))
}

/// Environment variable read by [`RepoNameFilter::from_env`] callers by default
pub const EXCLUDE_REPOS_VAR: &str = "EXCLUDE_REPOS";

/// Case-insensitive repository name exclusion patterns
#[derive(Debug, Clone, Default)]
pub struct RepoNameFilter {
    patterns: Vec<Regex>,
}

impl RepoNameFilter {
    /// Parse a comma-separated pattern list
    ///
    /// Items are trimmed and empty ones skipped. Invalid patterns are dropped with a warning.
    pub fn parse(raw: &str) -> Self {
        let patterns = raw
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .filter_map(|item| {
                match RegexBuilder::new(item).case_insensitive(true).build() {
                    Ok(re) => Some(re),
                    Err(e) => {
                        warn!("Ignoring invalid exclusion pattern '{}': {}", item, e);
                        None
                    }
                }
            })
            .collect();
        Self { patterns }
    }

    /// Parse the patterns held by an environment variable; unset means no patterns
    pub fn from_env(var: &str) -> Self {
        std::env::var(var)
            .map(|raw| Self::parse(&raw))
            .unwrap_or_default()
    }

    /// True when any pattern matches somewhere in `name`
    pub fn is_excluded(&self, name: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(name))
    }

    /// Number of valid patterns
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// True when no valid pattern was given
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
