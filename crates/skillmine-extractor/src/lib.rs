//! Skillmine Extractor
//!
//! Turns one repository into weighted, justified skill evidence.
//!
//! # Overview
//!
//! A scan combines several independent signals, each namespaced by the reason it
//! records:
//!
//! - **Languages**: byte share per language from the hosting API, above a threshold
//! - **File hints**: path rules from the [`SignalCatalog`]
//! - **Manifests**: `package.json`, `pyproject.toml`, `requirements*.txt`, `pom.xml`
//! - **Build markers**: `go.mod`, `Cargo.toml`, Gradle files
//! - **Kubernetes**: YAML under deployment paths carrying `apiVersion` and `kind`
//!
//! Every weight is scaled by the repository's recency and popularity multiplier,
//! then admitted through the capping [`Ledger`](skillmine_domain::Ledger).
//!
//! # Architecture
//!
//! ```text
//! RepoHost → RepoExtractor → per-repository Ledger → caller merges
//! ```
//!
//! # Example Usage
//!
//! ```
//! use skillmine_domain::RepoContext;
//! use skillmine_extractor::{ExtractorConfig, RepoExtractor};
//! use skillmine_github::MockHost;
//!
//! let host = MockHost::default()
//!     .with_tree("api", "main", &["Dockerfile", "go.mod"]);
//! let config = ExtractorConfig::default();
//!
//! let extractor = RepoExtractor::new(&host, &config);
//! let ledger = extractor
//!     .extract(&RepoContext::new("alice", "api"), 1_750_000_000)
//!     .expect("tree is available");
//!
//! for skill in ledger.aggregate() {
//!     println!("{}: {:.2}", skill.skill, skill.score);
//! }
//! ```

#![warn(missing_docs)]

mod catalog;
mod config;
mod error;
mod extractor;
mod filter;
pub mod manifest;


pub use catalog::{map_language, FileHint, SignalCatalog};
pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::{
    RepoExtractor, ANGULAR_WEIGHT, GRADLE_WEIGHT, K8S_MANIFEST_WEIGHT, MANIFEST_DEP_WEIGHT,
    MARKER_WEIGHT, REQUIREMENTS_DEP_WEIGHT, SPRING_BOOT_WEIGHT, TYPESCRIPT_WEIGHT,
};
pub use filter::{is_excluded, RepoNameFilter, EXCLUDED_DIRS, EXCLUDED_SUBSTRINGS, EXCLUDE_REPOS_VAR};
