//! Core repository extractor

use crate::catalog::SignalCatalog;
use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::filter::is_excluded;
use crate::manifest::{
    package_json_dependencies, pom_artifact_ids, pyproject_dependencies,
    requirements_dependencies,
};
use regex::Regex;
use skillmine_domain::{Ledger, RepoContext, RepoHost};
use std::sync::LazyLock;
use tracing::{debug, info, warn};

/// Weight of a dependency declared in `package.json` or `pyproject.toml`
pub const MANIFEST_DEP_WEIGHT: f64 = 1.8;
/// Weight of a dependency listed in a `requirements*.txt`
pub const REQUIREMENTS_DEP_WEIGHT: f64 = 1.6;
/// Weight of TypeScript inferred from dependencies or a `tsconfig.json`
pub const TYPESCRIPT_WEIGHT: f64 = 0.9;
/// Weight of Angular inferred from `@angular/core`
pub const ANGULAR_WEIGHT: f64 = 1.3;
/// Weight of a build marker file (`go.mod`, `Cargo.toml`, `pom.xml`)
pub const MARKER_WEIGHT: f64 = 1.0;
/// Weight of a Spring Boot artifact in `pom.xml`
pub const SPRING_BOOT_WEIGHT: f64 = 1.2;
/// Weight of a Gradle build file
pub const GRADLE_WEIGHT: f64 = 0.8;
/// Weight of a YAML file that parses as a Kubernetes manifest
pub const K8S_MANIFEST_WEIGHT: f64 = 0.8;

/// Path fragments under which YAML files are probed for Kubernetes manifests
const K8S_LOCATIONS: &[&str] = &["k8s/", "manifests/", "deploy", "charts/", "helm/"];

static API_VERSION_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bapiVersion:\s").expect("valid apiVersion pattern"));
static KIND_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bkind:\s").expect("valid kind pattern"));

/// Turns one repository into a ledger of weighted evidence
///
/// Stateless between calls: every [`RepoExtractor::extract`] returns a fresh ledger
/// that the caller merges into its own.
pub struct RepoExtractor<'a, H: RepoHost> {
    host: &'a H,
    config: &'a ExtractorConfig,
    catalog: &'static SignalCatalog,
}

/// State of one scan
struct Scan<'r> {
    repo: &'r RepoContext,
    reference: String,
    paths: Vec<String>,
    multiplier: f64,
    ledger: Ledger,
}

impl Scan<'_> {
    fn add(&mut self, skill: &str, base_weight: f64, reason: &str) {
        self.ledger
            .add(skill, &self.repo.name, base_weight * self.multiplier, reason);
    }

    fn has_root_file(&self, name: &str) -> bool {
        self.paths.iter().any(|p| p == name)
    }

    fn has_file_named(&self, names: &[&str]) -> bool {
        self.paths
            .iter()
            .any(|p| names.contains(&file_name(p)))
    }
}

fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

impl<'a, H> RepoExtractor<'a, H>
where
    H: RepoHost,
    H::Error: std::fmt::Display,
{
    /// Create an extractor over a host with the standard signal catalog
    pub fn new(host: &'a H, config: &'a ExtractorConfig) -> Self {
        Self {
            host,
            config,
            catalog: SignalCatalog::standard(),
        }
    }

    /// Scan one repository
    ///
    /// `now` is the current time in Unix seconds, used for the recency factor.
    /// Only a tree that cannot be fetched under any reference is an error; every
    /// other failure degrades to missing evidence.
    pub fn extract(&self, repo: &RepoContext, now: u64) -> Result<Ledger, ExtractorError> {
        self.config.validate().map_err(ExtractorError::Config)?;

        let multiplier = repo.multiplier(now);
        info!(
            "Scanning {} (multiplier {:.3})",
            repo.full_name(),
            multiplier
        );

        let mut ledger = self.config.ledger();
        self.language_signals(repo, multiplier, &mut ledger);

        let (reference, paths) = self.fetch_tree(repo)?;
        let mut scan = Scan {
            repo,
            reference,
            paths,
            multiplier,
            ledger,
        };
        debug!(
            "{}: {} candidate paths at '{}'",
            repo.name,
            scan.paths.len(),
            scan.reference
        );

        self.file_hints(&mut scan);
        self.package_json(&mut scan);
        self.pyproject(&mut scan);
        self.requirements(&mut scan);
        self.build_markers(&mut scan);
        self.kubernetes_manifests(&mut scan);

        info!(
            "{}: evidence for {} skills",
            repo.name,
            scan.ledger.skill_count()
        );
        Ok(scan.ledger)
    }

    fn language_signals(&self, repo: &RepoContext, multiplier: f64, ledger: &mut Ledger) {
        let histogram = match self.host.languages(&repo.owner, &repo.name) {
            Ok(h) => h,
            Err(e) => {
                warn!("Languages unavailable for {}: {}", repo.full_name(), e);
                return;
            }
        };

        let total: u64 = histogram.iter().map(|(_, bytes)| bytes).sum();
        if total == 0 {
            return;
        }

        for (language, bytes) in &histogram {
            let fraction = *bytes as f64 / total as f64;
            if fraction < self.config.language_min_fraction {
                continue;
            }
            let Some(skill) = self.catalog.language_skill(language) else {
                continue;
            };
            let weight = self.config.language_base + self.config.language_slope * fraction;
            ledger.add(skill, &repo.name, weight * multiplier, "Languages (GitHub)");
        }
    }

    /// Candidate references: the default branch, then each fallback, without repeats
    fn candidate_refs(&self, repo: &RepoContext) -> Vec<String> {
        let mut refs: Vec<String> = Vec::new();
        let candidates = std::iter::once(&repo.default_branch).chain(&self.config.fallback_refs);
        for reference in candidates {
            if !reference.is_empty() && !refs.contains(reference) {
                refs.push(reference.clone());
            }
        }
        refs
    }

    /// First tree that lists, as `(reference, blob paths not excluded)`
    fn fetch_tree(&self, repo: &RepoContext) -> Result<(String, Vec<String>), ExtractorError> {
        let mut last_error = String::from("no reference to try");
        for reference in self.candidate_refs(repo) {
            match self.host.tree(&repo.owner, &repo.name, &reference) {
                Ok(entries) => {
                    let paths = entries
                        .into_iter()
                        .filter(|e| e.is_blob())
                        .map(|e| e.path)
                        .filter(|p| !is_excluded(p))
                        .collect();
                    return Ok((reference, paths));
                }
                Err(e) => {
                    debug!("No tree for {} at '{}': {}", repo.full_name(), reference, e);
                    last_error = e.to_string();
                }
            }
        }
        Err(ExtractorError::TreeUnavailable {
            repo: repo.full_name(),
            reason: last_error,
        })
    }

    /// File content at the scan reference; fetch errors and empty files read as `None`
    fn read(&self, scan: &Scan<'_>, path: &str) -> Option<String> {
        match self
            .host
            .file_content(&scan.repo.owner, &scan.repo.name, path, &scan.reference)
        {
            Ok(Some(content)) if !content.is_empty() => Some(content),
            Ok(_) => None,
            Err(e) => {
                warn!("Could not read {} in {}: {}", path, scan.repo.full_name(), e);
                None
            }
        }
    }

    fn file_hints(&self, scan: &mut Scan<'_>) {
        let mut hits = Vec::new();
        for path in &scan.paths {
            for hint in self.catalog.matching_hints(path) {
                if hint.weight > 0.0 {
                    hits.push((hint.skill, hint.weight, format!("File hint: {}", path)));
                }
            }
        }
        for (skill, weight, reason) in hits {
            scan.add(skill, weight, &reason);
        }
    }

    fn package_json(&self, scan: &mut Scan<'_>) {
        if !scan.has_root_file("package.json") {
            return;
        }
        let Some(content) = self.read(scan, "package.json") else {
            return;
        };
        let Some(deps) = package_json_dependencies(&content) else {
            debug!("{}: package.json is not valid JSON", scan.repo.name);
            return;
        };
        for dep in &deps {
            if let Some(skill) = self.catalog.npm_skill(dep) {
                scan.add(skill, MANIFEST_DEP_WEIGHT, &format!("package.json dep: {}", dep));
            }
        }

        let has = |name: &str| deps.iter().any(|d| d == name);
        if has("typescript") || scan.has_file_named(&["tsconfig.json"]) {
            scan.add("TypeScript", TYPESCRIPT_WEIGHT, "TypeScript config/deps");
        }
        if has("@angular/core") {
            scan.add("Angular", ANGULAR_WEIGHT, "Angular deps");
        }
    }

    fn pyproject(&self, scan: &mut Scan<'_>) {
        if !scan.has_root_file("pyproject.toml") {
            return;
        }
        let Some(content) = self.read(scan, "pyproject.toml") else {
            return;
        };
        for dep in pyproject_dependencies(&content) {
            if let Some(skill) = self.catalog.python_skill(&dep) {
                scan.add(skill, MANIFEST_DEP_WEIGHT, &format!("pyproject dep: {}", dep));
            }
        }
    }

    fn requirements(&self, scan: &mut Scan<'_>) {
        let files: Vec<String> = scan
            .paths
            .iter()
            .filter(|p| !p.contains('/'))
            .filter(|p| {
                let lowered = p.to_lowercase();
                lowered.starts_with("requirements") && lowered.ends_with(".txt")
            })
            .cloned()
            .collect();

        for path in files {
            let Some(content) = self.read(scan, &path) else {
                continue;
            };
            for dep in requirements_dependencies(&content) {
                if let Some(skill) = self.catalog.python_skill(&dep) {
                    scan.add(skill, REQUIREMENTS_DEP_WEIGHT, &format!("requirements: {}", dep));
                }
            }
        }
    }

    fn build_markers(&self, scan: &mut Scan<'_>) {
        if scan.has_file_named(&["go.mod"]) {
            scan.add("Go", MARKER_WEIGHT, "go.mod present");
        }
        if scan.has_file_named(&["Cargo.toml"]) {
            scan.add("Rust", MARKER_WEIGHT, "Cargo.toml present");
        }
        if scan.has_file_named(&["pom.xml"]) {
            scan.add("Java", MARKER_WEIGHT, "pom.xml present");
            if scan.has_root_file("pom.xml") {
                if let Some(content) = self.read(scan, "pom.xml") {
                    if pom_artifact_ids(&content)
                        .iter()
                        .any(|id| id.contains("spring-boot"))
                    {
                        scan.add("Spring Boot", SPRING_BOOT_WEIGHT, "pom.xml dep spring-boot");
                    }
                }
            }
        }
        if scan.has_file_named(&["build.gradle", "build.gradle.kts"]) {
            scan.add("Java", GRADLE_WEIGHT, "Gradle present");
        }
    }

    fn kubernetes_manifests(&self, scan: &mut Scan<'_>) {
        let candidates: Vec<String> = scan
            .paths
            .iter()
            .filter(|p| {
                let lowered = p.to_lowercase();
                (lowered.ends_with(".yaml") || lowered.ends_with(".yml"))
                    && K8S_LOCATIONS.iter().any(|loc| lowered.contains(loc))
            })
            .cloned()
            .collect();

        for path in candidates {
            let Some(content) = self.read(scan, &path) else {
                continue;
            };
            if API_VERSION_KEY.is_match(&content) && KIND_KEY.is_match(&content) {
                scan.add("Kubernetes", K8S_MANIFEST_WEIGHT, &format!("K8s manifest: {}", path));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("a/b/go.mod"), "go.mod");
        assert_eq!(file_name("go.mod"), "go.mod");
    }

    #[test]
    fn test_k8s_content_patterns() {
        assert!(API_VERSION_KEY.is_match("apiVersion: v1\n"));
        assert!(KIND_KEY.is_match("kind: Service\n"));
        assert!(!KIND_KEY.is_match("kind:Service"));
        assert!(!API_VERSION_KEY.is_match("myapiVersion: v1"));
    }
}
