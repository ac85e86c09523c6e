//! In-memory hosting API for tests and offline runs.

use crate::error::HostError;
use skillmine_domain::{RepoContext, RepoHost, TreeEntry};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

/// Deterministic [`RepoHost`] backed by in-memory tables
///
/// Repositories are keyed by name; the owner is ignored. A file registered for a
/// repository is served under every reference.
///
/// # Examples
///
/// ```
/// use skillmine_domain::{RepoContext, RepoHost};
/// use skillmine_github::MockHost;
///
/// let host = MockHost::default()
///     .with_repo(RepoContext::new("alice", "demo"))
///     .with_tree("demo", "main", &["Dockerfile"])
///     .with_file("demo", "Dockerfile", "FROM alpine");
///
/// let tree = host.tree("alice", "demo", "main").unwrap();
/// assert_eq!(tree[0].path, "Dockerfile");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHost {
    repos: Vec<RepoContext>,
    trees: HashMap<(String, String), Vec<TreeEntry>>,
    files: HashMap<(String, String), String>,
    languages: HashMap<String, Vec<(String, u64)>>,
    failing_languages: HashSet<String>,
    listing_error: Option<u16>,
    tree_requests: RefCell<Vec<String>>,
}

impl MockHost {
    /// Register a repository in the listing
    pub fn with_repo(mut self, repo: RepoContext) -> Self {
        self.repos.push(repo);
        self
    }

    /// Register a tree of blobs at a reference
    pub fn with_tree(mut self, repo: &str, reference: &str, paths: &[&str]) -> Self {
        let entries = paths.iter().map(|p| TreeEntry::blob(*p)).collect();
        self.trees
            .insert((repo.to_string(), reference.to_string()), entries);
        self
    }

    /// Register a tree with explicit entries
    pub fn with_tree_entries(mut self, repo: &str, reference: &str, entries: Vec<TreeEntry>) -> Self {
        self.trees
            .insert((repo.to_string(), reference.to_string()), entries);
        self
    }

    /// Register file content
    pub fn with_file(mut self, repo: &str, path: &str, content: impl Into<String>) -> Self {
        self.files
            .insert((repo.to_string(), path.to_string()), content.into());
        self
    }

    /// Register a language histogram
    pub fn with_languages(mut self, repo: &str, histogram: &[(&str, u64)]) -> Self {
        let histogram = histogram
            .iter()
            .map(|(lang, bytes)| (lang.to_string(), *bytes))
            .collect();
        self.languages.insert(repo.to_string(), histogram);
        self
    }

    /// Make the languages endpoint fail for a repository
    pub fn failing_languages(mut self, repo: &str) -> Self {
        self.failing_languages.insert(repo.to_string());
        self
    }

    /// Make the listing fail with an HTTP status
    pub fn failing_listing(mut self, status: u16) -> Self {
        self.listing_error = Some(status);
        self
    }

    /// References requested through [`RepoHost::tree`], in call order
    pub fn tree_requests(&self) -> Vec<String> {
        self.tree_requests.borrow().clone()
    }
}

impl RepoHost for MockHost {
    type Error = HostError;

    fn list_repositories(&self) -> Result<Vec<RepoContext>, HostError> {
        if let Some(status) = self.listing_error {
            return Err(HostError::Status {
                status,
                url: "mock://user/repos".to_string(),
                body: String::new(),
            });
        }
        Ok(self.repos.clone())
    }

    fn tree(&self, _owner: &str, repo: &str, reference: &str) -> Result<Vec<TreeEntry>, HostError> {
        self.tree_requests.borrow_mut().push(reference.to_string());
        self.trees
            .get(&(repo.to_string(), reference.to_string()))
            .cloned()
            .ok_or_else(|| HostError::NotFound(format!("tree {}@{}", repo, reference)))
    }

    fn file_content(
        &self,
        _owner: &str,
        repo: &str,
        path: &str,
        _reference: &str,
    ) -> Result<Option<String>, HostError> {
        Ok(self.files.get(&(repo.to_string(), path.to_string())).cloned())
    }

    fn languages(&self, _owner: &str, repo: &str) -> Result<Vec<(String, u64)>, HostError> {
        if self.failing_languages.contains(repo) {
            return Err(HostError::Status {
                status: 500,
                url: format!("mock://repos/{}/languages", repo),
                body: String::new(),
            });
        }
        Ok(self.languages.get(repo).cloned().unwrap_or_default())
    }
}
