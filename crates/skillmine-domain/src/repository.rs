//! Repository snapshot and per-repository multipliers

const SECONDS_PER_DAY: u64 = 86_400;

/// Read-only snapshot of a repository as reported by the hosting API
#[derive(Debug, Clone, PartialEq)]
pub struct RepoContext {
    /// Repository name
    pub name: String,

    /// Owner login
    pub owner: String,

    /// Default branch (e.g., "main")
    pub default_branch: String,

    /// Last push, in seconds since the Unix epoch
    pub pushed_at: Option<u64>,

    /// Star count
    pub stargazers_count: u64,

    /// Fork count
    pub forks_count: u64,

    /// Whether the repository is a fork
    pub fork: bool,

    /// Whether the repository is archived
    pub archived: bool,
}

impl RepoContext {
    /// Create a context with no push date, no stars and "main" as default branch
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owner: owner.into(),
            default_branch: "main".to_string(),
            pushed_at: None,
            stargazers_count: 0,
            forks_count: 0,
            fork: false,
            archived: false,
        }
    }

    /// Set the default branch
    pub fn with_default_branch(mut self, branch: impl Into<String>) -> Self {
        self.default_branch = branch.into();
        self
    }

    /// Set the last push timestamp
    pub fn with_pushed_at(mut self, pushed_at: u64) -> Self {
        self.pushed_at = Some(pushed_at);
        self
    }

    /// Set star and fork counts
    pub fn with_popularity(mut self, stars: u64, forks: u64) -> Self {
        self.stargazers_count = stars;
        self.forks_count = forks;
        self
    }

    /// `owner/name`
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// Whole days between the last push and `now`; a push in the future counts as 0
    pub fn days_since_push(&self, now: u64) -> Option<u64> {
        self.pushed_at
            .map(|pushed| now.saturating_sub(pushed) / SECONDS_PER_DAY)
    }

    /// Step function of days since the last push
    ///
    /// ≤30d → 1.5, ≤180d → 1.3, ≤365d → 1.1, older or unknown → 1.0
    pub fn recency_factor(&self, now: u64) -> f64 {
        match self.days_since_push(now) {
            Some(days) if days <= 30 => 1.5,
            Some(days) if days <= 180 => 1.3,
            Some(days) if days <= 365 => 1.1,
            _ => 1.0,
        }
    }

    /// `1 + min(0.5, log10(1 + stars + 0.5 * forks) / 4)`
    pub fn popularity_factor(&self) -> f64 {
        let reach = 1.0 + self.stargazers_count as f64 + 0.5 * self.forks_count as f64;
        1.0 + (reach.log10() / 4.0).min(0.5)
    }

    /// Combined multiplier applied to every weight emitted for this repository
    pub fn multiplier(&self, now: u64) -> f64 {
        self.recency_factor(now) * self.popularity_factor()
    }
}

/// Kind of a tree entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A file
    Blob,
    /// A directory
    Tree,
    /// Anything else (submodule commits, ...)
    Other,
}

/// One entry of a recursive tree listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    /// Slash-separated path relative to the repository root
    pub path: String,

    /// Entry kind
    pub kind: EntryKind,
}

impl TreeEntry {
    /// Create a blob entry
    pub fn blob(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Blob,
        }
    }

    /// True for files
    pub fn is_blob(&self) -> bool {
        self.kind == EntryKind::Blob
    }
}
