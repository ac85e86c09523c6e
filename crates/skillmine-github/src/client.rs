//! GitHub REST client implementation.

use crate::error::HostError;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use chrono::DateTime;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use skillmine_domain::{EntryKind, RepoContext, RepoHost, TreeEntry};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Default GitHub API endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Pinned REST API version
pub const API_VERSION: &str = "2022-11-28";

/// Timeout for a single request (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Page size for repository listings
pub const PER_PAGE: usize = 100;

/// Pause between listing pages
pub const PAGE_DELAY_MS: u64 = 100;

const ERROR_BODY_LIMIT: usize = 200;

/// Which listing endpoint to page through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListingScope {
    /// `/user/repos`: private repositories included, needs the `repo` scope
    Authenticated,
    /// `/users/{username}/repos`: public repositories only
    Public,
}

/// Repository as returned by the listing endpoints
#[derive(Debug, Clone, Deserialize)]
struct ApiRepository {
    name: String,
    owner: ApiOwner,
    #[serde(default)]
    default_branch: Option<String>,
    #[serde(default)]
    pushed_at: Option<String>,
    #[serde(default)]
    stargazers_count: u64,
    #[serde(default)]
    forks_count: u64,
    #[serde(default)]
    fork: bool,
    #[serde(default)]
    archived: bool,
}

#[derive(Debug, Clone, Deserialize)]
struct ApiOwner {
    login: String,
}

/// Recursive tree response
#[derive(Debug, Clone, Deserialize)]
struct ApiTree {
    #[serde(default)]
    tree: Vec<ApiTreeEntry>,
    #[serde(default)]
    truncated: bool,
}

#[derive(Debug, Clone, Deserialize)]
struct ApiTreeEntry {
    path: String,
    #[serde(rename = "type")]
    kind: String,
}

impl From<ApiRepository> for RepoContext {
    fn from(repo: ApiRepository) -> Self {
        RepoContext {
            name: repo.name,
            owner: repo.owner.login,
            default_branch: repo.default_branch.unwrap_or_else(|| "main".to_string()),
            pushed_at: repo.pushed_at.as_deref().and_then(parse_timestamp),
            stargazers_count: repo.stargazers_count,
            forks_count: repo.forks_count,
            fork: repo.fork,
            archived: repo.archived,
        }
    }
}

impl From<ApiTreeEntry> for TreeEntry {
    fn from(entry: ApiTreeEntry) -> Self {
        let kind = match entry.kind.as_str() {
            "blob" => EntryKind::Blob,
            "tree" => EntryKind::Tree,
            _ => EntryKind::Other,
        };
        TreeEntry {
            path: entry.path,
            kind,
        }
    }
}

/// Blocking GitHub REST client
///
/// Every call blocks the calling thread; reads are bounded by the client timeout.
pub struct GitHubClient {
    base_url: Url,
    username: String,
    token: String,
    http: Client,
    page_delay: Duration,
}

impl GitHubClient {
    /// Create a client for `api.github.com` using Basic authentication
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Result<Self, HostError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(concat!("skillmine/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| HostError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: parse_base_url(DEFAULT_API_URL)?,
            username: username.into(),
            token: token.into(),
            http,
            page_delay: Duration::from_millis(PAGE_DELAY_MS),
        })
    }

    /// Point the client at another API root (GitHub Enterprise, test servers)
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, HostError> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    /// Override the pause between listing pages
    pub fn with_page_delay(mut self, delay: Duration) -> Self {
        self.page_delay = delay;
        self
    }

    /// Username the client authenticates as
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Build an endpoint URL from path segments
    ///
    /// Each segment may itself contain `/` (file paths, branch names); it is
    /// split so the slashes stay literal.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, HostError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| HostError::Config(format!("Base URL cannot be a base: {}", self.base_url)))?;
            path.pop_if_empty();
            for segment in segments {
                path.extend(segment.split('/').filter(|s| !s.is_empty()));
            }
        }
        Ok(url)
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, HostError> {
        debug!("GET {}", url);

        let response = self
            .http
            .get(url.clone())
            .basic_auth(&self.username, Some(&self.token))
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(HostError::Status {
                status: status.as_u16(),
                url: url.to_string(),
                body: truncate(&body, ERROR_BODY_LIMIT),
            });
        }

        Ok(response.json()?)
    }

    fn list_pages(&self, scope: ListingScope) -> Result<Vec<RepoContext>, HostError> {
        let mut repos = Vec::new();
        let mut page = 1usize;

        loop {
            let mut url = match scope {
                ListingScope::Authenticated => self.endpoint(&["user", "repos"])?,
                ListingScope::Public => self.endpoint(&["users", &self.username, "repos"])?,
            };
            url.query_pairs_mut()
                .append_pair("per_page", &PER_PAGE.to_string())
                .append_pair("page", &page.to_string());

            let batch: Vec<ApiRepository> = self.get_json(url)?;
            let batch_len = batch.len();
            repos.extend(batch.into_iter().map(RepoContext::from));

            if batch_len < PER_PAGE {
                break;
            }
            page += 1;
            std::thread::sleep(self.page_delay);
        }

        Ok(repos)
    }
}

impl RepoHost for GitHubClient {
    type Error = HostError;

    /// Private listing first, public listing when the token lacks the scope
    fn list_repositories(&self) -> Result<Vec<RepoContext>, HostError> {
        match self.list_pages(ListingScope::Authenticated) {
            Err(e) if e.is_access_denied() => {
                warn!("Token cannot list /user/repos ({}), falling back to public repositories", e);
                self.list_pages(ListingScope::Public)
            }
            Ok(repos) => {
                info!("Listed {} repositories", repos.len());
                Ok(repos)
            }
            Err(e) => Err(e),
        }
    }

    fn tree(&self, owner: &str, repo: &str, reference: &str) -> Result<Vec<TreeEntry>, HostError> {
        let mut url = self.endpoint(&["repos", owner, repo, "git", "trees", reference])?;
        url.query_pairs_mut().append_pair("recursive", "1");

        let tree: ApiTree = self.get_json(url)?;
        if tree.truncated {
            warn!("Tree listing for {}/{}@{} was truncated by the API", owner, repo, reference);
        }
        Ok(tree.tree.into_iter().map(TreeEntry::from).collect())
    }

    fn file_content(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        reference: &str,
    ) -> Result<Option<String>, HostError> {
        let mut url = self.endpoint(&["repos", owner, repo, "contents", path])?;
        url.query_pairs_mut().append_pair("ref", reference);

        match self.get_json::<Value>(url) {
            Ok(value) => Ok(decode_content(&value)),
            Err(HostError::Status { status, .. }) => {
                debug!("No content for {}/{}:{} (HTTP {})", owner, repo, path, status);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn languages(&self, owner: &str, repo: &str) -> Result<Vec<(String, u64)>, HostError> {
        let url = self.endpoint(&["repos", owner, repo, "languages"])?;
        let histogram: serde_json::Map<String, Value> = self.get_json(url)?;
        Ok(parse_languages(histogram))
    }
}

fn parse_base_url(raw: &str) -> Result<Url, HostError> {
    Url::parse(raw).map_err(|e| HostError::Config(format!("Invalid API URL '{}': {}", raw, e)))
}

/// RFC 3339 timestamp to seconds since the epoch; pre-epoch dates are dropped
pub(crate) fn parse_timestamp(raw: &str) -> Option<u64> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .and_then(|dt| u64::try_from(dt.timestamp()).ok())
}

/// Contents API payload to text
///
/// Base64 payloads carry embedded newlines; anything that is not an object with
/// a string `content` yields `None`.
pub(crate) fn decode_content(value: &Value) -> Option<String> {
    let object = value.as_object()?;
    let content = object.get("content")?.as_str()?;

    match object.get("encoding").and_then(Value::as_str) {
        Some("base64") => {
            let compact: String = content.chars().filter(|c| !c.is_whitespace()).collect();
            BASE64_STANDARD
                .decode(compact)
                .ok()
                .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        }
        _ => Some(content.to_string()),
    }
}

pub(crate) fn parse_languages(histogram: serde_json::Map<String, Value>) -> Vec<(String, u64)> {
    histogram
        .into_iter()
        .filter_map(|(language, bytes)| bytes.as_u64().map(|b| (language, b)))
        .collect()
}

fn truncate(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}
