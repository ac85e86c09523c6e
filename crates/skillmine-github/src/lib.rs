//! Skillmine GitHub client
//!
//! Blocking access to the GitHub REST API, implementing the `RepoHost` trait
//! from `skillmine-domain`.
//!
//! # Example
//!
//! ```no_run
//! use skillmine_domain::RepoHost;
//! use skillmine_github::GitHubClient;
//!
//! let client = GitHubClient::new("alice", "ghp_xxx").expect("Failed to build client");
//! let repos = client.list_repositories().expect("Failed to list repositories");
//! for repo in &repos {
//!     println!("{}", repo.full_name());
//! }
//! ```

#![warn(missing_docs)]

mod client;
mod error;
mod mock;

pub use client::{GitHubClient, API_VERSION, DEFAULT_API_URL};
pub use error::HostError;
pub use mock::MockHost;
