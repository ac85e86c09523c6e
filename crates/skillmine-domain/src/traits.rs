//! Trait definitions for external interactions
//!
//! These traits define the boundary between the scoring model and the hosting API.
//! Implementations live in other crates.

use crate::{RepoContext, TreeEntry};

/// Read access to a repository hosting service
///
/// Implemented by the infrastructure layer (skillmine-github)
pub trait RepoHost {
    /// Error type for host operations
    type Error;

    /// List every repository visible to the authenticated user
    fn list_repositories(&self) -> Result<Vec<RepoContext>, Self::Error>;

    /// Recursive tree listing at a branch, tag or commit reference
    fn tree(&self, owner: &str, repo: &str, reference: &str) -> Result<Vec<TreeEntry>, Self::Error>;

    /// File content at a reference, `None` when the file cannot be read as text
    fn file_content(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        reference: &str,
    ) -> Result<Option<String>, Self::Error>;

    /// Byte count per language
    fn languages(&self, owner: &str, repo: &str) -> Result<Vec<(String, u64)>, Self::Error>;
}
