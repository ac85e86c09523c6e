//! Skillmine Domain Layer
//!
//! This crate contains the scoring model for Skillmine. It has ZERO runtime
//! dependencies and defines the fundamental concepts, value objects, and trait
//! interfaces that all other crates depend upon.
//!
//! ## Key Concepts
//!
//! - **Evidence**: One weighted, justified observation that a repository demonstrates a skill
//! - **Ledger**: The capping, deduplicating store that aggregates evidence into a ranking
//! - **RepoContext**: Read-only snapshot of a repository, source of the recency and popularity multipliers
//! - **RepoHost**: The boundary to the repository hosting API
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure scoring logic only
//! - HTTP, manifest parsing and rendering live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod evidence;
pub mod ledger;
pub mod repository;
pub mod traits;

// Re-exports for convenience
pub use evidence::Evidence;
pub use ledger::{AggregatedSkill, Ledger, DEFAULT_CAP};
pub use repository::{EntryKind, RepoContext, TreeEntry};
pub use traits::RepoHost;
