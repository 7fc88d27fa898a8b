//! Git access for branch resolution
//!
//! The [BranchSource] trait abstracts the little this tool needs from version
//! control: the name of the checked-out branch and the working-tree root.
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! ```rust
//! # use git_issue_doc::git::{resolve_branch, MockRepository};
//! let repo = MockRepository::on_branch("42-improve-caching-layer", "/tmp/project");
//! let parsed = resolve_branch(&repo).unwrap();
//! assert_eq!(parsed.issue_number, "42");
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use std::path::PathBuf;

use crate::domain::ParsedBranch;
use crate::error::{IssueDocError, Result};

/// Sentinel reported for a detached HEAD by `git rev-parse --abbrev-ref HEAD`
pub const DETACHED_SENTINEL: &str = "HEAD";

/// Read-only view of the version-control state
pub trait BranchSource {
    /// Name of the currently checked-out branch (short form, e.g. "42-fix-login")
    ///
    /// # Returns
    /// * `Ok(String)` - The branch name
    /// * `Err(IssueDocError::DetachedHead)` - If HEAD does not point at a branch
    /// * `Err` - If the repository cannot be read
    fn current_branch(&self) -> Result<String>;

    /// Root of the working tree, where the documentation directory lives
    fn project_root(&self) -> Result<PathBuf>;
}

/// Resolve and parse the current branch.
///
/// An empty name or the detached sentinel is reported as `DetachedHead`;
/// anything else must match the issue branch pattern.
pub fn resolve_branch<S: BranchSource + ?Sized>(source: &S) -> Result<ParsedBranch> {
    let name = source.current_branch()?;

    if name.is_empty() || name == DETACHED_SENTINEL {
        return Err(IssueDocError::DetachedHead);
    }

    ParsedBranch::parse(&name)
}
