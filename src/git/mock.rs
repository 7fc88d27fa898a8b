use crate::error::{IssueDocError, Result};
use crate::git::BranchSource;
use std::path::PathBuf;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    branch: Option<String>,
    root: PathBuf,
}

impl MockRepository {
    /// A repository with `branch` checked out
    pub fn on_branch(branch: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        MockRepository {
            branch: Some(branch.into()),
            root: root.into(),
        }
    }

    /// A repository whose HEAD is detached
    pub fn detached(root: impl Into<PathBuf>) -> Self {
        MockRepository {
            branch: None,
            root: root.into(),
        }
    }
}

impl BranchSource for MockRepository {
    fn current_branch(&self) -> Result<String> {
        self.branch.clone().ok_or(IssueDocError::DetachedHead)
    }

    fn project_root(&self) -> Result<PathBuf> {
        Ok(self.root.clone())
    }
}
