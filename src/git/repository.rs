use crate::error::{IssueDocError, Result};
use git2::Repository as Git2Repo;
use std::path::{Path, PathBuf};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository.
    ///
    /// Fails with `ToolMissing` when no repository can be found from `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)
            .map_err(|e| IssueDocError::tool_missing(format!("Not in a git repository: {}", e)))?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

impl super::BranchSource for Git2Repository {
    fn current_branch(&self) -> Result<String> {
        // HEAD may point at an unborn branch in a fresh repository, so read the
        // symbolic reference itself instead of peeling it.
        let head = self.repo.find_reference("HEAD")?;

        let target = head.symbolic_target().ok_or(IssueDocError::DetachedHead)?;

        Ok(target
            .strip_prefix("refs/heads/")
            .unwrap_or(target)
            .to_string())
    }

    fn project_root(&self) -> Result<PathBuf> {
        self.repo
            .workdir()
            .map(Path::to_path_buf)
            .ok_or_else(|| IssueDocError::tool_missing("Bare repository has no working tree"))
    }
}
