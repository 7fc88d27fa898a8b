use thiserror::Error;

/// Unified error type for git-issue-doc operations
#[derive(Error, Debug)]
pub enum IssueDocError {
    #[error("Git repository unavailable: {0}")]
    ToolMissing(String),

    #[error("HEAD is detached; check out an issue branch first")]
    DetachedHead,

    #[error("Branch '{branch}' does not match '<issue-number>-<slug>'")]
    InvalidBranchFormat { branch: String },

    #[error("No labels selected; no document was written")]
    NoLabelsSelected,

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Invalid branch pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-issue-doc
pub type Result<T> = std::result::Result<T, IssueDocError>;

impl IssueDocError {
    /// Create a missing-tool error with context
    pub fn tool_missing(msg: impl Into<String>) -> Self {
        IssueDocError::ToolMissing(msg.into())
    }

    /// Create a branch format error carrying the offending branch name
    pub fn invalid_branch(branch: impl Into<String>) -> Self {
        IssueDocError::InvalidBranchFormat {
            branch: branch.into(),
        }
    }
}
