use regex::Regex;

use crate::error::{IssueDocError, Result};

/// Issue branches are named `<issue-number>-<slug>`.
pub const BRANCH_PATTERN: &str = r"^([0-9]+)-(.*)$";

/// An issue branch split into its issue number and slug
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedBranch {
    /// Leading digit run, kept as text (leading zeros are preserved)
    pub issue_number: String,
    /// Everything after the first hyphen; may be empty
    pub slug: String,
}

impl ParsedBranch {
    /// Parse a branch name against [`BRANCH_PATTERN`].
    ///
    /// # Returns
    /// * `Ok(ParsedBranch)` - The issue number and slug
    /// * `Err(IssueDocError::InvalidBranchFormat)` - If the name does not match
    ///
    /// # Examples
    /// ```
    /// # use git_issue_doc::domain::ParsedBranch;
    /// let parsed = ParsedBranch::parse("42-improve-caching-layer").unwrap();
    /// assert_eq!(parsed.issue_number, "42");
    /// assert_eq!(parsed.slug, "improve-caching-layer");
    /// ```
    pub fn parse(branch: &str) -> Result<Self> {
        let re = Regex::new(BRANCH_PATTERN)?;

        let captures = re
            .captures(branch)
            .ok_or_else(|| IssueDocError::invalid_branch(branch))?;

        Ok(ParsedBranch {
            issue_number: captures[1].to_string(),
            slug: captures[2].to_string(),
        })
    }

    /// Document heading, e.g. `ISSUE-42-improve-caching-layer`. Uses the slug verbatim.
    pub fn title(&self) -> String {
        format!("ISSUE-{}-{}", self.issue_number, self.slug)
    }

    /// Slug with spaces replaced by hyphens, safe for file names
    pub fn safe_title(&self) -> String {
        self.slug.replace(' ', "-")
    }

    /// File name stem without the collision suffix or extension
    pub fn file_stem(&self) -> String {
        format!("ISSUE-{}-{}", self.issue_number, self.safe_title())
    }
}
