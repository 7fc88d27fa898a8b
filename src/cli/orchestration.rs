//! Main workflow orchestration logic
//!
//! Resolves the branch, runs the label selection, and writes the issue
//! document. Kept separate from `main.rs` so it can be driven with a mock
//! repository and in-memory terminal streams.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::Config;
use crate::document;
use crate::domain::{LabelCatalog, OrderedLabels, ParsedBranch};
use crate::error::Result;
use crate::git::{self, BranchSource};
use crate::ui;

/// Result of a successful run
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Where the document was written
    pub path: PathBuf,

    /// The branch the document was generated for
    pub branch: ParsedBranch,

    /// Labels as rendered
    pub labels: OrderedLabels,
}

/// Generate the issue document for the current branch.
///
/// 1. Resolve and parse the checked-out branch
/// 2. Collect labels interactively
/// 3. Order the labels
/// 4. Allocate a free path under the documentation directory
/// 5. Write the document
///
/// Every failure happens before step 5, so a failed run leaves no file behind.
///
/// # Arguments
///
/// * `source` - Version control state
/// * `input` - Terminal input for the prompts
/// * `output` - Terminal output for the menu and feedback
pub fn run_issue_doc_workflow<S, R, W>(
    source: &S,
    input: &mut R,
    output: &mut W,
) -> Result<WorkflowResult>
where
    S: BranchSource + ?Sized,
    R: BufRead,
    W: Write,
{
    let branch = git::resolve_branch(source)?;
    let config = Config::from_project_root(source.project_root()?);

    ui::formatter::write_issue_header(output, &branch)?;

    let catalog = LabelCatalog::new();
    let selection = ui::select_labels(&catalog, input, output)?;
    let labels = selection.finish()?;

    let docs_dir = config.ensure_documentation_dir()?;
    let path = document::allocate_path(&docs_dir, &branch);
    document::write_document(&path, &branch, &labels)?;

    Ok(WorkflowResult {
        path,
        branch,
        labels,
    })
}
