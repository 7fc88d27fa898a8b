//! Pure formatting functions for UI output.
//!
//! Process-level messages go straight to stdout/stderr. Menu and selection
//! feedback is written to a caller-supplied writer so the interactive loop can
//! run against in-memory buffers.

use std::io::{self, Write};

use console::style;

use crate::domain::{LabelCatalog, ParsedBranch, Selection};
use crate::warning::SelectionWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Show which issue the document is being generated for.
pub fn write_issue_header<W: Write>(out: &mut W, branch: &ParsedBranch) -> io::Result<()> {
    writeln!(
        out,
        "\n{} issue #{} ({})",
        style("Documenting").bold(),
        branch.issue_number,
        branch.slug
    )
}

/// Display the label menu.
///
/// Lists catalog entries with 1-based indices, the custom tag option at 0,
/// and the labels selected so far.
pub fn write_menu<W: Write>(
    out: &mut W,
    catalog: &LabelCatalog,
    selection: &Selection,
) -> io::Result<()> {
    writeln!(out, "\n{}", style("Issue types:").bold())?;
    for (i, category) in catalog.entries().iter().enumerate() {
        writeln!(out, "  {}) {}", i + 1, category.as_str())?;
    }
    writeln!(out, "  0) Custom tag")?;

    if !selection.is_empty() {
        let chosen: Vec<&str> = selection.labels().iter().map(|l| l.as_str()).collect();
        writeln!(out, "Selected: {}", chosen.join(", "))?;
    }

    Ok(())
}

/// Confirm a label was added.
pub fn write_added<W: Write>(out: &mut W, label: &str) -> io::Result<()> {
    writeln!(out, "{} Added '{}'", style("✓").green(), label)
}

/// Report a recoverable selection problem.
pub fn write_warning<W: Write>(out: &mut W, warning: &SelectionWarning) -> io::Result<()> {
    writeln!(out, "{} {}", style("⚠ WARNING:").yellow(), warning)
}
