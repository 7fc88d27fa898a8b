use std::fs;
use std::path::Path;

use crate::domain::{OrderedLabels, ParsedBranch};
use crate::error::Result;

/// Section headings and their placeholder comments, in document order.
///
/// Downstream tooling matches on this text; keep it stable.
pub const SECTIONS: [(&str, &str); 5] = [
    (
        "Objective",
        "<!-- What is the goal of this issue? What problem does it solve? -->",
    ),
    (
        "Description",
        "<!-- Describe the work done, the approach taken, and any key decisions. -->",
    ),
    (
        "Learnings",
        "<!-- What did you learn while working on this issue? -->",
    ),
    (
        "What's next",
        "<!-- Follow-up tasks, open questions, or future improvements. -->",
    ),
    (
        "Miscellaneous Notes",
        "<!-- Any other relevant notes, links, or references. -->",
    ),
];

/// Render the issue document.
///
/// The heading uses the slug verbatim, not the file-safe variant.
pub fn render(branch: &ParsedBranch, labels: &OrderedLabels) -> String {
    let mut doc = format!(
        "# {}\n\n**Issue Type(s):** {}\n\n",
        branch.title(),
        labels.joined()
    );

    for (heading, placeholder) in SECTIONS {
        doc.push_str(&format!("## {}\n{}\n\n", heading, placeholder));
    }

    doc
}

/// Write the rendered document to `path`, replacing anything already there
pub fn write_document(path: &Path, branch: &ParsedBranch, labels: &OrderedLabels) -> Result<()> {
    fs::write(path, render(branch, labels))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::normalize;

    fn sample() -> (ParsedBranch, OrderedLabels) {
        (
            ParsedBranch::parse("42-improve-caching-layer").unwrap(),
            normalize(vec!["Performance".to_string(), "Bugfix".to_string()]),
        )
    }

    #[test]
    fn test_render_exact_layout() {
        let (branch, labels) = sample();
        let expected = "# ISSUE-42-improve-caching-layer\n\
\n\
**Issue Type(s):** Bugfix, Performance\n\
\n\
## Objective\n\
<!-- What is the goal of this issue? What problem does it solve? -->\n\
\n\
## Description\n\
<!-- Describe the work done, the approach taken, and any key decisions. -->\n\
\n\
## Learnings\n\
<!-- What did you learn while working on this issue? -->\n\
\n\
## What's next\n\
<!-- Follow-up tasks, open questions, or future improvements. -->\n\
\n\
## Miscellaneous Notes\n\
<!-- Any other relevant notes, links, or references. -->\n\
\n";
        assert_eq!(render(&branch, &labels), expected);
    }

    #[test]
    fn test_heading_keeps_spaces_in_slug() {
        let branch = ParsedBranch::parse("3-two words").unwrap();
        let labels = normalize(vec!["Chore".to_string()]);
        let doc = render(&branch, &labels);
        assert!(doc.starts_with("# ISSUE-3-two words\n"));
    }

    #[test]
    fn test_write_document_replaces_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.md");
        fs::write(&path, "stale content that is much longer than nothing").unwrap();

        let (branch, labels) = sample();
        write_document(&path, &branch, &labels).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), render(&branch, &labels));
    }
}
