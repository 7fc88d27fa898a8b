//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - The interactive label selection loop

use std::io::{self, BufRead, Write};

use crate::domain::{Category, Label, LabelCatalog, Selection};
use crate::warning::SelectionWarning;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{display_error, display_status, display_success};

/// One interpreted line of menu input
#[derive(Debug, Clone, PartialEq)]
pub enum MenuChoice {
    /// Blank input ends the selection
    Finish,
    /// `0` asks for a free-text tag
    Custom,
    /// A 1-based catalog index
    Catalog(Category),
    /// Anything else, kept for the warning message
    Invalid(String),
}

/// Result of one pass through the menu
enum Step {
    Continue(Selection),
    Finish(Selection),
}

/// Interpret a trimmed line of menu input.
pub fn parse_choice(input: &str, catalog: &LabelCatalog) -> MenuChoice {
    if input.is_empty() {
        return MenuChoice::Finish;
    }

    // Plain digit runs only; `parse` would also take a leading `+`
    if !input.bytes().all(|b| b.is_ascii_digit()) {
        return MenuChoice::Invalid(input.to_string());
    }

    match input.parse::<usize>() {
        Ok(0) => MenuChoice::Custom,
        Ok(index) => catalog
            .get(index)
            .map(MenuChoice::Catalog)
            .unwrap_or_else(|| MenuChoice::Invalid(input.to_string())),
        Err(_) => MenuChoice::Invalid(input.to_string()),
    }
}

/// Run the interactive label selection loop.
///
/// Each pass shows the menu and reads one line:
/// - blank input (or end of input) finishes
/// - `0` prompts for a custom tag, which must be non-blank after trimming
/// - `1..=N` picks the catalog entry at that index
///
/// Duplicates, blank custom tags and invalid choices are reported to `output`
/// and the loop continues with the selection unchanged. The loop itself never
/// fails on an empty selection; that is decided by [`Selection::finish`].
///
/// # Returns
/// * `Ok(Selection)` - Labels in the order they were chosen
/// * `Err` - If reading input or writing prompts fails
pub fn select_labels<R: BufRead, W: Write>(
    catalog: &LabelCatalog,
    input: &mut R,
    output: &mut W,
) -> io::Result<Selection> {
    let mut selection = Selection::new();

    loop {
        selection = match next_step(selection, catalog, input, output)? {
            Step::Continue(next) => next,
            Step::Finish(done) => return Ok(done),
        };
    }
}

fn next_step<R: BufRead, W: Write>(
    selection: Selection,
    catalog: &LabelCatalog,
    input: &mut R,
    output: &mut W,
) -> io::Result<Step> {
    formatter::write_menu(output, catalog, &selection)?;
    let line = prompt(output, input, "Choose an issue type (Enter to finish): ")?;

    let choice = match line {
        Some(line) => parse_choice(&line, catalog),
        None => MenuChoice::Finish,
    };

    let label = match choice {
        MenuChoice::Finish => return Ok(Step::Finish(selection)),
        MenuChoice::Catalog(category) => Label::Catalog(category),
        MenuChoice::Custom => {
            let text = prompt(output, input, "Custom tag: ")?.unwrap_or_default();
            if text.is_empty() {
                formatter::write_warning(output, &SelectionWarning::EmptyCustomTag)?;
                return Ok(Step::Continue(selection));
            }
            Label::Custom(text)
        }
        MenuChoice::Invalid(raw) => {
            let warning = SelectionWarning::InvalidChoice {
                input: raw,
                max: catalog.len(),
            };
            formatter::write_warning(output, &warning)?;
            return Ok(Step::Continue(selection));
        }
    };

    match selection.with(label) {
        Ok(next) => {
            if let Some(added) = next.labels().last() {
                formatter::write_added(output, added.as_str())?;
            }
            Ok(Step::Continue(next))
        }
        Err(warning) => {
            formatter::write_warning(output, &warning)?;
            Ok(Step::Continue(selection))
        }
    }
}

/// Print `message`, then read one line trimmed of surrounding whitespace.
///
/// Bytes that are not valid UTF-8 are replaced rather than failing the read.
/// Returns `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    output: &mut W,
    input: &mut R,
    message: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = Vec::new();
    if input.read_until(b'\n', &mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(script: &str) -> (Selection, String) {
        run_bytes(script.as_bytes())
    }

    fn run_bytes(script: &[u8]) -> (Selection, String) {
        let catalog = LabelCatalog::new();
        let mut input = Cursor::new(script.to_vec());
        let mut output = Vec::new();
        let selection = select_labels(&catalog, &mut input, &mut output).unwrap();
        let text = console::strip_ansi_codes(&String::from_utf8(output).unwrap()).into_owned();
        (selection, text)
    }

    fn texts(selection: &Selection) -> Vec<&str> {
        selection.labels().iter().map(|l| l.as_str()).collect()
    }

    #[test]
    fn test_parse_choice() {
        let catalog = LabelCatalog::new();
        assert_eq!(parse_choice("", &catalog), MenuChoice::Finish);
        assert_eq!(parse_choice("0", &catalog), MenuChoice::Custom);
        assert_eq!(
            parse_choice("1", &catalog),
            MenuChoice::Catalog(Category::Bugfix)
        );
        assert_eq!(
            parse_choice("12", &catalog),
            MenuChoice::Catalog(Category::UiUx)
        );
        assert_eq!(
            parse_choice("13", &catalog),
            MenuChoice::Invalid("13".to_string())
        );
        assert_eq!(
            parse_choice("-1", &catalog),
            MenuChoice::Invalid("-1".to_string())
        );
        assert_eq!(
            parse_choice("abc", &catalog),
            MenuChoice::Invalid("abc".to_string())
        );
    }

    #[test]
    fn test_parse_choice_rejects_signed_numbers() {
        let catalog = LabelCatalog::new();
        assert_eq!(
            parse_choice("+3", &catalog),
            MenuChoice::Invalid("+3".to_string())
        );
        assert_eq!(
            parse_choice("+0", &catalog),
            MenuChoice::Invalid("+0".to_string())
        );
    }

    #[test]
    fn test_immediate_blank_selects_nothing() {
        let (selection, _) = run("\n");
        assert!(selection.is_empty());
    }

    #[test]
    fn test_end_of_input_finishes() {
        let (selection, _) = run("1\n");
        assert_eq!(texts(&selection), vec!["Bugfix"]);
    }

    #[test]
    fn test_selection_order_is_kept() {
        let (selection, text) = run("5\n1\n\n");
        assert_eq!(texts(&selection), vec!["Feature", "Bugfix"]);
        assert!(text.contains("Added 'Feature'"));
        assert!(text.contains("Added 'Bugfix'"));
    }

    #[test]
    fn test_duplicate_catalog_label_warns_once_kept() {
        let (selection, text) = run("1\n1\n\n");
        assert_eq!(texts(&selection), vec!["Bugfix"]);
        assert!(text.contains("'Bugfix' is already selected"));
    }

    #[test]
    fn test_custom_tag_is_trimmed() {
        let (selection, _) = run("0\n   Spike  \n\n");
        assert_eq!(texts(&selection), vec!["Spike"]);
        assert!(matches!(selection.labels()[0], Label::Custom(_)));
    }

    #[test]
    fn test_blank_custom_tag_rejected() {
        let (selection, text) = run("0\n   \n\n");
        assert!(selection.is_empty());
        assert!(text.contains("Custom tag cannot be empty"));
    }

    #[test]
    fn test_custom_tag_duplicate_of_catalog_rejected() {
        let (selection, text) = run("1\n0\nBugfix\n\n");
        assert_eq!(texts(&selection), vec!["Bugfix"]);
        assert!(text.contains("already selected"));
    }

    #[test]
    fn test_invalid_choice_reported() {
        let (selection, text) = run("99\nfoo\n2\n\n");
        assert_eq!(texts(&selection), vec!["Chore"]);
        assert!(text.contains("Invalid choice '99'"));
        assert!(text.contains("Invalid choice 'foo'"));
    }

    #[test]
    fn test_whitespace_only_menu_input_finishes() {
        let (selection, _) = run("3\n   \n4\n");
        assert_eq!(texts(&selection), vec!["DevOps"]);
    }

    #[test]
    fn test_end_of_input_at_custom_prompt() {
        let (selection, text) = run("0\n");
        assert!(selection.is_empty());
        assert!(text.contains("cannot be empty"));
    }

    #[test]
    fn test_invalid_utf8_menu_input_is_invalid_choice() {
        let (selection, text) = run_bytes(b"\xff\xfe\n1\n\n");
        assert_eq!(texts(&selection), vec!["Bugfix"]);
        assert!(text.contains("Invalid choice"));
    }

    #[test]
    fn test_invalid_utf8_custom_tag_is_kept_lossily() {
        let (selection, _) = run_bytes(b"1\n0\nfast\xffer\n\n");
        assert_eq!(texts(&selection), vec!["Bugfix", "fast\u{FFFD}er"]);
    }
}
