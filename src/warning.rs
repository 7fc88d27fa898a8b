use std::fmt;

/// Recoverable problems raised while selecting labels.
/// They are reported to the user and leave the selection unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionWarning {
    /// Custom tag was blank after trimming
    EmptyCustomTag,
    /// Label text is already part of the selection
    Duplicate { label: String },
    /// Menu input was neither blank, `0`, nor a catalog index
    InvalidChoice { input: String, max: usize },
}

impl fmt::Display for SelectionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionWarning::EmptyCustomTag => write!(f, "Custom tag cannot be empty"),
            SelectionWarning::Duplicate { label } => {
                write!(f, "'{}' is already selected", label)
            }
            SelectionWarning::InvalidChoice { input, max } => {
                write!(
                    f,
                    "Invalid choice '{}': enter 0-{}, or press Enter to finish",
                    input, max
                )
            }
        }
    }
}
