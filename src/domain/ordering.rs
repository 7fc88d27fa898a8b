//! Label ordering for rendered documents.
//!
//! Two explicit steps: an ordinary ascending sort, then [`PINNED_LAST`] is
//! moved to the end if present.

/// Label that always renders last
pub const PINNED_LAST: &str = "Performance";

/// Labels in their final rendering order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedLabels(Vec<String>);

impl OrderedLabels {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Comma-separated form used in the `Issue Type(s)` line
    pub fn joined(&self) -> String {
        self.0.join(", ")
    }
}

/// Step 1: case-sensitive lexicographic ascending sort
pub fn sort_labels(mut labels: Vec<String>) -> Vec<String> {
    labels.sort();
    labels
}

/// Step 2: move [`PINNED_LAST`] to the end, keeping everything else in place
pub fn pin_last(mut labels: Vec<String>) -> Vec<String> {
    if let Some(index) = labels.iter().position(|label| label == PINNED_LAST) {
        let pinned = labels.remove(index);
        labels.push(pinned);
    }
    labels
}

pub fn normalize(labels: Vec<String>) -> OrderedLabels {
    OrderedLabels(pin_last(sort_labels(labels)))
}
