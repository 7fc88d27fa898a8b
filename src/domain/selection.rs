use crate::domain::label::Label;
use crate::domain::ordering::{normalize, OrderedLabels};
use crate::error::{IssueDocError, Result};
use crate::warning::SelectionWarning;

/// Snapshot of the labels chosen so far, in selection order.
///
/// Adding a label never mutates an existing snapshot; [`Selection::with`]
/// returns the next one. Label text is unique within a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    labels: Vec<Label>,
}

impl Selection {
    pub fn new() -> Self {
        Selection { labels: Vec::new() }
    }

    /// Exact, case-sensitive text match against catalog and custom labels alike
    pub fn contains(&self, text: &str) -> bool {
        self.labels.iter().any(|label| label.as_str() == text)
    }

    /// Return a new snapshot with `label` appended.
    ///
    /// # Returns
    /// * `Ok(Selection)` - The extended snapshot
    /// * `Err(SelectionWarning::Duplicate)` - If the label text is already selected
    pub fn with(&self, label: Label) -> std::result::Result<Selection, SelectionWarning> {
        if self.contains(label.as_str()) {
            return Err(SelectionWarning::Duplicate {
                label: label.as_str().to_string(),
            });
        }

        let mut labels = self.labels.clone();
        labels.push(label);
        Ok(Selection { labels })
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Close the selection and apply the ordering rule.
    ///
    /// Fails with `NoLabelsSelected` when nothing was chosen.
    pub fn finish(self) -> Result<OrderedLabels> {
        if self.labels.is_empty() {
            return Err(IssueDocError::NoLabelsSelected);
        }

        let texts = self
            .labels
            .iter()
            .map(|label| label.as_str().to_string())
            .collect();

        Ok(normalize(texts))
    }
}
