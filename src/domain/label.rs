use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

/// The fixed set of predefined issue categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
pub enum Category {
    Bugfix,
    Chore,
    DevOps,
    Documentation,
    Feature,
    Infrastructure,
    Performance,
    Refactor,
    Research,
    Security,
    Testing,
    #[strum(serialize = "UI/UX")]
    UiUx,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// A label attached to an issue document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    /// One of the predefined categories
    Catalog(Category),
    /// Free-text tag entered by the user
    Custom(String),
}

impl Label {
    pub fn as_str(&self) -> &str {
        match self {
            Label::Catalog(category) => category.as_str(),
            Label::Custom(text) => text,
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categories in display order, addressed by 1-based menu index.
///
/// Index 0 is reserved for custom tag entry and never resolves to a category.
#[derive(Debug, Clone)]
pub struct LabelCatalog {
    entries: Vec<Category>,
}

impl LabelCatalog {
    pub fn new() -> Self {
        let mut entries: Vec<Category> = Category::iter().collect();
        entries.sort_by_key(|category| category.as_str());
        LabelCatalog { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Category] {
        &self.entries
    }

    /// Resolve a 1-based menu index
    pub fn get(&self, index: usize) -> Option<Category> {
        index
            .checked_sub(1)
            .and_then(|i| self.entries.get(i))
            .copied()
    }
}

impl Default for LabelCatalog {
    fn default() -> Self {
        Self::new()
    }
}
