//! Domain logic - pure business rules independent of git and terminal I/O

pub mod branch;
pub mod label;
pub mod ordering;
pub mod selection;

pub use branch::ParsedBranch;
pub use label::{Category, Label, LabelCatalog};
pub use ordering::{normalize, OrderedLabels, PINNED_LAST};
pub use selection::Selection;
