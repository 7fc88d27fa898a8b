//! Issue document output: path allocation and Markdown rendering

pub mod allocator;
pub mod renderer;

pub use allocator::allocate_path;
pub use renderer::{render, write_document, SECTIONS};
