//! Command-line workflow

pub mod orchestration;

pub use orchestration::{run_issue_doc_workflow, WorkflowResult};
