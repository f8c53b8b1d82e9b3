//! Workflow module
//!
//! This module orchestrates the rename of all selected files.

mod context;
mod engine;

pub use context::{CommentOutcome, FileOutcome, PlannedOperation, WorkflowContext, WorkflowStats};
pub use engine::{process_file, process_files};
