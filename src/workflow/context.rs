//! Workflow context
//!
//! This module defines the state collected while files are processed.

use std::path::PathBuf;

use crate::errors::Error;

/// Represents a planned rename for dry-run mode
#[derive(Debug, Clone)]
pub struct PlannedOperation {
    /// The current path of the file
    pub source: PathBuf,
    /// The path the file would be renamed to
    pub destination: PathBuf,
    /// Whether the comments would be cleared as well
    pub clear_comments: bool,
}

/// Outcome of the optional comment clearing step
#[derive(Debug)]
pub enum CommentOutcome {
    /// Clearing was not requested or the run is a dry run
    NotRequested,
    /// This many comment frames were removed
    Cleared(usize),
    /// The file was renamed, but its comments could not be removed
    Failed(Error),
}

/// Final state of a single file
#[derive(Debug)]
pub enum FileOutcome {
    /// The file was renamed to `target`
    Renamed {
        target: PathBuf,
        comments: CommentOutcome,
    },
    /// The file already had the computed name
    Unchanged {
        path: PathBuf,
        comments: CommentOutcome,
    },
    /// Dry run, the file would be renamed to `target`
    Planned { target: PathBuf },
    /// The file was left untouched
    Skipped(Error),
}

impl FileOutcome {
    /// The comment clearing outcome, if the file got that far
    pub fn comments(&self) -> Option<&CommentOutcome> {
        match self {
            FileOutcome::Renamed { comments, .. } | FileOutcome::Unchanged { comments, .. } => {
                Some(comments)
            }
            _ => None,
        }
    }
}

/// Statistics about the workflow
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowStats {
    /// Number of files matching the include patterns
    pub files_selected: usize,
    /// Number of files renamed
    pub files_renamed: usize,
    /// Number of files that already had the right name
    pub files_unchanged: usize,
    /// Number of files planned to be renamed in a dry run
    pub files_planned: usize,
    /// Number of files left untouched because of an error
    pub files_skipped: usize,
    /// Number of files whose comments were removed
    pub comments_cleared: usize,
    /// Number of files whose comments could not be removed
    pub comment_errors: usize,
}

impl WorkflowStats {
    /// Number of per-file errors reported during the run
    pub fn errors(&self) -> usize {
        self.files_skipped + self.comment_errors
    }
}

/// Context for the workflow
#[derive(Debug, Clone)]
pub struct WorkflowContext {
    /// Whether files are only reported instead of renamed
    pub dry_run: bool,
    /// Statistics about the processing
    pub stats: WorkflowStats,
    /// Planned operations for dry-run mode
    pub planned_operations: Vec<PlannedOperation>,
}

impl WorkflowContext {
    /// Creates a new workflow context
    pub fn new(dry_run: bool) -> Self {
        WorkflowContext {
            dry_run,
            stats: WorkflowStats::default(),
            planned_operations: Vec::new(),
        }
    }

    /// Adds a planned operation to the context
    pub fn add_planned_operation(&mut self, operation: PlannedOperation) {
        self.planned_operations.push(operation);
    }

    /// Updates the statistics with the outcome of one file
    pub fn record(&mut self, outcome: &FileOutcome) {
        self.stats.files_selected += 1;

        match outcome {
            FileOutcome::Renamed { .. } => self.stats.files_renamed += 1,
            FileOutcome::Unchanged { .. } => self.stats.files_unchanged += 1,
            FileOutcome::Planned { .. } => self.stats.files_planned += 1,
            FileOutcome::Skipped(_) => self.stats.files_skipped += 1,
        }

        match outcome.comments() {
            Some(CommentOutcome::Cleared(count)) if *count > 0 => {
                self.stats.comments_cleared += 1
            }
            Some(CommentOutcome::Failed(_)) => self.stats.comment_errors += 1,
            _ => {}
        }
    }
}
