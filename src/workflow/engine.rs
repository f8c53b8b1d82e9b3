//! Workflow engine
//!
//! This module contains the engine that runs every selected file through
//! the rename steps.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use log::{debug, error, info, warn};

use crate::config::Config;
use crate::discovery::{CandidateFile, scan_directory};
use crate::file_ops::{RenameStatus, rename_in_place};
use crate::logging::format_message;
use crate::naming::compute_file_name;
use crate::tags::TagStore;

use super::context::{CommentOutcome, FileOutcome, PlannedOperation, WorkflowContext};

/// Processes every file selected by the configuration
///
/// Each file goes through these steps, stopping at the first failure:
/// 1. Read artist, title and track number
/// 2. Compute the new, sanitised name
/// 3. Rename the file within its directory
/// 4. If requested, clear the comments of the renamed file
///
/// A failure only affects the file it happened on; the remaining files are
/// still processed. Comment clearing failures never undo a rename.
///
/// # Arguments
/// * `config` - The configuration of this run
/// * `store` - Access to the tags of the files
///
/// # Returns
/// * `Result<WorkflowContext>` - The workflow context with statistics or an error
///
/// # Errors
/// * Returns an error if the directory to process is not usable; no file
///   has been touched in that case
pub fn process_files(config: &Config, store: &dyn TagStore) -> Result<WorkflowContext> {
    config.validate()?;

    let mut context = WorkflowContext::new(config.dry_run);

    if config.dry_run {
        info!("Dry run, no files will be changed");
    }

    for candidate in scan_directory(&config.root, config.recursive, &config.include) {
        let outcome = process_file(&candidate, config, store);
        report_outcome(&candidate, &outcome);

        if let FileOutcome::Planned { target } = &outcome {
            context.add_planned_operation(PlannedOperation {
                source: candidate.path(),
                destination: target.clone(),
                clear_comments: config.clear_comments,
            });
        }
        context.record(&outcome);
    }

    report_summary(&context);

    Ok(context)
}

/// Runs a single file through the rename steps
///
/// # Returns
/// * `FileOutcome` - What happened to the file; per-file errors are carried
///   in the outcome instead of being returned
pub fn process_file(
    candidate: &CandidateFile,
    config: &Config,
    store: &dyn TagStore,
) -> FileOutcome {
    let path = candidate.path();
    debug!("Processing {}", path.display());

    let tags = match store.read_tags(&path) {
        Ok(tags) => tags,
        Err(e) => return FileOutcome::Skipped(e),
    };

    let new_name = match compute_file_name(&path, &tags, config.naming) {
        Ok(name) => name,
        Err(e) => return FileOutcome::Skipped(e),
    };

    let action = match rename_in_place(candidate, &new_name, !config.dry_run) {
        Ok(action) => action,
        Err(e) => return FileOutcome::Skipped(e),
    };

    match action.status {
        RenameStatus::Planned => FileOutcome::Planned {
            target: action.target_path,
        },
        RenameStatus::Renamed => {
            let comments = clear_comments(&action.target_path, config, store);
            FileOutcome::Renamed {
                target: action.target_path,
                comments,
            }
        }
        RenameStatus::Unchanged => {
            let comments = clear_comments(&action.target_path, config, store);
            FileOutcome::Unchanged {
                path: action.target_path,
                comments,
            }
        }
    }
}

fn clear_comments(path: &Path, config: &Config, store: &dyn TagStore) -> CommentOutcome {
    if !config.clear_comments || config.dry_run {
        return CommentOutcome::NotRequested;
    }

    match store.clear_comments(path) {
        Ok(count) => CommentOutcome::Cleared(count),
        Err(e) => CommentOutcome::Failed(e),
    }
}

fn report_outcome(candidate: &CandidateFile, outcome: &FileOutcome) {
    match outcome {
        FileOutcome::Renamed { target, .. } | FileOutcome::Planned { target } => {
            let target_name = target
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            let verb = if matches!(outcome, FileOutcome::Planned { .. }) {
                "Would rename"
            } else {
                "Renaming"
            };
            let message = format!("{verb} {} to {}", candidate.file_name, target_name);
            let colored_message = format!(
                "{verb} {} to {}",
                candidate.file_name,
                target_name.as_str().bold().green()
            );
            info!("{}", format_message(&message, &colored_message));
        }
        FileOutcome::Unchanged { path, .. } => {
            debug!("Already named correctly: {}", path.display());
        }
        FileOutcome::Skipped(e) if e.is_per_file() => {
            warn!("Skipping {}: {e}", candidate.path().display());
        }
        FileOutcome::Skipped(e) => {
            error!("Skipping {}: {e}", candidate.path().display());
        }
    }

    match outcome.comments() {
        Some(CommentOutcome::Failed(e)) => error!("{e}"),
        Some(CommentOutcome::Cleared(count)) if *count > 0 => {
            debug!("Removed {count} comment(s) from {}", candidate.file_name)
        }
        _ => {}
    }
}

fn report_summary(context: &WorkflowContext) {
    let stats = &context.stats;

    if context.dry_run {
        if !context.planned_operations.is_empty() {
            println!("\nDetailed plan of operations:");
            println!("===========================");
            for op in &context.planned_operations {
                println!("  From: {}", op.source.display());
                println!("  To:   {}", op.destination.display());
                if op.clear_comments {
                    println!("  Comments will be cleared");
                }
            }
            println!("\nRun without --dry flag to execute these operations.");
        }
        info!(
            "Finished: {} selected, {} to rename, {} unchanged, {} skipped",
            stats.files_selected, stats.files_planned, stats.files_unchanged, stats.files_skipped
        );
    } else {
        info!(
            "Finished: {} selected, {} renamed, {} unchanged, {} skipped",
            stats.files_selected, stats.files_renamed, stats.files_unchanged, stats.files_skipped
        );
        if stats.comments_cleared > 0 || stats.comment_errors > 0 {
            info!(
                "Comments cleared in {} file(s), {} failure(s)",
                stats.comments_cleared, stats.comment_errors
            );
        }
    }

    if stats.errors() > 0 {
        warn!("{} error(s) reported during the run", stats.errors());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NamingScheme;
    use crate::errors::{Error, comment_clear_error, missing_field_error};
    use crate::tags::TagSet;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::fs::write;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// In-memory tags keyed by file name
    #[derive(Default)]
    struct FakeTagStore {
        tags: HashMap<String, TagSet>,
        failing_comments: bool,
        cleared: RefCell<Vec<PathBuf>>,
    }

    impl FakeTagStore {
        fn with(mut self, name: &str, tags: TagSet) -> Self {
            self.tags.insert(name.to_string(), tags);
            self
        }
    }

    impl TagStore for FakeTagStore {
        fn read_tags(&self, path: &Path) -> crate::errors::Result<TagSet> {
            let name = path.file_name().unwrap().to_str().unwrap();
            self.tags
                .get(name)
                .cloned()
                .ok_or_else(|| missing_field_error(path.to_path_buf(), "artist"))
        }

        fn clear_comments(&self, path: &Path) -> crate::errors::Result<usize> {
            if self.failing_comments {
                return Err(comment_clear_error(
                    id3::Error::new(id3::ErrorKind::NoTag, "no tag"),
                    path.to_path_buf(),
                ));
            }
            self.cleared.borrow_mut().push(path.to_path_buf());
            Ok(1)
        }
    }

    fn setup(names: &[&str]) -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        for name in names {
            write(temp_dir.path().join(name), name).unwrap();
        }
        temp_dir
    }

    #[test]
    fn test_process_files_renames_and_continues_after_failure() {
        let temp_dir = setup(&["a.mp3", "b.mp3", "c.mp3"]);
        let store = FakeTagStore::default()
            .with("a.mp3", TagSet::new("Foo", "Bar"))
            .with(
                "b.mp3",
                TagSet {
                    artist: Some("Foo".to_string()),
                    ..TagSet::default()
                },
            )
            .with("c.mp3", TagSet::new("Foo", "Baz"));
        let config = Config::new(temp_dir.path().to_path_buf());

        let context = process_files(&config, &store).unwrap();

        assert_eq!(context.stats.files_selected, 3);
        assert_eq!(context.stats.files_renamed, 2);
        assert_eq!(context.stats.files_skipped, 1);
        assert!(temp_dir.path().join("Foo - Bar.mp3").exists());
        assert!(temp_dir.path().join("b.mp3").exists());
        assert!(temp_dir.path().join("Foo - Baz.mp3").exists());
    }

    #[test]
    fn test_process_file_album_naming() {
        let temp_dir = setup(&["a.mp3"]);
        let tags = TagSet::new("Foo", "Bar").with_track_number("3/9");
        let store = FakeTagStore::default().with("a.mp3", tags);
        let mut config = Config::new(temp_dir.path().to_path_buf());
        config.naming = NamingScheme::Album;

        let candidate = CandidateFile::new(&temp_dir.path().join("a.mp3")).unwrap();
        let outcome = process_file(&candidate, &config, &store);

        match outcome {
            FileOutcome::Renamed { target, comments } => {
                assert_eq!(target, temp_dir.path().join("Foo -03- Bar.mp3"));
                assert!(matches!(comments, CommentOutcome::NotRequested));
            }
            other => panic!("expected a rename, got {other:?}"),
        }
    }

    #[test]
    fn test_comments_cleared_on_renamed_file() {
        let temp_dir = setup(&["a.mp3"]);
        let store = FakeTagStore::default().with("a.mp3", TagSet::new("Foo", "Bar"));
        let mut config = Config::new(temp_dir.path().to_path_buf());
        config.clear_comments = true;

        let context = process_files(&config, &store).unwrap();

        assert_eq!(context.stats.comments_cleared, 1);
        assert_eq!(
            store.cleared.borrow().as_slice(),
            &[temp_dir.path().join("Foo - Bar.mp3")]
        );
    }

    #[test]
    fn test_comment_failure_keeps_rename() {
        let temp_dir = setup(&["a.mp3"]);
        let store = FakeTagStore {
            failing_comments: true,
            ..FakeTagStore::default()
        }
        .with("a.mp3", TagSet::new("Foo", "Bar"));
        let mut config = Config::new(temp_dir.path().to_path_buf());
        config.clear_comments = true;

        let context = process_files(&config, &store).unwrap();

        assert_eq!(context.stats.files_renamed, 1);
        assert_eq!(context.stats.comment_errors, 1);
        assert!(temp_dir.path().join("Foo - Bar.mp3").exists());
    }

    #[test]
    fn test_dry_run_changes_nothing() {
        let temp_dir = setup(&["a.mp3"]);
        let store = FakeTagStore::default().with("a.mp3", TagSet::new("Foo", "Bar"));
        let mut config = Config::new(temp_dir.path().to_path_buf());
        config.dry_run = true;
        config.clear_comments = true;

        let context = process_files(&config, &store).unwrap();

        assert_eq!(context.stats.files_planned, 1);
        assert_eq!(context.planned_operations.len(), 1);
        assert_eq!(
            context.planned_operations[0].destination,
            temp_dir.path().join("Foo - Bar.mp3")
        );
        assert!(temp_dir.path().join("a.mp3").exists());
        assert!(store.cleared.borrow().is_empty());
    }

    #[test]
    fn test_dry_run_keeps_comments_of_correctly_named_file() {
        let temp_dir = setup(&["Foo - Bar.mp3"]);
        let store = FakeTagStore::default().with("Foo - Bar.mp3", TagSet::new("Foo", "Bar"));
        let mut config = Config::new(temp_dir.path().to_path_buf());
        config.dry_run = true;
        config.clear_comments = true;

        let context = process_files(&config, &store).unwrap();

        assert_eq!(context.stats.files_unchanged, 1);
        assert!(store.cleared.borrow().is_empty());
    }

    #[test]
    fn test_collision_is_skipped() {
        let temp_dir = setup(&["a.mp3", "b.mp3"]);
        let store = FakeTagStore::default()
            .with("a.mp3", TagSet::new("Foo", "Bar"))
            .with("b.mp3", TagSet::new("Foo", "Bar"));
        let config = Config::new(temp_dir.path().to_path_buf());

        let context = process_files(&config, &store).unwrap();

        assert_eq!(context.stats.files_renamed, 1);
        assert_eq!(context.stats.files_skipped, 1);
        assert!(temp_dir.path().join("Foo - Bar.mp3").exists());
        assert!(temp_dir.path().join("b.mp3").exists());
    }

    #[test]
    fn test_invalid_root_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::new(temp_dir.path().join("missing"));

        let error = process_files(&config, &FakeTagStore::default()).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<Error>(),
            Some(Error::DirectoryNotFound { .. })
        ));
    }
}
