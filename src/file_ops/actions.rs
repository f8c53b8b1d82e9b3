//! File operation functionality
//!
//! This module contains the rename of a file within its own directory.

use std::fs::{hard_link, remove_file, rename, symlink_metadata};
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::discovery::CandidateFile;
use crate::errors::{Result, rename_collision_error, rename_error};

/// What happened to a file handed to [`rename_in_place`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameStatus {
    /// The file now has the new name
    Renamed,
    /// The file already had the computed name
    Unchanged,
    /// Dry run, the file would have been renamed
    Planned,
}

/// Result of renaming a file
#[derive(Debug, Clone)]
pub struct FileActionResult {
    /// The path after the rename
    pub target_path: PathBuf,
    pub status: RenameStatus,
}

/// Renames a file within its directory
///
/// The target always lives in the same directory as the source, so the
/// rename never moves data between filesystems. An existing file is never
/// overwritten, including one created after the collision check: the new
/// name is first added as a hard link, which fails if the name is taken.
/// On filesystems without hard links a plain rename is used, and a file
/// appearing between the check and the rename is replaced.
///
/// # Arguments
/// * `candidate` - The file to rename
/// * `new_name` - The new file name, without any directory part
/// * `run_execution` - Whether to actually rename (true) or just simulate it (false)
///
/// # Returns
/// * `Result<FileActionResult>` - The new path and what was done
///
/// # Errors
/// * `RenameCollision` if another file already has the new name
/// * `Rename` if the filesystem refuses the rename
pub fn rename_in_place(
    candidate: &CandidateFile,
    new_name: &str,
    run_execution: bool,
) -> Result<FileActionResult> {
    let source_path = candidate.path();
    let target_path = candidate.directory.join(new_name);

    if candidate.file_name == new_name {
        debug!("Name unchanged: {}", source_path.display());
        return Ok(FileActionResult {
            target_path,
            status: RenameStatus::Unchanged,
        });
    }

    let same_file = is_same_file(&source_path, &target_path);
    if symlink_metadata(&target_path).is_ok() && !same_file {
        return Err(rename_collision_error(source_path, target_path));
    }

    if !run_execution {
        debug!(
            "Simulating rename: {} -> {}",
            source_path.display(),
            target_path.display()
        );
        return Ok(FileActionResult {
            target_path,
            status: RenameStatus::Planned,
        });
    }

    debug!(
        "Renaming file: {} -> {}",
        source_path.display(),
        target_path.display()
    );
    let renamed = if same_file {
        rename(&source_path, &target_path)
    } else {
        rename_no_replace(&source_path, &target_path)
    };
    renamed.map_err(|e| match e.kind() {
        io::ErrorKind::AlreadyExists => {
            rename_collision_error(source_path.clone(), target_path.clone())
        }
        _ => rename_error(e, source_path.clone(), target_path.clone()),
    })?;

    Ok(FileActionResult {
        target_path,
        status: RenameStatus::Renamed,
    })
}

/// Renames `source` to `target`, failing with `AlreadyExists` if `target` exists
fn rename_no_replace(source: &Path, target: &Path) -> io::Result<()> {
    match hard_link(source, target) {
        Ok(()) => remove_file(source).inspect_err(|_| {
            // Leave only the original name behind
            let _ = remove_file(target);
        }),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Err(e),
        Err(e) => {
            debug!("Hard link not possible ({e}), falling back to rename");
            rename(source, target)
        }
    }
}

/// Checks whether two paths name the same file, as they do for a change of
/// case on a case-insensitive filesystem
#[cfg(unix)]
fn is_same_file(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (symlink_metadata(a), symlink_metadata(b)) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
