//! Directory scanning functionality
//!
//! This module walks the directory to process and yields the files selected
//! by the include patterns.

use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::errors::{Result, invalid_filename_error};

use super::matcher::IncludePatterns;

/// A file selected for renaming
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    /// The directory containing the file
    pub directory: PathBuf,
    /// The current name of the file
    pub file_name: String,
}

impl CandidateFile {
    /// Creates a CandidateFile from a path
    ///
    /// # Errors
    /// Returns an `InvalidFilename` error if the path has no file name or the
    /// name is not valid Unicode
    pub fn new(path: &Path) -> Result<Self> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| invalid_filename_error(path.to_path_buf()))?
            .to_string();
        let directory = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        Ok(CandidateFile {
            directory,
            file_name,
        })
    }

    /// The full path of the file
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}

/// Scans a directory for files matching the include patterns
///
/// Without `recursive` only direct children of `root` are considered.
/// Entries are visited sorted by file name, and each directory is listed
/// completely before any of its entries are returned, so renaming a
/// returned file never makes it show up a second time.
///
/// Symbolic links are never followed: linked directories are not entered
/// and linked files are not returned. Entries that cannot be read are
/// reported and skipped.
///
/// # Arguments
/// * `root` - The directory to scan
/// * `recursive` - Whether to descend into subdirectories
/// * `include` - The patterns selecting file names
///
/// # Returns
/// * `impl Iterator<Item = CandidateFile>` - The selected files, produced lazily
pub fn scan_directory<'a>(
    root: &Path,
    recursive: bool,
    include: &'a IncludePatterns,
) -> impl Iterator<Item = CandidateFile> + 'a {
    debug!("Scanning directory: {}", root.display());

    let max_depth = if recursive { usize::MAX } else { 1 };

    WalkDir::new(root)
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry: {e}");
                None
            }
        })
        .filter(is_regular_file)
        .filter_map(|entry| match CandidateFile::new(entry.path()) {
            Ok(candidate) => Some(candidate),
            Err(e) => {
                warn!("Skipping {e}");
                None
            }
        })
        .filter(move |candidate| include.matches(&candidate.file_name))
}

/// Checks whether an entry is a regular file, reporting skipped links
fn is_regular_file(entry: &DirEntry) -> bool {
    if entry.path_is_symlink() {
        debug!("Skipping symbolic link: {}", entry.path().display());
        return false;
    }
    entry.file_type().is_file()
}
