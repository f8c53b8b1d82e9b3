//! Configuration data structures
//!
//! This module contains the data structures for configuration.

use std::fs::{read_dir, symlink_metadata};
use std::path::PathBuf;

use crate::discovery::IncludePatterns;
use crate::errors::{
    Result, directory_not_found_error, file_operation_error, symlink_not_supported_error,
};

/// How the new file name is assembled from the tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamingScheme {
    /// `{artist} - {title}.mp3`
    #[default]
    Artist,
    /// `{artist} -{NN}- {title}.mp3`
    Album,
}

impl NamingScheme {
    /// Picks the scheme matching the `--album-naming` flag
    pub fn from_album_flag(album_naming: bool) -> Self {
        if album_naming {
            NamingScheme::Album
        } else {
            NamingScheme::Artist
        }
    }
}

/// Configuration for a single run of the renamer
///
/// Built once at startup and passed by reference to every operation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory whose files are renamed
    pub root: PathBuf,
    /// Whether subdirectories of `root` are processed as well
    pub recursive: bool,
    /// Naming scheme used for the new file names
    pub naming: NamingScheme,
    /// Whether comment frames are removed after renaming
    pub clear_comments: bool,
    /// File name patterns selecting the files to process
    pub include: IncludePatterns,
    /// Whether to only report what would be done
    pub dry_run: bool,
}

impl Config {
    /// Creates a configuration for `root` with every option at its default
    pub fn new(root: PathBuf) -> Self {
        Config {
            root,
            recursive: false,
            naming: NamingScheme::default(),
            clear_comments: false,
            include: IncludePatterns::default(),
            dry_run: false,
        }
    }

    /// Validates the configuration
    ///
    /// The root has to be an existing, readable directory and must not be a
    /// symbolic link. Nothing is renamed when this fails.
    ///
    /// # Errors
    /// * `DirectoryNotFound` if the root does not exist or is not a directory
    /// * `SymlinkNotSupported` if the root is a symbolic link
    /// * `FileOperation` if the root cannot be listed
    pub fn validate(&self) -> Result<()> {
        let metadata = symlink_metadata(&self.root)
            .map_err(|_| directory_not_found_error(self.root.clone()))?;

        if metadata.file_type().is_symlink() {
            return Err(symlink_not_supported_error(self.root.clone()));
        }

        if !metadata.is_dir() {
            return Err(directory_not_found_error(self.root.clone()));
        }

        read_dir(&self.root).map_err(|e| file_operation_error(e, self.root.clone(), "list"))?;

        Ok(())
    }
}
