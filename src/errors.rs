use glob::PatternError;
use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the ID3 Rename application
#[derive(Debug)]
pub enum Error {
    /// Invalid command-line input
    Configuration { message: String },
    /// The directory to process does not exist or is not a directory
    DirectoryNotFound { path: PathBuf },
    /// The directory to process is a symbolic link
    SymlinkNotSupported { path: PathBuf },
    /// Error related to glob pattern matching
    GlobPattern {
        source: PatternError,
        pattern: String,
    },
    /// The file could not be read or carries no ID3 tag
    TagRead { source: id3::Error, path: PathBuf },
    /// A tag required by the naming scheme is absent or empty
    MissingField { path: PathBuf, field: String },
    /// The track number tag is not a number
    InvalidTrackNumber { path: PathBuf, value: String },
    /// Error when a filename is not valid Unicode
    InvalidFilename { path: PathBuf },
    /// The rename itself failed
    Rename {
        source: io::Error,
        path: PathBuf,
        target: PathBuf,
    },
    /// The computed name is already taken by another file
    RenameCollision { path: PathBuf, target: PathBuf },
    /// The comments could not be removed from a renamed file
    CommentClear { source: id3::Error, path: PathBuf },
    /// The directory to process cannot be listed
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
}

impl Error {
    /// Whether the error concerns a single file rather than the whole run
    ///
    /// Per-file errors are reported and the batch moves on to the next file,
    /// all others stop the program before any file is touched.
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            Error::TagRead { .. }
                | Error::MissingField { .. }
                | Error::InvalidTrackNumber { .. }
                | Error::InvalidFilename { .. }
                | Error::Rename { .. }
                | Error::RenameCollision { .. }
                | Error::CommentClear { .. }
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Configuration { message } => {
                write!(f, "Invalid configuration: {message}")
            }
            Error::DirectoryNotFound { path } => {
                write!(f, "{} is not a valid directory", path.display())
            }
            Error::SymlinkNotSupported { path } => {
                write!(f, "Symbolic links not supported: {}", path.display())
            }
            Error::GlobPattern { pattern, .. } => {
                write!(f, "Invalid glob pattern: {pattern}")
            }
            Error::TagRead { source, path } => {
                write!(f, "Failed to read tags of {}: {source}", path.display())
            }
            Error::MissingField { path, field } => {
                write!(f, "Missing {field} tag in {}", path.display())
            }
            Error::InvalidTrackNumber { path, value } => {
                write!(f, "Invalid track number '{value}' in {}", path.display())
            }
            Error::InvalidFilename { path } => {
                write!(f, "Filename is not valid unicode: {}", path.display())
            }
            Error::Rename {
                source,
                path,
                target,
            } => {
                write!(
                    f,
                    "Failed to rename {} to {}: {source}",
                    path.display(),
                    target.display()
                )
            }
            Error::RenameCollision { path, target } => {
                write!(
                    f,
                    "Cannot rename {}: {} already exists",
                    path.display(),
                    target.display()
                )
            }
            Error::CommentClear { source, path } => {
                write!(f, "Failed to clear comments of {}: {source}", path.display())
            }
            Error::FileOperation {
                path, operation, ..
            } => {
                write!(f, "Failed to {} {}", operation, path.display())
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::GlobPattern { source, .. } => Some(source),
            Error::TagRead { source, .. } => Some(source),
            Error::Rename { source, .. } => Some(source),
            Error::CommentClear { source, .. } => Some(source),
            Error::FileOperation { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Custom Result type for the ID3 Rename application
///
/// # Examples
/// ```
/// use id3_rename::prelude::{Result, configuration_error};
///
/// fn example_function(args: &[String]) -> Result<()> {
///     if args.len() > 1 {
///         return Err(configuration_error("too many directories"));
///     }
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a configuration error
pub fn configuration_error(message: &str) -> Error {
    Error::Configuration {
        message: message.to_string(),
    }
}

/// Helper function to create a directory not found error
pub fn directory_not_found_error(path: PathBuf) -> Error {
    Error::DirectoryNotFound { path }
}

/// Helper function to create a symbolic link error
pub fn symlink_not_supported_error(path: PathBuf) -> Error {
    Error::SymlinkNotSupported { path }
}

/// Helper function to create a glob pattern error
pub fn glob_pattern_error(err: PatternError, pattern: &str) -> Error {
    Error::GlobPattern {
        source: err,
        pattern: pattern.to_string(),
    }
}

/// Helper function to create a tag read error
pub fn tag_read_error(err: id3::Error, path: PathBuf) -> Error {
    Error::TagRead { source: err, path }
}

/// Helper function to create a missing field error
pub fn missing_field_error(path: PathBuf, field: &str) -> Error {
    Error::MissingField {
        path,
        field: field.to_string(),
    }
}

/// Helper function to create an invalid track number error
pub fn invalid_track_number_error(path: PathBuf, value: &str) -> Error {
    Error::InvalidTrackNumber {
        path,
        value: value.to_string(),
    }
}

/// Helper function to create an invalid filename error
pub fn invalid_filename_error(path: PathBuf) -> Error {
    Error::InvalidFilename { path }
}

/// Helper function to create a rename error
pub fn rename_error(err: io::Error, path: PathBuf, target: PathBuf) -> Error {
    Error::Rename {
        source: err,
        path,
        target,
    }
}

/// Helper function to create a rename collision error
pub fn rename_collision_error(path: PathBuf, target: PathBuf) -> Error {
    Error::RenameCollision { path, target }
}

/// Helper function to create a comment clearing error
pub fn comment_clear_error(err: id3::Error, path: PathBuf) -> Error {
    Error::CommentClear { source: err, path }
}

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}
