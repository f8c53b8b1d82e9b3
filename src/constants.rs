/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Pattern used when no `--include` option is given
pub const DEFAULT_INCLUDE_PATTERN: &str = "*.mp3";

/// Directory processed when none is given on the command line
pub const DEFAULT_DIRECTORY: &str = ".";

/// Extension appended to every computed file name
pub const TARGET_EXTENSION: &str = ".mp3";

/// Characters deleted from computed file names
///
/// Both path separators are included so a tag value can never move a file
/// out of its directory.
pub const FORBIDDEN_CHARACTERS: [char; 9] = ['"', '*', '/', ':', '<', '>', '?', '|', '\\'];

/// ID3v2 frame holding the lead artist
pub const ARTIST_FRAME: &str = "TPE1";

/// ID3v2 frame holding the title
pub const TITLE_FRAME: &str = "TIT2";

/// ID3v2 frame holding the track number, optionally as "N/total"
pub const TRACK_FRAME: &str = "TRCK";

/// ID3v2 comment frame
pub const COMMENT_FRAME: &str = "COMM";

/// Help text for the album-naming command-line option
pub const ALBUM_NAMING_HELP: &str = "Album naming scheme (artist -track- title)";

/// Help text for the clear-comments command-line option
pub const CLEAR_COMMENTS_HELP: &str = "Clear the comments field of renamed files";

/// Help text for the recursive command-line option
pub const RECURSIVE_HELP: &str = "Process subdirectories as well";

/// Help text for the directory command-line option
pub const DIRECTORY_HELP: &str = "Process files in this directory";

/// Help text for the include command-line option
pub const INCLUDE_HELP: &str =
    "Only process file names matching this glob (can be used multiple times)";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Report the new names without renaming any files";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the quiet command-line option
pub const QUIET_HELP: &str = "Only report errors";

/// Help text for the log-file command-line option
pub const LOG_FILE_HELP: &str = "Additionally write the log to this file";
