use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command, command, crate_authors, crate_description};

use crate::constants::{
    ALBUM_NAMING_HELP, CLEAR_COMMENTS_HELP, DEFAULT_INCLUDE_PATTERN, DIRECTORY_HELP,
    DRY_RUN_HELP, INCLUDE_HELP, LOG_FILE_HELP, QUIET_HELP, RECURSIVE_HELP, VERBOSE_HELP,
};
use crate::logging::LogLevel;

/// Sets up and returns the command-line interface definition
///
/// Defines the following arguments:
/// - `directory`: Directory to process (positional, at most one)
/// - `directory_option`: Same as `directory`, given with `-d`
/// - `album_naming`: Use the album naming scheme
/// - `clear_comments`: Remove comment frames after renaming
/// - `recursive`: Process subdirectories
/// - `include`: File name glob, repeatable
/// - `dry`: Run without renaming any files
/// - `verbose` / `quiet`: Verbosity level
/// - `log_file`: Additional log file
pub fn build_command() -> Command {
    // positional directory, a second one is a usage error
    let arg_directory = Arg::new("directory")
        .value_name("DIRECTORY")
        .help(DIRECTORY_HELP)
        .index(1)
        .conflicts_with("directory_option");

    let arg_directory_option = Arg::new("directory_option")
        .short('d')
        .long("directory")
        .value_name("DIR")
        .help(DIRECTORY_HELP);

    let arg_album_naming = Arg::new("album_naming")
        .short('a')
        .long("album-naming")
        .help(ALBUM_NAMING_HELP)
        .action(ArgAction::SetTrue);

    let arg_clear_comments = Arg::new("clear_comments")
        .short('c')
        .long("clear-comments")
        .help(CLEAR_COMMENTS_HELP)
        .action(ArgAction::SetTrue);

    let arg_recursive = Arg::new("recursive")
        .short('r')
        .long("recursive")
        .help(RECURSIVE_HELP)
        .action(ArgAction::SetTrue);

    let arg_include = Arg::new("include")
        .short('i')
        .long("include")
        .value_name("GLOB")
        .help(INCLUDE_HELP)
        .long_help(format!("{INCLUDE_HELP} [default: {DEFAULT_INCLUDE_PATTERN}]"))
        .action(ArgAction::Append);

    let arg_dry = Arg::new("dry")
        .short('n')
        .long("dry")
        .help(DRY_RUN_HELP)
        .action(ArgAction::SetTrue);

    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(ArgAction::Count)
        .conflicts_with("quiet");

    let arg_quiet = Arg::new("quiet")
        .short('q')
        .long("quiet")
        .help(QUIET_HELP)
        .action(ArgAction::SetTrue);

    let arg_log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .value_name("FILE")
        .help(LOG_FILE_HELP);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .arg(arg_directory)
        .arg(arg_directory_option)
        .arg(arg_album_naming)
        .arg(arg_clear_comments)
        .arg(arg_recursive)
        .arg(arg_include)
        .arg(arg_dry)
        .arg(arg_verbose)
        .arg(arg_quiet)
        .arg(arg_log_file)
}

/// Parses the process arguments
///
/// Exits with a usage message on invalid arguments, on `--help` and on
/// `--version`.
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

/// Gets the verbosity level from the command-line arguments
///
/// `--quiet` limits the output to errors, otherwise each `-v` raises the
/// level by one step starting from info.
///
/// # Examples
/// ```
/// # use id3_rename::cli::{build_command, get_verbosity};
/// # use id3_rename::logging::LogLevel;
/// let matches = build_command().get_matches_from(["id3rename", "-v"]);
/// assert_eq!(get_verbosity(&matches), LogLevel::Debug);
/// ```
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    if matches.get_flag("quiet") {
        return LogLevel::Error;
    }
    LogLevel::from_occurrences(matches.get_count("verbose"))
}

/// Gets the optional log file from the command-line arguments
pub fn get_log_file(matches: &ArgMatches) -> Option<PathBuf> {
    matches.get_one::<String>("log_file").map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_command_is_consistent() {
        build_command().debug_assert();
    }

    #[test]
    fn test_verbosity() {
        let matches = build_command().get_matches_from(["id3rename"]);
        assert_eq!(get_verbosity(&matches), LogLevel::Info);

        let matches = build_command().get_matches_from(["id3rename", "-vv"]);
        assert_eq!(get_verbosity(&matches), LogLevel::Trace);

        let matches = build_command().get_matches_from(["id3rename", "--quiet"]);
        assert_eq!(get_verbosity(&matches), LogLevel::Error);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        let result = build_command().try_get_matches_from(["id3rename", "-v", "-q"]);
        assert_eq!(result.unwrap_err().kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_extra_positional_argument_is_rejected() {
        let result = build_command().try_get_matches_from(["id3rename", "one", "two"]);
        assert_eq!(result.unwrap_err().kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_positional_conflicts_with_directory_option() {
        let result = build_command().try_get_matches_from(["id3rename", "one", "-d", "two"]);
        assert_eq!(result.unwrap_err().kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_log_file() {
        let matches = build_command().get_matches_from(["id3rename"]);
        assert_eq!(get_log_file(&matches), None);

        let matches = build_command().get_matches_from(["id3rename", "-l", "run.log"]);
        assert_eq!(get_log_file(&matches), Some(PathBuf::from("run.log")));
    }
}
