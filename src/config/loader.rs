//! Configuration loading functionality
//!
//! This module turns parsed command-line arguments into a validated [`Config`].

use std::path::PathBuf;

use clap::ArgMatches;
use log::{debug, info};
use shellexpand::tilde;

use crate::constants::DEFAULT_DIRECTORY;
use crate::discovery::IncludePatterns;
use crate::errors::{Result, configuration_error};

use super::model::{Config, NamingScheme};

/// Loads the configuration from command-line arguments
///
/// The directory may be given either positionally or with `--directory`;
/// when neither is present the current directory is used. A leading `~` is
/// expanded to the home directory.
///
/// # Arguments
/// * `matches` - The parsed command-line arguments
///
/// # Returns
/// * `Result<Config>` - The validated configuration or an error
///
/// # Errors
/// Returns an error if an include pattern is invalid or the directory
/// cannot be processed
pub fn load_config(matches: &ArgMatches) -> Result<Config> {
    let config = build_config(matches)?;
    config.validate()?;

    info!(
        "Processing {}{}",
        config.root.display(),
        if config.recursive { " recursively" } else { "" }
    );
    debug!("Including {}", config.include.as_strings().join(", "));
    debug!("Configuration: {config:?}");

    Ok(config)
}

/// Builds the configuration without checking the directory
pub fn build_config(matches: &ArgMatches) -> Result<Config> {
    let directory = matches
        .get_one::<String>("directory")
        .or_else(|| matches.get_one::<String>("directory_option"))
        .map(String::as_str)
        .unwrap_or(DEFAULT_DIRECTORY);

    if directory.trim().is_empty() {
        return Err(configuration_error("directory must not be empty"));
    }

    let include = match matches.get_many::<String>("include") {
        Some(patterns) => IncludePatterns::new(patterns.map(String::as_str))?,
        None => IncludePatterns::default(),
    };

    Ok(Config {
        root: expand_directory(directory),
        recursive: matches.get_flag("recursive"),
        naming: NamingScheme::from_album_flag(matches.get_flag("album_naming")),
        clear_comments: matches.get_flag("clear_comments"),
        include,
        dry_run: matches.get_flag("dry"),
    })
}

/// Expands a leading `~` in a directory argument
pub fn expand_directory(directory: &str) -> PathBuf {
    PathBuf::from(tilde(directory).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::build_command;
    use crate::errors::Error;

    fn matches_for(args: &[&str]) -> ArgMatches {
        build_command()
            .try_get_matches_from(std::iter::once("id3rename").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = build_config(&matches_for(&[])).unwrap();

        assert_eq!(config.root, PathBuf::from("."));
        assert!(!config.recursive);
        assert_eq!(config.naming, NamingScheme::Artist);
        assert!(!config.clear_comments);
        assert!(!config.dry_run);
        assert!(config.include.matches("song.mp3"));
        assert!(!config.include.matches("notes.txt"));
    }

    #[test]
    fn test_flags() {
        let config = build_config(&matches_for(&["-a", "-c", "-r", "-n", "music"])).unwrap();

        assert_eq!(config.root, PathBuf::from("music"));
        assert!(config.recursive);
        assert_eq!(config.naming, NamingScheme::Album);
        assert!(config.clear_comments);
        assert!(config.dry_run);
    }

    #[test]
    fn test_directory_option() {
        let config = build_config(&matches_for(&["--directory", "albums"])).unwrap();
        assert_eq!(config.root, PathBuf::from("albums"));
    }

    #[test]
    fn test_include_patterns() {
        let config =
            build_config(&matches_for(&["-i", "*.MP3", "--include", "*.mp3"])).unwrap();

        assert!(config.include.matches("a.MP3"));
        assert!(config.include.matches("b.mp3"));
        assert!(!config.include.matches("c.flac"));
    }

    #[test]
    fn test_invalid_include_pattern() {
        let result = build_config(&matches_for(&["-i", "[abc"]));
        assert!(matches!(result, Err(Error::GlobPattern { .. })));
    }

    #[test]
    fn test_empty_directory_is_rejected() {
        let result = build_config(&matches_for(&[""]));
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_expand_directory() {
        assert_eq!(expand_directory("music"), PathBuf::from("music"));
        if std::env::var_os("HOME").is_some() {
            assert!(!expand_directory("~/music").starts_with("~"));
        }
    }

    #[test]
    fn test_load_config_rejects_missing_directory() {
        let result = load_config(&matches_for(&["/definitely/not/a/real/dir"]));
        assert!(matches!(result, Err(Error::DirectoryNotFound { .. })));
    }
}
