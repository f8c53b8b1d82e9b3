use anyhow::Result;
use clap::ArgMatches;

pub mod cli;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod file_ops;
pub mod logging;
pub mod naming;
pub mod tags;
pub mod workflow;

pub mod prelude {
    pub use crate::cli::{get_log_file, get_matches, get_verbosity};
    pub use crate::config::{Config, NamingScheme, load_config};
    pub use crate::errors::{
        comment_clear_error, configuration_error, directory_not_found_error,
        file_operation_error, glob_pattern_error, invalid_filename_error,
        invalid_track_number_error, missing_field_error, rename_collision_error, rename_error,
        symlink_not_supported_error, tag_read_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::logging::{LogLevel, format_message, init_logger};
    pub use crate::perform_processing_based_on_arguments;
    pub use crate::tags::{Id3TagStore, TagSet, TagStore};
    pub use crate::workflow::{WorkflowContext, WorkflowStats, process_files};
}

/// Renames the files selected by the command-line arguments
///
/// # Errors
/// Returns an error if the arguments describe an unusable configuration.
/// Problems with individual files are reported and counted, not returned.
pub fn perform_processing_based_on_arguments(
    matches: &ArgMatches,
) -> Result<workflow::WorkflowContext> {
    let configuration = config::load_config(matches)?;
    workflow::process_files(&configuration, &tags::Id3TagStore)
}
