//! File discovery module
//!
//! This module contains components for scanning directories and finding files.

mod matcher;
mod scanner;

pub use matcher::IncludePatterns;
pub use scanner::{CandidateFile, scan_directory};
