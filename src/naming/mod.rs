//! File name generation module
//!
//! This module contains components for building file names from tags.

mod sanitize;
mod scheme;

pub use sanitize::{is_forbidden, sanitize_filename};
pub use scheme::{compute_file_name, parse_track_number};
