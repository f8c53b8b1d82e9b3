//! File operations module
//!
//! This module contains components for renaming files.

mod actions;

pub use actions::{FileActionResult, RenameStatus, rename_in_place};
