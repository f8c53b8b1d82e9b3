//! Configuration module
//!
//! This module contains components for loading and validating configuration.

mod loader;
mod model;

pub use loader::{build_config, expand_directory, load_config};
pub use model::{Config, NamingScheme};
