//! File matching functionality
//!
//! This module decides which file names are selected for renaming.

use glob::Pattern;
use once_cell::sync::Lazy;

use crate::constants::DEFAULT_INCLUDE_PATTERN;
use crate::errors::{Result, glob_pattern_error};

/// Set of shell-style patterns a file name has to match to be processed
///
/// A name is selected when it matches at least one of the patterns. The
/// patterns are matched against the base name only, never the full path.
#[derive(Debug, Clone)]
pub struct IncludePatterns {
    patterns: Vec<Pattern>,
}

impl IncludePatterns {
    /// Compiles the given glob patterns
    ///
    /// An empty list falls back to the default `*.mp3`.
    ///
    /// # Errors
    /// Returns a `GlobPattern` error for the first pattern that does not compile
    pub fn new<'a, I>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| Pattern::new(p).map_err(|e| glob_pattern_error(e, p)))
            .collect::<Result<Vec<Pattern>>>()?;

        if patterns.is_empty() {
            return Ok(IncludePatterns::default());
        }

        Ok(IncludePatterns { patterns })
    }

    /// Checks whether a file name is selected
    pub fn matches(&self, filename: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(filename))
    }

    /// The patterns as given, for reporting
    pub fn as_strings(&self) -> Vec<&str> {
        self.patterns.iter().map(Pattern::as_str).collect()
    }
}

impl Default for IncludePatterns {
    fn default() -> Self {
        static DEFAULT_PATTERN: Lazy<Pattern> = Lazy::new(|| {
            Pattern::new(DEFAULT_INCLUDE_PATTERN)
                .expect("Failed to compile glob pattern for DEFAULT_PATTERN")
        });

        IncludePatterns {
            patterns: vec![DEFAULT_PATTERN.clone()],
        }
    }
}
