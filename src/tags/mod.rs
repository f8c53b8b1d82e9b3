//! ID3 tag access
//!
//! The renamer only needs two capabilities from a tag library, reading the
//! naming tags and deleting comments. They are expressed by [`TagStore`] so
//! the workflow can be driven without real audio files.

mod model;
mod read;
mod write;

use std::path::Path;

use crate::errors::Result;

pub use model::TagSet;
pub use read::read_tag_set;
pub use write::clear_comment_frames;

/// Access to the metadata of a single file
pub trait TagStore {
    /// Reads artist, title and track number
    fn read_tags(&self, path: &Path) -> Result<TagSet>;

    /// Deletes all comment frames, returning how many were removed
    fn clear_comments(&self, path: &Path) -> Result<usize>;
}

/// [`TagStore`] backed by the `id3` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct Id3TagStore;

impl TagStore for Id3TagStore {
    fn read_tags(&self, path: &Path) -> Result<TagSet> {
        read_tag_set(path)
    }

    fn clear_comments(&self, path: &Path) -> Result<usize> {
        clear_comment_frames(path)
    }
}
