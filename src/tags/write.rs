//! Remove comment frames from an MP3 file.

use std::path::Path;

use id3::{Tag, TagLike};
use log::debug;

use crate::constants::COMMENT_FRAME;
use crate::errors::{Result, comment_clear_error};

/// Deletes every comment frame and writes the tag back
///
/// The tag keeps its ID3v2 version. When there is nothing to remove the file
/// is left alone.
///
/// # Returns
/// * `Result<usize>` - The number of comment frames removed
///
/// # Errors
/// Returns a `CommentClear` error if the tag cannot be read or written
pub fn clear_comment_frames(path: &Path) -> Result<usize> {
    let mut tag =
        Tag::read_from_path(path).map_err(|e| comment_clear_error(e, path.to_path_buf()))?;

    let removed = tag.remove(COMMENT_FRAME).len();
    if removed == 0 {
        debug!("No comments to clear in {}", path.display());
        return Ok(0);
    }

    let version = tag.version();
    tag.write_to_path(path, version)
        .map_err(|e| comment_clear_error(e, path.to_path_buf()))?;

    debug!("Cleared {removed} comment(s) in {}", path.display());
    Ok(removed)
}
