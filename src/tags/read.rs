//! Read the naming tags from an MP3 file.

use std::path::Path;

use id3::frame::Content;
use id3::{Tag, TagLike};
use log::trace;

use crate::constants::{ARTIST_FRAME, TITLE_FRAME, TRACK_FRAME};
use crate::errors::{Result, tag_read_error};

use super::model::TagSet;

/// Reads artist, title and track number from the ID3v2 tag of a file
///
/// # Errors
/// Returns a `TagRead` error if the file cannot be opened or carries no
/// readable ID3v2 tag. Missing frames are not an error here.
pub fn read_tag_set(path: &Path) -> Result<TagSet> {
    let tag = Tag::read_from_path(path).map_err(|e| tag_read_error(e, path.to_path_buf()))?;
    trace!("Read {:?} tag from {}", tag.version(), path.display());

    Ok(tag_set_from_tag(&tag))
}

pub(crate) fn tag_set_from_tag(tag: &Tag) -> TagSet {
    TagSet {
        artist: text_frame(tag, ARTIST_FRAME),
        title: text_frame(tag, TITLE_FRAME),
        track_number: text_frame(tag, TRACK_FRAME),
    }
}

/// Get the first value of a text frame. ID3v2.4 frames may hold several
/// values separated by NUL.
fn text_frame(tag: &Tag, id: &str) -> Option<String> {
    match tag.get(id)?.content() {
        Content::Text(s) => s.split('\0').next().map(str::to_string),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use id3::Version;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_tag_set_from_tag() {
        let mut tag = Tag::new();
        tag.set_artist("Foo");
        tag.set_title("Bar");
        tag.set_text(TRACK_FRAME, "7/12");

        let tags = tag_set_from_tag(&tag);

        assert_eq!(tags.artist.as_deref(), Some("Foo"));
        assert_eq!(tags.title.as_deref(), Some("Bar"));
        assert_eq!(tags.track_number.as_deref(), Some("7/12"));
    }

    #[test]
    fn test_missing_frames_are_none() {
        let mut tag = Tag::new();
        tag.set_title("Only Title");

        let tags = tag_set_from_tag(&tag);

        assert_eq!(tags.artist, None);
        assert_eq!(tags.track_number, None);
    }

    #[test]
    fn test_read_tag_set_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a.mp3");
        File::create(&path).unwrap();

        let mut tag = Tag::new();
        tag.set_artist("Foo");
        tag.set_title("Bar");
        tag.write_to_path(&path, Version::Id3v24).unwrap();

        let tags = read_tag_set(&path).unwrap();
        assert_eq!(tags, TagSet::new("Foo", "Bar"));
    }

    #[test]
    fn test_multiple_values_use_the_first() {
        let mut tag = Tag::new();
        tag.set_text_values(ARTIST_FRAME, ["Artist A", "Artist B"]);
        tag.set_text_values(TITLE_FRAME, ["Song", "Alternate Title"]);
        tag.set_text_values(TRACK_FRAME, ["3/10", "4/10"]);

        let tags = tag_set_from_tag(&tag);

        assert_eq!(tags.artist.as_deref(), Some("Artist A"));
        assert_eq!(tags.title.as_deref(), Some("Song"));
        assert_eq!(tags.track_number.as_deref(), Some("3/10"));
    }

    #[test]
    fn test_multiple_values_read_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a.mp3");
        File::create(&path).unwrap();

        let mut tag = Tag::new();
        tag.set_text_values(ARTIST_FRAME, ["Artist A", "Artist B"]);
        tag.set_title("Song");
        tag.write_to_path(&path, Version::Id3v24).unwrap();

        let tags = read_tag_set(&path).unwrap();
        assert_eq!(tags, TagSet::new("Artist A", "Song"));
    }

    #[test]
    fn test_read_untagged_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("plain.mp3");
        std::fs::write(&path, b"not an mp3 at all").unwrap();

        assert!(read_tag_set(&path).is_err());
    }

    #[test]
    fn test_read_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        assert!(read_tag_set(&temp_dir.path().join("missing.mp3")).is_err());
    }
}
