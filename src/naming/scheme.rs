//! Building the new file name from the tags
//!
//! This module contains the pure part of a rename: given the tags of a file
//! and a naming scheme, work out what the file should be called.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::NamingScheme;
use crate::constants::TARGET_EXTENSION;
use crate::errors::{Result, invalid_track_number_error, missing_field_error};
use crate::tags::TagSet;

use super::sanitize::sanitize_filename;

/// Extracts the track number from a tag value such as `"7"` or `"7/12"`
///
/// Only the part before the first `/` is used. Surrounding whitespace is
/// ignored. The digits are kept as text, so a track number of any length is
/// accepted, and padded with zeros to at least two characters.
///
/// # Returns
/// * `Option<String>` - The padded track number, or `None` if the value is not a number
pub fn parse_track_number(value: &str) -> Option<String> {
    static TRACK_RE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^\s*(\d+)\s*(?:/.*)?$")
            .expect("Failed to compile regex pattern for TRACK_RE")
    });

    TRACK_RE
        .captures(value)
        .and_then(|c| c.get(1))
        .map(|m| format!("{:0>2}", m.as_str().trim_start_matches('0')))
}

/// Computes the sanitised file name for a set of tags
///
/// * [`NamingScheme::Artist`] gives `"{artist} - {title}.mp3"`
/// * [`NamingScheme::Album`] gives `"{artist} -{track}- {title}.mp3"`
///
/// The track number is padded to at least two digits and never truncated.
/// Forbidden characters are deleted from the result.
///
/// # Arguments
/// * `path` - The file the tags belong to, used for error reporting
/// * `tags` - The tags read from the file
/// * `scheme` - The naming scheme to apply
///
/// # Errors
/// * `MissingField` if artist or title (or the track number with the album
///   scheme) is absent, blank or made up only of forbidden characters
/// * `InvalidTrackNumber` if the track number is not a number
///
/// # Examples
/// ```
/// use std::path::Path;
/// use id3_rename::config::NamingScheme;
/// use id3_rename::naming::compute_file_name;
/// use id3_rename::tags::TagSet;
///
/// let tags = TagSet::new("Foo", "Bar").with_track_number("7/12");
/// let name = compute_file_name(Path::new("a.mp3"), &tags, NamingScheme::Album).unwrap();
/// assert_eq!(name, "Foo -07- Bar.mp3");
/// ```
pub fn compute_file_name(path: &Path, tags: &TagSet, scheme: NamingScheme) -> Result<String> {
    let artist = required_field(path, "artist", tags.artist.as_deref())?;
    let title = required_field(path, "title", tags.title.as_deref())?;

    let name = match scheme {
        NamingScheme::Artist => format!("{artist} - {title}{TARGET_EXTENSION}"),
        NamingScheme::Album => {
            let raw = required_field(path, "track number", tags.track_number.as_deref())?;
            let track = parse_track_number(raw)
                .ok_or_else(|| invalid_track_number_error(path.to_path_buf(), raw))?;
            format!("{artist} -{track}- {title}{TARGET_EXTENSION}")
        }
    };

    Ok(sanitize_filename(&name))
}

/// Returns the value of a required tag, failing if nothing usable is left
fn required_field<'a>(path: &Path, field: &str, value: Option<&'a str>) -> Result<&'a str> {
    match value {
        Some(v) if !sanitize_filename(v).trim().is_empty() => Ok(v),
        _ => Err(missing_field_error(path.to_path_buf(), field)),
    }
}
