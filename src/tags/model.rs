//! Tag values used for naming

/// The tags a file name is built from
///
/// Every field is `None` when the file does not carry the frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    pub artist: Option<String>,
    pub title: Option<String>,
    /// Raw track number text, e.g. `"7"` or `"7/12"`
    pub track_number: Option<String>,
}

impl TagSet {
    pub fn new(artist: &str, title: &str) -> Self {
        TagSet {
            artist: Some(artist.to_string()),
            title: Some(title.to_string()),
            track_number: None,
        }
    }

    pub fn with_track_number(mut self, track_number: &str) -> Self {
        self.track_number = Some(track_number.to_string());
        self
    }
}
