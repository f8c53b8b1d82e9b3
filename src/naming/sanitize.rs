//! File name sanitisation
//!
//! Tag values are free text, so anything that is not allowed in a file name
//! on common platforms is deleted before the name is used.

use crate::constants::FORBIDDEN_CHARACTERS;

/// Checks whether a character may not appear in a file name
pub fn is_forbidden(c: char) -> bool {
    FORBIDDEN_CHARACTERS.contains(&c)
}

/// Removes every forbidden character from a file name
///
/// Characters are deleted, not replaced, so applying the function twice
/// gives the same result as applying it once.
///
/// # Examples
/// ```
/// use id3_rename::naming::sanitize_filename;
///
/// assert_eq!(sanitize_filename("AC/DC - What?.mp3"), "ACDC - What.mp3");
/// ```
pub fn sanitize_filename(name: &str) -> String {
    name.chars().filter(|c| !is_forbidden(*c)).collect()
}
