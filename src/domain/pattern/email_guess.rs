//! Candidate address synthesis from a display name.

use super::{split_name, PatternError, FULL_NAME_DELIMITER, LOCAL_PART_DELIMITER};

/// Guesses the address of `full_name` at `domain`.
///
/// The name is split with the same positional rule used for stored records
/// and the present parts are joined with dots. Casing is preserved exactly
/// as given. Nothing is looked up: two people with the same name get the
/// same guess.
///
/// A single-token name becomes the whole local-part after trimming, so
/// `" Cher "` guesses `Cher@domain`. Repeated spaces inside the name are
/// kept as empty parts and show up as repeated dots.
pub fn guess_email(full_name: &str, domain: &str) -> Result<String, PatternError> {
    if full_name.trim().is_empty() {
        return Err(PatternError::empty("fullname"));
    }
    if domain.trim().is_empty() {
        return Err(PatternError::empty("domain"));
    }

    let local_part = split_name(full_name, FULL_NAME_DELIMITER).join(LOCAL_PART_DELIMITER);
    Ok(format!("{}@{}", local_part, domain.trim()))
}
