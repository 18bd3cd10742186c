//! Merging of identifier and digest characters into the code body.

use crate::layout::Layout;
use csv_code_types::{ValidationError, ValidationResult, BODY_LEN, DIGEST_WIDTH};

/// Builds the 28-character body.
///
/// Positions `0..28` are visited in order. Positions that belong to `layout` take the next
/// character of `document_id`, every other position takes the next character of `digest`. Both
/// cursors only move forward. Seven identifier characters and the first 21 digest characters are
/// consumed; any further digest characters are ignored.
///
/// # Errors
///
/// Returns [`ValidationError::DigestTooShort`] if `digest` has fewer than 21 characters. A
/// `document_id` shorter than seven characters is reported the same way as it also leaves the
/// body incomplete.
pub fn interleave(document_id: &str, digest: &str, layout: &Layout) -> ValidationResult<String> {
    let available = digest.chars().count();
    if available < DIGEST_WIDTH {
        return Err(ValidationError::DigestTooShort {
            required: DIGEST_WIDTH,
            actual: available,
        });
    }

    let mut id_chars = document_id.chars();
    let mut digest_chars = digest.chars();

    (0..BODY_LEN)
        .map(|pos| {
            if layout.is_document_position(pos) {
                id_chars.next()
            } else {
                digest_chars.next()
            }
        })
        .collect::<Option<String>>()
        .ok_or(ValidationError::DigestTooShort {
            required: DIGEST_WIDTH,
            actual: available,
        })
}
