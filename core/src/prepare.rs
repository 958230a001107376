//! Raw line → `LineBuffer` conversion.

use crate::line::{LineBuffer, NOT_SEPARATOR};

/// Characters parked behind the placeholder during matching.
const SEPARATORS: [char; 3] = [' ', '.', ','];

/// Convert a raw line into a working buffer.
///
/// The line is padded with one separator position on each side, so every
/// rule can look one position past either end without bounds checks and the
/// emitter can strip the padding unconditionally. Spaces, periods and commas
/// become the placeholder with their literal recorded in the `original`
/// track. A character that already equals the placeholder is locked on the
/// spot — user-authored placeholders must never be rewritten.
pub fn prepare_line(raw: &str, placeholder: char) -> LineBuffer {
    let mut buf = LineBuffer::with_capacity(placeholder, raw.chars().count() + 2);
    buf.push(placeholder, false, ' ');
    for ch in raw.chars() {
        if ch == placeholder {
            buf.push(placeholder, true, placeholder);
        } else if SEPARATORS.contains(&ch) {
            buf.push(placeholder, false, ch);
        } else {
            buf.push(ch, false, NOT_SEPARATOR);
        }
    }
    buf.push(placeholder, false, ' ');
    buf
}
