//! `LineBuffer` → output text.

use crate::line::LineBuffer;

/// Render the buffer back to a plain line.
///
/// The two boundary pads are dropped. A position that is still free and
/// still holds the placeholder was never consumed by a rule, so it reads
/// back as whatever separator it recorded at preparation time. Everything
/// else is emitted verbatim; no whitespace normalization happens here.
pub fn emit_line(buf: &LineBuffer) -> String {
    let len = buf.len();
    if len <= 2 {
        return String::new();
    }
    let mut out = String::with_capacity(len - 2);
    for pos in 1..len - 1 {
        let ch = buf.ch(pos);
        if buf.is_free(pos) && ch == buf.placeholder() {
            out.push(buf.original(pos));
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prepare::prepare_line;

    #[test]
    fn untouched_line_round_trips() {
        let buf = prepare_line("word one. two,three", '#');
        assert_eq!(emit_line(&buf), "word one. two,three");
    }

    #[test]
    fn empty_line_round_trips() {
        let buf = prepare_line("", '#');
        assert_eq!(emit_line(&buf), "");
    }

    #[test]
    fn locked_placeholder_is_emitted_verbatim() {
        // A user-authored '#' is locked at preparation time and must come
        // back out as '#', not as a separator.
        let buf = prepare_line("a#b", '#');
        assert_eq!(emit_line(&buf), "a#b");
    }
}
