//! Longest-match-first substitution over a prepared line buffer.
//!
//! Each rule runs one full left-to-right scan before the next rule starts;
//! rules are never interleaved mid-scan. Longest input pattern first, with
//! all of a rule's matches resolved before shorter rules run, is what makes
//! longest-match-wins deterministic for overlapping pattern sets.

use tracing::trace;

use crate::line::LineBuffer;
use crate::rules::RuleTable;

/// Apply every rule of `table` to `buf` in application order.
///
/// A match requires exact pattern equality — the placeholder is an ordinary
/// symbol, so rules may match across former separators — and every window
/// position still free. On a hit the window is resized to the output length,
/// the output is written, and the cursor jumps past the written window so a
/// rule never matches its own output. Later (shorter) rules still see the
/// written content but find it locked.
pub fn apply(buf: &mut LineBuffer, table: &RuleTable) {
    let placeholder = buf.placeholder();

    for rule in table.ordered() {
        let input = rule.input();
        let output = rule.output();
        let in_len = input.len();
        let out_len = output.len();
        // An empty input pattern matches everywhere without consuming
        // anything; skip it rather than stall the scan.
        if in_len == 0 {
            continue;
        }

        let mut pos = 0;
        while pos + in_len <= buf.len() {
            if buf.window(pos, in_len) != input {
                pos += 1;
                continue;
            }

            // Freeness check. A placeholder inside the window donates its
            // recorded separator; the last one seen wins.
            let mut free = true;
            let mut sepkeep = ' ';
            for idx in pos..pos + in_len {
                if !buf.is_free(idx) {
                    free = false;
                    break;
                }
                if buf.ch(idx) == placeholder {
                    sepkeep = buf.original(idx);
                }
            }
            if !free {
                pos += 1;
                continue;
            }

            if out_len > in_len {
                buf.insert_gap(pos + in_len, out_len - in_len);
            } else if out_len < in_len {
                buf.remove_range(pos + out_len..pos + in_len);
            }

            for (offset, &ch) in output.iter().enumerate() {
                if ch == placeholder {
                    buf.write_separator(pos + offset, sepkeep);
                } else {
                    buf.write_locked(pos + offset, ch);
                }
            }

            trace!(pos, in_len, out_len, "replaced pattern");
            pos += out_len;
        }
    }
}
