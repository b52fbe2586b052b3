//! String escape sequences.
//!
//! Recognized after a `\`:
//! - `a b f n r t v \ " '` (named escapes)
//! - one or two line-break characters (`\r`/`\n` in any combination)
//! - `z` followed by any amount of whitespace
//! - `x` followed by exactly two hex digits
//! - one to three decimal digits
//! - `u{...}` with one or more hex digits
//!
//! Anything else is not an escape; the caller decides what to do with the
//! backslash.

use crate::chars::is_space;
use crate::cursor::Cursor;

/// Consume one escape sequence starting at a `\`.
///
/// On failure the cursor is left where it was.
pub fn eat_escape(cursor: &mut Cursor<'_>) -> bool {
    let mut probe = *cursor;
    if !probe.eat_byte(b'\\') {
        return false;
    }
    let ok = match probe.current_byte() {
        Some(b'a' | b'b' | b'f' | b'n' | b'r' | b't' | b'v' | b'\\' | b'"' | b'\'') => {
            probe.advance_char().is_some()
        }
        Some(b'\r' | b'\n') => {
            probe.eat_any_byte(b"\r\n");
            probe.eat_any_byte(b"\r\n");
            true
        }
        Some(b'z') => {
            probe.advance_char();
            probe.eat_while(is_space);
            true
        }
        Some(b'x') => {
            probe.advance_char();
            probe.eat_if(|c| c.is_ascii_hexdigit()) && probe.eat_if(|c| c.is_ascii_hexdigit())
        }
        Some(b'0'..=b'9') => {
            for _ in 0..3 {
                if !probe.eat_if(|c| c.is_ascii_digit()) {
                    break;
                }
            }
            true
        }
        Some(b'u') => {
            probe.advance_char();
            probe.eat_byte(b'{')
                && probe.eat_ascii_while(|b| b.is_ascii_hexdigit()) > 0
                && probe.eat_byte(b'}')
        }
        _ => false,
    };
    if ok {
        *cursor = probe;
    }
    ok
}
