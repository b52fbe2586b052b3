//! Long-bracket delimiters: `[[ ... ]]`, `[==[ ... ]==]`.
//!
//! The opener carries a level (the number of `=` between the brackets) and
//! only a closer with the same level ends the construct. Closers of any
//! other level are ordinary content.
//!
//! # Cost
//!
//! [`find_close`] jumps between `]` bytes with `memchr` and inspects at most
//! `level + 2` bytes after each one. The `=` runs inspected after distinct
//! `]` bytes never overlap, so an unterminated bracket costs one linear pass
//! to EOF.

use crate::cursor::Cursor;

/// Consume a long-bracket opener `[` `=`* `[` and return its level.
///
/// On failure the cursor is left where it was.
pub fn eat_open(cursor: &mut Cursor<'_>) -> Option<usize> {
    let mut probe = *cursor;
    if !probe.eat_byte(b'[') {
        return None;
    }
    let level = probe.eat_ascii_while(|b| b == b'=');
    if !probe.eat_byte(b'[') {
        return None;
    }
    *cursor = probe;
    Some(level)
}

/// Find the first closer `]` `=`{level} `]` at or after `from`.
///
/// Returns the offset just past the closer, or `None` if the source ends
/// first.
pub fn find_close(text: &str, from: usize, level: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut search = from;
    while search < bytes.len() {
        let bracket = search + memchr::memchr(b']', &bytes[search..])?;
        let after = bracket + 1;
        let equals = bytes[after..]
            .iter()
            .take(level + 1)
            .take_while(|&&b| b == b'=')
            .count();
        if equals == level && bytes.get(after + level) == Some(&b']') {
            return Some(after + level + 1);
        }
        search = after;
    }
    None
}
