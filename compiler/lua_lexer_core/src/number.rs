//! Numeric literal matchers.
//!
//! Each matcher consumes the longest numeral of its shape and returns
//! `false` (cursor untouched) when the shape does not start here. Markers
//! (`x`, `p`, `e`) are case-insensitive. An exponent marker that is not
//! followed by digits is left unconsumed, so `1e` scans as `1` and then a
//! name.

use crate::cursor::Cursor;

/// `0x[\da-f]*(\.[\da-f]*)?(p[+-]?\d+)?`
///
/// The digit runs may be empty, so `0x` alone is a hex numeral.
pub fn eat_hex(cursor: &mut Cursor<'_>) -> bool {
    let mut probe = *cursor;
    if !probe.eat_byte(b'0') || !probe.eat_any_byte(b"xX") {
        return false;
    }
    probe.eat_ascii_while(|b| b.is_ascii_hexdigit());
    if probe.eat_byte(b'.') {
        probe.eat_ascii_while(|b| b.is_ascii_hexdigit());
    }
    eat_exponent(&mut probe, b"pP");
    *cursor = probe;
    true
}

/// `(\d*\.\d+|\d+\.\d*)(e[+-]?\d+)?`
///
/// Requires a `.` with at least one digit on either side of it.
pub fn eat_decimal_float(cursor: &mut Cursor<'_>) -> bool {
    let mut probe = *cursor;
    let int_digits = eat_digits(&mut probe);
    if !probe.eat_byte(b'.') {
        return false;
    }
    let frac_digits = eat_digits(&mut probe);
    if int_digits + frac_digits == 0 {
        return false;
    }
    eat_exponent(&mut probe, b"eE");
    *cursor = probe;
    true
}

/// `\d+e[+-]?\d+`
pub fn eat_exponent_float(cursor: &mut Cursor<'_>) -> bool {
    let mut probe = *cursor;
    if eat_digits(&mut probe) == 0 || !eat_exponent(&mut probe, b"eE") {
        return false;
    }
    *cursor = probe;
    true
}

/// `\d+`
pub fn eat_integer(cursor: &mut Cursor<'_>) -> bool {
    eat_digits(cursor) > 0
}

fn eat_digits(cursor: &mut Cursor<'_>) -> usize {
    cursor.eat_ascii_while(|b| b.is_ascii_digit())
}

/// `marker[+-]?\d+`, all or nothing.
fn eat_exponent(cursor: &mut Cursor<'_>, markers: &[u8]) -> bool {
    let mut probe = *cursor;
    if !probe.eat_any_byte(markers) {
        return false;
    }
    probe.eat_any_byte(b"+-");
    if eat_digits(&mut probe) == 0 {
        return false;
    }
    *cursor = probe;
    true
}
