use super::Cursor;

// === Basic Navigation ===

#[test]
fn current_returns_first_char() {
    let cursor = Cursor::new("abc", 0);
    assert_eq!(cursor.current(), Some('a'));
    assert_eq!(cursor.current_byte(), Some(b'a'));
}

#[test]
fn advance_char_moves_forward() {
    let mut cursor = Cursor::new("abc", 0);
    assert_eq!(cursor.advance_char(), Some('a'));
    assert_eq!(cursor.current(), Some('b'));
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_char_steps_over_multibyte() {
    let mut cursor = Cursor::new("λx", 0);
    assert_eq!(cursor.advance_char(), Some('λ'));
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.current(), Some('x'));
}

#[test]
fn starts_mid_text() {
    let cursor = Cursor::new("local x", 6);
    assert_eq!(cursor.current(), Some('x'));
    assert_eq!(cursor.rest(), "x");
}

// === EOF ===

#[test]
fn eof_after_last_char() {
    let mut cursor = Cursor::new("x", 0);
    assert!(!cursor.is_eof());
    cursor.advance_char();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), None);
    assert_eq!(cursor.current_byte(), None);
    assert_eq!(cursor.advance_char(), None);
    assert_eq!(cursor.rest(), "");
}

#[test]
fn empty_source_is_eof() {
    let cursor = Cursor::new("", 0);
    assert!(cursor.is_eof());
}

// === Conditional Consumption ===

#[test]
fn eat_byte_only_on_match() {
    let mut cursor = Cursor::new("::", 0);
    assert!(!cursor.eat_byte(b'.'));
    assert_eq!(cursor.pos(), 0);
    assert!(cursor.eat_byte(b':'));
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn eat_any_byte_checks_set() {
    let mut cursor = Cursor::new("p+", 0);
    assert!(cursor.eat_any_byte(b"pP"));
    assert!(cursor.eat_any_byte(b"+-"));
    assert!(!cursor.eat_any_byte(b"+-"));
}

#[test]
fn eat_str_prefix() {
    let mut cursor = Cursor::new("--[[x", 0);
    assert!(!cursor.eat_str("--[=["));
    assert!(cursor.eat_str("--"));
    assert_eq!(cursor.rest(), "[[x");
}

#[test]
fn eat_if_predicate() {
    let mut cursor = Cursor::new("a1", 0);
    assert!(!cursor.eat_if(|c| c.is_ascii_digit()));
    assert!(cursor.eat_if(char::is_alphabetic));
    assert!(cursor.eat_if(|c| c.is_ascii_digit()));
    assert!(!cursor.eat_if(|_| true));
}

#[test]
fn eat_while_returns_byte_count() {
    let mut cursor = Cursor::new("héllo world", 0);
    assert_eq!(cursor.eat_while(char::is_alphabetic), 6);
    assert_eq!(cursor.current(), Some(' '));
}

#[test]
fn eat_while_to_eof() {
    let mut cursor = Cursor::new("abc", 0);
    assert_eq!(cursor.eat_while(|_| true), 3);
    assert!(cursor.is_eof());
}

#[test]
fn eat_ascii_while_digits() {
    let mut cursor = Cursor::new("123abc", 0);
    assert_eq!(cursor.eat_ascii_while(|b| b.is_ascii_digit()), 3);
    assert_eq!(cursor.rest(), "abc");
}

// === Line Scanning ===

#[test]
fn eat_until_newline_stops_before_newline() {
    let mut cursor = Cursor::new("-- note\nx", 0);
    cursor.eat_until_newline();
    assert_eq!(cursor.pos(), 7);
    assert_eq!(cursor.current(), Some('\n'));
}

#[test]
fn eat_until_newline_without_newline_reaches_eof() {
    let mut cursor = Cursor::new("-- trailing", 3);
    cursor.eat_until_newline();
    assert!(cursor.is_eof());
}

#[test]
fn eat_until_newline_keeps_carriage_return() {
    let mut cursor = Cursor::new("ab\r\ncd", 0);
    cursor.eat_until_newline();
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn jump_to_moves_forward() {
    let mut cursor = Cursor::new("[[ body ]]", 2);
    cursor.jump_to(10);
    assert!(cursor.is_eof());
    assert_eq!(cursor.consumed_since(2), 8);
}

// === Snapshots ===

#[test]
fn copy_is_independent_snapshot() {
    let cursor = Cursor::new("abc", 0);
    let mut probe = cursor;
    probe.advance_char();
    assert_eq!(cursor.pos(), 0);
    assert_eq!(probe.pos(), 1);
}
