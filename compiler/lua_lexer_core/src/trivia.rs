//! Trivia skipping for zero-width lookahead.
//!
//! Identifier roles depend on the next significant character, which may sit
//! behind whitespace and comments. The skipper tries the same shapes, in the
//! same order, as the lexer's trivia rules: long comment first, then line
//! comment, then whitespace. Whatever the skipper steps over is exactly what
//! the scanner would later emit as trivia tokens.

use crate::chars::is_space;
use crate::cursor::Cursor;
use crate::long_bracket;

/// Returns the offset of the first non-trivia character at or after `pos`.
pub fn skip_trivia(text: &str, pos: usize) -> usize {
    let mut cursor = Cursor::new(text, pos);
    loop {
        if eat_long_comment(&mut cursor) {
            continue;
        }
        if cursor.eat_str("--") {
            cursor.eat_until_newline();
            continue;
        }
        if cursor.eat_while(is_space) > 0 {
            continue;
        }
        return cursor.pos();
    }
}

/// `--[=*[ ... ]=*]` as one unit. Unterminated comments do not match.
pub(crate) fn eat_long_comment(cursor: &mut Cursor<'_>) -> bool {
    let mut probe = *cursor;
    if !probe.eat_str("--") {
        return false;
    }
    let Some(level) = long_bracket::eat_open(&mut probe) else {
        return false;
    };
    match long_bracket::find_close(probe.text(), probe.pos(), level) {
        Some(end) => {
            probe.jump_to(end);
            *cursor = probe;
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_trivia() {
        assert_eq!(skip_trivia("x", 0), 0);
        assert_eq!(skip_trivia("", 0), 0);
    }

    #[test]
    fn whitespace_and_newlines() {
        assert_eq!(skip_trivia("  \n\t .", 0), 5);
    }

    #[test]
    fn line_comment_runs_to_newline() {
        let src = "-- note\n  :";
        assert_eq!(skip_trivia(src, 0), 10);
    }

    #[test]
    fn long_comment_is_one_unit() {
        let src = "--[==[ a ]] ]==] (";
        assert_eq!(&src[skip_trivia(src, 0)..], "(");
    }

    #[test]
    fn unterminated_long_comment_is_a_line_comment() {
        let src = "--[[ open\n.";
        assert_eq!(&src[skip_trivia(src, 0)..], ".");
    }

    #[test]
    fn mixed_runs() {
        let src = " --[[a]] -- b\n --[=[\n]=]\n.x";
        assert_eq!(&src[skip_trivia(src, 0)..], ".x");
    }

    #[test]
    fn trivia_to_eof() {
        assert_eq!(skip_trivia("  -- end", 0), 8);
    }

    #[test]
    fn single_dash_is_not_trivia() {
        assert_eq!(skip_trivia(" -x", 0), 1);
    }
}
