//! Character classes shared by the matchers.

/// Word character: letter, digit, or `_` (Unicode-aware).
///
/// Word boundaries after keywords and builtin names are defined in terms of
/// this class.
#[inline]
pub fn is_word(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// First character of a name in property, label and function-name
/// position: any letter or `_`, but not a digit.
#[inline]
pub fn is_name_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

/// First character of an identifier in expression position: `[A-Za-z_]`.
#[inline]
pub fn is_ascii_name_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

/// Whitespace, including line breaks.
#[inline]
pub fn is_space(c: char) -> bool {
    c.is_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_chars() {
        assert!(is_word('a'));
        assert!(is_word('Z'));
        assert!(is_word('7'));
        assert!(is_word('_'));
        assert!(is_word('é'));
        assert!(!is_word('.'));
        assert!(!is_word(' '));
        assert!(!is_word('('));
    }

    #[test]
    fn name_start_excludes_digits() {
        assert!(is_name_start('x'));
        assert!(is_name_start('_'));
        assert!(is_name_start('λ'));
        assert!(!is_name_start('1'));
    }

    #[test]
    fn ascii_name_start_rejects_unicode() {
        assert!(is_ascii_name_start('q'));
        assert!(!is_ascii_name_start('λ'));
        assert!(!is_ascii_name_start('9'));
    }

    #[test]
    fn space_includes_newlines() {
        assert!(is_space(' '));
        assert!(is_space('\t'));
        assert!(is_space('\n'));
        assert!(is_space('\r'));
        assert!(!is_space('x'));
    }
}
