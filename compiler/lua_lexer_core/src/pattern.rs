//! The closed set of lexical patterns and the anchored matcher.
//!
//! A [`Pattern`] is plain data, built once with the grammar and reused for
//! every scan. [`Pattern::try_match`] tests it at one offset and reports
//! how many bytes it consumes, plus any captures (the long-bracket level,
//! or per-element lengths for a [`Pattern::Seq`]).

use crate::chars::{is_ascii_name_start, is_name_start, is_space, is_word};
use crate::cursor::Cursor;
use crate::words::WordList;
use crate::{escape, long_bracket, number, trivia};

/// Which characters may start an identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdentStart {
    /// `[A-Za-z_]`, used in expression position.
    Ascii,
    /// Any letter or `_`, used after `.`/`:` and in declarations.
    Unicode,
}

impl IdentStart {
    #[inline]
    fn accepts(self, c: char) -> bool {
        match self {
            Self::Ascii => is_ascii_name_start(c),
            Self::Unicode => is_name_start(c),
        }
    }
}

/// A zero-width check of what follows a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lookahead {
    /// Skip whitespace and comments before checking.
    pub skip_trivia: bool,
    /// The next character must be one of these.
    pub any_of: &'static str,
}

impl Lookahead {
    /// Next significant character, after whitespace and comments, is one of
    /// `any_of`.
    pub const fn after_trivia(any_of: &'static str) -> Self {
        Self {
            skip_trivia: true,
            any_of,
        }
    }

    /// Returns `true` if the lookahead holds at `pos`. Consumes nothing.
    pub fn holds(&self, text: &str, pos: usize) -> bool {
        let at = if self.skip_trivia {
            trivia::skip_trivia(text, pos)
        } else {
            pos
        };
        text[at..]
            .chars()
            .next()
            .is_some_and(|c| self.any_of.contains(c))
    }
}

/// A successful match.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Match {
    /// Bytes consumed from the anchor offset.
    pub len: usize,
    /// Long-bracket level (`=` count), for [`Pattern::LongBracket`].
    pub level: Option<usize>,
    /// Byte length of each element, for [`Pattern::Seq`]. They sum to `len`.
    pub groups: Vec<usize>,
}

impl Match {
    /// A match with no captures.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            level: None,
            groups: Vec::new(),
        }
    }
}

/// One lexical pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Pattern {
    /// Matches the empty string. Used for unconditional mode changes.
    Empty,
    /// An exact string.
    Literal(&'static str),
    /// One character from the set.
    OneOf(&'static str),
    /// One or more characters from the set.
    Run(&'static str),
    /// One or more characters not in the set.
    RunExcept(&'static str),
    /// `prefix` followed by the rest of the line (newline excluded).
    LineFrom(&'static str),
    /// One or more whitespace characters, line breaks included.
    Whitespace,
    /// `0x` hex numeral with optional fraction and binary exponent.
    HexNumber,
    /// Decimal numeral with a `.` and optional exponent.
    DecimalFloat,
    /// Decimal integer part with a mandatory exponent.
    ExponentFloat,
    /// Decimal digits.
    Integer,
    /// A whole word that is in the list.
    Words(WordList),
    /// The longest of `word.word` or `word` that is in the list, ending at a
    /// word boundary.
    DottedWords(WordList),
    /// An identifier, optionally gated by a lookahead.
    Ident {
        start: IdentStart,
        ahead: Option<Lookahead>,
    },
    /// `prefix` then a long bracket `[=*[ ... ]=*]` closed at the same level.
    LongBracket { prefix: &'static str },
    /// A recognized backslash escape.
    StringEscape,
    /// A backslash and the character after it, if any.
    StrayEscape,
    /// The first alternative that matches.
    Alt(Vec<Pattern>),
    /// Each element in turn; each element's length is reported as a group.
    ///
    /// Elements match independently: a later failure does not make an
    /// earlier element give characters back.
    Seq(Vec<Pattern>),
}

impl Pattern {
    /// Identifier with no lookahead.
    pub const fn ident(start: IdentStart) -> Self {
        Self::Ident { start, ahead: None }
    }

    /// Identifier whose next significant character is one of `any_of`.
    pub const fn ident_followed_by(start: IdentStart, any_of: &'static str) -> Self {
        Self::Ident {
            start,
            ahead: Some(Lookahead::after_trivia(any_of)),
        }
    }

    /// Test the pattern anchored at `offset`.
    ///
    /// Returns `None` when the pattern does not match there, including when
    /// `offset` is past the end or not a character boundary.
    pub fn try_match(&self, text: &str, offset: usize) -> Option<Match> {
        if !text.is_char_boundary(offset) {
            return None;
        }
        let mut cursor = Cursor::new(text, offset);
        let matched = match self {
            Self::Empty => true,
            Self::Literal(s) => cursor.eat_str(s),
            Self::OneOf(set) => cursor.eat_if(|c| set.contains(c)),
            Self::Run(set) => cursor.eat_while(|c| set.contains(c)) > 0,
            Self::RunExcept(set) => cursor.eat_while(|c| !set.contains(c)) > 0,
            Self::LineFrom(prefix) => {
                let ok = cursor.eat_str(prefix);
                if ok {
                    cursor.eat_until_newline();
                }
                ok
            }
            Self::Whitespace => cursor.eat_while(is_space) > 0,
            Self::HexNumber => number::eat_hex(&mut cursor),
            Self::DecimalFloat => number::eat_decimal_float(&mut cursor),
            Self::ExponentFloat => number::eat_exponent_float(&mut cursor),
            Self::Integer => number::eat_integer(&mut cursor),
            Self::Words(list) => {
                let len = cursor.eat_while(is_word);
                len > 0 && list.contains(&text[offset..offset + len])
            }
            Self::DottedWords(list) => eat_dotted_word(&mut cursor, list),
            Self::Ident { start, ahead } => {
                cursor.eat_if(|c| start.accepts(c)) && {
                    cursor.eat_while(is_word);
                    ahead.map_or(true, |la| la.holds(text, cursor.pos()))
                }
            }
            Self::StringEscape => escape::eat_escape(&mut cursor),
            Self::StrayEscape => {
                let ok = cursor.eat_byte(b'\\');
                if ok {
                    cursor.advance_char();
                }
                ok
            }
            Self::LongBracket { prefix } => return match_long_bracket(&mut cursor, prefix),
            Self::Alt(alternatives) => {
                return alternatives.iter().find_map(|p| p.try_match(text, offset));
            }
            Self::Seq(parts) => return match_sequence(parts, text, offset),
        };
        matched.then(|| Match::new(cursor.consumed_since(offset)))
    }

    /// Returns `true` if the pattern can succeed without consuming anything.
    ///
    /// A rule built on such a pattern must change the mode stack, or the
    /// scanner would never advance.
    pub fn can_match_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Literal(s) | Self::LineFrom(s) => s.is_empty(),
            Self::Alt(alternatives) => alternatives.iter().any(Pattern::can_match_empty),
            Self::Seq(parts) => parts.iter().all(Pattern::can_match_empty),
            _ => false,
        }
    }
}

/// `word.word` if listed, else `word` if listed.
fn eat_dotted_word(cursor: &mut Cursor<'_>, list: &WordList) -> bool {
    let text = cursor.text();
    let start = cursor.pos();
    let mut probe = *cursor;
    if probe.eat_while(is_word) == 0 {
        return false;
    }
    let head_end = probe.pos();
    if probe.eat_byte(b'.')
        && probe.eat_while(is_word) > 0
        && list.contains(&text[start..probe.pos()])
    {
        *cursor = probe;
        return true;
    }
    if list.contains(&text[start..head_end]) {
        cursor.jump_to(head_end);
        return true;
    }
    false
}

fn match_long_bracket(cursor: &mut Cursor<'_>, prefix: &str) -> Option<Match> {
    let start = cursor.pos();
    if !cursor.eat_str(prefix) {
        return None;
    }
    let level = long_bracket::eat_open(cursor)?;
    let end = long_bracket::find_close(cursor.text(), cursor.pos(), level)?;
    Some(Match {
        len: end - start,
        level: Some(level),
        groups: Vec::new(),
    })
}

fn match_sequence(parts: &[Pattern], text: &str, offset: usize) -> Option<Match> {
    let mut pos = offset;
    let mut groups = Vec::with_capacity(parts.len());
    let mut level = None;
    for part in parts {
        let m = part.try_match(text, pos)?;
        pos += m.len;
        groups.push(m.len);
        level = level.or(m.level);
    }
    Some(Match {
        len: pos - offset,
        level,
        groups,
    })
}
