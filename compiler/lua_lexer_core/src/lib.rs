//! Anchored pattern matchers for Lua source text.
//!
//! This crate is the low-level half of the Lua lexer. It knows how to
//! decide, at an exact byte offset, whether one lexical pattern matches and
//! how many bytes it consumes. It knows nothing about modes, token kinds or
//! builtins; those live in `lua_lexer`, which drives these matchers from a
//! mode stack.
//!
//! # Design
//!
//! Every pattern is a closed, hand-written matcher selected by a [`Pattern`]
//! variant. There is no regular-expression engine: the grammar needs only a
//! fixed set of shapes (runs, words, numbers, long brackets, escapes), and
//! each is matched in a single forward pass over a [`Cursor`].
//!
//! A miss is `None`, never an error. Matchers never look behind the anchor
//! offset.

mod chars;
mod cursor;
mod escape;
mod long_bracket;
mod number;
mod pattern;
mod trivia;
mod words;

pub use chars::{is_ascii_name_start, is_name_start, is_space, is_word};
pub use cursor::Cursor;
pub use escape::eat_escape;
pub use long_bracket::{eat_open, find_close};
pub use number::{eat_decimal_float, eat_exponent_float, eat_hex, eat_integer};
pub use pattern::{IdentStart, Lookahead, Match, Pattern};
pub use trivia::skip_trivia;
pub use words::WordList;
