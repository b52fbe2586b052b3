//! Lexer-definition faults.
//!
//! These describe defects in a rule table, not in the scanned source.
//! Malformed source never fails: it produces `Error` tokens.

use thiserror::Error;

use crate::mode::Mode;

/// A rule table that cannot be scanned with.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GrammarError {
    /// A mode is included, pushed, or required (`Root`) but never defined.
    #[error("mode {0:?} is referenced but not defined")]
    UndefinedMode(Mode),

    /// Mode inclusion loops back on itself.
    #[error("mode {0:?} includes itself")]
    IncludeCycle(Mode),

    /// A rule can match the empty string without changing the mode stack,
    /// which would stall the scanner.
    #[error("rule {index} of mode {mode:?} can match empty input and does not change mode")]
    ZeroWidthStay { mode: Mode, index: usize },

    /// A rule that emits nothing for a match that can consume text, which
    /// would leave a gap in the token stream.
    #[error("rule {index} of mode {mode:?} emits no token but can consume input")]
    DropsText { mode: Mode, index: usize },

    /// A grouped rule whose kinds do not line up with its pattern's groups.
    #[error("rule {index} of mode {mode:?} emits {kinds} groups but its pattern has {groups}")]
    GroupArity {
        mode: Mode,
        index: usize,
        kinds: usize,
        groups: usize,
    },
}
