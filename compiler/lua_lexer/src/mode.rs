//! Modes, rules and stack transitions.
//!
//! A mode is a named, ordered list of rules; the first rule whose pattern
//! matches wins. Modes can include other modes' rules inline, which is how
//! every content mode shares the whitespace/comment rules.

use lua_lexer_core::Pattern;

use crate::token::TokenKind;

/// Lexer modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mode {
    /// Initial mode: optional shebang, then falls through to `Base`.
    Root,
    /// General source content.
    Base,
    /// Whitespace and comments. Included, never pushed.
    Trivia,
    /// Rest of a dotted/colon chain after `a.` or `a:`.
    VarName,
    /// Name after `function`.
    FuncName,
    /// Target after `goto`.
    Goto,
    /// Body of `::label::`.
    Label,
    /// Escape sequences. Included by the quoted-string modes.
    StringEscape,
    /// Inside `'...'`.
    SingleQuoted,
    /// Inside `"..."`.
    DoubleQuoted,
}

impl Mode {
    pub const COUNT: usize = 10;

    pub const ALL: [Mode; Mode::COUNT] = [
        Mode::Root,
        Mode::Base,
        Mode::Trivia,
        Mode::VarName,
        Mode::FuncName,
        Mode::Goto,
        Mode::Label,
        Mode::StringEscape,
        Mode::SingleQuoted,
        Mode::DoubleQuoted,
    ];

    /// Dense index into per-mode tables.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// What a matched rule does to the mode stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Stay,
    Push(Mode),
    /// Pop the top mode. A single-entry stack is left as is.
    Pop,
    /// Swap the top mode for another.
    Replace(Mode),
    /// Pop once, then push each mode in order (the last ends on top).
    PopPush(&'static [Mode]),
}

impl Transition {
    /// Modes this transition can put on the stack.
    pub fn targets(self) -> &'static [Mode] {
        match self {
            Self::Stay | Self::Pop => &[],
            Self::Push(mode) | Self::Replace(mode) => std::slice::from_ref(mode_ref(mode)),
            Self::PopPush(modes) => modes,
        }
    }
}

static MODES: [Mode; Mode::COUNT] = Mode::ALL;

/// `'static` reference to a mode value, for [`Transition::targets`].
fn mode_ref(mode: Mode) -> &'static Mode {
    &MODES[mode.index()]
}

/// How a match becomes tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emit {
    /// No token; for zero-width rules that only change modes.
    Nothing,
    /// One token covering the whole match.
    Single(TokenKind),
    /// One token per element of a [`Pattern::Seq`]; empty elements are
    /// skipped.
    Groups(&'static [TokenKind]),
}

/// Pattern, classification and transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pub pattern: Pattern,
    pub emit: Emit,
    pub transition: Transition,
}

impl Rule {
    /// Emit the whole match as `kind` and stay in the current mode.
    pub fn new(pattern: Pattern, kind: TokenKind) -> Self {
        Self {
            pattern,
            emit: Emit::Single(kind),
            transition: Transition::Stay,
        }
    }

    /// Split the match into one token per element.
    pub fn groups(pattern: Pattern, kinds: &'static [TokenKind]) -> Self {
        Self {
            pattern,
            emit: Emit::Groups(kinds),
            transition: Transition::Stay,
        }
    }

    /// Consume nothing and push `mode`.
    pub fn fallthrough(mode: Mode) -> Self {
        Self {
            pattern: Pattern::Empty,
            emit: Emit::Nothing,
            transition: Transition::Push(mode),
        }
    }

    #[must_use]
    pub fn push(self, mode: Mode) -> Self {
        self.then(Transition::Push(mode))
    }

    #[must_use]
    pub fn pop(self) -> Self {
        self.then(Transition::Pop)
    }

    #[must_use]
    pub fn then(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }
}

/// One entry of a mode definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Item {
    Rule(Rule),
    /// Splice in another mode's rules at this point.
    Include(Mode),
}

impl From<Rule> for Item {
    fn from(rule: Rule) -> Self {
        Item::Rule(rule)
    }
}
