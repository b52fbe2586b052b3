//! Token kinds and tokens.
//!
//! Kinds form a shallow hierarchy (`Name.Builtin` is a kind of `Name`), the
//! same shape highlighters use to pick styles: a consumer that only styles
//! `Name` still gets something sensible for every `Name.*` kind.

use std::fmt;

/// Classification of a token. Closed set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    Whitespace,

    CommentSingle,
    CommentMultiline,
    /// Shebang line.
    CommentPreproc,

    NumberInteger,
    NumberFloat,
    NumberHex,
    NumberBin,

    /// Long-bracket string `[[ ... ]]`.
    String,
    StringSingle,
    StringDouble,
    StringBacktick,
    StringEscape,

    KeywordReserved,
    KeywordDeclaration,
    KeywordConstant,

    Operator,
    /// `and`, `or`, `not`.
    OperatorWord,

    Punctuation,

    /// A plain name: builtin candidates that are not enabled end up here.
    Name,
    NameBuiltin,
    NameFunction,
    NameVariable,
    NameProperty,
    /// Qualifier segments of a declared function name (`a.b` in
    /// `function a.b.c()`).
    NameClass,
    NameLabel,
    NameOther,

    /// A character no rule accepted.
    Error,
}

impl TokenKind {
    /// Dotted hierarchical name, e.g. `"Name.Builtin"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Whitespace => "Whitespace",
            Self::CommentSingle => "Comment.Single",
            Self::CommentMultiline => "Comment.Multiline",
            Self::CommentPreproc => "Comment.Preproc",
            Self::NumberInteger => "Number.Integer",
            Self::NumberFloat => "Number.Float",
            Self::NumberHex => "Number.Hex",
            Self::NumberBin => "Number.Bin",
            Self::String => "String",
            Self::StringSingle => "String.Single",
            Self::StringDouble => "String.Double",
            Self::StringBacktick => "String.Backtick",
            Self::StringEscape => "String.Escape",
            Self::KeywordReserved => "Keyword.Reserved",
            Self::KeywordDeclaration => "Keyword.Declaration",
            Self::KeywordConstant => "Keyword.Constant",
            Self::Operator => "Operator",
            Self::OperatorWord => "Operator.Word",
            Self::Punctuation => "Punctuation",
            Self::Name => "Name",
            Self::NameBuiltin => "Name.Builtin",
            Self::NameFunction => "Name.Function",
            Self::NameVariable => "Name.Variable",
            Self::NameProperty => "Name.Property",
            Self::NameClass => "Name.Class",
            Self::NameLabel => "Name.Label",
            Self::NameOther => "Name.Other",
            Self::Error => "Error",
        }
    }

    /// The enclosing kind, or `None` for top-level kinds.
    ///
    /// `Comment`, `Number` and `Keyword` have no variant of their own: every
    /// comment, number and keyword token carries a subtype, so their
    /// subtypes are top-level here.
    pub const fn parent(self) -> Option<TokenKind> {
        match self {
            Self::StringSingle | Self::StringDouble | Self::StringBacktick | Self::StringEscape => {
                Some(Self::String)
            }
            Self::OperatorWord => Some(Self::Operator),
            Self::NameBuiltin
            | Self::NameFunction
            | Self::NameVariable
            | Self::NameProperty
            | Self::NameClass
            | Self::NameLabel
            | Self::NameOther => Some(Self::Name),
            _ => None,
        }
    }

    /// Returns `true` if `self` is `ancestor` or descends from it.
    pub fn is_subtype_of(self, ancestor: TokenKind) -> bool {
        let mut kind = Some(self);
        while let Some(k) = kind {
            if k == ancestor {
                return true;
            }
            kind = k.parent();
        }
        false
    }

    /// Returns `true` for comments.
    pub const fn is_comment(self) -> bool {
        matches!(
            self,
            Self::CommentSingle | Self::CommentMultiline | Self::CommentPreproc
        )
    }

    /// Returns `true` for whitespace and comments.
    pub const fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace) || self.is_comment()
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified slice of the source.
///
/// `offset` is the byte offset of `text` in the scanned source. Tokens
/// produced by one scan partition the source: they are contiguous, in order,
/// and their texts concatenate to the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    pub offset: usize,
    pub kind: TokenKind,
    pub text: &'src str,
}

impl<'src> Token<'src> {
    pub fn new(offset: usize, kind: TokenKind, text: &'src str) -> Self {
        Self { offset, kind, text }
    }

    /// Byte offset just past the token.
    #[inline]
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}
