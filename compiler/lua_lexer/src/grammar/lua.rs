//! The Lua rule tables.

use lua_lexer_core::{IdentStart, Pattern, WordList};

use super::{Grammar, GrammarBuilder};
use crate::error::GrammarError;
use crate::mode::{Item, Mode, Rule};
use crate::token::TokenKind;

const RESERVED: &[&str] = &[
    "break", "do", "else", "elseif", "end", "for", "if", "in", "repeat", "return", "then",
    "until", "while",
];

const OPERATOR_CHARS: &str = "=<>|~&+-*/%#^";
const PUNCTUATION_CHARS: &str = "[]{}().,:;";

/// Characters after a name that make it the head of a member chain.
const MEMBER: &str = ".:";
/// Character after a name that makes it a call.
const CALL: &str = "(";

pub(super) fn build(builtins: WordList) -> Result<Grammar, GrammarError> {
    GrammarBuilder::new()
        .mode(
            Mode::Root,
            [
                Rule::new(Pattern::LineFrom("#!"), TokenKind::CommentPreproc).into(),
                Rule::fallthrough(Mode::Base).into(),
            ],
        )
        .mode(
            Mode::Trivia,
            [
                Rule::new(
                    Pattern::LongBracket { prefix: "--" },
                    TokenKind::CommentMultiline,
                )
                .into(),
                Rule::new(Pattern::LineFrom("--"), TokenKind::CommentSingle).into(),
                Rule::new(Pattern::Whitespace, TokenKind::Whitespace).into(),
            ],
        )
        .mode(Mode::Base, base(builtins))
        .mode(
            Mode::VarName,
            [
                Item::Include(Mode::Trivia),
                Rule::new(Pattern::Literal(".."), TokenKind::Operator)
                    .pop()
                    .into(),
                Rule::new(Pattern::OneOf(MEMBER), TokenKind::Punctuation).into(),
                Rule::new(
                    Pattern::ident_followed_by(IdentStart::Unicode, MEMBER),
                    TokenKind::NameProperty,
                )
                .into(),
                Rule::new(
                    Pattern::ident_followed_by(IdentStart::Unicode, CALL),
                    TokenKind::NameFunction,
                )
                .pop()
                .into(),
                Rule::new(Pattern::ident(IdentStart::Unicode), TokenKind::NameProperty)
                    .pop()
                    .into(),
            ],
        )
        .mode(
            Mode::FuncName,
            [
                Item::Include(Mode::Trivia),
                Rule::new(Pattern::OneOf(MEMBER), TokenKind::Punctuation).into(),
                Rule::new(
                    Pattern::ident_followed_by(IdentStart::Unicode, MEMBER),
                    TokenKind::NameClass,
                )
                .into(),
                Rule::new(Pattern::ident(IdentStart::Unicode), TokenKind::NameFunction)
                    .pop()
                    .into(),
                // Anonymous function: no name before the parameter list.
                Rule::new(Pattern::Literal("("), TokenKind::Punctuation)
                    .pop()
                    .into(),
            ],
        )
        .mode(
            Mode::Goto,
            [
                Item::Include(Mode::Trivia),
                Rule::new(Pattern::ident(IdentStart::Unicode), TokenKind::NameLabel)
                    .pop()
                    .into(),
            ],
        )
        .mode(
            Mode::Label,
            [
                Item::Include(Mode::Trivia),
                Rule::new(Pattern::Literal("::"), TokenKind::Punctuation)
                    .pop()
                    .into(),
                Rule::new(Pattern::ident(IdentStart::Unicode), TokenKind::NameLabel).into(),
            ],
        )
        .mode(
            Mode::StringEscape,
            [Rule::new(Pattern::StringEscape, TokenKind::StringEscape).into()],
        )
        .mode(Mode::SingleQuoted, quoted("'", "\\'", TokenKind::StringSingle))
        .mode(Mode::DoubleQuoted, quoted("\"", "\\\"", TokenKind::StringDouble))
        .build()
}

fn base(builtins: WordList) -> Vec<Item> {
    vec![
        Item::Include(Mode::Trivia),
        Rule::new(Pattern::HexNumber, TokenKind::NumberHex).into(),
        Rule::new(Pattern::DecimalFloat, TokenKind::NumberFloat).into(),
        Rule::new(Pattern::ExponentFloat, TokenKind::NumberFloat).into(),
        Rule::new(Pattern::Integer, TokenKind::NumberInteger).into(),
        Rule::new(Pattern::LongBracket { prefix: "" }, TokenKind::String).into(),
        Rule::new(Pattern::Literal("::"), TokenKind::Punctuation)
            .push(Mode::Label)
            .into(),
        Rule::new(Pattern::Literal("..."), TokenKind::Punctuation).into(),
        Rule::new(
            Pattern::Alt(vec![Pattern::Run(OPERATOR_CHARS), Pattern::Literal("..")]),
            TokenKind::Operator,
        )
        .into(),
        Rule::new(Pattern::Run(PUNCTUATION_CHARS), TokenKind::Punctuation).into(),
        Rule::new(words(&["and", "or", "not"]), TokenKind::OperatorWord).into(),
        Rule::new(words(RESERVED), TokenKind::KeywordReserved).into(),
        Rule::new(words(&["goto"]), TokenKind::KeywordReserved)
            .push(Mode::Goto)
            .into(),
        Rule::new(words(&["local"]), TokenKind::KeywordDeclaration).into(),
        Rule::new(words(&["true", "false", "nil"]), TokenKind::KeywordConstant).into(),
        Rule::new(words(&["function"]), TokenKind::KeywordReserved)
            .push(Mode::FuncName)
            .into(),
        Rule::new(Pattern::DottedWords(builtins), TokenKind::NameBuiltin).into(),
        Rule::new(
            Pattern::ident_followed_by(IdentStart::Ascii, MEMBER),
            TokenKind::NameVariable,
        )
        .push(Mode::VarName)
        .into(),
        Rule::new(
            Pattern::ident_followed_by(IdentStart::Ascii, CALL),
            TokenKind::NameFunction,
        )
        .into(),
        Rule::new(Pattern::ident(IdentStart::Ascii), TokenKind::NameVariable).into(),
        Rule::new(Pattern::Literal("'"), TokenKind::StringSingle)
            .push(Mode::SingleQuoted)
            .into(),
        Rule::new(Pattern::Literal("\""), TokenKind::StringDouble)
            .push(Mode::DoubleQuoted)
            .into(),
    ]
}

/// Body of a quoted string closed by `quote`. `content_stop` holds the
/// characters that end a plain-content run (the backslash and the quote).
fn quoted(quote: &'static str, content_stop: &'static str, kind: TokenKind) -> Vec<Item> {
    vec![
        Item::Include(Mode::StringEscape),
        Rule::new(Pattern::Literal(quote), kind).pop().into(),
        Rule::new(Pattern::RunExcept(content_stop), kind).into(),
        // Unrecognized escapes are string content, not errors.
        Rule::new(Pattern::StrayEscape, kind).into(),
    ]
}

fn words(list: &[&'static str]) -> Pattern {
    Pattern::Words(WordList::new(list.iter().copied()))
}
