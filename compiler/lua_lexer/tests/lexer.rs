//! End-to-end tests through the public `Lexer` API.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use lua_lexer::{BuiltinModule, Catalog, Lexer, LexerConfig, Token, TokenKind};
use pretty_assertions::assert_eq;

use lua_lexer::TokenKind::{
    KeywordConstant, KeywordDeclaration, KeywordReserved, Name, NameBuiltin, NameFunction,
    NameLabel, NameProperty, NameVariable, NumberInteger, Operator, OperatorWord, Punctuation,
    StringDouble, StringEscape, Whitespace,
};

fn lexer() -> Lexer {
    Lexer::new(LexerConfig::default()).expect("lua grammar")
}

fn kinds(tokens: &[Token<'_>]) -> Vec<(TokenKind, String)> {
    tokens
        .iter()
        .filter(|t| t.kind != Whitespace)
        .map(|t| (t.kind, t.text.to_owned()))
        .collect()
}

fn k(kind: TokenKind, text: &str) -> (TokenKind, String) {
    (kind, text.to_owned())
}

fn assert_covers(text: &str, tokens: &[Token<'_>]) {
    let mut offset = 0;
    for token in tokens {
        assert_eq!(token.offset, offset, "gap or overlap before {token:?}");
        assert!(!token.text.is_empty(), "empty token at {offset}");
        offset = token.end();
    }
    assert_eq!(offset, text.len());
    assert_eq!(tokens.iter().map(|t| t.text).collect::<String>(), text);
}

const PROGRAM: &str = r#"#!/usr/bin/env lua
--[==[
  Multi-line ]] comment
]==]
local M = {}

function M.greet(name, ...)
  local msg = string.format("hi %s\n", name or "you")
  if #msg > 0 and not done then
    print(msg:upper())
  end
  goto continue
  ::continue::
  return true, nil, 0x1F, 1.5e-3
end

return M
"#;

#[test]
fn program_is_fully_covered() {
    let tokens = lexer().lex(PROGRAM);
    assert_covers(PROGRAM, &tokens);
    assert!(tokens.iter().all(|t| t.kind != TokenKind::Error));
}

#[test]
fn program_highlights() {
    let tokens = lexer().lex(PROGRAM);
    let kinds = kinds(&tokens);
    for expected in [
        k(TokenKind::CommentPreproc, "#!/usr/bin/env lua"),
        k(
            TokenKind::CommentMultiline,
            "--[==[\n  Multi-line ]] comment\n]==]",
        ),
        k(KeywordDeclaration, "local"),
        k(TokenKind::NameClass, "M"),
        k(NameFunction, "greet"),
        k(NameBuiltin, "string.format"),
        k(StringEscape, "\\n"),
        k(OperatorWord, "and"),
        k(OperatorWord, "not"),
        k(NameBuiltin, "print"),
        k(NameFunction, "upper"),
        k(NameLabel, "continue"),
        k(KeywordConstant, "nil"),
        k(TokenKind::NumberHex, "0x1F"),
        k(TokenKind::NumberFloat, "1.5e-3"),
    ] {
        assert!(kinds.contains(&expected), "missing {expected:?}");
    }
}

#[test]
fn member_call_roles() {
    let tokens = lexer().lex("foo.bar()");
    assert_eq!(
        kinds(&tokens),
        vec![
            k(NameVariable, "foo"),
            k(Punctuation, "."),
            k(NameFunction, "bar"),
            k(Punctuation, "()"),
        ]
    );
    let offsets: Vec<_> = tokens.iter().map(|t| t.offset).collect();
    assert_eq!(offsets, vec![0, 3, 4, 7]);
}

#[test]
fn property_access_and_method_call() {
    let tokens = lexer().lex("a.b.c = x:m(1)");
    assert_eq!(
        kinds(&tokens),
        vec![
            k(NameVariable, "a"),
            k(Punctuation, "."),
            k(NameProperty, "b"),
            k(Punctuation, "."),
            k(NameProperty, "c"),
            k(Operator, "="),
            k(NameVariable, "x"),
            k(Punctuation, ":"),
            k(NameFunction, "m"),
            k(Punctuation, "("),
            k(NumberInteger, "1"),
            k(Punctuation, ")"),
        ]
    );
}

#[test]
fn escapes_in_double_quoted_string() {
    let tokens = lexer().lex(r#""a\tb""#);
    assert_eq!(
        kinds(&tokens),
        vec![
            k(StringDouble, "\""),
            k(StringDouble, "a"),
            k(StringEscape, "\\t"),
            k(StringDouble, "b"),
            k(StringDouble, "\""),
        ]
    );
}

#[test]
fn numeric_and_unicode_escapes() {
    let tokens = lexer().lex(r#""\65\x41\u{48}\z
      end""#);
    let escapes: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind == StringEscape)
        .map(|t| t.text)
        .collect();
    assert_eq!(escapes, vec!["\\65", "\\x41", "\\u{48}", "\\z\n      "]);
}

#[test]
fn disabled_module_demotes_and_splits() {
    let lexer = Lexer::new(LexerConfig::default().disable_module("string")).unwrap();
    let tokens = lexer.lex("string.len(s); print(s)");
    assert_eq!(
        kinds(&tokens)[..4].to_vec(),
        vec![
            k(Name, "string"),
            k(Punctuation, "."),
            k(Name, "len"),
            k(Punctuation, "("),
        ]
    );
    let offsets: Vec<_> = tokens.iter().take(3).map(|t| t.offset).collect();
    assert_eq!(offsets, vec![0, 6, 7]);
    assert!(tokens.iter().any(|t| t.kind == NameBuiltin && t.text == "print"));
}

#[test]
fn highlighting_off_leaves_no_builtins() {
    let lexer = Lexer::new(LexerConfig::default().with_highlight_builtins(false)).unwrap();
    let tokens = lexer.lex("print(math.pi, require 'x')");
    assert_covers("print(math.pi, require 'x')", &tokens);
    assert!(tokens.iter().all(|t| t.kind != NameBuiltin));
    assert_eq!(tokens[0].kind, Name);
}

#[test]
fn raw_stream_keeps_candidates() {
    let lexer = Lexer::new(LexerConfig::default().with_highlight_builtins(false)).unwrap();
    let raw: Vec<_> = lexer.raw_tokens("math.pi").collect();
    assert_eq!(raw, vec![Token::new(0, NameBuiltin, "math.pi")]);
}

#[test]
fn custom_catalog() {
    static GAME: &Catalog = &[BuiltinModule {
        name: "game",
        names: &["spawn", "world.tick"],
    }];
    let lexer = Lexer::with_catalog(LexerConfig::default(), GAME).unwrap();
    let tokens = lexer.lex("spawn(world.tick) print()");
    let builtins: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind == NameBuiltin)
        .map(|t| t.text)
        .collect();
    assert_eq!(builtins, vec!["spawn", "world.tick"]);
    assert!(tokens.iter().any(|t| t.kind == NameFunction && t.text == "print"));
}

#[test]
fn nested_long_strings_close_at_their_level() {
    let text = "x = [=[ a ]] b ]=] .. [[c]]";
    let tokens = lexer().lex(text);
    assert_covers(text, &tokens);
    let strings: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::String)
        .map(|t| t.text)
        .collect();
    assert_eq!(strings, vec!["[=[ a ]] b ]=]", "[[c]]"]);
}

#[test]
fn keywords() {
    let tokens = lexer().lex("while true do break end repeat until false");
    assert_eq!(
        kinds(&tokens),
        vec![
            k(KeywordReserved, "while"),
            k(KeywordConstant, "true"),
            k(KeywordReserved, "do"),
            k(KeywordReserved, "break"),
            k(KeywordReserved, "end"),
            k(KeywordReserved, "repeat"),
            k(KeywordReserved, "until"),
            k(KeywordConstant, "false"),
        ]
    );
}

#[test]
fn malformed_input_still_covers() {
    let text = "$ @ local s = [==[ open\n'unterminated";
    let tokens = lexer().lex(text);
    assert_covers(text, &tokens);
    assert!(tokens.iter().any(|t| t.kind == TokenKind::Error));
}

#[test]
fn one_lexer_many_threads() {
    let lexer = lexer();
    std::thread::scope(|scope| {
        for i in 0..4 {
            let lexer = &lexer;
            scope.spawn(move || {
                let text = format!("local v{i} = print({i})");
                let tokens = lexer.lex(&text);
                assert_covers(&text, &tokens);
            });
        }
    });
}
