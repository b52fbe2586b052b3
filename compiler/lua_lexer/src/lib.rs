//! Lua lexer for syntax highlighting.
//!
//! Turns Lua source text into a stream of classified [`Token`]s that
//! exactly covers the input: tokens are contiguous, in order, and their
//! texts concatenate back to the source. Malformed input never fails; a
//! character no rule accepts becomes an `Error` token and scanning goes on.
//!
//! # Pipeline
//!
//! ```text
//! &str ──▶ Scanner (mode stack over Grammar) ──▶ Classify (BuiltinRegistry) ──▶ Token
//! ```
//!
//! - [`Grammar`]: per-mode rule tables, built and validated once.
//! - [`Scanner`]: lazy first-match-wins scan driven by a mode stack.
//! - [`Classify`]: demotes builtin candidates the configuration disables.
//!
//! The matchers themselves live in `lua_lexer_core`.
//!
//! # Example
//!
//! ```
//! use lua_lexer::{Lexer, LexerConfig, TokenKind};
//!
//! let lexer = Lexer::new(LexerConfig::default())?;
//! let kinds: Vec<_> = lexer.tokens("print(x)").map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::NameBuiltin,
//!         TokenKind::Punctuation,
//!         TokenKind::NameVariable,
//!         TokenKind::Punctuation,
//!     ]
//! );
//! # Ok::<(), lua_lexer::GrammarError>(())
//! ```

mod builtins;
mod classify;
mod config;
mod error;
mod grammar;
mod info;
mod mode;
mod registry;
mod scanner;
mod token;

pub use builtins::{all_names, BuiltinModule, Catalog, LUA_MODULES};
pub use classify::Classify;
pub use config::LexerConfig;
pub use error::GrammarError;
pub use grammar::{Grammar, GrammarBuilder};
pub use info::{LexerInfo, LUA};
pub use mode::{Emit, Item, Mode, Rule, Transition};
pub use registry::BuiltinRegistry;
pub use scanner::Scanner;
pub use token::{Token, TokenKind};

/// Classified token stream returned by [`Lexer::tokens`].
pub type Tokens<'l, 's> = Classify<'l, 's, Scanner<'l, 's>>;

/// A configured Lua lexer.
///
/// Holds the grammar and the builtin registry; both are immutable, so one
/// lexer can serve any number of scans, from any number of threads.
#[derive(Clone, Debug)]
pub struct Lexer {
    grammar: Grammar,
    registry: BuiltinRegistry,
}

impl Lexer {
    /// A lexer over the Lua standard-library catalog.
    pub fn new(config: LexerConfig) -> Result<Self, GrammarError> {
        Self::with_catalog(config, LUA_MODULES)
    }

    /// A lexer over a custom builtin catalog.
    pub fn with_catalog(
        config: LexerConfig,
        catalog: &'static Catalog,
    ) -> Result<Self, GrammarError> {
        let grammar = Grammar::lua(all_names(catalog))?;
        let registry = BuiltinRegistry::new(catalog, &config);
        Ok(Self { grammar, registry })
    }

    /// Lazily scan and classify `text`.
    pub fn tokens<'l, 's>(&'l self, text: &'s str) -> Tokens<'l, 's> {
        Classify::new(&self.registry, self.raw_tokens(text))
    }

    /// Scan and classify `text` into a vector.
    pub fn lex<'s>(&self, text: &'s str) -> Vec<Token<'s>> {
        self.tokens(text).collect()
    }

    /// Scan without builtin classification: every catalog name stays
    /// `Name.Builtin`.
    pub fn raw_tokens<'l, 's>(&'l self, text: &'s str) -> Scanner<'l, 's> {
        Scanner::new(&self.grammar, text)
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn registry(&self) -> &BuiltinRegistry {
        &self.registry
    }

    pub fn info(&self) -> &'static LexerInfo {
        &LUA
    }
}
