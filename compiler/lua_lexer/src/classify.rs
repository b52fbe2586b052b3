//! Builtin post-classification.
//!
//! The scanner tags every catalog name as `Name.Builtin`. [`Classify`]
//! demotes the ones the registry has not enabled: a plain name becomes
//! `Name`, a qualified one (`string.format`) is split into
//! `Name` `Punctuation(".")` `Name` so each part keeps its own offset.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::registry::BuiltinRegistry;
use crate::token::{Token, TokenKind};

/// Streaming builtin filter over a token iterator.
#[derive(Clone, Debug)]
pub struct Classify<'r, 's, I> {
    registry: &'r BuiltinRegistry,
    inner: I,
    /// Remaining parts of a split qualified name.
    pending: VecDeque<Token<'s>>,
}

impl<'r, 's, I> Classify<'r, 's, I>
where
    I: Iterator<Item = Token<'s>>,
{
    pub fn new(registry: &'r BuiltinRegistry, inner: I) -> Self {
        Self {
            registry,
            inner,
            pending: VecDeque::new(),
        }
    }

    /// The wrapped iterator.
    pub fn get_ref(&self) -> &I {
        &self.inner
    }

    fn demote(&mut self, token: Token<'s>) -> Token<'s> {
        let Some((head, tail)) = token.text.split_once('.') else {
            return Token::new(token.offset, TokenKind::Name, token.text);
        };
        let dot = head.len();
        self.pending.push_back(Token::new(
            token.offset + dot,
            TokenKind::Punctuation,
            &token.text[dot..=dot],
        ));
        self.pending
            .push_back(Token::new(token.offset + dot + 1, TokenKind::Name, tail));
        Token::new(token.offset, TokenKind::Name, head)
    }
}

impl<'s, I> Iterator for Classify<'_, 's, I>
where
    I: Iterator<Item = Token<'s>>,
{
    type Item = Token<'s>;

    fn next(&mut self) -> Option<Token<'s>> {
        if let Some(token) = self.pending.pop_front() {
            return Some(token);
        }
        let token = self.inner.next()?;
        if token.kind == TokenKind::NameBuiltin && !self.registry.is_enabled(token.text) {
            return Some(self.demote(token));
        }
        Some(token)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.inner.size_hint();
        let queued = self.pending.len();
        (
            lower.saturating_add(queued),
            upper.and_then(|u| u.checked_mul(3)?.checked_add(queued)),
        )
    }
}

impl<'s, I> FusedIterator for Classify<'_, 's, I> where I: FusedIterator<Item = Token<'s>> {}
