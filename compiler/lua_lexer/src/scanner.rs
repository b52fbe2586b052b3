//! The mode-stack scanner.
//!
//! [`Scanner`] walks the source once, left to right. At each offset it tries
//! the rules of the mode on top of the stack in order and takes the first
//! that matches; the matched rule decides the emitted token(s) and how the
//! stack changes. Where no rule matches, one character becomes an `Error`
//! token and scanning continues, so every input is fully covered.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use lua_lexer_core::Match;

use crate::grammar::Grammar;
use crate::mode::{Emit, Mode, Rule, Transition};
use crate::token::{Token, TokenKind};

/// Consecutive zero-width matches allowed before the scanner forces
/// progress. A valid grammar can only chain zero-width rules through stack
/// changes, and any such chain longer than this has revisited a state.
const MAX_ZERO_WIDTH_STREAK: usize = 2 * Mode::COUNT;

/// A lazy token stream over one source text.
#[derive(Clone, Debug)]
pub struct Scanner<'g, 's> {
    grammar: &'g Grammar,
    text: &'s str,
    pos: usize,
    stack: Vec<Mode>,
    /// Tokens produced by one match but not yet yielded (grouped rules).
    pending: VecDeque<Token<'s>>,
    zero_width_streak: usize,
}

impl<'g, 's> Scanner<'g, 's> {
    pub fn new(grammar: &'g Grammar, text: &'s str) -> Self {
        Self {
            grammar,
            text,
            pos: 0,
            stack: vec![Mode::Root],
            pending: VecDeque::new(),
            zero_width_streak: 0,
        }
    }

    /// Byte offset of the next unscanned character.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The mode on top of the stack.
    pub fn mode(&self) -> Mode {
        self.stack.last().copied().unwrap_or(Mode::Root)
    }

    /// Current stack, bottom first.
    pub fn stack(&self) -> &[Mode] {
        &self.stack
    }

    /// Run one match at the current offset.
    fn step(&mut self) {
        let grammar = self.grammar;
        let mode = self.mode();
        let found = grammar
            .rules(mode)
            .iter()
            .find_map(|rule| rule.pattern.try_match(self.text, self.pos).map(|m| (rule, m)));

        let Some((rule, matched)) = found else {
            tracing::trace!(offset = self.pos, ?mode, "no rule matched");
            self.recover();
            return;
        };

        if matched.len == 0 {
            self.zero_width_streak += 1;
            if self.zero_width_streak > MAX_ZERO_WIDTH_STREAK {
                tracing::error!(
                    offset = self.pos,
                    ?mode,
                    stack = ?self.stack,
                    "zero-width rules cycled without consuming input"
                );
                self.recover();
                return;
            }
        } else {
            self.zero_width_streak = 0;
        }

        self.emit(rule, &matched);
        self.pos += matched.len;
        self.apply(rule.transition);
    }

    fn emit(&mut self, rule: &Rule, matched: &Match) {
        match rule.emit {
            Emit::Nothing => {}
            Emit::Single(kind) => self.push_token(self.pos, matched.len, kind),
            Emit::Groups(kinds) => {
                let mut offset = self.pos;
                for (&kind, &len) in kinds.iter().zip(&matched.groups) {
                    self.push_token(offset, len, kind);
                    offset += len;
                }
            }
        }
    }

    fn push_token(&mut self, offset: usize, len: usize, kind: TokenKind) {
        if len > 0 {
            let text = &self.text[offset..offset + len];
            self.pending.push_back(Token::new(offset, kind, text));
        }
    }

    /// Emit the next character as an `Error` token and step past it.
    fn recover(&mut self) {
        self.zero_width_streak = 0;
        let len = self.text[self.pos..]
            .chars()
            .next()
            .map_or(0, char::len_utf8);
        self.push_token(self.pos, len, TokenKind::Error);
        self.pos += len;
    }

    fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Stay => return,
            Transition::Push(mode) => self.stack.push(mode),
            Transition::Pop => self.pop(),
            Transition::Replace(mode) => {
                if let Some(top) = self.stack.last_mut() {
                    *top = mode;
                }
            }
            Transition::PopPush(modes) => {
                self.pop();
                self.stack.extend_from_slice(modes);
            }
        }
        tracing::trace!(offset = self.pos, stack = ?self.stack, "mode change");
    }

    /// The bottom mode is never popped.
    fn pop(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }
}

impl<'s> Iterator for Scanner<'_, 's> {
    type Item = Token<'s>;

    fn next(&mut self) -> Option<Token<'s>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }
            if self.pos >= self.text.len() {
                return None;
            }
            self.step();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.text.len() - self.pos;
        let lower = self.pending.len() + usize::from(rest > 0);
        (lower, Some(self.pending.len() + rest))
    }
}

impl FusedIterator for Scanner<'_, '_> {}
