//! Rule tables: building, flattening and validating.
//!
//! Modes are declared as lists of [`Item`]s. [`GrammarBuilder::build`]
//! resolves every `Include` into plain rule sequences, so the scanner only
//! ever walks a flat `&[Rule]` per mode, then checks the table for faults
//! that would make scanning stall or drop text.

mod lua;

use lua_lexer_core::{Pattern, WordList};

use crate::error::GrammarError;
use crate::mode::{Emit, Item, Mode, Rule, Transition};

/// Mode definitions awaiting flattening.
#[derive(Clone, Debug, Default)]
pub struct GrammarBuilder {
    modes: [Option<Vec<Item>>; Mode::COUNT],
}

impl GrammarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define (or redefine) `mode`.
    #[must_use]
    pub fn mode(mut self, mode: Mode, items: impl IntoIterator<Item = Item>) -> Self {
        self.modes[mode.index()] = Some(items.into_iter().collect());
        self
    }

    /// Flatten includes and validate.
    pub fn build(self) -> Result<Grammar, GrammarError> {
        if self.modes[Mode::Root.index()].is_none() {
            return Err(GrammarError::UndefinedMode(Mode::Root));
        }

        let mut grammar = Grammar::default();
        for mode in Mode::ALL {
            if self.modes[mode.index()].is_some() {
                grammar.rules[mode.index()] = self.flatten(mode, &mut Vec::new())?;
                grammar.defined[mode.index()] = true;
            }
        }
        grammar.validate()?;

        tracing::debug!(
            modes = grammar.defined.iter().filter(|&&d| d).count(),
            rules = grammar.rules.iter().map(Vec::len).sum::<usize>(),
            "grammar built"
        );
        Ok(grammar)
    }

    fn flatten(&self, mode: Mode, visiting: &mut Vec<Mode>) -> Result<Vec<Rule>, GrammarError> {
        if visiting.contains(&mode) {
            return Err(GrammarError::IncludeCycle(mode));
        }
        let items = self.modes[mode.index()]
            .as_ref()
            .ok_or(GrammarError::UndefinedMode(mode))?;

        visiting.push(mode);
        let mut rules = Vec::with_capacity(items.len());
        for item in items {
            match item {
                Item::Rule(rule) => rules.push(rule.clone()),
                Item::Include(inner) => rules.extend(self.flatten(*inner, visiting)?),
            }
        }
        visiting.pop();
        Ok(rules)
    }
}

/// Flattened, validated rule tables. Immutable once built.
#[derive(Clone, Debug, Default)]
pub struct Grammar {
    rules: [Vec<Rule>; Mode::COUNT],
    defined: [bool; Mode::COUNT],
}

impl Grammar {
    /// The Lua grammar. `builtins` are the names tagged `Name.Builtin`
    /// before builtin classification.
    pub fn lua(builtins: WordList) -> Result<Self, GrammarError> {
        lua::build(builtins)
    }

    /// Rules of `mode`, includes spliced in, in match order.
    #[inline]
    pub fn rules(&self, mode: Mode) -> &[Rule] {
        &self.rules[mode.index()]
    }

    /// Returns `true` if `mode` was defined.
    pub fn is_defined(&self, mode: Mode) -> bool {
        self.defined[mode.index()]
    }

    fn validate(&self) -> Result<(), GrammarError> {
        for mode in Mode::ALL.into_iter().filter(|&m| self.is_defined(m)) {
            for (index, rule) in self.rules(mode).iter().enumerate() {
                if rule.transition == Transition::Stay && rule.pattern.can_match_empty() {
                    return Err(GrammarError::ZeroWidthStay { mode, index });
                }
                if let Some(&target) = rule
                    .transition
                    .targets()
                    .iter()
                    .find(|&&t| !self.is_defined(t))
                {
                    return Err(GrammarError::UndefinedMode(target));
                }
                match rule.emit {
                    Emit::Nothing if rule.pattern != Pattern::Empty => {
                        return Err(GrammarError::DropsText { mode, index });
                    }
                    Emit::Groups(kinds) => {
                        let groups = match &rule.pattern {
                            Pattern::Seq(parts) => parts.len(),
                            _ => 0,
                        };
                        if groups != kinds.len() {
                            return Err(GrammarError::GroupArity {
                                mode,
                                index,
                                kinds: kinds.len(),
                                groups,
                            });
                        }
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }
}
