//! The set of builtin names that keep their `Name.Builtin` tag.

use rustc_hash::FxHashMap;

use crate::builtins::Catalog;
use crate::config::LexerConfig;

/// Enabled builtin names, each mapped to the module it came from.
///
/// Built once per [`Lexer`](crate::Lexer) from a catalog and a
/// configuration, then only queried.
#[derive(Clone, Debug, Default)]
pub struct BuiltinRegistry {
    enabled: FxHashMap<&'static str, &'static str>,
}

impl BuiltinRegistry {
    /// Names of every catalog module not disabled by `config`. Empty when
    /// builtin highlighting is off.
    pub fn new(catalog: &'static Catalog, config: &LexerConfig) -> Self {
        for unknown in config
            .disabled_modules
            .iter()
            .filter(|name| !catalog.iter().any(|m| m.name == name.as_str()))
        {
            tracing::debug!(module = %unknown, "ignoring unknown builtin module");
        }

        let mut enabled = FxHashMap::default();
        if config.highlight_builtins {
            for module in catalog
                .iter()
                .filter(|m| !config.disabled_modules.contains(m.name))
            {
                enabled.extend(module.names.iter().map(|&name| (name, module.name)));
            }
        }

        tracing::debug!(
            names = enabled.len(),
            disabled = config.disabled_modules.len(),
            highlight = config.highlight_builtins,
            "builtin registry built"
        );
        Self { enabled }
    }

    /// Returns `true` if `name` keeps its builtin tag.
    #[inline]
    pub fn is_enabled(&self, name: &str) -> bool {
        self.enabled.contains_key(name)
    }

    /// Module an enabled name belongs to.
    pub fn module_of(&self, name: &str) -> Option<&'static str> {
        self.enabled.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.enabled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enabled.is_empty()
    }
}
