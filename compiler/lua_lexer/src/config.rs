//! Host-facing lexer options.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Options that shape builtin highlighting.
///
/// Deserializes from any serde format; missing fields take their defaults,
/// so `{}` is a valid configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerConfig {
    /// Tag standard-library names as `Name.Builtin`. When `false`, every
    /// candidate is demoted to `Name`.
    pub highlight_builtins: bool,
    /// Catalog modules whose names are not highlighted.
    pub disabled_modules: BTreeSet<String>,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            highlight_builtins: true,
            disabled_modules: BTreeSet::new(),
        }
    }
}

impl LexerConfig {
    #[must_use]
    pub fn with_highlight_builtins(mut self, enabled: bool) -> Self {
        self.highlight_builtins = enabled;
        self
    }

    #[must_use]
    pub fn disable_module(mut self, module: impl Into<String>) -> Self {
        self.disabled_modules.insert(module.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_highlight_everything() {
        let config = LexerConfig::default();
        assert!(config.highlight_builtins);
        assert!(config.disabled_modules.is_empty());
    }

    #[test]
    fn empty_object_deserializes_to_default() {
        let config: LexerConfig = match serde_json::from_str("{}") {
            Ok(c) => c,
            Err(e) => panic!("{e}"),
        };
        assert_eq!(config, LexerConfig::default());
    }

    #[test]
    fn deserializes_disabled_modules() {
        let json = r#"{ "disabled_modules": ["string", "os", "string"] }"#;
        let config: LexerConfig = match serde_json::from_str(json) {
            Ok(c) => c,
            Err(e) => panic!("{e}"),
        };
        assert!(config.highlight_builtins);
        assert_eq!(
            config.disabled_modules.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["os", "string"]
        );
    }

    #[test]
    fn builder_helpers() {
        let config = LexerConfig::default()
            .with_highlight_builtins(false)
            .disable_module("io");
        assert!(!config.highlight_builtins);
        assert!(config.disabled_modules.contains("io"));
    }
}
