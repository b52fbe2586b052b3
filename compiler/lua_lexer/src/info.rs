//! Descriptive metadata for language registries.

/// Names and file associations a host uses to pick this lexer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LexerInfo {
    pub name: &'static str,
    pub url: &'static str,
    pub aliases: &'static [&'static str],
    /// Glob patterns; only the `*.ext` form is used.
    pub filenames: &'static [&'static str],
    pub mimetypes: &'static [&'static str],
}

pub const LUA: LexerInfo = LexerInfo {
    name: "Lua",
    url: "https://www.lua.org/",
    aliases: &["lua"],
    filenames: &["*.lua", "*.wlua"],
    mimetypes: &["text/x-lua", "application/x-lua"],
};

impl LexerInfo {
    /// Returns `true` if `alias` names this language (ASCII case-insensitive).
    pub fn has_alias(&self, alias: &str) -> bool {
        self.aliases.iter().any(|a| a.eq_ignore_ascii_case(alias))
    }

    /// Returns `true` if the final path component of `path` matches one of
    /// the filename patterns.
    pub fn matches_filename(&self, path: &str) -> bool {
        let file = path.rsplit(['/', '\\']).next().unwrap_or(path);
        self.filenames.iter().any(|pattern| match pattern.strip_prefix('*') {
            Some(suffix) => file.len() > suffix.len() && file.ends_with(suffix),
            None => file == *pattern,
        })
    }
}
