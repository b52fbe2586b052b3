//! The Lua standard-library catalog.
//!
//! Names are grouped by module so a host can turn highlighting off for
//! whole modules (see [`LexerConfig`](crate::LexerConfig)). Qualified
//! names carry their table prefix (`string.format`); names in `basic` are
//! globals.

use lua_lexer_core::WordList;

/// One named group of builtin names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuiltinModule {
    pub name: &'static str,
    pub names: &'static [&'static str],
}

/// A set of builtin modules.
pub type Catalog = [BuiltinModule];

/// Lua 5.x standard library.
pub static LUA_MODULES: &Catalog = &[
    BuiltinModule {
        name: "basic",
        names: &[
            "_G",
            "_VERSION",
            "assert",
            "collectgarbage",
            "dofile",
            "error",
            "getmetatable",
            "ipairs",
            "load",
            "loadfile",
            "next",
            "pairs",
            "pcall",
            "print",
            "rawequal",
            "rawget",
            "rawlen",
            "rawset",
            "select",
            "setmetatable",
            "tonumber",
            "tostring",
            "type",
            "warn",
            "xpcall",
        ],
    },
    BuiltinModule {
        name: "bit32",
        names: &[
            "bit32.arshift",
            "bit32.band",
            "bit32.bnot",
            "bit32.bor",
            "bit32.btest",
            "bit32.bxor",
            "bit32.extract",
            "bit32.lrotate",
            "bit32.lshift",
            "bit32.replace",
            "bit32.rrotate",
            "bit32.rshift",
        ],
    },
    BuiltinModule {
        name: "coroutine",
        names: &[
            "coroutine.close",
            "coroutine.create",
            "coroutine.isyieldable",
            "coroutine.resume",
            "coroutine.running",
            "coroutine.status",
            "coroutine.wrap",
            "coroutine.yield",
        ],
    },
    BuiltinModule {
        name: "debug",
        names: &[
            "debug.debug",
            "debug.gethook",
            "debug.getinfo",
            "debug.getlocal",
            "debug.getmetatable",
            "debug.getregistry",
            "debug.getupvalue",
            "debug.getuservalue",
            "debug.sethook",
            "debug.setlocal",
            "debug.setmetatable",
            "debug.setupvalue",
            "debug.setuservalue",
            "debug.traceback",
            "debug.upvalueid",
            "debug.upvaluejoin",
        ],
    },
    BuiltinModule {
        name: "io",
        names: &[
            "io.close",
            "io.flush",
            "io.input",
            "io.lines",
            "io.open",
            "io.output",
            "io.popen",
            "io.read",
            "io.stderr",
            "io.stdin",
            "io.stdout",
            "io.tmpfile",
            "io.type",
            "io.write",
        ],
    },
    BuiltinModule {
        name: "math",
        names: &[
            "math.abs",
            "math.acos",
            "math.asin",
            "math.atan",
            "math.atan2",
            "math.ceil",
            "math.cos",
            "math.cosh",
            "math.deg",
            "math.exp",
            "math.floor",
            "math.fmod",
            "math.frexp",
            "math.huge",
            "math.ldexp",
            "math.log",
            "math.max",
            "math.maxinteger",
            "math.min",
            "math.mininteger",
            "math.modf",
            "math.pi",
            "math.pow",
            "math.rad",
            "math.random",
            "math.randomseed",
            "math.sin",
            "math.sinh",
            "math.sqrt",
            "math.tan",
            "math.tanh",
            "math.tointeger",
            "math.type",
            "math.ult",
        ],
    },
    BuiltinModule {
        name: "modules",
        names: &[
            "package.config",
            "package.cpath",
            "package.loaded",
            "package.loadlib",
            "package.path",
            "package.preload",
            "package.searchers",
            "package.searchpath",
            "require",
        ],
    },
    BuiltinModule {
        name: "os",
        names: &[
            "os.clock",
            "os.date",
            "os.difftime",
            "os.execute",
            "os.exit",
            "os.getenv",
            "os.remove",
            "os.rename",
            "os.setlocale",
            "os.time",
            "os.tmpname",
        ],
    },
    BuiltinModule {
        name: "string",
        names: &[
            "string.byte",
            "string.char",
            "string.dump",
            "string.find",
            "string.format",
            "string.gmatch",
            "string.gsub",
            "string.len",
            "string.lower",
            "string.match",
            "string.pack",
            "string.packsize",
            "string.rep",
            "string.reverse",
            "string.sub",
            "string.unpack",
            "string.upper",
        ],
    },
    BuiltinModule {
        name: "table",
        names: &[
            "table.concat",
            "table.insert",
            "table.move",
            "table.pack",
            "table.remove",
            "table.sort",
            "table.unpack",
        ],
    },
    BuiltinModule {
        name: "utf8",
        names: &[
            "utf8.char",
            "utf8.charpattern",
            "utf8.codepoint",
            "utf8.codes",
            "utf8.len",
            "utf8.offset",
        ],
    },
];

/// Every name in `catalog`, across all modules.
///
/// The scanner tags all of these as builtin candidates whatever the
/// configuration; [`BuiltinRegistry`](crate::BuiltinRegistry) decides
/// afterwards which keep the tag.
pub fn all_names(catalog: &'static Catalog) -> WordList {
    catalog
        .iter()
        .flat_map(|module| module.names.iter().copied())
        .collect()
}
