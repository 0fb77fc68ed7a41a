//! Code block language names accepted by the target schema.

/// Language used when the fence names nothing recognized.
pub const PLAIN_TEXT: &str = "plain text";

/// Language of raw HTML blocks.
pub const HTML: &str = "html";

const LANGUAGES: &[&str] = &[
    "abap",
    "arduino",
    "bash",
    "basic",
    "c",
    "clojure",
    "coffeescript",
    "c++",
    "c#",
    "css",
    "dart",
    "diff",
    "docker",
    "elixir",
    "elm",
    "erlang",
    "flow",
    "fortran",
    "f#",
    "gherkin",
    "glsl",
    "go",
    "graphql",
    "groovy",
    "haskell",
    "html",
    "java",
    "javascript",
    "json",
    "julia",
    "kotlin",
    "latex",
    "less",
    "lisp",
    "livescript",
    "lua",
    "makefile",
    "markdown",
    "markup",
    "matlab",
    "mermaid",
    "nix",
    "objective-c",
    "ocaml",
    "pascal",
    "perl",
    "php",
    "plain text",
    "powershell",
    "prolog",
    "protobuf",
    "python",
    "r",
    "reason",
    "ruby",
    "rust",
    "sass",
    "scala",
    "scheme",
    "scss",
    "shell",
    "solidity",
    "sql",
    "swift",
    "typescript",
    "vb.net",
    "verilog",
    "vhdl",
    "visual basic",
    "webassembly",
    "xml",
    "yaml",
    "java/c/c++/c#",
];

const ALIASES: &[(&str, &str)] = &[
    ("js", "javascript"),
    ("ts", "typescript"),
    ("py", "python"),
    ("rs", "rust"),
    ("sh", "shell"),
    ("yml", "yaml"),
];

/// Map a fence language to an accepted name, case-insensitively.
///
/// Unknown or missing languages become [`PLAIN_TEXT`].
#[must_use]
pub fn resolve_language(language: Option<&str>) -> String {
    let Some(language) = language.map(str::to_lowercase) else {
        return PLAIN_TEXT.to_owned();
    };
    if LANGUAGES.contains(&language.as_str()) {
        return language;
    }
    ALIASES
        .iter()
        .find(|&&(alias, _)| alias == language)
        .map_or(PLAIN_TEXT, |&(_, name)| name)
        .to_owned()
}
