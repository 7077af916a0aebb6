//! Grammar tables for the builtin languages.
//!
//! The Rust and shell tables carry the extended token sets used across the
//! lesson content (raw/byte strings, lifetimes, toolchain commands as
//! builtins). Nested sub-grammars are flattened: a shell arithmetic or command
//! substitution is one `variable` token.

use super::grammar::RuleSpec;

pub(super) const RUST: &[RuleSpec] = &[
    RuleSpec::new("comment", r"/\*[\s\S]*?\*/"),
    RuleSpec::new("comment", r"//.*"),
    RuleSpec::new("string", r##"(?:br#*|b#*|r#*)?"(?:[^"\\]|\\[\s\S])*"#*"##),
    RuleSpec::new(
        "char",
        r#"'(?:[^'\\]|\\(?:[nrt0\\'"]|x[\da-fA-F]{2}|u\{[\da-fA-F]{1,6}\}))'"#,
    ),
    RuleSpec::new("attribute", r"#!?\[[^\]\n]*\]"),
    RuleSpec::new("lifetime", r"'[a-zA-Z_]\w*"),
    RuleSpec::new(
        "keyword",
        r"\b(?:abstract|as|async|await|become|box|break|const|continue|crate|do|dyn|else|enum|extern|false|final|fn|for|if|impl|in|let|loop|macro|match|mod|move|mut|override|priv|pub|ref|return|self|Self|static|struct|super|trait|true|try|type|typeof|union|unsafe|unsized|use|virtual|where|while|yield)\b",
    ),
    RuleSpec::new("function", r"\b([a-z_]\w*)\s*\("),
    RuleSpec::new("macro", r"\b\w+!"),
    RuleSpec::new(
        "number",
        r"(?i)\b(?:0x[\da-f]+|0o[0-7]+|0b[01]+|\d+(?:\.\d+)?(?:e[+-]?\d+)?)\b",
    ),
    RuleSpec::new("operator", r"[-+*/%=!<>&|^]+"),
    RuleSpec::new("punctuation", r"[{}\[\];(),.:]"),
];

pub(super) const BASH: &[RuleSpec] = &[
    RuleSpec::new("comment", r"#.*").not_after(&['"', '{', '\\', '$']),
    RuleSpec::new("string", r#""(?:\\[\s\S]|[^"\\])*""#),
    RuleSpec::new("string", r"'(?:\\[\s\S]|[^'\\])*'"),
    RuleSpec::new("variable", r"\$?\(\([\s\S]+?\)\)"),
    RuleSpec::new("variable", r"\$\((?:\([^)]+\)|[^()])+\)"),
    RuleSpec::new("variable", r"\$(?:[\w#?*!@$]+|\{[^}]+\})"),
    RuleSpec::new(
        "builtin",
        r"\b(?:alias|bg|bind|break|builtin|caller|cd|command|compgen|complete|compopt|continue|declare|dirs|disown|echo|enable|eval|exec|exit|export|fc|fg|getopts|hash|help|history|jobs|kill|let|local|logout|mapfile|popd|printf|pushd|pwd|read|readonly|return|set|shift|shopt|source|suspend|test|times|trap|type|typeset|ulimit|umask|unalias|unset|wait|cargo|rustc|rustup|npm|node|git|curl|wget|cat|ls|mkdir|rm|cp|mv|chmod|chown|sudo|apt|yum|brew|pip|python|java|javac)\b",
    ),
    RuleSpec::new(
        "keyword",
        r"\b(?:if|then|else|elif|fi|for|while|in|case|esac|function|select|until|do|done|time)\b",
    ),
    RuleSpec::new("function", r"(\w+)\s*\(\s*\)"),
    RuleSpec::new("file-descriptor", r"\b(\d+)\s*[<>]"),
    RuleSpec::new(
        "number",
        r"\b0x[\dA-Fa-f]+\b|(?:\b\d+\.?\d*|\B\.\d+)(?:[Ee]-?\d+)?",
    ),
    RuleSpec::new("operator", r"--?|\+\+?|!=?|=~|=?=|<=?|>=?|&&|\|\||[&|;<>(){}\[\]]"),
    RuleSpec::new("punctuation", r"[,.:]"),
];

pub(super) const TOML: &[RuleSpec] = &[
    RuleSpec::new("comment", r"#.*"),
    RuleSpec::new("table", r"\[\[?[^\]\n]+\]\]?"),
    RuleSpec::new("key", r"([\w.-]+)[\t ]*="),
    RuleSpec::new(
        "string",
        r#""""[\s\S]*?"""|'''[\s\S]*?'''|"(?:\\.|[^"\\\n])*"|'[^'\n]*'"#,
    ),
    RuleSpec::new(
        "date",
        r"\b\d{4}-\d{2}-\d{2}(?:[T\s]\d{2}:\d{2}:\d{2}(?:\.\d+)?(?:Z|[+-]\d{2}:\d{2})?)?\b",
    ),
    RuleSpec::new("boolean", r"\b(?:true|false)\b"),
    RuleSpec::new(
        "number",
        r"[+-]?(?:0x[\da-fA-F_]+|0o[0-7_]+|0b[01_]+|\d[\d_]*(?:\.\d[\d_]*)?(?:[eE][+-]?\d+)?)\b|[+-]?(?:inf|nan)\b",
    ),
    RuleSpec::new("punctuation", r"[.,=\[\]{}]"),
];

pub(super) const JSON: &[RuleSpec] = &[
    RuleSpec::new("property", r#"("(?:\\.|[^\\"\r\n])*")\s*:"#),
    RuleSpec::new("string", r#""(?:\\.|[^\\"\r\n])*""#),
    RuleSpec::new("number", r"(?i)-?\b\d+(?:\.\d+)?(?:e[+-]?\d+)?\b"),
    RuleSpec::new("boolean", r"\b(?:true|false)\b"),
    RuleSpec::new("null", r"\bnull\b"),
    RuleSpec::new("operator", r":"),
    RuleSpec::new("punctuation", r"[{}\[\],]"),
];
