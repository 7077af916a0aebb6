//! Syntax highlighting to HTML markup.
//!
//! Grammars are plain rule tables compiled once per process. Highlighting
//! never fails: unknown languages and broken grammars fall back to escaped
//! text.

mod grammar;
mod tables;

use std::collections::BTreeSet;
use std::sync::LazyLock;

use thiserror::Error;

pub use grammar::{Grammar, GrammarRegistry, RuleSpec, Segment};

pub const DEFAULT_LANGUAGE: &str = "rust";

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HighlightError {
    #[error("grammar {language} has an invalid {class} rule: {source}")]
    Grammar {
        language: String,
        class: &'static str,
        #[source]
        source: regex::Error,
    },
}

static BUILTIN: LazyLock<GrammarRegistry> = LazyLock::new(|| {
    GrammarRegistry::new()
        .with_grammar("rust", tables::RUST)
        .with_grammar("bash", tables::BASH)
        .with_grammar("toml", tables::TOML)
        .with_grammar("json", tables::JSON)
        .with_alias("sh", "bash")
        .with_alias("shell", "bash")
        .with_alias("terminal", "bash")
});

/// Grammars for `rust`, `bash` (`sh`, `shell`, `terminal`), `toml` and `json`.
#[must_use]
pub fn builtin_grammars() -> &'static GrammarRegistry {
    &BUILTIN
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightOptions {
    pub language: Option<String>,
    pub show_line_numbers: bool,
    /// 1-based line indices.
    pub highlight_lines: BTreeSet<usize>,
}

impl HighlightOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    #[must_use]
    pub fn line_numbers(mut self, show: bool) -> Self {
        self.show_line_numbers = show;
        self
    }

    #[must_use]
    pub fn highlight_lines(mut self, lines: impl IntoIterator<Item = usize>) -> Self {
        self.highlight_lines = lines.into_iter().collect();
        self
    }

    fn wraps_lines(&self) -> bool {
        self.show_line_numbers || !self.highlight_lines.is_empty()
    }
}

/// Highlight `code` with the builtin grammars.
#[must_use]
pub fn highlight_code(code: &str, options: &HighlightOptions) -> String {
    highlight_with(builtin_grammars(), code, options)
}

#[must_use]
pub fn highlight_with(registry: &GrammarRegistry, code: &str, options: &HighlightOptions) -> String {
    let language = options.language.as_deref().unwrap_or(DEFAULT_LANGUAGE);
    let clean = code.trim();

    let grammar = match registry.get(language) {
        None => {
            tracing::warn!(language = %language, "language not found, falling back to plain text");
            return escape_html(clean);
        }
        Some(Err(err)) => {
            tracing::error!(error = %err, "syntax highlighting failed");
            return escape_html(code);
        }
        Some(Ok(grammar)) => grammar,
    };

    let mut highlighted = render_segments(&grammar.tokenize(clean));
    if options.wraps_lines() {
        highlighted = add_line_numbers(&highlighted, &options.highlight_lines);
    }
    highlighted
}

fn render_segments(segments: &[Segment<'_>]) -> String {
    let mut out = String::new();
    for segment in segments {
        let Some(class) = segment.class else {
            out.push_str(&escape_html(segment.text));
            continue;
        };
        // One span per line keeps per-line wrapping well formed.
        for (index, part) in segment.text.split('\n').enumerate() {
            if index > 0 {
                out.push('\n');
            }
            if part.is_empty() {
                continue;
            }
            out.push_str("<span class=\"token ");
            out.push_str(class);
            out.push_str("\">");
            out.push_str(&escape_html(part));
            out.push_str("</span>");
        }
    }
    out
}

fn add_line_numbers(markup: &str, highlight_lines: &BTreeSet<usize>) -> String {
    markup
        .split('\n')
        .enumerate()
        .map(|(index, line)| {
            let number = index + 1;
            let class = if highlight_lines.contains(&number) {
                "line highlighted-line"
            } else {
                "line"
            };
            format!(
                "<span class=\"{class}\"><span class=\"line-number\">{number}</span>{line}</span>"
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Escape text for use as HTML element content.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_language_returns_escaped_input() {
        let code = "if a < b && c > d { x }";
        let out = highlight_code(code, &HighlightOptions::new().language("cobol"));
        assert_eq!(out, "if a &lt; b &amp;&amp; c &gt; d { x }");
    }

    #[test]
    fn builtin_tables_compile() {
        for language in ["rust", "bash", "sh", "shell", "terminal", "toml", "json"] {
            assert!(
                matches!(builtin_grammars().get(language), Some(Ok(_))),
                "{language} should compile"
            );
        }
    }

    #[test]
    fn rust_tokens_are_classified() {
        let out = highlight_code(
            "fn main() {\n    println!(\"a<b\");\n}",
            &HighlightOptions::new(),
        );
        assert!(out.contains(r#"<span class="token keyword">fn</span>"#), "{out}");
        assert!(out.contains(r#"<span class="token function">main</span>"#), "{out}");
        assert!(out.contains(r#"<span class="token macro">println!</span>"#), "{out}");
        assert!(out.contains(r#"<span class="token string">"a&lt;b"</span>"#), "{out}");
    }

    #[test]
    fn lifetimes_chars_and_numbers() {
        let out = highlight_code("let c: &'a char = 'x'; 0xff", &HighlightOptions::new());
        assert!(out.contains(r#"<span class="token lifetime">'a</span>"#), "{out}");
        assert!(out.contains(r#"<span class="token char">'x'</span>"#), "{out}");
        assert!(out.contains(r#"<span class="token number">0xff</span>"#), "{out}");
    }

    #[test]
    fn shell_alias_highlights_toolchain_commands() {
        let out = highlight_code(
            "cargo run # start\necho $HOME",
            &HighlightOptions::new().language("terminal"),
        );
        assert!(out.contains(r#"<span class="token builtin">cargo</span>"#), "{out}");
        assert!(out.contains(r#"<span class="token comment"># start</span>"#), "{out}");
        assert!(out.contains(r#"<span class="token variable">$HOME</span>"#), "{out}");
    }

    #[test]
    fn highlighted_line_is_marked() {
        let out = highlight_code(
            "let a = 1;\nlet b = 2;\nlet c = 3;",
            &HighlightOptions::new().line_numbers(true).highlight_lines([2]),
        );
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with(r#"<span class="line"><span class="line-number">1</span>"#));
        assert!(lines[1].starts_with(
            r#"<span class="line highlighted-line"><span class="line-number">2</span>"#
        ));
        assert!(!lines[2].contains("highlighted-line"));
    }

    #[test]
    fn highlight_lines_alone_turn_on_wrapping() {
        let out = highlight_code("a\nb", &HighlightOptions::new().highlight_lines([1]));
        assert_eq!(out.matches("class=\"line-number\"").count(), 2);
        let plain = highlight_code("a\nb", &HighlightOptions::new());
        assert!(!plain.contains("line-number"));
    }

    #[test]
    fn multi_line_tokens_stay_inside_their_line() {
        let out = highlight_code(
            "/* one\ntwo */ fn",
            &HighlightOptions::new().line_numbers(true),
        );
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            assert_eq!(line.matches("<span").count(), line.matches("</span>").count());
        }
    }

    #[test]
    fn broken_grammar_falls_back_to_escaped_original() {
        let registry = GrammarRegistry::new().with_grammar("rust", &[RuleSpec::new("x", "[")]);
        let out = highlight_with(&registry, "  <b>  ", &HighlightOptions::new());
        assert_eq!(out, "  &lt;b&gt;  ");
    }

    #[test]
    fn input_is_trimmed_before_highlighting() {
        let out = highlight_code("\n\n  x  \n", &HighlightOptions::new().language("none"));
        assert_eq!(out, "x");
    }
}
