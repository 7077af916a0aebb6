use std::collections::HashMap;

use regex::Regex;

use super::HighlightError;

/// One token rule as written in a grammar table.
///
/// `pattern` is matched at the current position only. When it has a first
/// capture group, the token covers just that group, which lets a rule require
/// trailing context without consuming it. `not_after` lists characters that
/// must not directly precede the token.
#[derive(Debug, Clone, Copy)]
pub struct RuleSpec {
    pub class: &'static str,
    pub pattern: &'static str,
    pub not_after: &'static [char],
}

impl RuleSpec {
    #[must_use]
    pub const fn new(class: &'static str, pattern: &'static str) -> Self {
        Self {
            class,
            pattern,
            not_after: &[],
        }
    }

    #[must_use]
    pub const fn not_after(mut self, chars: &'static [char]) -> Self {
        self.not_after = chars;
        self
    }
}

#[derive(Debug)]
struct Rule {
    class: &'static str,
    regex: Regex,
    not_after: &'static [char],
}

/// A compiled, ordered rule table. Earlier rules win.
#[derive(Debug)]
pub struct Grammar {
    rules: Vec<Rule>,
}

/// A piece of tokenized source: the token class (if any) and its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub class: Option<&'static str>,
    pub text: &'a str,
}

impl Grammar {
    /// # Errors
    ///
    /// Returns `HighlightError::Grammar` for the first pattern that fails to compile.
    pub fn compile(language: &str, specs: &[RuleSpec]) -> Result<Self, HighlightError> {
        let rules = specs
            .iter()
            .map(|spec| {
                Regex::new(&format!("^(?:{})", spec.pattern))
                    .map(|regex| Rule {
                        class: spec.class,
                        regex,
                        not_after: spec.not_after,
                    })
                    .map_err(|source| HighlightError::Grammar {
                        language: language.to_string(),
                        class: spec.class,
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    fn match_at(&self, text: &str, pos: usize) -> Option<(&'static str, usize)> {
        let rest = &text[pos..];
        let prev = text[..pos].chars().next_back();
        for rule in &self.rules {
            if prev.is_some_and(|c| rule.not_after.contains(&c)) {
                continue;
            }
            let Some(caps) = rule.regex.captures(rest) else {
                continue;
            };
            let Some(token) = caps.get(1).or_else(|| caps.get(0)) else {
                continue;
            };
            if token.start() == 0 && token.end() > 0 {
                return Some((rule.class, token.end()));
            }
        }
        None
    }

    /// Split `text` into classified and plain segments covering all of it.
    ///
    /// Unmatched identifiers are consumed as a whole word so no rule can
    /// start in the middle of one.
    #[must_use]
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<Segment<'a>> {
        let mut segments: Vec<Segment<'a>> = Vec::new();
        let mut pos = 0;
        while pos < text.len() {
            if let Some((class, len)) = self.match_at(text, pos) {
                segments.push(Segment {
                    class: Some(class),
                    text: &text[pos..pos + len],
                });
                pos += len;
                continue;
            }

            let rest = &text[pos..];
            let len = word_len(rest).unwrap_or_else(|| rest.chars().next().map_or(1, char::len_utf8));
            match segments.last_mut() {
                Some(last) if last.class.is_none() => {
                    let start = pos - last.text.len();
                    last.text = &text[start..pos + len];
                }
                _ => segments.push(Segment {
                    class: None,
                    text: &rest[..len],
                }),
            }
            pos += len;
        }
        segments
    }
}

fn word_len(text: &str) -> Option<usize> {
    let len: usize = text
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .map(char::len_utf8)
        .sum();
    (len > 0).then_some(len)
}

/// Grammars by language name, with aliases.
#[derive(Debug, Default)]
pub struct GrammarRegistry {
    grammars: HashMap<String, Result<Grammar, HighlightError>>,
    aliases: HashMap<String, String>,
}

impl GrammarRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a grammar. A table that fails to compile is kept as the error
    /// so lookups can report it.
    #[must_use]
    pub fn with_grammar(mut self, language: &str, specs: &[RuleSpec]) -> Self {
        self.grammars
            .insert(language.to_string(), Grammar::compile(language, specs));
        self
    }

    #[must_use]
    pub fn with_alias(mut self, alias: &str, language: &str) -> Self {
        self.aliases.insert(alias.to_string(), language.to_string());
        self
    }

    /// `None` when the language is unknown.
    #[must_use]
    pub fn get(&self, language: &str) -> Option<&Result<Grammar, HighlightError>> {
        let name = self.aliases.get(language).map_or(language, String::as_str);
        self.grammars.get(name)
    }
}
