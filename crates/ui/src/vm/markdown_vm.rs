use std::collections::{HashMap, HashSet};

use primer_core::highlight::{HighlightOptions, escape_html, highlight_code};
use pulldown_cmark::{CodeBlockKind, CowStr, Event, Tag, TagEnd};

/// Render reference markdown to sanitized HTML. Fenced code blocks go
/// through the syntax highlighter.
#[must_use]
pub fn markdown_to_html(input: &str) -> String {
    let mut options = pulldown_cmark::Options::empty();
    options.insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);
    options.insert(pulldown_cmark::Options::ENABLE_TABLES);

    let mut events = Vec::new();
    let mut fence: Option<(String, String)> = None;
    for event in pulldown_cmark::Parser::new_ext(input, options) {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let language = match kind {
                    CodeBlockKind::Fenced(lang) if !lang.is_empty() => lang.to_string(),
                    _ => "rust".to_string(),
                };
                fence = Some((language, String::new()));
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some((language, body)) = fence.take() {
                    events.push(Event::Html(CowStr::from(code_block_html(&body, &language))));
                }
            }
            Event::Text(text) if fence.is_some() => {
                if let Some((_, body)) = fence.as_mut() {
                    body.push_str(&text);
                }
            }
            other => events.push(other),
        }
    }

    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, events.into_iter());
    sanitize_html(&html)
}

/// Highlighted `<pre><code>` block for `code`.
#[must_use]
pub fn code_block_html(code: &str, language: &str) -> String {
    let highlighted = highlight_code(code, &HighlightOptions::new().language(language));
    format!(
        "<pre class=\"language-{lang}\"><code class=\"language-{lang}\">{highlighted}</code></pre>",
        lang = escape_html(language),
    )
}

#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "p", "div", "span", "br", "em", "strong", "b", "i", "code", "pre", "blockquote", "ul",
        "ol", "li", "a", "h3", "h4", "h5", "table", "thead", "tbody", "tr", "th", "td", "del",
    ]
    .into_iter()
    .collect();

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    attributes.insert("a", ["href"].into_iter().collect());
    attributes.insert("span", ["class"].into_iter().collect());
    attributes.insert("code", ["class"].into_iter().collect());
    attributes.insert("pre", ["class"].into_iter().collect());

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(attributes)
        .clean(html)
        .to_string()
}
