//! Markdown rendering with math and syntax highlighting

use lazy_static::lazy_static;
use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use regex::Regex;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use super::math;
use super::post_render::{standalone_math, CENTERED_MATH_STYLE};
use crate::config::HighlightConfig;
use crate::helpers::html_escape;

lazy_static! {
    static ref LANGUAGE_CLASS: Regex = Regex::new(r"language-(\w+)").unwrap();
}

/// Markdown renderer with math typesetting and syntax highlighting
pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    light_theme: String,
    dark_theme: String,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self::with_options(&HighlightConfig::default())
    }

    /// Create with custom highlight themes
    pub fn with_options(highlight: &HighlightConfig) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            light_theme: highlight.light_theme.clone(),
            dark_theme: highlight.dark_theme.clone(),
        }
    }

    /// Render markdown to HTML
    ///
    /// Math delimiters become math nodes, raw HTML passes through untouched,
    /// and fenced code with a known language tag is highlighted.
    pub fn render(&self, markdown: &str, is_dark_mode: bool) -> String {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_MATH
            | Options::ENABLE_GFM;
        let parser = Parser::new_ext(markdown, options);

        let mut events: Vec<Event> = Vec::new();
        let mut code_block: Option<CodeBlockKind> = None;
        let mut code_block_content = String::new();

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    code_block = Some(kind);
                    code_block_content.clear();
                }
                Event::End(TagEnd::CodeBlock) => {
                    let kind = code_block.take().unwrap_or(CodeBlockKind::Indented);
                    let rendered = self.render_code_block(&kind, &code_block_content, is_dark_mode);
                    events.push(Event::Html(CowStr::from(rendered)));
                }
                Event::Text(text) if code_block.is_some() => {
                    code_block_content.push_str(&text);
                }
                _ => events.push(event),
            }
        }

        let centered = standalone_math(&events);
        let events = events.into_iter().enumerate().map(|(index, event)| match event {
            Event::InlineMath(tex) => math_event(&tex, false, centered.contains(&index)),
            Event::DisplayMath(tex) => math_event(&tex, true, centered.contains(&index)),
            other => other,
        });

        let mut html_output = String::new();
        html::push_html(&mut html_output, events);
        html_output
    }

    /// Theme used for highlighted code under the given color scheme
    fn highlight_theme(&self, is_dark_mode: bool) -> &Theme {
        let name = if is_dark_mode {
            &self.dark_theme
        } else {
            &self.light_theme
        };

        self.theme_set.themes.get(name).unwrap_or_else(|| {
            tracing::debug!("Unknown highlight theme {}, using default", name);
            &self.theme_set.themes["base16-ocean.dark"]
        })
    }

    /// Render a fenced or indented code block
    fn render_code_block(&self, kind: &CodeBlockKind, code: &str, is_dark_mode: bool) -> String {
        let info = match kind {
            CodeBlockKind::Fenced(info) => info.split_whitespace().next().unwrap_or(""),
            CodeBlockKind::Indented => "",
        };
        let class_name = (!info.is_empty()).then(|| format!("language-{}", info));

        if let Some(lang) = class_name.as_deref().and_then(language_of) {
            let literal = code.strip_suffix('\n').unwrap_or(code);
            if let Some(highlighted) = self.highlight_code(literal, lang, is_dark_mode) {
                return highlighted;
            }
            tracing::debug!("No syntax for language {}, leaving code plain", lang);
        }

        plain_code_block(class_name.as_deref(), code)
    }

    /// Highlight a code block, or `None` if the language is unknown
    fn highlight_code(&self, code: &str, lang: &str, is_dark_mode: bool) -> Option<String> {
        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))?;
        let theme = self.highlight_theme(is_dark_mode);

        match highlighted_html_for_string(code, &self.syntax_set, syntax, theme) {
            Ok(highlighted) => Some(format!(
                r#"<div class="code-block language-{}" data-language="{}">{}</div>"#,
                lang,
                lang,
                highlighted.trim_end()
            )),
            Err(e) => {
                tracing::warn!("Highlighting {} failed: {}", lang, e);
                None
            }
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Language identifier carried by a `language-<id>` class name
fn language_of(class_name: &str) -> Option<&str> {
    LANGUAGE_CLASS
        .captures(class_name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn plain_code_block(class_name: Option<&str>, code: &str) -> String {
    match class_name {
        Some(class) => format!(
            r#"<pre><code class="{}">{}</code></pre>"#,
            html_escape(class),
            html_escape(code)
        ),
        None => format!("<pre><code>{}</code></pre>", html_escape(code)),
    }
}

fn math_event(tex: &str, display_mode: bool, centered: bool) -> Event<'static> {
    let typeset = math::typeset(tex, display_mode);
    let html = if centered {
        format!(
            r#"<span class="math-standalone" style="{}">{}</span>"#,
            CENTERED_MATH_STYLE, typeset
        )
    } else {
        typeset
    };
    Event::Html(CowStr::from(html))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(markdown: &str) -> String {
        MarkdownRenderer::new().render(markdown, false)
    }

    fn strip_tags(html: &str) -> String {
        let mut text = String::with_capacity(html.len());
        let mut in_tag = false;
        for c in html.chars() {
            match c {
                '<' => in_tag = true,
                '>' => in_tag = false,
                _ if !in_tag => text.push(c),
                _ => {}
            }
        }
        text
    }

    #[test]
    fn test_render_basic_markdown() {
        let html = render("# Hello World\n\nThis is a test.");
        assert!(html.contains("<h1>Hello World</h1>"));
        assert!(html.contains("<p>This is a test.</p>"));
    }

    #[test]
    fn test_fenced_python_is_highlighted_without_trailing_newline() {
        let html = render("```python\nprint(1)\n```");
        assert!(html.contains(r#"data-language="python""#));
        assert!(html.contains("<span"));

        let body = &html[..html.find("</pre>").unwrap()];
        assert_eq!(strip_tags(body).trim_start(), "print(1)");
    }

    #[test]
    fn test_fenced_without_language_is_plain() {
        let html = render("```\nlet x = 1;\n```");
        assert_eq!(html.trim(), "<pre><code>let x = 1;\n</code></pre>");
    }

    #[test]
    fn test_unknown_language_falls_back_to_plain() {
        let html = render("```nosuchlang\na < b\n```");
        assert_eq!(
            html.trim(),
            r#"<pre><code class="language-nosuchlang">a &lt; b
</code></pre>"#
        );
    }

    #[test]
    fn test_inline_code_is_plain() {
        let html = render("call `foo(a<b)` now");
        assert!(html.contains("<code>foo(a&lt;b)</code>"));
        assert!(!html.contains("data-language"));
    }

    #[test]
    fn test_language_of() {
        assert_eq!(language_of("language-python"), Some("python"));
        assert_eq!(language_of("language-c++"), Some("c"));
        assert_eq!(language_of("python"), None);
    }

    #[test]
    fn test_standalone_math_centered() {
        let html = render("$$x^2$$");
        assert!(html.contains("math-standalone"));
        assert!(html.contains(CENTERED_MATH_STYLE));
        assert!(html.contains("katex"));
    }

    #[test]
    fn test_math_with_prose_not_centered() {
        let html = render("the square $x^2$ grows");
        assert!(html.contains("katex"));
        assert!(!html.contains("math-standalone"));
    }

    #[test]
    fn test_raw_html_passthrough() {
        let html = render("<div class=\"note\">cost: $5</div>\n\nafter");
        assert!(html.contains("<div class=\"note\">cost: $5</div>"));
        assert!(!html.contains("&lt;div"));
    }

    #[test]
    fn test_theme_selection_same_by_default() {
        let renderer = MarkdownRenderer::new();
        let light = renderer.highlight_theme(false) as *const Theme;
        let dark = renderer.highlight_theme(true) as *const Theme;
        assert_eq!(light, dark);
    }

    #[test]
    fn test_render_is_deterministic() {
        let renderer = MarkdownRenderer::new();
        let source = "# T\n\n$$a$$\n\n```rust\nfn main() {}\n```";
        assert_eq!(renderer.render(source, true), renderer.render(source, true));
    }
}
