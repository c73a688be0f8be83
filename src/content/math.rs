//! Math typesetting with KaTeX

use katex::{Opts, OutputType};

use super::error::MathError;
use crate::helpers::html_escape;

/// Delimiters recognized in standalone LaTeX strings: (open, close, display)
const DELIMITERS: &[(&str, &str, bool)] = &[
    ("$$", "$$", true),
    ("\\[", "\\]", true),
    ("$", "$", false),
    ("\\(", "\\)", false),
];

/// Render a KaTeX expression to HTML
pub fn render_math_html(literal: &str, display_mode: bool) -> Result<String, MathError> {
    let opts = Opts::builder()
        .display_mode(display_mode)
        .output_type(OutputType::Html)
        .build()
        .map_err(|err| MathError::Options(err.to_string()))?;

    Ok(katex::render_with_opts(literal, opts)?)
}

/// Typeset an expression, falling back to its escaped source on failure
pub fn typeset(literal: &str, display_mode: bool) -> String {
    match render_math_html(literal, display_mode) {
        Ok(html) => html,
        Err(e) => {
            tracing::warn!("Leaving math untypeset: {}", e);
            fallback_math_html(literal, display_mode)
        }
    }
}

fn fallback_math_html(source: &str, display_mode: bool) -> String {
    let class_name = if display_mode {
        "math math-display"
    } else {
        "math math-inline"
    };
    format!(r#"<span class="{}">{}</span>"#, class_name, html_escape(source))
}

/// Render a standalone LaTeX string outside of markdown
///
/// Delimited segments are typeset and the text between them is escaped as
/// is. A string with no delimiters at all is typeset whole in display mode.
pub fn render_latex_text(source: &str) -> String {
    if next_delimited(source).is_none() {
        return typeset(source.trim(), true);
    }

    let mut out = String::with_capacity(source.len() * 2);
    let mut rest = source;

    while let Some((start, open, close, display)) = next_delimited(rest) {
        let body_start = start + open.len();
        let Some(body_len) = rest[body_start..].find(close) else {
            break;
        };

        out.push_str(&html_escape(&rest[..start]));
        out.push_str(&typeset(&rest[body_start..body_start + body_len], display));
        rest = &rest[body_start + body_len + close.len()..];
    }

    out.push_str(&html_escape(rest));
    out
}

/// Earliest opening delimiter in `s` that also has a matching close
fn next_delimited(s: &str) -> Option<(usize, &'static str, &'static str, bool)> {
    DELIMITERS
        .iter()
        .filter_map(|&(open, close, display)| {
            let start = s.find(open)?;
            s[start + open.len()..].find(close)?;
            Some((start, open, close, display))
        })
        // `$$` and `$` share a start; the longer, earlier-listed one wins.
        .min_by_key(|&(start, open, _, _)| (start, std::cmp::Reverse(open.len())))
}
