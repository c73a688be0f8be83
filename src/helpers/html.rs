//! HTML helper functions

use super::url::url_for;
use crate::config::SiteConfig;

/// Generate a CSS link tag
///
/// # Examples
/// ```ignore
/// css(&config, "style.css") // -> <link rel="stylesheet" href="/blog/css/style.css">
/// ```
pub fn css(config: &SiteConfig, path: &str) -> String {
    let path = if is_absolute_url(path) {
        path.to_string()
    } else {
        let path = if path.ends_with(".css") {
            path.to_string()
        } else {
            format!("{}.css", path)
        };
        url_for(config, &format!("css/{}", path.trim_start_matches('/')))
    };

    format!(r#"<link rel="stylesheet" href="{}">"#, html_escape(&path))
}

/// Generate an anchor tag to a path on this site
///
/// # Examples
/// ```ignore
/// link_to(&config, "/", "home") // -> <a href="/blog/">home</a>
/// ```
pub fn link_to(config: &SiteConfig, path: &str, text: &str) -> String {
    format!(
        r#"<a href="{}">{}</a>"#,
        html_escape(&url_for(config, path)),
        html_escape(text)
    )
}

/// Generate an anchor that opens in a new browsing context
///
/// `inner` is trusted markup; `rel` controls referrer/opener leakage.
pub fn external_link(href: &str, inner: &str, rel: &str, class: Option<&str>) -> String {
    let class_attr = class
        .map(|c| format!(r#" class="{}""#, html_escape(c)))
        .unwrap_or_default();

    format!(
        r#"<a href="{}" target="_blank" rel="{}"{}>{}</a>"#,
        html_escape(href),
        rel,
        class_attr,
        inner
    )
}

/// Generate an image tag
pub fn image_tag(src: &str, alt: &str, class: Option<&str>) -> String {
    let class_attr = class
        .map(|c| format!(r#" class="{}""#, html_escape(c)))
        .unwrap_or_default();

    format!(
        r#"<img{} src="{}" alt="{}">"#,
        class_attr,
        html_escape(src),
        html_escape(alt)
    )
}

/// Generate meta generator tag
pub fn meta_generator() -> String {
    format!(
        r#"<meta name="generator" content="blog-rs {}">"#,
        env!("CARGO_PKG_VERSION")
    )
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn is_absolute_url(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//")
}
