//! Page templates
//!
//! A post page is a fixed header plus a body section. Everything here is a
//! pure function of the post, the site config and the dark-mode flag, so
//! rendering the same post twice yields the same HTML.

mod block;
mod body;
mod header;
mod icons;
mod link_card;
mod style;

pub use block::render_block;
pub use body::{body_section, title_section};
pub use header::{dark_mode_url, header_section, DARK_MODE_PATH};
pub use link_card::{card_label, link_card};
pub use style::STYLESHEET;

use crate::config::SiteConfig;
use crate::content::{BlogPost, MarkdownRenderer};
use crate::helpers::{css, html_escape, meta_generator};

/// Everything a component needs to render
pub struct RenderContext<'a> {
    pub config: &'a SiteConfig,
    pub markdown: &'a MarkdownRenderer,
    pub is_dark_mode: bool,
}

/// Renders full post pages
pub struct TemplateRenderer {
    config: SiteConfig,
    markdown: MarkdownRenderer,
}

impl TemplateRenderer {
    /// Create a renderer for the given site
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            config: config.clone(),
            markdown: MarkdownRenderer::with_options(&config.highlight),
        }
    }

    /// Render a complete HTML page for a post
    pub fn render_post(&self, post: &BlogPost, is_dark_mode: bool) -> String {
        let ctx = RenderContext {
            config: &self.config,
            markdown: &self.markdown,
            is_dark_mode,
        };

        let page_class = if is_dark_mode { "page dark" } else { "page" };

        format!(
            r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
{generator}
<meta name="author" content="{author}">
<title>{title} | {site}</title>
{katex}
{style}
</head>
<body>
<div class="{page_class}">
{header}
{body}
</div>
</body>
</html>
"#,
            lang = html_escape(&self.config.language),
            generator = meta_generator(),
            author = html_escape(&self.config.author),
            title = html_escape(&post.title),
            site = html_escape(&self.config.title),
            katex = css(&self.config, &self.config.katex_css),
            style = css(&self.config, "style.css"),
            page_class = page_class,
            header = header_section(&ctx),
            body = body_section(&ctx, post),
        )
    }
}
