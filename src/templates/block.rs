//! Content block renderer
//!
//! Turns one [`ContentBlock`] into HTML. Each present field renders on its
//! own, in the order given by [`ContentBlock::parts`].

use super::RenderContext;
use crate::content::{math, BlockPart, ContentBlock};
use crate::helpers::{html_escape, image_tag};

/// Render a content block; an empty block renders as an empty string
pub fn render_block(ctx: &RenderContext<'_>, block: &ContentBlock) -> String {
    block
        .parts()
        .into_iter()
        .map(|part| render_part(ctx, part))
        .collect()
}

fn render_part(ctx: &RenderContext<'_>, part: BlockPart<'_>) -> String {
    match part {
        BlockPart::Text(text) => format!(
            r#"<div class="markdown">{}</div>"#,
            ctx.markdown.render(text, ctx.is_dark_mode)
        ),
        BlockPart::Latex(latex) => format!(
            r#"<div class="latex">{}</div>"#,
            math::render_latex_text(latex)
        ),
        BlockPart::Image(src) => image_tag(src, "blog post", Some("block-image")),
        BlockPart::Code(code) => format!(
            r#"<pre class="code-plain"><code>{}</code></pre>"#,
            html_escape(code)
        ),
        BlockPart::List(items) => render_list(items),
        BlockPart::Link { href, text } => {
            // An unlabeled link would be invisible, so show its target instead.
            let label = text.filter(|t| !t.is_empty()).unwrap_or(href);
            format!(
                r#"<a class="block-link" href="{}">{}</a>"#,
                html_escape(href),
                html_escape(label)
            )
        }
    }
}

/// List items are literal text; no markdown is applied to them
fn render_list(items: &[String]) -> String {
    let mut html = String::from(r#"<ul class="block-list">"#);
    for item in items {
        html.push_str("<li>");
        html.push_str(&html_escape(item));
        html.push_str("</li>");
    }
    html.push_str("</ul>");
    html
}
