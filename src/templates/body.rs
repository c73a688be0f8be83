//! Post composition: title, link card, and block sequence

use super::block::render_block;
use super::link_card::link_card;
use super::RenderContext;
use crate::content::BlogPost;

/// Render the title area
///
/// The title goes through the markdown pipeline as a level-one heading so it
/// shares heading typography with the body.
pub fn title_section(ctx: &RenderContext<'_>, post: &BlogPost) -> String {
    let heading = ctx
        .markdown
        .render(&format!("# {}", post.title), ctx.is_dark_mode);
    let card = post
        .link
        .as_deref()
        .map(|link| link_card(ctx, link, post.link_title.as_deref()))
        .unwrap_or_default();

    format!(
        r#"<div class="title"><div>{}</div>{}</div>"#,
        heading, card
    )
}

/// Render the body section: title followed by every block, in order
pub fn body_section(ctx: &RenderContext<'_>, post: &BlogPost) -> String {
    let blocks: String = post
        .content
        .iter()
        .map(|block| format!(r#"<div class="block">{}</div>"#, render_block(ctx, block)))
        .collect();

    format!(
        r#"<div class="body">
<section class="post">
<div class="post-inner">
{}
<div class="blocks">{}</div>
</div>
</section>
</div>"#,
        title_section(ctx, post),
        blocks
    )
}
