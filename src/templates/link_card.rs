//! Link preview card shown under a post title

use super::icons::github_logo;
use super::RenderContext;
use crate::helpers::{external_link, hostname, html_escape};
use crate::theme::IconTint;

/// Card label: the supplied title, else the link's hostname
///
/// An empty title counts as absent. A link that does not parse as a URL is
/// used verbatim.
pub fn card_label(link: &str, title: Option<&str>) -> String {
    if let Some(title) = title.filter(|t| !t.is_empty()) {
        return title.to_string();
    }

    hostname(link).unwrap_or_else(|| {
        tracing::warn!("Link card target {:?} is not an absolute URL", link);
        link.to_string()
    })
}

/// Render the link card
pub fn link_card(ctx: &RenderContext<'_>, link: &str, title: Option<&str>) -> String {
    let tint = IconTint::for_scheme(ctx.is_dark_mode);
    let inner = format!(
        r#"<div class="link-card-row"><div class="link-card-icon">{}</div><div class="link-card-title">{}</div></div>"#,
        github_logo(tint.color),
        html_escape(&card_label(link, title))
    );

    external_link(link, &inner, "noopener noreferrer", Some("link-card"))
}
