//! Fixed page header: home link, social links, dark-mode toggle

use super::icons::{github_logo, linkedin_logo};
use super::RenderContext;
use crate::config::SiteConfig;
use crate::helpers::{external_link, html_escape, link_to, url_for};
use crate::theme::IconTint;

/// Path the dark-mode toggle posts to, relative to the site root
pub const DARK_MODE_PATH: &str = "/dark-mode";

/// Site URL of the dark-mode endpoint
pub fn dark_mode_url(config: &SiteConfig) -> String {
    url_for(config, DARK_MODE_PATH)
}

/// Render the header section
pub fn header_section(ctx: &RenderContext<'_>) -> String {
    let tint = IconTint::for_scheme(ctx.is_dark_mode);
    let social = &ctx.config.social;

    let linkedin = external_link(
        &social.linkedin,
        &linkedin_logo(tint.color, tint.fill_color),
        "noreferrer",
        Some("social"),
    );
    let github = external_link(
        &social.github,
        &github_logo(tint.color),
        "noreferrer",
        Some("social"),
    );

    format!(
        r#"<header class="site-header">
<div class="header-row">
<nav class="header-nav"><div class="home">{}</div></nav>
<div class="header-links">{}{}{}</div>
</div>
</header>"#,
        link_to(ctx.config, "/", "home"),
        linkedin,
        github,
        dark_toggle(ctx.config, ctx.is_dark_mode)
    )
}

/// Toggle that asks the server to flip the preference
fn dark_toggle(config: &SiteConfig, is_dark_mode: bool) -> String {
    let (next, label) = if is_dark_mode {
        ("false", "Switch to light mode")
    } else {
        ("true", "Switch to dark mode")
    };
    let state = if is_dark_mode { "on" } else { "off" };

    format!(
        r#"<form class="dark-toggle" method="post" action="{}"><input type="hidden" name="on" value="{}"><button type="submit" class="toggle toggle-{}" aria-label="{}" aria-pressed="{}"><span class="knob"></span></button></form>"#,
        dark_mode_url(config),
        next,
        state,
        html_escape(label),
        is_dark_mode
    )
}
