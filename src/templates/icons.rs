//! Inline SVG icons

/// Code-hosting (GitHub) mark
pub fn github_logo(color: &str) -> String {
    format!(
        r#"<svg class="icon" width="24" height="24" viewBox="0 0 16 16" aria-hidden="true"><path fill="{}" d="M8 0C3.58 0 0 3.58 0 8c0 3.54 2.29 6.53 5.47 7.59.4.07.55-.17.55-.38 0-.19-.01-.82-.01-1.49-2.01.37-2.53-.49-2.69-.94-.09-.23-.48-.94-.82-1.13-.28-.15-.68-.52-.01-.53.63-.01 1.08.58 1.23.82.72 1.21 1.87.87 2.33.66.07-.52.28-.87.51-1.07-1.78-.2-3.64-.89-3.64-3.95 0-.87.31-1.59.82-2.15-.08-.2-.36-1.02.08-2.12 0 0 .67-.21 2.2.82.64-.18 1.32-.27 2-.27.68 0 1.36.09 2 .27 1.53-1.04 2.2-.82 2.2-.82.44 1.1.16 1.92.08 2.12.51.56.82 1.27.82 2.15 0 3.07-1.87 3.75-3.65 3.95.29.25.54.73.54 1.48 0 1.07-.01 1.93-.01 2.2 0 .21.15.46.55.38A8.013 8.013 0 0016 8c0-4.42-3.58-8-8-8z"/></svg>"#,
        color
    )
}

/// Professional network (LinkedIn) mark
pub fn linkedin_logo(color: &str, fill_color: &str) -> String {
    format!(
        r#"<svg class="icon" width="24" height="24" viewBox="0 0 24 24" aria-hidden="true"><rect x="1" y="1" width="22" height="22" rx="3" fill="{color}"/><rect x="5" y="9.5" width="3" height="9" fill="{fill}"/><circle cx="6.5" cy="6.5" r="1.75" fill="{fill}"/><path fill="{fill}" d="M10.5 9.5h2.9v1.3c.5-.9 1.6-1.5 2.9-1.5 2.3 0 3.2 1.4 3.2 3.9v5.3h-3v-4.7c0-1.2-.3-2-1.4-2-1.2 0-1.6.9-1.6 2v4.7h-3z"/></svg>"#,
        color = color,
        fill = fill_color
    )
}
