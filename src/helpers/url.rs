//! URL helper functions

use crate::config::SiteConfig;

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/css/style.css") // -> "/blog/css/style.css"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Hostname of an absolute URL, if it has one
///
/// # Examples
/// ```ignore
/// hostname("https://example.com/post") // -> Some("example.com")
/// ```
pub fn hostname(link: &str) -> Option<String> {
    let parsed = ::url::Url::parse(link).ok()?;
    parsed.host_str().map(str::to_string)
}
