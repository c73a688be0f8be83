//! Configuration module

mod site;

pub use site::HighlightConfig;
pub use site::SiteConfig;
pub use site::SocialConfig;
pub use site::KATEX_CSS_URL;
