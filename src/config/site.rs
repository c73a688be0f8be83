//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Default stylesheet for KaTeX output
pub const KATEX_CSS_URL: &str = "https://cdn.jsdelivr.net/npm/katex@0.16.9/dist/katex.min.css";

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub author: String,
    pub language: String,

    // URL
    pub root: String,

    // Directory
    pub source_dir: String,
    pub public_dir: String,
    /// Sub-directory of the public dir that receives rendered posts
    pub post_dir: String,

    // Appearance
    /// Initial dark-mode preference
    pub dark_mode: bool,
    pub katex_css: String,
    #[serde(default)]
    pub highlight: HighlightConfig,
    #[serde(default)]
    pub social: SocialConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),
            author: "John Doe".to_string(),
            language: "en".to_string(),

            root: "/".to_string(),

            source_dir: "posts".to_string(),
            public_dir: "public".to_string(),
            post_dir: "posts".to_string(),

            dark_mode: false,
            katex_css: KATEX_CSS_URL.to_string(),
            highlight: HighlightConfig::default(),
            social: SocialConfig::default(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Syntax highlighting themes, by color scheme
///
/// Both schemes use the same theme unless configured otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub light_theme: String,
    pub dark_theme: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            light_theme: "base16-ocean.dark".to_string(),
            dark_theme: "base16-ocean.dark".to_string(),
        }
    }
}

/// Outbound profile links shown in the header
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialConfig {
    pub linkedin: String,
    pub github: String,
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            linkedin: "https://www.linkedin.com/".to_string(),
            github: "https://github.com/".to_string(),
        }
    }
}
