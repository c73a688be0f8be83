//! Initialize a new blog

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::content::{BlogPost, ContentBlock};

const CONFIG_TEMPLATE: &str = r#"# blog-rs configuration

# Site
title: Blog
author: John Doe
language: en

# URL
root: /

# Directory
source_dir: posts
public_dir: public
post_dir: posts

# Appearance
dark_mode: false
highlight:
  light_theme: base16-ocean.dark
  dark_theme: base16-ocean.dark
social:
  linkedin: https://www.linkedin.com/
  github: https://github.com/
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let posts_dir = target_dir.join("posts");
    fs::create_dir_all(&posts_dir)?;

    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        anyhow::bail!("Already initialized: {:?}", config_path);
    }
    fs::write(&config_path, CONFIG_TEMPLATE)?;

    let sample = serde_json::to_string_pretty(&sample_post())?;
    fs::write(posts_dir.join("hello-world.json"), sample)?;

    tracing::debug!("Wrote config and sample post to {:?}", target_dir);

    Ok(())
}

fn sample_post() -> BlogPost {
    let mut post = BlogPost::new("Hello World");
    post.link = Some("https://github.com/".to_string());
    post.content = vec![
        ContentBlock {
            text: Some(
                "Welcome! Body text is **markdown**, with inline math like $e^{i\\pi} + 1 = 0$.\n\n$$\\int_0^1 x^2\\,dx = \\frac{1}{3}$$\n\n```rust\nfn main() {\n    println!(\"hello\");\n}\n```\n"
                    .to_string(),
            ),
            ..Default::default()
        },
        ContentBlock {
            list: Some(vec![
                "Lists are plain text".to_string(),
                "Each entry is one item".to_string(),
            ]),
            ..Default::default()
        },
        ContentBlock {
            link: Some("https://katex.org/".to_string()),
            link_text: Some("Math is typeset with KaTeX".to_string()),
            ..Default::default()
        },
    ];
    post
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::loader::load_post_file;
    use crate::Blog;
    use tempfile::TempDir;

    #[test]
    fn test_init_site() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();

        let blog = Blog::new(dir.path()).unwrap();
        assert_eq!(blog.config.title, "Blog");

        let loaded = load_post_file(&dir.path().join("posts/hello-world.json")).unwrap();
        assert_eq!(loaded.post, sample_post());
    }

    #[test]
    fn test_init_twice_fails() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();
        assert!(init_site(dir.path()).is_err());
    }
}
