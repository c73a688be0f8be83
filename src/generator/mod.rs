//! Generator module - writes rendered post pages to the public directory

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::content::LoadedPost;
use crate::templates::{TemplateRenderer, STYLESHEET};
use crate::Blog;

/// Static page generator
pub struct Generator {
    blog: Blog,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(blog: &Blog) -> Self {
        Self {
            blog: blog.clone(),
            renderer: TemplateRenderer::new(&blog.config),
        }
    }

    /// Generate the stylesheet and every post page
    pub fn generate(&self, posts: &[LoadedPost]) -> Result<()> {
        fs::create_dir_all(&self.blog.public_dir)?;

        self.write_stylesheet()?;

        let is_dark_mode = self.blog.dark_mode.is_dark_mode();
        for post in posts {
            self.generate_post(post, is_dark_mode)?;
        }

        Ok(())
    }

    /// Output path for a post: `<public>/<post_dir>/<slug>/index.html`
    pub fn post_output_path(&self, slug: &str) -> PathBuf {
        self.blog
            .public_dir
            .join(&self.blog.config.post_dir)
            .join(slug)
            .join("index.html")
    }

    /// Render one post page and write it out
    fn generate_post(&self, post: &LoadedPost, is_dark_mode: bool) -> Result<()> {
        let html = self.renderer.render_post(&post.post, is_dark_mode);
        let output_path = self.post_output_path(&post.slug);

        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&output_path, html)?;
        tracing::debug!("Generated: {:?}", output_path);

        Ok(())
    }

    fn write_stylesheet(&self) -> Result<()> {
        let css_dir = self.blog.public_dir.join("css");
        fs::create_dir_all(&css_dir)?;
        fs::write(css_dir.join("style.css"), STYLESHEET)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::BlogPost;
    use tempfile::TempDir;

    fn loaded(slug: &str, title: &str) -> LoadedPost {
        LoadedPost {
            slug: slug.to_string(),
            source: PathBuf::from(format!("posts/{}.json", slug)),
            post: BlogPost::new(title),
        }
    }

    #[test]
    fn test_generate_writes_pages_and_stylesheet() {
        let dir = TempDir::new().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        let generator = Generator::new(&blog);

        generator
            .generate(&[loaded("first", "First"), loaded("second", "Second")])
            .unwrap();

        let first = fs::read_to_string(dir.path().join("public/posts/first/index.html")).unwrap();
        assert!(first.contains("<h1>First</h1>"));
        assert!(dir.path().join("public/posts/second/index.html").exists());
        assert_eq!(
            fs::read_to_string(dir.path().join("public/css/style.css")).unwrap(),
            STYLESHEET
        );
    }

    #[test]
    fn test_generate_uses_dark_mode_preference() {
        let dir = TempDir::new().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        blog.dark_mode.set_is_dark_mode(true);

        Generator::new(&blog).generate(&[loaded("p", "P")]).unwrap();

        let html = fs::read_to_string(dir.path().join("public/posts/p/index.html")).unwrap();
        assert!(html.contains(r#"<div class="page dark">"#));
    }
}
