//! Create a new post

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::content::{BlogPost, ContentBlock};
use crate::Blog;

/// Create a new post file named after the title (or `path`, if given)
pub fn create_post(blog: &Blog, title: &str, path: Option<&str>) -> Result<PathBuf> {
    fs::create_dir_all(&blog.source_dir)?;

    let name = match path {
        Some(p) => p.to_string(),
        None => slug::slugify(title),
    };
    let file_path = blog.source_dir.join(format!("{}.json", name));

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let mut post = BlogPost::new(title);
    post.content.push(ContentBlock {
        text: Some(String::new()),
        ..Default::default()
    });

    fs::write(&file_path, serde_json::to_string_pretty(&post)?)?;

    println!("Created: {:?}", file_path);

    Ok(file_path)
}
