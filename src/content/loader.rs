//! Content loader - loads posts from the source directory

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{BlogPost, ContentError};
use crate::Blog;

/// A post together with where it came from
#[derive(Debug, Clone)]
pub struct LoadedPost {
    /// URL-friendly name, taken from the file stem
    pub slug: String,
    /// Full source file path
    pub source: PathBuf,
    /// The post itself
    pub post: BlogPost,
}

/// Loads posts from the source directory
pub struct ContentLoader<'a> {
    blog: &'a Blog,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(blog: &'a Blog) -> Self {
        Self { blog }
    }

    /// Load every post file under the source directory
    ///
    /// Files that fail to parse are skipped with a warning. Posts are
    /// returned in slug order so output is stable across runs.
    pub fn load_posts(&self) -> Result<Vec<LoadedPost>> {
        if !self.blog.source_dir.exists() {
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(&self.blog.source_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && is_post_file(path) {
                match load_post_file(path) {
                    Ok(post) => posts.push(post),
                    Err(e) => {
                        tracing::warn!("Failed to load post {:?}: {}", path, e);
                    }
                }
            }
        }

        posts.sort_by(|a, b| a.slug.cmp(&b.slug));

        Ok(posts)
    }

    /// Load the post with the given slug
    ///
    /// Slugs that would leave the source directory are treated as missing.
    pub fn load_post(&self, slug: &str) -> Result<Option<LoadedPost>> {
        if !is_plain_slug(slug) {
            tracing::debug!("Rejecting post slug {:?}", slug);
            return Ok(None);
        }

        for ext in POST_EXTENSIONS {
            let path = self.blog.source_dir.join(format!("{}.{}", slug, ext));
            if path.is_file() {
                return Ok(Some(load_post_file(&path)?));
            }
        }
        Ok(None)
    }
}

const POST_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

/// A slug must name a single file inside the source directory
fn is_plain_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.contains(['/', '\\'])
        && !slug.contains("..")
        && Path::new(slug).file_name() == Some(std::ffi::OsStr::new(slug))
}

/// Load a single post from a JSON or YAML file
pub fn load_post_file(path: &Path) -> Result<LoadedPost, ContentError> {
    let content = fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let post: BlogPost = match extension(path) {
        Some("json") => serde_json::from_str(&content).map_err(|source| ContentError::Json {
            path: path.to_path_buf(),
            source,
        })?,
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str(&content).map_err(|source| ContentError::Yaml {
                path: path.to_path_buf(),
                source,
            })?
        }
        _ => return Err(ContentError::UnsupportedFormat(path.to_path_buf())),
    };

    let slug = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("untitled")
        .to_string();

    tracing::debug!("Loaded post {} ({} blocks)", slug, post.content.len());

    Ok(LoadedPost {
        slug,
        source: path.to_path_buf(),
        post,
    })
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|e| e.to_str())
}

/// Check if a file is a post file
fn is_post_file(path: &Path) -> bool {
    extension(path)
        .map(|e| POST_EXTENSIONS.contains(&e))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn blog_in(dir: &Path) -> Blog {
        Blog::new(dir).unwrap()
    }

    #[test]
    fn test_load_json_and_yaml() {
        let dir = TempDir::new().unwrap();
        let posts_dir = dir.path().join("posts");
        fs::create_dir_all(&posts_dir).unwrap();
        fs::write(
            posts_dir.join("b-second.json"),
            r#"{ "title": "Second", "content": [{ "text": "hi" }] }"#,
        )
        .unwrap();
        fs::write(
            posts_dir.join("a-first.yaml"),
            "title: First\nlinkTitle: Label\nlink: https://example.com\n",
        )
        .unwrap();
        fs::write(posts_dir.join("notes.txt"), "ignored").unwrap();

        let blog = blog_in(dir.path());
        let posts = ContentLoader::new(&blog).load_posts().unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].slug, "a-first");
        assert_eq!(posts[0].post.link_title.as_deref(), Some("Label"));
        assert_eq!(posts[1].post.title, "Second");
        assert_eq!(posts[1].post.content.len(), 1);
    }

    #[test]
    fn test_invalid_post_is_skipped() {
        let dir = TempDir::new().unwrap();
        let posts_dir = dir.path().join("posts");
        fs::create_dir_all(&posts_dir).unwrap();
        fs::write(posts_dir.join("broken.json"), "{ not json").unwrap();
        fs::write(posts_dir.join("ok.json"), r#"{ "title": "ok" }"#).unwrap();

        let blog = blog_in(dir.path());
        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "ok");
    }

    #[test]
    fn test_load_post_by_slug() {
        let dir = TempDir::new().unwrap();
        let posts_dir = dir.path().join("posts");
        fs::create_dir_all(&posts_dir).unwrap();
        fs::write(posts_dir.join("hello.yml"), "title: Hello\n").unwrap();

        let blog = blog_in(dir.path());
        let loader = ContentLoader::new(&blog);
        assert_eq!(loader.load_post("hello").unwrap().unwrap().post.title, "Hello");
        assert!(loader.load_post("missing").unwrap().is_none());
    }

    #[test]
    fn test_slug_outside_source_dir_is_missing() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("posts")).unwrap();
        fs::write(dir.path().join("secret.json"), r#"{ "title": "Secret" }"#).unwrap();

        let blog = blog_in(dir.path());
        let loader = ContentLoader::new(&blog);
        assert!(loader.load_post("../secret").unwrap().is_none());
        assert!(loader.load_post("..\\secret").unwrap().is_none());
        assert!(loader.load_post("..").unwrap().is_none());
        assert!(loader.load_post("").unwrap().is_none());
    }

    #[test]
    fn test_plain_slugs() {
        assert!(is_plain_slug("hello-world"));
        assert!(is_plain_slug("v1.2-notes"));
        assert!(!is_plain_slug("a/b"));
        assert!(!is_plain_slug("/etc/passwd"));
        assert!(!is_plain_slug("."));
    }

    #[test]
    fn test_missing_source_dir() {
        let dir = TempDir::new().unwrap();
        let blog = blog_in(dir.path());
        assert!(ContentLoader::new(&blog).load_posts().unwrap().is_empty());
    }

    #[test]
    fn test_unsupported_format() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("post.toml");
        fs::write(&path, "title = 'x'").unwrap();
        let err = load_post_file(&path).unwrap_err();
        assert!(matches!(err, ContentError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_post_file(Path::new("/nonexistent/post.json")).unwrap_err();
        assert!(matches!(err, ContentError::Io { .. }));
    }
}
