//! Content module - post model, loading, and markdown/math processing

mod error;
pub mod loader;
mod markdown;
pub mod math;
mod post;
pub mod post_render;

pub use error::{ContentError, MathError};
pub use loader::LoadedPost;
pub use markdown::MarkdownRenderer;
pub use post::{BlockPart, BlogPost, ContentBlock};
