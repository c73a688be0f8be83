//! Content loading and typesetting errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a post file
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid YAML in {path:?}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Unsupported post format: {0:?}")]
    UnsupportedFormat(PathBuf),
}

/// Errors raised by the math typesetter
#[derive(Error, Debug)]
pub enum MathError {
    #[error("failed to build KaTeX options: {0}")]
    Options(String),

    #[error("KaTeX rendering failed: {0}")]
    Render(#[from] katex::Error),
}
