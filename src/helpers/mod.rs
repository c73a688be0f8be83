//! Helper functions for templates
//!
//! Escaping and URL building shared by the page components.

mod html;
mod url;

pub use self::html::*;
pub use self::url::*;
