//! Blog post model

use serde::{Deserialize, Serialize};

/// A blog post, as loaded from a post file
///
/// Posts are read-only render input: nothing in the renderer mutates one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Post title
    pub title: String,

    /// External link previewed in a card under the title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Label for the link card (defaults to the link's hostname)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_title: Option<String>,

    /// Body blocks, rendered in order
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

impl BlogPost {
    /// Create a post with a title and no content
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: None,
            link_title: None,
            content: Vec::new(),
        }
    }
}

/// One unit of a post body
///
/// Every field is independently optional. A block carrying several fields
/// renders each of them, in the order of [`ContentBlock::parts`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBlock {
    /// Markdown source; may embed math delimiters and raw HTML
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// LaTeX typeset outside the markdown pipeline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latex: Option<String>,

    /// Image URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Preformatted code, never highlighted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Plain-text list items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<Vec<String>>,

    /// Inline hyperlink target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Visible label for `link`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_text: Option<String>,
}

/// A single renderable piece of a [`ContentBlock`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockPart<'a> {
    Text(&'a str),
    Latex(&'a str),
    Image(&'a str),
    Code(&'a str),
    List(&'a [String]),
    Link {
        href: &'a str,
        text: Option<&'a str>,
    },
}

impl ContentBlock {
    /// The block's pieces in fixed priority order: text, latex, image,
    /// code, list, link
    ///
    /// Empty `text` is skipped; every other present field yields a part.
    pub fn parts(&self) -> Vec<BlockPart<'_>> {
        let mut parts = Vec::new();

        if let Some(text) = self.text.as_deref().filter(|t| !t.is_empty()) {
            parts.push(BlockPart::Text(text));
        }
        if let Some(latex) = self.latex.as_deref() {
            parts.push(BlockPart::Latex(latex));
        }
        if let Some(image) = self.image.as_deref() {
            parts.push(BlockPart::Image(image));
        }
        if let Some(code) = self.code.as_deref() {
            parts.push(BlockPart::Code(code));
        }
        if let Some(list) = self.list.as_deref() {
            parts.push(BlockPart::List(list));
        }
        if let Some(href) = self.link.as_deref() {
            parts.push(BlockPart::Link {
                href,
                text: self.link_text.as_deref(),
            });
        }

        parts
    }
}
