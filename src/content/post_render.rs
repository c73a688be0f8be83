//! Post-render pass over a parsed markdown tree
//!
//! Runs once, after the event tree for a block has been built and before it
//! is serialized. Each render builds a fresh tree, so the pass never sees a
//! stale one; a caller that keeps serialized HTML around and changes the
//! source must render again to re-run it.

use pulldown_cmark::{Event, Tag, TagEnd};
use std::collections::HashSet;

/// Inline style applied to math that stands alone in its paragraph
pub const CENTERED_MATH_STYLE: &str = "display:flex;justify-content:center;align-items:center";

/// Indices of math events that are the entire content of their paragraph
///
/// A paragraph qualifies when it holds exactly one math expression and no
/// other visible content. Whitespace-only text, image alt text and inline
/// markup wrapping the expression do not count as content.
pub fn standalone_math(events: &[Event<'_>]) -> HashSet<usize> {
    let mut found = HashSet::new();
    let mut paragraph: Option<ParagraphScan> = None;

    for (index, event) in events.iter().enumerate() {
        match event {
            Event::Start(Tag::Paragraph) => paragraph = Some(ParagraphScan::default()),
            Event::End(TagEnd::Paragraph) => {
                if let Some(scan) = paragraph.take() {
                    if let (Some(math), false) = (scan.single_math(), scan.has_other_content) {
                        found.insert(math);
                    }
                }
            }
            _ => {
                if let Some(scan) = paragraph.as_mut() {
                    scan.observe(index, event);
                }
            }
        }
    }

    found
}

#[derive(Default)]
struct ParagraphScan {
    math: Vec<usize>,
    has_other_content: bool,
    image_depth: usize,
}

impl ParagraphScan {
    fn observe(&mut self, index: usize, event: &Event<'_>) {
        match event {
            Event::Start(Tag::Image { .. }) => self.image_depth += 1,
            Event::End(TagEnd::Image) => self.image_depth = self.image_depth.saturating_sub(1),
            // Alt text is not part of the rendered text.
            Event::Text(_) if self.image_depth > 0 => {}
            Event::InlineMath(_) | Event::DisplayMath(_) => self.math.push(index),
            Event::Text(text) | Event::Html(text) | Event::InlineHtml(text) => {
                if !text.trim().is_empty() {
                    self.has_other_content = true;
                }
            }
            Event::Code(_) | Event::FootnoteReference(_) | Event::TaskListMarker(_) => {
                self.has_other_content = true;
            }
            Event::Start(_)
            | Event::End(_)
            | Event::SoftBreak
            | Event::HardBreak
            | Event::Rule => {}
        }
    }

    fn single_math(&self) -> Option<usize> {
        match self.math.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulldown_cmark::{Options, Parser};

    fn scan(markdown: &str) -> (Vec<Event<'_>>, HashSet<usize>) {
        let events: Vec<Event> = Parser::new_ext(markdown, Options::ENABLE_MATH).collect();
        let found = standalone_math(&events);
        (events, found)
    }

    #[test]
    fn test_display_math_alone() {
        let (events, found) = scan("$$x^2$$");
        assert_eq!(found.len(), 1);
        let index = *found.iter().next().unwrap();
        assert!(matches!(events[index], Event::DisplayMath(_)));
    }

    #[test]
    fn test_inline_math_alone() {
        let (_, found) = scan("$y$");
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_prose_and_math_not_centered() {
        let (_, found) = scan("where $x$ is the input");
        assert!(found.is_empty());
    }

    #[test]
    fn test_two_expressions_not_centered() {
        let (_, found) = scan("$a$ $b$");
        assert!(found.is_empty());
    }

    #[test]
    fn test_per_paragraph() {
        let (_, found) = scan("$$a$$\n\nsome $b$ text\n\n$$c$$");
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_image_alt_text_is_not_content() {
        let (events, found) = scan("![fig](a.png) $$x$$");
        assert_eq!(found.len(), 1);
        let index = *found.iter().next().unwrap();
        assert!(matches!(events[index], Event::DisplayMath(_)));
    }

    #[test]
    fn test_math_outside_paragraph_ignored() {
        let (_, found) = scan("- $x$");
        assert!(found.is_empty());
    }
}
