use crate::parsing::blocks::Block;
use crate::parsing::inline;

/// Paragraph block type.
///
/// Paragraphs have no pattern - they are the default block when no other
/// classification matches. Inline span resolution runs over the exact
/// trimmed line text; the spans index into that string.
pub struct Paragraph;

impl Paragraph {
    /// Builds a paragraph block from a trimmed line.
    pub fn build(text: &str) -> Block {
        Block::Paragraph {
            text: text.to_string(),
            spans: inline::resolve(text),
        }
    }
}
