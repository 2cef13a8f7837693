use serde::{Deserialize, Serialize};

/// The style a span applies to its range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpanStyle {
    Bold,
    Italic,
    Strikethrough,
}

/// An inline style annotation over a half-open byte range `[start, end)` of
/// a paragraph's text.
///
/// The range covers the full matched substring, delimiters included:
/// `**bold**`, not `bold`. Spans over the same text may overlap; each
/// individually satisfies `0 <= start < end <= text.len()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
    /// The style applied over the range.
    pub style: SpanStyle,
}

impl Span {
    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}
