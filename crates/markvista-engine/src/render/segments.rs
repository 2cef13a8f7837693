use std::ops::Range;

use crate::parsing::inline::{Span, SpanStyle};

/// The set of styles covering one segment of paragraph text.
///
/// Spans overlap freely, so a single character range can carry several
/// styles at once; renderers apply all of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SegmentStyles {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
}

impl SegmentStyles {
    /// Returns true if no style covers the segment.
    #[must_use]
    pub fn is_plain(self) -> bool {
        !self.bold && !self.italic && !self.strikethrough
    }
}

/// Cuts paragraph text at span boundaries and reports the styles covering
/// each resulting segment, in order.
///
/// Segments tile the whole text: concatenating the ranges reproduces
/// `0..text.len()`. Out-of-range span offsets are clamped rather than
/// trusted.
pub fn styled_segments(text: &str, spans: &[Span]) -> Vec<(Range<usize>, SegmentStyles)> {
    let mut cuts: Vec<usize> = Vec::with_capacity(spans.len() * 2 + 2);
    cuts.push(0);
    cuts.push(text.len());
    for span in spans {
        cuts.push(span.start.min(text.len()));
        cuts.push(span.end.min(text.len()));
    }
    cuts.sort_unstable();
    cuts.dedup();

    cuts.windows(2)
        .filter(|w| w[0] < w[1])
        .map(|w| {
            let styles = SegmentStyles {
                bold: covered(spans, SpanStyle::Bold, w[0], w[1]),
                italic: covered(spans, SpanStyle::Italic, w[0], w[1]),
                strikethrough: covered(spans, SpanStyle::Strikethrough, w[0], w[1]),
            };
            (w[0]..w[1], styles)
        })
        .collect()
}

fn covered(spans: &[Span], style: SpanStyle, start: usize, end: usize) -> bool {
    spans
        .iter()
        .any(|s| s.style == style && s.start <= start && end <= s.end)
}
