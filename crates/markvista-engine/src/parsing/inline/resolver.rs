use regex::Regex;

use super::{
    kinds::{Bold, Italic, Strikethrough},
    types::{Span, SpanStyle},
};

/// Resolves inline style spans over a single line of text.
///
/// Three independent passes run in fixed order (bold, italic,
/// strikethrough), each appending one span per non-overlapping left-to-right
/// match of its own pattern. Output order is therefore pass order, positional
/// within a pass. The text itself is never modified; spans are annotations
/// over it.
///
/// Total function: any input yields a (possibly empty) span list.
pub fn resolve(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    collect(Bold::regex(), SpanStyle::Bold, text, &mut spans);
    collect(Italic::regex(), SpanStyle::Italic, text, &mut spans);
    collect(Strikethrough::regex(), SpanStyle::Strikethrough, text, &mut spans);
    spans
}

fn collect(re: &Regex, style: SpanStyle, text: &str, out: &mut Vec<Span>) {
    for m in re.find_iter(text) {
        out.push(Span {
            start: m.start(),
            end: m.end(),
            style,
        });
    }
}
