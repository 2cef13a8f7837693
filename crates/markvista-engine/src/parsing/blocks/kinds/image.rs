use std::sync::OnceLock;

use regex::Regex;

/// Image reference block type with its owned pattern.
///
/// Detection uses contains semantics, not whole-line anchoring: a line with
/// text around an `![alt](url)` reference still becomes an image block, and
/// the surrounding text is discarded. That is the viewer's historical
/// behavior and is kept as-is.
pub struct ImageRef;

impl ImageRef {
    /// Unanchored pattern; group 1 is the alt text, group 2 the url.
    pub const PATTERN: &'static str = r"!\[(.*?)\]\((.*?)\)";

    fn regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(ImageRef::PATTERN).expect("invalid image pattern"))
    }

    /// Finds the first image reference in a line, returning `(alt, url)`.
    pub fn find(line: &str) -> Option<(String, String)> {
        let caps = Self::regex().captures(line)?;
        Some((caps[1].to_string(), caps[2].to_string()))
    }
}
