use std::sync::OnceLock;

use regex::Regex;

/// ATX heading block type with its owned pattern.
///
/// A heading is a run of 1–6 `#` characters followed by at least one
/// whitespace character; `#NoSpace` is not a heading and falls through to
/// paragraph handling.
pub struct Heading;

impl Heading {
    /// Whole-line pattern; group 1 is the hash run, group 2 the text.
    pub const PATTERN: &'static str = r"^(#{1,6})\s+(.*)$";

    fn regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(Heading::PATTERN).expect("invalid heading pattern"))
    }

    /// Parses a trimmed line as a heading, returning `(level, text)`.
    pub fn parse(line: &str) -> Option<(u8, String)> {
        let caps = Self::regex().captures(line)?;
        let level = caps[1].len() as u8;
        Some((level, caps[2].to_string()))
    }
}
