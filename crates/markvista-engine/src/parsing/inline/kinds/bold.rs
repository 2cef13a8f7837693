use std::sync::OnceLock;

use regex::Regex;

/// Bold inline style, delimited by doubled asterisks.
pub struct Bold;

impl Bold {
    /// Non-greedy pair pattern; the match includes the delimiters.
    pub const PATTERN: &'static str = r"\*\*(.*?)\*\*";

    pub fn regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(Bold::PATTERN).expect("invalid bold pattern"))
    }
}
