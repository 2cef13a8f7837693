use std::sync::OnceLock;

use regex::Regex;

/// Strikethrough inline style, delimited by doubled tildes.
pub struct Strikethrough;

impl Strikethrough {
    /// Non-greedy pair pattern; the match includes the delimiters.
    pub const PATTERN: &'static str = r"~~(.*?)~~";

    pub fn regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(Strikethrough::PATTERN).expect("invalid strikethrough pattern"))
    }
}
