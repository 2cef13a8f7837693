use std::sync::OnceLock;

use regex::Regex;

/// Italic inline style, delimited by single asterisks.
///
/// This pass runs over the raw text independently of the bold pass, so it
/// also produces two-character matches over the `**` delimiter pairs of bold
/// runs. That is the engine-true behavior of the pattern and is kept; there
/// is no escaping mechanism for a literal `*`.
pub struct Italic;

impl Italic {
    /// Non-greedy pair pattern; the match includes the delimiters.
    pub const PATTERN: &'static str = r"\*(.*?)\*";

    pub fn regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(Italic::PATTERN).expect("invalid italic pattern"))
    }
}
