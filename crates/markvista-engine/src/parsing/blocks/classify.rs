use super::kinds::{Heading, ImageRef, TableRow};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently,
/// without reference to surrounding context. The builder layers run state
/// (table collection) on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass {
    /// What the line is, by first-match-wins priority.
    pub kind: LineKind,
    /// The trimmed line text the classification was made from.
    pub text: String,
}

/// The kind of a single trimmed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Whitespace-only; emits nothing.
    Blank,
    /// An ATX heading with its extracted level and text.
    Heading { level: u8, text: String },
    /// A line containing an image reference; surrounding text is discarded.
    Image { alt_text: String, url: String },
    /// A pipe-delimited table row; opens or continues a table run.
    TableRow,
    /// Anything else; becomes a paragraph.
    Text,
}

/// Classifies individual lines for the block parsing phase.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies a raw line into a [`LineClass`].
    ///
    /// The line is trimmed first; classification priority is heading, image
    /// reference, table row, text. First match wins.
    pub fn classify(&self, line: &str) -> LineClass {
        let trimmed = line.trim();

        let kind = if trimmed.is_empty() {
            LineKind::Blank
        } else if let Some((level, text)) = Heading::parse(trimmed) {
            LineKind::Heading { level, text }
        } else if let Some((alt_text, url)) = ImageRef::find(trimmed) {
            LineKind::Image { alt_text, url }
        } else if TableRow::is_row(trimmed) {
            LineKind::TableRow
        } else {
            LineKind::Text
        };

        LineClass {
            kind,
            text: trimmed.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(line: &str) -> LineKind {
        LineClassifier.classify(line).kind
    }

    #[test]
    fn blank_lines() {
        assert_eq!(classify(""), LineKind::Blank);
        assert_eq!(classify("   \t"), LineKind::Blank);
    }

    #[test]
    fn heading_beats_text() {
        assert_eq!(
            classify("## Title"),
            LineKind::Heading {
                level: 2,
                text: "Title".to_string(),
            }
        );
    }

    #[test]
    fn no_space_hash_is_text() {
        assert_eq!(classify("#NoSpaceHeading"), LineKind::Text);
    }

    #[test]
    fn image_detection_is_contains_not_anchored() {
        assert_eq!(
            classify("before ![a](u) after"),
            LineKind::Image {
                alt_text: "a".to_string(),
                url: "u".to_string(),
            }
        );
    }

    #[test]
    fn image_beats_table_row() {
        // A row-shaped line containing an image reference opens as an image,
        // not a table.
        assert_eq!(
            classify("|![a](u)|"),
            LineKind::Image {
                alt_text: "a".to_string(),
                url: "u".to_string(),
            }
        );
    }

    #[test]
    fn table_row() {
        assert_eq!(classify("|a|b|"), LineKind::TableRow);
    }

    #[test]
    fn classification_trims_first() {
        assert_eq!(classify("   |a|   "), LineKind::TableRow);
        assert_eq!(
            LineClassifier.classify("  plain  ").text,
            "plain".to_string()
        );
    }

    #[test]
    fn fallthrough_is_text() {
        assert_eq!(classify("just words"), LineKind::Text);
    }
}
