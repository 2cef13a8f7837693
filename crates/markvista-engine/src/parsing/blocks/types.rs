use serde::{Deserialize, Serialize};

use crate::parsing::inline::Span;

/// One structural unit of parsed output.
///
/// Blocks are immutable plain data: constructed once per parse and handed to
/// a renderer. Paragraph text is the trimmed source line; its spans index
/// into that exact string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    /// An ATX heading, `# text` through `###### text`.
    Heading {
        /// Number of leading `#` characters, 1 through 6.
        level: u8,
        /// Text after the hash run and required whitespace.
        text: String,
    },
    /// A line of plain text with inline style annotations.
    Paragraph {
        /// The trimmed line text.
        text: String,
        /// Inline style spans over `text`; may overlap.
        spans: Vec<Span>,
    },
    /// An `![alt](url)` image reference.
    Image {
        /// Alt text from the bracketed group.
        alt_text: String,
        /// URL from the parenthesized group; resolving it is the image
        /// loader's job, not the parser's.
        url: String,
    },
    /// A pipe-delimited table.
    ///
    /// Header and data rows are not validated against each other; cell
    /// counts may differ per row, and a table may have zero data rows.
    Table {
        /// Cells of the first row of the run.
        header: Vec<String>,
        /// Data rows, in source order. The divider row is never included.
        rows: Vec<Vec<String>>,
    },
}
