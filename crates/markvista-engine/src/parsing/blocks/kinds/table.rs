use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::blocks::Block;

/// Table row type with its owned pattern and assembly logic.
///
/// A row starts and ends with `|` with at least one character between. A run
/// of consecutive row lines folds into one table: row 0 is the header, row 1
/// is the divider (content discarded, alignment markers included), rows 2..
/// are data.
pub struct TableRow;

impl TableRow {
    /// Whole-line pattern for a pipe-delimited row.
    pub const PATTERN: &'static str = r"^\|(.+)\|$";

    fn regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(TableRow::PATTERN).expect("invalid table row pattern"))
    }

    /// Whether a trimmed line is a table row.
    pub fn is_row(line: &str) -> bool {
        Self::regex().is_match(line)
    }

    /// Splits a row line into trimmed cells.
    ///
    /// The fragments before the leading pipe and after the trailing pipe are
    /// dropped; everything between the pipes survives, including empty cells.
    pub fn split_cells(line: &str) -> Vec<String> {
        let fragments: Vec<&str> = line.split('|').collect();
        if fragments.len() < 2 {
            return Vec::new();
        }
        fragments[1..fragments.len() - 1]
            .iter()
            .map(|cell| cell.trim().to_string())
            .collect()
    }
}

/// Assembles a collected run of rows into a table block.
///
/// Handles short runs without indexing errors: one row is a header-only
/// table, two rows are header + discarded divider, both with zero data rows.
pub fn assemble(mut rows: Vec<Vec<String>>) -> Block {
    let header = if rows.is_empty() {
        Vec::new()
    } else {
        rows.remove(0)
    };
    let rows = if rows.len() > 1 {
        rows.split_off(1)
    } else {
        Vec::new()
    };
    Block::Table { header, rows }
}
