use super::{
    classify::{LineClass, LineKind},
    kinds::{Paragraph, TableRow, table},
    types::Block,
};

#[derive(Debug)]
enum LeafState {
    None,
    /// An open table run with the rows collected so far.
    Table { rows: Vec<Vec<String>> },
}

/// State machine that turns an ordered stream of [`LineClass`]es into blocks.
///
/// Most lines emit a block immediately; table rows accumulate into a run
/// until a non-row line (or end of input) closes it.
pub struct BlockBuilder {
    leaf: LeafState,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        // Run continuation checks only the row pattern: inside a run, a line
        // like `|![a](b)|` is a row, even though it would open as an image.
        if let LeafState::Table { rows } = &mut self.leaf {
            if TableRow::is_row(&c.text) {
                rows.push(TableRow::split_cells(&c.text));
                return;
            }
            self.flush_table();
        }

        match &c.kind {
            LineKind::Blank => {}
            LineKind::Heading { level, text } => {
                self.out.push(Block::Heading {
                    level: *level,
                    text: text.clone(),
                });
            }
            LineKind::Image { alt_text, url } => {
                self.out.push(Block::Image {
                    alt_text: alt_text.clone(),
                    url: url.clone(),
                });
            }
            LineKind::TableRow => {
                self.leaf = LeafState::Table {
                    rows: vec![TableRow::split_cells(&c.text)],
                };
            }
            LineKind::Text => {
                self.out.push(Paragraph::build(&c.text));
            }
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.flush_table();
        self.out
    }

    fn flush_table(&mut self) {
        if let LeafState::Table { rows } = std::mem::replace(&mut self.leaf, LeafState::None) {
            self.out.push(table::assemble(rows));
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
