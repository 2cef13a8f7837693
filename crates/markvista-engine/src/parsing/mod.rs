//! # Markdown Parsing
//!
//! Single-pass, line-oriented parsing in two phases:
//!
//! 1. **Line Classification** (`blocks::classify`): each line is trimmed and
//!    classified into a `LineClass` containing local facts only (blank,
//!    heading, image reference, table row, plain text)
//!
//! 2. **Block Construction** (`blocks::builder`): a `BlockBuilder` consumes
//!    classified lines in order, owns the table-run state, and emits `Block`s
//!
//! Inline styling (`inline`) is resolved over each paragraph line's text as
//! the paragraph block is built.
//!
//! ## Key Invariants
//!
//! - Parsing is total: any input produces a block sequence, never an error
//! - Every line is consumed exactly once (skipped as blank or folded into
//!   exactly one block)
//! - No cross-call state; re-parsing the same input yields equal output

pub mod blocks;
pub mod inline;
pub mod lines;

pub use blocks::Block;
pub use inline::{Span, SpanStyle};

use blocks::{BlockBuilder, LineClassifier};

/// Parses markdown text into an ordered sequence of [`Block`]s.
///
/// Lines are split on any line-ending style (`\r\n`, `\n`, `\r`), trimmed,
/// and classified with first-match-wins priority: heading, image reference,
/// table row, paragraph. Blank lines emit nothing.
pub fn parse(content: &str) -> Vec<Block> {
    let classifier = LineClassifier;
    let mut builder = BlockBuilder::new();

    for line in lines::split_lines(content) {
        builder.push(&classifier.classify(line));
    }

    builder.finish()
}
