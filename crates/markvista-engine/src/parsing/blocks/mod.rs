//! # Block Parsing
//!
//! Line-oriented block parsing in two phases:
//!
//! 1. **Line Classification** (`classify`): each line is trimmed and
//!    classified into a `LineClass` with first-match-wins priority
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` consumes classes
//!    in order, collects table runs, and emits `Block`s
//!
//! ## Modules
//!
//! - **`types`**: the `Block` enum
//! - **`kinds`**: block-specific types with owned patterns (Heading,
//!   ImageRef, TableRow, Paragraph)
//! - **`classify`**: `LineClassifier` produces a `LineClass` per line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Classification never rejects a line: anything unrecognized is text
//! - A table run is maximal: consecutive row-pattern lines fold into one
//!   `Block::Table`, and only the row pattern decides continuation
//! - Blocks are emitted in source order

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineClassifier, LineKind};
pub use types::Block;
