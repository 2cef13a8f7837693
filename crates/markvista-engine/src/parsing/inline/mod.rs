//! # Inline Span Resolution
//!
//! Regex-driven inline styling over a single line of paragraph text.
//!
//! ## Architecture
//!
//! Three independent passes run over the same raw text in fixed order: bold,
//! italic, strikethrough. Each pass appends one span per non-overlapping
//! match of its own non-greedy pattern; the span covers the full match,
//! delimiters included. The text is never mutated.
//!
//! ## Modules
//!
//! - **`types`**: `Span` and `SpanStyle`
//! - **`kinds`**: style-specific types with owned patterns (Bold, Italic,
//!   Strikethrough)
//! - **`resolver`**: `resolve()` entry point
//!
//! ## Overlap
//!
//! Passes do not see each other's matches, so output spans may overlap, and
//! the italic pattern legitimately matches the two-character `**` delimiter
//! pairs of bold runs. Renderers apply all spans independently to the same
//! base text; bold+strikethrough on one range is valid and expected.

pub mod kinds;
pub mod resolver;
pub mod types;

pub use resolver::resolve;
pub use types::{Span, SpanStyle};
