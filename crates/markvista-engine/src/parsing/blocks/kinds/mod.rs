//! # Block Kinds
//!
//! Block-specific types that own their recognition patterns.
//!
//! ## Types
//!
//! - **`Heading`**: anchored `#{1,6}` + whitespace pattern
//! - **`ImageRef`**: contains-anywhere `![alt](url)` pattern
//! - **`TableRow`**: anchored `|...|` pattern, cell splitting, run assembly
//! - **`Paragraph`**: the fallthrough kind, no pattern
//!
//! ## Design Principle
//!
//! All patterns live here, not scattered in parser code. The classifier and
//! builder call these types; they never hardcode `#` or `|`.

pub mod heading;
pub mod image;
pub mod paragraph;
pub mod table;

pub use heading::Heading;
pub use image::ImageRef;
pub use paragraph::Paragraph;
pub use table::TableRow;
