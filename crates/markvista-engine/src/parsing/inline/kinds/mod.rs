//! # Inline Kinds
//!
//! Style-specific types that own their match patterns.
//!
//! ## Types
//!
//! - **`Bold`**: `\*\*(.*?)\*\*`
//! - **`Italic`**: `\*(.*?)\*`
//! - **`Strikethrough`**: `~~(.*?)~~`
//!
//! ## Design Principle
//!
//! All patterns live here, not in the resolver. Each pattern is non-greedy;
//! span boundaries depend on that, so the patterns are fixed verbatim.

pub mod bold;
pub mod italic;
pub mod strikethrough;

pub use bold::Bold;
pub use italic::Italic;
pub use strikethrough::Strikethrough;
