pub mod editing;
pub mod images;
pub mod io;
pub mod models;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use parsing::blocks::Block;
pub use parsing::inline::{Span, SpanStyle};
pub use parsing::parse;
pub use render::Renderer;
