pub mod markdown_file;

pub use markdown_file::{MarkdownFile, title_from_blocks};
