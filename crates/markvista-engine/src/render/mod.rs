//! # Rendering
//!
//! Rendering is a separate, swappable stage: the parser produces [`Block`]s,
//! and a [`Renderer`] maps them onto a concrete presentation surface. The
//! engine ships an HTML renderer; the terminal viewer brings its own.

pub mod html;
pub mod segments;

pub use html::HtmlRenderer;
pub use segments::{SegmentStyles, styled_segments};

use crate::parsing::blocks::Block;

/// Maps parsed blocks onto a presentation surface.
pub trait Renderer {
    type Output;

    fn render(&self, blocks: &[Block]) -> Self::Output;
}
