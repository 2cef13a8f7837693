//! Maps parsed blocks to styled terminal lines.

use markvista_engine::render::styled_segments;
use markvista_engine::{Block, Renderer};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Renders blocks as ratatui lines: headings bold, paragraph spans styled
/// with terminal modifiers, tables as a bold shaded header row, a dashed
/// divider, and plain data rows.
pub struct TuiRenderer;

impl Renderer for TuiRenderer {
    type Output = Vec<Line<'static>>;

    fn render(&self, blocks: &[Block]) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for block in blocks {
            push_block(block, &mut lines);
        }
        lines
    }
}

fn push_block(block: &Block, lines: &mut Vec<Line<'static>>) {
    match block {
        Block::Heading { level, text } => {
            lines.push(Line::from(Span::styled(
                format!("{} {}", "#".repeat(*level as usize), text),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::default());
        }
        Block::Paragraph { text, spans } => {
            lines.push(paragraph_line(text, spans));
            lines.push(Line::default());
        }
        Block::Image { alt_text, url } => {
            lines.push(Line::from(Span::styled(
                format!("[image: {alt_text}] {url}"),
                Style::default().add_modifier(Modifier::DIM),
            )));
            lines.push(Line::default());
        }
        Block::Table { header, rows } => {
            let header_text = header.join(" | ");
            let divider = "-".repeat(header_text.chars().count().max(1));
            lines.push(Line::from(Span::styled(
                header_text,
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .bg(Color::DarkGray),
            )));
            lines.push(Line::from(Span::raw(divider)));
            for row in rows {
                lines.push(Line::from(Span::raw(row.join(" | "))));
            }
            lines.push(Line::default());
        }
    }
}

fn paragraph_line(text: &str, spans: &[markvista_engine::Span]) -> Line<'static> {
    let mut parts = Vec::new();
    for (range, styles) in styled_segments(text, spans) {
        let mut style = Style::default();
        if styles.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if styles.italic {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if styles.strikethrough {
            style = style.add_modifier(Modifier::CROSSED_OUT);
        }
        parts.push(Span::styled(text[range].to_string(), style));
    }
    Line::from(parts)
}
