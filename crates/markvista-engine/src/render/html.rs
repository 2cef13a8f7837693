use crate::parsing::blocks::Block;
use crate::parsing::inline::Span;
use crate::render::{Renderer, styled_segments};

/// Renders blocks to an HTML fragment.
///
/// Pure string construction; one element per block, overlapping spans
/// resolved into flat styled segments. Text and attribute values are
/// escaped.
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    type Output = String;

    fn render(&self, blocks: &[Block]) -> String {
        let mut out = String::new();
        for block in blocks {
            push_block(block, &mut out);
        }
        out
    }
}

fn push_block(block: &Block, out: &mut String) {
    match block {
        Block::Heading { level, text } => {
            out.push_str(&format!(
                "<h{level}>{}</h{level}>\n",
                html_escape::encode_text(text)
            ));
        }
        Block::Paragraph { text, spans } => {
            out.push_str(&paragraph_html(text, spans));
            out.push('\n');
        }
        Block::Image { alt_text, url } => {
            out.push_str(&format!(
                "<img src=\"{}\" alt=\"{}\">\n",
                html_escape::encode_double_quoted_attribute(url),
                html_escape::encode_double_quoted_attribute(alt_text)
            ));
        }
        Block::Table { header, rows } => {
            out.push_str("<table>\n<thead>\n<tr>");
            for cell in header {
                out.push_str(&format!("<th>{}</th>", html_escape::encode_text(cell)));
            }
            out.push_str("</tr>\n</thead>\n<tbody>\n");
            for row in rows {
                out.push_str("<tr>");
                for cell in row {
                    out.push_str(&format!("<td>{}</td>", html_escape::encode_text(cell)));
                }
                out.push_str("</tr>\n");
            }
            out.push_str("</tbody>\n</table>\n");
        }
    }
}

fn paragraph_html(text: &str, spans: &[Span]) -> String {
    let mut html = String::from("<p>");
    for (range, styles) in styled_segments(text, spans) {
        if styles.bold {
            html.push_str("<strong>");
        }
        if styles.italic {
            html.push_str("<em>");
        }
        if styles.strikethrough {
            html.push_str("<del>");
        }
        html.push_str(&html_escape::encode_text(&text[range]));
        if styles.strikethrough {
            html.push_str("</del>");
        }
        if styles.italic {
            html.push_str("</em>");
        }
        if styles.bold {
            html.push_str("</strong>");
        }
    }
    html.push_str("</p>");
    html
}
