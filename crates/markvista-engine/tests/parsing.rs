//! Conformance tests for the block scanner and inline resolver, pinned to
//! the viewer's historical parsing behavior.

use markvista_engine::{Block, Span, SpanStyle, parse};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn heading(level: u8, text: &str) -> Block {
    Block::Heading {
        level,
        text: text.to_string(),
    }
}

fn span(start: usize, end: usize, style: SpanStyle) -> Span {
    Span { start, end, style }
}

#[test]
fn two_headings() {
    assert_eq!(
        parse("# Header1\n## Header2"),
        vec![heading(1, "Header1"), heading(2, "Header2")]
    );
}

#[test]
fn inline_styles_at_literal_offsets() {
    let blocks = parse("Normal **bold** *italic* ~~strike~~");
    assert_eq!(blocks.len(), 1);

    let Block::Paragraph { text, spans } = &blocks[0] else {
        panic!("expected paragraph, got {:?}", blocks[0]);
    };
    assert_eq!(text, "Normal **bold** *italic* ~~strike~~");

    // The named spans cover the literal substrings, delimiters included.
    assert!(spans.contains(&span(7, 15, SpanStyle::Bold)));
    assert!(spans.contains(&span(16, 24, SpanStyle::Italic)));
    assert!(spans.contains(&span(25, 35, SpanStyle::Strikethrough)));

    // The italic pass also matches the `**` delimiter pairs of the bold run;
    // the full engine-true span list is pinned here.
    assert_eq!(
        spans,
        &vec![
            span(7, 15, SpanStyle::Bold),
            span(7, 9, SpanStyle::Italic),
            span(13, 15, SpanStyle::Italic),
            span(16, 24, SpanStyle::Italic),
            span(25, 35, SpanStyle::Strikethrough),
        ]
    );
}

#[test]
fn three_line_table() {
    assert_eq!(
        parse("|Header1|Header2|\n|---|---|\n|Cell1|Cell2|"),
        vec![Block::Table {
            header: vec!["Header1".to_string(), "Header2".to_string()],
            rows: vec![vec!["Cell1".to_string(), "Cell2".to_string()]],
        }]
    );
}

#[test]
fn single_row_table_has_no_divider_to_discard() {
    assert_eq!(
        parse("|a|"),
        vec![Block::Table {
            header: vec!["a".to_string()],
            rows: vec![],
        }]
    );
}

#[test]
fn empty_input_yields_empty_sequence() {
    assert_eq!(parse(""), vec![]);
}

#[test]
fn hash_without_space_is_a_plain_paragraph() {
    assert_eq!(
        parse("#NoSpaceHeading"),
        vec![Block::Paragraph {
            text: "#NoSpaceHeading".to_string(),
            spans: vec![],
        }]
    );
}

#[test]
fn parse_is_idempotent() {
    let content = "# T\n\ntext **b**\n|a|b|\n|---|---|\n|1|2|\n![i](u)";
    assert_eq!(parse(content), parse(content));
}

#[rstest]
#[case("# A\r\n## B")]
#[case("# A\n## B")]
#[case("# A\r## B")]
fn line_ending_styles_are_equivalent(#[case] content: &str) {
    assert_eq!(parse(content), vec![heading(1, "A"), heading(2, "B")]);
}

#[test]
fn indented_lines_are_trimmed_before_classification() {
    assert_eq!(parse("   # Indented   "), vec![heading(1, "Indented")]);
}

#[test]
fn image_anywhere_in_line_discards_surrounding_text() {
    assert_eq!(
        parse("before ![alt](http://u) after"),
        vec![Block::Image {
            alt_text: "alt".to_string(),
            url: "http://u".to_string(),
        }]
    );
}

#[test]
fn divider_content_is_discarded_without_validation() {
    // The second run line need not be dashes; it is dropped either way.
    assert_eq!(
        parse("|h|\n|not dashes|\n|d|"),
        vec![Block::Table {
            header: vec!["h".to_string()],
            rows: vec![vec!["d".to_string()]],
        }]
    );
}

#[test]
fn alignment_markers_are_ignored() {
    assert_eq!(
        parse("|h1|h2|\n|:---|---:|\n|a|b|"),
        vec![Block::Table {
            header: vec!["h1".to_string(), "h2".to_string()],
            rows: vec![vec!["a".to_string(), "b".to_string()]],
        }]
    );
}

/// Every line is accounted for exactly once: skipped as blank or folded into
/// exactly one block. With documents built from known shapes, the block
/// sequence pins down the accounting.
#[test]
fn every_line_is_consumed_exactly_once() {
    // 8 lines: blank, heading, blank, 3-line table run, paragraph, image.
    let blocks = parse("\n# h\n\n|a|\n|---|\n|1|\npara\n![i](u)");
    assert_eq!(blocks.len(), 4);
    assert_eq!(
        blocks,
        vec![
            heading(1, "h"),
            Block::Table {
                header: vec!["a".to_string()],
                rows: vec![vec!["1".to_string()]],
            },
            Block::Paragraph {
                text: "para".to_string(),
                spans: vec![],
            },
            Block::Image {
                alt_text: "i".to_string(),
                url: "u".to_string(),
            },
        ]
    );
}

#[test]
fn table_run_consumption_does_not_rescan_rows() {
    // A heading-shaped cell inside a run stays a row; the line after the
    // run is classified fresh.
    assert_eq!(
        parse("|h|\n|---|\n|# not a heading|\n# real heading"),
        vec![
            Block::Table {
                header: vec!["h".to_string()],
                rows: vec![vec!["# not a heading".to_string()]],
            },
            heading(1, "real heading"),
        ]
    );
}

#[test]
fn arbitrary_unicode_text_parses_without_error() {
    let blocks = parse("# Überschrift\n日本語のテキスト **太字**\n|栏|\n");
    assert_eq!(blocks.len(), 3);
    let Block::Paragraph { text, spans } = &blocks[1] else {
        panic!("expected paragraph");
    };
    // Span offsets are byte offsets into the paragraph text.
    let bold = spans
        .iter()
        .find(|s| s.style == SpanStyle::Bold)
        .expect("bold span");
    assert_eq!(&text[bold.start..bold.end], "**太字**");
}
