/// Generates a markdown document with `sections` repeated sections covering
/// every block kind the parser handles.
pub fn generate_markdown_content(sections: usize) -> String {
    let mut content = String::new();
    for i in 0..sections {
        content.push_str(&format!("# Section {i}\n\n"));
        content.push_str(&format!(
            "Paragraph {i} with **bold**, *italic*, and ~~struck~~ runs.\n\n"
        ));
        content.push_str(&format!("![figure {i}](https://example.com/{i}.png)\n\n"));
        content.push_str("|Key|Value|\n|---|---|\n");
        for row in 0..4 {
            content.push_str(&format!("|k{row}|v{row}|\n"));
        }
        content.push('\n');
    }
    content
}
