//! Plain text rendering.

use crate::model::{Block, BlockSource, Paragraph, Table};

use super::sanitize::TextSanitizer;

/// Convert a document (or any block source) to plain text.
///
/// Ignored-text directives are removed the same way the HTML renderer
/// removes them. Blank paragraphs are dropped; table rows become one line
/// each with tab-separated cells.
pub fn to_text<S: BlockSource + ?Sized>(source: &S) -> String {
    let sanitizer = TextSanitizer::new();

    source
        .blocks()
        .iter()
        .filter_map(|block| match block {
            Block::Paragraph(p) if p.is_blank() => None,
            Block::Paragraph(p) => Some(paragraph_text(&sanitizer, p)),
            Block::Table(t) => Some(table_text(&sanitizer, t)),
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn paragraph_text(sanitizer: &TextSanitizer, para: &Paragraph) -> String {
    para.runs
        .iter()
        .map(|run| sanitizer.strip_directives(&run.text))
        .collect()
}

fn table_text(sanitizer: &TextSanitizer, table: &Table) -> String {
    table
        .rows
        .iter()
        .map(|row| {
            row.cells
                .iter()
                .map(|cell| {
                    cell.paragraphs
                        .iter()
                        .filter(|p| !p.is_blank())
                        .map(|p| paragraph_text(sanitizer, p))
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .collect::<Vec<_>>()
                .join("\t")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Document, TableRow, TextRun};

    #[test]
    fn test_to_text() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("Hello, world!"));
        doc.add_paragraph(Paragraph::new());
        doc.add_paragraph(Paragraph::with_text("Second paragraph."));

        assert_eq!(to_text(&doc), "Hello, world!\n\nSecond paragraph.");
    }

    #[test]
    fn test_to_text_strips_directives() {
        let mut para = Paragraph::new();
        para.add_run(TextRun::new("keep{{{drop}}}"));
        para.add_run(TextRun::bold(" this"));
        let blocks = vec![Block::from(para)];

        assert_eq!(to_text(&blocks), "keep this");
    }

    #[test]
    fn test_to_text_table() {
        let table = Table::with_rows(vec![
            TableRow::from_strings(["a", "b"]),
            TableRow::from_strings(["c", "d"]),
        ]);
        let blocks = vec![Block::from(table)];

        assert_eq!(to_text(&blocks), "a\tb\nc\td");
    }
}
