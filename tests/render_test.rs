//! Integration tests for HTML rendering of the document model.

use undocx::model::{Block, Document, Paragraph, Table, TableCell, TableRow, TextRun};
use undocx::render::{to_html, to_html_with_stats, RenderOptions, HTML_HEAD, HTML_TAIL};

fn fragment() -> RenderOptions {
    RenderOptions::new().with_fragment(true)
}

fn render_fragment(doc: &Document) -> String {
    to_html(doc, &fragment())
}

fn paragraph_runs(runs: Vec<TextRun>) -> Paragraph {
    let mut para = Paragraph::new();
    for run in runs {
        para.add_run(run);
    }
    para
}

#[test]
fn test_empty_document_is_just_the_shell() {
    let doc = Document::new();
    let html = to_html(&doc, &RenderOptions::default());

    assert_eq!(html, format!("{}{}", HTML_HEAD, HTML_TAIL));
    assert!(html.starts_with("<!DOCTYPE html>\n"));
    assert!(html.contains("<title>Converted Document</title>"));
    assert!(html.ends_with("\n</body>\n</html>"));
}

#[test]
fn test_full_page_layout() {
    let mut doc = Document::new();
    doc.add_paragraph(Paragraph::styled("Heading1", "Report"));
    doc.add_paragraph(Paragraph::with_text("Hello"));

    let html = to_html(&doc, &RenderOptions::default());
    let expected = format!(
        "{}    <h1>Report</h1>\n    <p>Hello</p>\n{}",
        HTML_HEAD, HTML_TAIL
    );
    assert_eq!(html, expected);
}

#[test]
fn test_blank_paragraphs_produce_no_tags() {
    let mut doc = Document::new();
    doc.add_paragraph(Paragraph::new());
    doc.add_paragraph(Paragraph::with_text("   \t "));
    doc.add_paragraph(Paragraph::styled("Heading1", " "));

    assert_eq!(render_fragment(&doc), "");
}

#[test]
fn test_heading_styles() {
    let mut doc = Document::new();
    doc.add_paragraph(Paragraph::styled("Heading2", "Two"));
    doc.add_paragraph(Paragraph::styled("heading10", "Ten"));
    doc.add_paragraph(Paragraph::styled("HEADING92", "Ninety-two"));
    doc.add_paragraph(Paragraph::styled("Heading", "Bare"));
    doc.add_paragraph(Paragraph::styled("Heading8", "Eight"));

    assert_eq!(
        render_fragment(&doc),
        "    <h2>Two</h2>\n    <h1>Ten</h1>\n    <h2>Ninety-two</h2>\n    <h1>Bare</h1>\n    <h6>Eight</h6>\n"
    );
}

#[test]
fn test_outline_levels() {
    let mut doc = Document::new();
    doc.add_paragraph(Paragraph::with_text("Top").outline(0));
    doc.add_paragraph(Paragraph::with_text("Deep").outline(8));
    doc.add_paragraph(Paragraph::with_text("Body text").outline(9));
    doc.add_paragraph(Paragraph::styled("Normal", "Normal").outline(3));

    assert_eq!(
        render_fragment(&doc),
        "    <h1>Top</h1>\n    <h9>Deep</h9>\n    <p>Body text</p>\n    <h4>Normal</h4>\n"
    );
}

#[test]
fn test_style_takes_precedence_over_outline() {
    let mut doc = Document::new();
    doc.add_paragraph(Paragraph::styled("Heading3", "x").outline(0));

    assert_eq!(render_fragment(&doc), "    <h3>x</h3>\n");
}

#[test]
fn test_ignored_text_directive() {
    let mut doc = Document::new();
    doc.add_paragraph(paragraph_runs(vec![
        TextRun::new("foo{{{secret}}}bar"),
        TextRun::bold("{{{only hidden}}}"),
        TextRun::italic(" & more"),
    ]));

    assert_eq!(
        render_fragment(&doc),
        "    <p>foobar<em> &amp; more</em></p>\n"
    );
}

#[test]
fn test_nested_formatting_and_escaping() {
    let mut doc = Document::new();
    doc.add_paragraph(paragraph_runs(vec![TextRun::new("a<b>")
        .with_bold(true)
        .with_italic(true)
        .with_underline(undocx::UnderlineStyle::Single)]));
    doc.add_paragraph(Paragraph::with_text("<&>\"'"));

    assert_eq!(
        render_fragment(&doc),
        "    <p><strong><em><u>a&lt;b&gt;</u></em></strong></p>\n    <p>&lt;&amp;&gt;&quot;&#39;</p>\n"
    );
}

#[test]
fn test_explicit_no_underline() {
    let mut doc = Document::new();
    doc.add_paragraph(paragraph_runs(vec![
        TextRun::new("plain").with_underline(undocx::UnderlineStyle::None)
    ]));

    assert_eq!(render_fragment(&doc), "    <p>plain</p>\n");
}

#[test]
fn test_table_header_and_data_rows() {
    let mut doc = Document::new();
    doc.add_table(Table::with_rows(vec![
        TableRow::from_strings(["Name", "Age"]),
        TableRow::from_strings(["Ann", "41"]),
    ]));

    let expected = concat!(
        "    <table>\n",
        "        <tr>\n",
        "            <th>Name</th>\n",
        "            <th>Age</th>\n",
        "        </tr>\n",
        "        <tr>\n",
        "            <td>Ann</td>\n",
        "            <td>41</td>\n",
        "        </tr>\n",
        "    </table>\n\n",
    );
    assert_eq!(render_fragment(&doc), expected);
}

#[test]
fn test_empty_table() {
    let mut doc = Document::new();
    doc.add_table(Table::new());

    assert_eq!(render_fragment(&doc), "    <table>\n    </table>\n\n");
}

#[test]
fn test_cell_paragraph_separators() {
    fn cell(texts: &[&str]) -> TableCell {
        TableCell::with_content(texts.iter().map(|t| Paragraph::with_text(*t)).collect())
    }

    let mut doc = Document::new();
    doc.add_table(Table::with_rows(vec![TableRow::new(vec![
        cell(&["A", "B"]),
        cell(&["A", "", "B"]),
        cell(&["A", ""]),
        cell(&["", ""]),
        TableCell::empty(),
    ])]));

    let html = render_fragment(&doc);
    assert!(html.contains("            <th>A<br>B</th>\n"));
    assert!(html.contains("            <th>A<br></th>\n"));
    assert_eq!(html.matches("<th>A<br>B</th>").count(), 2);
    assert_eq!(html.matches("<th></th>").count(), 2);
}

#[test]
fn test_heading_styles_are_ignored_inside_cells() {
    let mut doc = Document::new();
    doc.add_table(Table::with_rows(vec![TableRow::new(vec![
        TableCell::with_content(vec![Paragraph::styled("Heading1", "Cell").outline(0)]),
    ])]));

    assert!(render_fragment(&doc).contains("<th>Cell</th>"));
}

#[test]
fn test_block_order_is_preserved() {
    let blocks = vec![
        Block::from(Paragraph::with_text("one")),
        Block::from(Table::with_rows(vec![TableRow::from_strings(["two"])])),
        Block::from(Paragraph::with_text("three")),
    ];

    let html = to_html(&blocks, &fragment());
    let one = html.find("one").unwrap();
    let two = html.find("two").unwrap();
    let three = html.find("three").unwrap();
    assert!(one < two && two < three);
}

#[test]
fn test_rendering_is_idempotent() {
    let mut doc = Document::new();
    doc.add_paragraph(Paragraph::styled("Heading1", "Title"));
    doc.add_table(Table::with_rows(vec![TableRow::from_strings(["a", "b"])]));

    let options = RenderOptions::default();
    assert_eq!(to_html(&doc, &options), to_html(&doc, &options));
}

#[test]
fn test_render_stats() {
    let mut doc = Document::new();
    doc.add_paragraph(Paragraph::styled("Heading1", "Title"));
    doc.add_paragraph(Paragraph::new());
    doc.add_paragraph(Paragraph::with_text("Some body text"));
    doc.add_table(Table::with_rows(vec![
        TableRow::from_strings(["a", "b"]),
        TableRow::from_strings(["c", "d"]),
    ]));

    let result = to_html_with_stats(&doc, &RenderOptions::default());
    let stats = result.stats;

    assert_eq!(stats.heading_count, 1);
    assert_eq!(stats.paragraph_count, 1);
    assert_eq!(stats.skipped_paragraph_count, 1);
    assert_eq!(stats.table_count, 1);
    assert_eq!(stats.row_count, 2);
    assert_eq!(stats.cell_count, 4);
    assert_eq!(result.content, to_html(&doc, &RenderOptions::default()));
}
