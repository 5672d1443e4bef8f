//! HTML rendering for word-processing documents.
//!
//! The renderer walks the body blocks in order and writes into a single
//! output buffer that it owns for the duration of one call. Paragraphs are
//! classified into headings or plain paragraphs, runs are wrapped in
//! `<strong>`/`<em>`/`<u>` and escaped, and tables are emitted with the
//! first row as header cells.

use crate::model::{Block, BlockSource, Document, Paragraph, Table, TableCell, TextRun};

use super::sanitize::{escape_html, TextSanitizer};
use super::{RenderOptions, RenderResult, RenderStats};

/// Fixed document head, up to and including the opening `<body>`.
pub const HTML_HEAD: &str = concat!(
    "<!DOCTYPE html>\n",
    "<html lang=\"en\">\n",
    "<head>\n",
    "    <meta charset=\"UTF-8\">\n",
    "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    "    <title>Converted Document</title>\n",
    "    <style>\n",
    "        body { font-family: Arial, sans-serif; line-height: 1.6; margin: 20px; }\n",
    "        table { border-collapse: collapse; width: 100%; margin: 20px 0; }\n",
    "        th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }\n",
    "        th { background-color: #f2f2f2; font-weight: bold; }\n",
    "        h1, h2, h3, h4, h5, h6 { margin-top: 20px; margin-bottom: 10px; }\n",
    "        p { margin: 10px 0; }\n",
    "        .bold { font-weight: bold; }\n",
    "        .italic { font-style: italic; }\n",
    "        .underline { text-decoration: underline; }\n",
    "    </style>\n",
    "</head>\n",
    "<body>\n\n",
);

/// Fixed document tail.
pub const HTML_TAIL: &str = "\n</body>\n</html>";

/// Style identifiers accepted as headings even without the case-insensitive
/// `heading` prefix check.
const HEADING_STYLE_IDS: [&str; 6] = [
    "Heading1", "Heading2", "Heading3", "Heading4", "Heading5", "Heading6",
];

/// Highest outline level that still maps to a heading (`h9`).
const MAX_OUTLINE_LEVEL: u8 = 8;

/// Convert a document (or any block source) to HTML.
pub fn to_html<S: BlockSource + ?Sized>(source: &S, options: &RenderOptions) -> String {
    let renderer = HtmlRenderer::new(options.clone());
    renderer.render(source)
}

/// Convert a document to HTML with statistics.
pub fn to_html_with_stats(doc: &Document, options: &RenderOptions) -> RenderResult {
    let renderer = HtmlRenderer::new(options.clone().with_stats(true));
    renderer.render_with_stats(doc)
}

/// How a body paragraph is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphKind {
    /// Blank paragraph, no output at all
    Skip,
    /// Heading with its level (1-9)
    Heading(u8),
    /// Regular `<p>` paragraph
    Paragraph,
}

impl ParagraphKind {
    /// Classify a body paragraph.
    ///
    /// A heading style wins over the outline level. Style-derived levels are
    /// capped at 6; outline levels 0-8 map to `h1`-`h9` without a cap.
    pub fn of(para: &Paragraph) -> Self {
        if para.is_blank() {
            return ParagraphKind::Skip;
        }

        if let Some(style) = para.style.as_deref() {
            if is_heading_style(style) {
                return ParagraphKind::Heading(style_heading_level(style));
            }
        }

        match para.outline_level {
            Some(level) if level <= MAX_OUTLINE_LEVEL => ParagraphKind::Heading(level + 1),
            _ => ParagraphKind::Paragraph,
        }
    }

    /// Tag name for this kind, `None` for skipped paragraphs.
    pub fn tag(&self) -> Option<String> {
        match self {
            ParagraphKind::Skip => None,
            ParagraphKind::Heading(level) => Some(format!("h{}", level)),
            ParagraphKind::Paragraph => Some("p".to_string()),
        }
    }
}

/// Check if a style identifier denotes a heading.
pub fn is_heading_style(style: &str) -> bool {
    style.to_lowercase().starts_with("heading") || HEADING_STYLE_IDS.contains(&style)
}

/// Derive a heading level (1-6) from a style identifier.
///
/// The digits 1 through 9 are tested in numeric order for containment in the
/// lower-cased style, so `heading92` yields 2 rather than the leftmost 9.
/// Styles without any digit default to level 1.
pub fn style_heading_level(style: &str) -> u8 {
    let style = style.to_lowercase();
    if style.contains("heading") {
        for digit in 1..=9u8 {
            if style.contains(char::from(b'0' + digit)) {
                return digit.min(6);
            }
        }
    }
    1
}

/// HTML renderer.
pub struct HtmlRenderer {
    options: RenderOptions,
    sanitizer: TextSanitizer,
    stats: RenderStats,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            sanitizer: TextSanitizer::new(),
            stats: RenderStats::new(),
        }
    }

    /// Render a block source to HTML.
    pub fn render<S: BlockSource + ?Sized>(mut self, source: &S) -> String {
        self.render_internal(source.blocks())
    }

    /// Render a document to HTML with rendering statistics.
    pub fn render_with_stats(mut self, doc: &Document) -> RenderResult {
        self.options.collect_stats = true;
        let content = self.render_internal(&doc.blocks);
        RenderResult::new(content, doc.metadata.clone(), self.stats)
    }

    fn render_internal(&mut self, blocks: &[Block]) -> String {
        let mut output = String::new();

        if !self.options.fragment {
            output.push_str(HTML_HEAD);
        }

        for block in blocks {
            self.render_block(&mut output, block);
        }

        if !self.options.fragment {
            output.push_str(HTML_TAIL);
        }

        log::debug!(
            "rendered {} blocks into {} bytes of HTML",
            blocks.len(),
            output.len()
        );
        output
    }

    fn render_block(&mut self, output: &mut String, block: &Block) {
        match block {
            Block::Paragraph(p) => self.render_paragraph(output, p),
            Block::Table(t) => self.render_table(output, t),
        }
    }

    fn render_paragraph(&mut self, output: &mut String, para: &Paragraph) {
        let kind = ParagraphKind::of(para);
        let Some(tag) = kind.tag() else {
            if self.options.collect_stats {
                self.stats.add_skipped_paragraph();
            }
            return;
        };

        if self.options.collect_stats {
            match kind {
                ParagraphKind::Heading(_) => self.stats.add_heading(),
                _ => self.stats.add_paragraph(),
            }
        }

        output.push_str("    <");
        output.push_str(&tag);
        output.push('>');
        self.render_runs(output, para);
        output.push_str("</");
        output.push_str(&tag);
        output.push_str(">\n");
    }

    fn render_runs(&mut self, output: &mut String, para: &Paragraph) {
        for run in &para.runs {
            self.render_run(output, run);
        }
    }

    fn render_run(&mut self, output: &mut String, run: &TextRun) {
        if run.is_empty() {
            return;
        }

        let text = self.sanitizer.strip_directives(&run.text);
        if text.is_empty() {
            if self.options.collect_stats {
                self.stats.add_suppressed_run();
            }
            return;
        }

        if self.options.collect_stats {
            self.stats.count_text(&text);
        }

        let bold = run.style.bold;
        let italic = run.style.italic;
        let underline = run.style.is_underlined();

        if bold {
            output.push_str("<strong>");
        }
        if italic {
            output.push_str("<em>");
        }
        if underline {
            output.push_str("<u>");
        }

        output.push_str(&escape_html(&text));

        if underline {
            output.push_str("</u>");
        }
        if italic {
            output.push_str("</em>");
        }
        if bold {
            output.push_str("</strong>");
        }
    }

    fn render_table(&mut self, output: &mut String, table: &Table) {
        if self.options.collect_stats {
            self.stats.add_table();
        }

        output.push_str("    <table>\n");

        for (i, row) in table.rows.iter().enumerate() {
            if self.options.collect_stats {
                self.stats.add_row();
            }
            // Header cells are positional: row 0 only.
            let tag = if i == 0 { "th" } else { "td" };

            output.push_str("        <tr>\n");
            for cell in &row.cells {
                self.render_cell(output, cell, tag);
            }
            output.push_str("        </tr>\n");
        }

        output.push_str("    </table>\n\n");
    }

    fn render_cell(&mut self, output: &mut String, cell: &TableCell, tag: &str) {
        if self.options.collect_stats {
            self.stats.add_cell();
        }

        output.push_str("            <");
        output.push_str(tag);
        output.push('>');

        let last = cell.paragraphs.len().saturating_sub(1);
        for (i, para) in cell.paragraphs.iter().enumerate() {
            // Blank paragraphs emit neither text nor a separator.
            if para.is_blank() {
                continue;
            }
            self.render_runs(output, para);
            if i < last {
                output.push_str("<br>");
            }
        }

        output.push_str("</");
        output.push_str(tag);
        output.push_str(">\n");
    }
}
