//! # undocx
//!
//! DOCX to HTML conversion library for Rust.
//!
//! This library reads WordprocessingML documents (`.docx`, `.docm`) into a
//! small document model of paragraphs and tables and renders it as a
//! standalone HTML page, plain text, or JSON.
//!
//! ## Quick Start
//!
//! ```no_run
//! use undocx::{parse_file, render};
//!
//! fn main() -> undocx::Result<()> {
//!     // Parse a DOCX file
//!     let doc = parse_file("report.docx")?;
//!
//!     // Convert to HTML
//!     let options = render::RenderOptions::default();
//!     let html = render::to_html(&doc, &options);
//!     println!("{}", html);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Headings**: `Heading1`..`Heading6` styles and outline levels become `<h1>`..`<h9>`
//! - **Inline formatting**: bold, italic and underline runs
//! - **Tables**: first row as header cells, multi-paragraph cells
//! - **Ignored text**: `{{{...}}}` directives are removed from the output
//! - **Auxiliary outputs**: plain text and JSON dumps of the model

pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_docx, DocxFormat};
pub use error::{Error, Result};
pub use model::{
    Block, BlockSource, Document, Metadata, Paragraph, Table, TableCell, TableRow, TextRun,
    TextStyle, UnderlineStyle,
};
pub use parser::{DocumentProvider, DocxParser, DocxProvider, ErrorMode, ParseOptions};
pub use render::{JsonFormat, RenderOptions, RenderResult, RenderStats};

use std::io::Read;
use std::path::Path;

/// Parse a DOCX file and return a structured document.
///
/// # Example
///
/// ```no_run
/// use undocx::parse_file;
///
/// let doc = parse_file("report.docx").unwrap();
/// println!("Blocks: {}", doc.block_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let mut parser = DocxParser::open(path)?;
    parser.parse()
}

/// Parse a DOCX file with custom options.
///
/// # Example
///
/// ```no_run
/// use undocx::{parse_file_with_options, ParseOptions};
///
/// let options = ParseOptions::new().lenient();
/// let doc = parse_file_with_options("report.docx", options).unwrap();
/// ```
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Document> {
    let mut parser = DocxParser::open_with_options(path, options)?;
    parser.parse()
}

/// Parse a DOCX from bytes.
///
/// # Example
///
/// ```no_run
/// use undocx::parse_bytes;
///
/// let data = std::fs::read("report.docx").unwrap();
/// let doc = parse_bytes(&data).unwrap();
/// ```
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    let mut parser = DocxParser::from_bytes(data)?;
    parser.parse()
}

/// Parse a DOCX from bytes with custom options.
pub fn parse_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Document> {
    let mut parser = DocxParser::from_bytes_with_options(data, options)?;
    parser.parse()
}

/// Parse a DOCX from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    let mut parser = DocxParser::from_reader(reader)?;
    parser.parse()
}

/// Parse a DOCX from a reader with custom options.
pub fn parse_reader_with_options<R: Read>(reader: R, options: ParseOptions) -> Result<Document> {
    let mut parser = DocxParser::from_reader_with_options(reader, options)?;
    parser.parse()
}

/// Extract plain text from a DOCX file.
///
/// This is the unprocessed model text; use [`to_text`] for directive-free output.
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    Ok(doc.plain_text())
}

/// Convert a DOCX file to a standalone HTML page.
///
/// # Example
///
/// ```no_run
/// use undocx::to_html;
///
/// let html = to_html("report.docx").unwrap();
/// std::fs::write("report.html", html).unwrap();
/// ```
pub fn to_html<P: AsRef<Path>>(path: P) -> Result<String> {
    to_html_with_options(path, &RenderOptions::default())
}

/// Convert a DOCX file to HTML with custom options.
///
/// # Example
///
/// ```no_run
/// use undocx::{to_html_with_options, RenderOptions};
///
/// let options = RenderOptions::new().with_fragment(true);
/// let body = to_html_with_options("report.docx", &options).unwrap();
/// ```
pub fn to_html_with_options<P: AsRef<Path>>(path: P, options: &RenderOptions) -> Result<String> {
    let doc = parse_file(path)?;
    Ok(render::to_html(&doc, options))
}

/// Convert a DOCX file to plain text.
pub fn to_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    Ok(render::to_text(&doc))
}

/// Convert a DOCX file to JSON.
///
/// # Example
///
/// ```no_run
/// use undocx::{to_json, JsonFormat};
///
/// let json = to_json("report.docx", JsonFormat::Pretty).unwrap();
/// std::fs::write("report.json", json).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_json(&doc, format)
}

/// Convert a DOCX file into an HTML file.
///
/// # Example
///
/// ```no_run
/// undocx::convert_file("report.docx", "report.html").unwrap();
/// ```
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<()> {
    let html = to_html(input)?;
    std::fs::write(output, html)?;
    Ok(())
}

/// Builder for parsing and converting DOCX documents.
///
/// # Example
///
/// ```no_run
/// use undocx::Undocx;
///
/// let html = Undocx::new()
///     .lenient()
///     .fragment()
///     .parse("report.docx")?
///     .to_html();
/// # Ok::<(), undocx::Error>(())
/// ```
pub struct Undocx {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl Undocx {
    /// Create a new Undocx builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Enable lenient parsing mode.
    pub fn lenient(mut self) -> Self {
        self.parse_options = self.parse_options.lenient();
        self
    }

    /// Skip reading document properties.
    pub fn without_metadata(mut self) -> Self {
        self.parse_options = self.parse_options.with_metadata(false);
        self
    }

    /// Render only the body blocks, without the page shell.
    pub fn fragment(mut self) -> Self {
        self.render_options = self.render_options.with_fragment(true);
        self
    }

    /// Collect rendering statistics.
    pub fn with_stats(mut self) -> Self {
        self.render_options = self.render_options.with_stats(true);
        self
    }

    /// Parse a DOCX file and return a result wrapper.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<UndocxResult> {
        let mut parser = DocxParser::open_with_options(path, self.parse_options)?;
        let document = parser.parse()?;
        Ok(UndocxResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Parse a DOCX from bytes.
    pub fn parse_bytes(self, data: &[u8]) -> Result<UndocxResult> {
        let mut parser = DocxParser::from_bytes_with_options(data, self.parse_options)?;
        let document = parser.parse()?;
        Ok(UndocxResult {
            document,
            render_options: self.render_options,
        })
    }
}

impl Default for Undocx {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing a DOCX document.
pub struct UndocxResult {
    /// The parsed document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl UndocxResult {
    /// Convert to HTML.
    pub fn to_html(&self) -> String {
        render::to_html(&self.document, &self.render_options)
    }

    /// Convert to HTML and collect rendering statistics.
    pub fn to_html_with_stats(&self) -> RenderResult {
        render::to_html_with_stats(&self.document, &self.render_options)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> String {
        render::to_text(&self.document)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
