//! DOCX document parser.

use std::io::Read;
use std::path::Path;

use crate::detect::{container_format, DocxFormat};
use crate::error::Result;
use crate::model::{Document, Metadata};

use super::body::read_body;
use super::container::{DocxContainer, CORE_PROPERTIES_PART, DOCUMENT_PART};
use super::core_props::read_core_properties;
use super::options::ParseOptions;

/// DOCX document parser.
pub struct DocxParser {
    container: DocxContainer,
    options: ParseOptions,
}

impl DocxParser {
    /// Open a DOCX file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a DOCX file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let container = DocxContainer::open(path)?;
        Ok(Self { container, options })
    }

    /// Parse a DOCX from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Parse a DOCX from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        let container = DocxContainer::from_bytes(data)?;
        Ok(Self { container, options })
    }

    /// Parse a DOCX from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Parse a DOCX from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(reader: R, options: ParseOptions) -> Result<Self> {
        let container = DocxContainer::from_reader(reader)?;
        Ok(Self { container, options })
    }

    /// Format of the opened container.
    pub fn format(&mut self) -> DocxFormat {
        container_format(&mut self.container)
    }

    /// Parse the document and return a structured Document.
    pub fn parse(&mut self) -> Result<Document> {
        let xml = self.container.read_part(DOCUMENT_PART)?;
        let blocks = read_body(&xml, &self.options)?;

        let mut document = Document::from_blocks(blocks);
        if self.options.read_metadata {
            document.metadata = self.read_metadata()?;
        }

        log::debug!("Parsed {} blocks", document.block_count());
        Ok(document)
    }

    fn read_metadata(&mut self) -> Result<Metadata> {
        let xml = match self.container.read_optional_part(CORE_PROPERTIES_PART)? {
            Some(xml) => xml,
            None => return Ok(Metadata::default()),
        };

        match read_core_properties(&xml) {
            Ok(metadata) => Ok(metadata),
            Err(e) if self.options.is_lenient() => {
                log::warn!("Ignoring unreadable document properties: {}", e);
                Ok(Metadata::default())
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::parser::test_package;

    const DOCUMENT: &str = r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body><w:p><w:pPr><w:pStyle w:val="Title"/></w:pPr><w:r><w:t>Hello</w:t></w:r></w:p></w:body></w:document>"#;
    const CORE: &str = r#"<cp:coreProperties xmlns:cp="c" xmlns:dc="d"><dc:title>Greeting</dc:title></cp:coreProperties>"#;

    #[test]
    fn test_parse_with_metadata() {
        let data = test_package(&[(DOCUMENT_PART, DOCUMENT), (CORE_PROPERTIES_PART, CORE)]);
        let doc = DocxParser::from_bytes(&data).unwrap().parse().unwrap();

        assert_eq!(doc.block_count(), 1);
        assert_eq!(doc.metadata.title.as_deref(), Some("Greeting"));
    }

    #[test]
    fn test_parse_without_metadata() {
        let data = test_package(&[(DOCUMENT_PART, DOCUMENT), (CORE_PROPERTIES_PART, CORE)]);
        let options = ParseOptions::new().with_metadata(false);
        let doc = DocxParser::from_bytes_with_options(&data, options)
            .unwrap()
            .parse()
            .unwrap();

        assert!(doc.metadata.is_empty());
    }

    #[test]
    fn test_broken_metadata_strict_and_lenient() {
        let broken = "<cp:coreProperties><dc:title>x</dc:creator>";
        let data = test_package(&[(DOCUMENT_PART, DOCUMENT), (CORE_PROPERTIES_PART, broken)]);

        let strict = DocxParser::from_bytes(&data).unwrap().parse();
        assert!(matches!(strict, Err(Error::Metadata(_))));

        let lenient = DocxParser::from_bytes_with_options(&data, ParseOptions::new().lenient())
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(lenient.block_count(), 1);
        assert!(lenient.metadata.is_empty());
    }
}
