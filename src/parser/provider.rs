//! Document-model provider abstraction.
//!
//! A provider turns raw container bytes into the [`Document`] model the
//! renderers consume, isolating the concrete file format from rendering.

use crate::error::Result;
use crate::model::Document;

use super::docx::DocxParser;
use super::options::ParseOptions;

/// A loader that produces the document model from raw bytes.
pub trait DocumentProvider {
    /// Provider name.
    fn name(&self) -> &str;

    /// File extensions this provider accepts (lowercase, without the dot).
    fn extensions(&self) -> &[&str];

    /// Load a document from bytes.
    fn load(&self, data: &[u8]) -> Result<Document>;
}

/// Provider for WordprocessingML (`.docx`/`.docm`) containers.
#[derive(Debug, Clone, Default)]
pub struct DocxProvider {
    options: ParseOptions,
}

impl DocxProvider {
    /// Create a provider with default parse options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider with custom parse options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }
}

impl DocumentProvider for DocxProvider {
    fn name(&self) -> &str {
        "DOCX"
    }

    fn extensions(&self) -> &[&str] {
        &["docx", "docm"]
    }

    fn load(&self, data: &[u8]) -> Result<Document> {
        DocxParser::from_bytes_with_options(data, self.options.clone())?.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::test_package;

    #[test]
    fn test_docx_provider() {
        let provider = DocxProvider::new();
        assert_eq!(provider.name(), "DOCX");
        assert!(provider.extensions().contains(&"docm"));

        let data = test_package(&[(
            "word/document.xml",
            "<w:document><w:body><w:p><w:r><w:t>hi</w:t></w:r></w:p></w:body></w:document>",
        )]);
        let doc = provider.load(&data).unwrap();
        assert_eq!(doc.plain_text(), "hi");
    }

    #[test]
    fn test_provider_rejects_garbage() {
        let provider: Box<dyn DocumentProvider> = Box::new(DocxProvider::new());
        let err = provider.load(b"garbage").unwrap_err();
        assert!(err.is_load_error());
    }
}
