//! OOXML package (ZIP container) access.

use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

use zip::ZipArchive;

use crate::error::{Error, Result};

/// Main document part of a WordprocessingML package.
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Core properties part.
pub const CORE_PROPERTIES_PART: &str = "docProps/core.xml";

/// Content types part.
pub const CONTENT_TYPES_PART: &str = "[Content_Types].xml";

/// An opened DOCX package held in memory.
pub struct DocxContainer {
    archive: ZipArchive<Cursor<Vec<u8>>>,
}

impl DocxContainer {
    /// Open a package from a file path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Open a package from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_vec(data)
    }

    /// Open a package from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_vec(data.to_vec())
    }

    fn from_vec(data: Vec<u8>) -> Result<Self> {
        if !crate::detect::is_zip_magic(&data) {
            return Err(Error::UnknownFormat);
        }

        let archive = ZipArchive::new(Cursor::new(data))?;
        let container = Self { archive };

        if !container.has_part(DOCUMENT_PART) {
            return Err(Error::MissingPart(DOCUMENT_PART.to_string()));
        }

        Ok(container)
    }

    /// Check if the package contains a part.
    pub fn has_part(&self, name: &str) -> bool {
        self.archive.file_names().any(|n| n == name)
    }

    /// Names of all parts in the package.
    pub fn part_names(&self) -> Vec<String> {
        self.archive.file_names().map(str::to_string).collect()
    }

    /// Read a part as UTF-8 text, stripping a leading byte order mark.
    pub fn read_part(&mut self, name: &str) -> Result<String> {
        let mut file = self.archive.by_name(name).map_err(|e| match e {
            zip::result::ZipError::FileNotFound => Error::MissingPart(name.to_string()),
            other => Error::from(other),
        })?;

        let mut text = String::new();
        file.read_to_string(&mut text)
            .map_err(|e| Error::Xml(format!("{} is not valid UTF-8: {}", name, e)))?;

        Ok(match text.strip_prefix('\u{FEFF}') {
            Some(stripped) => stripped.to_string(),
            None => text,
        })
    }

    /// Read a part if present.
    pub fn read_optional_part(&mut self, name: &str) -> Result<Option<String>> {
        if !self.has_part(name) {
            return Ok(None);
        }
        self.read_part(name).map(Some)
    }
}

/// Build an in-memory package from `(part name, content)` pairs.
#[cfg(test)]
pub(crate) fn test_package(parts: &[(&str, &str)]) -> Vec<u8> {
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::{CompressionMethod, ZipWriter};

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    for (name, content) in parts {
        writer.start_file(*name, options).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package(parts: &[(&str, &str)]) -> Vec<u8> {
        test_package(parts)
    }

    #[test]
    fn test_open_requires_document_part() {
        let data = package(&[("word/styles.xml", "<w:styles/>")]);
        let result = DocxContainer::from_bytes(&data);
        assert!(matches!(result, Err(Error::MissingPart(_))));
    }

    #[test]
    fn test_open_rejects_non_zip() {
        let result = DocxContainer::from_bytes(b"<html></html>");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_read_parts() {
        let data = package(&[
            (DOCUMENT_PART, "\u{FEFF}<w:document/>"),
            ("word/extra.xml", "<x/>"),
        ]);
        let mut container = DocxContainer::from_bytes(&data).unwrap();

        assert_eq!(container.read_part(DOCUMENT_PART).unwrap(), "<w:document/>");
        assert!(container.has_part("word/extra.xml"));
        assert_eq!(container.part_names().len(), 2);
        assert!(container
            .read_optional_part(CORE_PROPERTIES_PART)
            .unwrap()
            .is_none());
        assert!(matches!(
            container.read_part("missing.xml"),
            Err(Error::MissingPart(_))
        ));
    }
}
