//! DOCX format detection and validation.

use crate::error::{Error, Result};
use crate::parser::{DocxContainer, CONTENT_TYPES_PART};
use std::fs::File;
use std::path::Path;

/// DOCX format information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocxFormat {
    /// Whether the main part is declared macro-enabled (`.docm`)
    pub macro_enabled: bool,
}

impl DocxFormat {
    /// Conventional file extension for this format.
    pub fn extension(&self) -> &'static str {
        if self.macro_enabled {
            "docm"
        } else {
            "docx"
        }
    }

    /// MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        if self.macro_enabled {
            "application/vnd.ms-word.document.macroEnabled.12"
        } else {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
    }
}

impl std::fmt::Display for DocxFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.macro_enabled {
            write!(f, "DOCM (macro-enabled)")
        } else {
            write!(f, "DOCX")
        }
    }
}

/// ZIP local file header magic: PK\x03\x04
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Content type marker of a macro-enabled main document part.
const MACRO_ENABLED_MARKER: &str = "macroEnabled";

/// Check whether data starts with the ZIP local file header.
pub fn is_zip_magic(data: &[u8]) -> bool {
    data.starts_with(ZIP_MAGIC)
}

/// Detect DOCX format from a file path.
///
/// # Example
/// ```no_run
/// use undocx::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("document.docx").unwrap();
/// println!("Format: {}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<DocxFormat> {
    let file = File::open(path)?;
    let mut container = DocxContainer::from_reader(file)?;
    Ok(container_format(&mut container))
}

/// Detect DOCX format from bytes.
///
/// # Returns
/// * `Ok(DocxFormat)` if the data is a ZIP container holding `word/document.xml`
/// * `Err(Error::UnknownFormat)` if the data is not a ZIP container
/// * `Err(Error::MissingPart(_))` if the container has no main document part
pub fn detect_format_from_bytes(data: &[u8]) -> Result<DocxFormat> {
    if !is_zip_magic(data) {
        return Err(Error::UnknownFormat);
    }
    let mut container = DocxContainer::from_bytes(data)?;
    Ok(container_format(&mut container))
}

/// Determine the format of an opened container from its content types.
pub(crate) fn container_format(container: &mut DocxContainer) -> DocxFormat {
    let macro_enabled = match container.read_optional_part(CONTENT_TYPES_PART) {
        Ok(Some(types)) => types.contains(MACRO_ENABLED_MARKER),
        Ok(None) => false,
        Err(e) => {
            log::debug!("Unreadable content types part: {}", e);
            false
        }
    };

    DocxFormat { macro_enabled }
}

/// Check if a file is a DOCX document.
pub fn is_docx<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}

/// Check if bytes represent a DOCX document.
pub fn is_docx_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}
