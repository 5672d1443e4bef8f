//! Error types for undocx library.

use std::io;
use thiserror::Error;

/// Result type alias for undocx operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading or converting a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not a WordprocessingML container.
    #[error("Unknown file format: not a valid DOCX document")]
    UnknownFormat,

    /// A required part is missing from the container.
    #[error("Missing document part: {0}")]
    MissingPart(String),

    /// The ZIP container is corrupted or unreadable.
    #[error("Corrupted container: {0}")]
    Container(String),

    /// Error parsing an XML part.
    #[error("XML parsing error: {0}")]
    Xml(String),

    /// Error reading document properties.
    #[error("Metadata error: {0}")]
    Metadata(String),

    /// Error during rendering (JSON serialization).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Whether the error happened while loading the document, before any
    /// rendering took place.
    pub fn is_load_error(&self) -> bool {
        !matches!(self, Error::Render(_) | Error::Other(_))
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            zip::result::ZipError::FileNotFound => Error::MissingPart(err.to_string()),
            _ => Error::Container(err.to_string()),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownFormat;
        assert_eq!(
            err.to_string(),
            "Unknown file format: not a valid DOCX document"
        );

        let err = Error::MissingPart("word/document.xml".to_string());
        assert_eq!(err.to_string(), "Missing document part: word/document.xml");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_zip_error_conversion() {
        let err: Error = zip::result::ZipError::FileNotFound.into();
        assert!(matches!(err, Error::MissingPart(_)));

        let garbage = std::io::Cursor::new(b"not a zip archive at all".to_vec());
        let err: Error = zip::ZipArchive::new(garbage).unwrap_err().into();
        assert!(matches!(err, Error::Container(_)));
    }

    #[test]
    fn test_load_error_classification() {
        assert!(Error::UnknownFormat.is_load_error());
        assert!(Error::Xml("unexpected end".into()).is_load_error());
        assert!(!Error::Render("json".into()).is_load_error());
    }
}
