//! DOCX parsing module.

mod body;
mod container;
mod core_props;
mod docx;
mod options;
mod provider;

pub use body::read_body;
pub use container::{DocxContainer, CONTENT_TYPES_PART, CORE_PROPERTIES_PART, DOCUMENT_PART};
pub use core_props::read_core_properties;
pub use docx::DocxParser;
pub use options::{ErrorMode, ParseOptions};
pub use provider::{DocumentProvider, DocxProvider};

#[cfg(test)]
pub(crate) use container::test_package;
