//! Document model types for word-processing content.
//!
//! This module defines the intermediate representation (IR) that bridges
//! container parsing and markup rendering. A provider materializes the
//! whole tree before rendering starts; renderers only ever borrow it.

mod block;
mod document;
mod paragraph;
mod table;

pub use block::{Block, BlockSource};
pub use document::{Document, Metadata};
pub use paragraph::{Paragraph, TextRun, TextStyle, UnderlineStyle};
pub use table::{Table, TableCell, TableRow};
