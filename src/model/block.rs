//! Block-level types.

use super::{Document, Paragraph, Table};
use serde::{Deserialize, Serialize};

/// A top-level content block in the document body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A paragraph or heading
    Paragraph(Paragraph),

    /// A table
    Table(Table),
}

impl Block {
    /// Check if this block is a paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, Block::Paragraph(_))
    }

    /// Check if this block is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, Block::Table(_))
    }

    /// Get plain text content of the block.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Paragraph(p) => p.plain_text(),
            Block::Table(t) => t.plain_text(),
        }
    }
}

impl From<Paragraph> for Block {
    fn from(paragraph: Paragraph) -> Self {
        Block::Paragraph(paragraph)
    }
}

impl From<Table> for Block {
    fn from(table: Table) -> Self {
        Block::Table(table)
    }
}

/// Anything that yields the ordered body blocks of a document.
///
/// Renderers are written against this trait rather than [`Document`], so a
/// caller holding only a slice of blocks (or a custom provider) can render
/// without building a full document.
pub trait BlockSource {
    /// Body blocks in rendering order.
    fn blocks(&self) -> &[Block];
}

impl BlockSource for Document {
    fn blocks(&self) -> &[Block] {
        &self.blocks
    }
}

impl BlockSource for [Block] {
    fn blocks(&self) -> &[Block] {
        self
    }
}

impl BlockSource for Vec<Block> {
    fn blocks(&self) -> &[Block] {
        self
    }
}
