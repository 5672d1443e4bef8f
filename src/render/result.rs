//! Rendering result with metadata and statistics.

use crate::model::Metadata;
use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered content
    pub content: String,

    /// Document metadata (copied from source document)
    pub metadata: Metadata,

    /// Rendering statistics
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, metadata: Metadata, stats: RenderStats) -> Self {
        Self {
            content,
            metadata,
            stats,
        }
    }

    /// Create a simple result with just content.
    pub fn content_only(content: String) -> Self {
        Self {
            content,
            metadata: Metadata::default(),
            stats: RenderStats::default(),
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics collected while rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Number of paragraphs rendered as `<p>`
    pub paragraph_count: u32,

    /// Number of paragraphs rendered as headings
    pub heading_count: u32,

    /// Number of tables rendered
    pub table_count: u32,

    /// Number of table rows rendered
    pub row_count: u32,

    /// Number of table cells rendered
    pub cell_count: u32,

    /// Number of blank paragraphs that produced no output
    pub skipped_paragraph_count: u32,

    /// Number of runs whose text was removed entirely by a directive
    pub suppressed_run_count: u32,

    /// Approximate word count of the emitted text
    pub word_count: u32,

    /// Character count of the emitted text (excluding whitespace)
    pub char_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment paragraph count.
    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    /// Increment heading count.
    pub fn add_heading(&mut self) {
        self.heading_count += 1;
    }

    /// Increment table count.
    pub fn add_table(&mut self) {
        self.table_count += 1;
    }

    /// Increment row count.
    pub fn add_row(&mut self) {
        self.row_count += 1;
    }

    /// Increment cell count.
    pub fn add_cell(&mut self) {
        self.cell_count += 1;
    }

    /// Increment skipped paragraph count.
    pub fn add_skipped_paragraph(&mut self) {
        self.skipped_paragraph_count += 1;
    }

    /// Increment suppressed run count.
    pub fn add_suppressed_run(&mut self) {
        self.suppressed_run_count += 1;
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &RenderStats) {
        self.paragraph_count += other.paragraph_count;
        self.heading_count += other.heading_count;
        self.table_count += other.table_count;
        self.row_count += other.row_count;
        self.cell_count += other.cell_count;
        self.skipped_paragraph_count += other.skipped_paragraph_count;
        self.suppressed_run_count += other.suppressed_run_count;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
    }
}
