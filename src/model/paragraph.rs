//! Paragraph and text-level types.

use serde::{Deserialize, Serialize};

/// A paragraph of text content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paragraph {
    /// Style identifier (e.g. "Heading1"), if any
    pub style: Option<String>,

    /// Outline level (0 = top level), if any
    pub outline_level: Option<u8>,

    /// Text runs in the paragraph
    pub runs: Vec<TextRun>,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with plain text.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_text(text);
        p
    }

    /// Create a paragraph carrying a style identifier.
    pub fn styled(style: impl Into<String>, text: impl Into<String>) -> Self {
        let mut p = Self::with_text(text);
        p.style = Some(style.into());
        p
    }

    /// Set the outline level and return self.
    pub fn outline(mut self, level: u8) -> Self {
        self.outline_level = Some(level);
        self
    }

    /// Add plain text to the paragraph.
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.runs.push(TextRun::new(text));
    }

    /// Add a styled text run.
    pub fn add_run(&mut self, run: TextRun) {
        self.runs.push(run);
    }

    /// Get plain text content of the paragraph.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    /// Check if the paragraph has no visible text.
    ///
    /// Whitespace-only paragraphs count as blank.
    pub fn is_blank(&self) -> bool {
        self.plain_text().trim().is_empty()
    }
}

/// A run of text with consistent styling.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content (empty when the run carries none)
    pub text: String,

    /// Text styling
    pub style: TextStyle,
}

impl TextRun {
    /// Create a new text run with default style.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::default(),
        }
    }

    /// Create a bold text run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(text).with_bold(true)
    }

    /// Create an italic text run.
    pub fn italic(text: impl Into<String>) -> Self {
        Self::new(text).with_italic(true)
    }

    /// Create a single-underlined text run.
    pub fn underlined(text: impl Into<String>) -> Self {
        Self::new(text).with_underline(UnderlineStyle::Single)
    }

    /// Set bold and return self.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.style.bold = bold;
        self
    }

    /// Set italic and return self.
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.style.italic = italic;
        self
    }

    /// Set the underline kind and return self.
    pub fn with_underline(mut self, underline: UnderlineStyle) -> Self {
        self.style.underline = Some(underline);
        self
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Run formatting, collapsed from the source's tri-state toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,

    /// Underline kind, `None` when the run sets no underline at all
    pub underline: Option<UnderlineStyle>,
}

impl TextStyle {
    /// Whether an underline kind is set and is not explicitly `none`.
    pub fn is_underlined(&self) -> bool {
        matches!(self.underline, Some(kind) if kind != UnderlineStyle::None)
    }
}

/// Underline kinds of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnderlineStyle {
    /// Explicitly no underline
    None,
    /// Single line
    Single,
    /// Underline words only, not spaces
    Words,
    /// Double line
    Double,
    /// Thick line
    Thick,
    /// Dotted line
    Dotted,
    /// Dashed line
    Dashed,
    /// Wavy line
    Wave,
    /// Any other kind
    Other,
}

impl UnderlineStyle {
    /// Map a WordprocessingML `w:u/@w:val` value.
    pub fn from_ooxml(value: &str) -> Self {
        match value {
            "none" => UnderlineStyle::None,
            "single" => UnderlineStyle::Single,
            "words" => UnderlineStyle::Words,
            "double" => UnderlineStyle::Double,
            "thick" => UnderlineStyle::Thick,
            "dotted" | "dottedHeavy" => UnderlineStyle::Dotted,
            "dash" | "dashedHeavy" | "dashLong" | "dashLongHeavy" => UnderlineStyle::Dashed,
            "wave" | "wavyHeavy" | "wavyDouble" => UnderlineStyle::Wave,
            _ => UnderlineStyle::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_plain_text() {
        let mut p = Paragraph::new();
        p.add_text("Hello ");
        p.add_run(TextRun::bold("world"));
        p.add_text("!");

        assert_eq!(p.plain_text(), "Hello world!");
        assert!(!p.is_blank());
    }

    #[test]
    fn test_blank_paragraphs() {
        assert!(Paragraph::new().is_blank());
        assert!(Paragraph::with_text("  \t ").is_blank());

        let mut p = Paragraph::new();
        p.add_text("");
        p.add_text(" ");
        assert!(p.is_blank());
    }

    #[test]
    fn test_underline_presence() {
        let plain = TextStyle::default();
        assert!(!plain.is_underlined());

        let explicit_none = TextStyle {
            underline: Some(UnderlineStyle::None),
            ..Default::default()
        };
        assert!(!explicit_none.is_underlined());

        let double = TextRun::new("x").with_underline(UnderlineStyle::Double);
        assert!(double.style.is_underlined());
    }

    #[test]
    fn test_underline_from_ooxml() {
        assert_eq!(UnderlineStyle::from_ooxml("none"), UnderlineStyle::None);
        assert_eq!(UnderlineStyle::from_ooxml("single"), UnderlineStyle::Single);
        assert_eq!(UnderlineStyle::from_ooxml("wavyDouble"), UnderlineStyle::Wave);
        assert_eq!(UnderlineStyle::from_ooxml("dotDash"), UnderlineStyle::Other);
    }
}
