//! Text sanitizing: ignored-text directives and HTML escaping.

use std::borrow::Cow;

use regex::Regex;

/// Pattern of the ignored-text directive: `{{{...}}}` with no `}` inside.
pub const IGNORED_TEXT_PATTERN: &str = r"\{\{\{[^}]*\}\}\}";

/// Strips ignored-text directives from run text.
#[derive(Debug, Clone)]
pub struct TextSanitizer {
    directive_regex: Regex,
}

impl TextSanitizer {
    /// Create a new sanitizer.
    pub fn new() -> Self {
        Self {
            directive_regex: Regex::new(IGNORED_TEXT_PATTERN).unwrap(),
        }
    }

    /// Remove every non-overlapping `{{{...}}}` directive from `text`.
    pub fn strip_directives<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.directive_regex.replace_all(text, "")
    }
}

impl Default for TextSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape HTML special characters.
///
/// `&` is replaced first so the entities produced for the other characters
/// are never escaped twice.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<&>"), "&lt;&amp;&gt;");
        assert_eq!(escape_html("a<b>"), "a&lt;b&gt;");
        assert_eq!(escape_html("\"it's\""), "&quot;it&#39;s&quot;");
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_strip_directives() {
        let sanitizer = TextSanitizer::new();
        assert_eq!(sanitizer.strip_directives("foo{{{secret}}}bar"), "foobar");
        assert_eq!(sanitizer.strip_directives("{{{a}}}x{{{b}}}"), "x");
        assert_eq!(sanitizer.strip_directives("{{{}}}"), "");
        assert_eq!(sanitizer.strip_directives("{{{only}}}"), "");
    }

    #[test]
    fn test_directive_cannot_contain_closing_brace() {
        let sanitizer = TextSanitizer::new();
        assert_eq!(sanitizer.strip_directives("{{{a}b}}}"), "{{{a}b}}}");
        assert_eq!(sanitizer.strip_directives("{{x}}"), "{{x}}");
    }

    #[test]
    fn test_strip_directives_borrows_when_unchanged() {
        let sanitizer = TextSanitizer::new();
        assert!(matches!(
            sanitizer.strip_directives("untouched"),
            Cow::Borrowed("untouched")
        ));
    }
}
