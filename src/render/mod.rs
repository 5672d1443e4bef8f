//! Rendering module for converting documents to HTML and auxiliary formats.

mod html;
mod json;
mod options;
mod result;
pub mod sanitize;
mod text;

pub use html::{
    is_heading_style, style_heading_level, to_html, to_html_with_stats, HtmlRenderer,
    ParagraphKind, HTML_HEAD, HTML_TAIL,
};
pub use json::{to_json, JsonFormat};
pub use options::RenderOptions;
pub use result::{RenderResult, RenderStats};
pub use sanitize::{escape_html, TextSanitizer};
pub use text::to_text;
