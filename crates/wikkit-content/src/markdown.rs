//! Markdown to HTML rendering.
//!
//! Thin wrapper over `pulldown-cmark` with the extensions wiki pages commonly
//! use (tables, strikethrough, footnotes, task lists). Raw HTML in the source,
//! including anchors produced by [`crate::links`], is emitted as-is.
//!
//! The output is not sanitized.

use pulldown_cmark::{html, Options, Parser};

/// Parser options used for page rendering.
pub fn markdown_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_TASKLISTS
}

/// Render Markdown source to an HTML fragment.
///
/// # Example
///
/// ```rust
/// use wikkit_content::markdown::render_markdown;
///
/// let html = render_markdown("# Title\n\nSome *emphasis*.");
/// assert_eq!(html, "<h1>Title</h1>\n<p>Some <em>emphasis</em>.</p>\n");
/// ```
pub fn render_markdown(content: &str) -> String {
    let parser = Parser::new_ext(content, markdown_options());
    let mut out = String::with_capacity(content.len() + content.len() / 2);
    html::push_html(&mut out, parser);
    out
}
