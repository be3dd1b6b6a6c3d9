//! Wiki link translation and Markdown rendering.
//!
//! # Modules
//!
//! - [`links`]: `[PageName]` ⇄ `<a href='/view/PageName'>PageName</a>`
//! - [`markdown`]: Markdown to HTML via `pulldown-cmark`
//!
//! [`render_view_body`] chains the two in the order the view page needs:
//! bracket links first, so the anchors they produce reach the Markdown pass as
//! inline HTML and come out unchanged.
//!
//! # Example
//!
//! ```rust
//! use wikkit_content::render_view_body;
//!
//! let html = render_view_body(b"Hello [World]");
//! assert_eq!(html, "<p>Hello <a href='/view/World'>World</a></p>\n");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod links;
pub mod markdown;

#[cfg(test)]
mod proptests;

pub use links::{bracket_to_html, html_to_bracket};
pub use markdown::render_markdown;

/// Turn a stored page body into the HTML shown on its view page.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn render_view_body(body: &[u8]) -> String {
    let linked = bracket_to_html(body);
    render_markdown(&String::from_utf8_lossy(&linked))
}
