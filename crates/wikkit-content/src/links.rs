//! Bracket-link translation.
//!
//! Wiki pages refer to each other with `[PageName]`. For display these are
//! rewritten to `<a href='/view/PageName'>PageName</a>`; [`html_to_bracket`]
//! performs the inverse rewrite.
//!
//! Both directions are purely lexical. Any text shaped like a bracket link is
//! rewritten whether or not the author meant it as one, and stored pages
//! depend on exactly that behaviour.
//!
//! # Example
//!
//! ```rust
//! use wikkit_content::links::{bracket_to_html, html_to_bracket};
//!
//! let html = bracket_to_html(b"See [FrontPage].");
//! assert_eq!(&*html, b"See <a href='/view/FrontPage'>FrontPage</a>.");
//!
//! let back = html_to_bracket(&html);
//! assert_eq!(&*back, b"See [FrontPage].");
//! ```

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::bytes::{Captures, Regex};

/// Candidate spans: a whole inline Markdown link, or a `[Name]` bracket link.
///
/// Markdown links are matched first so the skip rule sees the `(url)` part.
/// A link stays on one line and its destination has no whitespace, apart from
/// an optional quoted title.
static WIKI_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\[[^\]\n]*\]\([^)\s]*(?:[ \t]+"[^"\n]*")?\)|\[([a-zA-Z]+)\]"#)
        .expect("Invalid wiki link regex")
});

/// Spans that belong to Markdown syntax and must be left alone.
static MARKDOWN_CONSTRUCT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:__|[*#])|\[(.*?)\]\(.*?\)").expect("Invalid markdown construct regex")
});

/// Anchors produced by [`bracket_to_html`].
static HTML_PAGE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<a href='/view/([a-zA-Z0-9]+)'>([a-zA-Z0-9]+)</a>")
        .expect("Invalid page anchor regex")
});

/// Rewrite every `[Name]` (ASCII letters only) into a view anchor.
///
/// Matches are found left to right without overlap. A span that the
/// Markdown-construct rule recognises, such as `[text](url)`, is copied
/// through unchanged. Returns the input borrowed when nothing was rewritten.
pub fn bracket_to_html(body: &[u8]) -> Cow<'_, [u8]> {
    WIKI_LINK.replace_all(body, |caps: &Captures<'_>| {
        let span = &caps[0];
        if MARKDOWN_CONSTRUCT.is_match(span) {
            log::debug!("Skipping match: {}", String::from_utf8_lossy(span));
            return span.to_vec();
        }
        match caps.get(1) {
            Some(name) => {
                log::debug!("Rewriting bracket link: {}", String::from_utf8_lossy(span));
                page_anchor(name.as_bytes())
            }
            None => span.to_vec(),
        }
    })
}

/// Rewrite `<a href='/view/Name'>Name</a>` anchors back into `[Name]`.
///
/// Only the exact shape emitted by [`bracket_to_html`] is recognised, with
/// alphanumeric names and visible text equal to the target. Other anchors are
/// left untouched.
pub fn html_to_bracket(body: &[u8]) -> Cow<'_, [u8]> {
    HTML_PAGE_LINK.replace_all(body, |caps: &Captures<'_>| {
        if caps[1] == caps[2] {
            [b"[".as_slice(), &caps[1], b"]".as_slice()].concat()
        } else {
            caps[0].to_vec()
        }
    })
}

fn page_anchor(name: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(name.len() * 2 + 24);
    out.extend_from_slice(b"<a href='/view/");
    out.extend_from_slice(name);
    out.extend_from_slice(b"'>");
    out.extend_from_slice(name);
    out.extend_from_slice(b"</a>");
    out
}
