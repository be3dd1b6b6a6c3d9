//! Property-based tests for link translation.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::links::{bracket_to_html, html_to_bracket};
    use proptest::prelude::*;

    /// Text that cannot form or touch a link on its own.
    fn plain_text() -> impl Strategy<Value = String> {
        "[A-Za-z0-9 .,;:!?\n]{0,24}"
    }

    fn bracket_link() -> impl Strategy<Value = String> {
        "[A-Za-z]{1,16}".prop_map(|name| format!("[{name}]"))
    }

    fn markdown_link() -> impl Strategy<Value = String> {
        ("[A-Za-z0-9 ]{0,16}", "[a-z0-9:/.#?=&_-]{0,32}")
            .prop_map(|(text, url)| format!("[{text}]({url})"))
    }

    proptest! {
        #[test]
        fn test_bracket_html_inversion(
            parts in proptest::collection::vec((plain_text(), bracket_link()), 0..8),
            tail in plain_text(),
        ) {
            let mut body = String::new();
            for (text, link) in &parts {
                body.push_str(text);
                body.push_str(link);
            }
            body.push_str(&tail);

            let html = bracket_to_html(body.as_bytes());
            let back = html_to_bracket(&html);
            prop_assert_eq!(&*back, body.as_bytes());
        }

        #[test]
        fn test_every_bracket_link_becomes_an_anchor(name in "[A-Za-z]{1,16}") {
            let body = format!("x [{name}] y");
            let html = bracket_to_html(body.as_bytes());
            let expected = format!("x <a href='/view/{name}'>{name}</a> y");
            prop_assert_eq!(&*html, expected.as_bytes());
        }

        #[test]
        fn test_markdown_links_untouched(
            before in plain_text(),
            link in markdown_link(),
            after in plain_text(),
        ) {
            let body = format!("{before}{link}{after}");
            let html = bracket_to_html(body.as_bytes());
            prop_assert_eq!(&*html, body.as_bytes());
        }

        #[test]
        fn test_text_without_brackets_untouched(body in "[^\\[]{0,64}") {
            let html = bracket_to_html(body.as_bytes());
            prop_assert_eq!(&*html, body.as_bytes());
        }
    }
}
