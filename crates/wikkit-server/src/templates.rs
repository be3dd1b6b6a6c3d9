//! HTML templates.
//!
//! Templates are compiled into the binary by `askama` from
//! `templates/*.html`. `view.html` inserts the rendered body unescaped;
//! `edit.html` escapes the raw source inside its textarea.

use askama::Template;
use axum::response::Html;
use wikkit_core::Page;

use crate::state::Site;
use crate::Result;

/// The read-only page view.
#[derive(Template)]
#[template(path = "view.html")]
pub struct ViewTemplate<'a> {
    /// Site name for the header
    pub site_name: &'a str,
    /// Page title
    pub title: &'a str,
    /// Body already rendered to HTML
    pub body: &'a str,
}

/// The edit form.
#[derive(Template)]
#[template(path = "edit.html")]
pub struct EditTemplate<'a> {
    /// Site name for the header
    pub site_name: &'a str,
    /// Page title
    pub title: &'a str,
    /// Raw page source
    pub body: &'a str,
}

/// Render the view page around an HTML body.
pub fn render_view(site: &Site, page: &Page, body_html: &str) -> Result<Html<String>> {
    let html = ViewTemplate {
        site_name: &site.name,
        title: page.title.as_str(),
        body: body_html,
    }
    .render()?;
    Ok(Html(html))
}

/// Render the edit form for a page's raw source.
pub fn render_edit(site: &Site, page: &Page) -> Result<Html<String>> {
    let source = page.body_text();
    let html = EditTemplate {
        site_name: &site.name,
        title: page.title.as_str(),
        body: &source,
    }
    .render()?;
    Ok(Html(html))
}
