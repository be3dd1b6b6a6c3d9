//! Request handlers for the view, edit, and save actions.
//!
//! Every handler is stateless: the page is rebuilt from the store (or the
//! submitted form) on each request.

use axum::extract::{Form, State};
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use wikkit_core::Page;

use crate::error::not_found;
use crate::extract::PageTitle;
use crate::state::AppState;
use crate::{templates, Result};

/// Path prefixes owned by the page actions. Unmatched paths under these are
/// 404s rather than front-page redirects.
const ACTION_PREFIXES: [&str; 3] = ["/view/", "/edit/", "/save/"];

/// Form submitted by the edit page.
#[derive(Debug, Default, Deserialize)]
pub struct SaveForm {
    /// New page source; a missing field saves an empty page
    #[serde(default)]
    pub body: String,
}

/// `GET /`: redirect to the configured front page.
pub async fn front_page(State(state): State<AppState>) -> Response {
    found(&state.site.front_page.view_path())
}

/// `GET /view/{title}`: render a stored page, or send the client to the
/// editor when the page does not exist yet.
pub async fn view(State(state): State<AppState>, PageTitle(title): PageTitle) -> Result<Response> {
    let page = match state.store.load(&title).await {
        Ok(page) => page,
        Err(e) if e.is_not_found() => {
            tracing::debug!(%title, "Page missing, redirecting to editor");
            return Ok(found(&title.edit_path()));
        }
        Err(e) => return Err(e.into()),
    };

    let body_html = wikkit_content::render_view_body(&page.body);
    Ok(templates::render_view(&state.site, &page, &body_html)?.into_response())
}

/// `GET /edit/{title}`: show the raw source in an edit form. A missing page
/// opens an empty form.
pub async fn edit(State(state): State<AppState>, PageTitle(title): PageTitle) -> Result<Response> {
    let page = match state.store.load(&title).await {
        Ok(page) => page,
        Err(e) if e.is_not_found() => Page::empty(title),
        Err(e) => return Err(e.into()),
    };

    Ok(templates::render_edit(&state.site, &page)?.into_response())
}

/// `POST /save/{title}`: persist the submitted body verbatim, then redirect
/// to the view page.
pub async fn save(
    State(state): State<AppState>,
    PageTitle(title): PageTitle,
    Form(form): Form<SaveForm>,
) -> Result<Response> {
    let page = Page::new(title, form.body);
    state.store.save(&page).await?;
    tracing::info!(title = %page.title, bytes = page.body.len(), "Page saved");
    Ok(found(&page.title.view_path()))
}

/// Anything no route matched.
pub async fn fallback(State(state): State<AppState>, uri: Uri) -> Response {
    if ACTION_PREFIXES.iter().any(|prefix| uri.path().starts_with(prefix)) {
        not_found()
    } else {
        found(&state.site.front_page.view_path())
    }
}

/// A `302 Found` redirect.
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}
