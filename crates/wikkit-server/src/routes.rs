//! Route table.

use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the application router.
///
/// | Method | Path            | Handler                  |
/// |--------|-----------------|--------------------------|
/// | GET    | `/`             | [`handlers::front_page`] |
/// | GET    | `/view/{title}` | [`handlers::view`]       |
/// | GET    | `/edit/{title}` | [`handlers::edit`]       |
/// | POST   | `/save/{title}` | [`handlers::save`]       |
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::front_page))
        .route("/view/{title}", get(handlers::view))
        .route("/edit/{title}", get(handlers::edit))
        .route("/save/{title}", post(handlers::save))
        .fallback(handlers::fallback)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
