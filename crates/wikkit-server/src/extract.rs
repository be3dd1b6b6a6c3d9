//! Request extractors.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use wikkit_core::Title;

use crate::Error;

/// The `{title}` path segment, validated against `[A-Za-z0-9]+`.
///
/// Rejects with a 404 before the handler runs, so an invalid title never
/// reaches the page store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageTitle(pub Title);

impl<S> FromRequestParts<S> for PageTitle
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| wikkit_core::Error::InvalidTitle {
                title: rejection.body_text(),
            })?;

        match Title::new(raw) {
            Ok(title) => Ok(Self(title)),
            Err(e) => {
                tracing::debug!(error = %e, "Rejecting request path");
                Err(e.into())
            }
        }
    }
}
