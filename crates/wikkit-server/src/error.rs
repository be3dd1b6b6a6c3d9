//! Error types for wikkit-server

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Result type alias for wikkit-server operations
pub type Result<T> = std::result::Result<T, Error>;

/// Body sent with every 404.
pub const NOT_FOUND_BODY: &str = "404 page not found\n";

/// Errors that can occur in wikkit-server
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from wikkit-core
    #[error(transparent)]
    Core(#[from] wikkit_core::Error),

    /// Template rendering failed
    #[error("template error: {0}")]
    Template(#[from] askama::Error),

    /// Configuration is missing or invalid
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error (binding the listener, serving)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// HTTP status this error maps to when it ends a request.
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Core(wikkit_core::Error::InvalidTitle { .. })
            | Error::Core(wikkit_core::Error::NotFound { .. }) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::NOT_FOUND {
            return not_found();
        }

        tracing::error!(error = %self, "Request failed");
        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            format!("{self}\n"),
        )
            .into_response()
    }
}

/// Plain 404 response. Carries no detail about why the path was rejected.
pub fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        NOT_FOUND_BODY,
    )
        .into_response()
}
