//! # wikkit-server
//!
//! HTTP server for the Wikkit wiki.
//!
//! - [`routes`]: `/`, `/view/{title}`, `/edit/{title}`, `/save/{title}`
//! - [`handlers`]: the view/edit/save actions
//! - [`extract`]: title validation as an axum extractor
//! - [`templates`]: compiled `askama` page templates
//! - [`config`]: TOML configuration
//! - [`server`]: router assembly and the serve loop

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;
pub mod templates;

pub use config::WikiConfig;
pub use error::{Error, Result};
pub use routes::router;
pub use server::{app, serve};
pub use state::{AppState, Site};
