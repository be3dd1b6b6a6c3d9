//! Wikkit Core: page model, errors, and page storage.
//!
//! This crate has no internal Wikkit dependencies. It provides:
//!
//! - [`page`]: [`Title`] validation and the [`Page`] type
//! - [`store`]: the [`PageStore`] trait and the flat-file [`FileStore`]
//! - [`error`]: Error types and Result alias
//!
//! Stored bodies are never transformed: whatever bytes a page is saved with
//! are exactly what a later load returns.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod page;
pub mod store;

#[cfg(test)]
mod proptests;

pub use error::{Error, Result};
pub use page::{is_valid_title, Page, Title};
pub use store::{FileStore, PageStore};
