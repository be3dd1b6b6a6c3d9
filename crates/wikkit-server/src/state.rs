//! Shared, read-only request state.

use std::sync::Arc;

use wikkit_core::{PageStore, Title};

/// Site-wide values the templates and front-page redirect need.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Site {
    /// Name shown in page headers
    pub name: String,
    /// Page that `/` redirects to
    pub front_page: Title,
}

/// State handed to every handler. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Page persistence
    pub store: Arc<dyn PageStore>,
    /// Site settings
    pub site: Arc<Site>,
}

impl AppState {
    /// Bundle a store and site settings.
    pub fn new(store: Arc<dyn PageStore>, site: Site) -> Self {
        Self {
            store,
            site: Arc::new(site),
        }
    }
}
