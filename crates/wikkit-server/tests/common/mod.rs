//! Common test utilities for wiki server integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use tempfile::TempDir;
use tower::ServiceExt;
use wikkit_core::{FileStore, Page, PageStore, Title};
use wikkit_server::{router, AppState, Site};

/// Test harness backed by a real `FileStore` in a temporary directory.
pub struct TestWiki {
    /// Keeps the temporary directory alive
    pub dir: TempDir,
    /// Data directory (not created until the first save)
    pub data_dir: PathBuf,
    /// The application under test
    pub app: Router,
}

impl TestWiki {
    /// Creates a wiki whose data directory does not exist yet.
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let data_dir = dir.path().join("data");
        let store = Arc::new(FileStore::new(&data_dir));
        let app = router(AppState::new(store, site("FrontPage")));
        Self { dir, data_dir, app }
    }

    /// Path of the file backing `title`.
    pub fn page_file(&self, title: &str) -> PathBuf {
        self.data_dir.join(format!("{title}.txt"))
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        send(&self.app, get_request(uri)).await
    }

    pub async fn save(&self, title: &str, encoded_form: &str) -> Response<Body> {
        send(&self.app, save_request(&format!("/save/{title}"), encoded_form)).await
    }
}

impl Default for TestWiki {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory store that counts every call, for asserting what the router
/// does not touch.
#[derive(Default)]
pub struct CountingStore {
    pages: Mutex<HashMap<Title, Vec<u8>>>,
    pub loads: AtomicUsize,
    pub saves: AtomicUsize,
}

impl CountingStore {
    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageStore for CountingStore {
    async fn load(&self, title: &Title) -> wikkit_core::Result<Page> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        let pages = self.pages.lock().unwrap();
        pages
            .get(title)
            .map(|body| Page::new(title.clone(), body.clone()))
            .ok_or_else(|| wikkit_core::Error::not_found(title.as_str()))
    }

    async fn save(&self, page: &Page) -> wikkit_core::Result<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.pages
            .lock()
            .unwrap()
            .insert(page.title.clone(), page.body.clone());
        Ok(())
    }
}

/// Router over a fresh `CountingStore`.
pub fn counting_app(front_page: &str) -> (Router, Arc<CountingStore>) {
    let store = Arc::new(CountingStore::default());
    let app = router(AppState::new(store.clone(), site(front_page)));
    (app, store)
}

pub fn site(front_page: &str) -> Site {
    Site {
        name: "testwiki".to_string(),
        front_page: Title::new(front_page).unwrap(),
    }
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn save_request(uri: &str, encoded_form: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(encoded_form.to_string()))
        .unwrap()
}

pub async fn send(app: &Router, req: Request<Body>) -> Response<Body> {
    app.clone().oneshot(req).await.unwrap()
}

pub async fn body_string(resp: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Asserts a `302 Found` to `location`.
pub fn assert_found(resp: &Response<Body>, location: &str) {
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap().to_str().unwrap(),
        location
    );
}
