//! Page persistence.
//!
//! [`PageStore`] is the seam handlers talk to; [`FileStore`] keeps one flat
//! file per page at `{root}/{title}.txt` holding the raw body bytes.
//!
//! # Example
//!
//! ```no_run
//! use wikkit_core::{FileStore, Page, PageStore, Title};
//!
//! # async fn demo() -> wikkit_core::Result<()> {
//! let store = FileStore::new("data");
//! let title = Title::new("FrontPage")?;
//! store.save(&Page::new(title.clone(), "Hello [World]")).await?;
//! let page = store.load(&title).await?;
//! assert_eq!(page.body, b"Hello [World]");
//! # Ok(())
//! # }
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::{Error, Page, Result, Title};

/// Extension of page files inside the data directory.
pub const PAGE_EXTENSION: &str = "txt";

/// Permissions for a newly created data directory (owner only).
#[cfg(unix)]
const DIR_MODE: u32 = 0o700;

/// Permissions for newly written page files (owner read/write).
#[cfg(unix)]
const FILE_MODE: u32 = 0o600;

/// Storage backend for pages.
///
/// Implementations must return [`Error::NotFound`] from `load` when nothing
/// is stored for a title, and must never transform the body on either path.
#[async_trait]
pub trait PageStore: Send + Sync + 'static {
    /// Read the complete stored content for `title`.
    async fn load(&self, title: &Title) -> Result<Page>;

    /// Replace whatever is stored for `page.title` with `page.body`.
    async fn save(&self, page: &Page) -> Result<()>;
}

/// Flat-file page store rooted at a data directory.
#[derive(Clone, Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`. Nothing is touched on disk until the
    /// first save.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The data directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File that holds the body of `title`.
    pub fn path_for(&self, title: &Title) -> PathBuf {
        self.root.join(format!("{title}.{PAGE_EXTENSION}"))
    }

    /// Create the data directory (and parents) if it does not exist yet.
    async fn ensure_root(&self) -> Result<()> {
        let mut builder = fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        builder.mode(DIR_MODE);
        builder
            .create(&self.root)
            .await
            .map_err(|e| Error::io_with_path(e, &self.root))
    }

    /// Write `body` next to `dest` under a unique name, then rename it into
    /// place so readers see either the old or the new content.
    async fn write_atomic(&self, title: &Title, dest: &Path, body: &[u8]) -> Result<()> {
        let tmp = self
            .root
            .join(format!(".{title}.{}.tmp", Uuid::new_v4().simple()));

        if let Err(e) = write_new_file(&tmp, body).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(Error::io_with_path(e, &tmp));
        }

        if let Err(e) = fs::rename(&tmp, dest).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(Error::io_with_path(e, dest));
        }

        Ok(())
    }
}

#[async_trait]
impl PageStore for FileStore {
    async fn load(&self, title: &Title) -> Result<Page> {
        let path = self.path_for(title);
        match fs::read(&path).await {
            Ok(body) => Ok(Page::new(title.clone(), body)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No page stored at {}", path.display());
                Err(Error::not_found(title.as_str()))
            }
            Err(e) => {
                log::warn!("Error loading page {}: {e}", path.display());
                Err(Error::io_with_path(e, &path))
            }
        }
    }

    async fn save(&self, page: &Page) -> Result<()> {
        let path = self.path_for(&page.title);
        self.ensure_root().await?;
        self.write_atomic(&page.title, &path, &page.body).await?;
        log::info!(
            "Saved page '{}' ({} bytes) to {}",
            page.title,
            page.body.len(),
            path.display()
        );
        Ok(())
    }
}

async fn write_new_file(path: &Path, body: &[u8]) -> std::io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    options.mode(FILE_MODE);

    let mut file = options.open(path).await?;
    file.write_all(body).await?;
    file.sync_all().await
}
