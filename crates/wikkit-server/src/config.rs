//! Server configuration.
//!
//! Loaded from an optional TOML file; every field has a default so an empty
//! (or absent) file yields a working server:
//!
//! ```toml
//! [server]
//! listen = "0.0.0.0:8000"
//!
//! [storage]
//! data_dir = "data"
//!
//! [site]
//! name = "wikkit"
//! front_page = "FrontPage"
//! ```

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wikkit_core::Title;

use crate::{Error, Result};

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WikiConfig {
    /// Listener settings
    pub server: ServerConfig,
    /// Page storage settings
    pub storage: StorageConfig,
    /// Site presentation settings
    pub site: SiteConfig,
}

/// Listener settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Address to bind
    pub listen: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([0, 0, 0, 0], 8000)),
        }
    }
}

/// Page storage settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageConfig {
    /// Directory holding one `{title}.txt` per page
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
        }
    }
}

/// Site presentation settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Name shown in page headers
    pub name: String,
    /// Page that `/` redirects to
    pub front_page: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "wikkit".to_string(),
            front_page: "FrontPage".to_string(),
        }
    }
}

impl WikiConfig {
    /// Load configuration from `path`, or return defaults when no path is
    /// given. The result is validated.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path).map_err(|e| {
                    Error::config(format!("Failed to read {}: {e}", path.display()))
                })?;
                Self::from_toml_str(&content).map_err(|e| match e {
                    Error::Config { message } => {
                        Error::config(format!("{}: {message}", path.display()))
                    }
                    other => other,
                })?
            }
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text (not validated).
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e.to_string()))
    }

    /// Serialize to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Check values that the type system cannot.
    pub fn validate(&self) -> Result<()> {
        self.front_page()?;
        if self.site.name.trim().is_empty() {
            return Err(Error::config("site.name must not be empty"));
        }
        Ok(())
    }

    /// The configured front page as a validated title.
    pub fn front_page(&self) -> Result<Title> {
        Title::new(self.site.front_page.as_str()).map_err(|_| {
            Error::config(format!(
                "site.front_page {:?} must match [A-Za-z0-9]+",
                self.site.front_page
            ))
        })
    }
}
