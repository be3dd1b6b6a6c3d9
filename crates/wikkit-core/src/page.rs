//! The page model.
//!
//! A [`Page`] is a [`Title`] plus an opaque byte body. Titles are validated on
//! construction, so any `Title` in hand is safe to use as a file name and as a
//! URL path segment.

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// A validated page identifier matching `[A-Za-z0-9]+`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Title(String);

impl Title {
    /// Validate and wrap a title.
    ///
    /// # Example
    ///
    /// ```
    /// use wikkit_core::Title;
    ///
    /// assert!(Title::new("FrontPage").is_ok());
    /// assert!(Title::new("Page2").is_ok());
    /// assert!(Title::new("bad name!").is_err());
    /// assert!(Title::new("").is_err());
    /// ```
    pub fn new(title: impl Into<String>) -> Result<Self> {
        let title = title.into();
        if is_valid_title(&title) {
            Ok(Self(title))
        } else {
            Err(Error::InvalidTitle { title })
        }
    }

    /// The title as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path of the page's view route.
    pub fn view_path(&self) -> String {
        format!("/view/{}", self.0)
    }

    /// Path of the page's edit route.
    pub fn edit_path(&self) -> String {
        format!("/edit/{}", self.0)
    }
}

/// Returns whether `title` is non-empty and entirely ASCII alphanumeric.
pub fn is_valid_title(title: &str) -> bool {
    !title.is_empty() && title.bytes().all(|b| b.is_ascii_alphanumeric())
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Title {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Title {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Title {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

/// A titled unit of stored text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    /// Page identifier
    pub title: Title,
    /// Raw body: Markdown source with bracket links, exactly as saved
    pub body: Vec<u8>,
}

impl Page {
    /// Create a page with the given body.
    pub fn new(title: Title, body: impl Into<Vec<u8>>) -> Self {
        Self {
            title,
            body: body.into(),
        }
    }

    /// Create a page that has no content yet.
    pub fn empty(title: Title) -> Self {
        Self {
            title,
            body: Vec::new(),
        }
    }

    /// Body decoded as UTF-8, replacing invalid sequences.
    pub fn body_text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}
