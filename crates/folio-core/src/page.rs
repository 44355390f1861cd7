//! Page keys and the navigation state that tracks the displayed fragment.

use std::fmt;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Key of the home fragment.
pub const HOME_PAGE: &str = "pages/home.html";

/// Key of the gallery fragment.
pub const GALLERY_PAGE: &str = "pages/gallery.html";

/// Directory holding the per-role fragments.
pub const ROLE_DIR: &str = "pages";

/// Opaque identifier of a fetchable fragment (e.g. `pages/gallery.html`).
///
/// The empty key is the state before the first successful load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageKey(String);

impl PageKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The empty key.
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn home() -> Self {
        Self::new(HOME_PAGE)
    }

    pub fn gallery() -> Self {
        Self::new(GALLERY_PAGE)
    }

    /// Key of a role fragment: `pages/<role_id>.html`.
    pub fn role(role_id: &str) -> Self {
        Self::role_in(ROLE_DIR, role_id)
    }

    /// Key of a role fragment under a custom directory.
    pub fn role_in(dir: &str, role_id: &str) -> Self {
        let dir = dir.trim_end_matches('/');
        if dir.is_empty() {
            Self(format!("{}.html", role_id))
        } else {
            Self(format!("{}/{}.html", dir, role_id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PageKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PageKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// The single piece of navigation state: which fragment is displayed.
///
/// Only a successful page load writes it.
#[derive(Debug, Default)]
pub struct NavState {
    current: Mutex<PageKey>,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key of the fragment currently displayed.
    pub fn current(&self) -> PageKey {
        self.current.lock().clone()
    }

    pub fn is_current(&self, key: &PageKey) -> bool {
        *self.current.lock() == *key
    }

    pub(crate) fn set_current(&self, key: PageKey) {
        *self.current.lock() = key;
    }
}
