//! Fragment sources.
//!
//! A page key resolves to an HTML fragment through a [`FragmentSource`].
//! Any failure (missing resource, non-success status, transport error) is
//! reported as a [`ShellError`] load failure; the navigator decides what
//! the user sees.

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::{ShellError, ShellResult};
use crate::page::PageKey;

/// Fetches the fragment addressed by a page key.
#[async_trait(?Send)]
pub trait FragmentSource {
    async fn fetch(&self, key: &PageKey) -> ShellResult<String>;
}

/// Fragments served from a site directory on disk.
///
/// `pages/gallery.html` resolves to `<root>/pages/gallery.html`.
#[derive(Debug, Clone)]
pub struct SiteDir {
    root: PathBuf,
}

impl SiteDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the fragment for `key`, refusing keys that leave the root.
    pub fn resolve(&self, key: &PageKey) -> ShellResult<PathBuf> {
        let relative = Path::new(key.as_str());
        let contained = !key.is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if !contained {
            return Err(ShellError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait(?Send)]
impl FragmentSource for SiteDir {
    async fn fetch(&self, key: &PageKey) -> ShellResult<String> {
        let path = self.resolve(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(html) => Ok(html),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ShellError::FragmentNotFound(key.to_string()))
            }
            Err(e) => Err(ShellError::Transport(format!("{}: {}", path.display(), e))),
        }
    }
}

/// Canned response for a key in [`StaticPages`].
#[derive(Debug, Clone)]
enum Response {
    Page(String),
    Status(u16),
    Transport(String),
}

#[derive(Debug, Default)]
struct StaticInner {
    responses: HashMap<PageKey, Response>,
    latency: HashMap<PageKey, Duration>,
    fetches: Vec<PageKey>,
}

/// In-memory fragments with scriptable failures and latency.
///
/// Unknown keys answer with status 404.
#[derive(Debug, Default)]
pub struct StaticPages {
    inner: Mutex<StaticInner>,
}

impl StaticPages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, key: impl Into<PageKey>, html: impl Into<String>) -> Self {
        self.insert_page(key, html);
        self
    }

    pub fn with_status(self, key: impl Into<PageKey>, status: u16) -> Self {
        self.inner
            .lock()
            .responses
            .insert(key.into(), Response::Status(status));
        self
    }

    pub fn with_transport_error(self, key: impl Into<PageKey>, message: impl Into<String>) -> Self {
        self.inner
            .lock()
            .responses
            .insert(key.into(), Response::Transport(message.into()));
        self
    }

    /// Delay every fetch of `key` by `latency`.
    pub fn with_latency(self, key: impl Into<PageKey>, latency: Duration) -> Self {
        self.inner.lock().latency.insert(key.into(), latency);
        self
    }

    /// Add or replace a page after construction.
    pub fn insert_page(&self, key: impl Into<PageKey>, html: impl Into<String>) {
        self.inner
            .lock()
            .responses
            .insert(key.into(), Response::Page(html.into()));
    }

    /// Every fetch issued so far, oldest first.
    pub fn fetches(&self) -> Vec<PageKey> {
        self.inner.lock().fetches.clone()
    }

    pub fn fetch_count(&self, key: &PageKey) -> usize {
        self.inner.lock().fetches.iter().filter(|k| *k == key).count()
    }
}

#[async_trait(?Send)]
impl FragmentSource for StaticPages {
    async fn fetch(&self, key: &PageKey) -> ShellResult<String> {
        let latency = {
            let mut inner = self.inner.lock();
            inner.fetches.push(key.clone());
            inner.latency.get(key).copied()
        };
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }

        let response = self.inner.lock().responses.get(key).cloned();
        match response {
            Some(Response::Page(html)) => Ok(html),
            Some(Response::Status(status)) => Err(ShellError::FragmentStatus {
                key: key.to_string(),
                status,
            }),
            Some(Response::Transport(message)) => Err(ShellError::Transport(message)),
            None => Err(ShellError::FragmentStatus {
                key: key.to_string(),
                status: 404,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_site_dir_reads_fragment() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("pages")).unwrap();
        std::fs::write(temp.path().join("pages/home.html"), "<section>home</section>").unwrap();

        let source = SiteDir::new(temp.path());
        let html = source.fetch(&PageKey::home()).await.unwrap();
        assert_eq!(html, "<section>home</section>");
    }

    #[tokio::test]
    async fn test_site_dir_missing_fragment() {
        let temp = TempDir::new().unwrap();
        let source = SiteDir::new(temp.path());

        let err = source.fetch(&PageKey::role("ghost")).await.unwrap_err();
        assert!(matches!(err, ShellError::FragmentNotFound(ref k) if k == "pages/ghost.html"));
    }

    #[test]
    fn test_site_dir_refuses_escaping_keys() {
        let source = SiteDir::new("/srv/site");
        for key in ["../secret.html", "/etc/passwd", "pages/../../x.html", ""] {
            let err = source.resolve(&PageKey::new(key)).unwrap_err();
            assert!(matches!(err, ShellError::InvalidKey(_)), "key {:?} accepted", key);
        }
        assert_eq!(
            source.resolve(&PageKey::gallery()).unwrap(),
            PathBuf::from("/srv/site/pages/gallery.html")
        );
    }

    #[tokio::test]
    async fn test_static_pages_responses() {
        let pages = StaticPages::new()
            .with_page("a.html", "<p>a</p>")
            .with_status("b.html", 500)
            .with_transport_error("c.html", "connection reset");

        assert_eq!(pages.fetch(&"a.html".into()).await.unwrap(), "<p>a</p>");
        assert!(matches!(
            pages.fetch(&"b.html".into()).await,
            Err(ShellError::FragmentStatus { status: 500, .. })
        ));
        assert!(matches!(
            pages.fetch(&"c.html".into()).await,
            Err(ShellError::Transport(_))
        ));
        assert!(matches!(
            pages.fetch(&"d.html".into()).await,
            Err(ShellError::FragmentStatus { status: 404, .. })
        ));
        assert_eq!(pages.fetches().len(), 4);
        assert_eq!(pages.fetch_count(&"a.html".into()), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_static_pages_latency() {
        let pages = StaticPages::new()
            .with_page("slow.html", "<p>slow</p>")
            .with_latency("slow.html", Duration::from_secs(2));

        let start = tokio::time::Instant::now();
        pages.fetch(&"slow.html".into()).await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(2));
    }
}
