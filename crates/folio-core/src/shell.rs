//! The shell: navigation state, page loading and every interaction handler.
//!
//! `Shell` owns the current page key and the capabilities it acts through
//! (surface, fragment source, pause, clipboard). All fixed-duration waits
//! are explicit suspension points, so a page load reads as one linear
//! routine: exit marker, wait, fetch, swap, re-initialise.

use std::cell::Cell;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::click::{classify, ClickAction, ClickPath};
use crate::clipboard::{copy_with_confirmation, Clipboard, CopyOutcome};
use crate::config::ShellConfig;
use crate::fragment::FragmentSource;
use crate::lightbox::Lightbox;
use crate::markup::Document;
use crate::navbar;
use crate::page::{NavState, PageKey};
use crate::pause::Pause;
use crate::reveal::RevealTracker;
use crate::surface::Surface;

/// Content shown when a fragment fails to load.
pub const LOAD_FAILURE_HTML: &str =
    r#"<p class="text-center text-red-500">Failed to load page content.</p>"#;

/// An input event whose default action can be suppressed.
pub trait InputEvent {
    fn prevent_default(&self);
}

/// Minimal [`InputEvent`] that remembers whether it was suppressed.
#[derive(Debug, Default)]
pub struct PageEvent {
    prevented: Cell<bool>,
}

impl PageEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_prevented(&self) -> bool {
        self.prevented.get()
    }
}

impl InputEvent for PageEvent {
    fn prevent_default(&self) {
        self.prevented.set(true);
    }
}

/// Commands fragment markup can issue (`onclick="showRolePage('x')"` and friends).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    ShowHome,
    ShowGallery,
    ShowRole { role_id: String },
    GoHomeAndScroll { target: String },
}

/// Result of a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
    /// The key was already displayed; nothing happened
    Unchanged,
    /// The fragment was fetched and is now displayed
    Loaded(PageKey),
    /// The fetch failed; the error message is displayed and the key kept
    Failed { key: PageKey, error: String },
}

impl NavOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, NavOutcome::Loaded(_))
    }
}

/// The page-navigation and interaction layer.
pub struct Shell<S, F, P, C> {
    config: ShellConfig,
    state: NavState,
    surface: S,
    source: F,
    pause: P,
    clipboard: C,
    lightbox: Lightbox,
    reveal: RevealTracker,
    document: Mutex<Document>,
}

impl<S, F, P, C> Shell<S, F, P, C>
where
    S: Surface,
    F: FragmentSource,
    P: Pause,
    C: Clipboard,
{
    pub fn new(config: ShellConfig, surface: S, source: F, pause: P, clipboard: C) -> Self {
        let lightbox = Lightbox::new(config.lightbox_fade_in(), config.lightbox_fade_out());
        let reveal = RevealTracker::new(config.reveal_threshold);
        Self {
            config,
            state: NavState::new(),
            surface,
            source,
            pause,
            clipboard,
            lightbox,
            reveal,
            document: Mutex::new(Document::default()),
        }
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn source(&self) -> &F {
        &self.source
    }

    pub fn pause(&self) -> &P {
        &self.pause
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn reveal(&self) -> &RevealTracker {
        &self.reveal
    }

    /// Key of the fragment on display (empty before the first load).
    pub fn current_page(&self) -> PageKey {
        self.state.current()
    }

    pub fn is_home(&self) -> bool {
        self.state.is_current(&self.config.home_key())
    }

    /// Outline of the content on display.
    pub fn document(&self) -> Document {
        self.document.lock().clone()
    }

    /// Initial load of the home page.
    pub async fn start(&self) -> NavOutcome {
        tracing::info!(home = %self.config.home_page, "Starting shell");
        self.navigate_to(self.config.home_key()).await
    }

    /// Replace the content with the fragment addressed by `key`.
    ///
    /// Never fails: a load failure shows the fixed error message and leaves
    /// the current key untouched so the same key can be retried.
    pub async fn navigate_to(&self, key: PageKey) -> NavOutcome {
        if self.state.is_current(&key) {
            tracing::trace!(page = %key, "Already displayed");
            return NavOutcome::Unchanged;
        }

        tracing::debug!(page = %key, "Navigating");
        self.surface.mark_exiting();
        self.pause.pause(self.config.exit_transition()).await;

        match self.source.fetch(&key).await {
            Ok(html) => {
                let doc = Document::parse(&html);
                self.surface.replace_content(&html);
                self.state.set_current(key.clone());
                self.surface.set_anchor_scroll(self.is_home());
                self.surface.scroll_to_top();
                self.update_navbar();
                self.reveal.init(&self.surface, &doc);
                *self.document.lock() = doc;
                tracing::info!(page = %key, bytes = html.len(), "Page loaded");
                NavOutcome::Loaded(key)
            }
            Err(e) => {
                tracing::error!(page = %key, "Error loading page: {}", e);
                let doc = Document::parse(LOAD_FAILURE_HTML);
                self.surface.replace_content(LOAD_FAILURE_HTML);
                self.reveal.init(&self.surface, &doc);
                *self.document.lock() = doc;
                NavOutcome::Failed {
                    key,
                    error: e.to_string(),
                }
            }
        }
    }

    /// Re-evaluate navbar visibility. Returns whether it is shown.
    pub fn update_navbar(&self) -> bool {
        navbar::update(&self.surface, self.is_home(), self.config.navbar_reveal_ratio)
    }

    /// Scroll events only affect the navbar.
    pub fn on_scroll(&self) -> bool {
        self.update_navbar()
    }

    /// Intersection report for the element at `position`.
    ///
    /// Returns whether the element got revealed by this report.
    pub async fn on_intersection(&self, position: usize, ratio: f64, intersecting: bool) -> bool {
        match self
            .reveal
            .on_intersection(&self.surface, position, ratio, intersecting)
        {
            Some(pending) => self.reveal.reveal(&self.surface, &self.pause, pending).await,
            None => false,
        }
    }

    /// Handle a click inside the content container.
    pub async fn on_click(&self, path: &ClickPath) -> Option<ClickAction> {
        let action = classify(path)?;
        tracing::debug!(?action, "Click");
        match &action {
            ClickAction::ScrollToAnchor(id) => {
                self.scroll_to_anchor(id);
            }
            ClickAction::OpenLightbox(src) => self.open_lightbox(src).await,
            ClickAction::Copy { text, control } => {
                self.copy(text, *control).await;
            }
        }
        Some(action)
    }

    /// Smooth-scroll to `id` on the home page. Anchors mean nothing elsewhere.
    pub fn scroll_to_anchor(&self, id: &str) -> bool {
        if !self.is_home() {
            tracing::debug!(id, "Ignoring anchor outside the home page");
            return false;
        }
        self.scroll_if_present(id)
    }

    fn scroll_if_present(&self, id: &str) -> bool {
        let present = self.document.lock().by_id(id).is_some();
        if present {
            self.surface.scroll_into_view(id);
        }
        present
    }

    pub async fn open_lightbox(&self, src: &str) {
        self.lightbox.open(&self.surface, &self.pause, src).await;
    }

    pub async fn close_lightbox(&self) {
        self.lightbox.close(&self.surface, &self.pause).await;
    }

    /// Copy `text` and confirm next to the copy control at `control`.
    pub async fn copy(&self, text: &str, control: usize) -> CopyOutcome {
        copy_with_confirmation(
            &self.surface,
            &self.pause,
            &self.clipboard,
            text,
            control,
            self.config.tooltip(),
        )
        .await
    }

    pub async fn show_home_page(&self, event: Option<&dyn InputEvent>) -> NavOutcome {
        if let Some(event) = event {
            event.prevent_default();
        }
        self.navigate_to(self.config.home_key()).await
    }

    pub async fn show_gallery_page(&self, event: Option<&dyn InputEvent>) -> NavOutcome {
        if let Some(event) = event {
            event.prevent_default();
        }
        self.navigate_to(self.config.gallery_key()).await
    }

    pub async fn show_role_page(&self, role_id: &str) -> NavOutcome {
        self.navigate_to(self.config.role_key(role_id)).await
    }

    /// Load the home page if needed, then scroll to `target_id`
    /// (`#about` or `about`). Returns whether a scroll happened.
    pub async fn go_home_and_scroll(&self, target_id: &str) -> bool {
        if !self.is_home() {
            self.navigate_to(self.config.home_key()).await;
        }
        self.scroll_if_present(target_id.trim_start_matches('#'))
    }

    /// Run a command issued from page markup.
    pub async fn execute(&self, command: Command) {
        tracing::debug!(?command, "Command");
        match command {
            Command::ShowHome => {
                self.show_home_page(None).await;
            }
            Command::ShowGallery => {
                self.show_gallery_page(None).await;
            }
            Command::ShowRole { role_id } => {
                self.show_role_page(&role_id).await;
            }
            Command::GoHomeAndScroll { target } => {
                self.go_home_and_scroll(&target).await;
            }
        }
    }
}
