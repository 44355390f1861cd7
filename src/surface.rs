//! The shell's surface inside the desktop webview.
//!
//! Persistent chrome (content, navbar, lightbox) lives in Dioxus signals and
//! re-renders reactively; effects on elements inside the fetched content go
//! through the page-side bridge, since those elements are raw markup that
//! Dioxus does not own.

use std::sync::Arc;

use dioxus::prelude::*;
use folio_core::{LightboxView, Surface, Viewport};
use parking_lot::Mutex;
use serde_json::json;

use crate::bridge;

/// Signals holding the persistent chrome.
#[derive(Clone, Copy, PartialEq)]
pub struct Chrome {
    pub content: Signal<String>,
    pub navbar_hidden: Signal<bool>,
    pub lightbox: Signal<LightboxView>,
}

pub struct DesktopSurface {
    chrome: Chrome,
    reveal_threshold: f64,
    /// Last metrics reported by the page
    viewport: Arc<Mutex<Viewport>>,
}

impl DesktopSurface {
    pub fn new(chrome: Chrome, reveal_threshold: f64) -> Self {
        Self {
            chrome,
            reveal_threshold,
            viewport: Arc::new(Mutex::new(Viewport::default())),
        }
    }

    pub fn record_viewport(&self, viewport: Viewport) {
        *self.viewport.lock() = viewport;
    }

    fn run(&self, name: &str, args: serde_json::Value) {
        let _ = document::eval(&bridge::call(name, args));
    }
}

impl Surface for DesktopSurface {
    fn mark_exiting(&self) {
        self.run("markExiting", json!([]));
    }

    fn replace_content(&self, html: &str) {
        let mut content = self.chrome.content;
        content.set(html.to_string());
    }

    fn scroll_to_top(&self) {
        self.viewport.lock().scroll_offset = 0.0;
        self.run("scrollToTop", json!([]));
    }

    fn viewport(&self) -> Viewport {
        *self.viewport.lock()
    }

    fn set_navbar_hidden(&self, hidden: bool) {
        let mut navbar_hidden = self.chrome.navbar_hidden;
        if *navbar_hidden.peek() != hidden {
            navbar_hidden.set(hidden);
        }
    }

    fn set_anchor_scroll(&self, enabled: bool) {
        self.run("setAnchorScroll", json!([enabled]));
    }

    fn scroll_into_view(&self, id: &str) {
        self.run("scrollIntoView", json!([id]));
    }

    fn watch_reveal(&self, positions: &[usize]) {
        self.run("observe", json!([positions, self.reveal_threshold]));
    }

    fn unwatch_reveal(&self, position: usize) {
        self.run("unobserve", json!([position]));
    }

    fn mark_revealed(&self, position: usize) {
        self.run("reveal", json!([position]));
    }

    fn set_lightbox_source(&self, src: Option<&str>) {
        let mut lightbox = self.chrome.lightbox;
        lightbox.write().src = src.map(str::to_string);
    }

    fn set_lightbox_hidden(&self, hidden: bool) {
        let mut lightbox = self.chrome.lightbox;
        lightbox.write().hidden = hidden;
    }

    fn set_lightbox_visible(&self, visible: bool) {
        let mut lightbox = self.chrome.lightbox;
        lightbox.write().visible = visible;
    }

    fn set_tooltip_visible(&self, control: usize, visible: bool) {
        self.run("tooltip", json!([control, visible]));
    }
}
