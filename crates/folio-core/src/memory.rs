//! In-memory surface.
//!
//! Models the shell chrome as plain data so the whole interaction layer
//! can run headless. Every effect the shell applies is recorded and can be
//! inspected through [`MemorySurface::snapshot`].

use std::collections::{BTreeMap, BTreeSet};

use parking_lot::Mutex;

use crate::markup::Document;
use crate::surface::{LightboxView, Surface, Viewport};

/// Point-in-time copy of everything a [`MemorySurface`] holds.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceSnapshot {
    pub content: String,
    /// First content element carries the exit marker
    pub exiting: bool,
    pub viewport: Viewport,
    pub navbar_hidden: bool,
    /// Nav hash anchors are kept in the page
    pub anchor_scroll: bool,
    /// Ids scrolled into view, oldest first
    pub scrolled_to: Vec<String>,
    /// Positions currently watched for intersection
    pub watched: BTreeSet<usize>,
    /// Every `mark_revealed` call, in order
    pub revealed: Vec<usize>,
    pub lightbox: LightboxView,
    /// Tooltip visibility keyed by the tooltip element's position
    pub tooltips: BTreeMap<usize, bool>,
    /// Number of content replacements so far
    pub replacements: usize,
}

impl SurfaceSnapshot {
    pub fn tooltip_visible(&self, tooltip: usize) -> bool {
        self.tooltips.get(&tooltip).copied().unwrap_or(false)
    }
}

struct Inner {
    snapshot: SurfaceSnapshot,
    document: Document,
}

/// A [`Surface`] backed by memory.
pub struct MemorySurface {
    inner: Mutex<Inner>,
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new(800.0)
    }
}

impl MemorySurface {
    /// Empty content, scrolled to the top of a viewport `height` px tall.
    pub fn new(height: f64) -> Self {
        Self {
            inner: Mutex::new(Inner {
                snapshot: SurfaceSnapshot {
                    content: String::new(),
                    exiting: false,
                    viewport: Viewport::new(0.0, height),
                    navbar_hidden: true,
                    anchor_scroll: false,
                    scrolled_to: Vec::new(),
                    watched: BTreeSet::new(),
                    revealed: Vec::new(),
                    lightbox: LightboxView::default(),
                    tooltips: BTreeMap::new(),
                    replacements: 0,
                },
                document: Document::default(),
            }),
        }
    }

    pub fn snapshot(&self) -> SurfaceSnapshot {
        self.inner.lock().snapshot.clone()
    }

    /// Outline of the current content.
    pub fn document(&self) -> Document {
        self.inner.lock().document.clone()
    }

    /// Simulate the user scrolling.
    pub fn scroll_to(&self, offset: f64) {
        self.inner.lock().snapshot.viewport.scroll_offset = offset;
    }

    /// Simulate a window resize.
    pub fn resize(&self, height: f64) {
        self.inner.lock().snapshot.viewport.height = height;
    }
}

impl Surface for MemorySurface {
    fn mark_exiting(&self) {
        let mut inner = self.inner.lock();
        if !inner.document.is_empty() {
            inner.snapshot.exiting = true;
        }
    }

    fn replace_content(&self, html: &str) {
        let mut inner = self.inner.lock();
        inner.document = Document::parse(html);
        let snap = &mut inner.snapshot;
        snap.content = html.to_string();
        snap.exiting = false;
        snap.watched.clear();
        snap.tooltips.clear();
        snap.replacements += 1;
    }

    fn scroll_to_top(&self) {
        self.inner.lock().snapshot.viewport.scroll_offset = 0.0;
    }

    fn viewport(&self) -> Viewport {
        self.inner.lock().snapshot.viewport
    }

    fn set_navbar_hidden(&self, hidden: bool) {
        self.inner.lock().snapshot.navbar_hidden = hidden;
    }

    fn set_anchor_scroll(&self, enabled: bool) {
        self.inner.lock().snapshot.anchor_scroll = enabled;
    }

    fn scroll_into_view(&self, id: &str) {
        let mut inner = self.inner.lock();
        if inner.document.by_id(id).is_some() {
            inner.snapshot.scrolled_to.push(id.to_string());
        }
    }

    fn watch_reveal(&self, positions: &[usize]) {
        self.inner.lock().snapshot.watched = positions.iter().copied().collect();
    }

    fn unwatch_reveal(&self, position: usize) {
        self.inner.lock().snapshot.watched.remove(&position);
    }

    fn mark_revealed(&self, position: usize) {
        let mut inner = self.inner.lock();
        if inner.document.get(position).is_some() {
            inner.snapshot.revealed.push(position);
        }
    }

    fn set_lightbox_source(&self, src: Option<&str>) {
        self.inner.lock().snapshot.lightbox.src = src.map(str::to_string);
    }

    fn set_lightbox_hidden(&self, hidden: bool) {
        self.inner.lock().snapshot.lightbox.hidden = hidden;
    }

    fn set_lightbox_visible(&self, visible: bool) {
        self.inner.lock().snapshot.lightbox.visible = visible;
    }

    fn set_tooltip_visible(&self, control: usize, visible: bool) {
        let mut inner = self.inner.lock();
        let Some(tooltip) = inner.document.next_sibling(control).map(|el| el.position) else {
            return;
        };
        inner.snapshot.tooltips.insert(tooltip, visible);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_marker_needs_content() {
        let surface = MemorySurface::default();
        surface.mark_exiting();
        assert!(!surface.snapshot().exiting);

        surface.replace_content("<main>hi</main>");
        surface.mark_exiting();
        assert!(surface.snapshot().exiting);

        surface.replace_content("<main>next</main>");
        assert!(!surface.snapshot().exiting);
        assert_eq!(surface.snapshot().replacements, 2);
    }

    #[test]
    fn test_scroll_into_view_requires_target() {
        let surface = MemorySurface::default();
        surface.replace_content(r#"<section id="about"></section>"#);

        surface.scroll_into_view("missing");
        surface.scroll_into_view("about");
        assert_eq!(surface.snapshot().scrolled_to, vec!["about".to_string()]);
    }

    #[test]
    fn test_tooltip_resolves_to_next_sibling() {
        let surface = MemorySurface::default();
        surface.replace_content(
            r#"<div><button class="copy-btn" data-copy="x"><i></i></button><span class="tooltip"></span></div>"#,
        );
        surface.set_tooltip_visible(1, true);
        let snap = surface.snapshot();
        assert!(snap.tooltip_visible(3));
        assert!(!snap.tooltip_visible(2));
    }

    #[test]
    fn test_tooltip_without_sibling_is_skipped() {
        let surface = MemorySurface::default();
        surface.replace_content(r#"<button class="copy-btn" data-copy="x"></button>"#);
        surface.set_tooltip_visible(0, true);
        assert!(surface.snapshot().tooltips.is_empty());
    }

    #[test]
    fn test_scroll_and_resize() {
        let surface = MemorySurface::new(600.0);
        surface.scroll_to(1200.0);
        assert_eq!(surface.viewport(), Viewport::new(1200.0, 600.0));

        surface.resize(900.0);
        surface.scroll_to_top();
        assert_eq!(surface.viewport(), Viewport::new(0.0, 900.0));
    }
}
