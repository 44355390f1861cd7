//! The rendering surface the shell drives.
//!
//! A `Surface` owns the persistent page chrome: the content container, the
//! fixed navbar, the lightbox overlay and the live scroll position. The
//! shell decides *what* changes; the surface only applies it. Elements
//! inside the content are addressed by position (see [`crate::markup`]).

use serde::{Deserialize, Serialize};

/// Vertical scroll position and viewport height, in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub scroll_offset: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(scroll_offset: f64, height: f64) -> Self {
        Self {
            scroll_offset,
            height,
        }
    }
}

/// Rendering backend for the shell.
///
/// Calls are fire-and-forget; a surface that cannot apply an effect (an
/// element that no longer exists, a missing tooltip) silently skips it.
pub trait Surface {
    /// Flag the first element of the current content as leaving.
    fn mark_exiting(&self);

    /// Replace the whole content container with `html`.
    fn replace_content(&self, html: &str);

    fn scroll_to_top(&self);

    fn viewport(&self) -> Viewport;

    fn set_navbar_hidden(&self, hidden: bool);

    /// Whether clicks on nav hash anchors stay in the page. Only the home
    /// page has sections to scroll to; elsewhere the link keeps its default.
    fn set_anchor_scroll(&self, enabled: bool);

    /// Smooth-scroll the element with `id` into view.
    fn scroll_into_view(&self, id: &str);

    /// Start watching the given elements for viewport intersection.
    ///
    /// Replaces any previous watch set.
    fn watch_reveal(&self, positions: &[usize]);

    fn unwatch_reveal(&self, position: usize);

    fn mark_revealed(&self, position: usize);

    fn set_lightbox_source(&self, src: Option<&str>);

    fn set_lightbox_hidden(&self, hidden: bool);

    fn set_lightbox_visible(&self, visible: bool);

    /// Show or hide the tooltip adjacent to the copy control at `control`.
    fn set_tooltip_visible(&self, control: usize, visible: bool);
}

/// Observable state of the lightbox overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightboxView {
    pub src: Option<String>,
    /// `hidden` class: removed from layout
    pub hidden: bool,
    /// `visible` class: faded in
    pub visible: bool,
}

impl Default for LightboxView {
    fn default() -> Self {
        Self {
            src: None,
            hidden: true,
            visible: false,
        }
    }
}

impl LightboxView {
    /// Fully closed: hidden, faded out, no image reference.
    pub fn is_closed(&self) -> bool {
        self.hidden && !self.visible && self.src.is_none()
    }
}
