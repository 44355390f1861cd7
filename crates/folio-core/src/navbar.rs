//! Scroll-reactive navbar.
//!
//! The navbar belongs to the home page: it slides in once the hero section
//! is mostly scrolled away and stays hidden on every other page.

use crate::surface::{Surface, Viewport};

/// Whether the navbar should be shown.
///
/// True only on the home page, once the scroll offset is strictly past
/// `ratio` of the viewport height.
pub fn should_reveal(is_home: bool, viewport: Viewport, ratio: f64) -> bool {
    is_home && viewport.scroll_offset > viewport.height * ratio
}

/// Apply [`should_reveal`] to the surface's navbar. Returns the new visibility.
pub fn update<S: Surface + ?Sized>(surface: &S, is_home: bool, ratio: f64) -> bool {
    let reveal = should_reveal(is_home, surface.viewport(), ratio);
    surface.set_navbar_hidden(!reveal);
    reveal
}
