//! Persistent chrome components for Folio.

mod lightbox;
mod navbar;

pub use lightbox::Lightbox;
pub use navbar::Navbar;
