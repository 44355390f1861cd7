//! Folio Core Library
//!
//! Page navigation and interaction layer for a single-page portfolio shell.
//!
//! ## Overview
//!
//! A persistent shell (navbar, content container, lightbox overlay) shows
//! one HTML fragment at a time. The [`Shell`] swaps fragments in behind an
//! exit transition, keeps the navbar in step with the scroll position,
//! reveals flagged elements as they scroll into view, opens gallery images
//! in the lightbox and copies contact details to the clipboard.
//!
//! Everything platform-specific sits behind a capability trait:
//!
//! - [`Surface`]: the document the shell mutates
//! - [`FragmentSource`]: where fragments come from
//! - [`Pause`]: waits standing in for CSS transitions
//! - [`Clipboard`]: the system clipboard
//!
//! ## Quick Start
//!
//! ```ignore
//! use folio_core::{Immediate, MemoryClipboard, MemorySurface, Shell, ShellConfig, StaticPages};
//!
//! let pages = StaticPages::new()
//!     .with_page("pages/home.html", "<section id=\"about\">Hi</section>");
//! let shell = Shell::new(
//!     ShellConfig::default(),
//!     MemorySurface::default(),
//!     pages,
//!     Immediate::new(),
//!     MemoryClipboard::new(),
//! );
//!
//! shell.start().await;
//! shell.go_home_and_scroll("#about").await;
//! ```

pub mod click;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod fragment;
pub mod lightbox;
pub mod logging;
pub mod markup;
pub mod memory;
pub mod navbar;
pub mod page;
pub mod pause;
pub mod reveal;
pub mod shell;
pub mod surface;

// Re-exports
pub use click::{classify, ClickAction, ClickPath, ElementInfo};
pub use clipboard::{Clipboard, CopyOutcome, MemoryClipboard, SystemClipboard};
pub use config::ShellConfig;
pub use error::{ShellError, ShellResult};
pub use fragment::{FragmentSource, SiteDir, StaticPages};
pub use lightbox::Lightbox;
pub use markup::{Document, Element};
pub use memory::{MemorySurface, SurfaceSnapshot};
pub use page::{NavState, PageKey, GALLERY_PAGE, HOME_PAGE};
pub use pause::{Immediate, Pause, TokioPause};
pub use reveal::{RevealTarget, RevealTracker};
pub use shell::{Command, InputEvent, NavOutcome, PageEvent, Shell, LOAD_FAILURE_HTML};
pub use surface::{LightboxView, Surface, Viewport};
