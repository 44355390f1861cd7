//! Shell context for Folio components.
//!
//! The shell and the chrome signals it renders into are provided once by
//! `App` and read from any component with `use_context`.
//!
//! ## Usage
//!
//! ```ignore
//! let shell = use_shell();
//! spawn(async move { shell.show_gallery_page(None).await; });
//! ```

use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::{Shell, SiteDir, SystemClipboard, TokioPause};

use crate::surface::{Chrome, DesktopSurface};

/// The shell as wired for the desktop.
pub type DesktopShell = Shell<DesktopSurface, SiteDir, TokioPause, SystemClipboard>;

/// Shared handle to the shell.
///
/// Everything runs on the Dioxus task executor, so a plain `Rc` is enough.
pub type SharedShell = Rc<DesktopShell>;

/// Hook to access the shell from context.
pub fn use_shell() -> SharedShell {
    use_context::<SharedShell>()
}

/// Hook to access the chrome signals from context.
pub fn use_chrome() -> Chrome {
    use_context::<Chrome>()
}

/// Launch settings chosen on the command line.
pub fn get_launch() -> crate::Launch {
    crate::get_launch()
}
