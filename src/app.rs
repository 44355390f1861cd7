use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::{LightboxView, Shell, SiteDir, SystemClipboard, TokioPause};

use crate::bridge;
use crate::components::{Lightbox, Navbar};
use crate::context::{get_launch, SharedShell};
use crate::surface::{Chrome, DesktopSurface};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Owns the persistent chrome: navbar, content container and lightbox.
/// Fragments are swapped into the container by the shell; the page-side
/// bridge is installed once the container is mounted.
#[component]
pub fn App() -> Element {
    let content = use_signal(String::new);
    let navbar_hidden = use_signal(|| true);
    let lightbox = use_signal(LightboxView::default);
    let chrome = Chrome {
        content,
        navbar_hidden,
        lightbox,
    };

    let shell: SharedShell = use_hook(|| {
        let launch = get_launch();
        let surface = DesktopSurface::new(chrome, launch.config.reveal_threshold);
        Rc::new(Shell::new(
            launch.config,
            surface,
            SiteDir::new(launch.site_dir),
            TokioPause,
            SystemClipboard,
        ))
    });

    use_context_provider(|| chrome);
    use_context_provider({
        let shell = shell.clone();
        move || shell
    });

    // Install the bridge and load the home page once mounted
    use_effect(move || {
        let for_bridge = shell.clone();
        spawn(async move {
            bridge::run(for_bridge).await;
        });
        let for_start = shell.clone();
        spawn(async move {
            for_start.start().await;
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Navbar {}
        main {
            id: "app-container",
            class: "app-container",
            dangerous_inner_html: "{content}",
        }
        Lightbox {}
    }
}
