//! Lightbox overlay
//!
//! `hidden` removes the overlay from layout, `visible` fades it in. Any
//! click on the overlay closes it.

use dioxus::prelude::*;

use crate::context::{use_chrome, use_shell};

#[component]
pub fn Lightbox() -> Element {
    let chrome = use_chrome();
    let shell = use_shell();
    let view = (chrome.lightbox)();

    let mut class = String::from("lightbox-overlay");
    if view.hidden {
        class.push_str(" hidden");
    }
    if view.visible {
        class.push_str(" visible");
    }
    let src = view.src.unwrap_or_default();

    let close = move |_| {
        let shell = shell.clone();
        spawn(async move {
            shell.close_lightbox().await;
        });
    };

    rsx! {
        div { id: "lightbox-overlay", class: "{class}", onclick: close,
            img { id: "lightbox-image", class: "lightbox-image", src: "{src}", alt: "" }
        }
    }
}
