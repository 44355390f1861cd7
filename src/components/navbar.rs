//! Navigation bar
//!
//! Fixed at the top of the window and slid out of view (`-translate-y-full`)
//! unless the shell decides it should show.

use dioxus::prelude::*;

use crate::context::{use_chrome, use_shell};

/// Where a navbar entry leads.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLink {
    /// Section of the home page, by element id
    Section(&'static str),
    Gallery,
    Home,
}

const LINKS: [(&str, NavLink); 5] = [
    ("Home", NavLink::Home),
    ("About", NavLink::Section("#about")),
    ("Experience", NavLink::Section("#experience")),
    ("Gallery", NavLink::Gallery),
    ("Contact", NavLink::Section("#contact")),
];

#[component]
pub fn Navbar() -> Element {
    let chrome = use_chrome();
    let shell = use_shell();

    let class = if (chrome.navbar_hidden)() {
        "navbar -translate-y-full"
    } else {
        "navbar"
    };

    rsx! {
        nav { id: "navbar", class: "{class}",
            span { class: "navbar-title", "Portfolio" }
            div { class: "navbar-links",
                for (label, link) in LINKS {
                    button {
                        key: "{label}",
                        class: "navbar-link",
                        onclick: {
                            let shell = shell.clone();
                            move |_| {
                                let shell = shell.clone();
                                spawn(async move {
                                    match link {
                                        NavLink::Section(target) => {
                                            shell.go_home_and_scroll(target).await;
                                        }
                                        NavLink::Gallery => {
                                            shell.show_gallery_page(None).await;
                                        }
                                        NavLink::Home => {
                                            shell.show_home_page(None).await;
                                        }
                                    }
                                });
                            }
                        },
                        "{label}"
                    }
                }
            }
        }
    }
}
