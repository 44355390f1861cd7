//! Desktop bridge between the webview document and the shell.
//!
//! The page-side script (`bridge.js`) reports clicks, scroll metrics and
//! intersections as JSON messages; this module decodes them and hands each
//! one to the shell on its own task, so a long-running handler (a copy
//! confirmation, a page load) never holds up scroll handling.

use dioxus::prelude::*;
use folio_core::{ClickPath, Command, Viewport};
use serde::Deserialize;

use crate::context::SharedShell;

/// Page-side script, evaluated once after the shell is mounted.
const BRIDGE_JS: &str = include_str!("bridge.js");

/// A message from the page.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BridgeMessage {
    Click { path: ClickPath },
    Scroll { scroll_offset: f64, height: f64 },
    Intersect {
        position: usize,
        ratio: f64,
        intersecting: bool,
    },
    Command { command: Command },
}

/// Script calling `window.__folio.<name>(...args)`.
pub fn call(name: &str, args: serde_json::Value) -> String {
    format!("window.__folio && window.__folio.{}(...{});", name, args)
}

/// Install the page-side script and pump its messages until the window closes.
pub async fn run(shell: SharedShell) {
    let mut page = document::eval(BRIDGE_JS);
    tracing::debug!("Bridge installed");

    loop {
        let raw = match page.recv::<serde_json::Value>().await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Bridge closed: {:?}", e);
                break;
            }
        };
        match serde_json::from_value::<BridgeMessage>(raw) {
            Ok(message) => dispatch(shell.clone(), message),
            Err(e) => tracing::debug!("Skipping malformed bridge message: {}", e),
        }
    }
}

fn dispatch(shell: SharedShell, message: BridgeMessage) {
    match message {
        BridgeMessage::Scroll {
            scroll_offset,
            height,
        } => {
            shell
                .surface()
                .record_viewport(Viewport::new(scroll_offset, height));
            shell.on_scroll();
        }
        BridgeMessage::Click { path } => {
            spawn(async move {
                shell.on_click(&path).await;
            });
        }
        BridgeMessage::Intersect {
            position,
            ratio,
            intersecting,
        } => {
            spawn(async move {
                shell.on_intersection(position, ratio, intersecting).await;
            });
        }
        BridgeMessage::Command { command } => {
            spawn(async move {
                shell.execute(command).await;
            });
        }
    }
}
