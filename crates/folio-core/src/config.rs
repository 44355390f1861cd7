//! Shell configuration.
//!
//! Every field has a default, so a config file only needs the values it
//! changes:
//!
//! ```toml
//! exit_transition_ms = 350
//! navbar_reveal_ratio = 0.5
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ShellResult;
use crate::page::{PageKey, GALLERY_PAGE, HOME_PAGE, ROLE_DIR};

/// Timings, thresholds and well-known page keys for the shell.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ShellConfig {
    /// Key of the home fragment (the only page that shows the navbar)
    pub home_page: String,
    /// Key of the gallery fragment
    pub gallery_page: String,
    /// Directory of the role fragments
    pub role_dir: String,
    /// Wait between marking content exiting and fetching the next fragment
    pub exit_transition_ms: u64,
    /// Delay between unhiding the lightbox and marking it visible
    pub lightbox_fade_in_ms: u64,
    /// Delay between marking the lightbox not visible and hiding it
    pub lightbox_fade_out_ms: u64,
    /// How long the copy confirmation tooltip stays up
    pub tooltip_ms: u64,
    /// Navbar shows once scrolled past this fraction of the viewport height
    pub navbar_reveal_ratio: f64,
    /// Minimum intersection ratio that counts as "entered the viewport"
    pub reveal_threshold: f64,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            home_page: HOME_PAGE.to_string(),
            gallery_page: GALLERY_PAGE.to_string(),
            role_dir: ROLE_DIR.to_string(),
            exit_transition_ms: 500,
            lightbox_fade_in_ms: 20,
            lightbox_fade_out_ms: 300,
            tooltip_ms: 1500,
            navbar_reveal_ratio: 0.8,
            reveal_threshold: 0.15,
        }
    }
}

impl ShellConfig {
    /// Parse a TOML document, filling missing fields with defaults.
    pub fn from_toml(contents: &str) -> ShellResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ShellResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn home_key(&self) -> PageKey {
        PageKey::new(self.home_page.clone())
    }

    pub fn gallery_key(&self) -> PageKey {
        PageKey::new(self.gallery_page.clone())
    }

    pub fn role_key(&self, role_id: &str) -> PageKey {
        PageKey::role_in(&self.role_dir, role_id)
    }

    pub fn exit_transition(&self) -> Duration {
        Duration::from_millis(self.exit_transition_ms)
    }

    pub fn lightbox_fade_in(&self) -> Duration {
        Duration::from_millis(self.lightbox_fade_in_ms)
    }

    pub fn lightbox_fade_out(&self) -> Duration {
        Duration::from_millis(self.lightbox_fade_out_ms)
    }

    pub fn tooltip(&self) -> Duration {
        Duration::from_millis(self.tooltip_ms)
    }
}
