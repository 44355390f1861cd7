//! Logging setup.
//!
//! Console output through `tracing-subscriber`'s fmt layer, filtered by
//! `RUST_LOG` (or the builder's default directive), plus an optional JSONL
//! file with one JSON object per event:
//!
//! ```ignore
//! use folio_core::logging::LoggingBuilder;
//!
//! LoggingBuilder::new("desktop")
//!     .with_log_dir("./logs")
//!     .init()?;
//! ```
//!
//! ```bash
//! # failed page loads
//! jq 'select(.msg == "Error loading page")' logs/*.jsonl
//! ```

pub mod entry;
pub mod layer;

use std::path::PathBuf;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

pub use entry::LogEntry;
pub use layer::JsonlLayer;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "folio=info,folio_core=info";

/// Builder for the global tracing subscriber.
pub struct LoggingBuilder {
    instance: String,
    log_dir: Option<PathBuf>,
    console_output: bool,
    env_filter: Option<String>,
}

impl LoggingBuilder {
    pub fn new(instance: impl Into<String>) -> Self {
        Self {
            instance: instance.into(),
            log_dir: None,
            console_output: true,
            env_filter: None,
        }
    }

    /// Also write JSONL to `dir`.
    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    /// Only write JSONL.
    pub fn no_console(mut self) -> Self {
        self.console_output = false;
        self
    }

    /// Filter directive used when `RUST_LOG` is unset (e.g. "folio_core=debug").
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(self.env_filter.as_deref().unwrap_or(DEFAULT_FILTER))
        })
    }

    /// The JSONL layer alone, for manual composition.
    pub fn build_layer(&self) -> std::io::Result<Option<JsonlLayer>> {
        self.log_dir
            .as_ref()
            .map(|dir| JsonlLayer::new(dir, &self.instance))
            .transpose()
    }

    /// Install the subscriber globally.
    pub fn init(self) -> std::io::Result<()> {
        let jsonl = self.build_layer()?;
        let console = self.console_output.then(|| tracing_subscriber::fmt::layer());

        let installed = tracing_subscriber::registry()
            .with(self.filter())
            .with(console)
            .with(jsonl)
            .try_init();
        if let Err(e) = installed {
            // a subscriber is already installed (tests, embedding apps)
            eprintln!("Logging already initialised: {}", e);
        }
        Ok(())
    }
}
