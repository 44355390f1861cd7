#![allow(non_snake_case)]

mod app;
mod bridge;
mod components;
pub mod context;
mod surface;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use folio_core::logging::LoggingBuilder;
use folio_core::ShellConfig;

/// Launch settings, set once from the command line
static LAUNCH: OnceLock<Launch> = OnceLock::new();

/// Where the site lives and how the shell behaves.
#[derive(Debug, Clone)]
pub struct Launch {
    pub site_dir: PathBuf,
    pub config: ShellConfig,
}

/// Launch settings (set from command line or defaults)
pub fn get_launch() -> Launch {
    LAUNCH.get().cloned().unwrap_or_else(|| Launch {
        site_dir: PathBuf::from("."),
        config: ShellConfig::default(),
    })
}

/// Folio - single-page portfolio shell
#[derive(Parser, Debug)]
#[command(name = "folio-desktop")]
#[command(about = "Folio - portfolio shell with fragment navigation")]
struct Args {
    /// Site directory holding the page fragments (pages/home.html, ...)
    #[arg(short, long, default_value = ".")]
    site_dir: PathBuf,

    /// Shell configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also write JSONL logs to this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1200.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

fn main() {
    let args = Args::parse();

    let mut logging = LoggingBuilder::new("desktop");
    if let Some(ref dir) = args.log_dir {
        logging = logging.with_log_dir(dir);
    }
    if let Err(e) = logging.init() {
        eprintln!("Failed to open log directory: {}", e);
    }

    let config = match args.config {
        Some(ref path) => match ShellConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config {:?}: {}; using defaults", path, e);
                ShellConfig::default()
            }
        },
        None => ShellConfig::default(),
    };

    let site_dir = args.site_dir.clone();
    tracing::info!("Starting with site dir: {:?}", site_dir);

    let _ = LAUNCH.set(Launch {
        site_dir: site_dir.clone(),
        config,
    });

    let title = site_dir
        .canonicalize()
        .ok()
        .and_then(|dir| dir.file_name().map(|n| n.to_string_lossy().to_string()))
        .map(|name| format!("Folio - {}", name))
        .unwrap_or_else(|| "Folio".to_string());

    let config = Config::new()
        .with_resource_directory(site_dir)
        .with_window(
            WindowBuilder::new()
                .with_title(&title)
                .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
                .with_resizable(true),
        );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
