#![allow(clippy::collapsible_if)]

// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use data::{FetchNumbers, HttpNumberFetcher};
pub use domain::{Category, WindowStore};
pub use engine::{AverageController, DisplayResult};
pub use ui::{AppSettings, AverageCalculatorApp, Theme};

// CLI argument parsing
use clap::Parser;

use crate::config::{SERVER, ServerConfig};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the number service; the category segment is appended
    #[arg(long, default_value = SERVER.base_url)]
    pub base_url: String,

    /// Per-request deadline in milliseconds
    #[arg(long, default_value_t = SERVER.timeout_ms)]
    pub timeout_ms: u64,

    /// Starting category: p, f, e or r
    #[arg(long, default_value = "e")]
    pub category: Category,

    #[arg(long, value_enum, default_value_t = Theme::Dark)]
    pub theme: Theme,

    /// Run one fetch cycle, print the result as JSON and exit.
    /// Windows release builds have no console, so use a debug build there.
    #[arg(long, default_value_t = false)]
    pub headless: bool,
}

impl Cli {
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            base_url: self.base_url.clone(),
            timeout_ms: self.timeout_ms,
        }
    }
}

/// Main application entry point - creates the GUI app
pub fn run_app(cc: &eframe::CreationContext, settings: AppSettings) -> Box<dyn eframe::App> {
    Box::new(AverageCalculatorApp::new(cc, settings))
}

/// One fetch/update cycle without a window. Must run inside a tokio runtime.
pub async fn run_headless(args: &Cli) -> anyhow::Result<DisplayResult> {
    let server = args.server_config();
    let deadline = server.deadline();
    let fetcher = HttpNumberFetcher::new(server)?;

    let mut controller = AverageController::new(args.category);
    let result = controller.run_fetch_cycle(&fetcher, deadline).await;
    Ok(result.clone())
}
