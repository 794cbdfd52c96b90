#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use anyhow::Context;
use clap::Parser;
use eframe::{NativeOptions, egui};
use tokio::runtime::Runtime;

use average_calculator::{AppSettings, Cli, run_app, run_headless, ui::UI_TEXT};

fn main() -> anyhow::Result<()> {
    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Runtime for network calls. Lives until the window closes.
    let rt = Runtime::new().context("Failed to create Tokio runtime")?;

    // Windows release builds run without a console and drop this stdout.
    if args.headless {
        let result = rt.block_on(run_headless(&args))?;
        println!(
            "{}",
            serde_json::to_string_pretty(&result).context("Failed to encode result")?
        );
        return Ok(());
    }

    // D. Run Native App
    let settings = AppSettings {
        server: args.server_config(),
        initial_category: args.category,
        theme: args.theme,
        runtime: rt.handle().clone(),
    };
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([780.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        UI_TEXT.app_title,
        options,
        Box::new(move |cc| Ok(run_app(cc, settings))),
    )
    .map_err(|e| anyhow::anyhow!("eframe exited with an error: {e}"))
}
