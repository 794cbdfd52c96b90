use eframe::{Frame, egui};
use poll_promise::Promise;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::ServerConfig;
use crate::data::{FetchNumbers, HttpNumberFetcher};
use crate::domain::Category;
use crate::engine::{AppError, AverageController, JobResult};
use crate::ui::config::{Theme, UI_CONFIG};
use crate::ui::utils::setup_custom_visuals;

/// Everything the app needs from `main` to start.
pub struct AppSettings {
    pub server: ServerConfig,
    pub initial_category: Category,
    pub theme: Theme,
    pub runtime: Handle,
}

pub struct AverageCalculatorApp {
    pub(super) controller: AverageController,

    // Err when the HTTP client could not be built; every fetch then reports
    // the stored reason instead of touching the network.
    pub(super) fetcher: Result<Arc<dyn FetchNumbers>, AppError>,
    pub(super) runtime: Handle,
    pub(super) deadline: Duration,
    pub(super) theme: Theme,

    // Async fetch state
    pub(super) fetch_promise: Option<Promise<JobResult>>,
}

impl AverageCalculatorApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: AppSettings) -> Self {
        let deadline = settings.server.deadline();

        let fetcher: Result<Arc<dyn FetchNumbers>, AppError> =
            match HttpNumberFetcher::new(settings.server) {
                Ok(fetcher) => Ok(Arc::new(fetcher)),
                Err(e) => {
                    log::error!("❌ {:#}", e);
                    Err(AppError::ClientUnavailable(format!("{:#}", e)))
                }
            };

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!(
                "Starting with category {} and {} theme",
                settings.initial_category,
                settings.theme
            );
        }

        Self {
            controller: AverageController::new(settings.initial_category),
            fetcher,
            runtime: settings.runtime,
            deadline,
            theme: settings.theme,
            fetch_promise: None,
        }
    }
}

impl eframe::App for AverageCalculatorApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Dropping the promise detaches the worker; its deadline bounds the rest.
        if let Some(promise) = self.fetch_promise.take() {
            drop(promise);
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx, UI_CONFIG.colors(self.theme));

        // Poll async fetch
        self.poll_fetch(ctx);

        self.render_status_panel(ctx);
        self.render_central_panel(ctx);
    }
}
