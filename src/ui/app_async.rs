use eframe::egui;
use std::sync::Arc;

use crate::engine::{FetchJob, spawn_fetch_job};
use crate::ui::app::AverageCalculatorApp;

impl AverageCalculatorApp {
    pub(super) fn start_fetch(&mut self) {
        if self.fetch_promise.is_some() {
            return;
        }

        let Some(category) = self.controller.begin_fetch() else {
            return;
        };

        let fetcher = match &self.fetcher {
            Ok(fetcher) => Arc::clone(fetcher),
            Err(e) => {
                self.controller.fail_fetch(e.clone());
                return;
            }
        };

        let job = FetchJob {
            category,
            deadline: self.deadline,
        };
        self.fetch_promise = Some(spawn_fetch_job(fetcher, self.runtime.clone(), job));
    }

    pub(super) fn poll_fetch(&mut self, ctx: &egui::Context) {
        let outcome = self
            .fetch_promise
            .as_ref()
            .and_then(|promise| promise.ready().cloned());

        if let Some(outcome) = outcome {
            self.fetch_promise = None;

            match outcome {
                Ok(fetched) => {
                    #[cfg(debug_assertions)]
                    if fetched.elapsed.as_millis() > 100 {
                        log::info!(
                            "✅ Fetch for {} completed in {}ms",
                            fetched.category.segment(),
                            fetched.elapsed.as_millis()
                        );
                    }
                    self.controller
                        .complete_fetch(fetched.category, fetched.numbers);
                }
                Err(error) => {
                    self.controller.fail_fetch(error);
                }
            }
        } else if self.fetch_promise.is_some() {
            ctx.request_repaint();
        }
    }

    pub(super) fn is_fetching(&self) -> bool {
        self.fetch_promise.is_some()
    }
}
