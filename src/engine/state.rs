use serde::Serialize;
use thiserror::Error;

use crate::config::DemoFixture;
use crate::domain::{Category, WindowUpdate};
use crate::utils::format_average;

/// Errors raised by the orchestration step itself. Fetch failures never get
/// here; they are already folded into an empty list.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("HTTP client unavailable: {0}")]
    ClientUnavailable(String),
    #[error("fetch worker stopped before delivering a result")]
    WorkerLost,
}

/// Snapshot shown in the results panel. Replaced wholesale on every action.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DisplayResult {
    pub category: Category,
    pub previous_window: Vec<i64>,
    pub current_window: Vec<i64>,
    pub fetched_numbers: Vec<i64>,
    pub average: String,
}

impl DisplayResult {
    pub fn from_update(category: Category, update: WindowUpdate, fetched: Vec<i64>) -> Self {
        let average = format_average(&update.current);
        Self {
            category,
            previous_window: update.previous,
            current_window: update.current,
            fetched_numbers: fetched,
            average,
        }
    }

    /// Canned values are taken as-is, average included.
    pub fn from_fixture(fixture: &DemoFixture) -> Self {
        Self {
            category: fixture.category,
            previous_window: fixture.reset_window.to_vec(),
            current_window: fixture.current_window.to_vec(),
            fetched_numbers: fixture.fetched.to_vec(),
            average: fixture.average.to_string(),
        }
    }
}
