use std::time::Duration;

use super::state::AppError;
use crate::domain::Category;

/// A request to fetch numbers for one category
#[derive(Debug, Clone, Copy)]
pub struct FetchJob {
    pub category: Category,
    pub deadline: Duration,
}

/// What the worker hands back to the UI thread
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub category: Category,
    // Empty on any fetch failure
    pub numbers: Vec<i64>,
    pub elapsed: Duration,
}

pub type JobResult = Result<FetchOutcome, AppError>;
