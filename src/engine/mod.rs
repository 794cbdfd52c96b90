pub mod controller;
pub mod messages;
pub mod state;
pub mod worker;

// Re-export key components
pub use controller::AverageController;
pub use messages::{FetchJob, FetchOutcome, JobResult};
pub use state::{AppError, DisplayResult};
pub use worker::spawn_fetch_job;
