use poll_promise::Promise;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::time::Instant;
use tokio::runtime::Handle;

use super::messages::{FetchJob, FetchOutcome, JobResult};
use super::state::AppError;
use crate::data::FetchNumbers;

/// Run one fetch on a background thread, blocking on the shared runtime.
/// The UI polls the returned promise every frame.
pub fn spawn_fetch_job(
    fetcher: Arc<dyn FetchNumbers>,
    runtime: Handle,
    job: FetchJob,
) -> Promise<JobResult> {
    Promise::spawn_thread("fetch_numbers", move || {
        let start = Instant::now();

        // A panic must not take the promise sender down with it, or polling
        // would panic on the UI thread instead of showing an error.
        let numbers = catch_unwind(AssertUnwindSafe(|| {
            runtime.block_on(fetcher.fetch(job.category, job.deadline))
        }));

        match numbers {
            Ok(numbers) => Ok(FetchOutcome {
                category: job.category,
                numbers,
                elapsed: start.elapsed(),
            }),
            Err(_) => {
                log::error!("Fetch worker for {} panicked", job.category.segment());
                Err(AppError::WorkerLost)
            }
        }
    })
}
