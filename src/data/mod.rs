// Remote number service access
pub mod number_fetcher;

// Re-export commonly used types
pub use number_fetcher::{FetchError, FetchNumbers, HttpNumberFetcher};
