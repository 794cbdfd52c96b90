//! Configuration module for the average calculator.

pub mod server;
pub mod window;

mod debug; // Private: callers go through crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod demo;

// Re-export commonly used items
pub use demo::{DEMO, DemoCase, DemoFixture};
pub use server::{SERVER, ServerConfig};
pub use window::WINDOW;
