// Domain types and value objects
pub mod category;
pub mod number_window;
pub mod window_store;

// Re-export commonly used types
pub use category::Category;
pub use number_window::NumberWindow;
pub use window_store::{WindowStore, WindowUpdate};
