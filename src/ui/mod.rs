// User interface components
pub mod app;
pub mod app_async;
pub mod config;
pub mod styles;
pub mod ui_panels;
pub mod ui_render;
pub mod utils;

// Re-export main app
pub use app::{AppSettings, AverageCalculatorApp};
pub use config::{Theme, UI_CONFIG, UI_TEXT};
