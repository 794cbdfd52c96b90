//! Sliding window sizing.

pub struct WindowConfig {
    /// Maximum number of distinct values retained per category
    pub capacity: usize,
    /// Average shown when the window is empty
    pub empty_average: &'static str,
}

pub const WINDOW: WindowConfig = WindowConfig {
    capacity: 10,
    empty_average: "0.00",
};
