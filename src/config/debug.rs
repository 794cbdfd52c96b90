//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet. Most call sites are further gated by `cfg(debug_assertions)`.

pub struct DebugFlags {
    /// Emit UI interaction logs (category switching, demo buttons).
    pub print_ui_interactions: bool,
    /// Emit every request URL and the raw number count received.
    pub print_fetch_details: bool,
    /// Emit before/after window contents after each update.
    pub print_window_updates: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_ui_interactions: true,
    print_fetch_details: false,
    print_window_updates: false,
    print_shutdown: false,
};
