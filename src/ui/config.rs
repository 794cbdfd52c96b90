use clap::ValueEnum;
use eframe::egui::Color32;
use strum_macros::Display;

/// Presentation variants. Both render the same controller state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Display)]
pub enum Theme {
    #[default]
    #[strum(to_string = "Dark")]
    Dark,
    #[strum(to_string = "Light")]
    Light,
}

/// UI Colors for consistent theming
#[derive(Clone, Copy)]
pub struct UiColors {
    pub background: Color32,
    pub card: Color32,
    pub card_inner: Color32,
    pub label: Color32,
    pub heading: Color32,
    pub numbers: Color32,
    pub accent: Color32,
    pub accent_text: Color32,
    pub inactive_button: Color32,
    pub average_band: Color32,
    pub average_text: Color32,
    pub error_fill: Color32,
    pub error_text: Color32,
    pub dark_visuals: bool,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub dark: UiColors,
    pub light: UiColors,
    pub content_max_width: f32,
}

impl UiConfig {
    pub fn colors(&self, theme: Theme) -> &UiColors {
        match theme {
            Theme::Dark => &self.dark,
            Theme::Light => &self.light,
        }
    }
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    dark: UiColors {
        background: Color32::BLACK,
        card: Color32::from_rgb(17, 24, 39),
        card_inner: Color32::from_rgb(31, 41, 55),
        label: Color32::from_rgb(156, 163, 175),
        heading: Color32::WHITE,
        numbers: Color32::from_rgb(209, 213, 219),
        accent: Color32::from_rgb(59, 130, 246),
        accent_text: Color32::WHITE,
        inactive_button: Color32::from_rgb(31, 41, 55),
        average_band: Color32::from_rgb(30, 58, 138),
        average_text: Color32::from_rgb(191, 219, 254),
        error_fill: Color32::from_rgb(127, 29, 29),
        error_text: Color32::from_rgb(254, 202, 202),
        dark_visuals: true,
    },
    light: UiColors {
        background: Color32::from_rgb(243, 244, 246),
        card: Color32::WHITE,
        card_inner: Color32::from_rgb(249, 250, 251),
        label: Color32::from_rgb(75, 85, 99),
        heading: Color32::from_rgb(17, 24, 39),
        numbers: Color32::from_rgb(31, 41, 55),
        accent: Color32::from_rgb(37, 99, 235),
        accent_text: Color32::WHITE,
        inactive_button: Color32::from_rgb(229, 231, 235),
        average_band: Color32::from_rgb(219, 234, 254),
        average_text: Color32::from_rgb(30, 64, 175),
        error_fill: Color32::from_rgb(254, 226, 226),
        error_text: Color32::from_rgb(153, 27, 27),
        dark_visuals: false,
    },
    content_max_width: 720.0,
};

pub struct UiText {
    pub app_title: &'static str,
    pub number_type_heading: &'static str,
    pub fetch_button: &'static str,
    pub fetch_in_progress: &'static str,
    pub endpoint_heading: &'static str,
    pub previous_window_heading: &'static str,
    pub current_window_heading: &'static str,
    pub fetched_numbers_heading: &'static str,
    pub average_heading: &'static str,
    pub error_prefix: &'static str,
    pub status_idle: &'static str,
    pub status_fetching: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    app_title: "Average Calculator",
    number_type_heading: "Number Type",
    fetch_button: "Fetch Numbers",
    fetch_in_progress: "Processing...",
    endpoint_heading: "API Endpoint",
    previous_window_heading: "Previous Window",
    current_window_heading: "Current Window",
    fetched_numbers_heading: "Fetched Numbers",
    average_heading: "Average",
    error_prefix: "Error: ",
    status_idle: "Idle",
    status_fetching: "Fetching",
};
