use eframe::egui::{Color32, CornerRadius, Frame, Margin, RichText, Ui};

use crate::ui::config::UiColors;
use crate::utils::format_numbers;

/// Extension trait to add semantic styling methods directly to `egui::Ui`.
pub trait UiStyleExt {
    /// Renders small, muted text (good for labels like "Previous Window").
    fn label_subdued(&mut self, text: impl Into<String>, colors: &UiColors);

    /// Renders a "Label: Value" pair with consistent spacing and styling.
    fn metric(&mut self, label: &str, value: &str, color: Color32);

    /// Renders an error message on a tinted card.
    fn label_error(&mut self, text: impl Into<String>, colors: &UiColors);

    /// Renders a bracketed list of numbers in a monospace box.
    fn number_box(&mut self, values: &[i64], colors: &UiColors);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>, colors: &UiColors) {
        self.label(RichText::new(text).small().strong().color(colors.label));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0; // Tight spacing
            ui.label(RichText::new(format!("{}:", label)).small().color(Color32::GRAY));
            ui.label(RichText::new(value).small().color(color));
        });
    }

    fn label_error(&mut self, text: impl Into<String>, colors: &UiColors) {
        Frame::new()
            .fill(colors.error_fill)
            .corner_radius(CornerRadius::same(6))
            .inner_margin(Margin::same(12))
            .show(self, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(text).color(colors.error_text));
            });
    }

    fn number_box(&mut self, values: &[i64], colors: &UiColors) {
        Frame::new()
            .fill(colors.card)
            .corner_radius(CornerRadius::same(4))
            .inner_margin(Margin::same(8))
            .show(self, |ui| {
                ui.set_width(ui.available_width());
                ui.label(
                    RichText::new(format_numbers(values))
                        .monospace()
                        .color(colors.numbers),
                );
            });
    }
}
