use eframe::egui::{Context, CornerRadius, Frame, Margin, RichText, Ui, Visuals};

use crate::ui::config::UiColors;

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context, colors: &UiColors) {
    let mut visuals = if colors.dark_visuals {
        Visuals::dark()
    } else {
        Visuals::light()
    };

    visuals.window_fill = colors.card;
    visuals.panel_fill = colors.background;

    visuals.widgets.inactive.weak_bg_fill = colors.inactive_button;
    visuals.widgets.inactive.fg_stroke.color = colors.numbers;
    visuals.widgets.hovered.fg_stroke.color = colors.heading;
    visuals.widgets.active.fg_stroke.color = colors.heading;
    visuals.selection.bg_fill = colors.accent;
    visuals.selection.stroke.color = colors.accent_text;

    ctx.set_visuals(visuals);
}

/// Rounded card used for every block of the layout
pub fn card_frame(fill: eframe::egui::Color32) -> Frame {
    Frame::new()
        .fill(fill)
        .corner_radius(CornerRadius::same(12))
        .inner_margin(Margin::same(16))
}

/// Creates a section heading with standard spacing
pub fn section_heading(ui: &mut Ui, text: impl Into<String>, colors: &UiColors) {
    ui.add_space(4.0);
    ui.label(RichText::new(text.into()).strong().color(colors.label));
    ui.add_space(6.0);
}

/// Creates a separator with standard spacing
pub fn spaced_separator(ui: &mut Ui) {
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);
}
