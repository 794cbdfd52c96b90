use eframe::egui::{Button, CornerRadius, RichText, Ui, vec2};
use strum::IntoEnumIterator;

use crate::config::DemoCase;
use crate::domain::Category;
use crate::engine::DisplayResult;
use crate::ui::config::{UI_TEXT, UiColors};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::{card_frame, section_heading, spaced_separator};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    CategorySelected(Category),
    FetchRequested,
    DemoRequested(DemoCase),
}

/// Category picker plus the fetch and demo buttons
pub struct ControlPanel<'a> {
    selected: Category,
    busy: bool,
    colors: &'a UiColors,
}

impl<'a> ControlPanel<'a> {
    pub fn new(selected: Category, busy: bool, colors: &'a UiColors) -> Self {
        Self {
            selected,
            busy,
            colors,
        }
    }

    fn render_category_selector(&mut self, ui: &mut Ui) -> Option<Category> {
        let mut changed = None;

        section_heading(ui, UI_TEXT.number_type_heading, self.colors);
        ui.horizontal(|ui| {
            for category in Category::iter() {
                let is_selected = self.selected == category;
                let (fill, text_color) = if is_selected {
                    (self.colors.accent, self.colors.accent_text)
                } else {
                    (self.colors.inactive_button, self.colors.numbers)
                };
                let button = Button::new(RichText::new(category.label()).color(text_color))
                    .fill(fill)
                    .corner_radius(CornerRadius::same(16))
                    .min_size(vec2(96.0, 30.0));
                if ui.add(button).clicked() && !is_selected {
                    self.selected = category;
                    changed = Some(category);
                }
            }
        });

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            if let Some(category) = changed {
                log::info!("A new category was selected: {}", category);
            }
        }

        changed
    }

    fn render_fetch_button(&mut self, ui: &mut Ui) -> bool {
        let width = ui.available_width();
        let mut clicked = false;

        if self.busy {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(RichText::new(UI_TEXT.fetch_in_progress).color(self.colors.label));
            });
        }

        let label = RichText::new(UI_TEXT.fetch_button).color(self.colors.accent_text);
        let button = Button::new(label)
            .fill(self.colors.accent)
            .corner_radius(CornerRadius::same(20))
            .min_size(vec2(width, 36.0));
        if ui.add_enabled(!self.busy, button).clicked() {
            clicked = true;
        }

        clicked
    }

    fn render_demo_buttons(&mut self, ui: &mut Ui) -> Option<DemoCase> {
        let mut requested = None;
        let half_width = (ui.available_width() - 8.0) / 2.0;

        ui.horizontal(|ui| {
            for case in DemoCase::iter() {
                let button = Button::new(
                    RichText::new(case.to_string())
                        .small()
                        .color(self.colors.numbers),
                )
                .fill(self.colors.inactive_button)
                .corner_radius(CornerRadius::same(16))
                .min_size(vec2(half_width, 26.0));
                if ui.add(button).clicked() {
                    requested = Some(case);
                }
            }
        });

        requested
    }
}

impl<'a> Panel for ControlPanel<'a> {
    type Event = ControlEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();

        card_frame(self.colors.card).show(ui, |ui| {
            ui.set_width(ui.available_width());

            if let Some(category) = self.render_category_selector(ui) {
                events.push(ControlEvent::CategorySelected(category));
            }
            ui.add_space(12.0);

            if self.render_fetch_button(ui) {
                events.push(ControlEvent::FetchRequested);
            }
            ui.add_space(8.0);

            if let Some(case) = self.render_demo_buttons(ui) {
                events.push(ControlEvent::DemoRequested(case));
            }
        });

        events
    }
}

/// Before/after windows, fetched batch and average
pub struct ResultsPanel<'a> {
    result: &'a DisplayResult,
    endpoint: String,
    colors: &'a UiColors,
}

impl<'a> ResultsPanel<'a> {
    pub fn new(result: &'a DisplayResult, endpoint: String, colors: &'a UiColors) -> Self {
        Self {
            result,
            endpoint,
            colors,
        }
    }

    fn render_window_block(&self, ui: &mut Ui, heading: &str, values: &[i64]) {
        card_frame(self.colors.card_inner).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label_subdued(heading, self.colors);
            ui.add_space(4.0);
            ui.number_box(values, self.colors);
        });
    }

    fn render_average(&self, ui: &mut Ui) {
        card_frame(self.colors.average_band).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(UI_TEXT.average_heading)
                        .strong()
                        .color(self.colors.average_text),
                );
                ui.with_layout(
                    eframe::egui::Layout::right_to_left(eframe::egui::Align::Center),
                    |ui| {
                        ui.label(
                            RichText::new(&self.result.average)
                                .size(24.0)
                                .color(self.colors.average_text),
                        );
                    },
                );
            });
        });
    }
}

impl<'a> Panel for ResultsPanel<'a> {
    type Event = ();

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        card_frame(self.colors.card).show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.label_subdued(UI_TEXT.endpoint_heading, self.colors);
            ui.label(
                RichText::new(&self.endpoint)
                    .monospace()
                    .color(self.colors.accent),
            );
            spaced_separator(ui);

            ui.columns(2, |columns| {
                self.render_window_block(
                    &mut columns[0],
                    UI_TEXT.previous_window_heading,
                    &self.result.previous_window,
                );
                self.render_window_block(
                    &mut columns[1],
                    UI_TEXT.current_window_heading,
                    &self.result.current_window,
                );
            });
            ui.add_space(8.0);

            self.render_window_block(
                ui,
                UI_TEXT.fetched_numbers_heading,
                &self.result.fetched_numbers,
            );
            ui.add_space(8.0);

            self.render_average(ui);
        });

        Vec::new()
    }
}
