use eframe::egui::{
    CentralPanel, Color32, Context, Frame, Margin, RichText, ScrollArea, TopBottomPanel,
};

use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{ControlEvent, ControlPanel, Panel, ResultsPanel};

use super::app::AverageCalculatorApp;

impl AverageCalculatorApp {
    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let colors = UI_CONFIG.colors(self.theme);
        let central_panel_frame = Frame::new()
            .fill(colors.background)
            .inner_margin(Margin::same(24));

        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    ui.set_max_width(UI_CONFIG.content_max_width);

                    ui.label(
                        RichText::new(UI_TEXT.app_title)
                            .size(24.0)
                            .color(colors.heading),
                    );
                    ui.add_space(20.0);

                    let events = ControlPanel::new(
                        self.controller.selected_category(),
                        self.controller.is_busy(),
                        colors,
                    )
                    .render(ui);
                    self.handle_control_events(events);
                    ui.add_space(16.0);

                    if let Some(error) = self.controller.last_error() {
                        ui.label_error(format!("{}{}", UI_TEXT.error_prefix, error), colors);
                        ui.add_space(16.0);
                    }

                    if let Some(result) = self.controller.display() {
                        ResultsPanel::new(result, self.controller.endpoint_label(), colors)
                            .render(ui);
                    }
                });
            });
    }

    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        let colors = UI_CONFIG.colors(self.theme);
        let status_frame = Frame::new()
            .fill(colors.card)
            .inner_margin(Margin::symmetric(8, 4));

        TopBottomPanel::bottom("status_panel")
            .frame(status_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let category = self.controller.selected_category();
                    ui.metric("Category", category.label(), colors.accent);
                    ui.separator();

                    let window_len = self.controller.store().window(category).len();
                    let capacity = self.controller.store().capacity();
                    ui.metric(
                        "Window",
                        &format!("{}/{}", window_len, capacity),
                        colors.numbers,
                    );
                    ui.separator();

                    ui.metric(
                        "Deadline",
                        &format!("{}ms", self.deadline.as_millis()),
                        colors.numbers,
                    );
                    ui.separator();

                    if self.is_fetching() {
                        ui.metric(
                            "Status",
                            UI_TEXT.status_fetching,
                            Color32::from_rgb(255, 215, 0),
                        );
                    } else {
                        ui.metric(
                            "Status",
                            UI_TEXT.status_idle,
                            Color32::from_rgb(100, 200, 100),
                        );
                    }
                });
            });
    }

    fn handle_control_events(&mut self, events: Vec<ControlEvent>) {
        for event in events {
            match event {
                ControlEvent::CategorySelected(category) => {
                    self.controller.select_category(category);
                }
                ControlEvent::FetchRequested => {
                    self.start_fetch();
                }
                ControlEvent::DemoRequested(case) => {
                    self.controller.run_demo_case(case);
                }
            }
        }
    }
}
