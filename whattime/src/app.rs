//! Window contents: the arch, the button, the bar and the two labels.

use egui::{CentralPanel, Context, Key, Pos2, Rect, Vec2};
use revealcore::clock::SystemClock;
use revealcore::repaint::RepaintController;
use revealcore::safety::catch_or;
use revealcore::spark::SparkAnimator;
use revealcore::widgets::{
    paint_electric_lines, paint_fading_label, ProgressBar, RevealButton, BUTTON_SIZE, PROGRESS_SIZE,
};
use revealcore::{RevealController, RevealEvent, RevealTheme, Timings};
use std::time::Instant;

pub const WINDOW_TITLE: &str = "Current Time";
pub const WINDOW_SIZE: [f32; 2] = [500.0, 350.0];

const BUTTON_TEXT: &str = "What time is it?";

/// Where each element sits, as offsets from the panel's top-left corner.
struct Layout {
    button: Rect,
    progress: Rect,
    time: Rect,
    zone: Rect,
}

impl Layout {
    fn within(area: Rect) -> Self {
        let at = |x: f32, y: f32, size: Vec2| Rect::from_min_size(area.min + egui::vec2(x, y), size);
        Self {
            button: at(150.0, 100.0, BUTTON_SIZE),
            progress: at(100.0, 200.0, PROGRESS_SIZE),
            time: at(0.0, 100.0, egui::vec2(area.width(), 80.0)),
            zone: at(0.0, 180.0, egui::vec2(area.width(), 40.0)),
        }
    }
}

pub struct WhatTimeApp {
    controller: RevealController,
    spark: SparkAnimator,
    theme: RevealTheme,
    clock: SystemClock,
    started: Instant,
    repaint: RepaintController,
}

impl WhatTimeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, theme: RevealTheme) -> Self {
        let timings = Timings::default();
        Self {
            controller: RevealController::new(timings),
            spark: SparkAnimator::new(timings.spark_period, Default::default()),
            theme,
            clock: SystemClock,
            started: Instant::now(),
            repaint: RepaintController::default(),
        }
    }

    fn handle_events(&mut self, events: Vec<RevealEvent>) {
        for event in events {
            match event {
                RevealEvent::Progress(v) => tracing::trace!(progress = v, "bar advanced"),
                RevealEvent::LoadingStarted
                | RevealEvent::Revealed(_)
                | RevealEvent::ButtonRestored => self.repaint.mark_needs_repaint(),
            }
        }
    }

    fn draw(&mut self, ui: &mut egui::Ui) {
        let area = ui.max_rect();
        let layout = Layout::within(area);

        let spark: Pos2 = self.spark.point_in(area, self.started.elapsed());
        paint_electric_lines(ui.painter(), area, spark, &self.theme);

        if self.controller.progress_visible() {
            let fraction = self.controller.progress().fraction();
            ui.put(layout.progress, ProgressBar::new(fraction, &self.theme.palette));
        }

        if self.controller.labels_visible() {
            if let Some(shown) = self.controller.displayed() {
                let painter = ui.painter();
                paint_fading_label(
                    painter,
                    layout.time,
                    &shown.time,
                    self.theme.time_font(),
                    self.theme.palette.time_text,
                    self.controller.time_opacity(),
                );
                paint_fading_label(
                    painter,
                    layout.zone,
                    &shown.timezone,
                    self.theme.zone_font(),
                    self.theme.palette.accent,
                    self.controller.zone_opacity(),
                );
            }
        }

        if self.controller.button_visible() {
            let clicked = ui.put(layout.button, RevealButton::new(BUTTON_TEXT, &self.theme)).clicked();
            let keyed = ui.input(|i| i.key_pressed(Key::Space) || i.key_pressed(Key::Enter));
            if clicked || keyed {
                self.controller.activate();
            }
        }
    }
}

impl eframe::App for WhatTimeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let dt = self.repaint.begin_frame(ctx);
        tracing::trace!(frame = self.repaint.frame(), reason = ?self.repaint.reason(), ?dt, "frame");

        if ctx.input(|i| i.viewport().close_requested()) {
            self.controller.shutdown();
        }
        // The spark runs for as long as the controller does.
        self.repaint.set_continuous(!self.controller.is_shut_down());

        let events = self.controller.advance(dt, &self.clock);
        self.handle_events(events);
        if self.controller.take_redraw() {
            self.repaint.mark_needs_repaint();
        }

        CentralPanel::default()
            .frame(egui::Frame::none().fill(self.theme.palette.background))
            .show(ctx, |ui| {
                catch_or((), || self.draw(ui));
            });

        self.repaint.end_frame(ctx);
    }
}
