//! Custom widgets — lime outlines on a dark surface

use crate::spark::decorative_path;
use crate::theme::{Palette, RevealTheme};
use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Response, Rounding, Stroke, Ui, Widget};

pub const PROGRESS_SIZE: egui::Vec2 = egui::vec2(300.0, 15.0);
pub const BUTTON_SIZE: egui::Vec2 = egui::vec2(200.0, 80.0);
pub const PROGRESS_ROUNDING: f32 = 7.0;
pub const BUTTON_ROUNDING: f32 = 40.0;

/// Draw the arch and the spark riding on it.
pub fn paint_electric_lines(painter: &Painter, rect: Rect, spark: Pos2, theme: &RevealTheme) {
    let path = decorative_path(rect);
    painter.add(egui::Shape::line(
        path.to_vec(),
        Stroke::new(theme.line_width, theme.palette.accent),
    ));
    painter.circle_filled(spark, theme.spark_radius, theme.palette.spark);
}

/// Centered text whose alpha follows `opacity`.
pub fn paint_fading_label(
    painter: &Painter,
    rect: Rect,
    text: &str,
    font: FontId,
    color: Color32,
    opacity: f32,
) {
    if opacity <= 0.0 || text.is_empty() {
        return;
    }
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        text,
        font,
        color.gamma_multiply(opacity.clamp(0.0, 1.0)),
    );
}

/// Width of the filled part of a bar, whole pixels like the bar outline.
pub fn fill_width(fraction: f32, width: f32) -> f32 {
    (fraction.clamp(0.0, 1.0) * width).floor()
}

/// Rounded bar with a lime fill.
pub struct ProgressBar<'a> {
    fraction: f32,
    palette: &'a Palette,
}

impl<'a> ProgressBar<'a> {
    pub fn new(fraction: f32, palette: &'a Palette) -> Self {
        Self { fraction, palette }
    }
}

impl<'a> Widget for ProgressBar<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(PROGRESS_SIZE, egui::Sense::hover());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let rounding = Rounding::same(PROGRESS_ROUNDING);
            painter.rect(rect, rounding, self.palette.background, Stroke::new(1.0, self.palette.border));

            let filled = fill_width(self.fraction, rect.width());
            if filled > 0.0 {
                let bar = Rect::from_min_size(rect.min, egui::vec2(filled, rect.height()));
                painter.rect_filled(bar, rounding, self.palette.accent);
            }
        }

        response
    }
}

/// Pill-shaped outline button. Fills lime on hover.
pub struct RevealButton<'a> {
    text: &'a str,
    theme: &'a RevealTheme,
}

impl<'a> RevealButton<'a> {
    pub fn new(text: &'a str, theme: &'a RevealTheme) -> Self {
        Self { text, theme }
    }
}

impl<'a> Widget for RevealButton<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(BUTTON_SIZE, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let p = &self.theme.palette;
            let rounding = Rounding::same(BUTTON_ROUNDING);

            let (fill, text_color) = if response.is_pointer_button_down_on() {
                (p.pressed, p.background)
            } else if response.hovered() {
                (p.accent, p.background)
            } else {
                (Color32::TRANSPARENT, p.accent)
            };

            painter.rect(rect, rounding, fill, Stroke::new(self.theme.line_width, p.accent));
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.text,
                self.theme.button_font(),
                text_color,
            );
        }

        response.on_hover_cursor(egui::CursorIcon::PointingHand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_width() {
        assert_eq!(fill_width(0.0, 300.0), 0.0);
        assert_eq!(fill_width(0.5, 300.0), 150.0);
        assert_eq!(fill_width(0.333, 300.0), 99.0);
        assert_eq!(fill_width(1.0, 300.0), 300.0);
        assert_eq!(fill_width(1.5, 300.0), 300.0);
        assert_eq!(fill_width(-0.2, 300.0), 0.0);
    }

    #[test]
    fn test_corner_radii() {
        // Bar corners are a hair under half its height; the button is a pill.
        assert_eq!(PROGRESS_ROUNDING, 7.0);
        assert!(PROGRESS_ROUNDING < PROGRESS_SIZE.y / 2.0);
        assert_eq!(BUTTON_ROUNDING, BUTTON_SIZE.y / 2.0);
    }
}
