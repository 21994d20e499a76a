//! Lime-on-black theme
//!
//! One bright accent on a near-black surface. Colors live in a `Palette`
//! handed to the painters by reference.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

/// Fixed colors for the widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub accent: Color32,
    pub background: Color32,
    pub border: Color32,
    pub time_text: Color32,
    pub spark: Color32,
    pub pressed: Color32,
}

impl Palette {
    pub const LIME: Color32 = Color32::from_rgb(0xAD, 0xFF, 0x2F);
    pub const DARK: Color32 = Color32::from_rgb(0x12, 0x12, 0x12);
    pub const BORDER: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);
    pub const WHITE: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            accent: Self::LIME,
            background: Self::DARK,
            border: Self::BORDER,
            time_text: Self::WHITE,
            spark: lighter(Self::LIME, 1.5),
            pressed: darken(Self::LIME, 1.0 / 1.2),
        }
    }
}

/// Brighten in HSV: value is scaled by `factor`; whatever would push it
/// past full brightness is taken out of saturation instead, washing the
/// color toward white.
pub fn lighter(c: Color32, factor: f32) -> Color32 {
    let (h, s, v) = rgb_to_hsv(c);
    let mut s = s;
    let mut v = v * factor.max(0.0);
    if v > 1.0 {
        s = (s - (v - 1.0)).max(0.0);
        v = 1.0;
    }
    hsv_to_rgb(h, s, v, c.a())
}

/// Hue in degrees, saturation and value in `[0, 1]`.
fn rgb_to_hsv(c: Color32) -> (f32, f32, f32) {
    let (r, g, b) = (c.r() as f32 / 255.0, c.g() as f32 / 255.0, c.b() as f32 / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;
    let s = if max > 0.0 { d / max } else { 0.0 };
    let h = if d == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / d).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / d + 2.0)
    } else {
        60.0 * ((r - g) / d + 4.0)
    };
    (h, s, max)
}

fn hsv_to_rgb(h: f32, s: f32, v: f32, a: u8) -> Color32 {
    let c = v * s;
    let sector = (h / 60.0).rem_euclid(6.0);
    let x = c * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());
    let (r, g, b) = match sector as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = v - c;
    let to_u8 = |f: f32| ((f + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Color32::from_rgba_unmultiplied(to_u8(r), to_u8(g), to_u8(b), a)
}

/// Scale channels by `factor` (clamped to `[0, 1]`).
pub fn darken(c: Color32, factor: f32) -> Color32 {
    let factor = factor.clamp(0.0, 1.0);
    let scale = |v: u8| (v as f32 * factor).round() as u8;
    Color32::from_rgba_unmultiplied(scale(c.r()), scale(c.g()), scale(c.b()), c.a())
}

/// Sizes and strokes for the widget.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealTheme {
    pub font_size_button: f32,
    pub font_size_time: f32,
    pub font_size_zone: f32,
    pub line_width: f32,
    pub spark_radius: f32,
    pub palette: Palette,
}

impl Default for RevealTheme {
    fn default() -> Self {
        Self {
            font_size_button: 16.0,
            font_size_time: 48.0,
            font_size_zone: 14.0,
            line_width: 2.0,
            spark_radius: 5.0,
            palette: Palette::default(),
        }
    }
}

impl RevealTheme {
    pub fn button_font(&self) -> FontId {
        FontId::new(self.font_size_button, FontFamily::Proportional)
    }

    pub fn time_font(&self) -> FontId {
        FontId::new(self.font_size_time, FontFamily::Monospace)
    }

    pub fn zone_font(&self) -> FontId {
        FontId::new(self.font_size_zone, FontFamily::Proportional)
    }

    /// Apply the theme to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let p = &self.palette;
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(11.0, FontFamily::Proportional)),
            (TextStyle::Body, self.zone_font()),
            (TextStyle::Button, self.button_font()),
            (TextStyle::Heading, FontId::new(22.0, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_zone, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::dark();
        visuals.window_fill = p.background;
        visuals.panel_fill = p.background;
        visuals.faint_bg_color = p.background;
        visuals.extreme_bg_color = p.background;
        visuals.window_stroke = Stroke::new(1.0, p.border);
        visuals.override_text_color = Some(p.accent);

        let lime = |ws: &mut egui::style::WidgetVisuals| {
            ws.bg_fill = Color32::TRANSPARENT;
            ws.weak_bg_fill = Color32::TRANSPARENT;
            ws.bg_stroke = Stroke::new(self.line_width, p.accent);
            ws.fg_stroke = Stroke::new(1.0, p.accent);
            ws.rounding = Rounding::same(4.0);
        };
        lime(&mut visuals.widgets.noninteractive);
        lime(&mut visuals.widgets.inactive);
        lime(&mut visuals.widgets.hovered);
        lime(&mut visuals.widgets.active);
        lime(&mut visuals.widgets.open);

        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;

        style.visuals = visuals;
        style.spacing.window_margin = egui::Margin::same(0.0);

        ctx.set_style(style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let p = Palette::default();
        assert_eq!(p.accent, Color32::from_rgb(173, 255, 47));
        assert_eq!(p.background, Color32::from_rgb(18, 18, 18));
        // spark is brighter than the line it rides on
        assert!(p.spark.b() > p.accent.b());
        assert_eq!(p.spark.g(), 255);
        // pressed is darker
        assert!(p.pressed.g() < p.accent.g());
    }

    #[test]
    fn test_spark_is_lime_150_percent_lighter() {
        // #ADFF2F is already at full value, so 150% spends the overflow on
        // saturation: roughly #DFFFAE.
        let spark = Palette::default().spark;
        let close = |got: u8, want: u8| (got as i32 - want as i32).abs() <= 1;
        assert!(close(spark.r(), 0xDF), "{spark:?}");
        assert_eq!(spark.g(), 0xFF);
        assert!(close(spark.b(), 0xAE), "{spark:?}");
    }

    #[test]
    fn test_lighter_scales_value_below_cap() {
        // Half-bright red doubles to full red with saturation untouched.
        assert_eq!(lighter(Color32::from_rgb(100, 0, 0), 2.0), Color32::from_rgb(200, 0, 0));
        assert_eq!(lighter(Color32::BLACK, 1.5), Color32::BLACK);
        let c = Color32::from_rgb(100, 0, 200);
        assert_eq!(lighter(c, 1.0), c);
        assert_eq!(lighter(Color32::from_rgb(255, 0, 0), 3.0), Color32::WHITE);
    }

    #[test]
    fn test_darken_bounds() {
        let c = Color32::from_rgb(100, 0, 200);
        assert_eq!(darken(c, 1.0), c);
        assert_eq!(darken(c, 0.0), Color32::BLACK);
        assert_eq!(darken(c, 0.5), Color32::from_rgb(50, 0, 100));
    }
}
