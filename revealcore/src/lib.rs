//! revealcore — shared library for the what-time reveal widget

pub mod animation;
pub mod clock;
pub mod controller;
pub mod error;
pub mod progress;
pub mod repaint;
pub mod safety;
pub mod spark;
pub mod theme;
pub mod timer;
pub mod widgets;

pub use controller::{RevealController, RevealEvent, RevealState, Timings};
pub use repaint::RepaintController;
pub use theme::{Palette, RevealTheme};

/// Get window position offset from the `WHATTIME_CASCADE` env var.
/// Used for staggering multiple widget instances.
pub fn cascade_position() -> Option<egui::Pos2> {
    std::env::var("WHATTIME_CASCADE").ok()
        .and_then(|s| cascade_offset(&s))
}

fn cascade_offset(value: &str) -> Option<egui::Pos2> {
    value.trim().parse::<u32>().ok().map(|n| {
        let offset = (n as f32) * 30.0;
        egui::Pos2::new(100.0 + offset, 100.0 + offset)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cascade_offset() {
        assert_eq!(cascade_offset("0"), Some(egui::Pos2::new(100.0, 100.0)));
        assert_eq!(cascade_offset(" 2 "), Some(egui::Pos2::new(160.0, 160.0)));
        assert_eq!(cascade_offset("left"), None);
    }
}
