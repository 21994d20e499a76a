//! whattime — click the button, wait for the bar, see the time
//!
//! A small decorative clock: nothing is loaded while the bar fills.

mod app;

use app::WhatTimeApp;
use eframe::NativeOptions;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(app::WINDOW_SIZE)
        .with_resizable(false)
        .with_title(app::WINDOW_TITLE);

    if let Some(pos) = revealcore::cascade_position() {
        viewport = viewport.with_position(pos);
    }

    let options = NativeOptions {
        viewport,
        ..Default::default()
    };

    tracing::info!("starting {}", app::WINDOW_TITLE);
    eframe::run_native(
        app::WINDOW_TITLE,
        options,
        Box::new(|cc| {
            let theme = revealcore::RevealTheme::default();
            theme.apply(&cc.egui_ctx);
            Box::new(WhatTimeApp::new(cc, theme))
        }),
    )
}
