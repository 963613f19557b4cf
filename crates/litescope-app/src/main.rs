//! Litescope - a minimal SQLite database browser
//!
//! This is the main entry point for the Litescope application.

mod app;
mod logging;

use std::path::PathBuf;

use crate::app::LitescopeApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    if let Err(e) = logging::init_default() {
        // The one acceptable use of eprintln, before logging is ready.
        eprintln!("failed to initialize logging: {}", e);
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        build_mode = if cfg!(debug_assertions) {
            "debug"
        } else {
            "release"
        },
        "Starting Litescope"
    );

    // Double-clicking a database file in a file manager passes its path as
    // the single argument. Anything that is not an existing file is ignored
    // and the app starts with no database open.
    let startup_file = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .filter(|path| path.is_file());

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Litescope")
            .with_inner_size([1024.0, 720.0])
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Litescope",
        native_options,
        Box::new(move |cc| Ok(Box::new(LitescopeApp::new(cc, startup_file)))),
    )
}
