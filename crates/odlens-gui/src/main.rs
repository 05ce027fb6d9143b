//! OD-Lens - Desktop calculator for the main optical parameters of a
//! camera lens.

mod app;

use eframe::egui;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("OD-Lens")
            .with_inner_size([420.0, 640.0])
            .with_min_inner_size([380.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "OD-Lens",
        options,
        Box::new(|cc| Ok(Box::new(app::OdLensApp::new(cc)))),
    )
}
