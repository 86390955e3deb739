//! `bisect-gui`: a desktop window for bisection root finding.

mod app;
mod form;
mod midpoints;

use eframe::egui;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use app::BisectApp;

fn main() -> Result<(), eframe::Error> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Bisection Method Calculator")
            .with_inner_size([960.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Bisection Method Calculator",
        options,
        Box::new(|_cc| Ok(Box::new(BisectApp::default()))),
    )
}
