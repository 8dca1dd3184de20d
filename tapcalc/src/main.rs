//! TapCalc — a touchscreen calculator
//!
//! Big-key equation entry, left-to-right arithmetic with sin/cos/tan in
//! degrees, and a scrolling history of past calculations.

mod app;

use app::TapCalcApp;
use eframe::NativeOptions;
use tapcore::prefs::Prefs;
use tapcore::TapTheme;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let prefs = match Prefs::load() {
        Ok(prefs) => prefs,
        Err(err) => {
            // Normal on first run — there is no file yet.
            tracing::debug!(%err, "using default preferences");
            Prefs::default()
        }
    };

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 800.0])
            .with_title("tapcalc"),
        ..Default::default()
    };

    eframe::run_native(
        "tapcalc",
        options,
        Box::new(move |cc| {
            TapTheme::scaled(prefs.font_scale).apply(&cc.egui_ctx);
            Box::new(TapCalcApp::new(cc, prefs))
        }),
    )
}
