//! Gomoku GUI
//!
//! A graphical interface for playing Gomoku against the negamax AI or
//! another player. Set `RUST_LOG=info` (or `debug` for per-search stats)
//! to follow the game on stderr.

use gomoku::ui::GomokuApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(|cc| Ok(Box::new(GomokuApp::new(cc)))),
    )
}
