//! GUI module for the Gomoku game
//!
//! This module provides a native Rust GUI using egui/eframe. The search
//! runs on a worker thread against a copy of the board, so the window
//! stays responsive while the AI thinks.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::GomokuApp;
pub use game_state::{GameMode, GameResult, GameState};
