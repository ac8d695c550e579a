//! Game rules for five-in-a-row
//!
//! - [`line`]: contiguous run counting along the 8 board directions
//! - [`win`]: win detection built on the line scanner

pub mod line;
pub mod win;

// Re-exports for convenient access
pub use line::{run_length, Direction, DIRECTIONS};
pub use win::{is_winning, last_mover_won, winning_line};
