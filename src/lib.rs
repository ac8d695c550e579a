//! Gomoku rule engine with a negamax AI
//!
//! Two players alternate placing stones on a rectangular grid (15x15 by
//! default). White moves first. The first player to complete an unbroken
//! run of five stones horizontally, vertically or diagonally wins; longer
//! runs also count.
//!
//! # Architecture
//!
//! - [`board`]: Board state, move application and undo
//! - [`rules`]: Run counting and win detection
//! - [`eval`]: Static evaluation heuristic
//! - [`search`]: Depth-limited negamax with alpha-beta pruning
//! - [`engine`]: Engine facade that picks and plays moves
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, Board, Pos};
//!
//! let mut board = Board::new();
//! board.apply_move(Pos::new(7, 7));
//!
//! // Depth 1 keeps the doc test fast
//! let mut engine = AIEngine::with_config(1);
//! if let Some(pos) = engine.get_move(&mut board) {
//!     board.apply_move(pos);
//!     println!("AI plays at ({}, {})", pos.row, pos.col);
//! }
//! println!("{}", board);
//! ```
//!
//! # Search
//!
//! The search enumerates every empty cell in row-major order with no move
//! ordering, transposition table or iterative deepening. It is exact but
//! slow: depth 3 on an open 15x15 board visits millions of nodes.

pub mod board;
pub mod engine;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, BoardConfig, GameError, Pos, Stone};
pub use engine::{AIEngine, EngineConfig, MoveResult};
