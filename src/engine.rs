//! Main AI Engine wrapping the negamax searcher
//!
//! The engine is the collaborator-facing entry point: it runs a full-window
//! search for the side to move, times it, and can apply the chosen move.
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Pos};
//!
//! // Shallow depth keeps the example fast
//! let mut engine = AIEngine::with_config(1);
//! let mut board = Board::new();
//! board.apply_move(Pos::new(7, 7));
//!
//! let result = engine.get_move_with_stats(&mut board);
//! println!("Best move: {:?}", result.best_move);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use log::info;

use crate::board::{Board, Pos};
use crate::search::{SearchResult, Searcher};

/// Search depth used when none is configured
pub const DEFAULT_DEPTH: u8 = 3;

/// Engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Plies searched per move
    pub depth: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { depth: DEFAULT_DEPTH }
    }
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Negamax score for the side to move
    pub score: i32,
    /// Depth searched
    pub depth: u8,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
    /// Alpha-beta cutoffs during the search
    pub cutoffs: u64,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            depth: result.depth,
            time_ms,
            nodes: result.stats.nodes,
            cutoffs: result.stats.beta_cutoffs,
        }
    }
}

/// Main AI Engine for Gomoku.
///
/// Plays for whichever side is to move on the board it is handed.
pub struct AIEngine {
    searcher: Searcher,
    config: EngineConfig,
}

impl AIEngine {
    /// Create a new AI engine searching [`DEFAULT_DEPTH`] plies.
    #[must_use]
    pub fn new() -> Self {
        Self {
            searcher: Searcher::new(),
            config: EngineConfig::default(),
        }
    }

    /// Create an AI engine with a custom search depth.
    ///
    /// ```
    /// use gomoku::AIEngine;
    ///
    /// let engine = AIEngine::with_config(2);
    /// assert_eq!(engine.max_depth(), 2);
    /// ```
    #[must_use]
    pub fn with_config(max_depth: u8) -> Self {
        Self {
            searcher: Searcher::new(),
            config: EngineConfig { depth: max_depth },
        }
    }

    /// Get the best move for the side to move.
    ///
    /// Returns `None` when the board is full or the game is already won.
    /// It can also be `None` with cells still empty: when the depth reaches
    /// past the end of the game, every line can bottom out on a full board
    /// scoring `-INF`, and no move ever beats the initial best.
    #[must_use]
    pub fn get_move(&mut self, board: &mut Board) -> Option<Pos> {
        self.get_move_with_stats(board).best_move
    }

    /// Get the best move with search statistics.
    ///
    /// The board is searched in place and handed back unchanged.
    pub fn get_move_with_stats(&mut self, board: &mut Board) -> MoveResult {
        let start = Instant::now();
        let result = self.searcher.best_move(board, self.config.depth);
        MoveResult::from_search(result, start.elapsed().as_millis() as u64)
    }

    /// Search and apply the chosen move.
    ///
    /// Returns `None` when the search proposes no move (see
    /// [`get_move`](Self::get_move)); the board is left as it was. The
    /// search only ever proposes empty cells, so a rejected apply is an
    /// engine bug and panics.
    pub fn play(&mut self, board: &mut Board) -> Option<MoveResult> {
        let side = board.side_to_move();
        let result = self.get_move_with_stats(board);
        let pos = result.best_move?;

        assert!(
            board.apply_move(pos),
            "search proposed occupied cell ({}, {})",
            pos.row,
            pos.col
        );
        info!(
            "{:?} plays ({}, {}) score {} in {}ms",
            side, pos.row, pos.col, result.score, result.time_ms
        );
        Some(result)
    }

    /// Set maximum search depth.
    pub fn set_max_depth(&mut self, depth: u8) {
        self.config.depth = depth;
    }

    #[must_use]
    pub fn max_depth(&self) -> u8 {
        self.config.depth
    }

    #[must_use]
    pub fn config(&self) -> EngineConfig {
        self.config
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardConfig, Stone};
    use crate::rules::last_mover_won;
    use crate::search::{INF, WIN_SCORE};

    #[test]
    fn test_engine_creation() {
        let engine = AIEngine::new();
        assert_eq!(engine.max_depth(), 3);
        assert_eq!(engine.config(), EngineConfig::default());
    }

    #[test]
    fn test_engine_with_config() {
        let engine = AIEngine::with_config(2);
        assert_eq!(engine.max_depth(), 2);
    }

    #[test]
    fn test_engine_set_depth() {
        let mut engine = AIEngine::default();
        engine.set_max_depth(1);
        assert_eq!(engine.max_depth(), 1);
    }

    #[test]
    fn test_engine_finds_immediate_win() {
        let mut board = Board::new();
        // White four at row 9, Black blocks the left end.
        for (w, b) in [((9, 1), (9, 0)), ((9, 2), (0, 0)), ((9, 3), (0, 2)), ((9, 4), (0, 4))] {
            board.apply_move(Pos::new(w.0, w.1));
            board.apply_move(Pos::new(b.0, b.1));
        }

        let mut engine = AIEngine::with_config(1);
        let result = engine.get_move_with_stats(&mut board);

        assert_eq!(result.best_move, Some(Pos::new(9, 5)));
        assert_eq!(result.score, WIN_SCORE);
        assert_eq!(result.depth, 1);
        assert_eq!(board.move_count(), 8);
    }

    #[test]
    fn test_engine_play_applies_move() {
        let mut board = Board::new();
        for (w, b) in [((9, 1), (9, 0)), ((9, 2), (0, 0)), ((9, 3), (0, 2)), ((9, 4), (0, 4))] {
            board.apply_move(Pos::new(w.0, w.1));
            board.apply_move(Pos::new(b.0, b.1));
        }

        let mut engine = AIEngine::with_config(1);
        let result = engine.play(&mut board).unwrap();

        assert_eq!(board.last_move(), result.best_move);
        assert_eq!(board.get(Pos::new(9, 5)), Stone::White);
        assert!(last_mover_won(&board));
    }

    #[test]
    fn test_engine_full_board_returns_none() {
        let config = BoardConfig { rows: 2, cols: 2, win_length: 3 };
        let mut board = Board::with_config(config, Stone::White).unwrap();
        for square in 0..4 {
            let pos = board.pos_from_square(square).unwrap();
            board.apply_move(pos);
        }

        let mut engine = AIEngine::with_config(2);
        assert_eq!(engine.get_move(&mut board), None);
        assert!(engine.play(&mut board).is_none());
        assert_eq!(board.move_count(), 4);
    }

    #[test]
    fn test_engine_no_move_with_cells_left() {
        // Depth 3 runs past the last two empty cells: every line ends on a
        // full board at -INF and nothing beats the initial best.
        let config = BoardConfig { rows: 2, cols: 2, win_length: 3 };
        let mut board = Board::with_config(config, Stone::White).unwrap();
        board.apply_move(Pos::new(0, 0));
        board.apply_move(Pos::new(0, 1));
        let before = board.clone();

        let mut engine = AIEngine::with_config(3);
        let result = engine.get_move_with_stats(&mut board);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, -INF);
        assert!(!board.is_full());

        assert!(engine.play(&mut board).is_none());
        assert_eq!(board, before);
    }

    #[test]
    fn test_engine_multiple_searches() {
        let config = BoardConfig { rows: 5, cols: 5, win_length: 4 };
        let mut board = Board::with_config(config, Stone::Black).unwrap();
        let mut engine = AIEngine::with_config(2);

        for _ in 0..3 {
            assert!(engine.play(&mut board).is_some());
        }
        assert_eq!(board.move_count(), 3);
        assert_eq!(board.side_to_move(), Stone::White);
    }
}
