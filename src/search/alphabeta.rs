//! Negamax search with alpha-beta pruning
//!
//! This module implements the core search algorithm for the Gomoku AI.
//! Each ply scores the position from the perspective of the side to move
//! and the parent negates the child's score.
//!
//! # Features
//!
//! - Full-width enumeration of empty cells in row-major order
//! - Alpha-beta cutoffs with a fail-soft best score
//! - In-place make/unmake through [`TrialMove`](crate::board::TrialMove)
//!   guards, so the board is restored on every exit path
//! - Deterministic move choice: the first cell reaching the maximum wins
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Pos};
//! use gomoku::search::{Searcher, INF};
//!
//! let mut board = Board::new();
//! board.apply_move(Pos::new(7, 7));
//!
//! let mut searcher = Searcher::new();
//! let result = searcher.search(&mut board, 1, -INF, INF, 1);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: ({}, {})", best_move.row, best_move.col);
//! }
//! ```

use log::debug;

use crate::board::{Board, Pos};
use crate::eval::evaluate;
use crate::rules::is_winning;

/// Score of a position whose previous ply completed a winning run
pub const WIN_SCORE: i32 = 1_000_000;

/// Infinity score for alpha-beta bounds
pub const INF: i32 = WIN_SCORE + 1;

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered, root included
    pub nodes: u64,
    /// Nodes where `alpha >= beta` stopped the move loop
    pub beta_cutoffs: u64,
    /// Depth-0 evaluations
    pub leaf_evals: u64,
    /// Nodes where the previous ply had already won
    pub terminal_hits: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found; `None` at terminal, depth-0 and full-board nodes
    pub best_move: Option<Pos>,
    /// Score from the perspective of the side to move at the root
    pub score: i32,
    /// Requested depth
    pub depth: u8,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Depth-limited negamax searcher.
#[derive(Debug, Default)]
pub struct Searcher {
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Search `depth` plies from the current position.
    ///
    /// `sign` is +1 for the side being optimised and -1 for its opponent;
    /// it scales terminal and horizon scores and flips at every ply. The
    /// board is borrowed exclusively and is bit-identical on return.
    pub fn search(
        &mut self,
        board: &mut Board,
        depth: u8,
        alpha: i32,
        beta: i32,
        sign: i32,
    ) -> SearchResult {
        debug_assert!(sign == 1 || sign == -1, "sign must be +1 or -1, got {}", sign);
        self.stats = SearchStats::default();

        let (score, best_move) = self.negamax(board, depth, alpha, beta, sign);

        debug!(
            "search depth {} -> {:?} score {} ({} nodes, {} cutoffs)",
            depth, best_move, score, self.stats.nodes, self.stats.beta_cutoffs
        );

        SearchResult {
            best_move,
            score,
            depth,
            stats: self.stats,
        }
    }

    /// Search with the full window for the side to move.
    pub fn best_move(&mut self, board: &mut Board, depth: u8) -> SearchResult {
        self.search(board, depth, -INF, INF, 1)
    }

    /// Statistics of the last search
    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    fn negamax(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        beta: i32,
        sign: i32,
    ) -> (i32, Option<Pos>) {
        self.stats.nodes += 1;

        // The previous ply may already have completed a line.
        if is_winning(board, board.opponent()) {
            self.stats.terminal_hits += 1;
            return (sign * WIN_SCORE, None);
        }

        if depth == 0 {
            self.stats.leaf_evals += 1;
            return (sign * evaluate(board, board.side_to_move()), None);
        }

        // Collected up front: the board is mutated while we iterate.
        let candidates: Vec<Pos> = board.empty_cells().collect();

        let mut best_score = -INF;
        let mut best_move = None;

        for mov in candidates {
            // Dropping the guard takes the move back.
            let Some(mut child) = board.trial_move(mov) else {
                continue;
            };
            let score = -self.negamax(&mut child, depth - 1, -beta, -alpha, -sign).0;
            drop(child);

            if score > best_score {
                best_score = score;
                best_move = Some(mov);
            }

            alpha = alpha.max(score);
            if alpha >= beta {
                self.stats.beta_cutoffs += 1;
                break;
            }
        }

        (best_score, best_move)
    }
}
