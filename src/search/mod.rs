//! Search module for Gomoku AI
//!
//! Depth-limited negamax with alpha-beta pruning over a single mutable board.

pub mod alphabeta;

pub use alphabeta::{SearchResult, SearchStats, Searcher, INF, WIN_SCORE};
