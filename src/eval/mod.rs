//! Evaluation module for Gomoku AI
//!
//! Contains the connectivity heuristic used at the search horizon.

pub mod heuristic;

pub use heuristic::evaluate;
