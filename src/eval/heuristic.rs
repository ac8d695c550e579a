//! Heuristic evaluation function for Gomoku board positions
//!
//! Scores how well connected one color's stones are. Only called at
//! depth 0 of the search as a cheap stand-in for the real game value.

use crate::board::{Board, Stone};
use crate::rules::{run_length, DIRECTIONS};

/// Connectivity score for `color`.
///
/// Sums the line scanner's run length over every stone of `color` and
/// all 8 directions, so an isolated stone is worth 8 and every extra
/// neighbour in a line raises the total. The opponent's stones are not
/// subtracted.
#[must_use]
pub fn evaluate(board: &Board, color: Stone) -> i32 {
    board
        .stones(color)
        .map(|pos| {
            DIRECTIONS
                .iter()
                .map(|&dir| run_length(board, pos, dir, color) as i32)
                .sum::<i32>()
        })
        .sum()
}
