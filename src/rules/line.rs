//! Line scanner shared by win detection and evaluation

use crate::board::{Board, Pos, Stone};

/// A step on the grid as `(row delta, col delta)`
pub type Direction = (i32, i32);

/// All 8 directions: both signs of the 4 axes.
pub const DIRECTIONS: [Direction; 8] = [
    (1, 0),   // Down
    (-1, 0),  // Up
    (0, 1),   // Right
    (0, -1),  // Left
    (1, 1),   // Diagonal SE
    (-1, 1),  // Diagonal NE
    (-1, -1), // Diagonal NW
    (1, -1),  // Diagonal SW
];

/// Length of the run of `color` that ends at `pos`, walking against `dir`.
///
/// `pos` must hold `color`. Takes at most `win_length - 1` steps, so the
/// result lies in `1..=win_length`.
#[inline]
pub fn run_length(board: &Board, pos: Pos, dir: Direction, color: Stone) -> usize {
    debug_assert_eq!(board.get(pos), color);

    let (dr, dc) = dir;
    let mut r = i32::from(pos.row);
    let mut c = i32::from(pos.col);
    let mut count = 1;

    for _ in 1..board.win_length() {
        r -= dr;
        c -= dc;
        match board.pos_at(r, c) {
            Some(next) if board.get(next) == color => count += 1,
            _ => break,
        }
    }
    count
}
