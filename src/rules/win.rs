//! Win condition checking
//!
//! A color wins with an unbroken run of `win_length` stones along a row,
//! column or diagonal. Longer runs also count. Nothing is cached: every
//! call rescans the board.

use crate::board::{Board, Pos, Stone};

use super::line::{run_length, DIRECTIONS};

/// Check if `color` has a winning run anywhere on the board.
///
/// To detect a completed win, pass the color that just moved:
/// by then the side to move has already flipped.
pub fn is_winning(board: &Board, color: Stone) -> bool {
    let target = board.win_length();
    board.stones(color).any(|pos| {
        DIRECTIONS
            .iter()
            .any(|&dir| run_length(board, pos, dir, color) == target)
    })
}

/// Check if the last move completed a win for the side that made it.
#[inline]
pub fn last_mover_won(board: &Board) -> bool {
    board.move_count() > 0 && is_winning(board, board.opponent())
}

/// Positions of a winning run of `color`, ordered from the scanned end.
pub fn winning_line(board: &Board, color: Stone) -> Option<Vec<Pos>> {
    let target = board.win_length();
    for pos in board.stones(color) {
        for &(dr, dc) in &DIRECTIONS {
            if run_length(board, pos, (dr, dc), color) != target {
                continue;
            }
            let line: Vec<Pos> = (0..target as i32)
                .filter_map(|i| board.pos_at(i32::from(pos.row) - dr * i, i32::from(pos.col) - dc * i))
                .collect();
            return Some(line);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardConfig;

    /// Empty board with `color` stones placed directly, the opponent
    /// answering along the bottom row.
    fn board_with(color: Stone, stones: &[(u8, u8)]) -> Board {
        let mut board = Board::with_config(BoardConfig::default(), color).unwrap();
        for (i, &(r, c)) in stones.iter().enumerate() {
            assert!(board.apply_move(Pos::new(r, c)));
            // Spread the replies out so they never form a line of their own.
            assert!(board.apply_move(Pos::new(14, (i as u8 * 2) % 15)));
        }
        board
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let board = board_with(Stone::White, &[(9, 0), (9, 1), (9, 2), (9, 3), (9, 4)]);
        assert!(is_winning(&board, Stone::White));
        assert!(!is_winning(&board, Stone::Black));
    }

    #[test]
    fn test_five_in_row_vertical() {
        let board = board_with(Stone::Black, &[(0, 9), (1, 9), (2, 9), (3, 9), (4, 9)]);
        assert!(is_winning(&board, Stone::Black));
    }

    #[test]
    fn test_five_in_row_diagonal() {
        let board = board_with(Stone::White, &[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);
        assert!(is_winning(&board, Stone::White));
    }

    #[test]
    fn test_diagonal_sw_five() {
        // Diagonal from (4, 8) to (8, 4)
        let board = board_with(Stone::White, &[(4, 8), (5, 7), (6, 6), (7, 5), (8, 4)]);
        assert!(is_winning(&board, Stone::White));
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let board = board_with(Stone::White, &[(9, 0), (9, 1), (9, 2), (9, 3), (9, 4), (9, 5)]);
        assert!(is_winning(&board, Stone::White));
    }

    #[test]
    fn test_four_in_row_not_win() {
        let board = board_with(Stone::White, &[(9, 0), (9, 1), (9, 2), (9, 3)]);
        assert!(!is_winning(&board, Stone::White));
    }

    #[test]
    fn test_gapped_line_not_win() {
        let board = board_with(Stone::White, &[(9, 0), (9, 1), (9, 2), (9, 3), (9, 5)]);
        assert!(!is_winning(&board, Stone::White));
    }

    #[test]
    fn test_five_at_corner() {
        let board = board_with(Stone::White, &[(10, 10), (11, 11), (12, 12), (13, 13), (14, 14)]);
        assert!(is_winning(&board, Stone::White));
    }

    #[test]
    fn test_empty_not_five() {
        let board = Board::new();
        assert!(!is_winning(&board, Stone::Black));
        assert!(!is_winning(&board, Stone::White));
        assert!(!last_mover_won(&board));
        assert!(winning_line(&board, Stone::White).is_none());
    }

    #[test]
    fn test_last_mover_won() {
        let mut board = board_with(Stone::White, &[(9, 0), (9, 1), (9, 2), (9, 3)]);
        assert!(!last_mover_won(&board));
        assert!(board.apply_move(Pos::new(9, 4)));
        assert!(last_mover_won(&board));
    }

    #[test]
    fn test_winning_line_positions() {
        let board = board_with(Stone::White, &[(6, 2), (6, 3), (6, 4), (6, 5), (6, 6)]);
        let mut line = winning_line(&board, Stone::White).unwrap();
        line.sort();
        let expected: Vec<Pos> = (2..7).map(|c| Pos::new(6, c)).collect();
        assert_eq!(line, expected);
    }

    #[test]
    fn test_configured_win_length() {
        let config = BoardConfig { rows: 6, cols: 6, win_length: 3 };
        let mut board = Board::with_config(config, Stone::Black).unwrap();
        for (r, c) in [(0, 0), (5, 5), (1, 1), (5, 3)] {
            board.apply_move(Pos::new(r, c));
        }
        assert!(!is_winning(&board, Stone::Black));
        board.apply_move(Pos::new(2, 2));
        assert!(is_winning(&board, Stone::Black));
    }
}
