//! Board structure with a move stack for exact undo

use std::fmt;
use std::ops::{Deref, DerefMut};

use super::{BoardConfig, GameError, Pos, Stone};

/// Game board: cell grid, side to move and the stack of applied moves.
///
/// Every non-empty cell is named by exactly one entry of the move stack,
/// so the stack length doubles as the move counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    config: BoardConfig,
    /// Row-major cells
    cells: Vec<Stone>,
    side: Stone,
    /// Applied moves, oldest first
    history: Vec<Pos>,
}

impl Board {
    /// Empty 15x15 board, White to move first.
    pub fn new() -> Self {
        Self::empty(BoardConfig::default(), Stone::White)
    }

    /// Empty board with custom geometry and first side.
    pub fn with_config(config: BoardConfig, first_side: Stone) -> Result<Self, GameError> {
        config.validate()?;
        if first_side == Stone::Empty {
            return Err(GameError::InvalidSide);
        }
        Ok(Self::empty(config, first_side))
    }

    fn empty(config: BoardConfig, side: Stone) -> Self {
        Self {
            config,
            cells: vec![Stone::Empty; config.cell_count()],
            side,
            history: Vec::with_capacity(config.cell_count()),
        }
    }

    #[inline]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.config.rows as usize
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.config.cols as usize
    }

    #[inline]
    pub fn win_length(&self) -> usize {
        self.config.win_length
    }

    /// Check if position lies on the grid
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.config.rows && pos.col < self.config.cols
    }

    /// Position at signed coordinates, `None` when off the grid.
    #[inline]
    pub fn pos_at(&self, row: i32, col: i32) -> Option<Pos> {
        if row >= 0 && row < self.rows() as i32 && col >= 0 && col < self.cols() as i32 {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Bounds-checked position for callers holding raw coordinates.
    pub fn pos(&self, row: i32, col: i32) -> Result<Pos, GameError> {
        self.pos_at(row, col).ok_or(GameError::OutOfBounds {
            row,
            col,
            rows: self.config.rows,
            cols: self.config.cols,
        })
    }

    /// Convert a row-major square number to a position.
    pub fn pos_from_square(&self, square: usize) -> Result<Pos, GameError> {
        let cells = self.cells.len();
        if square >= cells {
            return Err(GameError::SquareOutOfRange { square, cells });
        }
        Ok(Pos::new((square / self.cols()) as u8, (square % self.cols()) as u8))
    }

    /// Cell index; an off-board position is a caller bug.
    #[inline]
    fn index(&self, pos: Pos) -> usize {
        assert!(
            self.contains(pos),
            "position ({}, {}) outside {}x{} board",
            pos.row,
            pos.col,
            self.config.rows,
            self.config.cols
        );
        pos.row as usize * self.cols() + pos.col as usize
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[self.index(pos)]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Color whose stone the next `apply_move` places
    #[inline]
    pub fn side_to_move(&self) -> Stone {
        self.side
    }

    /// Color that is not to move (the one that moved last)
    #[inline]
    pub fn opponent(&self) -> Stone {
        self.side.opponent()
    }

    /// Number of moves on the stack
    #[inline]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Applied moves, oldest first
    #[inline]
    pub fn moves(&self) -> &[Pos] {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.history.last().copied()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.history.len() == self.cells.len()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        let cols = self.cols();
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == Stone::Empty)
            .map(move |(idx, _)| Pos::new((idx / cols) as u8, (idx % cols) as u8))
    }

    /// Positions holding `stone`, row-major
    pub fn stones(&self, stone: Stone) -> impl Iterator<Item = Pos> + '_ {
        let cols = self.cols();
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, s)| **s == stone)
            .map(move |(idx, _)| Pos::new((idx / cols) as u8, (idx % cols) as u8))
    }

    /// Place the side to move's stone.
    ///
    /// Returns `false` and leaves the board untouched when the cell is
    /// occupied. Panics when `pos` is off the board.
    pub fn apply_move(&mut self, pos: Pos) -> bool {
        let idx = self.index(pos);
        if self.cells[idx] != Stone::Empty {
            return false;
        }
        self.cells[idx] = self.side;
        self.history.push(pos);
        self.side = self.side.opponent();
        true
    }

    /// Take back the most recent move.
    pub fn undo_last_move(&mut self) -> Result<Pos, GameError> {
        self.retract().ok_or(GameError::NoMovesToUndo)
    }

    fn retract(&mut self) -> Option<Pos> {
        let pos = self.history.pop()?;
        let idx = self.index(pos);
        self.cells[idx] = Stone::Empty;
        self.side = self.side.opponent();
        Some(pos)
    }

    /// Apply a move that is taken back when the guard drops.
    ///
    /// Returns `None` if the cell is occupied.
    pub fn trial_move(&mut self, pos: Pos) -> Option<TrialMove<'_>> {
        if self.apply_move(pos) {
            Some(TrialMove { board: self, pos })
        } else {
            None
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board:")?;
        for row in self.cells.chunks(self.cols()) {
            for stone in row {
                write!(f, "{}  ", stone.to_char())?;
            }
            writeln!(f)?;
        }
        write!(f, "Side to move: {}", self.side.to_char())
    }
}

/// Scoped move on a borrowed board.
///
/// Derefs to the board so a search can recurse on it; dropping the guard
/// retracts the move, whichever way the enclosing frame exits. Moves applied
/// through the guard must be taken back before it drops, otherwise the
/// drop panics.
pub struct TrialMove<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl TrialMove<'_> {
    /// The move this guard will take back
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for TrialMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for TrialMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        let undone = self.board.retract();
        assert_eq!(undone, Some(self.pos), "trial moves must unwind in LIFO order");
    }
}
