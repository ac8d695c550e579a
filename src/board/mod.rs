//! Board representation for Gomoku

pub mod board;


// Re-exports
pub use board::{Board, TrialMove};

/// Default board height (15x15 reference board)
pub const DEFAULT_ROWS: u8 = 15;
/// Default board width
pub const DEFAULT_COLS: u8 = 15;
/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Single-character symbol used by the text board
    #[inline]
    pub fn to_char(self) -> char {
        match self {
            Stone::Empty => '.',
            Stone::White => 'w',
            Stone::Black => 'b',
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// Row-major, which is also the search's enumeration order.
impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

/// Geometry bound to a board at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    pub rows: u8,
    pub cols: u8,
    /// Length of an unbroken run that wins the game
    pub win_length: usize,
}

impl BoardConfig {
    /// Check that the geometry describes a playable board.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GameError::InvalidConfig("board must have at least one row and column"));
        }
        if self.win_length < 2 {
            return Err(GameError::InvalidConfig("win length must be at least 2"));
        }
        Ok(())
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            win_length: WIN_LENGTH,
        }
    }
}

/// Errors raised by board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Undo requested with an empty move stack
    #[error("No moves made")]
    NoMovesToUndo,

    /// Coordinates outside the grid
    #[error("Position ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfBounds { row: i32, col: i32, rows: u8, cols: u8 },

    /// Square index outside `0..cells`
    #[error("Square number {square} must be below {cells}")]
    SquareOutOfRange { square: usize, cells: usize },

    /// Rejected board geometry
    #[error("Invalid board configuration: {0}")]
    InvalidConfig(&'static str),

    /// `Stone::Empty` given where a side to move is expected
    #[error("Side to move must be Black or White")]
    InvalidSide,
}
