//! Game state management for the Gomoku GUI

use crate::engine::DEFAULT_DEPTH;
use crate::rules::{last_mover_won, winning_line};
use crate::{AIEngine, Board, MoveResult, Pos, Stone};
use log::{info, warn};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

/// Depth used for PvP hints
const HINT_DEPTH: u8 = 1;

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE {
        human_color: Stone,
    },
    /// Player vs Player (hotseat)
    PvP {
        show_suggestions: bool,
    },
}

impl Default for GameMode {
    fn default() -> Self {
        // White opens, so the human moves first by default.
        GameMode::PvE { human_color: Stone::White }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Game result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    /// `None` for a draw (board filled without a winner)
    pub winner: Option<Stone>,
    pub winning_line: Option<Vec<Pos>>,
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub game_over: Option<GameResult>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,
    pub ai_depth: u8,
}

impl GameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            mode,
            game_over: None,
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
            ai_depth: DEFAULT_DEPTH,
        }
    }

    /// Start over in the same mode, keeping the AI depth.
    pub fn reset(&mut self) {
        let depth = self.ai_depth;
        *self = Self::new(self.mode);
        self.ai_depth = depth;
    }

    /// Color to move next
    #[inline]
    pub fn current_turn(&self) -> Stone {
        self.board.side_to_move()
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.current_turn() == human_color,
            GameMode::PvP { .. } => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.current_turn() != human_color,
            GameMode::PvP { .. } => false,
        }
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to place a stone at the given position
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), String> {
        if self.game_over.is_some() {
            return Err("Game is over".to_string());
        }

        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        if !self.board.contains(pos) {
            return Err(format!("({}, {}) is off the board", pos.row, pos.col));
        }

        if !self.board.apply_move(pos) {
            warn!("rejected move at ({}, {}): cell occupied", pos.row, pos.col);
            return Err("Cell is occupied".to_string());
        }

        self.after_move();
        Ok(())
    }

    /// Bookkeeping shared by human and AI moves
    fn after_move(&mut self) {
        self.suggested_move = None;
        self.message = None;
        self.move_timer.stop();

        if last_mover_won(&self.board) {
            let winner = self.board.opponent();
            info!("{:?} wins after {} moves", winner, self.board.move_count());
            self.game_over = Some(GameResult {
                winner: Some(winner),
                winning_line: winning_line(&self.board, winner),
            });
            return;
        }

        if self.board.is_full() {
            self.declare_draw();
            return;
        }

        self.move_timer.start();
    }

    fn declare_draw(&mut self) {
        info!("board full, game drawn");
        self.game_over = Some(GameResult {
            winner: None,
            winning_line: None,
        });
    }

    /// Start AI thinking
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }

        // The worker searches its own copy; the live board stays with the UI.
        let mut board = self.board.clone();
        let depth = self.ai_depth;

        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::with_config(depth);
            let result = engine.get_move_with_stats(&mut board);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.last_ai_result = Some(move_result);
            self.move_timer.set_ai_time(elapsed);

            // Deep searches near the end of the game can score every cell
            // -INF and return no move; play the first empty cell instead.
            let first_empty = self.board.empty_cells().next();
            let Some(pos) = move_result.best_move.or(first_empty) else {
                self.declare_draw();
                return;
            };
            if move_result.best_move.is_none() {
                warn!("AI returned no move with cells left, playing ({}, {})", pos.row, pos.col);
            }

            assert!(
                self.board.apply_move(pos),
                "AI proposed occupied cell ({}, {})",
                pos.row,
                pos.col
            );
            info!(
                "AI plays ({}, {}) score {} ({} nodes, {}ms)",
                pos.row, pos.col, move_result.score, move_result.nodes, move_result.time_ms
            );
            self.after_move();
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Request move suggestion for PvP mode
    pub fn request_suggestion(&mut self) {
        if self.game_over.is_some() || self.is_ai_thinking() {
            return;
        }

        // Shallow enough to run on the UI thread.
        let mut engine = AIEngine::with_config(HINT_DEPTH);
        let result = engine.get_move_with_stats(&mut self.board);

        self.suggested_move = result.best_move;
        self.last_ai_result = Some(result);
    }

    /// Undo last move
    ///
    /// In PvE, keeps undoing until it is the human's turn again, so the
    /// AI's reply and the human move before it go together.
    pub fn undo(&mut self) {
        if self.is_ai_thinking() {
            return;
        }

        if let Err(err) = self.board.undo_last_move() {
            self.message = Some(err.to_string());
            return;
        }
        while !self.is_human_turn() && self.board.move_count() > 0 {
            if self.board.undo_last_move().is_err() {
                break;
            }
        }

        self.game_over = None;
        self.suggested_move = None;
        self.message = None;
        self.move_timer.start();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoardConfig;

    fn pvp() -> GameState {
        GameState::new(GameMode::PvP { show_suggestions: false })
    }

    #[test]
    fn test_human_move_and_turns() {
        let mut state = pvp();
        assert_eq!(state.current_turn(), Stone::White);
        assert!(state.try_place_stone(Pos::new(7, 7)).is_ok());
        assert_eq!(state.current_turn(), Stone::Black);
        assert_eq!(state.board.get(Pos::new(7, 7)), Stone::White);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut state = pvp();
        state.try_place_stone(Pos::new(7, 7)).unwrap();
        assert_eq!(state.try_place_stone(Pos::new(7, 7)), Err("Cell is occupied".to_string()));
        assert_eq!(state.board.move_count(), 1);
    }

    #[test]
    fn test_off_board_rejected() {
        let mut state = pvp();
        assert!(state.try_place_stone(Pos::new(15, 2)).is_err());
        assert_eq!(state.board.move_count(), 0);
    }

    #[test]
    fn test_five_ends_game() {
        let mut state = pvp();
        for col in 0..4 {
            state.try_place_stone(Pos::new(7, col)).unwrap();
            state.try_place_stone(Pos::new(0, col * 2)).unwrap();
        }
        assert!(state.game_over.is_none());

        state.try_place_stone(Pos::new(7, 4)).unwrap();
        let result = state.game_over.clone().unwrap();
        assert_eq!(result.winner, Some(Stone::White));
        assert_eq!(result.winning_line.map(|l| l.len()), Some(5));
        assert_eq!(state.try_place_stone(Pos::new(9, 9)), Err("Game is over".to_string()));
    }

    #[test]
    fn test_undo_pvp_single_move() {
        let mut state = pvp();
        state.try_place_stone(Pos::new(7, 7)).unwrap();
        state.try_place_stone(Pos::new(7, 8)).unwrap();
        state.undo();
        assert_eq!(state.board.move_count(), 1);
        assert_eq!(state.current_turn(), Stone::Black);
    }

    #[test]
    fn test_undo_empty_reports_error() {
        let mut state = pvp();
        state.undo();
        assert_eq!(state.message.as_deref(), Some("No moves made"));
    }

    #[test]
    fn test_undo_pve_returns_to_human() {
        let mut state = GameState::new(GameMode::default());
        state.try_place_stone(Pos::new(7, 7)).unwrap();
        // Stand in for the AI reply.
        assert!(state.board.apply_move(Pos::new(7, 8)));
        assert!(state.is_human_turn());

        state.undo();
        assert_eq!(state.board.move_count(), 0);
        assert!(state.is_human_turn());
    }

    #[test]
    fn test_not_human_turn_in_pve() {
        let mut state = GameState::new(GameMode::PvE { human_color: Stone::Black });
        assert!(state.is_ai_turn());
        assert_eq!(state.try_place_stone(Pos::new(0, 0)), Err("Not your turn".to_string()));
    }

    /// PvE game on a 2x2 board (three in a row, so nobody can win)
    /// where White, the AI, is to move with two cells left.
    fn endgame_vs_ai() -> GameState {
        let mut state = GameState::new(GameMode::PvE { human_color: Stone::Black });
        let config = BoardConfig { rows: 2, cols: 2, win_length: 3 };
        state.board = Board::with_config(config, Stone::White).unwrap();
        state.board.apply_move(Pos::new(0, 0));
        state.board.apply_move(Pos::new(0, 1));
        state.ai_depth = 3;
        state
    }

    fn wait_for_ai(state: &mut GameState) {
        for _ in 0..500 {
            state.check_ai_result();
            if !state.is_ai_thinking() {
                return;
            }
            thread::sleep(Duration::from_millis(10));
        }
        panic!("AI never answered");
    }

    #[test]
    fn test_ai_without_move_plays_first_empty_cell() {
        let mut state = endgame_vs_ai();
        assert!(state.is_ai_turn());

        state.start_ai_thinking();
        wait_for_ai(&mut state);

        assert_eq!(state.last_ai_result.map(|r| r.best_move), Some(None));
        assert_eq!(state.board.get(Pos::new(1, 0)), Stone::White);
        assert_eq!(state.board.move_count(), 3);
        assert!(state.is_human_turn());
        assert!(state.game_over.is_none());

        state.try_place_stone(Pos::new(1, 1)).unwrap();
        let result = state.game_over.clone().unwrap();
        assert_eq!(result.winner, None);
    }

    #[test]
    fn test_ai_without_move_on_full_board_draws() {
        let mut state = endgame_vs_ai();
        let (tx, rx) = channel();
        state.ai_state = AiState::Thinking { receiver: rx, start_time: Instant::now() };
        // The board fills up behind the worker's back.
        state.board.apply_move(Pos::new(1, 0));
        state.board.apply_move(Pos::new(1, 1));
        let empty = AIEngine::with_config(1).get_move_with_stats(&mut state.board);
        tx.send(empty).unwrap();

        state.check_ai_result();

        assert!(!state.is_ai_thinking());
        assert_eq!(state.game_over.clone().map(|r| r.winner), Some(None));
        state.start_ai_thinking();
        assert!(!state.is_ai_thinking());
    }

    #[test]
    fn test_suggestion_leaves_board_untouched() {
        let mut state = pvp();
        state.try_place_stone(Pos::new(7, 7)).unwrap();
        let before = state.board.clone();
        state.request_suggestion();
        assert!(state.suggested_move.is_some());
        assert_eq!(state.board, before);
    }

    #[test]
    fn test_reset_keeps_depth() {
        let mut state = pvp();
        state.ai_depth = 2;
        state.try_place_stone(Pos::new(1, 1)).unwrap();
        state.reset();
        assert_eq!(state.board.move_count(), 0);
        assert_eq!(state.ai_depth, 2);
    }
}
