use crate::error::GameError;

use super::win::{game_status, GameStatus};
use super::{Board, Player};

/// A board together with whose turn it is and how the game stands.
///
/// This replaces global turn and game-over flags: callers hold a
/// `GameState` and poll [`GameState::status`] after every move.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
}

impl GameState {
    /// Create initial game state on a standard board
    pub fn initial() -> Self {
        Self::with_board(Board::standard(), Player::Red) // Red starts
    }

    /// Wrap an existing board, recomputing the status from its contents.
    pub fn with_board(board: Board, to_move: Player) -> Self {
        let status = game_status(&board);
        GameState {
            board,
            current_player: to_move,
            status,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status.is_over()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_columns()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, GameError> {
        let mut next = self.clone();
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply move mutably. On error the state is left untouched.
    pub fn apply_move_mut(&mut self, column: usize) -> Result<usize, GameError> {
        if self.is_terminal() {
            return Err(GameError::GameOver);
        }

        let row = self.board.apply_drop(column, self.current_player)?;
        self.status = game_status(&self.board);
        self.current_player = self.current_player.other();

        Ok(row)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, COLS, ROWS};

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Player::Red);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_actions().len(), COLS);
    }

    #[test]
    fn test_apply_move() {
        let state = GameState::initial();
        let new_state = state.apply_move(3).unwrap();

        assert_eq!(new_state.current_player(), Player::Yellow);
        assert_eq!(new_state.board().get(0, 3), Ok(Cell::Red));
        // Original is unchanged
        assert_eq!(state.board().get(0, 3), Ok(Cell::Empty));
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::initial();

        // Red wins with horizontal line
        for col in 0..4 {
            state = state.apply_move(col).unwrap(); // Red
            if col < 3 {
                state = state.apply_move(col).unwrap(); // Yellow (row above)
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.status(), GameStatus::Won(Player::Red));
        assert!(state.legal_actions().is_empty());
        assert_eq!(state.apply_move(5), Err(GameError::GameOver));
    }

    #[test]
    fn test_failed_move_keeps_turn() {
        let mut state = GameState::initial();
        for _ in 0..ROWS {
            state.apply_move_mut(0).unwrap();
        }
        let before = state.clone();
        assert_eq!(state.apply_move_mut(0), Err(GameError::ColumnFull(0)));
        assert_eq!(state.apply_move_mut(COLS), Err(GameError::InvalidColumn(COLS)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_with_board_detects_finished_game() {
        let mut board = Board::standard();
        for _ in 0..4 {
            board.apply_drop(2, Player::Yellow).unwrap();
        }
        let state = GameState::with_board(board, Player::Red);
        assert_eq!(state.winner(), Some(Player::Yellow));
        assert!(state.is_terminal());
    }
}
