use crate::error::GameError;
use crate::game::{Board, GameState};

use super::agent::Agent;

/// Placeholder for a trained opponent. There is no model, so this always
/// fails with [`GameError::NotImplemented`].
pub fn choose_move_learned(_board: &Board) -> Result<usize, GameError> {
    Err(GameError::NotImplemented("learned move selection"))
}

pub struct LearnedAgent;

impl Agent for LearnedAgent {
    fn select_action(&mut self, state: &GameState) -> Result<usize, GameError> {
        choose_move_learned(state.board())
    }

    fn name(&self) -> &str {
        "Learned"
    }
}
