use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::error::GameError;
use crate::game::{Board, GameState};

use super::agent::Agent;

/// Pick uniformly among the columns that can still take a piece.
pub fn choose_move_random<R: Rng>(board: &Board, rng: &mut R) -> Result<usize, GameError> {
    let columns = board.legal_columns();
    if columns.is_empty() {
        return Err(GameError::NoLegalMoves);
    }
    let idx = rng.random_range(0..columns.len());
    Ok(columns[idx])
}

/// An agent that selects uniformly at random from legal actions.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic agent for reproducible matches.
    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, state: &GameState) -> Result<usize, GameError> {
        if state.is_terminal() {
            return Err(GameError::GameOver);
        }
        choose_move_random(state.board(), &mut self.rng)
    }

    fn name(&self) -> &str {
        "Random"
    }
}
