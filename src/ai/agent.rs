use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, GameError};
use crate::game::GameState;

use super::alphabeta::AlphaBetaAgent;
use super::learned::LearnedAgent;
use super::random::RandomAgent;

/// Universal interface for computer opponents.
pub trait Agent {
    /// Select a column to drop into for the player to move in `state`.
    fn select_action(&mut self, state: &GameState) -> Result<usize, GameError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// Which move-selection algorithm drives a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Random,
    AlphaBeta,
    Learned,
}

impl Strategy {
    /// Build an agent. `depth` applies to alpha-beta search, `seed` to the
    /// random agent (an OS seed is used when absent).
    pub fn build_agent(self, depth: usize, seed: Option<u64>) -> Box<dyn Agent> {
        match self {
            Strategy::Random => match seed {
                Some(seed) => Box::new(RandomAgent::with_seed(seed)),
                None => Box::new(RandomAgent::new()),
            },
            Strategy::AlphaBeta => Box::new(AlphaBetaAgent::new(depth)),
            Strategy::Learned => Box::new(LearnedAgent),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Strategy::Random => "random",
            Strategy::AlphaBeta => "alpha_beta",
            Strategy::Learned => "learned",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(Strategy::Random),
            "alpha_beta" | "alpha-beta" | "alphabeta" => Ok(Strategy::AlphaBeta),
            "learned" => Ok(Strategy::Learned),
            other => Err(ConfigError::Validation(format!(
                "unknown strategy '{other}' (expected 'random', 'alpha_beta', or 'learned')"
            ))),
        }
    }
}
