//! Computer opponents: the agent interface, static evaluation, alpha-beta
//! search, uniform random play, and the learned-opponent placeholder.

mod agent;
mod alphabeta;
pub mod eval;
mod learned;
mod random;

pub use agent::{Agent, Strategy};
pub use alphabeta::{choose_move_alpha_beta, search, winning_move, AlphaBetaAgent, SearchOutcome};
pub use eval::{evaluate, longest_runs, LongestRuns};
pub use learned::{choose_move_learned, LearnedAgent};
pub use random::{choose_move_random, RandomAgent};
