//! Headless games between two computer agents and their result tallies.

mod game;
mod stats;

pub use game::{play_game, play_series, GameRecord};
pub use stats::MatchStats;
