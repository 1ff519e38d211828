use tracing::{debug, info};

use crate::ai::Agent;
use crate::error::MatchError;
use crate::game::{Board, GameState, Player};

use super::stats::MatchStats;

/// Result of playing a single game.
#[derive(Debug, Clone)]
pub struct GameRecord {
    /// Columns played, Red's move first.
    pub moves: Vec<usize>,
    pub winner: Option<Player>,
    pub final_state: GameState,
}

impl GameRecord {
    pub fn game_length(&self) -> usize {
        self.moves.len()
    }
}

/// Play one game from an empty copy of `board`. Red moves first.
pub fn play_game(
    red: &mut dyn Agent,
    yellow: &mut dyn Agent,
    board: &Board,
) -> Result<GameRecord, MatchError> {
    let mut empty = board.clone();
    empty.reset();
    let mut state = GameState::with_board(empty, Player::Red);
    let mut moves = Vec::new();

    while !state.is_terminal() {
        let player = state.current_player();
        let agent: &mut dyn Agent = match player {
            Player::Red => &mut *red,
            Player::Yellow => &mut *yellow,
        };

        let action = agent.select_action(&state)?;
        let legal = state.legal_actions();
        if !legal.contains(&action) {
            return Err(MatchError::IllegalAction {
                agent: agent.name().to_string(),
                action,
                legal,
            });
        }

        let row = state.apply_move_mut(action)?;
        debug!(player = player.name(), column = action, row, "move applied");
        moves.push(action);
    }

    Ok(GameRecord {
        moves,
        winner: state.winner(),
        final_state: state,
    })
}

/// Play `games` games with the same seating and tally the results.
/// `on_game` sees every finished game, e.g. to print the final board.
pub fn play_series<F>(
    red: &mut dyn Agent,
    yellow: &mut dyn Agent,
    board: &Board,
    games: usize,
    mut on_game: F,
) -> Result<MatchStats, MatchError>
where
    F: FnMut(usize, &GameRecord),
{
    let mut stats = MatchStats::new();

    for game in 1..=games {
        let record = play_game(red, yellow, board)?;
        info!(
            game,
            moves = record.game_length(),
            winner = record.winner.map_or("draw", Player::name),
            "game finished"
        );
        on_game(game, &record);
        stats.record(&record);
    }

    Ok(stats)
}
