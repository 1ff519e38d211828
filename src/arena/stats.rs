use crate::game::Player;

use super::game::GameRecord;

/// Win/draw tally over a series of games.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchStats {
    pub red_wins: usize,
    pub yellow_wins: usize,
    pub draws: usize,
    total_moves: usize,
}

impl MatchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: &GameRecord) {
        match record.winner {
            Some(Player::Red) => self.red_wins += 1,
            Some(Player::Yellow) => self.yellow_wins += 1,
            None => self.draws += 1,
        }
        self.total_moves += record.game_length();
    }

    pub fn games(&self) -> usize {
        self.red_wins + self.yellow_wins + self.draws
    }

    pub fn wins(&self, player: Player) -> usize {
        match player {
            Player::Red => self.red_wins,
            Player::Yellow => self.yellow_wins,
        }
    }

    /// Fraction of games won by `player`.
    pub fn win_rate(&self, player: Player) -> f32 {
        let games = self.games();
        if games == 0 {
            return 0.0;
        }
        self.wins(player) as f32 / games as f32
    }

    pub fn draw_rate(&self) -> f32 {
        let games = self.games();
        if games == 0 {
            return 0.0;
        }
        self.draws as f32 / games as f32
    }

    /// Average game length in moves.
    pub fn average_game_length(&self) -> f32 {
        let games = self.games();
        if games == 0 {
            return 0.0;
        }
        self.total_moves as f32 / games as f32
    }
}
