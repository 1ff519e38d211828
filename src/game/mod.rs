//! Core Connect Four game logic: board and move validation, diagonal index,
//! win detection, player types, and the game state machine.

mod board;
mod diagonal;
mod player;
mod state;
pub mod win;

pub use board::{Board, Cell, COLS, ROWS, WIN_LENGTH};
pub use diagonal::{Coord, DiagonalIndex, Run};
pub use player::Player;
pub use state::GameState;
pub use win::{game_status, is_game_over, GameStatus};
