//! Win detection over a board snapshot.
//!
//! Every line (row, column, or precomputed diagonal run) is scanned left to
//! right with a single running counter. When several lines win at once the
//! first one in scan order is reported: rows, then columns, then diagonals,
//! each in ascending index order.

use super::board::{Board, Cell};
use super::player::Player;

/// Final or ongoing status of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

/// Pair each cell of a line with the length of the equal-valued run ending
/// at it. The counter restarts at 1 whenever the value changes.
pub fn run_lengths<I>(cells: I) -> impl Iterator<Item = (Cell, usize)>
where
    I: IntoIterator<Item = Cell>,
{
    cells
        .into_iter()
        .scan((Cell::Empty, 0usize), |(last, count), cell| {
            if cell == *last {
                *count += 1;
            } else {
                *last = cell;
                *count = 1;
            }
            Some((cell, *count))
        })
}

/// Return the player owning the first run of `win_length` equal non-empty
/// cells in `cells`.
pub fn run_winner_in_line<I>(cells: I, win_length: usize) -> Option<Player>
where
    I: IntoIterator<Item = Cell>,
{
    run_lengths(cells)
        .filter(|&(_, len)| len >= win_length)
        .find_map(|(cell, _)| cell.player())
}

pub fn row_winner(board: &Board, row: usize) -> Option<Player> {
    let cells = board.row(row).ok()?;
    run_winner_in_line(cells.iter().copied(), board.win_length())
}

pub fn column_winner(board: &Board, col: usize) -> Option<Player> {
    let cells = board.column(col).ok()?;
    run_winner_in_line(cells, board.win_length())
}

pub fn any_row_winner(board: &Board) -> Option<Player> {
    (0..board.rows()).find_map(|row| row_winner(board, row))
}

pub fn any_column_winner(board: &Board) -> Option<Player> {
    (0..board.cols()).find_map(|col| column_winner(board, col))
}

/// Check every diagonal run through `(row, col)`.
pub fn diagonal_winner(board: &Board, row: usize, col: usize) -> Option<Player> {
    let runs = board.diagonals_through(row, col).ok()?;
    runs.iter().find_map(|run| {
        let cells = run
            .iter()
            .map(|&(r, c)| board.get(r, c).unwrap_or(Cell::Empty));
        run_winner_in_line(cells, board.win_length())
    })
}

pub fn any_diagonal_winner(board: &Board) -> Option<Player> {
    (0..board.rows())
        .flat_map(|row| (0..board.cols()).map(move |col| (row, col)))
        .find_map(|(row, col)| diagonal_winner(board, row, col))
}

/// Winner on any line, rows first, then columns, then diagonals.
pub fn find_winner(board: &Board) -> Option<Player> {
    any_row_winner(board)
        .or_else(|| any_column_winner(board))
        .or_else(|| any_diagonal_winner(board))
}

pub fn game_status(board: &Board) -> GameStatus {
    match find_winner(board) {
        Some(player) => GameStatus::Won(player),
        None if board.has_empty_cell() => GameStatus::InProgress,
        None => GameStatus::Draw,
    }
}

/// `(over, winner)`: a draw is `(true, None)`, an unfinished game
/// `(false, None)`.
pub fn is_game_over(board: &Board) -> (bool, Option<Player>) {
    let status = game_status(board);
    (status.is_over(), status.winner())
}
