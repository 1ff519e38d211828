//! Static evaluation by longest run.
//!
//! A position is scored by the single longest run on the board, positive
//! when the maximizing player holds it and negative otherwise:
//!
//! | run length        | score |
//! |-------------------|-------|
//! | 0                 | 0     |
//! | 1                 | 1     |
//! | 2                 | 2     |
//! | 3 .. win length   | 5     |
//! | >= win length     | 100   |

use std::cmp::Ordering;

use crate::game::win::run_lengths;
use crate::game::{Board, Cell, Player};

/// Score of a completed line.
pub const WIN_SCORE: i32 = 100;

/// Longest run of each player over every row, column and full diagonal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LongestRuns {
    pub red: usize,
    pub yellow: usize,
}

impl LongestRuns {
    pub fn get(&self, player: Player) -> usize {
        match player {
            Player::Red => self.red,
            Player::Yellow => self.yellow,
        }
    }

    fn record(&mut self, cell: Cell, len: usize) {
        match cell.player() {
            Some(Player::Red) => self.red = self.red.max(len),
            Some(Player::Yellow) => self.yellow = self.yellow.max(len),
            None => {}
        }
    }
}

pub fn run_score(len: usize, win_length: usize) -> i32 {
    if len >= win_length {
        return WIN_SCORE;
    }
    match len {
        0 => 0,
        1 => 1,
        2 => 2,
        _ => 5,
    }
}

/// Every maximal line on the board: rows, columns, then `\` and `/`
/// diagonals, each as a list of cells.
fn lines(board: &Board) -> Vec<Vec<Cell>> {
    let (rows, cols) = (board.rows() as isize, board.cols() as isize);
    let cell = |r: isize, c: isize| board.get(r as usize, c as usize).unwrap_or(Cell::Empty);
    let walk = |mut r: isize, mut c: isize, dr: isize, dc: isize| {
        let mut line = Vec::new();
        while board.is_on_board(r, c) {
            line.push(cell(r, c));
            r += dr;
            c += dc;
        }
        line
    };

    let mut lines = Vec::new();
    for r in 0..rows {
        lines.push(walk(r, 0, 0, 1));
    }
    for c in 0..cols {
        lines.push(walk(0, c, 1, 0));
    }
    // `\` runs up-right from the bottom row and the left column.
    for c in 0..cols {
        lines.push(walk(0, c, 1, 1));
    }
    for r in 1..rows {
        lines.push(walk(r, 0, 1, 1));
    }
    // `/` runs up-left from the bottom row and the right column.
    for c in 0..cols {
        lines.push(walk(0, c, 1, -1));
    }
    for r in 1..rows {
        lines.push(walk(r, cols - 1, 1, -1));
    }
    lines
}

pub fn longest_runs(board: &Board) -> LongestRuns {
    let mut longest = LongestRuns::default();
    for line in lines(board) {
        for (cell, len) in run_lengths(line) {
            longest.record(cell, len);
        }
    }
    longest
}

/// Score `board` from `maximizer`'s point of view. When both players share
/// the longest run, the run of `to_move` is the one reported.
pub fn evaluate(board: &Board, maximizer: Player, to_move: Player) -> i32 {
    let runs = longest_runs(board);
    let leader = match runs.red.cmp(&runs.yellow) {
        Ordering::Greater => Player::Red,
        Ordering::Less => Player::Yellow,
        Ordering::Equal => to_move,
    };

    let score = run_score(runs.get(leader), board.win_length());
    if leader == maximizer {
        score
    } else {
        -score
    }
}
