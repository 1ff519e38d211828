//! Precomputed diagonal runs.
//!
//! For every cell the index stores each `win_length` window along the `\`
//! and `/` diagonals that contains the cell and lies fully on the board.
//! The index depends only on the board shape, so it is built once and shared
//! between clones of a board.

use super::board::within;

/// A board coordinate as `(row, col)`.
pub type Coord = (usize, usize);

/// A diagonal window of `win_length` coordinates ordered by ascending column.
pub type Run = Vec<Coord>;

/// Window endpoint directions as `(row, col)` steps: lower-left, lower-right,
/// upper-left, upper-right. Opposite directions find the same windows, which
/// are de-duplicated.
const DIRECTIONS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

#[derive(Debug, PartialEq, Eq)]
pub struct DiagonalIndex {
    cols: usize,
    runs: Vec<Vec<Run>>,
}

impl DiagonalIndex {
    pub fn build(rows: usize, cols: usize, win_length: usize) -> Self {
        let mut runs = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                runs.push(runs_through(rows, cols, win_length, row, col));
            }
        }
        DiagonalIndex { cols, runs }
    }

    /// Runs through `(row, col)`. The caller must pass an on-board coordinate.
    pub fn runs_at(&self, row: usize, col: usize) -> &[Run] {
        &self.runs[row * self.cols + col]
    }
}

fn runs_through(rows: usize, cols: usize, win_length: usize, row: usize, col: usize) -> Vec<Run> {
    let span = win_length as isize;
    let (row, col) = (row as isize, col as isize);
    let mut found: Vec<Run> = Vec::new();

    for (dr, dc) in DIRECTIONS {
        // The window ends `reach` steps away from the point and extends back
        // through it, so every window position containing the point is tried.
        for reach in 0..span {
            let end = (row + reach * dr, col + reach * dc);
            let window: Option<Run> = (0..span)
                .map(|i| {
                    let r = end.0 - i * dr;
                    let c = end.1 - i * dc;
                    within(rows, cols, r, c).then_some((r as usize, c as usize))
                })
                .collect();

            if let Some(mut run) = window {
                run.sort_by_key(|&(_, c)| c);
                if !found.contains(&run) {
                    found.push(run);
                }
            }
        }
    }

    found
}
