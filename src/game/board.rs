use std::fmt;
use std::sync::Arc;

use crate::error::GameError;

use super::diagonal::{DiagonalIndex, Run};
use super::player::Player;

/// Canonical board height. Row 0 is the bottom; pieces stack upward.
pub const ROWS: usize = 7;
/// Canonical board width.
pub const COLS: usize = 6;
/// Pieces in a line needed to win.
pub const WIN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// The player occupying this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Player::Red),
            Cell::Yellow => Some(Player::Yellow),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Returns true if the signed coordinate lies on a `rows` x `cols` grid.
pub(crate) fn within(rows: usize, cols: usize, row: isize, col: isize) -> bool {
    row >= 0 && col >= 0 && (row as usize) < rows && (col as usize) < cols
}

/// A Connect Four grid.
///
/// Cells are stored row-major with row 0 at the bottom, so a column fills
/// from row 0 upward. Dimensions and win length are fixed at construction.
/// The diagonal index is derived from the shape alone and is shared between
/// clones; cloning copies only the cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    win_length: usize,
    cells: Vec<Cell>,
    diagonals: Arc<DiagonalIndex>,
}

impl Board {
    /// Create an empty board of the given shape.
    pub fn new(rows: usize, cols: usize, win_length: usize) -> Result<Self, GameError> {
        if rows == 0 || cols == 0 || win_length == 0 || win_length > rows.max(cols) {
            return Err(GameError::InvalidDimensions {
                rows,
                cols,
                win_length,
            });
        }
        Ok(Self::with_shape(rows, cols, win_length))
    }

    /// Create an empty 7x6 board with a win length of 4.
    pub fn standard() -> Self {
        Self::with_shape(ROWS, COLS, WIN_LENGTH)
    }

    fn with_shape(rows: usize, cols: usize, win_length: usize) -> Self {
        Board {
            rows,
            cols,
            win_length,
            cells: vec![Cell::Empty; rows * cols],
            diagonals: Arc::new(DiagonalIndex::build(rows, cols, win_length)),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Clear every cell, keeping the shape.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    pub fn is_on_board(&self, row: isize, col: isize) -> bool {
        within(self.rows, self.cols, row, col)
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, GameError> {
        if row < self.rows && col < self.cols {
            Ok(row * self.cols + col)
        } else {
            Err(GameError::OutOfBounds { row, col })
        }
    }

    /// Get the cell at a specific position.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Overwrite a cell without any gravity or occupancy check.
    ///
    /// Only search simulation and test setup should call this; live games go
    /// through [`Board::apply_drop`].
    pub fn set(&mut self, row: usize, col: usize, value: Cell) -> Result<(), GameError> {
        let i = self.index(row, col)?;
        self.cells[i] = value;
        Ok(())
    }

    /// Cells of one row, left to right.
    pub fn row(&self, row: usize) -> Result<&[Cell], GameError> {
        if row >= self.rows {
            return Err(GameError::OutOfBounds { row, col: 0 });
        }
        let start = row * self.cols;
        Ok(&self.cells[start..start + self.cols])
    }

    /// Cells of one column, bottom to top.
    pub fn column(&self, col: usize) -> Result<Vec<Cell>, GameError> {
        if col >= self.cols {
            return Err(GameError::InvalidColumn(col));
        }
        Ok((0..self.rows)
            .map(|row| self.cells[row * self.cols + col])
            .collect())
    }

    /// Diagonal runs of win length passing through `(row, col)`.
    pub fn diagonals_through(&self, row: usize, col: usize) -> Result<&[Run], GameError> {
        self.index(row, col)?;
        Ok(self.diagonals.runs_at(row, col))
    }

    /// Lowest empty row in a column, or `None` if the column is full or does
    /// not exist.
    pub fn next_open_row(&self, col: usize) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        (0..self.rows).find(|&row| self.cells[row * self.cols + col].is_empty())
    }

    /// Check if a piece can be dropped into a column.
    pub fn is_legal_drop(&self, col: usize) -> bool {
        col < self.cols && self.next_open_row(col).is_some()
    }

    /// Check if `(row, col)` is exactly where the next piece in `col` lands.
    pub fn is_legal_placement(&self, row: usize, col: usize) -> bool {
        match self.get(row, col) {
            Ok(Cell::Empty) => self.next_open_row(col) == Some(row),
            _ => false,
        }
    }

    /// Drop a piece in a column, returns the row where it landed.
    pub fn apply_drop(&mut self, col: usize, player: Player) -> Result<usize, GameError> {
        if col >= self.cols {
            return Err(GameError::InvalidColumn(col));
        }
        let row = self.next_open_row(col).ok_or(GameError::ColumnFull(col))?;
        self.cells[row * self.cols + col] = player.to_cell();
        Ok(row)
    }

    /// Columns that can still take a piece, in ascending order.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.cols).filter(|&col| self.is_legal_drop(col)).collect()
    }

    /// `(col, row)` landing spot for every legal column, in ascending column
    /// order.
    pub fn next_open_rows(&self) -> Vec<(usize, usize)> {
        (0..self.cols)
            .filter_map(|col| self.next_open_row(col).map(|row| (col, row)))
            .collect()
    }

    pub fn has_empty_cell(&self) -> bool {
        self.cells.contains(&Cell::Empty)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        !self.has_empty_cell()
    }

    /// Number of occupied cells.
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

/// Debug dump with the top row first, `R`/`Y` for pieces and `.` for empty.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.rows).rev() {
            for col in 0..self.cols {
                let symbol = match self.cells[row * self.cols + col] {
                    Cell::Empty => '.',
                    Cell::Red => 'R',
                    Cell::Yellow => 'Y',
                };
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        let footer: Vec<String> = (0..self.cols).map(|col| (col % 10).to_string()).collect();
        writeln!(f, "{}", footer.join(" "))
    }
}
