//! Rectangular board abstraction over a storage backend.
//!
//! Every rule here is derived purely from [`BoardStorage::get`], so any
//! backend honoring the storage contract yields identical verdicts.

use super::error::BoardError;
use super::storage::{ArrayStorage, BitStorage, BoardStorage};
use super::types::{Cell, Mark, Outcome};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A rectangular grid of cells with win/draw rules.
///
/// The backend is chosen at construction time ([`Grid::dense`] or
/// [`Grid::packed`]); dimensions are fixed for the life of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid<S> {
    storage: S,
}

impl Grid<ArrayStorage> {
    /// Creates an empty grid on the dense array backend.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDimensions`] when either dimension is
    /// zero.
    pub fn dense(rows: usize, cols: usize) -> Result<Self, BoardError> {
        Ok(Self {
            storage: ArrayStorage::new(rows, cols)?,
        })
    }
}

impl Grid<BitStorage> {
    /// Creates an empty grid on the packed-bit backend.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDimensions`] when either dimension is
    /// zero or the board exceeds the backend's capacity.
    pub fn packed(rows: usize, cols: usize) -> Result<Self, BoardError> {
        Ok(Self {
            storage: BitStorage::new(rows, cols)?,
        })
    }
}

impl<S: BoardStorage> Grid<S> {
    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.storage.rows()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.storage.cols()
    }

    /// Reads the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] for coordinates off the grid.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.storage.get(row, col)
    }

    /// Writes the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] for coordinates off the grid.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), BoardError> {
        self.storage.set(row, col, cell)
    }

    /// Occupant of `row` if every cell in it is equal and non-empty.
    pub fn row_winner(&self, row: usize) -> Option<Mark> {
        let Ok(Cell::Taken(first)) = self.storage.get(row, 0) else {
            return None;
        };
        for col in 1..self.cols() {
            if self.storage.get(row, col) != Ok(Cell::Taken(first)) {
                return None;
            }
        }
        Some(first)
    }

    /// Occupant of `col` if every cell in it is equal and non-empty.
    pub fn col_winner(&self, col: usize) -> Option<Mark> {
        let Ok(Cell::Taken(first)) = self.storage.get(0, col) else {
            return None;
        };
        for row in 1..self.rows() {
            if self.storage.get(row, col) != Ok(Cell::Taken(first)) {
                return None;
            }
        }
        Some(first)
    }

    /// First non-empty uniform diagonal: top-left to bottom-right checked
    /// before top-right to bottom-left. Only square grids have diagonals.
    pub fn diag_winner(&self) -> Option<Mark> {
        let n = self.rows();
        if n != self.cols() {
            return None;
        }

        if let Ok(Cell::Taken(first)) = self.storage.get(0, 0) {
            if (1..n).all(|i| self.storage.get(i, i) == Ok(Cell::Taken(first))) {
                return Some(first);
            }
        }

        if let Ok(Cell::Taken(first)) = self.storage.get(0, n - 1) {
            if (1..n).all(|i| self.storage.get(i, n - 1 - i) == Ok(Cell::Taken(first))) {
                return Some(first);
            }
        }

        None
    }

    /// `Some(Draw)` when every cell is occupied, `None` otherwise.
    pub fn is_draw(&self) -> Option<Outcome> {
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                if self.storage.get(row, col) == Ok(Cell::Empty) {
                    return None;
                }
            }
        }
        Some(Outcome::Draw)
    }

    /// Verdict for the whole board.
    ///
    /// Rows are checked in order, then columns, then diagonals, then the
    /// draw condition; the first hit wins. The priority is a behavioral
    /// contract: a board satisfying several conditions at once reports the
    /// earliest one in that order.
    pub fn winner(&self) -> Option<Outcome> {
        for row in 0..self.rows() {
            if let Some(mark) = self.row_winner(row) {
                return Some(Outcome::Win(mark));
            }
        }

        for col in 0..self.cols() {
            if let Some(mark) = self.col_winner(col) {
                return Some(Outcome::Win(mark));
            }
        }

        if let Some(mark) = self.diag_winner() {
            return Some(Outcome::Win(mark));
        }

        self.is_draw()
    }

    /// Unoccupied coordinates in row-major order.
    ///
    /// The ordering is significant: it drives the solver's enumeration and
    /// therefore its tie-break behavior.
    pub fn legal_moves(&self) -> Vec<(usize, usize)> {
        let mut moves = Vec::new();
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                if self.storage.get(row, col) == Ok(Cell::Empty) {
                    moves.push((row, col));
                }
            }
        }
        moves
    }
}

impl<S: BoardStorage> fmt::Display for Grid<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                let cell = self.storage.get(row, col).map_err(|_| fmt::Error)?;
                write!(f, "{cell}")?;
                if col + 1 != self.cols() {
                    write!(f, "|")?;
                }
            }
            writeln!(f)?;
            if row + 1 != self.rows() {
                writeln!(f, "{}-", "-+".repeat(self.cols() - 1))?;
            }
        }
        Ok(())
    }
}
