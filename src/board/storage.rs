//! Pluggable cell storage backends.
//!
//! Backends are interchangeable: for every valid input they must behave
//! identically, differing only in representation. The equivalence is covered
//! by `tests/backend_equivalence_test.rs`.

use super::error::BoardError;
use super::types::{Cell, Mark};
use serde::{Deserialize, Serialize};

/// Storage contract shared by every backend.
pub trait BoardStorage {
    /// Number of rows.
    fn rows(&self) -> usize;

    /// Number of columns.
    fn cols(&self) -> usize;

    /// Reads the cell at `(row, col)`.
    fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError>;

    /// Writes the cell at `(row, col)`.
    fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), BoardError>;
}

fn validate_dims(rows: usize, cols: usize) -> Result<(), BoardError> {
    if rows == 0 || cols == 0 {
        return Err(BoardError::InvalidDimensions { rows, cols });
    }
    Ok(())
}

/// Dense backend: a two-dimensional vector of cells, directly indexed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayStorage {
    cells: Vec<Vec<Cell>>,
}

impl ArrayStorage {
    /// Creates an empty `rows x cols` board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDimensions`] when either dimension is
    /// zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        validate_dims(rows, cols)?;
        Ok(Self {
            cells: vec![vec![Cell::Empty; cols]; rows],
        })
    }
}

impl BoardStorage for ArrayStorage {
    fn rows(&self) -> usize {
        self.cells.len()
    }

    fn cols(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.cells
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .ok_or(BoardError::OutOfBounds { row, col })
    }

    fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), BoardError> {
        let slot = self
            .cells
            .get_mut(row)
            .and_then(|cells| cells.get_mut(col))
            .ok_or(BoardError::OutOfBounds { row, col })?;
        *slot = cell;
        Ok(())
    }
}

/// Packed backend: a single `u128`, two bits per cell.
///
/// The 2-bit encoding is part of this backend's contract: `00` empty, `01`
/// X, `10` O. The code `11` is never written. A cell's field starts at bit
/// `(row * cols + col) * 2`; `set` clears the field and ORs the code in,
/// `get` shifts and masks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitStorage {
    rows: usize,
    cols: usize,
    bits: u128,
}

impl BitStorage {
    const CELL_BITS: usize = 2;
    const MASK: u128 = 0b11;

    /// Creates an empty `rows x cols` board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDimensions`] when either dimension is
    /// zero, or when the cells do not fit in the 128-bit word.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        validate_dims(rows, cols)?;
        if rows.saturating_mul(cols).saturating_mul(Self::CELL_BITS) > u128::BITS as usize {
            return Err(BoardError::InvalidDimensions { rows, cols });
        }
        Ok(Self { rows, cols, bits: 0 })
    }

    fn validate(&self, row: usize, col: usize) -> Result<(), BoardError> {
        if row >= self.rows || col >= self.cols {
            return Err(BoardError::OutOfBounds { row, col });
        }
        Ok(())
    }

    fn offset(&self, row: usize, col: usize) -> u32 {
        ((row * self.cols + col) * Self::CELL_BITS) as u32
    }

    fn encode(cell: Cell) -> u128 {
        match cell {
            Cell::Empty => 0b00,
            Cell::Taken(Mark::X) => 0b01,
            Cell::Taken(Mark::O) => 0b10,
        }
    }

    fn decode(code: u128) -> Cell {
        match code {
            0b00 => Cell::Empty,
            0b01 => Cell::Taken(Mark::X),
            0b10 => Cell::Taken(Mark::O),
            _ => unreachable!("cell code 0b11 is never written"),
        }
    }
}

impl BoardStorage for BitStorage {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.validate(row, col)?;
        Ok(Self::decode((self.bits >> self.offset(row, col)) & Self::MASK))
    }

    fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), BoardError> {
        self.validate(row, col)?;
        let pos = self.offset(row, col);
        self.bits &= !(Self::MASK << pos);
        self.bits |= Self::encode(cell) << pos;
        Ok(())
    }
}
