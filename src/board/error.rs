//! Board error taxonomy.

use derive_more::{Display, Error};

/// Errors raised by board construction and cell access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Board dimensions must be positive and fit the chosen backend.
    #[display("invalid board dimensions rows={rows} cols={cols}")]
    InvalidDimensions {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
    /// Coordinates outside the board.
    #[display("position out of range row={row} col={col}")]
    OutOfBounds {
        /// Offending row.
        row: usize,
        /// Offending column.
        col: usize,
    },
    /// The target cell already holds a mark.
    #[display("cell at row={row} col={col} is already occupied")]
    Occupied {
        /// Row of the occupied cell.
        row: usize,
        /// Column of the occupied cell.
        col: usize,
    },
}
