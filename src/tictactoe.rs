//! The 3x3 game board used for play.

use crate::board::{ArrayStorage, BoardError, Cell, Grid, Mark, Outcome};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 3x3 tic-tac-toe board.
///
/// Wraps a dense-backend [`Grid`] and adds a single invariant: a mark never
/// overwrites an occupied cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeBoard {
    grid: Grid<ArrayStorage>,
}

impl TicTacToeBoard {
    /// Rows and columns of the playing grid.
    pub const SIZE: usize = 3;

    /// Creates an empty board.
    pub fn new() -> Self {
        let grid = Grid::dense(Self::SIZE, Self::SIZE).expect("3x3 dimensions are valid");
        Self { grid }
    }

    /// Reads the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] for coordinates off the board.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.grid.get(row, col)
    }

    /// Places `mark` at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Occupied`] when the cell already holds a mark,
    /// or [`BoardError::OutOfBounds`] for coordinates off the board.
    pub fn set(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), BoardError> {
        if self.grid.get(row, col)? != Cell::Empty {
            return Err(BoardError::Occupied { row, col });
        }
        self.grid.set(row, col, Cell::Taken(mark))
    }

    /// Board verdict; see [`Grid::winner`] for the priority order.
    pub fn winner(&self) -> Option<Outcome> {
        self.grid.winner()
    }

    /// Unoccupied coordinates in row-major order.
    pub fn legal_moves(&self) -> Vec<(usize, usize)> {
        self.grid.legal_moves()
    }
}

impl Default for TicTacToeBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TicTacToeBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_rejects_occupied_cell() {
        let mut board = TicTacToeBoard::new();
        board.set(1, 1, Mark::X).unwrap();
        assert_eq!(
            board.set(1, 1, Mark::O),
            Err(BoardError::Occupied { row: 1, col: 1 })
        );
        // Original mark is untouched.
        assert_eq!(board.get(1, 1).unwrap(), Cell::Taken(Mark::X));
    }

    #[test]
    fn test_set_rejects_off_board_move() {
        let mut board = TicTacToeBoard::new();
        assert_eq!(
            board.set(3, 0, Mark::X),
            Err(BoardError::OutOfBounds { row: 3, col: 0 })
        );
    }

    #[test]
    fn test_new_board_is_fully_open() {
        let board = TicTacToeBoard::new();
        assert_eq!(board.legal_moves().len(), 9);
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut board = TicTacToeBoard::new();
        board.set(0, 2, Mark::O).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let restored: TicTacToeBoard = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, board);
    }
}
