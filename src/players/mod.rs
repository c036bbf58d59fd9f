//! Move sources: the polymorphic capability the game loop drives.

mod ai;
mod human;

pub use ai::AiPlayer;
pub use human::HumanPlayer;

use crate::board::Mark;
use crate::tictactoe::TicTacToeBoard;
use anyhow::Result;

/// A source of moves for one side.
///
/// The game loop hands each source a defensive copy of the board, so a
/// source can never mutate or observe the canonical game state.
pub trait Player {
    /// Produces the next move as `(row, col)`.
    fn get_move(&mut self, board: TicTacToeBoard) -> Result<(usize, usize)>;

    /// The side this source controls.
    fn mark(&self) -> Mark;

    /// Display name.
    fn name(&self) -> &str;
}
