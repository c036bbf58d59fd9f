//! Automated player driven by the exhaustive solver.

use super::Player;
use crate::board::Mark;
use crate::solver;
use crate::tictactoe::TicTacToeBoard;
use anyhow::Result;
use tracing::debug;

/// Automated player. Delegates move choice to [`solver::select_move`],
/// reporting and retrying on solver failure.
pub struct AiPlayer {
    mark: Mark,
    name: String,
}

impl AiPlayer {
    /// Creates an automated player for `mark`.
    pub fn new(mark: Mark) -> Self {
        Self {
            mark,
            name: format!("AI player {mark}"),
        }
    }
}

impl Player for AiPlayer {
    fn get_move(&mut self, board: TicTacToeBoard) -> Result<(usize, usize)> {
        loop {
            match solver::select_move(&board, self.mark) {
                Ok(mv) => {
                    debug!(player = %self.name, ?mv, "solver chose move");
                    return Ok(mv);
                }
                Err(e) => println!("{e}"),
            }
        }
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_blocks_open_row() {
        let mut board = TicTacToeBoard::new();
        board.set(0, 0, Mark::O).unwrap();
        board.set(0, 1, Mark::O).unwrap();
        let mut player = AiPlayer::new(Mark::X);
        assert_eq!(player.get_move(board).unwrap(), (0, 2));
    }

    #[test]
    fn test_player_name_carries_mark() {
        let player = AiPlayer::new(Mark::X);
        assert_eq!(player.name(), "AI player X");
        assert_eq!(player.mark(), Mark::X);
    }
}
