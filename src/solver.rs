//! Exhaustive adversarial move selection.
//!
//! Immediate wins and immediate opponent threats are settled by direct
//! inspection; everything else goes to a search that enumerates every
//! continuation and returns as soon as a line of play forces a win or a draw
//! for the acting side. The search is not minimax: the first satisfying move
//! in row-major order is taken, not the best-scored one. The full 3x3 game
//! tree is small enough that no pruning or caching is needed.

use crate::board::{Mark, Outcome};
use crate::tictactoe::TicTacToeBoard;
use derive_more::{Display, Error};
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Errors from move selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SolverError {
    /// The board offers no legal continuation. Reachable on a finished
    /// board, or through malformed external state (no verdict and no empty
    /// cells).
    #[display("no move available: board has no legal continuation")]
    NoMove,
}

/// Picks a move for `side`.
///
/// Two deterministic checks run before the recursion: the first square
/// (row-major) that wins for `side` at once is taken, else the first square
/// the opponent could win on at once is occupied. Only then does the
/// exhaustive search run, returning the first move whose subtree forces a
/// win for `side`, else the first forcing a draw, else a random legal move.
///
/// The board is never mutated; the search works on copies throughout.
///
/// # Errors
///
/// Returns [`SolverError::NoMove`] when the board has no legal moves.
#[instrument(skip(board))]
pub fn select_move(board: &TicTacToeBoard, side: Mark) -> Result<(usize, usize), SolverError> {
    if board.winner().is_none() {
        if let Some(mv) = winning_square(board, side) {
            debug!(?mv, "taking an immediate win");
            return Ok(mv);
        }
        if let Some(mv) = winning_square(board, side.opponent()) {
            debug!(?mv, "blocking an immediate threat");
            return Ok(mv);
        }
    }
    let (verdict, chosen) = search(board, side)?;
    debug!(?verdict, ?chosen, "search finished");
    chosen.ok_or(SolverError::NoMove)
}

/// First square (row-major) where a single `side` mark ends the game in
/// `side`'s favor.
fn winning_square(board: &TicTacToeBoard, side: Mark) -> Option<(usize, usize)> {
    board.legal_moves().into_iter().find(|&(row, col)| {
        let mut child = board.clone();
        child
            .set(row, col, side)
            .expect("legal move applies to a board copy");
        child.winner() == Some(Outcome::Win(side))
    })
}

/// Evaluates a position from `side`'s perspective.
///
/// Returns the verdict reached and the move that reached it; a `None` move
/// means the position was already terminal. When no candidate forces a win
/// or a draw, the verdict is whatever the last candidate evaluated to and
/// the move comes from the fallback - the pairing is advisory and need not
/// describe the outcome of that particular move.
fn search(
    board: &TicTacToeBoard,
    side: Mark,
) -> Result<(Outcome, Option<(usize, usize)>), SolverError> {
    if let Some(outcome) = board.winner() {
        return Ok((outcome, None));
    }

    let moves = board.legal_moves();
    let mut last_verdict = None;
    for &(row, col) in &moves {
        let mut child = board.clone();
        child
            .set(row, col, side)
            .expect("legal move applies to a board copy");
        let (verdict, _) = search(&child, side.opponent())?;
        if verdict == Outcome::Win(side) || verdict == Outcome::Draw {
            return Ok((verdict, Some((row, col))));
        }
        last_verdict = Some(verdict);
    }

    // Every continuation loses. The verdict of the last candidate is kept
    // for the caller; the move itself is a random pick.
    let verdict = last_verdict.ok_or(SolverError::NoMove)?;
    let fallback = moves
        .choose(&mut rand::rng())
        .copied()
        .ok_or(SolverError::NoMove)?;
    Ok((verdict, Some(fallback)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_takes_immediate_win() {
        let mut board = TicTacToeBoard::new();
        board.set(0, 0, Mark::X).unwrap();
        board.set(0, 1, Mark::X).unwrap();
        board.set(1, 0, Mark::O).unwrap();
        board.set(1, 1, Mark::O).unwrap();
        assert_eq!(select_move(&board, Mark::X).unwrap(), (0, 2));
    }

    #[test]
    fn test_blocks_an_open_column_over_other_drawing_squares() {
        // O threatens to complete the middle column at (2, 1). Other squares
        // also hold the draw, but the threat square is taken first.
        let mut board = TicTacToeBoard::new();
        board.set(0, 1, Mark::O).unwrap();
        board.set(1, 1, Mark::O).unwrap();
        assert_eq!(select_move(&board, Mark::X).unwrap(), (2, 1));
    }

    #[test]
    fn test_finished_board_yields_no_move() {
        let mut board = TicTacToeBoard::new();
        for col in 0..3 {
            board.set(0, col, Mark::O).unwrap();
        }
        // O already won; there is nothing left to select.
        assert_eq!(select_move(&board, Mark::X), Err(SolverError::NoMove));
    }

    #[test]
    fn test_caller_board_is_untouched() {
        let mut board = TicTacToeBoard::new();
        board.set(2, 2, Mark::O).unwrap();
        let snapshot = board.clone();
        select_move(&board, Mark::X).unwrap();
        assert_eq!(board, snapshot);
    }
}
