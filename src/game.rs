//! The game loop: alternates move sources over one canonical board.

use crate::board::{Mark, Outcome};
use crate::players::Player;
use crate::tictactoe::TicTacToeBoard;
use anyhow::Result;
use derive_getters::Getters;
use derive_more::{Display, Error};
use std::time::Instant;
use tracing::{info, instrument, warn};

/// Errors detected before any game logic runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SetupError {
    /// Both move sources control the same side.
    #[display("players must not be on the same side {side}")]
    SameSide {
        /// The duplicated side.
        side: Mark,
    },
}

/// Result of one completed game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct GameReport {
    /// How the game ended.
    outcome: Outcome,
    /// Number of successful moves played.
    moves: usize,
}

/// Plays one game to completion.
///
/// Each turn the current source receives a defensive copy of the board. An
/// occupied or off-board move is reported and the same side is asked again;
/// sides switch only after a successful move. The loop stops at the first
/// verdict and reports it.
///
/// # Errors
///
/// Fails before any move when both sources control the same side, or when a
/// source cannot produce a move at all (for a human, a closed stdin).
#[instrument(skip_all, fields(x = player_x.name(), o = player_o.name()))]
pub fn play<'a>(player_x: &'a mut dyn Player, player_o: &'a mut dyn Player) -> Result<GameReport> {
    if player_x.mark() == player_o.mark() {
        return Err(SetupError::SameSide {
            side: player_x.mark(),
        }
        .into());
    }

    let mut board = TicTacToeBoard::new();
    let mut current_is_x = true;
    let mut moves = 0usize;

    println!("Welcome to tic-tac-toe!");
    println!("{board}");

    loop {
        let player = if current_is_x {
            &mut *player_x
        } else {
            &mut *player_o
        };

        let started = Instant::now();
        let (row, col) = player.get_move(board.clone())?;
        println!(
            "{} makes move ({row} {col}) in {:.3} seconds",
            player.name(),
            started.elapsed().as_secs_f64()
        );

        if let Err(e) = board.set(row, col, player.mark()) {
            // Occupied or off-board: same side tries again.
            warn!(player = player.name(), error = %e, "move rejected");
            println!("{e}");
            continue;
        }
        moves += 1;
        println!("{board}");

        match board.winner() {
            Some(Outcome::Draw) => {
                println!("Game is a draw");
                info!(moves, "game over: draw");
                return Ok(GameReport {
                    outcome: Outcome::Draw,
                    moves,
                });
            }
            Some(outcome @ Outcome::Win(mark)) => {
                println!("{} wins", player.name());
                info!(winner = %mark, moves, "game over");
                return Ok(GameReport { outcome, moves });
            }
            None => current_is_x = !current_is_x,
        }
    }
}
