//! Tic-tac-toe with pluggable board storage and an exhaustive-search AI.
//!
//! # Architecture
//!
//! - **Board**: a rectangular grid over interchangeable storage backends
//!   (dense cells or packed bits), with win/draw rules derived purely from
//!   cell reads so every backend produces identical verdicts
//! - **Solver**: exhaustive adversarial search operating on board copies
//! - **Players**: polymorphic move sources (human on stdin, automated)
//! - **Game**: console loop alternating sides until a verdict
//!
//! # Example
//!
//! ```no_run
//! use exhaustive_tictactoe::{AiPlayer, Mark, Outcome, play};
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut x = AiPlayer::new(Mark::X);
//! let mut o = AiPlayer::new(Mark::O);
//! let report = play(&mut x, &mut o)?;
//! assert_eq!(*report.outcome(), Outcome::Draw);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod game;
mod players;
mod solver;
mod tictactoe;

// Crate-level exports - Board abstraction
pub use board::{ArrayStorage, BitStorage, BoardError, BoardStorage, Cell, Grid, Mark, Outcome};

// Crate-level exports - Game loop
pub use game::{GameReport, SetupError, play};

// Crate-level exports - Move sources
pub use players::{AiPlayer, HumanPlayer, Player};

// Crate-level exports - Move selection
pub use solver::{SolverError, select_move};

// Crate-level exports - The 3x3 game board
pub use tictactoe::TicTacToeBoard;
