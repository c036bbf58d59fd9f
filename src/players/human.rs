//! Human player reading moves from standard input.

use super::Player;
use crate::board::Mark;
use crate::tictactoe::TicTacToeBoard;
use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Human player. Prompts on stdout and reads `row col` pairs from stdin,
/// re-prompting until a pair of integers arrives.
pub struct HumanPlayer {
    mark: Mark,
    name: String,
}

impl HumanPlayer {
    /// Creates a human player for `mark`.
    pub fn new(mark: Mark) -> Self {
        Self {
            mark,
            name: format!("Human player {mark}"),
        }
    }

    /// Exactly two whitespace-separated non-negative integers.
    fn parse_move(line: &str) -> Option<(usize, usize)> {
        let mut tokens = line.split_whitespace();
        let row = tokens.next()?.parse().ok()?;
        let col = tokens.next()?.parse().ok()?;
        if tokens.next().is_some() {
            return None;
        }
        Some((row, col))
    }
}

impl Player for HumanPlayer {
    fn get_move(&mut self, _board: TicTacToeBoard) -> Result<(usize, usize)> {
        let stdin = io::stdin();
        let mut line = String::new();
        loop {
            print!("Please input move for {} (row column): ", self.name);
            io::stdout().flush()?;
            line.clear();
            if stdin.lock().read_line(&mut line)? == 0 {
                anyhow::bail!("input stream closed");
            }
            match Self::parse_move(&line) {
                Some(mv) => {
                    debug!(player = %self.name, ?mv, "parsed human move");
                    return Ok(mv);
                }
                None => println!("Invalid input"),
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
    fn test_parse_valid_move() {
        assert_eq!(HumanPlayer::parse_move("1 2"), Some((1, 2)));
        assert_eq!(HumanPlayer::parse_move("  0\t0 \n"), Some((0, 0)));
    }

    #[test]
    fn test_parse_rejects_wrong_token_count() {
        assert_eq!(HumanPlayer::parse_move("1"), None);
        assert_eq!(HumanPlayer::parse_move("1 2 3"), None);
        assert_eq!(HumanPlayer::parse_move(""), None);
    }

    #[test]
    fn test_parse_rejects_non_integers() {
        assert_eq!(HumanPlayer::parse_move("a b"), None);
        assert_eq!(HumanPlayer::parse_move("1 x"), None);
        assert_eq!(HumanPlayer::parse_move("-1 0"), None);
    }

    #[test]
    fn test_player_name_carries_mark() {
        let player = HumanPlayer::new(Mark::O);
        assert_eq!(player.name(), "Human player O");
        assert_eq!(player.mark(), Mark::O);
    }
}
