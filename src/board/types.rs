//! Core domain types shared by every board backend.

use serde::{Deserialize, Serialize};

/// One of the two competing sides.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Mark {
    /// The X side (moves first in a standard game).
    X,
    /// The O side.
    O,
}

impl Mark {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// Occupancy state of a single board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Unoccupied.
    #[default]
    Empty,
    /// Occupied by a side's mark.
    Taken(Mark),
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Empty => write!(f, " "),
            Cell::Taken(mark) => write!(f, "{mark}"),
        }
    }
}

/// Terminal result of a finished game.
///
/// A board verdict is `Option<Outcome>`: `None` while the game is ongoing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The given side completed a line.
    Win(Mark),
    /// The board filled with no line.
    Draw,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips_sides() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_cell_glyphs() {
        assert_eq!(Cell::Empty.to_string(), " ");
        assert_eq!(Cell::Taken(Mark::X).to_string(), "X");
        assert_eq!(Cell::Taken(Mark::O).to_string(), "O");
    }

    #[test]
    fn test_outcome_serde_round_trip() {
        let outcome = Outcome::Win(Mark::O);
        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(serde_json::from_str::<Outcome>(&json).unwrap(), outcome);
    }
}
