//! Rectangular game boards with pluggable cell storage.

mod error;
mod grid;
mod storage;
mod types;

pub use error::BoardError;
pub use grid::Grid;
pub use storage::{ArrayStorage, BitStorage, BoardStorage};
pub use types::{Cell, Mark, Outcome};
