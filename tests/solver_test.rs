//! Regression positions for the exhaustive solver.

use exhaustive_tictactoe::{Mark, TicTacToeBoard, select_move};

#[test]
fn blocks_an_open_row() {
    // O holds two of the top row; X must take the remaining square.
    let mut board = TicTacToeBoard::new();
    board.set(0, 0, Mark::O).unwrap();
    board.set(0, 1, Mark::O).unwrap();
    assert_eq!(select_move(&board, Mark::X).unwrap(), (0, 2));
}

#[test]
fn blocks_an_open_diagonal() {
    // O holds the corner and the center; X must take the far corner.
    let mut board = TicTacToeBoard::new();
    board.set(0, 0, Mark::O).unwrap();
    board.set(1, 1, Mark::O).unwrap();
    assert_eq!(select_move(&board, Mark::X).unwrap(), (2, 2));
}

#[test]
fn completes_its_own_row_over_blocking() {
    // X can win outright at (0, 2); the win is found before any blocking.
    let mut board = TicTacToeBoard::new();
    board.set(0, 0, Mark::X).unwrap();
    board.set(0, 1, Mark::X).unwrap();
    board.set(1, 0, Mark::O).unwrap();
    board.set(1, 1, Mark::O).unwrap();
    assert_eq!(select_move(&board, Mark::X).unwrap(), (0, 2));
}

#[test]
fn settles_for_the_draw_from_a_balanced_position() {
    // X X O / O O . / X . . with X to move. Closing the middle row at
    // (1, 2) is the only way to hold the draw.
    let mut board = TicTacToeBoard::new();
    board.set(0, 0, Mark::X).unwrap();
    board.set(0, 1, Mark::X).unwrap();
    board.set(0, 2, Mark::O).unwrap();
    board.set(1, 0, Mark::O).unwrap();
    board.set(1, 1, Mark::O).unwrap();
    board.set(2, 0, Mark::X).unwrap();
    assert_eq!(select_move(&board, Mark::X).unwrap(), (1, 2));
}
