//! End-to-end games between two automated players.

use exhaustive_tictactoe::{AiPlayer, Mark, Outcome, SetupError, play};

#[test]
fn ai_vs_ai_always_draws() {
    for trial in 0..3 {
        let mut x = AiPlayer::new(Mark::X);
        let mut o = AiPlayer::new(Mark::O);
        let report = play(&mut x, &mut o).expect("game completes");
        assert_eq!(*report.outcome(), Outcome::Draw, "trial {trial}");
        assert_eq!(*report.moves(), 9, "a drawn board is a full board");
    }
}

#[test]
fn same_side_setup_is_fatal() {
    let mut a = AiPlayer::new(Mark::O);
    let mut b = AiPlayer::new(Mark::O);
    let err = play(&mut a, &mut b).unwrap_err();
    assert!(err.downcast_ref::<SetupError>().is_some());
    assert!(err.to_string().contains("same side"));
}
