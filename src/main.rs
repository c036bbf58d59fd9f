//! Console entry point: one automated-vs-automated game.

use anyhow::Result;
use exhaustive_tictactoe::{AiPlayer, Mark, play};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut player_x = AiPlayer::new(Mark::X);
    let mut player_o = AiPlayer::new(Mark::O);
    play(&mut player_x, &mut player_o)?;

    Ok(())
}
