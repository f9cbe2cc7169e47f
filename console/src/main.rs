use crate::cli::Cli;
use crate::game::{Game, SessionError};
use clap::Parser;
use std::io;
use tracing::info;

mod cli;
mod game;
mod text;
mod util;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to a file so they never mix with the board on stdout
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "tictactoe.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_max_level(cli.log_level)
        .with_writer(non_blocking)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    info!("starting console session");

    let stdin = io::stdin();
    let mut game = Game::new(stdin.lock(), io::stdout());
    match game.run() {
        Ok(outcome) => {
            info!("Session finished: {:?}", outcome);
            Ok(())
        }
        Err(SessionError::InputClosed) => {
            info!("Console input closed, leaving the game unfinished");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
