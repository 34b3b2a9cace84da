mod config;
mod game;
mod guess;
mod outcome;
mod secret;
mod session;
mod transport;

use std::process::ExitCode;

use anyhow::Context;
use tokio::io::{BufReader, stdin, stdout};

use crate::{
    config::{CliAction, USAGE, parse_args},
    game::Game,
};

const EXIT_TRANSPORT_FAILURE: u8 = 1;
const EXIT_USAGE: u8 = 2;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::init();

    let config = match parse_args(std::env::args().skip(1)).context("invalid command line") {
        Ok(CliAction::Play(config)) => config,
        Ok(CliAction::Help) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err:#}\n\n{USAGE}");
            return ExitCode::from(EXIT_USAGE);
        }
    };

    let mut game = Game::new(config, &mut rand::rng());
    let mut input = BufReader::new(stdin());
    let mut output = stdout();
    match game.run(&mut input, &mut output).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(EXIT_TRANSPORT_FAILURE)
        }
    }
}
