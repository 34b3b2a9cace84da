use log::{debug, error, info, warn};
use rand::Rng;
use tokio::io::{AsyncBufRead, AsyncWrite};

use crate::{
    config::GameConfig,
    outcome::RoundOutcome,
    secret::SecretNumber,
    session::SessionState,
    transport::{GameError, read_line, write_line},
};

pub struct Game {
    config: GameConfig,
    secret: SecretNumber,
    state: SessionState,
}

impl Game {
    pub fn new<R: Rng>(config: GameConfig, rng: &mut R) -> Self {
        Self::with_secret(config, SecretNumber::draw(rng))
    }

    pub fn with_secret(config: GameConfig, secret: SecretNumber) -> Self {
        Self {
            config,
            secret,
            state: SessionState::Running,
        }
    }

    /// Classifies one raw line and advances the session on a win.
    pub fn process_line(&mut self, raw: &str) -> RoundOutcome {
        let outcome = RoundOutcome::classify(raw, self.secret);
        match outcome {
            RoundOutcome::ParseError => warn!("Rejected input `{raw}`: not a number"),
            RoundOutcome::RangeError(guess) => {
                warn!("Rejected guess `{}`: out of range", guess.number)
            }
            RoundOutcome::TooLow(guess) => debug!("Guess `{}` is too low", guess.number),
            RoundOutcome::TooHigh(guess) => debug!("Guess `{}` is too high", guess.number),
            RoundOutcome::Win(guess) => debug!("Guess `{}` is correct", guess.number),
        }
        self.state = self.state.advance(&outcome);
        outcome
    }

    /// Plays until the secret is found. Only transport failures end it early.
    pub async fn run<R, W>(&mut self, input: &mut R, output: &mut W) -> Result<(), GameError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!("Session started");
        if self.config.reveal_secret {
            write_line(
                output,
                &format!("The secret number is: {}", self.secret.value()),
            )
            .await?;
        }
        write_line(output, "Guess the number!").await?;

        while !self.state.is_over() {
            write_line(output, "Please input your guess.").await?;
            let line = match read_line(input).await {
                Ok(line) => line,
                Err(err) => {
                    error!("Session aborted: {err}");
                    return Err(err);
                }
            };

            let outcome = self.process_line(&line);
            if let Some(guess) = outcome.guess() {
                write_line(output, &format!("You guessed: {}", guess.number)).await?;
            }
            write_line(output, outcome.message()).await?;
        }

        info!("Session won");
        Ok(())
    }
}
