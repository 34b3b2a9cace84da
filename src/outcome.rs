use std::cmp::Ordering;

use crate::{guess::Guess, secret::SecretNumber};

/// Classification of one submitted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    ParseError,
    RangeError(Guess),
    TooLow(Guess),
    TooHigh(Guess),
    Win(Guess),
}

impl RoundOutcome {
    pub fn classify(raw: &str, secret: SecretNumber) -> Self {
        let guess = match raw.parse::<Guess>() {
            Ok(guess) => guess,
            Err(_) => return RoundOutcome::ParseError,
        };
        if !guess.in_range() {
            return RoundOutcome::RangeError(guess);
        }
        match guess.number.cmp(&secret.value()) {
            Ordering::Less => RoundOutcome::TooLow(guess),
            Ordering::Greater => RoundOutcome::TooHigh(guess),
            Ordering::Equal => RoundOutcome::Win(guess),
        }
    }

    /// The parsed guess, if the line was a number at all.
    pub fn guess(&self) -> Option<Guess> {
        match self {
            RoundOutcome::ParseError => None,
            RoundOutcome::RangeError(guess)
            | RoundOutcome::TooLow(guess)
            | RoundOutcome::TooHigh(guess)
            | RoundOutcome::Win(guess) => Some(*guess),
        }
    }

    pub fn is_win(&self) -> bool {
        matches!(self, RoundOutcome::Win(_))
    }

    pub fn message(&self) -> &'static str {
        match self {
            RoundOutcome::ParseError => "Error. Invalid input. Please enter a valid number.",
            RoundOutcome::RangeError(_) => "Error: Please enter a number between 1 and 100.",
            RoundOutcome::TooLow(_) => "Too small!",
            RoundOutcome::TooHigh(_) => "Too big!",
            RoundOutcome::Win(_) => "You win!!",
        }
    }
}
