use std::str::FromStr;

use crate::secret::{MAX_GUESS, MIN_GUESS};

/// One parsed submission. Lives for a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guess {
    pub number: i32,
}

impl Guess {
    pub fn new(number: i32) -> Self {
        Self { number }
    }

    pub fn in_range(&self) -> bool {
        (MIN_GUESS..=MAX_GUESS).contains(&self.number)
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("`{0}` is not a base-10 integer")]
pub struct InvalidGuess(pub String);

impl FromStr for Guess {
    type Err = InvalidGuess;

    /// The whole string must be the number: no padding, no sign other than `-`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.starts_with('+') {
            return Err(InvalidGuess(raw.to_string()));
        }
        raw.parse::<i32>()
            .map(Guess::new)
            .map_err(|_| InvalidGuess(raw.to_string()))
    }
}
