use crate::outcome::RoundOutcome;

/// `Running` until a winning round, then `Won` for good.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Running,
    Won,
}

impl SessionState {
    pub fn advance(self, outcome: &RoundOutcome) -> Self {
        match (self, outcome) {
            (SessionState::Won, _) => SessionState::Won,
            (SessionState::Running, outcome) if outcome.is_win() => SessionState::Won,
            (SessionState::Running, _) => SessionState::Running,
        }
    }

    pub fn is_over(&self) -> bool {
        *self == SessionState::Won
    }
}
