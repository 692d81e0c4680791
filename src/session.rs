//! Session progression: rounds, streaks, and the shrinking timer

use crate::settings::RuleSettings;

/// Tracks progress across the rounds of one play session.
///
/// The hint engine itself is stateless per round; everything that
/// survives between rounds lives here.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub current_round: u32,
    pub consecutive_wins: u32,
    pub wrong_guesses: u32,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_round(&mut self) {
        self.current_round += 1;
        self.wrong_guesses = 0;
    }

    /// Record a wrong accusation; returns the updated count
    pub fn record_wrong_guess(&mut self) -> u32 {
        self.wrong_guesses += 1;
        self.wrong_guesses
    }

    pub fn end_round(&mut self, success: bool) {
        if success {
            self.consecutive_wins += 1;
        } else {
            self.consecutive_wins = 0;
        }
    }

    /// The time limit shrinks every round down to a floor
    pub fn time_for_round(&self, rules: &RuleSettings) -> f32 {
        let elapsed_rounds = self.current_round.saturating_sub(1) as f32;
        let time = rules.base_time_limit - rules.time_reduction_per_round * elapsed_rounds;
        time.max(rules.minimum_time_limit)
    }
}
