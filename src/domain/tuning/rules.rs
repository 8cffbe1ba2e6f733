use crate::domain::errors::RulesError;

/// Rules for the round-to-match lifecycle.
#[derive(Debug, Clone, Copy)]
pub struct MatchRules {
    /// Round wins required to take the match. Matched exactly: counters
    /// move one win at a time.
    pub score_limit: u32,
    /// Seconds the score overlay stays up after a round before the next
    /// round or the victory screen.
    pub results_delay: f32,
    /// Additional seconds the victory screen stays up before the scene
    /// reloads.
    pub victory_delay: f32,
    /// Whether the scoreboard zeroes when the match-over reload runs.
    /// With `false`, win counts survive into the next match and a counter
    /// already past the limit can never end a match again.
    pub reset_scores_on_game_over: bool,
}

impl MatchRules {
    pub fn validate(&self) -> Result<(), RulesError> {
        if self.score_limit == 0 {
            return Err(RulesError::ZeroScoreLimit);
        }
        for seconds in [self.results_delay, self.victory_delay] {
            if !seconds.is_finite() || seconds < 0.0 {
                return Err(RulesError::InvalidDelay { seconds });
            }
        }
        Ok(())
    }
}

impl Default for MatchRules {
    fn default() -> Self {
        Self {
            score_limit: 5,
            results_delay: 2.0,
            victory_delay: 3.0,
            reset_scores_on_game_over: true,
        }
    }
}
