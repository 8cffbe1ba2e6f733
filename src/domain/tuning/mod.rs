// Gameplay tuning values, grouped per concern. Runtime configuration
// (tick rate, channel sizes) lives in the frameworks layer instead.

pub mod player;
pub mod rules;

pub use player::{AgentTuning, Deadzone};
pub use rules::MatchRules;
