/// How raw horizontal input is tested before any rotation applies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Deadzone {
    /// Rotate on any horizontal value that is not exactly zero. Analog
    /// sticks that never rest at zero will keep the agent turning.
    Exact,
    /// Ignore horizontal magnitudes at or below the threshold.
    Threshold(f32),
}

/// Gameplay tuning for one player agent.
#[derive(Debug, Clone, Copy)]
pub struct AgentTuning {
    /// Forward walking speed in world units per second.
    pub walk_speed: f32,
    /// Turn rate while moving, in degrees per second.
    pub move_turn_rate: f32,
    /// Turn rate while shooting, in degrees per second.
    pub shoot_turn_rate: f32,
    /// Lives an agent holds when a fresh scene starts.
    pub initial_lives: i32,
    /// Deadzone applied to the raw horizontal axis.
    pub deadzone: Deadzone,
}

impl Default for AgentTuning {
    fn default() -> Self {
        Self {
            walk_speed: 5.0,
            move_turn_rate: 100.0,
            shoot_turn_rate: 200.0,
            initial_lives: 1,
            deadzone: Deadzone::Exact,
        }
    }
}
