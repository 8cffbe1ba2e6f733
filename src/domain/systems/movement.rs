// Movement math for player agents. These functions are pure so the tick
// code stays a thin driver and the rules are testable in isolation.

use crate::domain::state::{MovementPhase, Vec3};
use crate::domain::tuning::player::{AgentTuning, Deadzone};

/// Local-frame velocity for the current movement phase. Agents only ever
/// walk straight ahead; steering happens through rotation.
pub fn local_forward_velocity(phase: MovementPhase, tuning: &AgentTuning) -> Vec3 {
    match phase {
        MovementPhase::Moving => Vec3::new(0.0, 0.0, tuning.walk_speed),
        MovementPhase::Idle | MovementPhase::Shooting => Vec3::ZERO,
    }
}

/// Rotate a local-frame vector into the world frame about the vertical
/// axis. Forward is +z at zero yaw and positive yaw turns toward +x.
pub fn world_velocity(local: Vec3, yaw_deg: f32) -> Vec3 {
    let (sin, cos) = yaw_deg.to_radians().sin_cos();
    Vec3::new(
        local.x * cos + local.z * sin,
        local.y,
        local.z * cos - local.x * sin,
    )
}

/// Whether a raw horizontal sample should produce rotation at all.
pub fn passes_deadzone(horizontal: f32, deadzone: Deadzone) -> bool {
    match deadzone {
        Deadzone::Exact => horizontal != 0.0,
        Deadzone::Threshold(threshold) => horizontal.abs() > threshold,
    }
}

/// Yaw change in degrees for one tick of raw horizontal input. Only the
/// sign of the input matters; its magnitude never scales the rate.
pub fn turn_delta(phase: MovementPhase, horizontal: f32, dt: f32, tuning: &AgentTuning) -> f32 {
    let rate = match phase {
        MovementPhase::Moving => tuning.move_turn_rate,
        MovementPhase::Shooting => tuning.shoot_turn_rate,
        MovementPhase::Idle => return 0.0,
    };
    if !passes_deadzone(horizontal, tuning.deadzone) {
        return 0.0;
    }
    rate * horizontal.signum() * dt
}
