// Per-player simulation agent. Owns the slot's kinematic state and polls
// its axis source once per tick; everything else arrives as explicit
// calls from the match loop.

use tracing::info;

use crate::domain::ports::AxisSource;
use crate::domain::state::{AgentSnapshot, MovementPhase, PlayerSlot, Vec3};
use crate::domain::systems::movement;
use crate::domain::tuning::player::AgentTuning;

pub struct PlayerAgent<I: AxisSource> {
    slot: PlayerSlot,
    inputs: I,
    tuning: AgentTuning,
    lives: i32,
    phase: MovementPhase,
    enabled: bool,
    position: Vec3,
    yaw_deg: f32,
    velocity: Vec3,
    angular_velocity: Vec3,
}

impl<I: AxisSource> PlayerAgent<I> {
    pub fn new(slot: PlayerSlot, inputs: I, tuning: AgentTuning) -> Self {
        Self {
            slot,
            inputs,
            tuning,
            lives: tuning.initial_lives,
            phase: MovementPhase::default(),
            enabled: true,
            position: Vec3::ZERO,
            yaw_deg: 0.0,
            velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
        }
    }

    pub fn slot(&self) -> PlayerSlot {
        self.slot
    }

    pub fn lives(&self) -> i32 {
        self.lives
    }

    pub fn has_lives(&self) -> bool {
        self.lives > 0
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn phase(&self) -> MovementPhase {
        self.phase
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn yaw_deg(&self) -> f32 {
        self.yaw_deg
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn angular_velocity(&self) -> Vec3 {
        self.angular_velocity
    }

    /// Advance the agent by one fixed step. Movement integrates against
    /// the yaw from before this tick's rotation.
    pub fn tick(&mut self, dt: f32) {
        // A killed or despawned agent is inert until the next spawn.
        if !self.enabled || !self.has_lives() {
            return;
        }
        self.move_forward(dt);
        self.apply_rotation(dt);
    }

    fn move_forward(&mut self, dt: f32) {
        let local = movement::local_forward_velocity(self.phase, &self.tuning);
        self.velocity = movement::world_velocity(local, self.yaw_deg);
        self.position.x += self.velocity.x * dt;
        self.position.y += self.velocity.y * dt;
        self.position.z += self.velocity.z * dt;
        // Steering is all manual; the body never carries spin of its own.
        self.angular_velocity = Vec3::ZERO;
    }

    fn apply_rotation(&mut self, dt: f32) {
        let horizontal = self.inputs.horizontal();
        // The vertical axis is sampled with its sibling but drives nothing.
        let _vertical = self.inputs.vertical();
        self.yaw_deg += movement::turn_delta(self.phase, horizontal, dt, &self.tuning);
    }

    /// Place the agent at `position` and resume per-tick processing from
    /// the next tick. An agent with no lives left stays inert.
    pub fn spawn_at(&mut self, position: Vec3) {
        self.position = position;
        self.velocity = Vec3::ZERO;
        self.enabled = self.has_lives();
        info!(
            slot = self.slot.index(),
            enabled = self.enabled,
            position = ?position,
            "agent spawned"
        );
    }

    /// Take a life and go inert. The round flow decides if and where the
    /// agent comes back.
    pub fn kill(&mut self) {
        self.lives -= 1;
        self.enabled = false;
        info!(slot = self.slot.index(), lives = self.lives, "agent killed");
    }

    /// Switch the movement phase. Takes effect on the next tick.
    pub fn change_phase(&mut self, phase: MovementPhase) {
        self.phase = phase;
    }

    /// Fresh-scene state: full lives, idle, stationary at `position`.
    pub fn reset(&mut self, position: Vec3) {
        self.lives = self.tuning.initial_lives;
        self.phase = MovementPhase::default();
        self.enabled = true;
        self.position = position;
        self.yaw_deg = 0.0;
        self.velocity = Vec3::ZERO;
        self.angular_velocity = Vec3::ZERO;
    }

    pub fn snapshot(&self) -> AgentSnapshot {
        AgentSnapshot {
            slot: self.slot.index() as u8,
            label: self.slot.label(),
            x: self.position.x,
            y: self.position.y,
            z: self.position.z,
            yaw_deg: self.yaw_deg,
            lives: self.lives,
            phase: self.phase,
            enabled: self.enabled,
        }
    }
}
