// Domain layer: core simulation types, agents, and ports.

pub mod agent;
pub mod errors;
pub mod ports;
pub mod state;
pub mod systems;
pub mod tuning;

pub use agent::PlayerAgent;
pub use state::{AgentSnapshot, MovementPhase, PLAYER_COUNT, PlayerSlot, ScoreBoard, Vec3};
