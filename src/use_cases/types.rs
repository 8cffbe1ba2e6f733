// Inputs and outputs of the match loop.

use serde::Serialize;

use crate::domain::state::{AgentSnapshot, MovementPhase, PLAYER_COUNT, PlayerSlot, Vec3};

/// Events the round orchestrator feeds into the world loop.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// A round finished. `None` means nobody won it.
    RoundEnded { winner: Option<PlayerSlot> },
    /// The round flow switched every agent's movement phase.
    PhaseChanged { phase: MovementPhase },
    /// One agent was eliminated.
    AgentKilled { slot: PlayerSlot },
    /// One agent was placed onto the arena.
    AgentSpawned { slot: PlayerSlot, position: Vec3 },
    /// The scene manager finished a reload; the world re-initializes.
    SceneLoaded { index: u32 },
}

/// Coarse match lifecycle, published over a watch channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchState {
    RoundInProgress,
    RoundResults,
    MatchEnded { winner: PlayerSlot },
}

/// One frame of world state, broadcast after every tick.
#[derive(Debug, Clone, Serialize)]
pub struct WorldUpdate {
    pub tick: u64,
    pub agents: Vec<AgentSnapshot>,
    pub scores: [u32; PLAYER_COUNT],
}
