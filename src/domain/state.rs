// Core simulation state shared across the runtime.

use serde::Serialize;

use crate::domain::errors::SlotError;

/// Number of player slots in a match. The arena is built for exactly four.
pub const PLAYER_COUNT: usize = 4;

/// Index of one of the four fixed player slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PlayerSlot(u8);

impl PlayerSlot {
    pub fn new(index: u8) -> Result<Self, SlotError> {
        if (index as usize) < PLAYER_COUNT {
            Ok(Self(index))
        } else {
            Err(SlotError::OutOfRange { index })
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Character assigned to this slot on the score overlay.
    pub fn label(self) -> &'static str {
        match self.0 {
            0 => "bear",
            1 => "cow",
            2 => "shark",
            _ => "lion",
        }
    }

    pub fn all() -> impl Iterator<Item = PlayerSlot> {
        (0..PLAYER_COUNT as u8).map(PlayerSlot)
    }
}

/// Round wins per slot for the current match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBoard {
    wins: [u32; PLAYER_COUNT],
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self {
            wins: [0; PLAYER_COUNT],
        }
    }

    pub fn record_win(&mut self, slot: PlayerSlot) {
        self.wins[slot.index()] += 1;
    }

    pub fn wins(&self, slot: PlayerSlot) -> u32 {
        self.wins[slot.index()]
    }

    pub fn counts(&self) -> [u32; PLAYER_COUNT] {
        self.wins
    }

    /// True when any slot's counter sits exactly at `limit`. Counters move
    /// one win at a time, so exact equality is the match-over condition.
    pub fn any_at(&self, limit: u32) -> bool {
        self.wins.iter().any(|wins| *wins == limit)
    }

    pub fn reset(&mut self) {
        self.wins = [0; PLAYER_COUNT];
    }
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::new()
    }
}

/// Movement phase broadcast to every agent by the round flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum MovementPhase {
    #[default]
    Idle,
    Moving,
    Shooting,
}

/// Minimal vector type for positions and velocities. The simulation only
/// ever rotates about the vertical axis, so no full linear algebra crate
/// is pulled in.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Wire-friendly view of one agent, published with every world update.
#[derive(Debug, Clone, Serialize)]
pub struct AgentSnapshot {
    pub slot: u8,
    pub label: &'static str,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub yaw_deg: f32,
    pub lives: i32,
    pub phase: MovementPhase,
    pub enabled: bool,
}
