// Domain-level error types.

/// Slot index outside the four-player arena.
#[derive(Debug)]
pub enum SlotError {
    OutOfRange { index: u8 },
}

/// Rejected match rules, reported before any state is built from them.
#[derive(Debug)]
pub enum RulesError {
    ZeroScoreLimit,
    InvalidDelay { seconds: f32 },
}
