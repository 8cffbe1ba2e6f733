// Use-case layer: the match loop and the scoring workflow it drives.

pub mod game;
pub mod scoring;
pub mod types;

#[cfg(test)]
pub mod test_support;

pub use game::{WorldSettings, world_task};
pub use scoring::{ScoreTracker, TrackerPhase};
pub use types::{GameEvent, MatchState, WorldUpdate};
