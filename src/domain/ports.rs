// Seams between the domain core and the services that host it. The score
// overlay, round orchestration, scene management, and input devices all
// live outside the simulation; the runtime wires adapters in here.

use crate::domain::state::{PlayerSlot, ScoreBoard};

/// Score overlay shown between rounds and after a match.
pub trait RoundOverlay: Send {
    /// Show or hide the whole overlay.
    fn set_visible(&mut self, visible: bool);

    /// Present the outcome of the round that just ended. `None` is a draw.
    fn show_round_result(&mut self, winner: Option<PlayerSlot>);

    /// Present the victory screen for the match winner.
    fn show_match_winner(&mut self, winner: PlayerSlot);

    /// Refresh the per-slot win counters.
    fn update_win_counts(&mut self, board: &ScoreBoard);
}

/// Outbound control over the round orchestrator.
pub trait RoundFlow: Send {
    fn start_round(&mut self);
}

/// Outbound control over the scene manager.
pub trait SceneFlow: Send {
    fn load_scene(&mut self, index: u32);
}

/// Raw axis samples for one player, polled every tick.
pub trait AxisSource: Send {
    fn horizontal(&self) -> f32;
    fn vertical(&self) -> f32;
}
