// Log-backed score overlay. The real overlay is an engine canvas; the
// headless runtime renders the same traffic as structured log events.

use tracing::info;

use crate::domain::ports::RoundOverlay;
use crate::domain::state::{PlayerSlot, ScoreBoard};

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleOverlay;

impl RoundOverlay for ConsoleOverlay {
    fn set_visible(&mut self, visible: bool) {
        info!(visible, "score overlay");
    }

    fn show_round_result(&mut self, winner: Option<PlayerSlot>) {
        match winner {
            Some(slot) => info!(winner = slot.label(), "round winner"),
            None => info!("round drawn, nobody wins"),
        }
    }

    fn show_match_winner(&mut self, winner: PlayerSlot) {
        info!(winner = winner.label(), "match winner");
    }

    fn update_win_counts(&mut self, board: &ScoreBoard) {
        let [bear, cow, shark, lion] = board.counts();
        info!(bear, cow, shark, lion, "win counts");
    }
}
