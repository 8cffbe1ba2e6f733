// Shared fakes for unit tests. Each recording fake is a cloneable handle
// over a shared call log, so a test keeps its view after moving a clone
// into the code under test.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::ports::{AxisSource, RoundFlow, RoundOverlay, SceneFlow};
use crate::domain::state::{PLAYER_COUNT, PlayerSlot, ScoreBoard};

/// Calls observed by a [`RecordingOverlay`].
#[derive(Debug, Default)]
pub struct OverlayCalls {
    pub visibility: Vec<bool>,
    pub round_results: Vec<Option<PlayerSlot>>,
    pub match_winners: Vec<PlayerSlot>,
    pub win_counts: Vec<[u32; PLAYER_COUNT]>,
}

#[derive(Clone, Default)]
pub struct RecordingOverlay {
    calls: Arc<Mutex<OverlayCalls>>,
}

impl RecordingOverlay {
    pub fn calls(&self) -> MutexGuard<'_, OverlayCalls> {
        self.calls.lock().expect("overlay call log poisoned")
    }
}

impl RoundOverlay for RecordingOverlay {
    fn set_visible(&mut self, visible: bool) {
        self.calls().visibility.push(visible);
    }

    fn show_round_result(&mut self, winner: Option<PlayerSlot>) {
        self.calls().round_results.push(winner);
    }

    fn show_match_winner(&mut self, winner: PlayerSlot) {
        self.calls().match_winners.push(winner);
    }

    fn update_win_counts(&mut self, board: &ScoreBoard) {
        self.calls().win_counts.push(board.counts());
    }
}

#[derive(Clone, Default)]
pub struct RecordingFlow {
    started: Arc<Mutex<usize>>,
}

impl RecordingFlow {
    pub fn started(&self) -> usize {
        *self.started.lock().expect("round flow log poisoned")
    }
}

impl RoundFlow for RecordingFlow {
    fn start_round(&mut self) {
        *self.started.lock().expect("round flow log poisoned") += 1;
    }
}

#[derive(Clone, Default)]
pub struct RecordingScene {
    loaded: Arc<Mutex<Vec<u32>>>,
}

impl RecordingScene {
    pub fn loaded(&self) -> Vec<u32> {
        self.loaded.lock().expect("scene log poisoned").clone()
    }
}

impl SceneFlow for RecordingScene {
    fn load_scene(&mut self, index: u32) {
        self.loaded.lock().expect("scene log poisoned").push(index);
    }
}

/// Axis source with fixed values.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedAxis {
    pub horizontal: f32,
    pub vertical: f32,
}

impl AxisSource for FixedAxis {
    fn horizontal(&self) -> f32 {
        self.horizontal
    }

    fn vertical(&self) -> f32 {
        self.vertical
    }
}

/// Axis source a test can steer mid-run through a cloned handle.
#[derive(Clone, Default)]
pub struct SharedAxis {
    values: Arc<Mutex<FixedAxis>>,
}

impl SharedAxis {
    pub fn set(&self, horizontal: f32, vertical: f32) {
        *self.values.lock().expect("axis values poisoned") = FixedAxis {
            horizontal,
            vertical,
        };
    }
}

impl AxisSource for SharedAxis {
    fn horizontal(&self) -> f32 {
        self.values.lock().expect("axis values poisoned").horizontal
    }

    fn vertical(&self) -> f32 {
        self.values.lock().expect("axis values poisoned").vertical
    }
}
