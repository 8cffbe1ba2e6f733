// Channel adapters behind the tracker's outbound ports. Both ports feed
// one control stream, consumed by whatever drives the rounds.

use tokio::sync::mpsc;
use tracing::warn;

use crate::domain::ports::{RoundFlow, SceneFlow};

/// Control signals emitted by the score tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowSignal {
    /// The results overlay is down; the next round may start.
    StartRound,
    /// The match is over; reload the given scene.
    LoadScene(u32),
}

pub struct RoundFlowChannel {
    tx: mpsc::Sender<FlowSignal>,
}

impl RoundFlowChannel {
    pub fn new(tx: mpsc::Sender<FlowSignal>) -> Self {
        Self { tx }
    }
}

impl RoundFlow for RoundFlowChannel {
    fn start_round(&mut self) {
        if self.tx.try_send(FlowSignal::StartRound).is_err() {
            warn!("flow channel unavailable, dropping round start");
        }
    }
}

pub struct SceneFlowChannel {
    tx: mpsc::Sender<FlowSignal>,
}

impl SceneFlowChannel {
    pub fn new(tx: mpsc::Sender<FlowSignal>) -> Self {
        Self { tx }
    }
}

impl SceneFlow for SceneFlowChannel {
    fn load_scene(&mut self, index: u32) {
        if self.tx.try_send(FlowSignal::LoadScene(index)).is_err() {
            warn!(scene = index, "flow channel unavailable, dropping reload");
        }
    }
}
