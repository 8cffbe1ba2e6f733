// Watch-channel input routing, standing in for the engine's input
// device layer. A feeder publishes raw axis samples per slot; the slot's
// agent polls its handle once per tick.

use tokio::sync::watch;

use crate::domain::ports::AxisSource;
use crate::domain::state::{PLAYER_COUNT, PlayerSlot};

/// Raw axis sample for one player.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AxisSample {
    pub horizontal: f32,
    pub vertical: f32,
}

/// Read side of one player's axis channel.
#[derive(Debug, Clone)]
pub struct AxisHandle {
    rx: watch::Receiver<AxisSample>,
}

impl AxisSource for AxisHandle {
    fn horizontal(&self) -> f32 {
        self.rx.borrow().horizontal
    }

    fn vertical(&self) -> f32 {
        self.rx.borrow().vertical
    }
}

/// Per-slot axis channels. Each handle is claimed exactly once while the
/// runtime is wired; a failed claim surfaces as a missing input binding
/// before anything starts.
pub struct InputRouter {
    feeds: Vec<watch::Sender<AxisSample>>,
    handles: Vec<Option<AxisHandle>>,
}

impl InputRouter {
    pub fn new() -> Self {
        let mut feeds = Vec::with_capacity(PLAYER_COUNT);
        let mut handles = Vec::with_capacity(PLAYER_COUNT);
        for _ in 0..PLAYER_COUNT {
            let (tx, rx) = watch::channel(AxisSample::default());
            feeds.push(tx);
            handles.push(Some(AxisHandle { rx }));
        }
        Self { feeds, handles }
    }

    /// Take the axis handle for `slot`. `None` once already claimed.
    pub fn claim(&mut self, slot: PlayerSlot) -> Option<AxisHandle> {
        self.handles[slot.index()].take()
    }

    /// Publish a new raw sample for `slot`.
    pub fn feed(&self, slot: PlayerSlot, sample: AxisSample) {
        let _ = self.feeds[slot.index()].send(sample);
    }
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new()
    }
}
