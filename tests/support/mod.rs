// Shared wiring for world-loop integration tests: a real world task over
// channel collaborators, with timings shrunk so a full match fits in a
// fast test run.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Notify, broadcast, mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::timeout;

use arena_runtime::domain::agent::PlayerAgent;
use arena_runtime::domain::state::PlayerSlot;
use arena_runtime::domain::tuning::player::AgentTuning;
use arena_runtime::domain::tuning::rules::MatchRules;
use arena_runtime::frameworks::runner::SPAWN_POINTS;
use arena_runtime::interface_adapters::console::ConsoleOverlay;
use arena_runtime::interface_adapters::flow::{FlowSignal, RoundFlowChannel, SceneFlowChannel};
use arena_runtime::interface_adapters::inputs::{AxisHandle, InputRouter};
use arena_runtime::use_cases::game::{WorldSettings, world_task};
use arena_runtime::use_cases::scoring::ScoreTracker;
use arena_runtime::use_cases::types::{GameEvent, MatchState, WorldUpdate};

/// Fixed step small enough that delay-driven assertions resolve quickly.
pub const TICK: Duration = Duration::from_millis(2);

const DEADLINE: Duration = Duration::from_secs(5);

pub struct TestWorld {
    pub event_tx: mpsc::Sender<GameEvent>,
    pub flow_rx: mpsc::Receiver<FlowSignal>,
    pub update_rx: broadcast::Receiver<WorldUpdate>,
    pub state_rx: watch::Receiver<MatchState>,
    pub router: InputRouter,
    pub shutdown: Arc<Notify>,
    pub world: JoinHandle<()>,
}

/// Rules shrunk to integration-test scale.
pub fn quick_rules() -> MatchRules {
    MatchRules {
        score_limit: 3,
        results_delay: 0.05,
        victory_delay: 0.05,
        reset_scores_on_game_over: true,
    }
}

/// Wire four agents and a tracker onto a spawned world task.
pub fn start_world(rules: MatchRules, tuning: AgentTuning, max_matches: Option<u32>) -> TestWorld {
    let (event_tx, event_rx) = mpsc::channel(64);
    let (flow_tx, flow_rx) = mpsc::channel(8);
    let (update_tx, update_rx) = broadcast::channel(256);
    let (state_tx, state_rx) = watch::channel(MatchState::RoundInProgress);
    let shutdown = Arc::new(Notify::new());

    let mut router = InputRouter::new();
    let agents: Vec<PlayerAgent<AxisHandle>> = PlayerSlot::all()
        .map(|slot| {
            let handle = router.claim(slot).expect("fresh router has every handle");
            PlayerAgent::new(slot, handle, tuning)
        })
        .collect();

    let tracker = ScoreTracker::new(
        rules,
        ConsoleOverlay,
        RoundFlowChannel::new(flow_tx.clone()),
        SceneFlowChannel::new(flow_tx),
    )
    .expect("test rules should validate");

    let world = tokio::spawn(world_task(
        agents,
        tracker,
        event_rx,
        update_tx,
        state_tx,
        WorldSettings {
            tick_interval: TICK,
            spawn_points: SPAWN_POINTS,
            max_matches,
        },
        shutdown.clone(),
    ));

    TestWorld {
        event_tx,
        flow_rx,
        update_rx,
        state_rx,
        router,
        shutdown,
        world,
    }
}

/// Next signal out of the tracker's flow ports, or panic on the deadline.
pub async fn next_flow_signal(world: &mut TestWorld) -> FlowSignal {
    timeout(DEADLINE, world.flow_rx.recv())
        .await
        .expect("flow signal within deadline")
        .expect("flow channel open")
}

/// Block until the published match state equals `want`.
pub async fn wait_for_state(world: &mut TestWorld, want: MatchState) {
    timeout(DEADLINE, async {
        loop {
            if *world.state_rx.borrow_and_update() == want {
                return;
            }
            world
                .state_rx
                .changed()
                .await
                .expect("state channel open");
        }
    })
    .await
    .expect("state within deadline");
}

/// Consume world updates until one satisfies `predicate`.
pub async fn wait_for_update(
    world: &mut TestWorld,
    mut predicate: impl FnMut(&WorldUpdate) -> bool,
) -> WorldUpdate {
    timeout(DEADLINE, async {
        loop {
            match world.update_rx.recv().await {
                Ok(update) => {
                    if predicate(&update) {
                        return update;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(_)) => {}
                Err(broadcast::error::RecvError::Closed) => panic!("update channel closed"),
            }
        }
    })
    .await
    .expect("matching update within deadline")
}
