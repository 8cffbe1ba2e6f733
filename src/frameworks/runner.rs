// Framework bootstrap for the arena runtime.

use std::io::Result;
use std::sync::Arc;

use tokio::sync::{Notify, broadcast, mpsc, watch};

use crate::domain::agent::PlayerAgent;
use crate::domain::errors::RulesError;
use crate::domain::state::{PLAYER_COUNT, PlayerSlot, Vec3};
use crate::domain::tuning::player::AgentTuning;
use crate::domain::tuning::rules::MatchRules;
use crate::frameworks::{config, demo};
use crate::interface_adapters::console::ConsoleOverlay;
use crate::interface_adapters::flow::{FlowSignal, RoundFlowChannel, SceneFlowChannel};
use crate::interface_adapters::inputs::{AxisHandle, InputRouter};
use crate::use_cases::game::{WorldSettings, world_task};
use crate::use_cases::scoring::ScoreTracker;
use crate::use_cases::types::{GameEvent, MatchState, WorldUpdate};

/// Wiring failures surfaced before any task starts.
#[derive(Debug)]
pub enum SetupError {
    MissingInputBinding { slot: PlayerSlot },
    InvalidRules(RulesError),
}

/// Default spawn formation, one corner per slot.
pub const SPAWN_POINTS: [Vec3; PLAYER_COUNT] = [
    Vec3::new(-6.0, 0.0, -6.0),
    Vec3::new(6.0, 0.0, -6.0),
    Vec3::new(-6.0, 0.0, 6.0),
    Vec3::new(6.0, 0.0, 6.0),
];

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

struct Wired {
    agents: Vec<PlayerAgent<AxisHandle>>,
    tracker: ScoreTracker<ConsoleOverlay, RoundFlowChannel, SceneFlowChannel>,
    router: InputRouter,
    event_tx: mpsc::Sender<GameEvent>,
    event_rx: mpsc::Receiver<GameEvent>,
    flow_rx: mpsc::Receiver<FlowSignal>,
    update_tx: broadcast::Sender<WorldUpdate>,
    state_tx: watch::Sender<MatchState>,
}

fn wire_world(rules: MatchRules, tuning: AgentTuning) -> std::result::Result<Wired, SetupError> {
    let (event_tx, event_rx) = mpsc::channel(config::EVENT_CHANNEL_CAPACITY);
    let (flow_tx, flow_rx) = mpsc::channel(config::FLOW_CHANNEL_CAPACITY);
    let (update_tx, _) = broadcast::channel(config::UPDATE_BROADCAST_CAPACITY);
    let (state_tx, _) = watch::channel(MatchState::RoundInProgress);

    // Every slot claims its input binding up front, so a missing device
    // fails the whole runtime instead of one silent agent.
    let mut router = InputRouter::new();
    let mut agents = Vec::with_capacity(PLAYER_COUNT);
    for slot in PlayerSlot::all() {
        let handle = router
            .claim(slot)
            .ok_or(SetupError::MissingInputBinding { slot })?;
        agents.push(PlayerAgent::new(slot, handle, tuning));
    }

    let tracker = ScoreTracker::new(
        rules,
        ConsoleOverlay,
        RoundFlowChannel::new(flow_tx.clone()),
        SceneFlowChannel::new(flow_tx),
    )
    .map_err(SetupError::InvalidRules)?;

    Ok(Wired {
        agents,
        tracker,
        router,
        event_tx,
        event_rx,
        flow_rx,
        update_tx,
        state_tx,
    })
}

pub async fn run() -> Result<()> {
    init_runtime();

    let rules = MatchRules {
        score_limit: config::score_limit(),
        reset_scores_on_game_over: config::reset_scores_on_game_over(),
        ..MatchRules::default()
    };
    let tuning = AgentTuning {
        initial_lives: config::initial_lives(),
        ..AgentTuning::default()
    };

    let wired = wire_world(rules, tuning)
        .map_err(|e| std::io::Error::other(format!("failed to wire the match runtime: {e:?}")))?;

    let max_matches = match config::demo_matches() {
        0 => None,
        matches => Some(matches),
    };
    let settings = WorldSettings {
        tick_interval: config::tick_interval(),
        spawn_points: SPAWN_POINTS,
        max_matches,
    };

    tracing::info!(
        score_limit = rules.score_limit,
        tick_ms = settings.tick_interval.as_millis() as u64,
        ?max_matches,
        "arena runtime starting"
    );

    let shutdown = Arc::new(Notify::new());
    let driver_updates = wired.update_tx.subscribe();

    let world = tokio::spawn(world_task(
        wired.agents,
        wired.tracker,
        wired.event_rx,
        wired.update_tx,
        wired.state_tx,
        settings,
        shutdown.clone(),
    ));
    let driver = tokio::spawn(demo::driver_task(
        demo::DriverSettings {
            round_seconds: config::demo_round_seconds(),
        },
        wired.event_tx,
        wired.flow_rx,
        driver_updates,
        wired.router,
        shutdown,
    ));

    let (world_result, driver_result) = tokio::join!(world, driver);
    world_result.map_err(std::io::Error::other)?;
    driver_result.map_err(std::io::Error::other)?;

    tracing::info!("arena runtime stopped");
    Ok(())
}
