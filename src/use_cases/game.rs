// The match loop. Owns every agent and the score tracker, drains
// orchestrator events, advances the simulation on a fixed interval, and
// publishes world updates and the coarse match state.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Notify, broadcast, mpsc, watch};
use tracing::{debug, info};

use crate::domain::agent::PlayerAgent;
use crate::domain::ports::{AxisSource, RoundFlow, RoundOverlay, SceneFlow};
use crate::domain::state::{PLAYER_COUNT, Vec3};
use crate::use_cases::scoring::{ScoreTracker, TrackerPhase};
use crate::use_cases::types::{GameEvent, MatchState, WorldUpdate};

/// Knobs for one world loop.
pub struct WorldSettings {
    /// Fixed step of the simulation loop.
    pub tick_interval: Duration,
    /// Where each slot stands after a scene reload.
    pub spawn_points: [Vec3; PLAYER_COUNT],
    /// Completed matches before the loop shuts the runtime down. `None`
    /// keeps it running until an external shutdown.
    pub max_matches: Option<u32>,
}

/// Drive the world until shutdown. Events queued since the previous tick
/// are applied first, then every agent and the tracker advance by one
/// fixed step, then a fresh update goes out.
pub async fn world_task<I, O, R, S>(
    mut agents: Vec<PlayerAgent<I>>,
    mut tracker: ScoreTracker<O, R, S>,
    mut event_rx: mpsc::Receiver<GameEvent>,
    update_tx: broadcast::Sender<WorldUpdate>,
    state_tx: watch::Sender<MatchState>,
    settings: WorldSettings,
    shutdown: Arc<Notify>,
) where
    I: AxisSource,
    O: RoundOverlay,
    R: RoundFlow,
    S: SceneFlow,
{
    let dt = settings.tick_interval.as_secs_f32();
    let mut interval = tokio::time::interval(settings.tick_interval);
    let mut tick: u64 = 0;
    let mut completed_matches: u32 = 0;

    loop {
        tokio::select! {
            _ = shutdown.notified() => {
                info!("world loop received shutdown");
                break;
            }
            _ = interval.tick() => {}
        }

        let mut budget_spent = false;
        while let Ok(event) = event_rx.try_recv() {
            match event {
                GameEvent::SceneLoaded { index } => {
                    info!(scene = index, "scene loaded, resetting world");
                    for (agent, spawn) in agents.iter_mut().zip(settings.spawn_points) {
                        agent.reset(spawn);
                    }
                    completed_matches += 1;
                    if let Some(limit) = settings.max_matches {
                        if completed_matches >= limit {
                            info!(completed_matches, "match budget reached");
                            budget_spent = true;
                        }
                    }
                }
                other => apply_event(&mut agents, &mut tracker, other),
            }
        }

        for agent in agents.iter_mut() {
            agent.tick(dt);
        }
        tracker.tick(dt);

        tick += 1;
        let _ = update_tx.send(WorldUpdate {
            tick,
            agents: agents.iter().map(PlayerAgent::snapshot).collect(),
            scores: tracker.board().counts(),
        });

        let state = match tracker.phase() {
            TrackerPhase::Idle => MatchState::RoundInProgress,
            TrackerPhase::RoundResults => MatchState::RoundResults,
            TrackerPhase::MatchEnding { winner } | TrackerPhase::MatchResults { winner } => {
                MatchState::MatchEnded { winner }
            }
        };
        state_tx.send_if_modified(|current| {
            if *current != state {
                *current = state;
                true
            } else {
                false
            }
        });

        if budget_spent {
            shutdown.notify_waiters();
            break;
        }
    }
}

fn apply_event<I, O, R, S>(
    agents: &mut [PlayerAgent<I>],
    tracker: &mut ScoreTracker<O, R, S>,
    event: GameEvent,
) where
    I: AxisSource,
    O: RoundOverlay,
    R: RoundFlow,
    S: SceneFlow,
{
    match event {
        GameEvent::RoundEnded { winner } => tracker.round_ended(winner),
        GameEvent::PhaseChanged { phase } => {
            debug!(?phase, "movement phase changed");
            for agent in agents.iter_mut() {
                agent.change_phase(phase);
            }
        }
        GameEvent::AgentKilled { slot } => {
            if let Some(agent) = agents.iter_mut().find(|agent| agent.slot() == slot) {
                agent.kill();
            }
        }
        GameEvent::AgentSpawned { slot, position } => {
            if let Some(agent) = agents.iter_mut().find(|agent| agent.slot() == slot) {
                agent.spawn_at(position);
            }
        }
        // Scene loads reset the whole world; the loop handles them.
        GameEvent::SceneLoaded { .. } => {}
    }
}
