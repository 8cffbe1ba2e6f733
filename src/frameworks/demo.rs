// Scripted round orchestration for the headless demo binary. Stands in
// for the engine-side rounds controller: places agents, switches the
// movement phases, reports eliminations, and closes each round with a
// winner or a draw.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Notify, broadcast, mpsc};
use tracing::info;

use crate::domain::state::{MovementPhase, PLAYER_COUNT, PlayerSlot};
use crate::frameworks::runner::SPAWN_POINTS;
use crate::interface_adapters::flow::FlowSignal;
use crate::interface_adapters::inputs::{AxisSample, InputRouter};
use crate::use_cases::types::{GameEvent, WorldUpdate};

pub struct DriverSettings {
    /// Seconds of simulated play per scripted round.
    pub round_seconds: f32,
}

/// Play scripted rounds until the world loop goes away, then print the
/// last observed frame as a JSON summary.
pub async fn driver_task(
    settings: DriverSettings,
    event_tx: mpsc::Sender<GameEvent>,
    mut flow_rx: mpsc::Receiver<FlowSignal>,
    mut update_rx: broadcast::Receiver<WorldUpdate>,
    router: InputRouter,
    shutdown: Arc<Notify>,
) {
    let mut round_index: u32 = 0;
    let mut matches_played: u32 = 0;
    let mut latest: Option<WorldUpdate> = None;

    'matches: loop {
        if event_tx.is_closed() {
            break;
        }
        play_round(&settings, &event_tx, &router, round_index, matches_played).await;
        round_index += 1;

        // Hold here until the tracker asks for the next round or the
        // match-over reload, keeping the newest frame on hand.
        loop {
            tokio::select! {
                _ = shutdown.notified() => break 'matches,
                update = update_rx.recv() => match update {
                    Ok(update) => latest = Some(update),
                    Err(broadcast::error::RecvError::Lagged(_)) => {}
                    Err(broadcast::error::RecvError::Closed) => break 'matches,
                },
                signal = flow_rx.recv() => match signal {
                    Some(FlowSignal::StartRound) => continue 'matches,
                    Some(FlowSignal::LoadScene(index)) => {
                        info!(scene = index, "reloading scene");
                        matches_played += 1;
                        round_index = 0;
                        let _ = event_tx.send(GameEvent::SceneLoaded { index }).await;
                        continue 'matches;
                    }
                    None => break 'matches,
                },
            }
        }
    }

    if let Some(update) = latest {
        match serde_json::to_string(&update) {
            Ok(summary) => println!("{summary}"),
            Err(error) => tracing::error!(%error, "failed to serialize the final frame"),
        }
    }
}

async fn play_round(
    settings: &DriverSettings,
    event_tx: &mpsc::Sender<GameEvent>,
    router: &InputRouter,
    round_index: u32,
    matches_played: u32,
) {
    let beat = Duration::from_secs_f32((settings.round_seconds / 4.0).max(0.05));
    let winner = favored_winner(matches_played);
    // One mid-match draw per match shows the no-winner path.
    let draw = round_index == 2;
    info!(round_index, "round starting");

    for (slot, spawn) in PlayerSlot::all().zip(SPAWN_POINTS) {
        let spawned = event_tx
            .send(GameEvent::AgentSpawned {
                slot,
                position: spawn,
            })
            .await;
        if spawned.is_err() {
            return;
        }
        // Mirror the turn direction across the arena.
        let horizontal = if slot.index() % 2 == 0 { 0.6 } else { -0.6 };
        router.feed(
            slot,
            AxisSample {
                horizontal,
                vertical: 0.8,
            },
        );
    }
    tokio::time::sleep(beat).await;

    let _ = event_tx
        .send(GameEvent::PhaseChanged {
            phase: MovementPhase::Moving,
        })
        .await;
    tokio::time::sleep(beat * 2).await;

    let _ = event_tx
        .send(GameEvent::PhaseChanged {
            phase: MovementPhase::Shooting,
        })
        .await;
    tokio::time::sleep(beat).await;

    for slot in PlayerSlot::all() {
        if slot != winner || draw {
            let _ = event_tx.send(GameEvent::AgentKilled { slot }).await;
        }
    }
    let _ = event_tx
        .send(GameEvent::PhaseChanged {
            phase: MovementPhase::Idle,
        })
        .await;
    let outcome = if draw { None } else { Some(winner) };
    let _ = event_tx.send(GameEvent::RoundEnded { winner: outcome }).await;
}

fn favored_winner(matches_played: u32) -> PlayerSlot {
    let index = (matches_played as usize % PLAYER_COUNT) as u8;
    PlayerSlot::new(index).expect("slot index is within the arena")
}
