mod support;

use std::time::Duration;

use arena_runtime::domain::state::{MovementPhase, PlayerSlot, Vec3};
use arena_runtime::domain::tuning::player::AgentTuning;
use arena_runtime::domain::tuning::rules::MatchRules;
use arena_runtime::interface_adapters::flow::FlowSignal;
use arena_runtime::interface_adapters::inputs::AxisSample;
use arena_runtime::use_cases::types::{GameEvent, MatchState};
use support::{next_flow_signal, start_world, wait_for_state, wait_for_update};

fn slot(index: u8) -> PlayerSlot {
    PlayerSlot::new(index).expect("test slot in range")
}

#[tokio::test]
async fn a_full_match_runs_through_victory_and_reload() {
    let rules = MatchRules {
        score_limit: 3,
        results_delay: 0.05,
        victory_delay: 0.05,
        reset_scores_on_game_over: false,
    };
    let mut world = start_world(rules, AgentTuning::default(), Some(1));
    let shark = slot(2);

    // Two rounds for the shark, each followed by a round start request.
    for _ in 0..2 {
        world
            .event_tx
            .send(GameEvent::RoundEnded {
                winner: Some(shark),
            })
            .await
            .unwrap();
        assert_eq!(next_flow_signal(&mut world).await, FlowSignal::StartRound);
    }

    // The third win reaches the limit and decides the match.
    world
        .event_tx
        .send(GameEvent::RoundEnded {
            winner: Some(shark),
        })
        .await
        .unwrap();
    wait_for_state(&mut world, MatchState::MatchEnded { winner: shark }).await;

    let update = wait_for_update(&mut world, |update| update.scores == [0, 0, 3, 0]).await;
    assert_eq!(update.scores, [0, 0, 3, 0]);

    // Victory screen first, then the reload request; never another round.
    assert_eq!(next_flow_signal(&mut world).await, FlowSignal::LoadScene(0));
    world
        .event_tx
        .send(GameEvent::SceneLoaded { index: 0 })
        .await
        .unwrap();

    // One match was budgeted, so the world loop drains and stops.
    tokio::time::timeout(Duration::from_secs(5), world.world)
        .await
        .expect("world stops after its match budget")
        .expect("world task completes cleanly");
}

#[tokio::test]
async fn a_drawn_round_changes_no_scores_and_queues_the_next_round() {
    let mut world = start_world(support::quick_rules(), AgentTuning::default(), None);

    world
        .event_tx
        .send(GameEvent::RoundEnded { winner: None })
        .await
        .unwrap();
    wait_for_state(&mut world, MatchState::RoundResults).await;

    assert_eq!(next_flow_signal(&mut world).await, FlowSignal::StartRound);
    wait_for_state(&mut world, MatchState::RoundInProgress).await;

    let update = wait_for_update(&mut world, |_| true).await;
    assert_eq!(update.scores, [0, 0, 0, 0]);

    world.shutdown.notify_one();
    tokio::time::timeout(Duration::from_secs(5), world.world)
        .await
        .expect("world stops on shutdown")
        .expect("world task completes cleanly");
}

#[tokio::test]
async fn agents_walk_and_steer_from_fed_axis_samples() {
    let mut world = start_world(support::quick_rules(), AgentTuning::default(), None);
    let bear = slot(0);

    world
        .event_tx
        .send(GameEvent::AgentSpawned {
            slot: bear,
            position: Vec3::ZERO,
        })
        .await
        .unwrap();
    world
        .event_tx
        .send(GameEvent::PhaseChanged {
            phase: MovementPhase::Moving,
        })
        .await
        .unwrap();
    world.router.feed(
        bear,
        AxisSample {
            horizontal: 1.0,
            vertical: 0.0,
        },
    );

    let update = wait_for_update(&mut world, |update| {
        let agent = &update.agents[0];
        agent.z > 0.2 && agent.yaw_deg > 5.0
    })
    .await;

    let agent = &update.agents[0];
    assert_eq!(agent.label, "bear");
    assert!(agent.enabled);
    assert_eq!(agent.phase, MovementPhase::Moving);

    world.shutdown.notify_one();
    tokio::time::timeout(Duration::from_secs(5), world.world)
        .await
        .expect("world stops on shutdown")
        .expect("world task completes cleanly");
}

#[tokio::test]
async fn a_killed_agent_freezes_until_respawned() {
    let tuning = AgentTuning {
        initial_lives: 2,
        ..AgentTuning::default()
    };
    let mut world = start_world(support::quick_rules(), tuning, None);
    let cow = slot(1);

    world
        .event_tx
        .send(GameEvent::PhaseChanged {
            phase: MovementPhase::Moving,
        })
        .await
        .unwrap();
    wait_for_update(&mut world, |update| update.agents[1].z > 0.1).await;

    world
        .event_tx
        .send(GameEvent::AgentKilled { slot: cow })
        .await
        .unwrap();
    let killed = wait_for_update(&mut world, |update| !update.agents[1].enabled).await;
    let frozen_z = killed.agents[1].z;
    assert_eq!(killed.agents[1].lives, 1);

    // Plenty of ticks pass; the body must not move an inch.
    tokio::time::sleep(Duration::from_millis(50)).await;
    let later = wait_for_update(&mut world, |_| true).await;
    assert_eq!(later.agents[1].z, frozen_z);

    world
        .event_tx
        .send(GameEvent::AgentSpawned {
            slot: cow,
            position: Vec3::new(0.0, 0.0, 10.0),
        })
        .await
        .unwrap();
    let spawned = wait_for_update(&mut world, |update| update.agents[1].enabled).await;
    assert!(spawned.agents[1].z >= 10.0);

    world.shutdown.notify_one();
    tokio::time::timeout(Duration::from_secs(5), world.world)
        .await
        .expect("world stops on shutdown")
        .expect("world task completes cleanly");
}
