use std::{env, time::Duration};

// Runtime constants and env overrides (not gameplay tuning).

pub fn tick_interval() -> Duration {
    env::var("ARENA_TICK_HZ")
        .ok()
        .and_then(|v| v.parse().ok())
        .map(interval_from_hz)
        .unwrap_or(TICK_INTERVAL)
}

/// One second divided at nanosecond precision. Zero and rates with no
/// representable period fall back to the stock interval; the world
/// loop's timer rejects a zero period.
fn interval_from_hz(hz: u32) -> Duration {
    if hz == 0 {
        return TICK_INTERVAL;
    }
    let interval = Duration::from_secs(1) / hz;
    if interval.is_zero() { TICK_INTERVAL } else { interval }
}

pub fn score_limit() -> u32 {
    env::var("ARENA_SCORE_LIMIT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(5)
}

/// Lives per agent for a demo run. The scripted rounds eliminate every
/// loser, so this is far above the single life a stock agent carries.
pub fn initial_lives() -> i32 {
    env::var("ARENA_INITIAL_LIVES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(20)
}

/// Scores zero on the match-over reload unless explicitly kept.
pub fn reset_scores_on_game_over() -> bool {
    !matches!(
        env::var("ARENA_KEEP_SCORES").as_deref(),
        Ok("1") | Ok("true")
    )
}

/// Completed matches before the demo runtime shuts down (0 runs forever).
pub fn demo_matches() -> u32 {
    env::var("ARENA_DEMO_MATCHES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(1)
}

/// Seconds of simulated play per scripted demo round.
pub fn demo_round_seconds() -> f32 {
    env::var("ARENA_ROUND_SECONDS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3.0)
}

pub const EVENT_CHANNEL_CAPACITY: usize = 256;
pub const UPDATE_BROADCAST_CAPACITY: usize = 64;
pub const FLOW_CHANNEL_CAPACITY: usize = 8;

pub const TICK_INTERVAL: Duration = Duration::from_millis(1000 / 60);
