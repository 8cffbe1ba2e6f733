// Round scoring and the between-round sequencing. Delayed steps run
// through an explicit action schedule polled from the fixed-tick loop;
// nothing here owns a timer of its own.

use tracing::info;

use crate::domain::errors::RulesError;
use crate::domain::ports::{RoundFlow, RoundOverlay, SceneFlow};
use crate::domain::state::{PlayerSlot, ScoreBoard};
use crate::domain::tuning::rules::MatchRules;

/// Scene index the match-over reload targets.
const MAIN_SCENE: u32 = 0;

/// Delayed side effects queued when a round closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SequenceAction {
    BeginNextRound,
    ShowVictory(PlayerSlot),
    ResetGame,
}

#[derive(Debug)]
struct Scheduled {
    due_at: f32,
    action: SequenceAction,
}

/// Pending actions keyed by elapsed tracker time. Once queued, an action
/// always runs; there is no cancellation path.
#[derive(Debug, Default)]
struct ActionSchedule {
    elapsed: f32,
    pending: Vec<Scheduled>,
}

impl ActionSchedule {
    fn push(&mut self, delay: f32, action: SequenceAction) {
        self.pending.push(Scheduled {
            due_at: self.elapsed + delay,
            action,
        });
    }

    /// Advance by `dt` and drain every action now due, ordered by due
    /// time with ties kept in push order.
    fn advance(&mut self, dt: f32) -> Vec<SequenceAction> {
        if self.pending.is_empty() {
            return Vec::new();
        }
        self.elapsed += dt;

        let elapsed = self.elapsed;
        let mut due = Vec::new();
        let mut index = 0;
        while index < self.pending.len() {
            if self.pending[index].due_at <= elapsed {
                due.push(self.pending.remove(index));
            } else {
                index += 1;
            }
        }
        due.sort_by(|a, b| a.due_at.total_cmp(&b.due_at));

        // The clock rebases whenever the queue drains, so elapsed time
        // never grows without bound.
        if self.pending.is_empty() {
            self.elapsed = 0.0;
        }

        due.into_iter().map(|scheduled| scheduled.action).collect()
    }
}

/// Where the tracker sits in the round-to-match lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerPhase {
    /// A round is running and the overlay is hidden.
    Idle,
    /// Round results are up; the next round is pending.
    RoundResults,
    /// The match is decided; the victory screen is pending.
    MatchEnding { winner: PlayerSlot },
    /// The victory screen is up; the scene reload is pending.
    MatchResults { winner: PlayerSlot },
}

/// Tracks round wins across a match and drives the overlay, the round
/// flow, and the scene reload through its ports.
pub struct ScoreTracker<O, R, S> {
    board: ScoreBoard,
    rules: MatchRules,
    overlay: O,
    rounds: R,
    scene: S,
    phase: TrackerPhase,
    schedule: ActionSchedule,
}

impl<O, R, S> ScoreTracker<O, R, S>
where
    O: RoundOverlay,
    R: RoundFlow,
    S: SceneFlow,
{
    /// Build a tracker over validated rules. Every collaborator is a
    /// required argument, so a half-wired tracker cannot exist.
    pub fn new(rules: MatchRules, overlay: O, rounds: R, scene: S) -> Result<Self, RulesError> {
        rules.validate()?;
        Ok(Self {
            board: ScoreBoard::new(),
            rules,
            overlay,
            rounds,
            scene,
            phase: TrackerPhase::Idle,
            schedule: ActionSchedule::default(),
        })
    }

    pub fn phase(&self) -> TrackerPhase {
        self.phase
    }

    pub fn board(&self) -> &ScoreBoard {
        &self.board
    }

    /// Round-over notification from the round orchestrator. Updates the
    /// board, shows the overlay, and queues whichever sequence follows.
    pub fn round_ended(&mut self, winner: Option<PlayerSlot>) {
        if let Some(slot) = winner {
            self.board.record_win(slot);
        }
        self.overlay.show_round_result(winner);
        self.overlay.update_win_counts(&self.board);
        self.overlay.set_visible(true);

        let finished = self.board.any_at(self.rules.score_limit);
        match (finished, winner) {
            (true, Some(slot)) => {
                info!(
                    winner = slot.label(),
                    scores = ?self.board.counts(),
                    "match decided"
                );
                self.phase = TrackerPhase::MatchEnding { winner: slot };
                self.schedule
                    .push(self.rules.results_delay, SequenceAction::ShowVictory(slot));
                self.schedule.push(
                    self.rules.results_delay + self.rules.victory_delay,
                    SequenceAction::ResetGame,
                );
            }
            // A drawn round never ends the match, even with a counter
            // already sitting at the limit from an earlier match.
            _ => {
                match winner {
                    Some(slot) => info!(
                        winner = slot.label(),
                        scores = ?self.board.counts(),
                        "round ended"
                    ),
                    None => info!(scores = ?self.board.counts(), "round drawn"),
                }
                self.phase = TrackerPhase::RoundResults;
                self.schedule
                    .push(self.rules.results_delay, SequenceAction::BeginNextRound);
            }
        }
    }

    /// Advance pending sequence actions by one fixed step.
    pub fn tick(&mut self, dt: f32) {
        for action in self.schedule.advance(dt) {
            self.run(action);
        }
    }

    fn run(&mut self, action: SequenceAction) {
        match action {
            SequenceAction::BeginNextRound => {
                self.overlay.set_visible(false);
                self.rounds.start_round();
                self.phase = TrackerPhase::Idle;
            }
            SequenceAction::ShowVictory(winner) => {
                self.overlay.show_match_winner(winner);
                self.phase = TrackerPhase::MatchResults { winner };
            }
            SequenceAction::ResetGame => {
                if self.rules.reset_scores_on_game_over {
                    self.board.reset();
                }
                info!(scene = MAIN_SCENE, "match over, reloading scene");
                self.scene.load_scene(MAIN_SCENE);
                self.phase = TrackerPhase::Idle;
            }
        }
    }
}
