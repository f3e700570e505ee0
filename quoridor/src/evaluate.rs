use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use engine::evaluation;

use crate::action::Action;
use crate::coordinate::Coordinate;
use crate::error::Result;
use crate::game_state::GameState;
use crate::pathing::Distance;
use crate::player::Player;
use crate::wall::Wall;

pub type Score = i64;

/// One-ply sweep outcome: the best differential found, every candidate
/// that achieved it in sweep order, and how the wall catalog fared.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Evaluation {
    pub best_score: Score,
    pub best_moves: Vec<Action>,
    pub wall_trials: usize,
    pub skipped_trials: usize,
    pub complete: bool,
}

impl evaluation::Evaluation for Evaluation {
    fn score(&self) -> Score {
        self.best_score
    }

    fn is_complete(&self) -> bool {
        self.complete
    }
}

/// Running maximum over candidates. Strictly better resets the list; an
/// equal score appends, so ties keep their sweep order.
struct Best {
    score: Score,
    moves: Vec<Action>,
}

impl Best {
    fn new() -> Self {
        Self {
            score: Score::MIN,
            moves: Vec::new(),
        }
    }

    fn offer(&mut self, score: Score, action: Action) {
        if score > self.score {
            self.score = score;
            self.moves.clear();
            self.moves.push(action);
        } else if score == self.score {
            self.moves.push(action);
        }
    }
}

/// Opponent distance minus own distance; higher is better for the acting
/// player. Two unreachable goals cancel out to zero.
fn score_differential(opponent: Distance, own: Distance) -> Score {
    opponent as Score - own as Score
}

impl GameState {
    /// Scores every candidate move for `player` and returns the best,
    /// with ties preserved. Steps are scored against the opponent's
    /// cached distance; wall trials recompute both distances on a masked
    /// view of the canonical graph. The state is never mutated.
    pub fn evaluate(&self, player: Player) -> Evaluation {
        self.evaluate_until(player, &AtomicBool::new(false))
    }

    /// `evaluate`, checking `stop` between trials. When stopped early the
    /// evaluation reports the best of what it saw and `complete` is
    /// false; stopping before any trial leaves an empty move list.
    pub fn evaluate_until(&self, player: Player, stop: &AtomicBool) -> Evaluation {
        let view = self.graph().view();
        let opponent_distance = self.goal_distance(player.opponent());

        let mut best = Best::new();
        let mut wall_trials = 0;
        let mut skipped_trials = 0;
        let mut complete = true;

        for step in self.step_candidates(player) {
            if stop.load(Ordering::Relaxed) {
                complete = false;
                break;
            }

            let own = view.goal_distance(step.into(), player);
            best.offer(
                score_differential(opponent_distance, own),
                Action::MovePawn(step),
            );
        }

        if complete {
            for wall in self.wall_catalog() {
                if stop.load(Ordering::Relaxed) {
                    complete = false;
                    break;
                }

                match self.wall_trial(wall, player) {
                    Ok(score) => {
                        wall_trials += 1;
                        best.offer(score, Action::PlaceWall(*wall));
                    }
                    Err(error) => {
                        skipped_trials += 1;
                        warn!("skipping wall trial {wall}: {error}");
                    }
                }
            }
        }

        debug!(
            "{player} evaluation: best {} over {} wall trials, {} skipped, complete: {}",
            best.score, wall_trials, skipped_trials, complete
        );

        Evaluation {
            best_score: best.score,
            best_moves: best.moves,
            wall_trials,
            skipped_trials,
            complete,
        }
    }

    /// `evaluate` with the wall catalog swept in parallel. Trial results
    /// are folded back in catalog order, so the outcome is identical to
    /// the sequential sweep.
    pub fn evaluate_par(&self, player: Player) -> Evaluation {
        let view = self.graph().view();
        let opponent_distance = self.goal_distance(player.opponent());

        let mut best = Best::new();

        for step in self.step_candidates(player) {
            let own = view.goal_distance(step.into(), player);
            best.offer(
                score_differential(opponent_distance, own),
                Action::MovePawn(step),
            );
        }

        let outcomes: Vec<Result<Score>> = self
            .wall_catalog()
            .par_iter()
            .map(|wall| self.wall_trial(wall, player))
            .collect();

        let mut wall_trials = 0;
        let mut skipped_trials = 0;

        for (wall, outcome) in self.wall_catalog().iter().zip(outcomes) {
            match outcome {
                Ok(score) => {
                    wall_trials += 1;
                    best.offer(score, Action::PlaceWall(*wall));
                }
                Err(error) => {
                    skipped_trials += 1;
                    warn!("skipping wall trial {wall}: {error}");
                }
            }
        }

        debug!(
            "{player} parallel evaluation: best {} over {} wall trials, {} skipped",
            best.score, wall_trials, skipped_trials
        );

        Evaluation {
            best_score: best.score,
            best_moves: best.moves,
            wall_trials,
            skipped_trials,
            complete: true,
        }
    }

    /// Cells the pawn can step to, in adjacency order. Sentinels are not
    /// destinations.
    fn step_candidates(&self, player: Player) -> impl Iterator<Item = Coordinate> + '_ {
        self.graph()
            .neighbors(self.player(player).location().into())
            .filter_map(|(node, _)| node.as_cell())
    }

    fn wall_trial(&self, wall: &Wall, player: Player) -> Result<Score> {
        let masked = self.graph().wall_view(wall)?;

        let own = masked.goal_distance(self.player(player).location().into(), player);
        let opponent = masked.goal_distance(
            self.player(player.opponent()).location().into(),
            player.opponent(),
        );

        Ok(score_differential(opponent, own))
    }
}
