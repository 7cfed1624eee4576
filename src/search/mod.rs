//! Move selection for the automated side.
//!
//! `best_move` is a one-ply greedy search: every legal move of one side is
//! scored by the evaluator and the strictly best one is kept. The rollout
//! search re-ranks the automated side's candidates by playing three plies
//! greedily (own move, the opponent's best reply, own best follow-up).

mod best_move;
mod rollout;


use thiserror::Error;

use crate::board::color::Color;
use crate::board::error::BoardError;

pub use best_move::{best_move, ScoredMove, SearchOutcome};
pub use rollout::{choose_rollout_move, play_rollout_move, ChoiceSource, PlayedMove, RolloutDecision};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SearchError {
    #[error("{color} has no legal move")]
    Checkmated { color: Color },
    #[error(transparent)]
    Board(#[from] BoardError),
}
