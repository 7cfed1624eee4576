use log::{debug, trace};
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use crate::board::color::Color;
use crate::board::piece::{Piece, PromotionChoice};
use crate::board::side::Side;
use crate::board::square::Square;
use crate::board::Board;

use super::best_move::{best_move, ScoredMove};
use super::SearchError;

/// Why the rollout search picked its move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChoiceSource {
    /// The move checkmates on the spot.
    Mate,
    /// The candidate whose three-ply line ended best, scoring `score` on
    /// the final ply.
    Rollout { score: f64 },
    /// No line beat the immediate best move.
    Immediate,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RolloutDecision {
    pub chosen: ScoredMove,
    pub source: ChoiceSource,
}

/// A committed move, for highlighting on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayedMove {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub promoted: bool,
}

/// Picks the automated move for `color` without committing it. The board is
/// the same position when this returns.
///
/// Each root candidate is played on a copy of the board, the opponent
/// answers with its best reply, and `color` then searches again. The
/// candidate whose final search scores highest is chosen if that score
/// beats the immediate best move; otherwise the immediate best is kept.
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn choose_rollout_move(board: &mut Board, color: Color) -> Result<RolloutDecision, SearchError> {
    let root = *board;
    let outcome = best_move(board, Side::automated(color))?;

    if let Some(mate) = outcome.candidates.iter().find(|m| m.delivers_mate) {
        debug!("{} mates with {}{}", color, mate.from, mate.to);
        return Ok(RolloutDecision {
            chosen: *mate,
            source: ChoiceSource::Mate,
        });
    }

    let opponent = Side::human(color.opposite());
    let mut best_line: Option<(usize, f64)> = None;

    for (index, candidate) in outcome.candidates.iter().enumerate() {
        let mut child = root;
        apply_with_auto_queen(&mut child, candidate.from, candidate.to)?;

        let reply = match best_move(&mut child, opponent) {
            Ok(reply) => reply.best,
            Err(SearchError::Checkmated { .. }) => {
                trace!("{}{} leaves {} without a reply", candidate.from, candidate.to, opponent);
                continue;
            }
            Err(err) => return Err(err),
        };
        apply_with_auto_queen(&mut child, reply.from, reply.to)?;

        let follow_up = match best_move(&mut child, Side::automated(color)) {
            Ok(follow_up) => follow_up.best,
            Err(SearchError::Checkmated { .. }) => continue,
            Err(err) => return Err(err),
        };
        trace!(
            "{}{} / {}{} / {}{} scores {:.2}",
            candidate.from,
            candidate.to,
            reply.from,
            reply.to,
            follow_up.from,
            follow_up.to,
            follow_up.score
        );

        if best_line.map_or(true, |(_, score)| follow_up.score > score) {
            best_line = Some((index, follow_up.score));
        }
    }

    *board = root;

    let decision = match best_line {
        Some((index, score)) if score > outcome.best.score => RolloutDecision {
            chosen: outcome.candidates[index],
            source: ChoiceSource::Rollout { score },
        },
        _ => RolloutDecision {
            chosen: outcome.best,
            source: ChoiceSource::Immediate,
        },
    };
    debug!(
        "{} plays {}{} ({:?})",
        color, decision.chosen.from, decision.chosen.to, decision.source
    );

    Ok(decision)
}

/// Chooses and commits the automated move for `color`. The position the
/// search started from is restored first, castling flags and king squares
/// included, then the move is applied, a pawn reaching its final rank
/// becomes a queen and both king squares are rescanned.
pub fn play_rollout_move(board: &mut Board, color: Color) -> Result<PlayedMove, SearchError> {
    let root = *board;
    let decision = choose_rollout_move(board, color)?;

    *board = root;
    let played = apply_with_auto_queen(board, decision.chosen.from, decision.chosen.to)?;
    board.resync_kings();

    Ok(played)
}

fn apply_with_auto_queen(board: &mut Board, from: Square, to: Square) -> Result<PlayedMove, SearchError> {
    let effect = board.apply_move(from, to)?;

    let promoted = board.has_promotable_pawn(to);
    if promoted {
        board.promote(to, PromotionChoice::Queen)?;
    }

    Ok(PlayedMove {
        from,
        to,
        piece: effect.piece,
        captured: effect.captured,
        promoted,
    })
}
