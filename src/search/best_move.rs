use log::{debug, trace};
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use crate::board::color::Color;
use crate::board::piece::Piece;
use crate::board::side::Side;
use crate::board::square::Square;
use crate::board::Board;
use crate::evaluate::{self, CHECKMATE_SCORE};
use crate::validator;

use super::SearchError;

/// Added to a pawn move that lands within three ranks of promotion.
const PAWN_ADVANCE_BONUS: f64 = 1.0;

/// A legal move together with its evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoredMove {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub score: f64,
    pub delivers_mate: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchOutcome {
    pub best: ScoredMove,
    /// Every legal move in the order it was found. Only filled in for an
    /// automated side.
    pub candidates: Vec<ScoredMove>,
}

/// Scores every legal move of `side` and keeps the best one. Sources are
/// scanned from h8 down to a1 and destinations upwards, except for white
/// pawns whose destinations are scanned downwards. A later move replaces
/// the current best only when it scores strictly higher.
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn best_move(board: &mut Board, side: Side) -> Result<SearchOutcome, SearchError> {
    let color = side.color;
    if validator::is_checkmate(board, color) {
        debug!("{} has no legal move, skipping search", color);
        return Err(SearchError::Checkmated { color });
    }

    let mut best: Option<ScoredMove> = None;
    let mut candidates = vec![];

    for from in Square::all().rev() {
        let piece = match board.get(from) {
            Some((piece, c)) if c == color => piece,
            _ => continue,
        };

        let mut destinations = validator::legal_destinations(board, from, color);
        if piece == Piece::Pawn && color == Color::White {
            destinations.reverse();
        }

        for to in destinations {
            let scored = score_candidate(board, from, to, piece, color);
            trace!("{} {}{} scores {:.2}", piece, from, to, scored.score);

            if side.is_automated() {
                candidates.push(scored);
            }
            if best.map_or(true, |current| scored.score > current.score) {
                best = Some(scored);
            }
        }
    }

    let best = best.ok_or(SearchError::Checkmated { color })?;
    debug!(
        "best move for {}: {} {}{} ({:.2}), {} candidates",
        side,
        best.piece,
        best.from,
        best.to,
        best.score,
        candidates.len()
    );

    Ok(SearchOutcome { best, candidates })
}

fn score_candidate(
    board: &mut Board,
    from: Square,
    to: Square,
    piece: Piece,
    color: Color,
) -> ScoredMove {
    let raw = evaluate::score_move(board, from, to, color);
    let mut score = raw;
    if piece == Piece::Pawn && near_promotion(to, color) {
        score += PAWN_ADVANCE_BONUS;
    }

    ScoredMove {
        from,
        to,
        piece,
        score,
        delivers_mate: raw >= CHECKMATE_SCORE,
    }
}

fn near_promotion(square: Square, color: Color) -> bool {
    match color {
        Color::White => square.rank() >= 5,
        Color::Black => square.rank() <= 2,
    }
}
