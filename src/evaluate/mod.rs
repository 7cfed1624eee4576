use crate::board::castle_rights::CastleSide;
use crate::board::color::Color;
use crate::board::piece::Piece;
use crate::board::square::Square;
use crate::board::Board;
use crate::validator::{in_check, is_checkmate, is_checkmate_after, king_in_check};

use self::piece_values::{capture_worth, occupant_worth};

pub mod piece_values;

/// Returned for a move that checkmates the opponent. No other term is added.
pub const CHECKMATE_SCORE: f64 = 100.0;

const CASTLE_BONUS: f64 = 1.5;
const EXCHANGE_SCALE: f64 = 1.5;
const LOSING_EXCHANGE_PENALTY: f64 = 10.0;
const CENTER_BONUS: f64 = 0.1;
const PROMOTION_RANK_PAWN_BONUS: f64 = 0.9;
const ATTACK_DISCOUNT: f64 = 0.1;
const KING_MOVE_PENALTY: f64 = 1.0;

/// Squares 16-47, ranks 3 through 6.
const CENTER_RANKS: std::ops::RangeInclusive<u8> = 2..=5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnding {
    Checkmate { loser: Color },
    Stalemate { stuck: Color },
}

pub fn player_is_in_check(board: &mut Board, player: Color) -> bool {
    king_in_check(board, player)
}

/// Returns the game ending if `player`, who is about to move, has no way
/// out: checkmate when their king is attacked, stalemate otherwise.
pub fn game_ending(board: &mut Board, player: Color) -> Option<GameEnding> {
    if !is_checkmate(board, player) {
        return None;
    }

    if player_is_in_check(board, player) {
        Some(GameEnding::Checkmate { loser: player })
    } else {
        Some(GameEnding::Stalemate { stuck: player })
    }
}

/// True if moving `from` to `to` leaves `color`'s opponent checkmated.
pub fn delivers_mate(board: &mut Board, from: Square, to: Square, color: Color) -> bool {
    let opponent = color.opposite();
    let gives_check = board.simulate_move(from, to, |board| player_is_in_check(board, opponent));
    gives_check && is_checkmate_after(board, from, to, opponent)
}

/// Scores the move of `color`'s piece from `from` to `to`. Higher is better
/// for `color`. Every term is computed against the position after the
/// move; the board is unchanged when this returns.
pub fn score_move(board: &mut Board, from: Square, to: Square, color: Color) -> f64 {
    let piece = match board.get(from) {
        Some((piece, _)) => piece,
        None => return 0.0,
    };

    if delivers_mate(board, from, to, color) {
        return CHECKMATE_SCORE;
    }

    let mut score = castle_worth(board, from, to, piece, color);
    score += move_viability(board, from, to, piece, color);
    score += board.simulate_move(from, to, |board| {
        board_worth(board, color) + possible_attacks(board, color)
            - vulnerable_pieces(board, color)
    });

    if piece == Piece::King {
        score -= KING_MOVE_PENALTY;
    }

    score
}

fn castle_worth(board: &mut Board, from: Square, to: Square, piece: Piece, color: Color) -> f64 {
    if piece != Piece::King || CastleSide::for_king_move(from, to, color).is_none() {
        return 0.0;
    }

    if board.simulate_move(from, to, |board| in_check(board, to, color)) {
        -CASTLE_BONUS
    } else {
        CASTLE_BONUS
    }
}

/// Rewards a capture, unless the mover can be taken back on `to` and is
/// worth at least as much as what it took.
fn move_viability(board: &mut Board, from: Square, to: Square, piece: Piece, color: Color) -> f64 {
    let target_worth = occupant_worth(board.get(to).map(|(target, _)| target));
    let exposed = board.simulate_move(from, to, |board| in_check(board, to, color));

    if exposed && capture_worth(piece) >= target_worth {
        -LOSING_EXCHANGE_PENALTY
    } else {
        target_worth / 10.0 * EXCHANGE_SCALE
    }
}

/// Material balance from `color`'s side, with a bonus for pieces on the
/// center ranks and for own pawns that have reached their final rank.
fn board_worth(board: &Board, color: Color) -> f64 {
    let mut worth = 0.0;

    for square in Square::all() {
        let (piece, owner) = match board.get(square) {
            Some(occupant) => occupant,
            None => continue,
        };

        let mut value = capture_worth(piece) / 10.0;
        if CENTER_RANKS.contains(&square.rank()) {
            value += CENTER_BONUS;
        }

        if owner == color {
            worth += value;
            if piece == Piece::Pawn && square.rank() == color.promotion_rank() {
                worth += PROMOTION_RANK_PAWN_BONUS;
            }
        } else {
            worth -= value;
        }
    }

    worth
}

/// Enemy pieces `color` could capture next.
fn possible_attacks(board: &mut Board, color: Color) -> f64 {
    let opponent = color.opposite();
    let mut total = 0.0;

    for square in Square::all() {
        if let Some((piece, owner)) = board.get(square) {
            if owner == opponent && in_check(board, square, opponent) {
                total += capture_worth(piece) / 10.0 - ATTACK_DISCOUNT;
            }
        }
    }

    total
}

/// Own pieces the opponent could capture next.
fn vulnerable_pieces(board: &mut Board, color: Color) -> f64 {
    let mut total = 0.0;

    for square in Square::all() {
        if let Some((piece, owner)) = board.get(square) {
            if owner == color && in_check(board, square, color) {
                total += capture_worth(piece) / 10.0;
            }
        }
    }

    total
}
