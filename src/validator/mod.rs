//! Move legality: per-piece movement rules, king safety, check and
//! checkmate detection. Every query that needs a hypothetical position goes
//! through `Board::simulate`, so the board is unchanged when it returns.

mod check;
pub mod pieces;


use std::fmt;

use crate::board::color::Color;
use crate::board::piece::Piece;
use crate::board::square::Square;
use crate::board::Board;

pub use check::{checkmate_save, in_check, is_checkmate, is_checkmate_after, king_in_check};

/// The result of validating a move attempt.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveVerdict {
    Legal,
    /// The piece cannot reach the destination, or the source square does
    /// not hold one of the mover's pieces.
    IllegalShape,
    /// The move is shaped correctly but leaves the mover's king attacked.
    LeavesKingInCheck,
}

impl MoveVerdict {
    pub fn is_legal(self) -> bool {
        self == MoveVerdict::Legal
    }
}

impl fmt::Display for MoveVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            MoveVerdict::Legal => "legal move",
            MoveVerdict::IllegalShape => "illegal move",
            MoveVerdict::LeavesKingInCheck => "move would leave your king in check",
        };
        write!(f, "{}", msg)
    }
}

/// Ownership plus the movement rule of `piece`. For a king this is the full
/// `king_move` check, self-check guard included.
pub fn is_legal_shape(
    board: &mut Board,
    from: Square,
    to: Square,
    piece: Piece,
    color: Color,
) -> bool {
    if board.get(from) != Some((piece, color)) {
        return false;
    }

    match piece {
        Piece::King => king_move(board, from, to, color),
        _ => pieces::piece_move(board, from, to, piece, color),
    }
}

/// Simulates `piece` arriving on `to` with `from` emptied and reports
/// whether `color`'s king is safe in that position.
pub fn temp_move_valid(
    board: &mut Board,
    from: Square,
    to: Square,
    piece: Piece,
    color: Color,
) -> bool {
    let king = if piece == Piece::King {
        to
    } else {
        board.king_square(color)
    };

    board.simulate(&[(from, None), (to, Some((piece, color)))], |board| {
        !in_check(board, king, color)
    })
}

/// King legality: a castle whose destination is not attacked, or a step
/// onto a square that is not friendly and not attacked once the king has
/// left `from`.
pub fn king_move(board: &mut Board, from: Square, to: Square, color: Color) -> bool {
    king_verdict(board, from, to, color).is_legal()
}

fn king_verdict(board: &mut Board, from: Square, to: Square, color: Color) -> MoveVerdict {
    let shape_ok = pieces::castle_move(board, from, to, color).is_some()
        || pieces::king_step(board, from, to, color);
    if !shape_ok {
        return MoveVerdict::IllegalShape;
    }

    let attacked = board.simulate(&[(from, None)], |board| in_check(board, to, color));
    if attacked {
        MoveVerdict::LeavesKingInCheck
    } else {
        MoveVerdict::Legal
    }
}

/// Full validation of a move attempt by `color`.
pub fn validate_move(board: &mut Board, from: Square, to: Square, color: Color) -> MoveVerdict {
    let piece = match board.get(from) {
        Some((piece, c)) if c == color => piece,
        _ => return MoveVerdict::IllegalShape,
    };

    if piece == Piece::King {
        return king_verdict(board, from, to, color);
    }

    if !pieces::piece_move(board, from, to, piece, color) {
        MoveVerdict::IllegalShape
    } else if !temp_move_valid(board, from, to, piece, color) {
        MoveVerdict::LeavesKingInCheck
    } else {
        MoveVerdict::Legal
    }
}

pub fn is_legal(board: &mut Board, from: Square, to: Square, color: Color) -> bool {
    validate_move(board, from, to, color).is_legal()
}

/// Every legal destination of the piece on `from`, in ascending square
/// order.
pub fn legal_destinations(board: &mut Board, from: Square, color: Color) -> Vec<Square> {
    Square::all()
        .filter(|&to| is_legal(board, from, to, color))
        .collect()
}
