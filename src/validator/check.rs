use crate::board::color::Color;
use crate::board::piece::Piece;
use crate::board::square::Square;
use crate::board::Board;
use crate::reachability;

use super::{king_move, pieces, temp_move_valid};

/// True if `square` is attacked by `color`'s opponent.
///
/// A stand-in king of `color` is placed on `square` for the duration of the
/// scan, so pawn captures apply and a piece already standing there never
/// blocks its own attacker. An enemy king attacks only the squares it can
/// step to.
pub fn in_check(board: &mut Board, square: Square, color: Color) -> bool {
    let attacker = color.opposite();

    board.simulate(&[(square, Some((Piece::King, color)))], |board| {
        let board = &*board;
        Square::all().any(|from| match board.get(from) {
            Some((piece, c)) if c == attacker && from != square => {
                pieces::piece_move(board, from, square, piece, attacker)
            }
            _ => false,
        })
    })
}

/// True if `color`'s king stands on an attacked square.
pub fn king_in_check(board: &mut Board, color: Color) -> bool {
    let king = board.king_square(color);
    in_check(board, king, color)
}

/// True if `color` has nowhere to go: no king step is safe and no other
/// piece has a move that keeps the king safe. This holds for stalemate as
/// well as checkmate; callers that care ask `king_in_check` too.
pub fn is_checkmate(board: &mut Board, color: Color) -> bool {
    let king = board.king_square(color);
    let king_can_step = reachability::king_targets(king)
        .iter()
        .any(|&to| king_move(board, king, to, color));

    !king_can_step && !checkmate_save(board, color)
}

/// Looks for any non-king piece of `color` with a legal move that leaves
/// the king safe. Stops at the first one found.
pub fn checkmate_save(board: &mut Board, color: Color) -> bool {
    for from in Square::all() {
        let piece = match board.get(from) {
            Some((piece, c)) if c == color && piece != Piece::King => piece,
            _ => continue,
        };

        for to in Square::all() {
            if pieces::piece_move(board, from, to, piece, color)
                && temp_move_valid(board, from, to, piece, color)
            {
                return true;
            }
        }
    }
    false
}

/// Checkmate test for `color` after the piece on `from` moves to `to`. The
/// board is unchanged afterwards.
pub fn is_checkmate_after(board: &mut Board, from: Square, to: Square, color: Color) -> bool {
    board.simulate_move(from, to, |board| is_checkmate(board, color))
}
