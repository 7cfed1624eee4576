//! Movement rules for each piece type. These only answer whether the
//! destination is reachable by the piece's movement pattern; ownership of
//! the source square and king safety are checked by the caller.

use crate::board::castle_rights::CastleSide;
use crate::board::color::Color;
use crate::board::piece::Piece;
use crate::board::square::Square;
use crate::board::Board;
use crate::reachability;

/// Dispatches to the movement rule for `piece`. The king's rule here is a
/// plain step: castling and the self-check guard live in `king_move`.
pub fn piece_move(board: &Board, from: Square, to: Square, piece: Piece, color: Color) -> bool {
    match piece {
        Piece::Pawn => pawn_move(board, from, to, color),
        Piece::Rook => rook_move(board, from, to, color),
        Piece::Knight => knight_move(board, from, to, color),
        Piece::Bishop => bishop_move(board, from, to, color),
        Piece::Queen => queen_move(board, from, to, color),
        Piece::King => king_step(board, from, to, color),
    }
}

pub fn pawn_move(board: &Board, from: Square, to: Square, color: Color) -> bool {
    let forward = color.sign();

    if from.offset(forward, 0) == Some(to) {
        return board.is_empty(to);
    }

    if from.rank() == color.pawn_rank() && from.offset(2 * forward, 0) == Some(to) {
        return from
            .offset(forward, 0)
            .map_or(false, |step| board.is_empty(step) && board.is_empty(to));
    }

    let is_diagonal = [-1, 1]
        .iter()
        .any(|&file_delta| from.offset(forward, file_delta) == Some(to));
    is_diagonal && board.color_at(to) == Some(color.opposite())
}

pub fn knight_move(board: &Board, from: Square, to: Square, color: Color) -> bool {
    reachability::knight_targets(from).contains(&to) && board.color_at(to) != Some(color)
}

pub fn king_step(board: &Board, from: Square, to: Square, color: Color) -> bool {
    reachability::king_targets(from).contains(&to) && board.color_at(to) != Some(color)
}

pub fn rook_move(board: &Board, from: Square, to: Square, color: Color) -> bool {
    slide(board, to, color, reachability::rook_rays(from))
}

pub fn bishop_move(board: &Board, from: Square, to: Square, color: Color) -> bool {
    slide(board, to, color, reachability::bishop_rays(from))
}

pub fn queen_move(board: &Board, from: Square, to: Square, color: Color) -> bool {
    rook_move(board, from, to, color) || bishop_move(board, from, to, color)
}

/// Walks each ray outward until it meets `to` or an occupied square.
fn slide<'a>(
    board: &Board,
    to: Square,
    color: Color,
    rays: impl Iterator<Item = &'a [Square]>,
) -> bool {
    for ray in rays {
        for &square in ray {
            if square == to {
                return board.color_at(to) != Some(color);
            }
            if board.is_occupied(square) {
                break;
            }
        }
    }
    false
}

/// Recognises a castle: the king leaves its home square for the c- or
/// g-file, the flags still allow that wing, the wing's rook is in its
/// corner and every square between them is empty. Whether the destination
/// is attacked is left to the caller.
pub fn castle_move(board: &Board, from: Square, to: Square, color: Color) -> Option<CastleSide> {
    let side = CastleSide::for_king_move(from, to, color)?;

    if !board.castle_rights().allows(color, side) {
        return None;
    }
    if board.get(side.rook_origin(color)) != Some((Piece::Rook, color)) {
        return None;
    }
    if side
        .empty_squares(color)
        .iter()
        .any(|&square| board.is_occupied(square))
    {
        return None;
    }

    Some(side)
}
