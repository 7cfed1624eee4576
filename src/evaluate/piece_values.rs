use crate::board::piece::Piece;

/// Material worth used by the exchange and sweep terms.
pub fn capture_worth(piece: Piece) -> f64 {
    match piece {
        Piece::Pawn => 1.0,
        Piece::Knight => 3.0,
        Piece::Bishop => 3.0,
        Piece::Rook => 5.0,
        Piece::Queen => 9.0,
        Piece::King => 10.0,
    }
}

/// Worth of whatever stands on a square; an empty square is worth nothing.
pub fn occupant_worth(occupant: Option<Piece>) -> f64 {
    occupant.map_or(0.0, capture_worth)
}
