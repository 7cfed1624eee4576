use thiserror::Error;

use super::square::Square;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("Cannot put a piece on {square}, the square is already occupied")]
    SquareOccupiedBoardPutError { square: Square },
    #[error("Cannot apply move, the `from` square {square} is empty")]
    FromSquareIsEmptyMoveApplicationError { square: Square },
    #[error("Promotion square {square} did not contain a pawn")]
    PromotionNonPawnError { square: Square },
    #[error("Pawn on {square} is not on its final rank")]
    PawnNotPromotableError { square: Square },
    #[error("Invalid piece code {code} on square {square}")]
    InvalidPieceCodeError { code: i8, square: Square },
}
