pub mod castle_rights;
pub mod color;
pub mod error;
pub mod piece;
pub mod side;
pub mod square;

mod display;

use smallvec::SmallVec;

use castle_rights::{CastleRights, CastleSide};
use color::Color;
use error::BoardError;
use piece::{Piece, PromotionChoice};
use square::Square;

use crate::chess_position;

/// What a square holds.
pub type Occupant = Option<(Piece, Color)>;

/// Represents the state of a chess board: the 64 squares, the castling flags
/// and a cache of where each king stands. The king cache is not derived from
/// the squares; every write that moves a king keeps it current, and
/// `resync_kings` rebuilds it after bulk replacement.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Board {
    squares: [Occupant; 64],
    castle_rights: CastleRights,
    white_king: Square,
    black_king: Square,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            squares: [None; 64],
            castle_rights: CastleRights::all(),
            white_king: castle_rights::king_home(Color::White),
            black_king: castle_rights::king_home(Color::Black),
        }
    }
}

/// The observable result of committing a move with `Board::apply_move`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MoveEffect {
    pub piece: Piece,
    pub color: Color,
    pub captured: Option<Piece>,
    pub castle: Option<CastleSide>,
}

impl Board {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn starting_position() -> Self {
        chess_position! {
            rnbqkbnr
            pppppppp
            ........
            ........
            ........
            ........
            PPPPPPPP
            RNBQKBNR
        }
    }

    pub fn get(&self, square: Square) -> Occupant {
        self.squares[square.index()]
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        self.get(square).is_some()
    }

    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.get(square).map(|(_, color)| color)
    }

    pub fn put(&mut self, square: Square, piece: Piece, color: Color) -> Result<(), BoardError> {
        if self.is_occupied(square) {
            return Err(BoardError::SquareOccupiedBoardPutError { square });
        }

        self.squares[square.index()] = Some((piece, color));
        if piece == Piece::King {
            self.set_king_square(color, square);
        }
        Ok(())
    }

    pub fn remove(&mut self, square: Square) -> Occupant {
        self.squares[square.index()].take()
    }

    pub fn king_square(&self, color: Color) -> Square {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    pub fn set_king_square(&mut self, color: Color, square: Square) {
        match color {
            Color::White => self.white_king = square,
            Color::Black => self.black_king = square,
        }
    }

    /// Rebuilds the king cache by scanning the squares. A color without a
    /// king on the board keeps its previous cache entry.
    pub fn resync_kings(&mut self) {
        for square in Square::all() {
            if let Some((Piece::King, color)) = self.get(square) {
                self.set_king_square(color, square);
            }
        }
    }

    pub fn castle_rights(&self) -> CastleRights {
        self.castle_rights
    }

    pub fn lose_castle_rights(&mut self, lost: CastleRights) -> CastleRights {
        self.castle_rights = self.castle_rights.without(lost);
        self.castle_rights
    }

    /// Signed piece codes for every square, a1 first.
    pub fn codes(&self) -> [i8; 64] {
        let mut codes = [0; 64];
        for (code, occupant) in codes.iter_mut().zip(self.squares.iter()) {
            if let Some((piece, color)) = occupant {
                *code = piece.code(*color);
            }
        }
        codes
    }

    /// Replaces every square from signed piece codes and resyncs the king
    /// cache. Castling flags are left untouched.
    pub fn set_codes(&mut self, codes: &[i8; 64]) -> Result<(), BoardError> {
        let mut squares = [None; 64];
        for (square, &code) in Square::all().zip(codes.iter()) {
            squares[square.index()] = Piece::from_code(code)
                .map_err(|code| BoardError::InvalidPieceCodeError { code, square })?;
        }
        self.squares = squares;
        self.resync_kings();
        Ok(())
    }

    pub fn from_codes(codes: &[i8; 64]) -> Result<Self, BoardError> {
        let mut board = Board::new();
        board.set_codes(codes)?;
        Ok(board)
    }

    /// Commits a move. Moving a king clears its color's overall castling flag
    /// and, if the move is a castle the flags still allowed, brings the rook
    /// across. Moving a rook off its corner clears that wing's flag.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<MoveEffect, BoardError> {
        let (piece, color) = self
            .get(from)
            .ok_or(BoardError::FromSquareIsEmptyMoveApplicationError { square: from })?;
        let captured = self.get(to).map(|(captured, _)| captured);

        self.squares[from.index()] = None;
        self.squares[to.index()] = Some((piece, color));

        let mut castle = None;
        match piece {
            Piece::King => {
                self.set_king_square(color, to);
                if self.castle_rights.contains(CastleRights::overall(color)) {
                    castle = CastleSide::for_king_move(from, to, color);
                    if let Some(side) = castle {
                        let rook = self.remove(side.rook_origin(color));
                        self.squares[side.rook_destination(color).index()] = rook;
                    }
                    self.lose_castle_rights(CastleRights::overall(color));
                }
            }
            Piece::Rook => {
                for side in [CastleSide::Kingside, CastleSide::Queenside] {
                    if from == side.rook_origin(color) {
                        self.lose_castle_rights(CastleRights::wing(color, side));
                    }
                }
            }
            _ => {}
        }

        Ok(MoveEffect {
            piece,
            color,
            captured,
            castle,
        })
    }

    /// True if `square` holds a pawn standing on its final rank.
    pub fn has_promotable_pawn(&self, square: Square) -> bool {
        matches!(self.get(square), Some((Piece::Pawn, color)) if square.rank() == color.promotion_rank())
    }

    pub fn promote(&mut self, square: Square, choice: PromotionChoice) -> Result<Piece, BoardError> {
        let color = match self.get(square) {
            Some((Piece::Pawn, color)) => color,
            _ => return Err(BoardError::PromotionNonPawnError { square }),
        };
        if square.rank() != color.promotion_rank() {
            return Err(BoardError::PawnNotPromotableError { square });
        }

        let piece = Piece::from(choice);
        self.squares[square.index()] = Some((piece, color));
        Ok(piece)
    }

    /// Writes `changes` onto the squares, runs `query` against the altered
    /// board, then rolls every change back in reverse order. Castling flags
    /// and the king cache are not touched.
    pub fn simulate<R>(
        &mut self,
        changes: &[(Square, Occupant)],
        query: impl FnOnce(&mut Board) -> R,
    ) -> R {
        let mut undo: SmallVec<[(Square, Occupant); 4]> = SmallVec::new();
        for &(square, occupant) in changes {
            undo.push((square, self.get(square)));
            self.squares[square.index()] = occupant;
        }

        let result = query(self);

        for &(square, occupant) in undo.iter().rev() {
            self.squares[square.index()] = occupant;
        }
        result
    }

    /// Simulates the piece on `from` standing on `to`. A moving king carries
    /// the king cache with it for the duration of the query.
    pub fn simulate_move<R>(
        &mut self,
        from: Square,
        to: Square,
        query: impl FnOnce(&mut Board) -> R,
    ) -> R {
        let mover = self.get(from);
        match mover {
            Some((Piece::King, color)) => {
                let home = self.king_square(color);
                self.set_king_square(color, to);
                let result = self.simulate(&[(from, None), (to, mover)], query);
                self.set_king_square(color, home);
                result
            }
            _ => self.simulate(&[(from, None), (to, mover)], query),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use square::*;

    #[test]
    fn test_starting_position_layout() {
        let board = Board::starting_position();
        let codes = board.codes();
        assert_eq!(&codes[0..8], &[2, 3, 4, 5, 6, 4, 3, 2]);
        assert!(codes[8..16].iter().all(|&c| c == 1));
        assert!(codes[16..48].iter().all(|&c| c == 0));
        assert!(codes[48..56].iter().all(|&c| c == -1));
        assert_eq!(&codes[56..64], &[-2, -3, -4, -5, -6, -4, -3, -2]);
        assert_eq!(board.king_square(Color::White), E1);
        assert_eq!(board.king_square(Color::Black), E8);
        assert_eq!(board.castle_rights(), CastleRights::all());
    }

    #[test]
    fn test_put_on_occupied_square_fails() {
        let mut board = Board::starting_position();
        assert_eq!(
            board.put(E2, Piece::Queen, Color::White),
            Err(BoardError::SquareOccupiedBoardPutError { square: E2 })
        );
    }

    #[test]
    fn test_put_king_updates_cache() {
        let mut board = Board::new();
        board.put(C3, Piece::King, Color::Black).unwrap();
        assert_eq!(board.king_square(Color::Black), C3);
    }

    #[test]
    fn test_apply_move_keeps_one_mover_and_one_capture() {
        let mut board = chess_position! {
            ....k...
            ........
            ...p....
            ........
            ....N...
            ........
            ........
            ....K...
        };
        let before = board.codes().iter().filter(|&&c| c != 0).count();

        let effect = board.apply_move(E4, D6).unwrap();
        assert_eq!(effect.piece, Piece::Knight);
        assert_eq!(effect.captured, Some(Piece::Pawn));
        assert_eq!(board.get(D6), Some((Piece::Knight, Color::White)));
        assert!(board.is_empty(E4));

        let after = board.codes().iter().filter(|&&c| c != 0).count();
        assert_eq!(after, before - 1);
    }

    #[test]
    fn test_apply_move_from_empty_square_fails() {
        let mut board = Board::starting_position();
        assert_eq!(
            board.apply_move(E4, E5),
            Err(BoardError::FromSquareIsEmptyMoveApplicationError { square: E4 })
        );
    }

    #[test]
    fn test_apply_castle_moves_rook_and_clears_overall_flag() {
        let mut board = chess_position! {
            r...k..r
            ........
            ........
            ........
            ........
            ........
            ........
            R...K..R
        };

        let effect = board.apply_move(E1, G1).unwrap();
        assert_eq!(effect.castle, Some(CastleSide::Kingside));
        assert_eq!(board.get(F1), Some((Piece::Rook, Color::White)));
        assert!(board.is_empty(H1));
        assert_eq!(board.king_square(Color::White), G1);
        assert!(!board.castle_rights().contains(CastleRights::white()));
        assert!(board.castle_rights().contains(CastleRights::black()));

        let effect = board.apply_move(E8, C8).unwrap();
        assert_eq!(effect.castle, Some(CastleSide::Queenside));
        assert_eq!(board.get(D8), Some((Piece::Rook, Color::Black)));
        assert!(board.is_empty(A8));
    }

    #[test]
    fn test_plain_king_move_forfeits_castling() {
        let mut board = Board::starting_position();
        board.remove(E2);
        board.apply_move(E1, E2).unwrap();
        assert!(!board.castle_rights().allows(Color::White, CastleSide::Kingside));
        assert!(!board.castle_rights().allows(Color::White, CastleSide::Queenside));
        assert_eq!(board.king_square(Color::White), E2);
    }

    #[test]
    fn test_rook_move_clears_its_wing_only() {
        let mut board = Board::starting_position();
        board.remove(H2);
        board.apply_move(H1, H3).unwrap();
        assert!(!board.castle_rights().allows(Color::White, CastleSide::Kingside));
        assert!(board.castle_rights().allows(Color::White, CastleSide::Queenside));
    }

    #[test]
    fn test_simulate_rolls_back_every_change() {
        let mut board = Board::starting_position();
        let original = board;

        let occupied = board.simulate(&[(E2, None), (E4, Some((Piece::Pawn, Color::White)))], |b| {
            (b.is_empty(E2), b.get(E4))
        });
        assert_eq!(occupied, (true, Some((Piece::Pawn, Color::White))));
        assert_eq!(board, original);
    }

    #[test]
    fn test_simulate_move_carries_king_cache_and_restores_it() {
        let mut board = Board::starting_position();
        board.remove(F1);
        let original = board;

        let during = board.simulate_move(E1, F1, |b| b.king_square(Color::White));
        assert_eq!(during, F1);
        assert_eq!(board, original);
    }

    #[test]
    fn test_codes_round_trip_and_resync_kings() {
        let mut codes = [0i8; 64];
        codes[C2.index()] = 6;
        codes[F7.index()] = -6;
        codes[D4.index()] = -5;

        let board = Board::from_codes(&codes).unwrap();
        assert_eq!(board.king_square(Color::White), C2);
        assert_eq!(board.king_square(Color::Black), F7);
        assert_eq!(board.codes(), codes);
    }

    #[test]
    fn test_set_codes_rejects_bad_code() {
        let mut codes = [0i8; 64];
        codes[10] = 9;
        assert_eq!(
            Board::from_codes(&codes),
            Err(BoardError::InvalidPieceCodeError { code: 9, square: C2 })
        );
    }

    #[test]
    fn test_promote() {
        let mut board = chess_position! {
            ....P...
            ........
            ........
            ........
            ...P....
            ........
            ........
            ........
        };
        assert!(board.has_promotable_pawn(E8));
        assert!(!board.has_promotable_pawn(D4));
        assert_eq!(board.promote(E8, PromotionChoice::Knight), Ok(Piece::Knight));
        assert_eq!(board.get(E8), Some((Piece::Knight, Color::White)));
        assert_eq!(
            board.promote(D4, PromotionChoice::Queen),
            Err(BoardError::PawnNotPromotableError { square: D4 })
        );
        assert_eq!(
            board.promote(A1, PromotionChoice::Queen),
            Err(BoardError::PromotionNonPawnError { square: A1 })
        );
    }
}
