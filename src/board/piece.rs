use std::fmt;
use std::str::FromStr;

use super::color::Color;

/// Piece types. The discriminant is the magnitude of the piece's signed code.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Piece {
    Pawn = 1,
    Rook = 2,
    Knight = 3,
    Bishop = 4,
    Queen = 5,
    King = 6,
}

pub const ALL_PIECES: [Piece; 6] = [
    Piece::Pawn,
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
];

impl Piece {
    /// Signed piece code: positive for white, negative for black.
    pub fn code(self, color: Color) -> i8 {
        self as i8 * color.sign()
    }

    /// Decodes a signed piece code. `Ok(None)` is an empty square.
    pub fn from_code(code: i8) -> Result<Option<(Piece, Color)>, i8> {
        let color = if code > 0 { Color::White } else { Color::Black };
        let piece = match code.unsigned_abs() {
            0 => return Ok(None),
            1 => Piece::Pawn,
            2 => Piece::Rook,
            3 => Piece::Knight,
            4 => Piece::Bishop,
            5 => Piece::Queen,
            6 => Piece::King,
            _ => return Err(code),
        };
        Ok(Some((piece, color)))
    }

    pub fn to_fen(self, color: Color) -> char {
        let c = match self {
            Piece::Pawn => 'p',
            Piece::Rook => 'r',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Queen => 'q',
            Piece::King => 'k',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn from_fen(c: char) -> Option<(Piece, Color)> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let piece = match c.to_ascii_lowercase() {
            'p' => Piece::Pawn,
            'r' => Piece::Rook,
            'n' => Piece::Knight,
            'b' => Piece::Bishop,
            'q' => Piece::Queen,
            'k' => Piece::King,
            _ => return None,
        };
        Some((piece, color))
    }

    pub fn to_unicode_piece_char(self, color: Color) -> char {
        match (self, color) {
            (Piece::Bishop, Color::Black) => '♝',
            (Piece::Bishop, Color::White) => '♗',
            (Piece::King, Color::Black) => '♚',
            (Piece::King, Color::White) => '♔',
            (Piece::Knight, Color::Black) => '♞',
            (Piece::Knight, Color::White) => '♘',
            (Piece::Pawn, Color::Black) => '♟',
            (Piece::Pawn, Color::White) => '♙',
            (Piece::Queen, Color::Black) => '♛',
            (Piece::Queen, Color::White) => '♕',
            (Piece::Rook, Color::Black) => '♜',
            (Piece::Rook, Color::White) => '♖',
        }
    }
}

/// The pieces a pawn may become on its final rank.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PromotionChoice {
    Rook,
    Knight,
    Bishop,
    Queen,
}

impl From<PromotionChoice> for Piece {
    fn from(choice: PromotionChoice) -> Self {
        match choice {
            PromotionChoice::Rook => Piece::Rook,
            PromotionChoice::Knight => Piece::Knight,
            PromotionChoice::Bishop => Piece::Bishop,
            PromotionChoice::Queen => Piece::Queen,
        }
    }
}

impl FromStr for PromotionChoice {
    type Err = &'static str;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "r" | "rook" => Ok(PromotionChoice::Rook),
            "n" | "knight" => Ok(PromotionChoice::Knight),
            "b" | "bishop" => Ok(PromotionChoice::Bishop),
            "q" | "queen" => Ok(PromotionChoice::Queen),
            _ => Err("invalid promotion; options are: q, r, b, n"),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Piece::Pawn => "pawn",
            Piece::Rook => "rook",
            Piece::Knight => "knight",
            Piece::Bishop => "bishop",
            Piece::Queen => "queen",
            Piece::King => "king",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_every_piece() {
        for piece in ALL_PIECES {
            for color in [Color::White, Color::Black] {
                assert_eq!(Piece::from_code(piece.code(color)), Ok(Some((piece, color))));
            }
        }
        assert_eq!(Piece::from_code(0), Ok(None));
        assert_eq!(Piece::from_code(7), Err(7));
        assert_eq!(Piece::from_code(-9), Err(-9));
    }

    #[test]
    fn test_code_signs() {
        assert_eq!(Piece::King.code(Color::White), 6);
        assert_eq!(Piece::Pawn.code(Color::Black), -1);
    }

    #[test]
    fn test_fen_chars() {
        assert_eq!(Piece::from_fen('N'), Some((Piece::Knight, Color::White)));
        assert_eq!(Piece::from_fen('q'), Some((Piece::Queen, Color::Black)));
        assert_eq!(Piece::from_fen('x'), None);
        assert_eq!(Piece::Rook.to_fen(Color::White), 'R');
    }

    #[test]
    fn test_parse_promotion_choice() {
        assert_eq!("q".parse(), Ok(PromotionChoice::Queen));
        assert_eq!("Knight".parse(), Ok(PromotionChoice::Knight));
        assert!("k".parse::<PromotionChoice>().is_err());
        assert_eq!(Piece::from(PromotionChoice::Bishop), Piece::Bishop);
    }
}
