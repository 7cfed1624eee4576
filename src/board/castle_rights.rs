use super::color::Color;
use super::square::{self, Square};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    pub fn king_destination(self, color: Color) -> Square {
        Square::from_rank_file(color.home_rank(), self.king_file())
    }

    pub fn rook_origin(self, color: Color) -> Square {
        let file = match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        };
        Square::from_rank_file(color.home_rank(), file)
    }

    pub fn rook_destination(self, color: Color) -> Square {
        let file = match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        };
        Square::from_rank_file(color.home_rank(), file)
    }

    /// Squares between king and rook that must be empty.
    pub fn empty_squares(self, color: Color) -> &'static [Square] {
        match (self, color) {
            (CastleSide::Kingside, Color::White) => &[square::F1, square::G1],
            (CastleSide::Queenside, Color::White) => &[square::B1, square::C1, square::D1],
            (CastleSide::Kingside, Color::Black) => &[square::F8, square::G8],
            (CastleSide::Queenside, Color::Black) => &[square::B8, square::C8, square::D8],
        }
    }

    /// The wing a king move castles to, judged by geometry alone: the king
    /// leaves its e-file home square for the c- or g-file of the same rank.
    pub fn for_king_move(from: Square, to: Square, color: Color) -> Option<Self> {
        if from != king_home(color) || to.rank() != color.home_rank() {
            return None;
        }
        match to.file() {
            6 => Some(CastleSide::Kingside),
            2 => Some(CastleSide::Queenside),
            _ => None,
        }
    }

    fn king_file(self) -> u8 {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 2,
        }
    }
}

pub fn king_home(color: Color) -> Square {
    Square::from_rank_file(color.home_rank(), 4)
}

/// Castling flags. Each color has an overall flag, cleared for good once its
/// king moves, plus one flag per wing, cleared when that wing's rook leaves
/// its corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights(u8);

impl CastleRights {
    pub const fn white() -> Self {
        Self(0b00_0001)
    }

    pub const fn white_kingside() -> Self {
        Self(0b00_0010)
    }

    pub const fn white_queenside() -> Self {
        Self(0b00_0100)
    }

    pub const fn black() -> Self {
        Self(0b00_1000)
    }

    pub const fn black_kingside() -> Self {
        Self(0b01_0000)
    }

    pub const fn black_queenside() -> Self {
        Self(0b10_0000)
    }

    pub const fn all() -> Self {
        Self(0b11_1111)
    }

    pub const fn none() -> Self {
        Self(0)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, other: CastleRights) -> bool {
        (self.0 & other.0) == other.0
    }

    pub const fn without(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 & !other.0)
    }

    pub fn overall(color: Color) -> Self {
        match color {
            Color::White => Self::white(),
            Color::Black => Self::black(),
        }
    }

    pub fn wing(color: Color, side: CastleSide) -> Self {
        match (color, side) {
            (Color::White, CastleSide::Kingside) => Self::white_kingside(),
            (Color::White, CastleSide::Queenside) => Self::white_queenside(),
            (Color::Black, CastleSide::Kingside) => Self::black_kingside(),
            (Color::Black, CastleSide::Queenside) => Self::black_queenside(),
        }
    }

    /// Every flag belonging to `color`.
    pub fn of(color: Color) -> Self {
        Self::overall(color)
            | Self::wing(color, CastleSide::Kingside)
            | Self::wing(color, CastleSide::Queenside)
    }

    pub fn allows(self, color: Color, side: CastleSide) -> bool {
        self.contains(Self::overall(color) | Self::wing(color, side))
    }
}

impl Default for CastleRights {
    fn default() -> Self {
        Self::all()
    }
}

impl std::ops::BitOr for CastleRights {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}
