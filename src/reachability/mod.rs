//! Per-square destination tables for stepping pieces and sliding rays,
//! generated from board geometry the first time they are used.

mod ray_table;
mod targets;

use once_cell::sync::Lazy;

use crate::board::square::Square;

pub use ray_table::{Direction, Ray, RayTable, BISHOP_DIRS, ROOK_DIRS};
pub use targets::StepTargets;

pub struct Reachability {
    knights: Vec<StepTargets>,
    kings: Vec<StepTargets>,
    ray_table: RayTable,
}

impl Default for Reachability {
    fn default() -> Self {
        Self {
            knights: targets::generate_knight_targets_table(),
            kings: targets::generate_king_targets_table(),
            ray_table: RayTable::new(),
        }
    }
}

static REACHABILITY: Lazy<Reachability> = Lazy::new(Reachability::default);

impl Reachability {
    pub fn get() -> &'static Reachability {
        &REACHABILITY
    }

    pub fn knight_targets(&self, square: Square) -> &[Square] {
        &self.knights[square.index()]
    }

    pub fn king_targets(&self, square: Square) -> &[Square] {
        &self.kings[square.index()]
    }

    /// Non-empty rook rays from `square`: west, east, south, north.
    pub fn rook_rays(&self, square: Square) -> impl Iterator<Item = &[Square]> + '_ {
        self.rays(square, ROOK_DIRS)
    }

    /// Non-empty bishop rays from `square`: south-west, south-east,
    /// north-west, north-east.
    pub fn bishop_rays(&self, square: Square) -> impl Iterator<Item = &[Square]> + '_ {
        self.rays(square, BISHOP_DIRS)
    }

    fn rays(&self, square: Square, dirs: [Direction; 4]) -> impl Iterator<Item = &[Square]> + '_ {
        dirs.into_iter()
            .map(move |dir| self.ray_table.get(square, dir))
            .filter(|ray| !ray.is_empty())
    }
}

pub fn knight_targets(square: Square) -> &'static [Square] {
    Reachability::get().knight_targets(square)
}

pub fn king_targets(square: Square) -> &'static [Square] {
    Reachability::get().king_targets(square)
}

pub fn rook_rays(square: Square) -> impl Iterator<Item = &'static [Square]> {
    Reachability::get().rook_rays(square)
}

pub fn bishop_rays(square: Square) -> impl Iterator<Item = &'static [Square]> {
    Reachability::get().bishop_rays(square)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::square::*;

    #[test]
    fn test_rook_rays_from_d4() {
        let rays: Vec<&[Square]> = rook_rays(D4).collect();
        assert_eq!(rays.len(), 4);
        assert_eq!(rays[0], &[C4, B4, A4]);
        assert_eq!(rays[1], &[E4, F4, G4, H4]);
        assert_eq!(rays[2], &[D3, D2, D1]);
        assert_eq!(rays[3], &[D5, D6, D7, D8]);
    }

    #[test]
    fn test_bishop_rays_from_d4() {
        let firsts: Vec<Square> = bishop_rays(D4).map(|ray| ray[0]).collect();
        assert_eq!(firsts, vec![C3, E3, C5, E5]);
    }

    #[test]
    fn test_empty_rays_are_omitted() {
        assert_eq!(rook_rays(A1).count(), 2);
        assert_eq!(bishop_rays(A1).count(), 1);
        assert_eq!(bishop_rays(H8).collect::<Vec<_>>()[0], &[G7, F6, E5, D4, C3, B2, A1]);
    }

    #[test]
    fn test_stepping_tables() {
        assert_eq!(knight_targets(B1), &[D2, C3, A3]);
        assert_eq!(king_targets(E8).len(), 5);
    }
}
