use smallvec::SmallVec;

use crate::board::square::Square;

/// The squares of one ray, ordered outward from its source.
pub type Ray = SmallVec<[Square; 7]>;

#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash)]
pub enum Direction {
    West,
    East,
    South,
    North,
    SouthWest,
    SouthEast,
    NorthWest,
    NorthEast,
}

pub const ROOK_DIRS: [Direction; 4] = [
    Direction::West,
    Direction::East,
    Direction::South,
    Direction::North,
];

pub const BISHOP_DIRS: [Direction; 4] = [
    Direction::SouthWest,
    Direction::SouthEast,
    Direction::NorthWest,
    Direction::NorthEast,
];

impl Direction {
    pub fn all() -> [Direction; 8] {
        [
            Direction::West,
            Direction::East,
            Direction::South,
            Direction::North,
            Direction::SouthWest,
            Direction::SouthEast,
            Direction::NorthWest,
            Direction::NorthEast,
        ]
    }

    /// (rank delta, file delta) of a single step.
    pub fn step(self) -> (i8, i8) {
        match self {
            Direction::West => (0, -1),
            Direction::East => (0, 1),
            Direction::South => (-1, 0),
            Direction::North => (1, 0),
            Direction::SouthWest => (-1, -1),
            Direction::SouthEast => (-1, 1),
            Direction::NorthWest => (1, -1),
            Direction::NorthEast => (1, 1),
        }
    }
}

pub struct RayTable {
    rays: Vec<Ray>, // One entry for each square and direction combination
}

impl Default for RayTable {
    fn default() -> Self {
        let mut table = RayTable {
            rays: Vec::with_capacity(64 * 8),
        };
        table.populate();
        table
    }
}

impl RayTable {
    pub fn new() -> Self {
        Default::default()
    }

    fn populate(&mut self) {
        for square in Square::all() {
            for dir in Direction::all() {
                self.rays.push(generate_ray(square, dir));
            }
        }
    }

    pub fn get(&self, square: Square, dir: Direction) -> &[Square] {
        &self.rays[Self::index(square, dir)]
    }

    fn index(square: Square, dir: Direction) -> usize {
        square.index() * 8 + dir as usize
    }
}

fn generate_ray(square: Square, dir: Direction) -> Ray {
    let (rank_delta, file_delta) = dir.step();
    let mut ray = Ray::new();
    let mut pos = square;

    while let Some(next) = pos.offset(rank_delta, file_delta) {
        ray.push(next);
        pos = next;
    }

    ray
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::square::*;

    #[test]
    fn test_generate_ray() {
        let ray = generate_ray(A1, Direction::North);
        assert_eq!(ray.as_slice(), &[A2, A3, A4, A5, A6, A7, A8]);

        let ray = generate_ray(A1, Direction::NorthEast);
        assert_eq!(ray.as_slice(), &[B2, C3, D4, E5, F6, G7, H8]);

        assert!(generate_ray(A1, Direction::NorthWest).is_empty());
        assert!(generate_ray(A1, Direction::SouthEast).is_empty());
        assert!(generate_ray(A1, Direction::SouthWest).is_empty());

        let ray = generate_ray(C4, Direction::South);
        assert_eq!(ray.as_slice(), &[C3, C2, C1]);

        let ray = generate_ray(C4, Direction::West);
        assert_eq!(ray.as_slice(), &[B4, A4]);
    }

    #[test]
    fn test_construct_ray_table() {
        let table = RayTable::new();
        assert_eq!(table.get(D4, Direction::West), &[C4, B4, A4]);
        assert_eq!(table.get(D4, Direction::East), &[E4, F4, G4, H4]);
        assert_eq!(table.get(D4, Direction::South), &[D3, D2, D1]);
        assert_eq!(table.get(D4, Direction::North), &[D5, D6, D7, D8]);
        assert_eq!(table.get(D4, Direction::SouthWest)[0], C3);
        assert_eq!(table.get(D4, Direction::SouthEast)[0], E3);
        assert_eq!(table.get(D4, Direction::NorthWest)[0], C5);
        assert_eq!(table.get(D4, Direction::NorthEast)[0], E5);
        assert!(table.get(H8, Direction::North).is_empty());
    }
}
