use smallvec::SmallVec;

use crate::board::square::Square;

/// Destination squares of a stepping piece from one source square.
pub type StepTargets = SmallVec<[Square; 8]>;

/// Knight jumps as (rank delta, file delta). Lookups only test membership,
/// so the order of a square's targets carries no meaning.
const KNIGHT_STEPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
];

/// King steps as (rank delta, file delta).
const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub fn generate_knight_targets_table() -> Vec<StepTargets> {
    generate_step_table(&KNIGHT_STEPS)
}

pub fn generate_king_targets_table() -> Vec<StepTargets> {
    generate_step_table(&KING_STEPS)
}

fn generate_step_table(steps: &[(i8, i8)]) -> Vec<StepTargets> {
    Square::all()
        .map(|square| {
            steps
                .iter()
                .filter_map(|&(rank_delta, file_delta)| square.offset(rank_delta, file_delta))
                .collect()
        })
        .collect()
}
