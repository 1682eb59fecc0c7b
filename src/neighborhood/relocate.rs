use super::Neighborhood;
use crate::moves::{AtomMove, Move};
use crate::solution::Solution;

/// Single-disk moves to any other server.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelocateNeighborhood;

impl Neighborhood for RelocateNeighborhood {
    fn name(&self) -> &'static str {
        "relocate"
    }

    fn moves(&self, solution: &Solution<'_>) -> Vec<Move> {
        let servers = solution.instance().num_servers();

        solution
            .distribution()
            .iter()
            .enumerate()
            .flat_map(|(disk, placement)| {
                (0..servers)
                    .filter(move |&server| server != placement.server)
                    .map(move |server| Move::single(AtomMove::new(placement.server, server, disk)))
            })
            .filter(|mv| solution.is_move_correct(mv))
            .collect()
    }
}
