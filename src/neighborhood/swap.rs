use super::Neighborhood;
use crate::moves::Move;
use crate::solution::Solution;

/// Pairwise exchanges of two disks living on different servers.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwapNeighborhood;

impl Neighborhood for SwapNeighborhood {
    fn name(&self) -> &'static str {
        "swap"
    }

    fn moves(&self, solution: &Solution<'_>) -> Vec<Move> {
        let distribution = solution.distribution();
        let mut result = Vec::new();

        for (i, first) in distribution.iter().enumerate() {
            for (j, second) in distribution.iter().enumerate().skip(i) {
                if first.server == second.server {
                    continue;
                }

                let mv = Move::swap(i, first.server, j, second.server);
                if solution.is_move_correct(&mv) {
                    result.push(mv);
                }
            }
        }

        result
    }
}
