//! Incremental evaluation core for disk-to-server placement local search.
//!
//! The [`Solution`] keeps a disk → server distribution together with its
//! capacity overrun and relocation overhead, and updates both per move instead
//! of recomputing them. [`neighborhood`] generates candidate moves and
//! [`search::descent`] is a minimal driver that ties the pieces together.

pub mod config;
pub mod matrix;
pub mod moves;
pub mod neighborhood;
pub mod problem;
pub mod search;
pub mod solution;

#[cfg(test)]
mod tests;

pub use moves::{AtomMove, Move};
pub use neighborhood::{Neighborhood, NeighborhoodKind, RelocateNeighborhood, SwapNeighborhood};
pub use problem::{Color, CostKind, InstanceError, Placement, ProblemInstance};
pub use solution::Solution;
