//! Candidate move generation.
//!
//! A neighborhood enumerates structurally valid moves from the current
//! distribution and keeps only those [`Solution::is_move_correct`] accepts.
//! Enumeration order is fixed for a given distribution.

mod relocate;
mod swap;

pub use relocate::RelocateNeighborhood;
pub use swap::SwapNeighborhood;

use crate::moves::Move;
use crate::solution::Solution;
use serde::{Deserialize, Serialize};
use std::fmt;

pub trait Neighborhood: Send + Sync {
    fn name(&self) -> &'static str;

    /// All accepted candidate moves reachable from `solution` in one step.
    fn moves(&self, solution: &Solution<'_>) -> Vec<Move>;
}

/// Neighborhoods selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeighborhoodKind {
    Swap,
    Relocate,
}

impl NeighborhoodKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Swap => "swap",
            Self::Relocate => "relocate",
        }
    }

    pub fn build(self) -> Box<dyn Neighborhood> {
        match self {
            Self::Swap => Box::new(SwapNeighborhood),
            Self::Relocate => Box::new(RelocateNeighborhood),
        }
    }
}

impl fmt::Display for NeighborhoodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for NeighborhoodKind {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "swap" => Ok(Self::Swap),
            "relocate" => Ok(Self::Relocate),
            _ => Err(format!("invalid neighborhood: {s}")),
        }
    }
}
