//! Relocation requests.
//!
//! A [`Move`] is an ordered list of [`AtomMove`]s applied one after another;
//! a single relocation is simply a one-element move.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Relocation of one disk from one server to another.
///
/// The `(source, destination, disk)` triple is the identity of the move,
/// which is what the overhead ledger keys on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AtomMove {
    pub source: usize,
    pub destination: usize,
    pub disk: usize,
}

impl AtomMove {
    pub const fn new(source: usize, destination: usize, disk: usize) -> Self {
        Self { source, destination, disk }
    }

    /// The move that puts the disk back where it came from.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self { source: self.destination, destination: self.source, disk: self.disk }
    }
}

impl fmt::Display for AtomMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.source, self.destination, self.disk)
    }
}

/// An ordered sequence of atomic relocations evaluated and committed as a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    atoms: Vec<AtomMove>,
}

impl Move {
    pub fn single(atom: AtomMove) -> Self {
        Self { atoms: vec![atom] }
    }

    /// Exchange the servers of `first_disk` (on `first_server`) and
    /// `second_disk` (on `second_server`).
    pub fn swap(
        first_disk: usize,
        first_server: usize,
        second_disk: usize,
        second_server: usize,
    ) -> Self {
        Self {
            atoms: vec![
                AtomMove::new(first_server, second_server, first_disk),
                AtomMove::new(second_server, first_server, second_disk),
            ],
        }
    }

    pub fn compound(atoms: Vec<AtomMove>) -> Self {
        Self { atoms }
    }

    pub fn atoms(&self) -> &[AtomMove] {
        &self.atoms
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// The move that undoes this one: inverse atoms in reverse order.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self { atoms: self.atoms.iter().rev().map(|a| a.inverse()).collect() }
    }
}

impl From<AtomMove> for Move {
    fn from(atom: AtomMove) -> Self {
        Self::single(atom)
    }
}
