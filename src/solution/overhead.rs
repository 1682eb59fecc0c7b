use crate::matrix::ResourceMatrix;
use crate::moves::AtomMove;
use crate::problem::{CostKind, ProblemInstance};
use std::collections::BTreeSet;

/// Reversible record of relocation cost charged against each server.
///
/// `slack` starts at the per-server overhead thresholds and is consumed by
/// erase/insert costs; overhead accrues only for the part of a cost that
/// exceeds the remaining slack. `applied` holds the inverse of every charged
/// atom move that has not been undone yet.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct OverheadLedger {
    slack: ResourceMatrix,
    applied: BTreeSet<AtomMove>,
}

impl OverheadLedger {
    pub(crate) fn new(thresholds: &ResourceMatrix) -> Self {
        Self { slack: thresholds.clone(), applied: BTreeSet::new() }
    }

    pub(crate) fn slack(&self, server: usize, resource: usize) -> f64 {
        self.slack[(server, resource)]
    }

    pub(crate) const fn applied(&self) -> &BTreeSet<AtomMove> {
        &self.applied
    }

    /// Account for `atom` and return the updated overhead total.
    ///
    /// If `atom` undoes a previously charged move, its costs are released
    /// instead, so a move followed by its inverse nets to zero.
    pub(crate) fn charge(
        &mut self,
        instance: &ProblemInstance,
        atom: AtomMove,
        mut overheads: f64,
    ) -> f64 {
        let reversing = self.applied.contains(&atom);

        for resource in 0..instance.num_resources() {
            if reversing {
                // The recorded entry is the inverse, so the original insert
                // happened at our source and the original erase at our destination.
                let insert = instance.disk_cost(CostKind::Insert, atom.disk, atom.source, resource);
                let erase =
                    instance.disk_cost(CostKind::Erase, atom.disk, atom.destination, resource);

                let source = &mut self.slack[(atom.source, resource)];
                overheads = release(*source, insert, overheads);
                *source += insert;

                let destination = &mut self.slack[(atom.destination, resource)];
                overheads = release(*destination, erase, overheads);
                *destination += erase;
            } else {
                let erase = instance.disk_cost(CostKind::Erase, atom.disk, atom.source, resource);
                let insert =
                    instance.disk_cost(CostKind::Insert, atom.disk, atom.destination, resource);

                let source = &mut self.slack[(atom.source, resource)];
                overheads = consume(*source, erase, overheads);
                *source -= erase;

                let destination = &mut self.slack[(atom.destination, resource)];
                overheads = consume(*destination, insert, overheads);
                *destination -= insert;
            }
        }

        if reversing {
            self.applied.remove(&atom);
        } else {
            self.applied.insert(atom.inverse());
        }

        overheads
    }
}

/// Overhead after spending `cost` from a cell with `slack` left.
fn consume(slack: f64, cost: f64, overheads: f64) -> f64 {
    if slack <= 0.0 {
        overheads + cost
    } else if slack - cost < 0.0 {
        overheads + (cost - slack)
    } else {
        overheads
    }
}

/// Exact inverse of [`consume`]: overhead after giving `cost` back to a cell
/// with `slack` left.
fn release(slack: f64, cost: f64, overheads: f64) -> f64 {
    if slack < 0.0 && slack + cost >= 0.0 {
        overheads - slack.abs()
    } else if slack + cost < 0.0 {
        overheads - cost
    } else {
        overheads
    }
}
