//! Solution state with incremental move evaluation.
//!
//! A [`Solution`] owns the current disk → server distribution together with
//! everything derived from it: the capacity-violation matrix, the overrun
//! objective, the overhead ledger and the move history. Moves are checked with
//! [`Solution::is_move_correct`], priced with [`Solution::try_on_move`] and
//! committed with [`Solution::apply_move`]. Nothing is ever recomputed from
//! scratch after construction; every commit applies per-atom deltas.
//!
//! Server colors are painted once from the initial distribution and are not
//! repainted after commits, so validation keeps judging destinations by the
//! disks they started with.

mod objective;
mod overhead;
mod report;
mod validation;

use crate::matrix::CapacityMatrix;
use crate::moves::{AtomMove, Move};
use crate::problem::{Color, Placement, ProblemInstance};
use objective::{fill_capacity, shift_demand};
use overhead::OverheadLedger;
use tracing::trace;

#[derive(Debug, Clone)]
pub struct Solution<'a> {
    instance: &'a ProblemInstance,
    distribution: Vec<Placement>,
    capacity: CapacityMatrix,
    ledger: OverheadLedger,
    /// Sum of positive cells of `capacity`.
    overrun: f64,
    overheads: f64,
    overheads_coefficient: f64,
    server_colors: Vec<Color>,
    history: Vec<AtomMove>,
}

impl<'a> Solution<'a> {
    /// Build the solution for the instance's initial distribution.
    pub fn new(instance: &'a ProblemInstance, overheads_coefficient: f64) -> Self {
        let distribution = instance.initial_distribution().to_vec();
        let (capacity, overrun) = fill_capacity(instance, &distribution);
        let server_colors = paint_servers(instance.num_servers(), &distribution);

        Self {
            instance,
            distribution,
            capacity,
            ledger: OverheadLedger::new(instance.threshold_overheads()),
            overrun,
            overheads: 0.0,
            overheads_coefficient,
            server_colors,
            history: Vec::new(),
        }
    }

    /// Total cost `mv` would lead to, without touching `self`.
    ///
    /// # Panics
    ///
    /// If any atom breaks a precondition (see [`Solution::apply_move`]).
    pub fn try_on_move(&self, mv: &Move) -> f64 {
        self.assert_preconditions(mv);

        let mut capacity = self.capacity.clone();
        let mut ledger = self.ledger.clone();
        let mut overrun = self.overrun;
        let mut overheads = self.overheads;

        for &atom in mv.atoms() {
            overrun = shift_demand(self.instance, &mut capacity, overrun, atom);
            overheads = ledger.charge(self.instance, atom, overheads);
        }

        overrun + self.overheads_coefficient * overheads
    }

    /// Commit `mv`, atom by atom.
    ///
    /// # Panics
    ///
    /// Before any state changes, if an atom references an unknown disk or
    /// server, has equal source and destination, or does not start from the
    /// server its disk occupies at that point of the sequence.
    pub fn apply_move(&mut self, mv: &Move) {
        self.assert_preconditions(mv);

        for &atom in mv.atoms() {
            self.overrun = shift_demand(self.instance, &mut self.capacity, self.overrun, atom);
            self.overheads = self.ledger.charge(self.instance, atom, self.overheads);
            self.history.push(atom);
            self.distribution[atom.disk].server = atom.destination;

            trace!(
                "Applied move {}: overrun={:.3}, overheads={:.3}",
                atom,
                self.overrun,
                self.overheads
            );
        }
    }

    /// Overrun plus weighted overheads of the committed state.
    pub fn objective_value(&self) -> f64 {
        self.overrun + self.overheads_coefficient * self.overheads
    }

    /// Sum of positive capacity violations, without overheads.
    pub const fn overrun(&self) -> f64 {
        self.overrun
    }

    pub const fn overheads(&self) -> f64 {
        self.overheads
    }

    pub const fn overheads_coefficient(&self) -> f64 {
        self.overheads_coefficient
    }

    pub fn set_overheads_coefficient(&mut self, value: f64) {
        self.overheads_coefficient = value;
    }

    pub const fn instance(&self) -> &'a ProblemInstance {
        self.instance
    }

    pub fn distribution(&self) -> &[Placement] {
        &self.distribution
    }

    pub fn move_history(&self) -> &[AtomMove] {
        &self.history
    }

    pub fn server_for_disk(&self, disk: usize) -> usize {
        assert!(disk < self.distribution.len(), "disk {disk} out of range");
        self.distribution[disk].server
    }

    pub fn disk_color(&self, disk: usize) -> Color {
        assert!(disk < self.distribution.len(), "disk {disk} out of range");
        self.distribution[disk].color
    }

    /// Aggregate color painted from the initial distribution.
    pub fn server_color(&self, server: usize) -> Color {
        assert!(server < self.server_colors.len(), "server {server} out of range");
        self.server_colors[server]
    }

    /// Signed load minus threshold for one cell.
    pub fn capacity(&self, server: usize, time: usize, resource: usize) -> f64 {
        self.capacity[(server, time, resource)]
    }

    /// Remaining overhead slack of `server` for `resource`.
    pub fn overhead_slack(&self, server: usize, resource: usize) -> f64 {
        self.ledger.slack(server, resource)
    }

    /// Inverses of the charged atom moves that have not been undone.
    pub fn applied_moves(&self) -> impl Iterator<Item = &AtomMove> + '_ {
        self.ledger.applied().iter()
    }

    /// Capacity matrix and overrun rebuilt from the current distribution.
    pub fn recompute_overrun(&self) -> (CapacityMatrix, f64) {
        fill_capacity(self.instance, &self.distribution)
    }

    /// Whether the incrementally maintained matrix and overrun match a full
    /// recomputation within `tolerance`.
    pub fn is_consistent(&self, tolerance: f64) -> bool {
        let (capacity, overrun) = self.recompute_overrun();
        self.capacity.max_abs_diff(&capacity) <= tolerance
            && (self.overrun - overrun).abs() <= tolerance
    }
}

fn paint_servers(servers: usize, distribution: &[Placement]) -> Vec<Color> {
    let mut colors = vec![Color::None; servers];
    for placement in distribution {
        let color = &mut colors[placement.server];
        *color = (*color).max(placement.color);
    }
    colors
}
