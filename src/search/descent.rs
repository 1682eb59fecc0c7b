use crate::neighborhood::Neighborhood;
use crate::solution::Solution;
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info};

/// Tolerance for the consistency check run after the descent in debug builds.
const CONSISTENCY_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Copy)]
pub struct DescentOptions {
    pub max_iterations: usize,
    /// A candidate is committed only if it lowers the total cost by more than this.
    pub min_improvement: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// No candidate improves on the current cost.
    LocalOptimum,
    /// The neighborhoods produced no candidate at all.
    NoCandidates,
    IterationLimit,
}

#[derive(Debug, Clone, Serialize)]
pub struct DescentOutcome {
    pub iterations: usize,
    pub moves_applied: usize,
    pub initial_cost: f64,
    pub final_cost: f64,
    pub stop_reason: StopReason,
}

/// Steepest descent: each iteration commits the cheapest candidate over all
/// neighborhoods while it strictly improves the total cost. Ties keep the
/// first candidate in enumeration order.
pub fn run(
    solution: &mut Solution<'_>,
    neighborhoods: &[Box<dyn Neighborhood>],
    options: &DescentOptions,
) -> DescentOutcome {
    let start = Instant::now();
    let initial_cost = solution.objective_value();
    let mut iterations = 0;
    let mut moves_applied = 0;

    info!(
        "Descent starting: cost={:.3}, neighborhoods=[{}], max_iterations={}",
        initial_cost,
        neighborhoods.iter().map(|n| n.name()).collect::<Vec<_>>().join(","),
        options.max_iterations
    );

    let stop_reason = loop {
        if iterations >= options.max_iterations {
            break StopReason::IterationLimit;
        }
        iterations += 1;

        let current = solution.objective_value();
        let mut candidates = 0usize;
        let mut best = None;

        for neighborhood in neighborhoods {
            for mv in neighborhood.moves(solution) {
                candidates += 1;
                let cost = solution.try_on_move(&mv);
                if best.as_ref().is_none_or(|(best_cost, _)| cost < *best_cost) {
                    best = Some((cost, mv));
                }
            }
        }

        let Some((cost, mv)) = best else {
            break StopReason::NoCandidates;
        };
        if current - cost <= options.min_improvement {
            break StopReason::LocalOptimum;
        }

        solution.apply_move(&mv);
        moves_applied += 1;

        debug!(
            "Iteration {}: {} candidates, cost {:.3} -> {:.3}",
            iterations,
            candidates,
            current,
            solution.objective_value()
        );
    };

    debug_assert!(
        solution.is_consistent(CONSISTENCY_TOLERANCE),
        "incremental capacity accounting drifted from the distribution"
    );

    let final_cost = solution.objective_value();
    info!(
        "Descent finished ({:?}) after {} iterations in {:.2}s: {} moves, cost {:.3} -> {:.3}",
        stop_reason,
        iterations,
        start.elapsed().as_secs_f64(),
        moves_applied,
        initial_cost,
        final_cost
    );

    DescentOutcome { iterations, moves_applied, initial_cost, final_cost, stop_reason }
}
