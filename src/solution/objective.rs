use crate::matrix::CapacityMatrix;
use crate::moves::AtomMove;
use crate::problem::{Placement, ProblemInstance};

/// Build the capacity-violation matrix for `distribution` from scratch and
/// return it with its overrun (sum of positive cells).
pub(crate) fn fill_capacity(
    instance: &ProblemInstance,
    distribution: &[Placement],
) -> (CapacityMatrix, f64) {
    let times = instance.num_times();
    let resources = instance.num_resources();
    let mut capacity = CapacityMatrix::zeroed(instance.num_servers(), times, resources);

    for server in 0..instance.num_servers() {
        for time in 0..times {
            for resource in 0..resources {
                capacity[(server, time, resource)] = -instance.threshold_capacity(server, resource);
            }
        }
    }

    for (disk, placement) in distribution.iter().enumerate() {
        for time in 0..times {
            for resource in 0..resources {
                capacity[(placement.server, time, resource)] +=
                    instance.demand(disk, resource, time);
            }
        }
    }

    let overrun = capacity.positive_sum();
    (capacity, overrun)
}

/// Move one disk's demand from `atom.source` to `atom.destination` in
/// `capacity` and return the updated overrun.
///
/// Only the change of each cell's positive part is applied to `overrun`, so
/// the cost is proportional to the touched cells, not the whole matrix.
pub(crate) fn shift_demand(
    instance: &ProblemInstance,
    capacity: &mut CapacityMatrix,
    mut overrun: f64,
    atom: AtomMove,
) -> f64 {
    for time in 0..instance.num_times() {
        for resource in 0..instance.num_resources() {
            let demand = instance.demand(atom.disk, resource, time);

            let destination = &mut capacity[(atom.destination, time, resource)];
            if *destination <= 0.0 {
                let with_disk = *destination + demand;
                if with_disk > 0.0 {
                    overrun += with_disk;
                }
            } else {
                overrun += demand;
            }
            *destination += demand;

            let source = &mut capacity[(atom.source, time, resource)];
            if *source > 0.0 {
                let without_disk = *source - demand;
                if without_disk <= 0.0 {
                    overrun -= *source;
                } else {
                    overrun -= demand;
                }
            }
            *source -= demand;
        }
    }
    overrun
}
