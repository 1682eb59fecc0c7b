/// Default location of the configuration file.
pub(super) const DEFAULT_CONFIG_PATH: &str = "disk-placement.cfg";

/// Default location of the JSON problem instance.
pub(super) const DEFAULT_INSTANCE_PATH: &str = "instance.json";

/// Weight of relocation overhead in the total cost.
pub(super) const DEFAULT_OVERHEAD_COEFFICIENT: f64 = 1.0;

/// Upper bound on descent iterations (one committed move each).
pub(super) const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Smallest cost decrease that still counts as an improvement.
pub(super) const DEFAULT_MIN_IMPROVEMENT: f64 = 1e-9;
