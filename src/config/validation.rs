use super::settings::AppConfig;
use anyhow::Result;

impl AppConfig {
    /// Validate configuration values are sane.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(!self.instance_path.is_empty(), "instance_path must not be empty");
        anyhow::ensure!(
            self.overhead_coefficient.is_finite() && self.overhead_coefficient >= 0.0,
            "overhead_coefficient must be a finite number >= 0"
        );
        anyhow::ensure!(self.max_iterations >= 1, "max_iterations must be >= 1");
        anyhow::ensure!(
            self.min_improvement.is_finite() && self.min_improvement >= 0.0,
            "min_improvement must be a finite number >= 0"
        );
        anyhow::ensure!(!self.neighborhoods.is_empty(), "at least one neighborhood is required");
        Ok(())
    }
}
