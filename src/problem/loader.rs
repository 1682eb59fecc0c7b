use super::instance::ProblemInstance;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

impl ProblemInstance {
    /// Read and validate a JSON instance file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read instance file: {}", path.display()))?;
        let instance = Self::from_json_str(&contents)
            .with_context(|| format!("Invalid instance in {}", path.display()))?;

        info!(
            "Instance loaded from {}: {} disks, {} servers, {} resources, {} time periods",
            path.display(),
            instance.num_disks(),
            instance.num_servers(),
            instance.num_resources(),
            instance.num_times()
        );
        Ok(instance)
    }
}
