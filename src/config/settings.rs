use super::defaults::{
    DEFAULT_CONFIG_PATH, DEFAULT_INSTANCE_PATH, DEFAULT_MAX_ITERATIONS, DEFAULT_MIN_IMPROVEMENT,
    DEFAULT_OVERHEAD_COEFFICIENT,
};
use crate::neighborhood::NeighborhoodKind;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub config_path: String,
    pub instance_path: String,
    /// Where the text report goes. Empty means stdout.
    pub report_path: String,
    /// Weight of overheads in the total cost.
    pub overhead_coefficient: f64,
    pub max_iterations: usize,
    pub min_improvement: f64,
    /// Neighborhoods the descent draws candidates from, in order.
    pub neighborhoods: Vec<NeighborhoodKind>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config_path: DEFAULT_CONFIG_PATH.to_string(),
            instance_path: DEFAULT_INSTANCE_PATH.to_string(),
            report_path: String::new(),
            overhead_coefficient: DEFAULT_OVERHEAD_COEFFICIENT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            min_improvement: DEFAULT_MIN_IMPROVEMENT,
            neighborhoods: vec![NeighborhoodKind::Swap],
        }
    }
}

impl AppConfig {
    /// Load configuration, merging defaults with config file values and env overrides.
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(path) = std::env::var("DP_CONFIG_PATH") {
            config.config_path = path;
        }

        let cfg_path = Path::new(&config.config_path);
        if cfg_path.exists() {
            let contents = fs::read_to_string(cfg_path)
                .with_context(|| format!("Failed to read config file: {}", config.config_path))?;
            config.parse_ini(&contents);
        }

        if let Ok(path) = std::env::var("DP_INSTANCE_PATH") {
            config.instance_path = path;
        }
        if let Ok(path) = std::env::var("DP_REPORT_PATH") {
            config.report_path = path;
        }
        if let Ok(value) = std::env::var("DP_OVERHEAD_COEFFICIENT") {
            config.overhead_coefficient =
                value.parse().context("DP_OVERHEAD_COEFFICIENT must be a number")?;
        }

        config.validate()?;
        Ok(config)
    }
}
