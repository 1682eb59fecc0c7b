use super::settings::AppConfig;
use crate::neighborhood::NeighborhoodKind;
use tracing::warn;

impl AppConfig {
    /// Parse the simple KEY="VALUE" config format.
    pub fn parse_ini(&mut self, contents: &str) {
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim().trim_matches('"');

                match key {
                    "INSTANCE_PATH" => {
                        self.instance_path = value.to_string();
                    }
                    "REPORT_PATH" => {
                        self.report_path = value.to_string();
                    }
                    "OVERHEAD_COEFFICIENT" => {
                        if let Ok(v) = value.parse() {
                            self.overhead_coefficient = v;
                        }
                    }
                    "MAX_ITERATIONS" => {
                        if let Ok(v) = value.parse() {
                            self.max_iterations = v;
                        }
                    }
                    "MIN_IMPROVEMENT" => {
                        if let Ok(v) = value.parse() {
                            self.min_improvement = v;
                        }
                    }
                    "NEIGHBORHOODS" => {
                        self.neighborhoods = value
                            .split(',')
                            .map(str::trim)
                            .filter(|s| !s.is_empty())
                            .filter_map(|s| match NeighborhoodKind::try_from(s) {
                                Ok(kind) => Some(kind),
                                Err(e) => {
                                    warn!("Ignoring {}", e);
                                    None
                                }
                            })
                            .collect();
                    }
                    _ => {} // Ignore unknown keys
                }
            }
        }
    }
}
