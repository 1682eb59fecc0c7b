use anyhow::{Context, Result};
use disk_placement::config::AppConfig;
use disk_placement::search::{descent, DescentOptions};
use disk_placement::{ProblemInstance, Solution};
use std::io::Write;
use tracing::info;

fn main() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "disk_placement=info".into());
    if std::env::var("DP_LOG_FORMAT").is_ok_and(|f| f == "json") {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    info!("disk-placement v{} starting up", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!(
        "Configuration loaded: instance={}, overhead_coefficient={}, neighborhoods={:?}",
        config.instance_path, config.overhead_coefficient, config.neighborhoods
    );

    let instance = ProblemInstance::load(&config.instance_path)?;
    let mut solution = Solution::new(&instance, config.overhead_coefficient);
    info!(
        "Initial solution: overrun={:.3}, total cost={:.3}",
        solution.overrun(),
        solution.objective_value()
    );

    let neighborhoods: Vec<_> = config.neighborhoods.iter().map(|kind| kind.build()).collect();
    let options = DescentOptions {
        max_iterations: config.max_iterations,
        min_improvement: config.min_improvement,
    };
    let outcome = descent::run(&mut solution, &neighborhoods, &options);
    info!(
        "Search outcome: {}",
        serde_json::to_string(&outcome).context("Failed to serialize search outcome")?
    );

    write_report(&config.report_path, &solution.to_string())?;
    Ok(())
}

fn write_report(path: &str, report: &str) -> Result<()> {
    if path.is_empty() {
        std::io::stdout()
            .lock()
            .write_all(report.as_bytes())
            .context("Failed to write report to stdout")?;
        return Ok(());
    }

    std::fs::write(path, report).with_context(|| format!("Failed to write report to {path}"))?;
    info!("Report written to {}", path);
    Ok(())
}
