use log::{error, info, LevelFilter};
use orbitsim::config::SimulationConfig;
use orbitsim::constants::DEFAULT_CONFIG_PATH;
use orbitsim::sim::ScenarioRunner;
use std::env;
use std::error::Error;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn Error>> {
    pretty_env_logger::formatted_builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let config_path = env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    info!("Loading configuration from {}", config_path.display());

    let config = SimulationConfig::from_path(&config_path)?;
    info!(
        "{} scenario(s), dt={}, T={}, output in {}",
        config.scenario_count,
        config.constants.dt,
        config.constants.duration,
        config.output.directory.display()
    );

    let report = ScenarioRunner::new(&config).run()?;
    info!(
        "Finished: {} completed, {} failed",
        report.completed.len(),
        report.failed.len()
    );

    if !report.is_success() {
        for (index, e) in &report.failed {
            error!("scenario{}: {}", index, e);
        }
        return Err(format!("{} scenario(s) failed", report.failed.len()).into());
    }
    Ok(())
}
