use super::simulator::Simulator;
use super::summary::TrajectorySummary;
use crate::config::SimulationConfig;
use crate::errors::SimError;
use crate::io::csv::write_trajectory_file;
use crate::plotting::plot_trajectory;
use log::{error, info, warn};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    pub index: usize,
    pub title: String,
    pub image_path: PathBuf,
    pub csv_path: Option<PathBuf>,
    pub summary: Option<TrajectorySummary>,
}

#[derive(Debug, Default)]
pub struct RunReport {
    pub completed: Vec<ScenarioOutcome>,
    pub failed: Vec<(usize, SimError)>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Runs every configured scenario in order, one plot per scenario.
pub struct ScenarioRunner<'a> {
    config: &'a SimulationConfig,
}

impl<'a> ScenarioRunner<'a> {
    pub fn new(config: &'a SimulationConfig) -> Self {
        Self { config }
    }

    pub fn image_path(&self, index: usize) -> PathBuf {
        self.config
            .output
            .directory
            .join(format!("image{}.png", index))
    }

    pub fn csv_path(&self, index: usize) -> PathBuf {
        self.config
            .output
            .directory
            .join(format!("trajectory{}.csv", index))
    }

    /// Runs scenarios `1..=n`. A failing scenario is recorded in the report and
    /// the remaining ones still run; only an unusable output directory aborts.
    pub fn run(&self) -> Result<RunReport, SimError> {
        fs::create_dir_all(&self.config.output.directory)?;

        if self.config.scenario_count == 0 {
            warn!("No scenarios configured");
        }

        let mut report = RunReport::default();
        for index in 1..=self.config.scenario_count {
            match self.run_scenario(index) {
                Ok(outcome) => {
                    info!(
                        "Scenario {} '{}' written to {}",
                        index,
                        outcome.title,
                        outcome.image_path.display()
                    );
                    report.completed.push(outcome);
                }
                Err(e) => {
                    error!("Scenario {} failed: {}", index, e);
                    report.failed.push((index, e));
                }
            }
        }
        Ok(report)
    }

    /// Simulates and renders one scenario, creating the output directory if needed.
    pub fn run_scenario(&self, index: usize) -> Result<ScenarioOutcome, SimError> {
        let constants = &self.config.constants;
        let scenario = self.config.scenario(index)?;
        info!(
            "Running scenario {} '{}' (k={}, engine_on={}, thrust={})",
            index, scenario.title, scenario.drag_coefficient, scenario.engine_on, scenario.thrust
        );

        let trajectory = Simulator::new(constants).simulate(&scenario);
        let summary = TrajectorySummary::from_trajectory(constants.mu(), &trajectory);
        if let Some(summary) = &summary {
            info!("Scenario {}: {}", index, summary);
        }

        fs::create_dir_all(&self.config.output.directory)?;
        let image_path = self.image_path(index);
        plot_trajectory(
            &image_path,
            &trajectory.xs(),
            &trajectory.ys(),
            &scenario.title,
            self.config.output.width,
            self.config.output.height,
        )?;

        let csv_path = if self.config.output.export_csv {
            let path = self.csv_path(index);
            write_trajectory_file(&path, constants.mu(), &trajectory)?;
            Some(path)
        } else {
            None
        };

        Ok(ScenarioOutcome {
            index,
            title: scenario.title,
            image_path,
            csv_path,
            summary,
        })
    }
}
