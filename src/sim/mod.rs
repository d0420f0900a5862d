pub mod runner;
pub mod simulator;
pub mod summary;

pub use runner::{RunReport, ScenarioOutcome, ScenarioRunner};
pub use simulator::{Simulator, StepRecord};
pub use summary::TrajectorySummary;
