pub mod params;
pub mod simulation;

pub use params::{EngineActivation, PhysicalConstants, ScenarioParams};
pub use simulation::{OutputOptions, SimulationConfig};
