//! Planar powered-orbit simulator.
//!
//! Integrates a body under inverse-square gravity with optional linear drag
//! and prograde engine thrust, using a fixed-step RK4 scheme, for every
//! scenario of a TOML configuration file, and plots each trajectory to PNG.

pub mod config;
pub mod constants;
pub mod errors;
pub mod fsm;
pub mod integrators;
pub mod io;
pub mod models;
pub mod physics;
pub mod plotting;
pub mod sim;

pub use errors::SimError;
