use super::drag::drag_acceleration;
use super::gravity::gravity_acceleration;
use super::thrust::prograde_thrust_acceleration;
use crate::config::{PhysicalConstants, ScenarioParams};
use crate::models::State;

pub trait EquationsOfMotion {
    type State;

    fn compute_derivative(&self, t: f64, state: &Self::State) -> Self::State;
}

/// Right-hand side of the planar equations of motion.
///
/// The returned [`State`] holds derivatives: `position` is `(vx, vy)` and
/// `velocity` is `(ax, ay)`. `t` is accepted for the integrator's benefit;
/// the force law itself is autonomous.
pub fn derivative(
    _t: f64,
    state: &State,
    drag_coefficient: f64,
    engine_on: bool,
    thrust: f64,
    constants: &PhysicalConstants,
) -> State {
    let mut acceleration = gravity_acceleration(constants.mu(), &state.position)
        + drag_acceleration(drag_coefficient, constants.body_mass, &state.velocity);
    if engine_on {
        acceleration +=
            prograde_thrust_acceleration(thrust, constants.body_mass, &state.velocity);
    }

    State {
        position: state.velocity,
        velocity: acceleration,
    }
}

/// Dynamics of one scenario with the engine fixed on or off.
#[derive(Debug, Clone, Copy)]
pub struct OrbitalDynamics<'a> {
    constants: &'a PhysicalConstants,
    drag_coefficient: f64,
    thrust: f64,
    engine_on: bool,
}

impl<'a> OrbitalDynamics<'a> {
    pub fn new(
        constants: &'a PhysicalConstants,
        drag_coefficient: f64,
        thrust: f64,
        engine_on: bool,
    ) -> Self {
        Self {
            constants,
            drag_coefficient,
            thrust,
            engine_on,
        }
    }

    pub fn for_scenario(
        constants: &'a PhysicalConstants,
        scenario: &ScenarioParams,
        engine_on: bool,
    ) -> Self {
        Self::new(
            constants,
            scenario.drag_coefficient,
            scenario.thrust,
            engine_on,
        )
    }
}

impl EquationsOfMotion for OrbitalDynamics<'_> {
    type State = State;

    fn compute_derivative(&self, t: f64, state: &State) -> State {
        derivative(
            t,
            state,
            self.drag_coefficient,
            self.engine_on,
            self.thrust,
            self.constants,
        )
    }
}
