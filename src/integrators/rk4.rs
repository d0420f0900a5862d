use crate::config::{PhysicalConstants, ScenarioParams};
use crate::models::State;
use crate::physics::dynamics::{EquationsOfMotion, OrbitalDynamics};

pub struct RK4<T: EquationsOfMotion> {
    eom: T,
}

impl<T: EquationsOfMotion> RK4<T>
where
    T::State: Clone + std::ops::Add<Output = T::State> + std::ops::Mul<f64, Output = T::State>,
{
    pub fn new(eom: T) -> Self {
        RK4 { eom }
    }

    /// Advances `state` from `t` to `t + dt` with the classical four-stage scheme.
    pub fn integrate(&self, t: f64, state: &T::State, dt: f64) -> T::State {
        let k1 = self.eom.compute_derivative(t, state);

        let state2 = state.clone() + k1.clone() * (dt / 2.0);
        let k2 = self.eom.compute_derivative(t + dt / 2.0, &state2);

        let state3 = state.clone() + k2.clone() * (dt / 2.0);
        let k3 = self.eom.compute_derivative(t + dt / 2.0, &state3);

        let state4 = state.clone() + k3.clone() * dt;
        let k4 = self.eom.compute_derivative(t + dt, &state4);

        state.clone() + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (dt / 6.0)
    }
}

/// One RK4 step of a scenario's dynamics with the engine held at `engine_on`.
pub fn rk4_step(
    t: f64,
    state: &State,
    constants: &PhysicalConstants,
    scenario: &ScenarioParams,
    engine_on: bool,
    dt: f64,
) -> State {
    RK4::new(OrbitalDynamics::for_scenario(constants, scenario, engine_on)).integrate(t, state, dt)
}
