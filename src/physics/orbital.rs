use crate::constants::PI;
use crate::models::State;

pub struct OrbitalMechanics;

impl OrbitalMechanics {
    /// Speed of a circular orbit of radius `r`.
    pub fn compute_circular_velocity(mu: f64, r: f64) -> f64 {
        (mu / r).sqrt()
    }

    /// Period of a closed orbit with semi-major axis `a`.
    pub fn compute_orbital_period(mu: f64, a: f64) -> f64 {
        2.0 * PI * (a.powi(3) / mu).sqrt()
    }

    /// Semi-major axis from the vis-viva equation. Negative for hyperbolic states.
    pub fn compute_semi_major_axis(mu: f64, state: &State) -> f64 {
        let r = state.radius();
        let v = state.speed();
        let specific_energy = v * v / 2.0 - mu / r;
        -mu / (2.0 * specific_energy)
    }

    /// Counter-clockwise circular orbit through `(r, 0)`.
    pub fn circular_state(mu: f64, r: f64) -> State {
        State::from_components(r, 0.0, 0.0, Self::compute_circular_velocity(mu, r))
    }
}
