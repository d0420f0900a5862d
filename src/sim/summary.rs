use crate::models::Trajectory;
use crate::physics::energy::{calculate_angular_momentum, calculate_energy, relative_drift};
use crate::physics::orbital::OrbitalMechanics;
use std::fmt;

/// Conservation and range diagnostics for one simulated trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectorySummary {
    pub points: usize,
    pub final_radius: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub energy_drift: f64,
    pub angular_momentum_drift: f64,
    /// Osculating semi-major axis of the initial state; negative when unbound.
    pub initial_semi_major_axis: f64,
    /// Period of the initial osculating orbit, `None` when it is not closed.
    pub initial_period: Option<f64>,
}

impl TrajectorySummary {
    pub fn from_trajectory(mu: f64, trajectory: &Trajectory) -> Option<Self> {
        let initial = trajectory.initial_state()?;
        let last = trajectory.final_state()?;

        let (min_radius, max_radius) = trajectory
            .points()
            .iter()
            .map(|p| p.state.radius())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| {
                (lo.min(r), hi.max(r))
            });

        let initial_semi_major_axis = OrbitalMechanics::compute_semi_major_axis(mu, initial);
        let initial_period = (initial_semi_major_axis > 0.0 && initial_semi_major_axis.is_finite())
            .then(|| OrbitalMechanics::compute_orbital_period(mu, initial_semi_major_axis));

        Some(TrajectorySummary {
            points: trajectory.points().len(),
            final_radius: last.radius(),
            min_radius,
            max_radius,
            energy_drift: relative_drift(calculate_energy(mu, initial), calculate_energy(mu, last)),
            angular_momentum_drift: relative_drift(
                calculate_angular_momentum(initial),
                calculate_angular_momentum(last),
            ),
            initial_semi_major_axis,
            initial_period,
        })
    }
}

impl fmt::Display for TrajectorySummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} points, final r={:.6}, r in [{:.6}, {:.6}], energy drift {:.3e}, angular momentum drift {:.3e}",
            self.points,
            self.final_radius,
            self.min_radius,
            self.max_radius,
            self.energy_drift,
            self.angular_momentum_drift
        )?;
        match self.initial_period {
            Some(period) => write!(
                f,
                ", initial a={:.6}, period {:.6}",
                self.initial_semi_major_axis, period
            ),
            None => write!(f, ", initial orbit unbound"),
        }
    }
}
