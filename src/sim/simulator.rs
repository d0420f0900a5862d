use crate::config::{PhysicalConstants, ScenarioParams};
use crate::constants::{GRID_RELATIVE_TOLERANCE, MAX_GRID_POINTS};
use crate::fsm::EngineFSM;
use crate::integrators::rk4::rk4_step;
use crate::models::{State, Trajectory};
use log::{info, warn};

/// Number of points on the grid `0, dt, 2dt, ...` strictly below `duration`.
pub fn time_grid_len(duration: f64, dt: f64) -> usize {
    let ratio = duration / dt;
    let whole = ratio.round();
    if (ratio - whole).abs() <= GRID_RELATIVE_TOLERANCE * ratio.max(1.0) {
        whole as usize
    } else {
        ratio.ceil() as usize
    }
}

/// Outcome of a single integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepRecord {
    /// Grid index of the produced state (the initial state is index 0).
    pub index: usize,
    pub time: f64,
    /// Whether the engine burned while integrating into this state.
    pub engine_on: bool,
    pub state: State,
}

pub struct Simulator<'a> {
    constants: &'a PhysicalConstants,
}

impl<'a> Simulator<'a> {
    pub fn new(constants: &'a PhysicalConstants) -> Self {
        Self { constants }
    }

    pub fn grid_len(&self) -> usize {
        time_grid_len(self.constants.duration, self.constants.dt)
    }

    /// Lazily steps through the scenario, one [`StepRecord`] per integration step.
    pub fn steps<'s>(&self, scenario: &'s ScenarioParams) -> Propagation<'a, 's> {
        Propagation {
            constants: self.constants,
            scenario,
            engine: EngineFSM::new(scenario.engine_on, scenario.engine_activation),
            state: scenario.initial_state,
            index: 0,
            grid_len: self.grid_len(),
            diverged: false,
        }
    }

    pub fn simulate(&self, scenario: &ScenarioParams) -> Trajectory {
        let mut trajectory = Trajectory::with_capacity(self.grid_len().min(MAX_GRID_POINTS));
        if self.grid_len() == 0 {
            return trajectory;
        }
        trajectory.push(0.0, scenario.initial_state);
        for record in self.steps(scenario) {
            trajectory.push(record.time, record.state);
        }
        trajectory
    }
}

pub struct Propagation<'a, 's> {
    constants: &'a PhysicalConstants,
    scenario: &'s ScenarioParams,
    engine: EngineFSM,
    state: State,
    index: usize,
    grid_len: usize,
    diverged: bool,
}

impl Iterator for Propagation<'_, '_> {
    type Item = StepRecord;

    fn next(&mut self) -> Option<StepRecord> {
        if self.index + 1 >= self.grid_len {
            return None;
        }

        let dt = self.constants.dt;
        let t = self.index as f64 * dt;
        let engine_on = self.engine.should_apply_thrust();
        self.state = rk4_step(t, &self.state, self.constants, self.scenario, engine_on, dt);
        self.index += 1;

        let time = self.index as f64 * dt;
        let previous = self.engine.get_current_state();
        self.engine.evaluate_transition(time);
        if self.engine.get_current_state() != previous {
            info!(
                "'{}': engine {} from t={}",
                self.scenario.title,
                self.engine.get_current_state(),
                self.engine.get_last_state_change()
            );
        }

        if !self.diverged && !self.state.is_finite() {
            self.diverged = true;
            warn!(
                "'{}' became non-finite at step {} (t={}); remaining states will not be finite",
                self.scenario.title, self.index, time
            );
        }

        Some(StepRecord {
            index: self.index,
            time,
            engine_on,
            state: self.state,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.grid_len.saturating_sub(self.index + 1);
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineActivation;
    use crate::physics::dynamics::derivative;
    use crate::physics::energy::calculate_energy;
    use crate::physics::orbital::OrbitalMechanics;
    use approx::assert_abs_diff_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use test_case::test_case;

    fn unit_constants(dt: f64, duration: f64) -> PhysicalConstants {
        PhysicalConstants::new(1.0, 1.0, 1.0, dt, duration).unwrap()
    }

    #[test_case(1.0, 0.01, 100; "exact multiple despite rounding")]
    #[test_case(1.0, 0.3, 4; "partial last step")]
    #[test_case(10.0, 0.1, 100; "ten seconds")]
    #[test_case(2.5, 1.0, 3; "coarse")]
    fn grid_excludes_duration(duration: f64, dt: f64, expected: usize) {
        assert_eq!(time_grid_len(duration, dt), expected);
    }

    #[test]
    fn trajectory_starts_at_initial_state_on_uniform_grid() {
        let constants = unit_constants(0.01, 1.0);
        let initial = State::from_components(1.0, 0.0, 0.0, 1.0);
        let scenario = ScenarioParams::ballistic(initial, "grid");
        let trajectory = Simulator::new(&constants).simulate(&scenario);

        assert_eq!(trajectory.points().len(), 100);
        assert_eq!(trajectory.initial_state(), Some(&initial));
        for (i, point) in trajectory.points().iter().enumerate() {
            assert_abs_diff_eq!(point.time, i as f64 * 0.01, epsilon = 1e-12);
        }
        assert_eq!(trajectory.xs().len(), trajectory.ys().len());
    }

    #[test]
    fn circular_orbit_keeps_its_radius() {
        let constants = unit_constants(0.01, 2.0 * crate::constants::PI);
        let initial = OrbitalMechanics::circular_state(1.0, 1.0);
        let scenario = ScenarioParams::ballistic(initial, "circle");
        let trajectory = Simulator::new(&constants).simulate(&scenario);
        for point in trajectory.points() {
            assert_abs_diff_eq!(point.state.radius(), 1.0, epsilon = 1e-6);
        }
    }

    /// Largest energy error over the first `samples` points, taking every `stride`-th point.
    fn max_energy_error(initial: State, dt: f64, stride: usize, samples: usize) -> f64 {
        let constants = unit_constants(dt, 4.0);
        let trajectory =
            Simulator::new(&constants).simulate(&ScenarioParams::ballistic(initial, "energy"));
        let e0 = calculate_energy(1.0, &initial);
        trajectory
            .points()
            .iter()
            .step_by(stride)
            .take(samples)
            .map(|p| (calculate_energy(1.0, &p.state) - e0).abs())
            .fold(0.0, f64::max)
    }

    #[test]
    fn energy_error_shrinks_with_fourth_power_of_step() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..5 {
            let r: f64 = rng.gen_range(0.8..1.5);
            let angle: f64 = rng.gen_range(0.0..crate::constants::PI * 2.0);
            // clearly eccentric, either side of circular
            let factor = if rng.gen_bool(0.5) { 1.0 } else { 0.75 };
            let speed = OrbitalMechanics::compute_circular_velocity(1.0, r)
                * rng.gen_range(1.1..1.2)
                * factor;
            let initial = State::from_components(
                r * angle.cos(),
                r * angle.sin(),
                -speed * angle.sin(),
                speed * angle.cos(),
            );

            let coarse = max_energy_error(initial, 0.04, 1, 100);
            let fine = max_energy_error(initial, 0.02, 2, 100);
            // halving dt should cut the error by ~16
            assert!(fine < coarse / 8.0, "coarse {} fine {}", coarse, fine);
            assert!(coarse < 1e-4, "coarse error {}", coarse);
        }
    }

    #[test]
    fn delayed_engine_coasts_through_first_step() {
        let constants = unit_constants(0.01, 1.0);
        let scenario = ScenarioParams {
            engine_on: true,
            thrust: 0.5,
            ..ScenarioParams::ballistic(State::from_components(1.0, 0.0, 0.0, 1.0), "burn")
        };
        let coast = ScenarioParams::ballistic(scenario.initial_state, "coast");

        let mut previous = scenario.initial_state;
        for record in Simulator::new(&constants).steps(&scenario).take(5) {
            let with_engine =
                derivative(record.time, &previous, 0.0, record.engine_on, 0.5, &constants);
            let without = derivative(record.time, &previous, 0.0, false, 0.5, &constants);
            let thrust = (with_engine.velocity - without.velocity).magnitude();
            if record.index == 1 {
                assert!(!record.engine_on);
                assert_eq!(thrust, 0.0);
            } else {
                assert!(record.engine_on);
                assert_abs_diff_eq!(thrust, 0.5, epsilon = 1e-12);
            }
            previous = record.state;
        }

        let first_burn = Simulator::new(&constants).steps(&scenario).next().unwrap();
        let first_coast = Simulator::new(&constants).steps(&coast).next().unwrap();
        assert_eq!(first_burn.state, first_coast.state);
    }

    #[test]
    fn immediate_engine_burns_on_first_step() {
        let constants = unit_constants(0.01, 1.0);
        let scenario = ScenarioParams {
            engine_on: true,
            thrust: 0.5,
            engine_activation: EngineActivation::Immediate,
            ..ScenarioParams::ballistic(State::from_components(1.0, 0.0, 0.0, 1.0), "burn")
        };
        let first = Simulator::new(&constants).steps(&scenario).next().unwrap();
        assert!(first.engine_on);
    }

    #[test]
    fn prograde_burn_raises_orbit_energy() {
        let constants = unit_constants(0.01, 1.0);
        let initial = State::from_components(1.0, 0.0, 0.0, 1.0);
        let scenario = ScenarioParams {
            engine_on: true,
            thrust: 0.2,
            ..ScenarioParams::ballistic(initial, "burn")
        };
        let end = *Simulator::new(&constants).simulate(&scenario).final_state().unwrap();
        assert!(calculate_energy(1.0, &end) > calculate_energy(1.0, &initial) + 0.1);
    }

    #[test]
    fn drag_removes_energy() {
        let constants = unit_constants(0.01, 1.0);
        let initial = State::from_components(1.0, 0.0, 0.0, 1.0);
        let scenario = ScenarioParams {
            drag_coefficient: 0.1,
            ..ScenarioParams::ballistic(initial, "drag")
        };
        let end = *Simulator::new(&constants).simulate(&scenario).final_state().unwrap();
        assert!(calculate_energy(1.0, &end) < calculate_energy(1.0, &initial));
    }

    #[test]
    fn singularity_propagates_silently() {
        let constants = unit_constants(0.1, 1.0);
        let scenario = ScenarioParams::ballistic(State::zero(), "origin");
        let trajectory = Simulator::new(&constants).simulate(&scenario);
        assert_eq!(trajectory.points().len(), 10);
        assert!(!trajectory.final_state().unwrap().is_finite());
    }

    #[test]
    fn size_hint_counts_remaining_steps() {
        let constants = unit_constants(0.1, 1.0);
        let initial = State::from_components(1.0, 0.0, 0.0, 1.0);
        let scenario = ScenarioParams::ballistic(initial, "hint");
        let mut steps = Simulator::new(&constants).steps(&scenario);
        assert_eq!(steps.size_hint(), (9, Some(9)));
        steps.next();
        assert_eq!(steps.size_hint(), (8, Some(8)));
        assert_eq!(steps.count(), 8);
    }
}
