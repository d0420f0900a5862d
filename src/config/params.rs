use crate::constants::MAX_GRID_POINTS;
use crate::errors::SimError;
use crate::models::State;
use serde::Deserialize;

/// Constants shared by every scenario of a run.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PhysicalConstants {
    #[serde(rename = "G")]
    pub gravitational_constant: f64,
    #[serde(rename = "M")]
    pub central_mass: f64,
    #[serde(rename = "m_t")]
    pub body_mass: f64,
    pub dt: f64,
    #[serde(rename = "T")]
    pub duration: f64,
}

impl PhysicalConstants {
    pub fn new(
        gravitational_constant: f64,
        central_mass: f64,
        body_mass: f64,
        dt: f64,
        duration: f64,
    ) -> Result<Self, SimError> {
        let constants = PhysicalConstants {
            gravitational_constant,
            central_mass,
            body_mass,
            dt,
            duration,
        };
        constants.validate()?;
        Ok(constants)
    }

    /// Gravitational parameter G*M.
    pub fn mu(&self) -> f64 {
        self.gravitational_constant * self.central_mass
    }

    pub fn validate(&self) -> Result<(), SimError> {
        let fields = [
            ("G", self.gravitational_constant),
            ("M", self.central_mass),
            ("m_t", self.body_mass),
            ("dt", self.dt),
            ("T", self.duration),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimError::invalid_parameter(
                    name,
                    format!("must be finite and strictly positive, got {}", value),
                ));
            }
        }
        if self.dt >= self.duration {
            return Err(SimError::invalid_parameter(
                "dt",
                format!("must be smaller than T ({} >= {})", self.dt, self.duration),
            ));
        }
        let steps = self.duration / self.dt;
        if steps > MAX_GRID_POINTS as f64 {
            return Err(SimError::invalid_parameter(
                "dt",
                format!(
                    "T/dt = {:e} grid points exceeds the limit of {}",
                    steps, MAX_GRID_POINTS
                ),
            ));
        }
        Ok(())
    }
}

/// When a scenario's engine flag starts to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineActivation {
    /// The first integration step always coasts; the flag applies from the second step on.
    #[default]
    Delayed,
    /// The flag applies from the first integration step.
    Immediate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioParams {
    pub drag_coefficient: f64,
    pub engine_on: bool,
    pub thrust: f64,
    pub initial_state: State,
    pub title: String,
    pub engine_activation: EngineActivation,
}

impl ScenarioParams {
    /// Coasting scenario with no drag and no engine.
    pub fn ballistic(initial_state: State, title: impl Into<String>) -> Self {
        ScenarioParams {
            drag_coefficient: 0.0,
            engine_on: false,
            thrust: 0.0,
            initial_state,
            title: title.into(),
            engine_activation: EngineActivation::Delayed,
        }
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if !self.drag_coefficient.is_finite() || self.drag_coefficient < 0.0 {
            return Err(SimError::invalid_parameter(
                "k",
                format!("must be finite and non-negative, got {}", self.drag_coefficient),
            ));
        }
        if !self.thrust.is_finite() || self.thrust < 0.0 {
            return Err(SimError::invalid_parameter(
                "thrust",
                format!("must be finite and non-negative, got {}", self.thrust),
            ));
        }
        Ok(())
    }
}

/// Parses the `x,y,vx,vy` text form of an initial state.
pub fn parse_initial_state(section: &str, text: &str) -> Result<State, SimError> {
    let values = text
        .split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<f64>().map_err(|e| SimError::InvalidInitialState {
                section: section.to_string(),
                reason: format!("'{}' is not a number ({})", part, e),
            })
        })
        .collect::<Result<Vec<f64>, SimError>>()?;
    state_from_values(section, &values)
}

pub(crate) fn state_from_values(section: &str, values: &[f64]) -> Result<State, SimError> {
    match values {
        [x, y, vx, vy] => Ok(State::from_components(*x, *y, *vx, *vy)),
        _ => Err(SimError::InvalidInitialState {
            section: section.to_string(),
            reason: format!("expected 4 values (x, y, vx, vy), got {}", values.len()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0.0, 1.0, 1.0, 0.1, 10.0, "G"; "zero gravitational constant")]
    #[test_case(1.0, -1.0, 1.0, 0.1, 10.0, "M"; "negative central mass")]
    #[test_case(1.0, 1.0, f64::NAN, 0.1, 10.0, "m_t"; "nan body mass")]
    #[test_case(1.0, 1.0, 1.0, 0.0, 10.0, "dt"; "zero time step")]
    #[test_case(1.0, 1.0, 1.0, 10.0, 10.0, "dt"; "time step not below duration")]
    #[test_case(1.0, 1.0, 1.0, 1e-300, 1e300, "dt"; "grid too large to store")]
    #[test_case(1.0, 1.0, 1.0, 1e-6, 1e3, "dt"; "grid above point limit")]
    fn invalid_constants_are_rejected(g: f64, m: f64, mt: f64, dt: f64, t: f64, key: &str) {
        match PhysicalConstants::new(g, m, mt, dt, t) {
            Err(SimError::InvalidParameter { name, .. }) => assert_eq!(name, key),
            other => panic!("expected invalid parameter {}, got {:?}", key, other),
        }
    }

    #[test]
    fn grid_at_point_limit_is_accepted() {
        assert!(PhysicalConstants::new(1.0, 1.0, 1.0, 1e-3, 1e4).is_ok());
    }

    #[test]
    fn mu_is_product_of_g_and_m() {
        let constants = PhysicalConstants::new(2.0, 3.0, 1.0, 0.1, 1.0).unwrap();
        assert_eq!(constants.mu(), 6.0);
    }

    #[test]
    fn parses_initial_state_with_whitespace() {
        let state = parse_initial_state("scenario1", " 1.5, 0 ,-0.25,1e-1").unwrap();
        assert_eq!(state.components(), [1.5, 0.0, -0.25, 0.1]);
    }

    #[test_case("1,0,0"; "too few values")]
    #[test_case("1,0,0,1,2"; "too many values")]
    #[test_case("1,zero,0,1"; "non numeric value")]
    #[test_case(""; "empty string")]
    fn malformed_initial_state_is_rejected(text: &str) {
        let err = parse_initial_state("scenario3", text).unwrap_err();
        match err {
            SimError::InvalidInitialState { section, .. } => assert_eq!(section, "scenario3"),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn negative_drag_is_rejected() {
        let mut params = ScenarioParams::ballistic(State::zero(), "bad");
        params.drag_coefficient = -0.1;
        assert!(params.validate().is_err());
    }
}
