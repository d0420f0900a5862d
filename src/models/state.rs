use nalgebra as na;

/// Planar state of the body, centred on the gravitating mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub position: na::Vector2<f64>,
    pub velocity: na::Vector2<f64>,
}

impl State {
    /// Builds a state from the flat `(x, y, vx, vy)` layout used in configuration files.
    pub fn from_components(x: f64, y: f64, vx: f64, vy: f64) -> Self {
        State {
            position: na::Vector2::new(x, y),
            velocity: na::Vector2::new(vx, vy),
        }
    }

    pub fn zero() -> Self {
        State {
            position: na::Vector2::zeros(),
            velocity: na::Vector2::zeros(),
        }
    }

    pub fn components(&self) -> [f64; 4] {
        [
            self.position.x,
            self.position.y,
            self.velocity.x,
            self.velocity.y,
        ]
    }

    pub fn radius(&self) -> f64 {
        self.position.magnitude()
    }

    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }

    pub fn is_finite(&self) -> bool {
        self.components().iter().all(|c| c.is_finite())
    }
}

impl std::ops::Add for State {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        State {
            position: self.position + other.position,
            velocity: self.velocity + other.velocity,
        }
    }
}

impl std::ops::Mul<f64> for State {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        State {
            position: self.position * scalar,
            velocity: self.velocity * scalar,
        }
    }
}
