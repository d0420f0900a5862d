use super::state::State;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryPoint {
    pub time: f64,
    pub state: State,
}

/// States sampled on a uniform time grid starting at t = 0.
#[derive(Debug, Clone, Default)]
pub struct Trajectory {
    points: Vec<TrajectoryPoint>,
}

impl Trajectory {
    pub fn with_capacity(capacity: usize) -> Self {
        Trajectory {
            points: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, time: f64, state: State) {
        self.points.push(TrajectoryPoint { time, state });
    }

    pub fn points(&self) -> &[TrajectoryPoint] {
        &self.points
    }

    pub fn initial_state(&self) -> Option<&State> {
        self.points.first().map(|p| &p.state)
    }

    pub fn final_state(&self) -> Option<&State> {
        self.points.last().map(|p| &p.state)
    }

    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.state.position.x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.state.position.y).collect()
    }
}
