use super::engine_states::EngineState;
use crate::config::EngineActivation;
use log::debug;

/// Tracks whether the engine burns during each integration step.
///
/// Under [`EngineActivation::Delayed`] the engine starts `Off` no matter what
/// was commanded and only takes the commanded state once the first step has
/// been evaluated. Under [`EngineActivation::Immediate`] it starts in the
/// commanded state.
pub struct EngineFSM {
    current_state: EngineState,
    commanded: EngineState,
    last_state_change: f64,
}

impl EngineFSM {
    pub fn new(engine_on: bool, activation: EngineActivation) -> Self {
        let commanded = if engine_on {
            EngineState::Burning
        } else {
            EngineState::Off
        };
        let current_state = match activation {
            EngineActivation::Delayed => EngineState::Off,
            EngineActivation::Immediate => commanded,
        };
        Self {
            current_state,
            commanded,
            last_state_change: 0.0,
        }
    }

    pub fn get_current_state(&self) -> EngineState {
        self.current_state
    }

    pub fn get_last_state_change(&self) -> f64 {
        self.last_state_change
    }

    pub fn should_apply_thrust(&self) -> bool {
        matches!(self.current_state, EngineState::Burning)
    }

    fn transition_to(&mut self, new_state: EngineState, time: f64) {
        if self.current_state != new_state {
            debug!(
                "Engine transition at t={:.4}: {} -> {}",
                time, self.current_state, new_state
            );
            self.current_state = new_state;
            self.last_state_change = time;
        }
    }

    /// Called after each completed integration step ending at `time`.
    pub fn evaluate_transition(&mut self, time: f64) {
        self.transition_to(self.commanded, time);
    }
}
