use crate::models::State;

/// Specific mechanical energy, `v^2 / 2 - mu / r`.
pub fn calculate_energy(mu: f64, state: &State) -> f64 {
    let r = state.radius();
    let v = state.speed();

    0.5 * v * v - mu / r
}

/// Specific angular momentum about the origin (z component of `r x v`).
pub fn calculate_angular_momentum(state: &State) -> f64 {
    state.position.x * state.velocity.y - state.position.y * state.velocity.x
}

/// Relative change `|e1 - e0| / |e0|`; falls back to the absolute change when `e0` is zero.
pub fn relative_drift(initial: f64, current: f64) -> f64 {
    let change = (current - initial).abs();
    if initial == 0.0 {
        change
    } else {
        change / initial.abs()
    }
}
