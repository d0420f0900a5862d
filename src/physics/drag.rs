use nalgebra as na;

/// Linear drag, `-k * v / m`.
pub fn drag_acceleration(
    drag_coefficient: f64,
    body_mass: f64,
    velocity: &na::Vector2<f64>,
) -> na::Vector2<f64> {
    -drag_coefficient * velocity / body_mass
}
