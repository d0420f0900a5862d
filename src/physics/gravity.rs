use nalgebra as na;

/// Inverse-square acceleration towards the origin, `-mu * r / |r|^3`.
///
/// Not guarded at the origin: a zero position yields non-finite components.
pub fn gravity_acceleration(mu: f64, position: &na::Vector2<f64>) -> na::Vector2<f64> {
    let r: f64 = (position.x * position.x + position.y * position.y).sqrt();
    -mu * position / (r * r * r)
}
