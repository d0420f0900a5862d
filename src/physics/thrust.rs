use nalgebra as na;

/// Prograde engine acceleration: magnitude `thrust / m` along the heading of `velocity`.
///
/// The heading is `atan2(vy, vx)`, so a body at rest thrusts along +x.
pub fn prograde_thrust_acceleration(
    thrust: f64,
    body_mass: f64,
    velocity: &na::Vector2<f64>,
) -> na::Vector2<f64> {
    let heading = velocity.y.atan2(velocity.x);
    let magnitude = thrust / body_mass;
    na::Vector2::new(magnitude * heading.cos(), magnitude * heading.sin())
}
