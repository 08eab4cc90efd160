//! Explicit Euler position updates
//!
//! The simulation runs with one unit of time per tick, so an ordinary drift is
//! `x += v`. The break-apart jump uses a larger multiple of the velocity.

use super::states::Body;

/// Advance one body by `dt` ticks of its current velocity
pub fn euler_drift(body: &mut Body, dt: f64) {
    body.position += dt * body.velocity;
}

/// Advance every body by `dt` ticks
pub fn drift_all(bodies: &mut [Body], dt: f64) {
    for b in bodies.iter_mut() {
        euler_drift(b, dt);
    }
}
