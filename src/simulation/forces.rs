//! Pairwise force helpers for the engine
//!
//! The engine works on unordered pairs `(i, j)` with `i < j`. These helpers
//! compute the pair separation and the inverse-square impulse vector that is
//! applied equal-and-opposite to the two bodies.

use crate::simulation::states::{Body, NVec2};

/// Displacement from body j to body i and its length
#[derive(Debug, Clone, Copy)]
pub struct Separation {
    pub delta: NVec2, // p_i - p_j
    pub distance: f64, // |p_i - p_j|
}

impl Separation {
    pub fn between(bi: &Body, bj: &Body) -> Self {
        let delta = bi.position - bj.position;
        let distance = delta.x.hypot(delta.y);
        Self { delta, distance }
    }

    /// Coincident centres have no direction; callers must not divide by this
    pub fn is_degenerate(&self) -> bool {
        self.distance == 0.0 || !self.distance.is_finite()
    }

    /// Unit vector pointing from j to i
    pub fn direction(&self) -> NVec2 {
        self.delta / self.distance
    }
}

/// Inverse-square magnitude `constant / d^2`
pub fn inverse_square(constant: f64, distance: f64) -> f64 {
    constant / distance / distance
}

/// Vector of magnitude `constant / d^2` along the pair direction (j -> i)
///
/// Body i receives `-impulse` and body j receives `+impulse` for attraction
/// with a positive constant.
pub fn pair_impulse(constant: f64, sep: &Separation) -> NVec2 {
    inverse_square(constant, sep.distance) * sep.direction()
}
