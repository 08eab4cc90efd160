//! Gravitation, gluing and break-apart updates
//!
//! All operations mutate the body slice in place and visit every unordered
//! pair `(i, j)`, `i < j`, exactly once (brute force, O(n^2) per call).

use serde::Deserialize;

use crate::simulation::forces::{pair_impulse, Separation};
use crate::simulation::integrator::{drift_all, euler_drift};
use crate::simulation::states::{Body, NVec2};

/// Ticks skipped by the break-apart jump when not configured
pub const DEFAULT_TIME_SKIP: f64 = 10.0;

/// How pairwise break impulses combine into a body's velocity
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BreakMode {
    /// Each pair overwrites both velocities, so only the last pair touching a
    /// body survives.
    #[default]
    #[serde(rename = "last_pair_wins")]
    LastPairWins,

    /// Every pair adds its impulse, like `step` does for gravity
    #[serde(rename = "accumulate")]
    Accumulate,
}

/// One tick of inverse-square gravitation with gluing.
///
/// For each body in index order: drift it by its velocity unless it is glued
/// and `g >= 0`, then interact it with every later body. Overlapping pairs
/// (strict `d < r_i + r_j`) glue both bodies and exchange no force. Other
/// pairs exchange equal and opposite impulses of magnitude `g / d^2`.
///
/// A negative `g` is repulsion, and glued bodies keep drifting in that mode.
pub fn step(bodies: &mut [Body], g: f64) {
    let n = bodies.len();

    for i in 0..n {
        if g < 0.0 || !bodies[i].glued {
            euler_drift(&mut bodies[i], 1.0);
        }

        for j in (i + 1)..n {
            let sep = Separation::between(&bodies[i], &bodies[j]);

            // coincident centres only slip past the radius test with zero radii
            if sep.distance < bodies[i].radius + bodies[j].radius || sep.is_degenerate() {
                if !(bodies[i].glued && bodies[j].glued) {
                    log::trace!("bodies {i} and {j} glued at distance {:.3}", sep.distance);
                }
                bodies[i].glued = true;
                bodies[j].glued = true;
                continue;
            }

            let impulse = pair_impulse(g, &sep);
            bodies[i].velocity -= impulse;
            bodies[j].velocity += impulse;
        }
    }
}

/// Un-glue everything and blow the bodies apart, overwriting velocities per
/// pair (`BreakMode::LastPairWins`).
pub fn break_apart(bodies: &mut [Body], break_constant: f64, time_skip: f64) {
    break_apart_with(bodies, break_constant, time_skip, BreakMode::LastPairWins);
}

/// Un-glue everything, give every pair an inverse-square impulse of
/// `-break_constant / d^2` along `p_i - p_j` regardless of overlap, then jump
/// all positions forward by `time_skip` ticks so bodies do not immediately
/// re-collide. Coincident pairs have no direction and are skipped.
///
/// The impulse has the same orientation as `step` with `g = break_constant`:
/// a negative constant pushes bodies apart.
pub fn break_apart_with(bodies: &mut [Body], break_constant: f64, time_skip: f64, mode: BreakMode) {
    let n = bodies.len();

    match mode {
        BreakMode::LastPairWins => {
            for i in 0..n {
                // runs after earlier pairs already assigned body i a velocity
                release(&mut bodies[i]);

                for j in (i + 1)..n {
                    let sep = Separation::between(&bodies[i], &bodies[j]);
                    if sep.is_degenerate() {
                        continue;
                    }
                    let impulse = pair_impulse(-break_constant, &sep);
                    bodies[i].velocity = impulse;
                    bodies[j].velocity = -impulse;
                }
            }
        }
        BreakMode::Accumulate => {
            unglue(bodies);

            let mut dv = vec![NVec2::zeros(); n];
            for i in 0..n {
                for j in (i + 1)..n {
                    let sep = Separation::between(&bodies[i], &bodies[j]);
                    if sep.is_degenerate() {
                        continue;
                    }
                    let impulse = pair_impulse(-break_constant, &sep);
                    dv[i] += impulse;
                    dv[j] -= impulse;
                }
            }
            for (b, d) in bodies.iter_mut().zip(dv.iter()) {
                b.velocity += *d;
            }
        }
    }

    drift_all(bodies, time_skip);
}

/// Clear every glued flag and stop the formerly glued bodies. Idempotent.
pub fn unglue(bodies: &mut [Body]) {
    for b in bodies.iter_mut() {
        release(b);
    }
}

fn release(body: &mut Body) {
    if body.glued {
        body.glued = false;
        body.velocity = NVec2::zeros();
    }
}
