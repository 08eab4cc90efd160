//! Core state types for the glue simulation.
//!
//! - `Body`   one circular particle (position, velocity, radius, glued flag)
//! - `System` the ordered body collection plus the tick count
//!
//! Bodies are appended, never removed or reordered, so an index into
//! `System::bodies` stays valid for the whole run.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub position: NVec2, // position in world units
    pub velocity: NVec2, // world units per tick
    pub radius: f64, // fixed after creation
    pub glued: bool, // a glued body stops translating under attractive gravity
}

impl Body {
    /// New body at rest, not glued
    pub fn new(position: NVec2, radius: f64) -> Self {
        Self {
            position,
            velocity: NVec2::zeros(),
            radius,
            glued: false,
        }
    }

    /// Euclidean distance between the two centres
    pub fn distance_to(&self, other: &Body) -> f64 {
        (self.position - other.position).norm()
    }

    /// True when the circles intersect (strict, touching does not count)
    pub fn overlaps(&self, other: &Body) -> bool {
        self.distance_to(other) < self.radius + other.radius
    }
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<Body>, // index-stable collection of bodies
    pub ticks: u64, // completed ticks
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, ticks: 0 }
    }
}
