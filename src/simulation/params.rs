//! Physical and cadence parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - world size,
//! - the gravity-mode cycle and break-apart settings,
//! - boundary-circle insertion cadence and placement ranges,
//! - random seed

use crate::error::{Result, SimError};
use crate::simulation::engine::BreakMode;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub width: u32, // world width
    pub height: u32, // world height
    pub gravities: Vec<f64>, // gravity-mode cycle, advanced on toggle
    pub break_constant: f64, // break-apart strength (negative pushes apart)
    pub time_skip: f64, // ticks jumped after a break-apart
    pub break_mode: BreakMode, // how break impulses combine
    pub boundary: BoundaryParams,
    pub seed: u64, // deterministic seed
}

/// Periodic insertion of boundary circles
#[derive(Debug, Clone)]
pub struct BoundaryParams {
    pub period: u32, // ticks between insertions, 0 disables insertion
    pub start: u32, // initial insertion counter
    pub x_margin: u32,
    pub y_margin: u32,
    pub radius_min: u32,
    pub radius_max: u32,
}

impl Parameters {
    /// Reject parameter sets the driver cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(SimError::invalid("width", "must be positive"));
        }
        if self.height == 0 {
            return Err(SimError::invalid("height", "must be positive"));
        }
        if self.gravities.is_empty() {
            return Err(SimError::EmptyGravityCycle);
        }
        if let Some(g) = self.gravities.iter().find(|g| !g.is_finite()) {
            return Err(SimError::invalid("gravities", format!("{g} is not finite")));
        }
        if !self.break_constant.is_finite() {
            return Err(SimError::invalid("break_constant", "must be finite"));
        }
        if !(self.time_skip.is_finite() && self.time_skip >= 0.0) {
            return Err(SimError::invalid("time_skip", "must be finite and non-negative"));
        }

        let b = &self.boundary;
        if b.period > 0 {
            if b.radius_min == 0 {
                return Err(SimError::invalid("boundary.radius_min", "must be positive"));
            }
            if b.radius_min > b.radius_max {
                return Err(SimError::invalid("boundary.radius_max", "smaller than radius_min"));
            }
            if b.x_margin > self.width {
                return Err(SimError::invalid("boundary.x_margin", "exceeds world width"));
            }
            if b.y_margin > self.height {
                return Err(SimError::invalid("boundary.y_margin", "exceeds world height"));
            }
        }
        Ok(())
    }
}
