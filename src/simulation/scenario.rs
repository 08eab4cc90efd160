//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! consumed by the [`Driver`](crate::simulation::driver::Driver):
//! - numerical parameters (`Parameters`)
//! - system state (`System` with the generated bodies at tick 0)
//! - the seeded random source, already advanced past the initial layout

use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::configuration::config::{LayoutConfig, ScenarioConfig};
use crate::error::Result;
use crate::simulation::layout::{create_center_star, distribute_circles};
use crate::simulation::params::{BoundaryParams, Parameters};
use crate::simulation::states::System;

/// Runtime bundle built from a [`ScenarioConfig`]
#[derive(Debug, Clone)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub rng: ChaChaRng,
}

impl Scenario {
    pub fn build_scenario(cfg: &ScenarioConfig) -> Result<Self> {
        // Parameters (runtime) from the config sections
        let b = &cfg.boundary;
        let parameters = Parameters {
            width: cfg.world.width,
            height: cfg.world.height,
            gravities: cfg.gravity.cycle.clone(),
            break_constant: cfg.gravity.break_constant,
            time_skip: cfg.gravity.time_skip,
            break_mode: cfg.gravity.break_mode,
            boundary: BoundaryParams {
                period: b.period,
                start: b.start,
                x_margin: b.x_margin,
                y_margin: b.y_margin,
                radius_min: b.radius_min,
                radius_max: b.radius_max,
            },
            seed: cfg.seed,
        };
        parameters.validate()?;

        let mut rng = ChaChaRng::seed_from_u64(cfg.seed);

        // Bodies: generated from the layout section
        let bodies = match &cfg.layout {
            LayoutConfig::Star { center_radius, outer_radius, sides } => create_center_star(
                f64::from(parameters.width),
                f64::from(parameters.height),
                *center_radius,
                *outer_radius,
                *sides,
            )?,
            LayoutConfig::Grid { count, radius_min, radius_max } => distribute_circles(
                &mut rng,
                *count,
                *radius_min,
                *radius_max,
                parameters.width,
                parameters.height,
            )?,
            LayoutConfig::Empty => Vec::new(),
        };

        log::info!(
            "scenario built: {} bodies, {}x{} world, gravity cycle {:?}, seed {}",
            bodies.len(),
            parameters.width,
            parameters.height,
            parameters.gravities,
            parameters.seed
        );

        Ok(Self {
            parameters,
            system: System::new(bodies),
            rng,
        })
    }
}
