//! Per-tick simulation state machine
//!
//! The driver owns the body collection and is what a presentation shell talks
//! to: call [`Driver::tick`] once per frame, draw [`Driver::frame`], and forward
//! input through [`Driver::handle`]. Windowing, drawing and frame pacing stay
//! outside this crate.

use std::ops::ControlFlow;

use rand_chacha::ChaChaRng;

use crate::configuration::config::EventKind;
use crate::error::Result;
use crate::simulation::engine::{break_apart_with, step, unglue};
use crate::simulation::layout::place_boundary_circle;
use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Body, NVec2, System};

#[derive(Debug, Clone)]
pub struct Driver {
    system: System,
    parameters: Parameters,
    rng: ChaChaRng,
    insert_counter: u32, // counts up to the boundary period
    gravity_mode: usize, // index into `parameters.gravities`
}

impl Driver {
    pub fn new(scenario: Scenario) -> Result<Self> {
        let Scenario { parameters, system, rng } = scenario;
        parameters.validate()?;

        Ok(Self {
            insert_counter: parameters.boundary.start,
            system,
            parameters,
            rng,
            gravity_mode: 0,
        })
    }

    /// Advance one tick: maybe insert a boundary circle, then run one engine step
    pub fn tick(&mut self) -> Result<()> {
        let period = self.parameters.boundary.period;
        if period > 0 {
            self.insert_counter = self.insert_counter.saturating_add(1);
            if self.insert_counter >= period {
                self.insert_counter -= period;
                self.insert_boundary_circle()?;
            }
        }

        let g = self.gravity();
        step(&mut self.system.bodies, g);
        self.system.ticks += 1;
        Ok(())
    }

    fn insert_boundary_circle(&mut self) -> Result<()> {
        let b = &self.parameters.boundary;
        place_boundary_circle(
            &mut self.rng,
            &mut self.system.bodies,
            self.parameters.width,
            self.parameters.height,
            b.x_margin,
            b.y_margin,
            b.radius_min,
            b.radius_max,
        )?;

        if let Some(body) = self.system.bodies.last() {
            log::debug!(
                "tick {}: boundary circle at ({:.0}, {:.0}) r={}, {} bodies",
                self.system.ticks,
                body.position.x,
                body.position.y,
                body.radius,
                self.system.bodies.len()
            );
        }
        Ok(())
    }

    /// Unglue everything and advance to the next gravity mode
    pub fn toggle(&mut self) {
        unglue(&mut self.system.bodies);
        self.gravity_mode = (self.gravity_mode + 1) % self.parameters.gravities.len();
        log::info!(
            "tick {}: gravity mode {} (g = {})",
            self.system.ticks,
            self.gravity_mode,
            self.gravity()
        );
    }

    /// Blow every body apart with the configured break settings
    pub fn break_apart(&mut self) {
        let p = &self.parameters;
        break_apart_with(&mut self.system.bodies, p.break_constant, p.time_skip, p.break_mode);
        log::debug!(
            "tick {}: break apart ({:?}, k = {}, skip = {})",
            self.system.ticks,
            p.break_mode,
            p.break_constant,
            p.time_skip
        );
    }

    /// React to one input event. `Break(())` tells the caller to stop ticking.
    pub fn handle(&mut self, event: EventKind) -> ControlFlow<()> {
        match event {
            EventKind::Toggle => self.toggle(),
            EventKind::Break => self.break_apart(),
            EventKind::Quit => {
                log::info!("tick {}: quit requested", self.system.ticks);
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }

    /// Position and radius of every body, in collection order
    pub fn frame(&self) -> impl Iterator<Item = (NVec2, f64)> + '_ {
        self.system.bodies.iter().map(|b| (b.position, b.radius))
    }

    /// Gravitational constant of the current mode
    pub fn gravity(&self) -> f64 {
        self.parameters.gravities[self.gravity_mode]
    }

    pub fn gravity_mode(&self) -> usize {
        self.gravity_mode
    }

    pub fn bodies(&self) -> &[Body] {
        &self.system.bodies
    }

    pub fn ticks(&self) -> u64 {
        self.system.ticks
    }

    pub fn glued_count(&self) -> usize {
        self.system.bodies.iter().filter(|b| b.glued).count()
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }
}
