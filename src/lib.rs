pub mod simulation;
pub mod configuration;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Body, System, NVec2};
pub use simulation::engine::{step, break_apart, break_apart_with, unglue, BreakMode, DEFAULT_TIME_SKIP};
pub use simulation::layout::{distribute_circles, place_boundary_circle, create_center_star};
pub use simulation::params::{Parameters, BoundaryParams};
pub use simulation::scenario::Scenario;
pub use simulation::driver::Driver;

pub use configuration::config::{ScenarioConfig, WorldConfig, GravityConfig, BoundaryConfig, LayoutConfig, RunConfig, EventConfig, EventKind};

pub use error::SimError;

pub use benchmark::benchmark::{bench_step, bench_break_curve};
