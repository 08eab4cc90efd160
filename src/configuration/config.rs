//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`WorldConfig`]    – size of the simulated rectangle
//! - [`GravityConfig`]  – gravity-mode cycle and break-apart settings
//! - [`BoundaryConfig`] – periodic boundary-circle insertion
//! - [`LayoutConfig`]   – how the initial bodies are generated
//! - [`RunConfig`]      – headless run length and logging cadence
//! - [`EventConfig`]    – scripted input events for headless runs
//! - [`ScenarioConfig`] – top-level wrapper used to load a scenario from YAML
//!
//! Every section is optional, missing fields fall back to the 500x400 star
//! demo below.
//!
//! # YAML format
//!
//! ```yaml
//! seed: 42
//!
//! world:
//!   width: 500
//!   height: 400
//!
//! gravity:
//!   cycle: [100.0, -1.0]     # toggled in order, wraps around
//!   break_constant: -500.0   # negative pushes bodies apart
//!   time_skip: 10.0
//!   break_mode: last_pair_wins   # or accumulate
//!
//! boundary:
//!   period: 100              # ticks between insertions, 0 disables
//!   start: 200               # initial insertion counter
//!   x_margin: 125
//!   y_margin: 100
//!   radius_min: 7
//!   radius_max: 13
//!
//! layout:
//!   kind: star               # or grid { count, radius_min, radius_max }, or empty
//!   center_radius: 13.0
//!   outer_radius: 7.0
//!   sides: 5
//!
//! run:
//!   ticks: 2000
//!   log_every: 250
//!
//! events:
//!   - { tick: 600, event: toggle }
//!   - { tick: 900, event: break }
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::simulation::engine::{BreakMode, DEFAULT_TIME_SKIP};

/// Size of the simulated rectangle, origin at the top-left corner
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WorldConfig {
    pub width: u32,  // world width in pixels / world units
    pub height: u32, // world height in pixels / world units
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self { width: 500, height: 400 }
    }
}

/// Gravity-mode cycle and break-apart settings
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct GravityConfig {
    pub cycle: Vec<f64>,        // gravitational constants selected by the mode index
    pub break_constant: f64,    // break-apart strength
    pub time_skip: f64,         // ticks jumped after a break-apart
    pub break_mode: BreakMode,  // overwrite per pair or accumulate impulses
}

impl Default for GravityConfig {
    fn default() -> Self {
        Self {
            cycle: vec![100.0, -1.0],
            break_constant: -500.0,
            time_skip: DEFAULT_TIME_SKIP,
            break_mode: BreakMode::LastPairWins,
        }
    }
}

/// Periodic insertion of circles near the world edges
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct BoundaryConfig {
    pub period: u32,     // ticks between insertions, 0 disables insertion
    pub start: u32,      // initial value of the insertion counter
    pub x_margin: u32,   // width of the left/right bands
    pub y_margin: u32,   // height of the top/bottom bands
    pub radius_min: u32, // smallest inserted radius
    pub radius_max: u32, // largest inserted radius
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self {
            period: 100,
            start: 200,
            x_margin: 125,
            y_margin: 100,
            radius_min: 7,
            radius_max: 13,
        }
    }
}

/// Initial body layout, selected by `kind`
#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "kind")]
pub enum LayoutConfig {
    /// A centre body ringed by `sides` outer bodies
    #[serde(rename = "star")]
    Star {
        center_radius: f64,
        outer_radius: f64,
        sides: usize,
    },

    /// Up to `count` non-overlapping circles on a sparse grid
    #[serde(rename = "grid")]
    Grid {
        count: usize,
        radius_min: u32,
        radius_max: u32,
    },

    /// Start with no bodies, boundary insertion fills the world
    #[serde(rename = "empty")]
    Empty,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::Star {
            center_radius: 13.0,
            outer_radius: 7.0,
            sides: 5,
        }
    }
}

/// Headless run settings used by the CLI
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct RunConfig {
    pub ticks: u64,     // number of ticks to run
    pub log_every: u64, // progress log interval in ticks, 0 disables
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { ticks: 1000, log_every: 100 }
    }
}

/// Input event kinds a presentation shell can deliver
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    #[serde(rename = "toggle")] // unglue and advance the gravity mode
    Toggle,
    #[serde(rename = "break")] // break every body apart
    Break,
    #[serde(rename = "quit")] // stop the run
    Quit,
}

/// An input event replayed at a given tick
#[derive(Deserialize, Debug, Clone)]
pub struct EventConfig {
    pub tick: u64,        // tick before which the event is delivered
    pub event: EventKind, // what happens
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default = "default_seed")]
    pub seed: u64, // deterministic seed for every random draw
    #[serde(default)]
    pub world: WorldConfig,
    #[serde(default)]
    pub gravity: GravityConfig,
    #[serde(default)]
    pub boundary: BoundaryConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub events: Vec<EventConfig>,
}

fn default_seed() -> u64 {
    42
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            world: WorldConfig::default(),
            gravity: GravityConfig::default(),
            boundary: BoundaryConfig::default(),
            layout: LayoutConfig::default(),
            run: RunConfig::default(),
            events: Vec::new(),
        }
    }
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_yaml::from_reader(reader)?)
    }
}
