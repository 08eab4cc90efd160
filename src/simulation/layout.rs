//! Initial and incremental body placement
//!
//! Generators only place bodies, they never simulate. Randomness comes from the
//! `rng` argument so a seeded generator reproduces a layout exactly.
//!
//! - [`distribute_circles`]    non-overlapping circles on a sparse grid
//! - [`place_boundary_circle`] one circle near an edge of the world
//! - [`create_center_star`]    a centre body surrounded by a ring of bodies

use std::f64::consts::PI;

use rand::seq::index;
use rand::Rng;

use crate::error::{Result, SimError};
use crate::simulation::states::{Body, NVec2};

/// Integer cell `[x0, x1] x [y0, y1]` that holds at most one circle centre
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub x0: u32,
    pub x1: u32,
    pub y0: u32,
    pub y1: u32,
}

fn check_radius_range(radius_min: u32, radius_max: u32) -> Result<()> {
    if radius_min == 0 {
        return Err(SimError::invalid("radius_min", "must be positive"));
    }
    if radius_min > radius_max {
        return Err(SimError::invalid(
            "radius_max",
            format!("{radius_max} is smaller than radius_min {radius_min}"),
        ));
    }
    Ok(())
}

fn check_bounds(x_bound: u32, y_bound: u32) -> Result<()> {
    if x_bound == 0 {
        return Err(SimError::invalid("x_bound", "must be positive"));
    }
    if y_bound == 0 {
        return Err(SimError::invalid("y_bound", "must be positive"));
    }
    Ok(())
}

fn check_positive(name: &'static str, value: f64) -> Result<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(SimError::invalid(name, format!("must be positive and finite, got {value}")))
    }
}

/// Number of cells of width `side` that fit along `[0, bound]` when every
/// other cell is left empty
fn cells_along(bound: u32, side: u64) -> u64 {
    let bound = u64::from(bound);
    if bound < side {
        0
    } else {
        (bound - side) / (2 * side) + 1
    }
}

/// Row-major index over the populated grid cells, computed on demand
struct CellGrid {
    side: u64,
    rows: u64,
    len: u64,
}

impl CellGrid {
    fn new(radius_max: u32, x_bound: u32, y_bound: u32) -> Self {
        let side = 2 * u64::from(radius_max);
        if side == 0 {
            return Self { side, rows: 0, len: 0 };
        }
        let columns = cells_along(x_bound, side);
        let rows = cells_along(y_bound, side);
        Self { side, rows, len: columns * rows }
    }

    fn cell(&self, k: u64) -> Cell {
        let (i, j) = (k / self.rows, k % self.rows);
        let s = self.side;
        // all corners are <= the u32 bounds, so the casts are lossless
        Cell {
            x0: (2 * i * s) as u32,
            x1: ((2 * i + 1) * s) as u32,
            y0: (2 * j * s) as u32,
            y1: ((2 * j + 1) * s) as u32,
        }
    }
}

/// Every populated grid cell of side `2 * radius_max` inside the rectangle.
///
/// Cell `(i, j)` spans `[2i s, (2i + 1) s] x [2j s, (2j + 1) s]`. Two centres in
/// different cells are at least `s` apart, which is never less than the sum of
/// their radii.
pub fn grid_cells(radius_max: u32, x_bound: u32, y_bound: u32) -> Vec<Cell> {
    let grid = CellGrid::new(radius_max, x_bound, y_bound);
    (0..grid.len).map(|k| grid.cell(k)).collect()
}

/// Place up to `count` non-overlapping circles inside `[0, x_bound] x [0, y_bound]`.
///
/// A uniformly random subset of `min(count, cells)` grid cells is filled one
/// circle each, at a uniformly random integer position in the cell with a
/// uniformly random integer radius in `[radius_min, radius_max]`. Asking for more circles than there are cells
/// returns every cell filled rather than an error. Only the chosen cells are
/// materialised, so a small count on a huge grid stays cheap.
pub fn distribute_circles<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    radius_min: u32,
    radius_max: u32,
    x_bound: u32,
    y_bound: u32,
) -> Result<Vec<Body>> {
    check_radius_range(radius_min, radius_max)?;
    check_bounds(x_bound, y_bound)?;

    let grid = CellGrid::new(radius_max, x_bound, y_bound);
    let available = usize::try_from(grid.len).unwrap_or(usize::MAX);

    if count > available {
        log::warn!(
            "distribute_circles: {count} circles requested but only {available} cells fit, placing {available}"
        );
    }

    let chosen = index::sample(rng, available, count.min(available));
    let circles = chosen
        .iter()
        .map(|k| {
            let c = grid.cell(k as u64);
            let x = rng.gen_range(c.x0..=c.x1);
            let y = rng.gen_range(c.y0..=c.y1);
            let r = rng.gen_range(radius_min..=radius_max);
            Body::new(NVec2::new(f64::from(x), f64::from(y)), f64::from(r))
        })
        .collect();

    Ok(circles)
}

/// Append one circle inside a margin band along the edge of the world.
///
/// With even odds the circle goes in the top/bottom bands (uniform x, y within
/// `y_margin` of either horizontal edge) or the left/right bands (uniform y, x
/// within `x_margin` of either vertical edge). The new circle may overlap
/// existing bodies.
#[allow(clippy::too_many_arguments)]
pub fn place_boundary_circle<R: Rng + ?Sized>(
    rng: &mut R,
    bodies: &mut Vec<Body>,
    x_bound: u32,
    y_bound: u32,
    x_margin: u32,
    y_margin: u32,
    radius_min: u32,
    radius_max: u32,
) -> Result<()> {
    check_radius_range(radius_min, radius_max)?;
    check_bounds(x_bound, y_bound)?;
    if x_margin > x_bound {
        return Err(SimError::invalid("x_margin", format!("{x_margin} exceeds x_bound {x_bound}")));
    }
    if y_margin > y_bound {
        return Err(SimError::invalid("y_margin", format!("{y_margin} exceeds y_bound {y_bound}")));
    }

    let (x, y) = if rng.gen_bool(0.5) {
        let x = rng.gen_range(0..=x_bound);
        let y = edge_band(rng, y_bound, y_margin);
        (x, y)
    } else {
        let x = edge_band(rng, x_bound, x_margin);
        let y = rng.gen_range(0..=y_bound);
        (x, y)
    };
    let r = rng.gen_range(radius_min..=radius_max);

    bodies.push(Body::new(NVec2::new(f64::from(x), f64::from(y)), f64::from(r)));
    Ok(())
}

// uniform in [0, margin] or [bound - margin, bound], each band equally likely
fn edge_band<R: Rng + ?Sized>(rng: &mut R, bound: u32, margin: u32) -> u32 {
    if rng.gen_bool(0.5) {
        rng.gen_range(0..=margin)
    } else {
        rng.gen_range(bound - margin..=bound)
    }
}

/// Centre body of `center_radius` in the middle of the world plus `sides`
/// bodies of `outer_radius` evenly spaced on a ring of radius
/// `center_radius + outer_radius`.
///
/// Outer body `k` sits at `(cx + sin(k θ) R, cy + cos(k θ) R)` with
/// `θ = 2π / sides`, so the first one is directly below the centre in screen
/// coordinates.
pub fn create_center_star(
    x_bound: f64,
    y_bound: f64,
    center_radius: f64,
    outer_radius: f64,
    sides: usize,
) -> Result<Vec<Body>> {
    check_positive("x_bound", x_bound)?;
    check_positive("y_bound", y_bound)?;
    check_positive("center_radius", center_radius)?;
    check_positive("outer_radius", outer_radius)?;

    let center = NVec2::new(x_bound / 2.0, y_bound / 2.0);
    let ring = center_radius + outer_radius;

    let mut bodies = Vec::with_capacity(sides + 1);
    bodies.push(Body::new(center, center_radius));

    for k in 0..sides {
        let angle = k as f64 * 2.0 * PI / sides as f64;
        let offset = NVec2::new(angle.sin(), angle.cos()) * ring;
        bodies.push(Body::new(center + offset, outer_radius));
    }
    Ok(bodies)
}
