//! One percolation-threshold sample per run.

use sp_core::{EventRng, PercolationParams, SpResult};

use crate::PercolationGrid;

/// Site-percolation threshold of the infinite square lattice.  Finite grids
/// scatter around it and converge to it as `n` grows.
pub const SQUARE_SITE_THRESHOLD: f64 = 0.592_746_050_792_10;

/// Open the sites of a fresh grid in uniformly random order until it
/// percolates, and return the fraction of sites open at that point.
///
/// `params` must already be valid.  A fully open grid always percolates, so
/// the result lies in `(0, 1]`.
pub fn sample_threshold(params: &PercolationParams, rng: &mut EventRng) -> f64 {
    let mut grid = PercolationGrid::new(params);
    let mut order: Vec<u32> = (0..params.site_count()).map(|i| i as u32).collect();
    rng.shuffle(&mut order);
    for site in order {
        grid.open_site(site);
        if grid.percolates() {
            break;
        }
    }
    grid.open_fraction()
}

/// Validate `grid_size`, then [`sample_threshold`].
pub fn percolation_threshold(grid_size: u32, rng: &mut EventRng) -> SpResult<f64> {
    let params = PercolationParams::new(grid_size)?;
    Ok(sample_threshold(&params, rng))
}
