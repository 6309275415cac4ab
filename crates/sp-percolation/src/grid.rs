//! The `n × n` site grid.
//!
//! # Layout
//!
//! Site `(row, col)` (both zero-based, row 0 on top) has index
//! `row * n + col`.  Two virtual sites follow the real ones:
//!
//! ```text
//! top    = n²       joined to every open site in row 0
//! bottom = n² + 1   joined to every open site in row n - 1
//! ```
//!
//! The grid percolates exactly when `top` and `bottom` are connected.
//!
//! # Backwash
//!
//! With a single union-find, once the grid percolates every open site
//! touching the bottom row is connected to `top` through `bottom`, so it
//! would wrongly report as full.  A second union-find without the `bottom`
//! site answers [`PercolationGrid::is_full`].

use sp_core::{PercolationParams, SpError, SpResult};

use crate::UnionFind;

#[derive(Clone, Debug)]
pub struct PercolationGrid {
    n:          u32,
    open:       Vec<bool>,
    open_sites: usize,
    /// Real sites plus `top` and `bottom`.
    spanning:   UnionFind,
    /// Real sites plus `top` only.
    filling:    UnionFind,
}

impl PercolationGrid {
    /// All sites blocked.  `params` must already be valid.
    pub fn new(params: &PercolationParams) -> Self {
        let sites = params.site_count();
        Self {
            n:          params.grid_size,
            open:       vec![false; sites],
            open_sites: 0,
            spanning:   UnionFind::new(sites + 2),
            filling:    UnionFind::new(sites + 1),
        }
    }

    /// Validate `grid_size`, then [`new`](Self::new).
    pub fn with_size(grid_size: u32) -> SpResult<Self> {
        Ok(Self::new(&PercolationParams::new(grid_size)?))
    }

    /// Side length `n`.
    pub fn size(&self) -> u32 {
        self.n
    }

    pub fn open_sites(&self) -> usize {
        self.open_sites
    }

    /// Open sites as a fraction of all `n²` sites.
    pub fn open_fraction(&self) -> f64 {
        self.open_sites as f64 / self.open.len() as f64
    }

    /// Open `(row, col)`.  Returns `false` if it was already open.
    pub fn open(&mut self, row: u32, col: u32) -> SpResult<bool> {
        let site = self.index(row, col)?;
        Ok(self.open_site(site))
    }

    pub fn is_open(&self, row: u32, col: u32) -> SpResult<bool> {
        let site = self.index(row, col)?;
        Ok(self.open[site as usize])
    }

    /// Open and connected to the top row through open sites.
    pub fn is_full(&mut self, row: u32, col: u32) -> SpResult<bool> {
        let site = self.index(row, col)?;
        let top = self.top();
        Ok(self.open[site as usize] && self.filling.connected(site, top))
    }

    pub fn percolates(&mut self) -> bool {
        let (top, bottom) = (self.top(), self.top() + 1);
        self.spanning.connected(top, bottom)
    }

    /// Open the site at flat index `site` (`< n²`).
    pub(crate) fn open_site(&mut self, site: u32) -> bool {
        if self.open[site as usize] {
            return false;
        }
        self.open[site as usize] = true;
        self.open_sites += 1;

        let n = self.n;
        let (row, col) = (site / n, site % n);
        let top = self.top();
        if row == 0 {
            self.spanning.union(site, top);
            self.filling.union(site, top);
        }
        if row == n - 1 {
            self.spanning.union(site, top + 1);
        }

        let neighbours = [
            (col > 0).then(|| site - 1),
            (col + 1 < n).then(|| site + 1),
            (row > 0).then(|| site - n),
            (row + 1 < n).then(|| site + n),
        ];
        for other in neighbours.into_iter().flatten() {
            if self.open[other as usize] {
                self.spanning.union(site, other);
                self.filling.union(site, other);
            }
        }
        true
    }

    #[inline]
    fn top(&self) -> u32 {
        self.n * self.n
    }

    fn index(&self, row: u32, col: u32) -> SpResult<u32> {
        if row >= self.n {
            return Err(SpError::invalid("row", format!("{row} is outside [0, {})", self.n)));
        }
        if col >= self.n {
            return Err(SpError::invalid("col", format!("{col} is outside [0, {})", self.n)));
        }
        Ok(row * self.n + col)
    }
}
