//! `sp-percolation`: at what fraction of open sites does a square grid
//! start to conduct from top to bottom?
//!
//! Sites of an `n × n` grid start blocked and are opened one at a time in a
//! uniformly random order.  The grid *percolates* once some open site in the
//! top row is joined to some open site in the bottom row through open
//! neighbours (up, down, left, right).  The fraction of open sites at that
//! moment is one threshold sample; a Monte-Carlo batch of samples estimates
//! the site-percolation threshold `p* ≈ 0.5927`.
//!
//! | Item              | Contents                                               |
//! |-------------------|--------------------------------------------------------|
//! | [`union_find`]    | `UnionFind`, weighted quick-union with path halving    |
//! | [`grid`]          | `PercolationGrid`, open / full / percolates queries    |
//! | [`threshold`]     | `sample_threshold`, `percolation_threshold`            |

pub mod grid;
pub mod threshold;
pub mod union_find;


pub use grid::PercolationGrid;
pub use threshold::{SQUARE_SITE_THRESHOLD, percolation_threshold, sample_threshold};
pub use union_find::UnionFind;
