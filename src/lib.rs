//! # grid_backtracking
//!
//! A grid-based path-search puzzle solver. Given a rectangular grid, a start
//! cell and an end cell, it finds a sequence of moves connecting the two by
//! [backtracking](https://en.wikipedia.org/wiki/Backtracking), writing each
//! visited cell's step number into the grid and undoing dead ends. Moves are
//! generated under one of two rules: king-style steps to the eight adjacent
//! cells, or knight-style L-shaped jumps. Candidates are tried
//! nearest-to-target first, so the search heads straight for the goal and
//! only fans out when it has to. Note that this is exhaustive depth-first
//! search: the heuristic trims the average case but gives no bound under
//! adversarial start/end placement.

mod error;
mod moves;
mod solver;
mod trail_grid;

pub use error::{GridError, Result};
pub use moves::{Move, Topology};
pub use solver::distance;
pub use trail_grid::TrailGrid;
