//! The backtracking engine and its move-selection heuristic. Selection and
//! recursion are kept apart from the grid itself so the marking rules in
//! [TrailGrid] stay independent of search policy.

use crate::error::Result;
use crate::moves::{Move, Topology};
use crate::trail_grid::TrailGrid;
use itertools::Itertools;
use log::info;

/// Straight-line distance between two cells, truncated toward zero.
///
/// Truncation deliberately creates ties between moves whose true distances
/// share an integer part; ties are broken by probing order downstream.
pub fn distance(from_row: i32, from_col: i32, to_row: i32, to_col: i32) -> i32 {
    let dr = (to_row - from_row) as f64;
    let dc = (to_col - from_col) as f64;
    (dr * dr + dc * dc).sqrt() as i32
}

fn distance_to(from: Move, to: Move) -> i32 {
    distance(from.row, from.col, to.row, to.col)
}

/// Removes and returns the candidate nearest to `target`. The earliest-listed
/// candidate wins ties. The list must be non-empty.
fn take_nearest(candidates: &mut Vec<Move>, target: Move) -> Move {
    let ix = candidates
        .iter()
        .position_min_by_key(|m| distance_to(**m, target))
        .unwrap();
    candidates.remove(ix)
}

/// Knight-mode selection: a candidate sitting exactly one knight jump from
/// the target is taken immediately regardless of distance rank, so the search
/// finishes in one more jump when it can. Otherwise falls back to
/// nearest-first.
fn take_knight_choice(candidates: &mut Vec<Move>, target: Move) -> Move {
    if let Some(ix) = candidates.iter().position(|m| m.is_knight_jump_to(target)) {
        return candidates.remove(ix);
    }
    take_nearest(candidates, target)
}

impl TrailGrid {
    /// Searches for a path from `(start_row, start_col)` to
    /// `(end_row, end_col)` under the given topology, marking visited cells
    /// with their step number as it goes.
    ///
    /// Returns `Ok(true)` with the path's step numbers 1..K left written into
    /// the grid, or `Ok(false)` with every mark the search wrote cleared
    /// again. Cells that were already nonzero when the call was made act as
    /// blocked: move generation never offers them. Endpoints outside the
    /// grid are an error, distinct from the no-path outcome.
    ///
    /// The number of abandoned branches is available afterwards through
    /// [failed_branches](Self::failed_branches).
    pub fn solve(
        &mut self,
        start_row: i32,
        start_col: i32,
        end_row: i32,
        end_col: i32,
        topology: Topology,
    ) -> Result<bool> {
        self.check_bounds(start_row, start_col)?;
        self.check_bounds(end_row, end_col)?;
        let start = Move::new(start_row, start_col);
        let target = Move::new(end_row, end_col);
        self.failed_branches = 0;
        info!("searching for a {topology:?} path from {start} to {target}");
        let found = self.backtrack(start, target, topology, 1);
        if found {
            info!(
                "found a path from {start} to {target} after {} failed branches",
                self.failed_branches
            );
        } else {
            // The root call marked the start cell; its caller is here.
            self.stamp(start, 0);
            info!(
                "exhausted the search from {start} to {target}, {} failed branches",
                self.failed_branches
            );
        }
        Ok(found)
    }

    /// One path step. Marks `current`, succeeds if it is the target, and
    /// otherwise tries candidates best-first, undoing each child that fails.
    /// A call never unmarks its own cell; that is its caller's job.
    fn backtrack(&mut self, current: Move, target: Move, topology: Topology, step: u32) -> bool {
        self.stamp(current, step);
        if current == target {
            return true;
        }
        let mut candidates = self.available_moves(current.row, current.col, topology);
        while !candidates.is_empty() {
            let next = match topology {
                Topology::King => take_nearest(&mut candidates, target),
                Topology::Knight => take_knight_choice(&mut candidates, target),
            };
            if self.backtrack(next, target, topology, step + 1) {
                return true;
            }
            self.failed_branches += 1;
            self.stamp(next, 0);
        }
        false
    }
}
