use crate::error::{GridError, Result};
use crate::moves::{Move, Topology};
use core::fmt;
use grid_util::grid::{Grid, SimpleGrid};
use itertools::Itertools;

/// A rectangular grid of step marks over which paths are searched.
///
/// Every cell holds a [u32]: 0 means unvisited, a positive value N means the
/// cell is the N-th step of the path currently under construction. Cells are
/// addressed 1-based, row in `[1, rows]` and column in `[1, cols]`.
/// [solve](Self::solve) mutates the marks in place and leaves the full path
/// written into the grid on success.
#[derive(Clone, Debug)]
pub struct TrailGrid {
    cells: SimpleGrid<u32>,
    pub(crate) failed_branches: u64,
}

impl TrailGrid {
    /// Constructs an all-zero grid. Fails with
    /// [InvalidDimensions](GridError::InvalidDimensions) unless both
    /// dimensions are positive.
    pub fn new(rows: i32, cols: i32) -> Result<TrailGrid> {
        if rows < 1 || cols < 1 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        Ok(TrailGrid {
            cells: SimpleGrid::new(cols as usize, rows as usize, 0),
            failed_branches: 0,
        })
    }

    pub fn rows(&self) -> i32 {
        self.cells.height() as i32
    }

    pub fn cols(&self) -> i32 {
        self.cells.width() as i32
    }

    /// Number of dead-end branches abandoned by the most recent
    /// [solve](Self::solve) call.
    pub fn failed_branches(&self) -> u64 {
        self.failed_branches
    }

    /// Returns the mark stored at `(row, col)`, or
    /// [OutOfBounds](GridError::OutOfBounds).
    pub fn get(&self, row: i32, col: i32) -> Result<u32> {
        self.check_bounds(row, col)?;
        Ok(self.value_at(Move::new(row, col)))
    }

    /// Overwrites the mark stored at `(row, col)`, or fails with
    /// [OutOfBounds](GridError::OutOfBounds).
    pub fn set(&mut self, row: i32, col: i32, value: u32) -> Result<()> {
        self.check_bounds(row, col)?;
        self.stamp(Move::new(row, col), value);
        Ok(())
    }

    /// Whether `(row, col)` is in bounds and unvisited. This is the single
    /// predicate deciding move candidacy: a marked cell is never offered as
    /// a destination.
    pub fn is_open(&self, row: i32, col: i32) -> bool {
        self.check_bounds(row, col).is_ok() && self.value_at(Move::new(row, col)) == 0
    }

    /// Enumerates the open destinations reachable from `(row, col)` in one
    /// move, in the topology's fixed probing order. Pure with respect to the
    /// current marks.
    pub fn available_moves(&self, row: i32, col: i32, topology: Topology) -> Vec<Move> {
        let from = Move::new(row, col);
        topology
            .offsets()
            .iter()
            .map(|&d| from.offset_by(d))
            .filter(|m| self.is_open(m.row, m.col))
            .collect()
    }

    /// The marked cells in step order. After a successful solve this is the
    /// found path from start to target.
    pub fn marked_path(&self) -> Vec<Move> {
        (1..=self.rows())
            .cartesian_product(1..=self.cols())
            .map(|(row, col)| (self.value_at(Move::new(row, col)), Move::new(row, col)))
            .filter(|&(value, _)| value != 0)
            .sorted_by_key(|&(value, _)| value)
            .map(|(_, cell)| cell)
            .collect()
    }

    pub(crate) fn check_bounds(&self, row: i32, col: i32) -> Result<()> {
        if row < 1 || row > self.rows() || col < 1 || col > self.cols() {
            return Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok(())
    }

    /// Unchecked accessors for cells the search already knows are in bounds.
    pub(crate) fn value_at(&self, cell: Move) -> u32 {
        self.cells.get((cell.col - 1) as usize, (cell.row - 1) as usize)
    }

    pub(crate) fn stamp(&mut self, cell: Move, value: u32) {
        self.cells
            .set((cell.col - 1) as usize, (cell.row - 1) as usize, value);
    }
}

impl fmt::Display for TrailGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 1..=self.rows() {
            for col in 1..=self.cols() {
                write!(f, "{:<4}", self.value_at(Move::new(row, col)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_zeroed() {
        let grid = TrailGrid::new(3, 4).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        for row in 1..=3 {
            for col in 1..=4 {
                assert_eq!(grid.get(row, col).unwrap(), 0);
            }
        }
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        assert_eq!(
            TrailGrid::new(0, 3).unwrap_err(),
            GridError::InvalidDimensions { rows: 0, cols: 3 }
        );
        assert!(TrailGrid::new(3, -1).is_err());
    }

    #[test]
    fn get_set_bounds_are_checked() {
        let mut grid = TrailGrid::new(2, 3).unwrap();
        assert_eq!(
            grid.get(0, 1).unwrap_err(),
            GridError::OutOfBounds {
                row: 0,
                col: 1,
                rows: 2,
                cols: 3
            }
        );
        assert!(grid.get(1, 4).is_err());
        assert!(grid.set(3, 1, 7).is_err());
        grid.set(2, 3, 7).unwrap();
        assert_eq!(grid.get(2, 3).unwrap(), 7);
    }

    #[test]
    fn is_open_conflates_bounds_and_marks() {
        let mut grid = TrailGrid::new(2, 2).unwrap();
        assert!(grid.is_open(1, 1));
        assert!(!grid.is_open(0, 1));
        assert!(!grid.is_open(1, 3));
        grid.set(1, 1, 5).unwrap();
        assert!(!grid.is_open(1, 1));
    }

    #[test]
    fn king_moves_from_corner_keep_probing_order() {
        let grid = TrailGrid::new(3, 3).unwrap();
        assert_eq!(
            grid.available_moves(1, 1, Topology::King),
            vec![Move::new(1, 2), Move::new(2, 2), Move::new(2, 1)]
        );
    }

    #[test]
    fn knight_moves_from_corner() {
        let grid = TrailGrid::new(3, 3).unwrap();
        assert_eq!(
            grid.available_moves(1, 1, Topology::Knight),
            vec![Move::new(2, 3), Move::new(3, 2)]
        );
    }

    #[test]
    fn visited_cells_are_not_candidates() {
        let mut grid = TrailGrid::new(3, 3).unwrap();
        grid.set(1, 2, 9).unwrap();
        assert_eq!(
            grid.available_moves(1, 1, Topology::King),
            vec![Move::new(2, 2), Move::new(2, 1)]
        );
    }

    #[test]
    fn renders_fixed_width_columns() {
        let mut grid = TrailGrid::new(2, 2).unwrap();
        grid.set(1, 1, 1).unwrap();
        grid.set(1, 2, 12).unwrap();
        assert_eq!(grid.to_string(), "1   12  \n0   0   \n");
    }

    #[test]
    fn marked_path_orders_by_step() {
        let mut grid = TrailGrid::new(2, 2).unwrap();
        grid.set(2, 1, 2).unwrap();
        grid.set(1, 1, 1).unwrap();
        grid.set(2, 2, 3).unwrap();
        assert_eq!(
            grid.marked_path(),
            vec![Move::new(1, 1), Move::new(2, 1), Move::new(2, 2)]
        );
    }
}
