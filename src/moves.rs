use core::fmt;

/// The eight king steps around a cell, in the fixed probing order used by
/// move generation: left, upper-left, up, upper-right, right, lower-right,
/// down, lower-left. Offsets are (row delta, column delta).
pub(crate) const KING_OFFSETS: [(i32, i32); 8] = [
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
];

/// The eight knight jumps around a cell, in fixed probing order.
pub(crate) const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
];

/// The move-generation rule a search runs under, fixed for the whole search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// Steps to any of the eight adjacent cells.
    King,
    /// L-shaped jumps, two cells along one axis and one along the other.
    Knight,
}

impl Topology {
    pub(crate) fn offsets(self) -> &'static [(i32, i32); 8] {
        match self {
            Topology::King => &KING_OFFSETS,
            Topology::Knight => &KNIGHT_OFFSETS,
        }
    }
}

/// A destination cell, addressed by 1-based row and column.
///
/// Produced by move generation as a candidate and consumed by the search
/// within one recursive call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: i32,
    pub col: i32,
}

impl Move {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The cell reached by applying `(dr, dc)` to this one.
    #[inline]
    pub(crate) fn offset_by(self, (dr, dc): (i32, i32)) -> Self {
        Self::new(self.row + dr, self.col + dc)
    }

    /// Whether `other` is exactly one king step away.
    pub fn is_king_step_to(self, other: Move) -> bool {
        KING_OFFSETS.iter().any(|&d| self.offset_by(d) == other)
    }

    /// Whether `other` is exactly one knight jump away.
    pub fn is_knight_jump_to(self, other: Move) -> bool {
        KNIGHT_OFFSETS.iter().any(|&d| self.offset_by(d) == other)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
