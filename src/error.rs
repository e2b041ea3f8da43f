use thiserror::Error;

/// Errors reported by [TrailGrid](crate::TrailGrid) operations.
///
/// A search that explores everything without reaching the target is not an
/// error: [solve](crate::TrailGrid::solve) returns `Ok(false)` for that, so
/// callers can tell "no path exists" apart from malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// A coordinate fell outside `[1, rows] x [1, cols]`.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: i32,
        col: i32,
        rows: i32,
        cols: i32,
    },

    /// Grid construction was attempted with a non-positive dimension.
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: i32, cols: i32 },
}

/// Result type alias for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;
