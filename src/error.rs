//! Error types for shapekit operations.

use thiserror::Error;

/// Errors that can occur while building or transforming shapes.
///
/// Degenerate geometry (collinear circumcircle points, parallel segments,
/// disjoint rectangles) is not an error; those queries return `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeomError {
    /// A coordinate pair was divided by exactly zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A shape was requested with too few sides or segments.
    #[error("cannot build {shape} with {got} sides (need at least {min})")]
    InvalidConstruction {
        /// Kind of shape being built.
        shape: &'static str,
        /// Minimum accepted count.
        min: usize,
        /// Count that was requested.
        got: usize,
    },

    /// A vertex index was outside the polygon.
    #[error("vertex index {index} out of bounds for polygon with {len} vertices")]
    IndexOutOfBounds {
        /// Requested index.
        index: usize,
        /// Number of vertices at the time of the call.
        len: usize,
    },
}

/// Convenience alias for results using [`GeomError`].
pub type Result<T> = std::result::Result<T, GeomError>;
