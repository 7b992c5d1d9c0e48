use thiserror::Error;

/// Rejected clustering parameters.
///
/// Raised by [`crate::Dbscan::new`] before any index is built.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum ClusterError {
    /// The neighborhood radius was zero or negative.
    #[error("epsilon must be > 0, got {epsilon}")]
    InvalidEpsilon {
        /// Radius supplied by the caller.
        epsilon: i32,
    },
    /// The core-point threshold was zero or negative.
    #[error("minimum core points must be > 0, got {min_points}")]
    InvalidMinPoints {
        /// Threshold supplied by the caller.
        min_points: i32,
    },
}
