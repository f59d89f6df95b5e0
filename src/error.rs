//! Error types.
//!
//! Every error is a precondition violation detected before the
//! evolutionary loop starts; the loop itself cannot fail.

/// Errors returned when a run cannot start.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("point list is empty: at least one point is required")]
    EmptyPoints,
    #[error("population_size must be at least 1")]
    ZeroPopulation,
    #[error("elite_ratio must be within [0, 1], got {0}")]
    InvalidEliteRatio(f64),
    #[error("point {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },
    #[error("coordinates span too wide a range: route lengths would overflow f64")]
    CoordinateRangeTooLarge,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
