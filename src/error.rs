//! Error types for chromosome construction and genetic operators.

use thiserror::Error;

use crate::ga::Violation;

/// A rejected precondition at the public API boundary.
///
/// Broken permutations found inside the crate are reported as
/// [`Violation`]s; this type wraps one only when the caller supplied the
/// broken order.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TourError {
    #[error("too few cities: found {found}, need at least {min}")]
    TooFewCities { found: usize, min: usize },

    #[error("parents differ in length: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("parents refer to different city collections")]
    ForeignCities,

    #[error("invalid swap of positions {first} and {second} for length {len}")]
    InvalidSwap { first: usize, second: usize, len: usize },

    #[error("invalid crossover range [{begin}, {end}) for length {len}")]
    InvalidRange { begin: usize, end: usize, len: usize },

    #[error("degenerate tour distance: {distance}")]
    DegenerateDistance { distance: f64 },

    #[error("invalid order: {0}")]
    InvalidOrder(#[from] Violation),
}

pub type Result<T> = std::result::Result<T, TourError>;
