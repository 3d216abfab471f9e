//! Distance matrices.
//!
//! Provides a dense distance matrix and closed-tour length evaluation.

mod matrix;

pub use matrix::DistanceMatrix;
