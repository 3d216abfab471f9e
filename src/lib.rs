//! # u-tsp
//!
//! Genotype representation and genetic operators for solving the Traveling
//! Salesman Problem with a permutation-encoded evolutionary algorithm.
//!
//! Population management, selection and termination belong to the caller;
//! this crate provides the chromosome an outer loop breeds.
//!
//! ## Modules
//!
//! - [`models`] — City type and the [`Cities`](models::Cities) collection trait
//! - [`distance`] — Distance matrix and closed-tour length
//! - [`ga`] — Chromosome, swap mutation, order crossover, fitness, validity
//! - [`error`] — Precondition errors at the API boundary

pub mod distance;
pub mod error;
pub mod ga;
pub mod models;

pub use error::{Result, TourError};
