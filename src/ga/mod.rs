//! Genetic algorithm components for the TSP.
//!
//! - [`Chromosome`] — Permutation chromosome with its own random source
//! - [`operators`] — Random draws behind mutation and crossover
//! - [`check_permutation`] — Structured permutation check ([`Violation`])
//! - [`ChromosomeConfig`] — Seeding and validation settings

mod chromosome;
mod config;
pub mod operators;
mod validity;

pub use chromosome::{Chromosome, MIN_CITIES};
pub use config::ChromosomeConfig;
pub use validity::{check_permutation, Violation};
