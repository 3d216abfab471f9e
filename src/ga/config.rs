//! Chromosome configuration.
//!
//! [`ChromosomeConfig`] controls how a chromosome seeds its random source
//! and whether operators re-check the permutation in release builds.

use serde::{Deserialize, Serialize};

/// Configuration for creating chromosomes.
///
/// # Defaults
///
/// ```
/// use u_tsp::ga::ChromosomeConfig;
///
/// let config = ChromosomeConfig::default();
/// assert_eq!(config.seed, None);
/// assert!(config.check_operators);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tsp::ga::ChromosomeConfig;
///
/// let config = ChromosomeConfig::default()
///     .with_seed(42)
///     .with_check_operators(false);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromosomeConfig {
    /// Random seed for reproducibility.
    ///
    /// `None` seeds from the operating system.
    pub seed: Option<u64>,

    /// Whether mutation and crossover re-validate the permutation in
    /// release builds.
    ///
    /// Debug builds always validate. A failed check panics: a broken
    /// permutation cannot be evaluated or bred further.
    pub check_operators: bool,
}

impl Default for ChromosomeConfig {
    fn default() -> Self {
        Self {
            seed: None,
            check_operators: true,
        }
    }
}

impl ChromosomeConfig {
    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables release-build validation after operators.
    pub fn with_check_operators(mut self, check: bool) -> Self {
        self.check_operators = check;
        self
    }
}
