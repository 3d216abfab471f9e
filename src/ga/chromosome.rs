//! Permutation chromosome for TSP genetic algorithms.
//!
//! A chromosome encodes one candidate tour as a permutation of city indices
//! `0..n`. It borrows the shared city collection, owns its permutation, and
//! owns a private random source that drives its own mutation and crossover
//! draws, so chromosomes can be bred independently of each other.
//!
//! # Operators
//!
//! - **Mutation**: swap two distinct positions (one transposition)
//! - **Crossover**: Order crossover (OX) with a left-to-right fill
//! - **Fitness**: reciprocal of the closed-tour length
//!
//! # Reference
//!
//! Davis, L. (1985). "Applying Adaptive Algorithms to Epistatic Domains",
//! *Proceedings of IJCAI* 85, 162-164.

use std::fmt;

use log::{debug, trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Result, TourError};
use crate::models::Cities;

use super::config::ChromosomeConfig;
use super::operators::{cut_points, distinct_indices, ox_fill, random_permutation};
use super::validity::{check_permutation, Violation};

/// Smallest city count a chromosome accepts.
///
/// A swap mutation needs two distinct positions, and a one-city tour has
/// zero length.
pub const MIN_CITIES: usize = 2;

/// A candidate tour: a permutation of the indices of a shared city collection.
///
/// Every public operation leaves the order a permutation of `0..n`, where
/// `n = cities.size()`.
///
/// The random source `R` is injectable; [`Chromosome::new`] uses an
/// OS-seeded [`StdRng`].
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_tsp::ga::Chromosome;
/// use u_tsp::models::{City, CityList};
///
/// let cities = CityList::new(vec![
///     City::new(0.0, 0.0),
///     City::new(1.0, 0.0),
///     City::new(1.0, 1.0),
///     City::new(0.0, 1.0),
/// ]);
///
/// let mut a = Chromosome::with_rng(&cities, StdRng::seed_from_u64(1)).unwrap();
/// let b = Chromosome::with_rng(&cities, StdRng::seed_from_u64(2)).unwrap();
///
/// a.mutate();
/// let (c1, c2) = a.recombine(&b).unwrap();
/// assert!(c1.is_valid() && c2.is_valid());
/// assert!(a.fitness().unwrap() > 0.0);
/// ```
pub struct Chromosome<'a, C, R = StdRng> {
    cities: &'a C,
    order: Vec<usize>,
    rng: R,
    check_operators: bool,
}

fn ensure_min_cities(n: usize) -> Result<()> {
    if n < MIN_CITIES {
        return Err(TourError::TooFewCities {
            found: n,
            min: MIN_CITIES,
        });
    }
    Ok(())
}

impl<'a, C: Cities> Chromosome<'a, C, StdRng> {
    /// Creates a random chromosome with an OS-seeded random source.
    ///
    /// # Panics
    ///
    /// Panics if the operating system's random source is unavailable.
    pub fn new(cities: &'a C) -> Result<Self> {
        Self::with_rng(cities, StdRng::from_os_rng())
    }

    /// Creates a random chromosome as described by `config`.
    pub fn from_config(cities: &'a C, config: &ChromosomeConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self::with_rng(cities, rng)?.with_check_operators(config.check_operators))
    }
}

impl<'a, C: Cities, R: Rng> Chromosome<'a, C, R> {
    /// Creates a chromosome holding a uniformly random permutation of all
    /// city indices, drawn from `rng`. The chromosome keeps `rng` as its
    /// private random source.
    ///
    /// Fails with [`TourError::TooFewCities`] if the collection has fewer
    /// than [`MIN_CITIES`] cities.
    pub fn with_rng(cities: &'a C, mut rng: R) -> Result<Self> {
        let n = cities.size();
        ensure_min_cities(n)?;
        let order = random_permutation(n, &mut rng);
        debug!("created random chromosome over {n} cities");

        let chromosome = Self {
            cities,
            order,
            rng,
            check_operators: true,
        };
        chromosome.check_invariant();
        Ok(chromosome)
    }

    /// Creates a chromosome from an explicit visiting order.
    ///
    /// Fails with [`TourError::InvalidOrder`] unless `order` is a
    /// permutation of `0..cities.size()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use u_tsp::ga::Chromosome;
    /// use u_tsp::distance::DistanceMatrix;
    /// use u_tsp::TourError;
    ///
    /// let dm = DistanceMatrix::new(3);
    /// let ok = Chromosome::from_order(&dm, vec![2, 0, 1], StdRng::seed_from_u64(0));
    /// assert!(ok.is_ok());
    ///
    /// let bad = Chromosome::from_order(&dm, vec![2, 2, 1], StdRng::seed_from_u64(0));
    /// assert!(matches!(bad, Err(TourError::InvalidOrder(_))));
    /// ```
    pub fn from_order(cities: &'a C, order: Vec<usize>, rng: R) -> Result<Self> {
        ensure_min_cities(cities.size())?;
        check_permutation(&order, cities.size())?;
        Ok(Self {
            cities,
            order,
            rng,
            check_operators: true,
        })
    }

    /// Enables or disables release-build validation after operators.
    ///
    /// Children produced by crossover inherit the setting.
    pub fn with_check_operators(mut self, check: bool) -> Self {
        self.check_operators = check;
        self
    }

    /// Returns the visiting order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Returns the shared city collection.
    pub fn cities(&self) -> &'a C {
        self.cities
    }

    /// Number of genes (cities) in this chromosome.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Always `false`: a chromosome holds at least [`MIN_CITIES`] genes.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Performs a single swap mutation.
    ///
    /// Two distinct positions are drawn uniformly from `0..n` and their genes
    /// exchanged; the set of genes is unchanged.
    pub fn mutate(&mut self) {
        let (first, second) = distinct_indices(self.order.len(), &mut self.rng);
        trace!("swap mutation at positions {first} and {second}");
        self.order.swap(first, second);
        self.check_invariant();
    }

    /// Exchanges the genes at two distinct positions.
    ///
    /// This is the transposition [`mutate`](Self::mutate) applies at random
    /// positions.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use u_tsp::ga::Chromosome;
    /// use u_tsp::distance::DistanceMatrix;
    ///
    /// let dm = DistanceMatrix::new(5);
    /// let mut c = Chromosome::from_order(&dm, vec![0, 1, 2, 3, 4], StdRng::seed_from_u64(0)).unwrap();
    /// c.swap_genes(1, 3).unwrap();
    /// assert_eq!(c.order(), &[0, 3, 2, 1, 4]);
    /// ```
    pub fn swap_genes(&mut self, first: usize, second: usize) -> Result<()> {
        let len = self.order.len();
        if first == second || first >= len || second >= len {
            return Err(TourError::InvalidSwap { first, second, len });
        }
        self.order.swap(first, second);
        self.check_invariant();
        Ok(())
    }

    /// Length of the closed tour this chromosome encodes.
    pub fn total_distance(&self) -> f64 {
        self.cities.total_path_distance(&self.order)
    }

    /// Returns the fitness `1 / total_distance`: higher is a shorter tour.
    ///
    /// Fails with [`TourError::DegenerateDistance`] if the tour length is
    /// zero, negative, or not finite.
    pub fn fitness(&self) -> Result<f64> {
        let distance = self.total_distance();
        if distance > 0.0 && distance.is_finite() {
            Ok(1.0 / distance)
        } else {
            warn!("fitness requested for degenerate tour distance {distance}");
            Err(TourError::DegenerateDistance { distance })
        }
    }

    /// Checks that the order is a permutation of `0..n`.
    pub fn validate(&self) -> std::result::Result<(), Violation> {
        check_permutation(&self.order, self.cities.size())
    }

    /// Returns `true` if every index in `0..n` appears exactly once.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Returns `true` if `value` occurs at a position in `[begin, end)`.
    fn is_in_range(&self, value: usize, begin: usize, end: usize) -> bool {
        debug_assert!(begin < end && end <= self.order.len());
        self.order[begin..end].contains(&value)
    }

    /// Panics if the permutation is broken. Always runs in debug builds.
    fn check_invariant(&self) {
        if cfg!(debug_assertions) || self.check_operators {
            if let Err(violation) = self.validate() {
                panic!("chromosome invariant broken: {violation}");
            }
        }
    }

    fn ensure_compatible(&self, other: &Self) -> Result<()> {
        if self.order.len() != other.order.len() {
            return Err(TourError::LengthMismatch {
                left: self.order.len(),
                right: other.order.len(),
            });
        }
        if !std::ptr::eq(self.cities, other.cities) {
            return Err(TourError::ForeignCities);
        }
        Ok(())
    }
}

impl<'a, C: Cities, R: Rng + SeedableRng> Chromosome<'a, C, R> {
    /// Recombines with `other` by order crossover at a random range.
    ///
    /// A range `[b, e)` with `0 <= b < e <= n` is drawn from this
    /// chromosome's random source and two children are returned:
    ///
    /// - the first keeps `self`'s genes in `[b, e)` and takes the rest in
    ///   `other`'s order;
    /// - the second keeps `other`'s genes in `[b, e)` and takes the rest in
    ///   `self`'s order.
    ///
    /// Each child gets its own random source, seeded from this chromosome's.
    ///
    /// Fails if the parents differ in length or city collection.
    pub fn recombine(&mut self, other: &Self) -> Result<(Self, Self)> {
        self.ensure_compatible(other)?;
        let (begin, end) = cut_points(self.order.len(), &mut self.rng);
        Ok(self.crossover_pair(other, begin, end))
    }

    /// Recombines with `other` by order crossover at the range `[begin, end)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use u_tsp::ga::Chromosome;
    /// use u_tsp::distance::DistanceMatrix;
    ///
    /// let dm = DistanceMatrix::new(5);
    /// let mut p1 = Chromosome::from_order(&dm, vec![0, 1, 2, 3, 4], StdRng::seed_from_u64(0)).unwrap();
    /// let p2 = Chromosome::from_order(&dm, vec![4, 3, 2, 1, 0], StdRng::seed_from_u64(1)).unwrap();
    ///
    /// let (c1, c2) = p1.recombine_at(&p2, 1, 3).unwrap();
    /// assert_eq!(c1.order(), &[4, 1, 2, 3, 0]);
    /// assert_eq!(c2.order(), &[0, 3, 2, 1, 4]);
    /// ```
    pub fn recombine_at(&mut self, other: &Self, begin: usize, end: usize) -> Result<(Self, Self)> {
        self.ensure_compatible(other)?;
        let len = self.order.len();
        if begin >= end || end > len {
            return Err(TourError::InvalidRange { begin, end, len });
        }
        Ok(self.crossover_pair(other, begin, end))
    }

    fn crossover_pair(&mut self, other: &Self, begin: usize, end: usize) -> (Self, Self) {
        debug!("order crossover over [{begin}, {end}) of {}", self.order.len());
        let first_rng = R::from_rng(&mut self.rng);
        let second_rng = R::from_rng(&mut self.rng);
        let first = Self::create_crossover_child(self, other, begin, end, first_rng);
        let second = Self::create_crossover_child(other, self, begin, end, second_rng);
        (first, second)
    }

    /// Builds one OX child: `parent`'s genes in `[begin, end)`, the remaining
    /// positions filled left to right with `donor`'s genes in donor order,
    /// skipping genes already in `parent`'s segment.
    fn create_crossover_child(
        parent: &Self,
        donor: &Self,
        begin: usize,
        end: usize,
        rng: R,
    ) -> Self {
        let order = ox_fill(&parent.order, &donor.order, begin, end);
        debug_assert!((0..begin)
            .chain(end..order.len())
            .all(|pos| !parent.is_in_range(order[pos], begin, end)));

        let child = Self {
            cities: parent.cities,
            order,
            rng,
            check_operators: parent.check_operators,
        };
        child.check_invariant();
        child
    }
}

impl<C, R: Clone> Clone for Chromosome<'_, C, R> {
    fn clone(&self) -> Self {
        Self {
            cities: self.cities,
            order: self.order.clone(),
            rng: self.rng.clone(),
            check_operators: self.check_operators,
        }
    }
}

impl<C, R> fmt::Debug for Chromosome<'_, C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chromosome")
            .field("order", &self.order)
            .field("check_operators", &self.check_operators)
            .finish_non_exhaustive()
    }
}
