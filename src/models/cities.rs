//! City collection trait and its owned implementation.

use crate::distance::DistanceMatrix;

use super::City;

/// A read-only collection of cities that chromosomes are evaluated against.
///
/// This is the whole interface a [`Chromosome`](crate::ga::Chromosome)
/// consumes: the number of cities and the length of a closed tour. It is
/// shared by reference between many chromosomes and never mutated by them,
/// hence `Sync`.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Cities;
///
/// struct Line(usize);
///
/// impl Cities for Line {
///     fn size(&self) -> usize { self.0 }
///     fn total_path_distance(&self, order: &[usize]) -> f64 {
///         // cities at x = 0, 1, 2, ...; closed tour
///         let n = order.len();
///         (0..n)
///             .map(|i| (order[i] as f64 - order[(i + 1) % n] as f64).abs())
///             .sum()
///     }
/// }
///
/// let line = Line(3);
/// assert_eq!(line.size(), 3);
/// assert!((line.total_path_distance(&[0, 1, 2]) - 4.0).abs() < 1e-10);
/// ```
pub trait Cities: Sync {
    /// Number of cities.
    fn size(&self) -> usize;

    /// Length of the closed tour visiting cities in `order` and returning to
    /// the first one.
    ///
    /// `order` holds `size()` city indices.
    fn total_path_distance(&self, order: &[usize]) -> f64;
}

/// An owned list of cities with a precomputed Euclidean distance matrix.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{Cities, City, CityList};
///
/// let cities = CityList::new(vec![
///     City::new(0.0, 0.0),
///     City::new(3.0, 0.0),
///     City::new(3.0, 4.0),
/// ]);
/// assert_eq!(cities.size(), 3);
/// // 3 + 4 + 5
/// assert!((cities.total_path_distance(&[0, 1, 2]) - 12.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct CityList {
    cities: Vec<City>,
    distances: DistanceMatrix,
}

impl CityList {
    /// Creates a city list and computes its distance matrix.
    pub fn new(cities: Vec<City>) -> Self {
        let distances = DistanceMatrix::from_cities(&cities);
        Self { cities, distances }
    }

    /// Returns the cities in index order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Returns the city at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&City> {
        self.cities.get(index)
    }

    /// Returns the distance matrix.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }
}

impl Cities for CityList {
    fn size(&self) -> usize {
        self.cities.len()
    }

    fn total_path_distance(&self, order: &[usize]) -> f64 {
        self.distances.tour_length(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> CityList {
        CityList::new(vec![
            City::new(0.0, 0.0),
            City::new(1.0, 0.0),
            City::new(1.0, 1.0),
            City::new(0.0, 1.0),
        ])
    }

    #[test]
    fn test_city_list_size() {
        let cities = square();
        assert_eq!(cities.size(), 4);
        assert_eq!(cities.cities().len(), 4);
        assert_eq!(cities.get(2), Some(&City::new(1.0, 1.0)));
        assert_eq!(cities.get(4), None);
    }

    #[test]
    fn test_total_path_distance_perimeter() {
        let cities = square();
        assert!((cities.total_path_distance(&[0, 1, 2, 3]) - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_total_path_distance_crossing() {
        let cities = square();
        // 0→2 and 1→3 are diagonals
        let expected = 2.0 + 2.0 * 2.0_f64.sqrt();
        assert!((cities.total_path_distance(&[0, 2, 1, 3]) - expected).abs() < 1e-10);
    }

    #[test]
    fn test_total_path_distance_rotation_invariant() {
        let cities = square();
        let a = cities.total_path_distance(&[0, 1, 2, 3]);
        let b = cities.total_path_distance(&[2, 3, 0, 1]);
        assert!((a - b).abs() < 1e-10);
    }
}
