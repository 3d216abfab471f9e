//! Dense distance matrix.

use crate::models::{Cities, City};

/// A dense n×n distance matrix stored in row-major order.
///
/// Supports both Euclidean distance computation from city coordinates
/// and explicit distance specification. A matrix is itself a [`Cities`]
/// collection, which is how asymmetric instances are expressed.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
/// use u_tsp::distance::DistanceMatrix;
///
/// let cities = vec![
///     City::new(0.0, 0.0),
///     City::new(3.0, 4.0),
///     City::new(6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a Euclidean distance matrix from city coordinates.
    pub fn from_cities(cities: &[City]) -> Self {
        let n = cities.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = cities[i].distance_to(&cities[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the distance from city `from` to city `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from city `from` to city `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of cities in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Length of the closed tour `order[0] → … → order[n-1] → order[0]`.
    ///
    /// Empty and single-city tours have length zero.
    ///
    /// # Panics
    ///
    /// Panics if `order` holds an index outside the matrix.
    pub fn tour_length(&self, order: &[usize]) -> f64 {
        let (first, last) = match (order.first(), order.last()) {
            (Some(&f), Some(&l)) => (f, l),
            _ => return 0.0,
        };
        let open: f64 = order.windows(2).map(|w| self.get(w[0], w[1])).sum();
        open + self.get(last, first)
    }
}

impl Cities for DistanceMatrix {
    fn size(&self) -> usize {
        self.size
    }

    fn total_path_distance(&self, order: &[usize]) -> f64 {
        self.tour_length(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_cities() -> Vec<City> {
        vec![
            City::new(0.0, 0.0),
            City::new(3.0, 4.0),
            City::new(0.0, 8.0),
        ]
    }

    #[test]
    fn test_from_cities() {
        let dm = DistanceMatrix::from_cities(&sample_cities());
        assert_eq!(dm.size(), 3);
        assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
        assert!((dm.get(0, 2) - 8.0).abs() < 1e-10);
        assert!((dm.get(0, 0)).abs() < 1e-10);
    }

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 5.0, 5.0, 0.0]).expect("valid");
        assert_eq!(dm.get(0, 1), 5.0);
        assert_eq!(dm.get(1, 0), 5.0);
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0]).is_none());
    }

    #[test]
    fn test_set_get() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 1, 42.0);
        assert_eq!(dm.get(0, 1), 42.0);
        assert_eq!(dm.get(1, 0), 0.0);
    }

    #[test]
    fn test_asymmetric_matrix() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(0, 1, 10.0);
        dm.set(1, 0, 15.0);
        // closed tour uses both directions
        assert!((dm.tour_length(&[0, 1]) - 25.0).abs() < 1e-10);
    }

    #[test]
    fn test_tour_length_closed() {
        let dm = DistanceMatrix::from_cities(&sample_cities());
        // 0→1 = 5, 1→2 = 5, 2→0 = 8
        assert!((dm.tour_length(&[0, 1, 2]) - 18.0).abs() < 1e-10);
        assert!((dm.total_path_distance(&[0, 1, 2]) - 18.0).abs() < 1e-10);
    }

    #[test]
    fn test_tour_length_degenerate() {
        let dm = DistanceMatrix::from_cities(&sample_cities());
        assert_eq!(dm.tour_length(&[]), 0.0);
        assert_eq!(dm.tour_length(&[1]), 0.0);
    }
}
