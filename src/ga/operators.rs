//! Random draws behind the permutation operators.
//!
//! These operate on lengths and return indices; the [`Chromosome`] applies
//! them to its own order.
//!
//! - [`random_permutation`]: Fisher-Yates shuffle of `0..n` — O(n)
//! - [`distinct_indices`]: two different positions in `0..n` — O(1) expected
//! - [`cut_points`]: a non-empty half-open range `[begin, end)` — O(1) expected
//! - [`ox_fill`]: order crossover fill of one child — O(n)
//!
//! # References
//!
//! - Knuth (1997), *The Art of Computer Programming* Vol. 2, §3.4.2
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//!
//! [`Chromosome`]: super::Chromosome

use rand::Rng;

/// Returns a uniformly random permutation of `0..n`.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_tsp::ga::operators::random_permutation;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut perm = random_permutation(5, &mut rng);
/// perm.sort();
/// assert_eq!(perm, vec![0, 1, 2, 3, 4]);
/// ```
pub fn random_permutation<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();

    // Fisher-Yates shuffle
    for i in (1..perm.len()).rev() {
        let j = rng.random_range(0..=i);
        perm.swap(i, j);
    }

    perm
}

/// Draws two different positions uniformly from `0..n`.
///
/// Only the second index is redrawn on a tie, so the expected number of
/// draws is `1 + n / (n - 1)`.
///
/// # Panics
/// Panics if `n < 2`.
pub fn distinct_indices<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    assert!(n >= 2, "need at least two positions, got {n}");
    let first = rng.random_range(0..n);
    let mut second = rng.random_range(0..n);
    while second == first {
        second = rng.random_range(0..n);
    }
    (first, second)
}

/// Draws a crossover range `[begin, end)` with `0 <= begin < end <= n`.
///
/// Both cut points are drawn independently from the `n + 1` boundaries
/// `0..=n`; the second is redrawn until it differs, then the pair is
/// ordered. `begin` is therefore never the final boundary `n`.
///
/// # Panics
/// Panics if `n == 0`.
pub fn cut_points<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    assert!(n > 0, "cannot cut an empty order");
    let a = rng.random_range(0..=n);
    let mut b = rng.random_range(0..=n);
    while b == a {
        b = rng.random_range(0..=n);
    }
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Builds one Order Crossover (OX) child.
///
/// Positions in `[begin, end)` copy `parent`; the remaining positions are
/// filled left to right with `donor`'s genes in donor order, skipping genes
/// already in `parent`'s segment.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if the slices differ in length, hold a gene `>= n`, or the range
/// is not within `0..=n`.
///
/// # Examples
///
/// ```
/// use u_tsp::ga::operators::ox_fill;
///
/// let child = ox_fill(&[0, 1, 2, 3, 4], &[4, 3, 2, 1, 0], 1, 3);
/// assert_eq!(child, vec![4, 1, 2, 3, 0]);
/// ```
pub fn ox_fill(parent: &[usize], donor: &[usize], begin: usize, end: usize) -> Vec<usize> {
    let n = parent.len();
    assert_eq!(n, donor.len(), "parents must have equal length");
    assert!(begin <= end && end <= n, "range [{begin}, {end}) outside 0..={n}");

    let mut child = parent.to_vec();
    let mut in_segment = vec![false; n];
    for &gene in &parent[begin..end] {
        in_segment[gene] = true;
    }

    let outside = (0..begin).chain(end..n);
    let donor_genes = donor.iter().copied().filter(|&gene| !in_segment[gene]);
    for (pos, gene) in outside.zip(donor_genes) {
        child[pos] = gene;
    }

    child
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_permutation_is_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        for n in 0..20 {
            let mut perm = random_permutation(n, &mut rng);
            perm.sort_unstable();
            assert_eq!(perm, (0..n).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_random_permutation_varies() {
        let mut rng = StdRng::seed_from_u64(42);
        let first = random_permutation(10, &mut rng);
        let differs = (0..20).any(|_| random_permutation(10, &mut rng) != first);
        assert!(differs, "20 shuffles of 10 elements all matched");
    }

    #[test]
    fn test_random_permutation_reproducible() {
        let a = random_permutation(12, &mut StdRng::seed_from_u64(9));
        let b = random_permutation(12, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_distinct_indices_in_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            let (i, j) = distinct_indices(2, &mut rng);
            assert_ne!(i, j);
            assert!(i < 2 && j < 2);
        }
        for _ in 0..1000 {
            let (i, j) = distinct_indices(5, &mut rng);
            assert_ne!(i, j);
            assert!(i < 5 && j < 5);
        }
    }

    #[test]
    fn test_distinct_indices_reach_last_position() {
        let mut rng = StdRng::seed_from_u64(3);
        let hit_last = (0..1000).any(|_| {
            let (i, j) = distinct_indices(4, &mut rng);
            i == 3 || j == 3
        });
        assert!(hit_last);
    }

    #[test]
    #[should_panic(expected = "at least two positions")]
    fn test_distinct_indices_single_position() {
        let mut rng = StdRng::seed_from_u64(0);
        distinct_indices(1, &mut rng);
    }

    #[test]
    fn test_cut_points_bounds() {
        let mut rng = StdRng::seed_from_u64(5);
        for n in 1..10 {
            for _ in 0..200 {
                let (b, e) = cut_points(n, &mut rng);
                assert!(b < e, "b={b} e={e}");
                assert!(e <= n, "e={e} n={n}");
            }
        }
    }

    #[test]
    fn test_cut_points_single_gene() {
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(cut_points(1, &mut rng), (0, 1));
    }

    #[test]
    fn test_ox_fill_reference_example() {
        let p1 = [0, 1, 2, 3, 4];
        let p2 = [4, 3, 2, 1, 0];
        assert_eq!(ox_fill(&p1, &p2, 1, 3), vec![4, 1, 2, 3, 0]);
        assert_eq!(ox_fill(&p2, &p1, 1, 3), vec![0, 3, 2, 1, 4]);
    }

    #[test]
    fn test_ox_fill_segment_at_edges() {
        let p1 = [0, 1, 2, 3, 4];
        let p2 = [4, 3, 2, 1, 0];
        assert_eq!(ox_fill(&p1, &p2, 0, 2), vec![0, 1, 4, 3, 2]);
        assert_eq!(ox_fill(&p1, &p2, 4, 5), vec![3, 2, 1, 0, 4]);
        assert_eq!(ox_fill(&p1, &p2, 0, 5), p1.to_vec());
    }

    #[test]
    fn test_ox_fill_keeps_donor_order() {
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..200 {
            let p1 = random_permutation(9, &mut rng);
            let p2 = random_permutation(9, &mut rng);
            let (b, e) = cut_points(9, &mut rng);
            let child = ox_fill(&p1, &p2, b, e);

            assert_eq!(&child[b..e], &p1[b..e]);
            let outside: Vec<usize> = (0..b).chain(e..9).map(|i| child[i]).collect();
            let expected: Vec<usize> = p2.iter().copied().filter(|g| !p1[b..e].contains(g)).collect();
            assert_eq!(outside, expected);

            let mut sorted = child.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, (0..9).collect::<Vec<_>>());
        }
    }

    #[test]
    #[should_panic(expected = "equal length")]
    fn test_ox_fill_length_mismatch() {
        ox_fill(&[0, 1, 2], &[0, 1], 0, 1);
    }

    #[test]
    fn test_cut_points_reach_both_ends() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut saw_begin_zero = false;
        let mut saw_end_n = false;
        for _ in 0..1000 {
            let (b, e) = cut_points(6, &mut rng);
            saw_begin_zero |= b == 0;
            saw_end_n |= e == 6;
        }
        assert!(saw_begin_zero && saw_end_n);
    }
}
