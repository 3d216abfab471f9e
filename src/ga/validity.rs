//! Permutation validity checking.

use thiserror::Error;

/// The first way in which an order fails to be a permutation of `0..n`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("expected {expected} genes, found {found}")]
    WrongLength { expected: usize, found: usize },

    #[error("gene {value} at position {position} is outside 0..{size}")]
    OutOfRange {
        position: usize,
        value: usize,
        size: usize,
    },

    #[error("gene {value} appears at positions {first} and {second}")]
    Duplicate {
        value: usize,
        first: usize,
        second: usize,
    },
}

/// Checks that `order` holds every value of `0..n` exactly once.
///
/// With the length equal to `n` and every value in range, a value can only
/// be missing if another is duplicated, so the duplicate is what gets
/// reported.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Examples
///
/// ```
/// use u_tsp::ga::{check_permutation, Violation};
///
/// assert!(check_permutation(&[2, 0, 1], 3).is_ok());
/// assert_eq!(
///     check_permutation(&[0, 1, 1], 3),
///     Err(Violation::Duplicate { value: 1, first: 1, second: 2 })
/// );
/// ```
pub fn check_permutation(order: &[usize], n: usize) -> Result<(), Violation> {
    if order.len() != n {
        return Err(Violation::WrongLength {
            expected: n,
            found: order.len(),
        });
    }

    let mut seen_at: Vec<Option<usize>> = vec![None; n];
    for (position, &value) in order.iter().enumerate() {
        if value >= n {
            return Err(Violation::OutOfRange {
                position,
                value,
                size: n,
            });
        }
        if let Some(first) = seen_at[value] {
            return Err(Violation::Duplicate {
                value,
                first,
                second: position,
            });
        }
        seen_at[value] = Some(position);
    }
    Ok(())
}
