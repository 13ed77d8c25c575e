//! Nearest-rank quantiles over a sequence sorted by distance.
//!
//! The sequence is expected to contain the reference point itself at
//! index 0 (distance 0). That entry is skipped when picking the nearest
//! neighbour. Indices are truncated, never interpolated.

use crate::error::{Error, Result};
use crate::types::place::Ranked;

/// Four representative records of a ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantiles<T> {
    /// Closest record other than the reference, at index 1.
    pub nearest: T,
    /// Record at index `n / 4`.
    pub first_quartile: T,
    /// Record at index `n / 2`.
    pub median: T,
    /// Record at index `n - 1`.
    pub farthest: T,
}

/// Returns the `[nearest, first quartile, median, farthest]` indices
/// used for a sequence of length `n`, or `None` when `n < 2`.
pub fn indices(n: usize) -> Option<[usize; 4]> {
    if n < 2 {
        return None;
    }
    Some([1, n / 4, n / 2, n - 1])
}

/// Picks the [`Quantiles`] from an ascending sequence.
///
/// # Errors
/// [`Error::TooFewLocations`] if the sequence holds fewer than two
/// records (the reference plus at least one other).
pub fn extract<T: Ranked + Clone>(sorted: &[T]) -> Result<Quantiles<T>> {
    let [nearest, first_quartile, median, farthest] =
        indices(sorted.len()).ok_or(Error::TooFewLocations(sorted.len()))?;

    Ok(Quantiles {
        nearest: sorted[nearest].clone(),
        first_quartile: sorted[first_quartile].clone(),
        median: sorted[median].clone(),
        farthest: sorted[farthest].clone(),
    })
}
