//! Comparative timing of the sorting algorithms.
//!
//! For every size threshold the first `size` places (in load order) are
//! ranked against the reference, then each [`Algorithm`] sorts that
//! same ranked subset. Each algorithm borrows the subset and returns its
//! own copy, so no run can influence the next one.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use crate::algorithms::sort::Algorithm;
use crate::types::location::Location;
use crate::types::place::{Place, RankedPlace};
use crate::utils::ranking::rank;

/// Default subset sizes, in ascending order.
pub const DEFAULT_SIZES: [usize; 5] = [100, 500, 1000, 2000, 3000];

/// The outcome of a single algorithm on a single subset.
#[derive(Debug, Clone)]
pub struct Trial<'a> {
    pub algorithm: Algorithm,
    /// Number of places actually sorted.
    pub size: usize,
    pub elapsed: Duration,
    pub output: Vec<RankedPlace<'a>>,
}

/// Elapsed times per algorithm, aligned by index with `sizes`.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkReport {
    /// The requested size thresholds.
    pub sizes: Vec<usize>,
    /// Number of places in the dataset the report was built from.
    pub dataset_len: usize,
    pub timings: BTreeMap<Algorithm, Vec<Duration>>,
}

impl BenchmarkReport {
    /// Subset sizes that were actually sorted, which are smaller than
    /// the requested ones when the dataset is short.
    pub fn effective_sizes(&self) -> Vec<usize> {
        self.sizes
            .iter()
            .map(|size| (*size).min(self.dataset_len))
            .collect()
    }
}

/// Runs every algorithm over the first `size` places.
///
/// The subset is shorter than `size` if there are fewer places.
pub fn run_size<'a>(places: &'a [Place], reference: &Location, size: usize) -> Vec<Trial<'a>> {
    let subset = &places[..size.min(places.len())];
    let ranked = rank(subset, reference);

    Algorithm::ALL
        .iter()
        .map(|algorithm| {
            let start = Instant::now();
            let output = algorithm.sort(&ranked);
            let elapsed = start.elapsed();
            debug!(
                "(run_size) {} on {} places: {:?}",
                algorithm,
                ranked.len(),
                elapsed
            );
            Trial {
                algorithm: *algorithm,
                size: ranked.len(),
                elapsed,
                output,
            }
        })
        .collect()
}

/// Benchmarks all algorithms over each size in `sizes`.
pub fn run(places: &[Place], reference: &Location, sizes: &[usize]) -> BenchmarkReport {
    let mut timings: BTreeMap<Algorithm, Vec<Duration>> = Algorithm::ALL
        .iter()
        .map(|algorithm| (*algorithm, Vec::with_capacity(sizes.len())))
        .collect();

    for (i, size) in sizes.iter().enumerate() {
        info!("[{}/{}] Benchmarking {} places", i + 1, sizes.len(), size);
        for trial in run_size(places, reference, *size) {
            timings.entry(trial.algorithm).or_default().push(trial.elapsed);
        }
    }

    BenchmarkReport {
        sizes: sizes.to_vec(),
        dataset_len: places.len(),
        timings,
    }
}
