//! Drives the full workflow: load, rank, report, benchmark, export.

use std::io::Write;
use std::path::PathBuf;

use crate::algorithms::benchmark::{self, BenchmarkReport};
use crate::algorithms::quantile::{self, Quantiles};
use crate::algorithms::sort::Algorithm;
use crate::error::Result;
use crate::io::{export, loader, report};
use crate::types::place::{Place, RankedPlace};
use crate::utils::ranking::{find_reference, rank};

/// Options for a single ranking run.
#[derive(Debug, Clone)]
pub struct RankOptions {
    /// CSV file to load places from.
    pub dataset: PathBuf,
    /// Identity of the reference place, matched ignoring case.
    pub reference: String,
    pub columns: loader::Columns,
    /// Algorithm used to rank the full dataset.
    pub algorithm: Algorithm,
    /// Benchmark sizes; an empty list skips the benchmark.
    pub sizes: Vec<usize>,
    /// Where to export the ranking, if anywhere.
    pub export: Option<PathBuf>,
}

/// A dataset ranked against one of its own places.
#[derive(Debug, Clone)]
pub struct Ranking<'a> {
    pub reference: &'a Place,
    pub algorithm: Algorithm,
    /// Every place, nearest first. The reference itself is included.
    pub sorted: Vec<RankedPlace<'a>>,
    pub quantiles: Quantiles<RankedPlace<'a>>,
}

/// Ranks `places` against the place named `reference`.
///
/// # Errors
/// * [`Error::NotFound`](crate::error::Error::NotFound) if no place is
///   named `reference`.
/// * [`Error::TooFewLocations`](crate::error::Error::TooFewLocations)
///   if there is nothing to rank besides the reference.
pub fn rank_places<'a>(
    places: &'a [Place],
    reference: &str,
    algorithm: Algorithm,
) -> Result<Ranking<'a>> {
    let reference = find_reference(places, reference)?;
    debug!("(rank_places) reference: {:?}", reference);

    let ranked = rank(places, &reference.location);
    let sorted = algorithm.sort(&ranked);
    let quantiles = quantile::extract(&sorted)?;

    Ok(Ranking {
        reference,
        algorithm,
        sorted,
        quantiles,
    })
}

/// Benchmarks the sorting algorithms against the ranking's reference.
pub fn run_benchmark(places: &[Place], ranking: &Ranking, sizes: &[usize]) -> BenchmarkReport {
    benchmark::run(places, &ranking.reference.location, sizes)
}

/// Runs the whole workflow, writing the reports to `out`.
pub fn run<W: Write>(options: &RankOptions, out: &mut W) -> Result<()> {
    info!("[1/5] Loading places");
    let places = loader::load_from_path(&options.dataset, &options.columns)?;

    info!("[2/5] Ranking against '{}'", options.reference);
    let ranking = rank_places(&places, &options.reference, options.algorithm)?;

    info!("[3/5] Computing statistics");
    writeln!(
        out,
        "{}",
        report::statistics(
            ranking.reference,
            ranking.algorithm,
            ranking.sorted.len(),
            &ranking.quantiles,
        )
    )?;

    info!("[4/5] Benchmarking sorting algorithms");
    if options.sizes.is_empty() {
        debug!("(run) no benchmark sizes, skipping benchmark");
    } else {
        let timings = run_benchmark(&places, &ranking, &options.sizes);
        writeln!(out, "{}", report::benchmark_table(&timings))?;
    }

    info!("[5/5] Exporting ranking");
    export::export_to_path(options.export.as_deref(), &ranking.sorted)?;

    info!("Finished ranking {} places", ranking.sorted.len());
    Ok(())
}
