//! Plain-text rendering of ranking statistics and benchmark timings.

use crate::algorithms::benchmark::BenchmarkReport;
use crate::algorithms::quantile::Quantiles;
use crate::algorithms::sort::Algorithm;
use crate::types::place::{Place, RankedPlace};

/// Renders the reference and its representative neighbours.
pub fn statistics(
    reference: &Place,
    algorithm: Algorithm,
    ranked_len: usize,
    quantiles: &Quantiles<RankedPlace>,
) -> String {
    let mut out = format!(
        "Reference: {} ({:.5}, {:.5})\n",
        reference.uid,
        reference.location.latitude.into_inner(),
        reference.location.longitude.into_inner()
    );
    out.push_str(&format!("Ranked {} places with {}\n\n", ranked_len, algorithm));

    let rows = [
        ("Nearest", &quantiles.nearest),
        ("First quartile", &quantiles.first_quartile),
        ("Median", &quantiles.median),
        ("Farthest", &quantiles.farthest),
    ];
    for (label, ranked) in rows {
        out.push_str(&format!("{:<16}{}\n", format!("{}:", label), describe(ranked)));
    }
    out
}

/// `identity (lat, lon) - distance km`
fn describe(ranked: &RankedPlace) -> String {
    let location = ranked.location();
    format!(
        "{} ({:.5}, {:.5}) - {:.2} km",
        ranked.uid(),
        location.latitude.into_inner(),
        location.longitude.into_inner(),
        ranked.distance.into_inner()
    )
}

/// Renders elapsed milliseconds per algorithm, one row per size.
pub fn benchmark_table(report: &BenchmarkReport) -> String {
    let algorithms: Vec<Algorithm> = report.timings.keys().copied().collect();

    let mut out = format!("{:>10}{:>10}", "requested", "sorted");
    for algorithm in &algorithms {
        out.push_str(&format!("{:>18}", algorithm.name()));
    }
    out.push('\n');

    for (i, (size, effective)) in report
        .sizes
        .iter()
        .zip(report.effective_sizes())
        .enumerate()
    {
        out.push_str(&format!("{:>10}{:>10}", size, effective));
        for algorithm in &algorithms {
            let cell = match report.timings[algorithm].get(i) {
                Some(elapsed) => format!("{:>15.3} ms", elapsed.as_secs_f64() * 1000.0),
                None => format!("{:>18}", "-"),
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }
    out
}
