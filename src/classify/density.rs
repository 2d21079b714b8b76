//! Clean/noisy decision from nearest-neighbor density statistics.
//!
//! The region radius is `mean + 2·std` of the 1-NN distances. Every point
//! counts the samples (itself included) inside that radius; a clean boundary
//! sample yields small, uniform counts, noise inflates their magnitude or
//! spread. The cloud is clean when `mean(count) + 2·std(count) < 3`.

use crate::error::DenoiseError;
use crate::stats::{mean, std_dev};
use crate::types::{distance, Classification, PointSet};
use log::debug;
use serde::Serialize;

/// Number of standard deviations added to the mean in both tests.
const SIGMA_FACTOR: f64 = 2.0;
/// Upper (exclusive) bound on `mean + 2·std` of the counts for a clean cloud.
const CLEAN_COUNT_LIMIT: f64 = 3.0;

/// Intermediate values of the density test.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DensityStats {
    pub region_radius: f64,
    pub mean_count: f64,
    pub std_count: f64,
    /// `mean_count + 2·std_count`, compared against the clean limit.
    pub range_value: f64,
    pub counts: Vec<usize>,
}

/// Classify the whole cloud and return the statistics behind the verdict.
pub fn classify_density(
    points: &PointSet,
) -> Result<(Classification, DensityStats), DenoiseError> {
    let n = points.len();
    if n < 2 {
        return Err(DenoiseError::InsufficientPoints { points: n });
    }

    let nn = nearest_neighbor_distances(points);
    let region_radius = mean(&nn) + SIGMA_FACTOR * std_dev(&nn);

    let counts: Vec<usize> = points
        .iter()
        .map(|p| {
            points
                .iter()
                .filter(|q| distance(p, q) <= region_radius)
                .count()
        })
        .collect();
    let counts_f: Vec<f64> = counts.iter().map(|&c| c as f64).collect();
    let mean_count = mean(&counts_f);
    let std_count = std_dev(&counts_f);
    let range_value = mean_count + SIGMA_FACTOR * std_count;

    let classification = if range_value < CLEAN_COUNT_LIMIT {
        Classification::Clean
    } else {
        Classification::Noisy
    };
    debug!(
        "classify_density n={} radius={:.6} mean_count={:.4} std_count={:.4} -> {:?}",
        n, region_radius, mean_count, std_count, classification
    );

    Ok((
        classification,
        DensityStats {
            region_radius,
            mean_count,
            std_count,
            range_value,
            counts,
        },
    ))
}

/// Convenience wrapper returning only the verdict.
pub fn classify(points: &PointSet) -> Result<Classification, DenoiseError> {
    classify_density(points).map(|(c, _)| c)
}

/// Brute-force distance from every point to its closest other point.
fn nearest_neighbor_distances(points: &PointSet) -> Vec<f64> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            points
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, q)| distance(p, q))
                .fold(f64::INFINITY, f64::min)
        })
        .collect()
}
