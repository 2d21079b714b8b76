//! Weighted least-squares line fit and orthogonal projection of one point.

use crate::graph::{Neighbor, NeighborGraph};
use crate::stats::quartiles;
use crate::types::{Point, PointSet};

/// Neighbors farther than `Q3 + IQR_FACTOR·IQR` are dropped before fitting.
pub const IQR_FACTOR: f64 = 1.1;
/// Minimum number of kept neighbors for a fit.
pub const MIN_FIT_NEIGHBORS: usize = 2;

/// Relative x-spread below which the fit is treated as a vertical line.
const VERTICAL_EPS: f64 = 1e-12;

/// Neighbor position with its regression weight.
#[derive(Clone, Copy, Debug)]
pub struct WeightedSample {
    pub pos: Point,
    pub weight: f64,
}

/// Result of fitting `y = slope·x + intercept` through weighted samples.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LineFit {
    Sloped { slope: f64, intercept: f64 },
    /// The samples share (numerically) one x; `mean_x` is the plain mean over
    /// the samples that carried weight.
    Vertical { mean_x: f64 },
}

/// Weighted least squares of `y` on `x`.
///
/// Returns `None` when the total weight vanishes.
pub fn weighted_line_fit(samples: &[WeightedSample]) -> Option<LineFit> {
    let usable: Vec<&WeightedSample> = samples
        .iter()
        .filter(|s| s.weight.is_finite() && s.weight > 0.0)
        .collect();
    let mut sum_w = 0.0;
    let mut mu = [0.0f64, 0.0];
    for s in &usable {
        sum_w += s.weight;
        mu[0] += s.weight * s.pos.x;
        mu[1] += s.weight * s.pos.y;
    }
    if sum_w <= 0.0 {
        return None;
    }
    mu[0] /= sum_w;
    mu[1] /= sum_w;

    let mut sxx = 0.0f64;
    let mut sxy = 0.0f64;
    let mut syy = 0.0f64;
    for s in &usable {
        let dx = s.pos.x - mu[0];
        let dy = s.pos.y - mu[1];
        sxx += s.weight * dx * dx;
        sxy += s.weight * dx * dy;
        syy += s.weight * dy * dy;
    }

    if sxx <= VERTICAL_EPS * (sxx + syy) {
        let mean_x = usable.iter().map(|s| s.pos.x).sum::<f64>() / usable.len() as f64;
        return Some(LineFit::Vertical { mean_x });
    }
    let slope = sxy / sxx;
    Some(LineFit::Sloped {
        slope,
        intercept: mu[1] - slope * mu[0],
    })
}

/// Closest point of the fitted line to `p`.
///
/// A vertical fit moves the point horizontally onto `x = mean_x`.
#[inline]
pub fn project_onto_fit(p: &Point, fit: &LineFit) -> Point {
    match *fit {
        LineFit::Sloped { slope, intercept } => {
            let x = (p.x + slope * (p.y - intercept)) / (slope * slope + 1.0);
            Point::new(x, slope * x + intercept)
        }
        LineFit::Vertical { mean_x } => Point::new(mean_x, p.y),
    }
}

/// Neighbors within `Q3 + 1.1·IQR` of the distance distribution.
pub fn trim_neighbors(neighbors: &[Neighbor]) -> Vec<Neighbor> {
    let distances: Vec<f64> = neighbors.iter().map(|nb| nb.distance).collect();
    let Some((q1, q3)) = quartiles(&distances) else {
        return Vec::new();
    };
    let threshold = q3 + IQR_FACTOR * (q3 - q1);
    neighbors
        .iter()
        .copied()
        .filter(|nb| nb.distance <= threshold)
        .collect()
}

/// Corrected position of point `index`, or `None` when fewer than two
/// neighbors survive trimming (the caller keeps the point as is).
///
/// Positions come from the current snapshot `points`; neighbor identities and
/// distances (hence trimming and weights) come from `graph`.
pub fn correct_point(points: &PointSet, graph: &NeighborGraph, index: usize) -> Option<Point> {
    let kept = trim_neighbors(graph.neighbors(index));
    if kept.len() < MIN_FIT_NEIGHBORS {
        return None;
    }
    let samples: Vec<WeightedSample> = kept
        .iter()
        .map(|nb| WeightedSample {
            pos: points[nb.index],
            weight: 1.0 / nb.distance,
        })
        .collect();
    let fit = weighted_line_fit(&samples)?;
    Some(project_onto_fit(&points[index], &fit))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(x: f64, y: f64, weight: f64) -> WeightedSample {
        WeightedSample {
            pos: Point::new(x, y),
            weight,
        }
    }

    #[test]
    fn fit_recovers_exact_line() {
        let samples = [sample(0.0, 1.0, 1.0), sample(1.0, 3.0, 0.5), sample(2.0, 5.0, 2.0)];
        match weighted_line_fit(&samples) {
            Some(LineFit::Sloped { slope, intercept }) => {
                assert!((slope - 2.0).abs() < 1e-12);
                assert!((intercept - 1.0).abs() < 1e-12);
            }
            other => panic!("expected sloped fit, got {other:?}"),
        }
    }

    #[test]
    fn closer_samples_pull_harder() {
        // Two parallel pairs; the heavy pair decides the intercept.
        let samples = [
            sample(0.0, 0.0, 10.0),
            sample(1.0, 0.0, 10.0),
            sample(0.0, 1.0, 0.1),
            sample(1.0, 1.0, 0.1),
        ];
        let Some(LineFit::Sloped { slope, intercept }) = weighted_line_fit(&samples) else {
            panic!("expected sloped fit");
        };
        assert!(slope.abs() < 1e-12);
        assert!(intercept < 0.05, "intercept {intercept}");
    }

    #[test]
    fn identical_x_takes_vertical_branch() {
        let samples = [sample(2.0, 0.0, 1.0), sample(2.0, 1.0, 0.7), sample(2.0, 3.0, 0.2)];
        let fit = weighted_line_fit(&samples).expect("positive weights");
        assert_eq!(fit, LineFit::Vertical { mean_x: 2.0 });
        let projected = project_onto_fit(&Point::new(5.0, 1.5), &fit);
        assert_eq!(projected, Point::new(2.0, 1.5));
    }

    #[test]
    fn projection_is_orthogonal() {
        let fit = LineFit::Sloped {
            slope: 1.0,
            intercept: 0.0,
        };
        let p = project_onto_fit(&Point::new(2.0, 0.0), &fit);
        assert!((p.x - 1.0).abs() < 1e-12 && (p.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn point_on_neighbor_line_stays_put() {
        let samples = [
            sample(-2.0, -0.5, 0.4),
            sample(-1.0, 0.25, 1.0),
            sample(1.5, 2.125, 0.6),
            sample(3.0, 3.25, 0.3),
        ];
        let fit = weighted_line_fit(&samples).expect("positive weights");
        let p = Point::new(0.5, 1.375);
        let q = project_onto_fit(&p, &fit);
        assert!((q.x - p.x).abs() < 1e-12 && (q.y - p.y).abs() < 1e-12);
    }

    #[test]
    fn trimming_drops_far_neighbors() {
        let nbs: Vec<Neighbor> = [1.0, 1.1, 0.9, 1.0, 9.0]
            .iter()
            .enumerate()
            .map(|(index, &distance)| Neighbor { index, distance })
            .collect();
        let kept = trim_neighbors(&nbs);
        assert_eq!(kept.len(), 4);
        assert!(kept.iter().all(|nb| nb.index != 4));
        assert!(trim_neighbors(&[]).is_empty());
    }

    #[test]
    fn zero_weights_give_no_fit() {
        assert_eq!(weighted_line_fit(&[sample(0.0, 0.0, 0.0)]), None);
        assert_eq!(weighted_line_fit(&[]), None);
    }

    #[test]
    fn vertical_mean_ignores_weightless_samples() {
        let samples = [sample(2.0, 0.0, 1.0), sample(2.0, 1.0, 0.5), sample(9.0, 5.0, 0.0)];
        assert_eq!(
            weighted_line_fit(&samples),
            Some(LineFit::Vertical { mean_x: 2.0 })
        );
    }

    /// Point 0 with five close neighbors above it and one ten units below;
    /// trimming keeps only the close ones.
    fn fan() -> (PointSet, NeighborGraph) {
        let set = PointSet::from_xy(&[
            [0.0, 0.0],
            [1.0, 0.0],
            [0.8, 0.7],
            [0.0, 1.2],
            [-0.7, 0.8],
            [-1.1, 0.0],
            [0.0, -10.0],
        ]);
        let graph = NeighborGraph::build(&set).expect("triangulation");
        (set, graph)
    }

    /// Moves the graph's points to new positions, keeping indices.
    fn snapshot(coords: &[[f64; 2]]) -> PointSet {
        PointSet::from_xy(coords)
    }

    #[test]
    fn fan_trims_the_far_neighbor() {
        let (_, graph) = fan();
        let mut ids: Vec<usize> = graph.neighbors(0).iter().map(|nb| nb.index).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        let mut kept: Vec<usize> = trim_neighbors(graph.neighbors(0))
            .iter()
            .map(|nb| nb.index)
            .collect();
        kept.sort_unstable();
        assert_eq!(kept, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn point_collinear_with_kept_neighbors_is_fixed() {
        let (_, graph) = fan();
        // Kept neighbors and the point on y = 0.5·x + 1; the trimmed one is
        // far off that line.
        let current = snapshot(&[
            [0.0, 1.0],
            [-2.0, 0.0],
            [-1.0, 0.5],
            [1.0, 1.5],
            [2.0, 2.0],
            [4.0, 3.0],
            [3.0, -20.0],
        ]);
        let corrected = correct_point(&current, &graph, 0).expect("five kept neighbors");
        assert!((corrected.x - current[0].x).abs() < 1e-9, "{corrected}");
        assert!((corrected.y - current[0].y).abs() < 1e-9, "{corrected}");
    }

    #[test]
    fn kept_neighbors_on_one_x_project_horizontally() {
        let (_, graph) = fan();
        let current = snapshot(&[
            [2.0, 0.3],
            [0.0, -1.0],
            [0.0, 0.5],
            [0.0, 1.0],
            [0.0, 2.0],
            [0.0, 4.0],
            [5.0, -10.0],
        ]);
        let corrected = correct_point(&current, &graph, 0).expect("five kept neighbors");
        assert_eq!(corrected, Point::new(0.0, 0.3));
    }

    #[test]
    fn point_without_neighbors_is_left_alone() {
        // The duplicate of point 1 is dropped by the triangulation.
        let set =
            PointSet::from_xy(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.2], [1.0, 0.0]]);
        let graph = NeighborGraph::build(&set).expect("triangulation");
        assert!(graph.neighbors(4).is_empty());
        assert_eq!(correct_point(&set, &graph, 4), None);
    }
}
