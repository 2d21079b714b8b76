//! Synchronous fit-and-project iterations followed by a flower-selective pass.

use super::fit::correct_point;
use super::params::DenoiseParams;
use crate::error::DenoiseError;
use crate::graph::{flower_points, NeighborGraph};
use crate::types::{distance, Point, PointSet};
use log::debug;
use serde::Serialize;

/// Per-iteration movement summary.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IterationStats {
    /// 1-based pass number.
    pub iteration: usize,
    pub mean_shift: f64,
    pub max_shift: f64,
    /// Points kept in place because too few neighbors survived trimming.
    pub unchanged: usize,
}

/// Both snapshots produced by a denoising run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DenoiseOutput {
    /// Cloud after all full passes.
    pub iterated: PointSet,
    /// Cloud after the flower-selective pass; the final result.
    pub corrected: PointSet,
    /// Flower points of `iterated`, i.e. the points touched by the last pass.
    pub flower_points: Vec<usize>,
    pub iterations: Vec<IterationStats>,
}

/// Iterative projection denoiser bound to one neighbor graph.
///
/// The graph is built once from the input cloud and reused unchanged by every
/// pass; only point positions evolve between passes.
pub struct IterativeDenoiser<'g> {
    graph: &'g NeighborGraph,
    iterations: usize,
}

impl<'g> IterativeDenoiser<'g> {
    pub fn new(graph: &'g NeighborGraph, params: &DenoiseParams) -> Result<Self, DenoiseError> {
        if params.iterations == 0 {
            return Err(DenoiseError::InvalidIterations(params.iterations));
        }
        Ok(Self {
            graph,
            iterations: params.iterations,
        })
    }

    /// Run every full pass, then the flower-selective pass.
    pub fn run(&self, points: &PointSet) -> Result<DenoiseOutput, DenoiseError> {
        self.check_cardinality(points)?;
        let mut current = points.clone();
        let mut stats = Vec::with_capacity(self.iterations);
        for k in 1..=self.iterations {
            let (next, mut step) = self.iterate_once(&current);
            step.iteration = k;
            debug!(
                "IterativeDenoiser pass {}/{} mean_shift={:.6} max_shift={:.6} unchanged={}",
                k, self.iterations, step.mean_shift, step.max_shift, step.unchanged
            );
            stats.push(step);
            current = next;
        }
        let (corrected, flowers) = self.flower_pass(&current)?;
        debug!(
            "IterativeDenoiser flower pass corrected {} of {} points",
            flowers.len(),
            current.len()
        );
        Ok(DenoiseOutput {
            iterated: current,
            corrected,
            flower_points: flowers,
            iterations: stats,
        })
    }

    /// One synchronous pass: every point is corrected against the same input
    /// snapshot and the results form the next snapshot.
    pub fn iterate_once(&self, points: &PointSet) -> (PointSet, IterationStats) {
        let corrections = self.correct_all(points);
        let mut unchanged = 0usize;
        let mut sum_shift = 0.0f64;
        let mut max_shift = 0.0f64;
        let next: PointSet = corrections
            .into_iter()
            .zip(points.iter())
            .map(|(corr, p)| match corr {
                Some(q) => {
                    let shift = distance(p, &q);
                    sum_shift += shift;
                    max_shift = max_shift.max(shift);
                    q
                }
                None => {
                    unchanged += 1;
                    *p
                }
            })
            .collect();
        let mean_shift = if points.is_empty() {
            0.0
        } else {
            sum_shift / points.len() as f64
        };
        (
            next,
            IterationStats {
                iteration: 0,
                mean_shift,
                max_shift,
                unchanged,
            },
        )
    }

    /// Correct only the flower points of `points`.
    ///
    /// Flowers are re-evaluated on the current positions over the adjacency
    /// of the construction graph; the corrections themselves use the
    /// construction graph, like the full passes.
    pub fn flower_pass(&self, points: &PointSet) -> Result<(PointSet, Vec<usize>), DenoiseError> {
        let current_graph = self.graph.remeasured(points)?;
        let flowers = flower_points(&current_graph);
        let mut is_flower = vec![false; points.len()];
        for &i in &flowers {
            is_flower[i] = true;
        }
        let corrected = points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                if is_flower[i] {
                    correct_point(points, self.graph, i).unwrap_or(*p)
                } else {
                    *p
                }
            })
            .collect();
        Ok((corrected, flowers))
    }

    fn check_cardinality(&self, points: &PointSet) -> Result<(), DenoiseError> {
        if points.len() != self.graph.len() {
            return Err(DenoiseError::GraphMismatch {
                points: points.len(),
                graph: self.graph.len(),
            });
        }
        Ok(())
    }

    #[cfg(feature = "parallel")]
    fn correct_all(&self, points: &PointSet) -> Vec<Option<Point>> {
        use rayon::prelude::*;

        (0..points.len())
            .into_par_iter()
            .map(|i| correct_point(points, self.graph, i))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn correct_all(&self, points: &PointSet) -> Vec<Option<Point>> {
        (0..points.len())
            .map(|i| correct_point(points, self.graph, i))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zigzag() -> PointSet {
        PointSet::from_xy(&[
            [0.0, 0.1],
            [1.0, -0.1],
            [2.0, 0.12],
            [3.0, -0.08],
            [4.0, 0.1],
            [5.0, -0.1],
            [2.5, 3.0],
        ])
    }

    #[test]
    fn rejects_zero_iterations() {
        let set = zigzag();
        let graph = NeighborGraph::build(&set).expect("triangulation");
        assert!(matches!(
            IterativeDenoiser::new(&graph, &DenoiseParams::with_iterations(0)),
            Err(DenoiseError::InvalidIterations(0))
        ));
    }

    #[test]
    fn rejects_foreign_point_set() {
        let set = zigzag();
        let graph = NeighborGraph::build(&set).expect("triangulation");
        let denoiser = IterativeDenoiser::new(&graph, &DenoiseParams::default()).unwrap();
        let other = PointSet::from_xy(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]);
        assert!(matches!(
            denoiser.run(&other),
            Err(DenoiseError::GraphMismatch { points: 3, graph: 7 })
        ));
    }

    #[test]
    fn runs_are_bit_identical() {
        let set = zigzag();
        let graph = NeighborGraph::build(&set).expect("triangulation");
        let denoiser = IterativeDenoiser::new(&graph, &DenoiseParams::with_iterations(4)).unwrap();
        let a = denoiser.run(&set).unwrap();
        let b = denoiser.run(&set).unwrap();
        assert_eq!(a.iterated, b.iterated);
        assert_eq!(a.corrected, b.corrected);
        assert_eq!(a.flower_points, b.flower_points);
        assert_eq!(a.iterations.len(), 4);
        assert_eq!(a.iterations[3].iteration, 4);
    }

    #[test]
    fn pass_reads_only_the_previous_snapshot() {
        let set = zigzag();
        let graph = NeighborGraph::build(&set).expect("triangulation");
        let denoiser = IterativeDenoiser::new(&graph, &DenoiseParams::default()).unwrap();
        let (next, _) = denoiser.iterate_once(&set);
        for i in 0..set.len() {
            let expected = correct_point(&set, &graph, i).unwrap_or(set[i]);
            assert_eq!(next[i], expected);
        }
    }

    #[test]
    fn flower_pass_only_moves_flowers() {
        let set = zigzag();
        let graph = NeighborGraph::build(&set).expect("triangulation");
        let denoiser = IterativeDenoiser::new(&graph, &DenoiseParams::with_iterations(2)).unwrap();
        let out = denoiser.run(&set).unwrap();
        let current_graph = graph.remeasured(&out.iterated).unwrap();
        assert_eq!(out.flower_points, flower_points(&current_graph));
        for i in 0..set.len() {
            let expected = if out.flower_points.contains(&i) {
                correct_point(&out.iterated, &graph, i).unwrap_or(out.iterated[i])
            } else {
                out.iterated[i]
            };
            assert_eq!(out.corrected[i], expected, "point {i}");
        }
    }
}
