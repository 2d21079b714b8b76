//! Triangulation-derived neighbor graph.

use crate::error::DenoiseError;
use crate::types::{distance, PointSet};
use log::{debug, warn};
use serde::Serialize;

/// One-hop neighbor of a point together with the distance between them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Neighbor {
    pub index: usize,
    pub distance: f64,
}

/// Per-point lists of direct triangulation neighbors.
///
/// Built once per snapshot and shared read-only afterwards. Lists follow the
/// triangle traversal order of the triangulation and are not sorted.
#[derive(Clone, Debug, PartialEq)]
pub struct NeighborGraph {
    adjacency: Vec<Vec<Neighbor>>,
    simplices: Vec<[usize; 3]>,
}

impl NeighborGraph {
    /// Delaunay-triangulate `points` and collect the edge neighbors of every
    /// vertex.
    pub fn build(points: &PointSet) -> Result<Self, DenoiseError> {
        let n = points.len();
        if n < 3 {
            return Err(DenoiseError::DegenerateInput { points: n });
        }
        let coords: Vec<delaunator::Point> = points
            .iter()
            .map(|p| delaunator::Point { x: p.x, y: p.y })
            .collect();
        let triangulation = delaunator::triangulate(&coords);
        if triangulation.triangles.is_empty() {
            debug!("NeighborGraph::build all {n} points are collinear");
            return Err(DenoiseError::DegenerateInput { points: n });
        }
        let simplices: Vec<[usize; 3]> = triangulation
            .triangles
            .chunks_exact(3)
            .map(|t| [t[0], t[1], t[2]])
            .collect();

        let graph = Self::from_simplices(points, simplices);
        let isolated = graph.adjacency.iter().filter(|l| l.is_empty()).count();
        if isolated > 0 {
            warn!("NeighborGraph::build {isolated} duplicate points were left without neighbors");
        }
        debug!(
            "NeighborGraph::build points={} triangles={}",
            n,
            graph.simplices.len()
        );
        Ok(graph)
    }

    fn from_simplices(points: &PointSet, simplices: Vec<[usize; 3]>) -> Self {
        let mut adjacency: Vec<Vec<Neighbor>> = vec![Vec::new(); points.len()];
        for tri in &simplices {
            for &u in tri {
                for &v in tri {
                    if u == v {
                        continue;
                    }
                    let d = distance(&points[u], &points[v]);
                    let list = &mut adjacency[u];
                    if !list.iter().any(|nb| nb.index == v && nb.distance == d) {
                        list.push(Neighbor {
                            index: v,
                            distance: d,
                        });
                    }
                }
            }
        }
        Self {
            adjacency,
            simplices,
        }
    }

    /// Same adjacency and simplices, distances measured on another snapshot
    /// of the same cloud.
    pub fn remeasured(&self, points: &PointSet) -> Result<Self, DenoiseError> {
        if points.len() != self.len() {
            return Err(DenoiseError::GraphMismatch {
                points: points.len(),
                graph: self.len(),
            });
        }
        let adjacency = self
            .adjacency
            .iter()
            .enumerate()
            .map(|(u, list)| {
                list.iter()
                    .map(|nb| Neighbor {
                        index: nb.index,
                        distance: distance(&points[u], &points[nb.index]),
                    })
                    .collect()
            })
            .collect();
        Ok(Self {
            adjacency,
            simplices: self.simplices.clone(),
        })
    }

    /// Number of points the graph was built for.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn neighbors(&self, index: usize) -> &[Neighbor] {
        &self.adjacency[index]
    }

    pub fn simplices(&self) -> &[[usize; 3]] {
        &self.simplices
    }
}
