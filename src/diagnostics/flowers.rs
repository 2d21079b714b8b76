use crate::graph::{flower_points, NeighborGraph};
use crate::types::PointSet;
use serde::Serialize;

/// Neighbor count separating "small" from "large" flowers in the report.
pub const NEIGHBOR_SPLIT: usize = 5;

/// Flower-point summary of one snapshot.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowerStats {
    pub total_points: usize,
    pub flower_points: Vec<usize>,
    /// Flowers with fewer than five neighbors.
    pub below_split: usize,
    /// Flowers with five or more neighbors.
    pub at_or_above_split: usize,
    pub bounding_extent: f64,
    /// Bounding extent divided by the flower count; absent without flowers.
    pub extent_per_flower: Option<f64>,
}

impl FlowerStats {
    pub fn from_graph(points: &PointSet, graph: &NeighborGraph) -> Self {
        Self::from_flowers(points, graph, flower_points(graph))
    }

    pub fn from_flowers(points: &PointSet, graph: &NeighborGraph, flowers: Vec<usize>) -> Self {
        let below_split = flowers
            .iter()
            .filter(|&&i| graph.neighbors(i).len() < NEIGHBOR_SPLIT)
            .count();
        let at_or_above_split = flowers.len() - below_split;
        let bounding_extent = points.bounding_extent();
        let extent_per_flower = if flowers.is_empty() {
            None
        } else {
            Some(bounding_extent / flowers.len() as f64)
        };
        Self {
            total_points: points.len(),
            flower_points: flowers,
            below_split,
            at_or_above_split,
            bounding_extent,
            extent_per_flower,
        }
    }

    pub fn flower_count(&self) -> usize {
        self.flower_points.len()
    }

    /// Fraction of the cloud made of flower points.
    pub fn flower_fraction(&self) -> f64 {
        if self.total_points == 0 {
            0.0
        } else {
            self.flower_points.len() as f64 / self.total_points as f64
        }
    }
}
