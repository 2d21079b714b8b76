//! Flower-structure detection.
//!
//! A *flower* point sees all of its direct triangulation neighbors at
//! comparable distances: the farthest one is less than [`FLOWER_RATIO`] times
//! farther than the closest one. Band-noisy boundary samples keep this local
//! regularity for most points; outliers and structural distortion break it.

use super::neighbors::{Neighbor, NeighborGraph};

/// Maximum ratio between the farthest and the closest neighbor of a flower.
pub const FLOWER_RATIO: f64 = 5.0;

/// Starting value of the running minimum distance.
const SMALL_SENTINEL: f64 = 1e7;

/// Flower predicate over one neighbor list.
///
/// The running extrema start at `big = 0` and `small = 1e7`, so a point with
/// no neighbors at all is reported as a flower.
pub fn is_flower(neighbors: &[Neighbor]) -> bool {
    let mut big = 0.0f64;
    let mut small = SMALL_SENTINEL;
    for nb in neighbors {
        big = big.max(nb.distance);
        small = small.min(nb.distance);
    }
    big < FLOWER_RATIO * small
}

/// Flower predicate for point `index` of `graph`.
pub fn is_flower_point(graph: &NeighborGraph, index: usize) -> bool {
    is_flower(graph.neighbors(index))
}

/// Indices (ascending) of every flower point in `graph`.
pub fn flower_points(graph: &NeighborGraph) -> Vec<usize> {
    (0..graph.len())
        .filter(|&i| is_flower_point(graph, i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PointSet;

    fn nbs(distances: &[f64]) -> Vec<Neighbor> {
        distances
            .iter()
            .enumerate()
            .map(|(index, &distance)| Neighbor { index, distance })
            .collect()
    }

    #[test]
    fn equal_distances_form_a_flower() {
        assert!(is_flower(&nbs(&[1.5, 1.5, 1.5, 1.5])));
    }

    #[test]
    fn five_fold_spread_is_not_a_flower() {
        assert!(!is_flower(&nbs(&[1.0, 2.0, 5.0])));
        assert!(!is_flower(&nbs(&[1.0, 7.5])));
        assert!(is_flower(&nbs(&[1.0, 4.999])));
    }

    #[test]
    fn empty_neighborhood_counts_as_flower() {
        assert!(is_flower(&[]));
    }

    #[test]
    fn far_point_breaks_its_neighbors() {
        // Unit square plus a far point: the corners adjacent to it see one
        // short and one very long edge.
        let set = PointSet::from_xy(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [40.0, 0.5]]);
        let graph = NeighborGraph::build(&set).expect("triangulation");
        let flowers = flower_points(&graph);
        assert!(!flowers.contains(&1));
        assert!(!flowers.contains(&2));
        assert!(flowers.windows(2).all(|w| w[0] < w[1]));
    }
}
