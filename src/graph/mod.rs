//! Neighbor graph and flower-structure detection.
//!
//! The classification report and the denoiser share this graph and this
//! flower predicate.

pub mod flower;
pub mod neighbors;

pub use flower::{flower_points, is_flower, is_flower_point, FLOWER_RATIO};
pub use neighbors::{Neighbor, NeighborGraph};
