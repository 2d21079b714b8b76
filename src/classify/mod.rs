//! Whole-cloud noise classification.
//!
//! - [`density`]: clean vs noisy from nearest-neighbor density statistics.
//! - [`noise_type`]: band vs distorted from the flower-point fraction.

pub mod density;
pub mod noise_type;

pub use density::{classify, classify_density, DensityStats};
pub use noise_type::{discriminate, noise_type, BAND_FLOWER_FRACTION};
