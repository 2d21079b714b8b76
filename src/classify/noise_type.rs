//! Band vs distorted split of a noisy cloud.

use crate::types::{Classification, NoiseType};
use log::debug;

/// Minimum flower fraction of a band-noisy cloud.
pub const BAND_FLOWER_FRACTION: f64 = 0.6;

/// Band when at least 60 % of the `total` points are flowers, distorted
/// otherwise. The comparison is strict: exactly 60 % is band noise.
pub fn discriminate(flower_count: usize, total: usize) -> NoiseType {
    if (flower_count as f64) < BAND_FLOWER_FRACTION * total as f64 {
        NoiseType::Distorted
    } else {
        NoiseType::Band
    }
}

/// Noise type of a classified cloud with `flower_count` flowers among
/// `total` points. Clean clouds skip the flower test.
pub fn noise_type(classification: Classification, flower_count: usize, total: usize) -> NoiseType {
    match classification {
        Classification::Clean => NoiseType::Clean,
        Classification::Noisy => {
            let verdict = discriminate(flower_count, total);
            debug!("noise_type flowers={flower_count}/{total} -> {verdict:?}");
            verdict
        }
    }
}
