#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod classify;
pub mod config;
pub mod denoise;
pub mod diagnostics;
pub mod error;
pub mod graph;
pub mod io;
pub mod pipeline;
pub mod types;

// Numeric helpers shared by the classifier and the denoiser.
pub mod stats;

// --- High-level re-exports -------------------------------------------------

// Main entry points: pipeline + results.
pub use crate::denoise::{DenoiseParams, IterativeDenoiser};
pub use crate::error::DenoiseError;
pub use crate::pipeline::{DenoisePipeline, Inspection, PipelineOutcome};
pub use crate::types::{Classification, NoiseType, Point, PointSet};

// Graph and diagnostics returned by the pipeline.
pub use crate::diagnostics::PipelineReport;
pub use crate::graph::NeighborGraph;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use cloud_denoise::prelude::*;
///
/// # fn main() -> Result<(), DenoiseError> {
/// let points: PointSet = (0..100)
///     .map(|k| {
///         let t = k as f64 * std::f64::consts::TAU / 100.0;
///         Point::new(10.0 * t.cos(), 10.0 * t.sin())
///     })
///     .collect();
///
/// let report = DenoisePipeline::new(DenoiseParams::default()).run(&points)?;
/// println!("{:?} / {:?}", report.classification, report.noise_type);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::{
        Classification, DenoiseError, DenoiseParams, DenoisePipeline, NoiseType, Point, PointSet,
    };
}
